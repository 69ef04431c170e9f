//! Per-file version/count substitutions
//!
//! Each target file keeps its own formatting; only the quoted numbers and
//! version strings are rewritten in place.

use crate::counts::DocCounts;
use anyhow::Result;
use regex::{NoExpand, Regex};
use std::fs;
use std::path::Path;

/// How a target file is rewritten
#[derive(Debug, Clone, Copy)]
pub enum FileKind {
    /// Plugin and marketplace manifests
    Json,
    /// README-style docs
    Markdown,
    /// The social preview page
    Html,
}

/// Files to update, relative to the repository root
pub const TARGETS: &[(&str, FileKind)] = &[
    (".claude-plugin/plugin.json", FileKind::Json),
    (".claude-plugin/marketplace.json", FileKind::Json),
    ("README.md", FileKind::Markdown),
    ("QUICKSTART.md", FileKind::Markdown),
    ("ROADMAP.md", FileKind::Markdown),
    ("assets/social-preview.html", FileKind::Html),
];

/// Rewrite one target file; returns whether it changed (or would)
///
/// A missing target is skipped with a note, not an error.
pub fn update_file(
    path: &Path,
    kind: FileKind,
    version: &str,
    counts: &DocCounts,
    dry_run: bool,
) -> Result<bool> {
    if !path.exists() {
        println!("  Skipping {} (not found)", path.display());
        return Ok(false);
    }

    let original = fs::read_to_string(path)?;
    let updated = match kind {
        FileKind::Json => apply_json(&original, version, counts)?,
        FileKind::Markdown => apply_markdown(&original, version, counts)?,
        FileKind::Html => apply_html(&original, counts)?,
    };

    if updated == original {
        return Ok(false);
    }
    if dry_run {
        println!("  Would update {}", path.display());
    } else {
        fs::write(path, updated)?;
        println!("  Updated {}", path.display());
    }
    Ok(true)
}

fn replace(content: String, pattern: &str, replacement: &str) -> Result<String> {
    let re = Regex::new(pattern)?;
    Ok(re.replace_all(&content, NoExpand(replacement)).into_owned())
}

fn apply_json(content: &str, version: &str, counts: &DocCounts) -> Result<String> {
    let mut out = content.to_string();
    out = replace(
        out,
        r#""version":\s*"[^"]*""#,
        &format!(r#""version": "{version}""#),
    )?;
    out = replace(
        out,
        r"(\d+)\s+specialized\s+skills",
        &format!("{} specialized skills", counts.skills),
    )?;
    out = replace(
        out,
        r"(\d+)\s+project\s+workflow\s+commands",
        &format!("{} project workflow commands", counts.workflows),
    )?;
    Ok(out)
}

fn apply_markdown(content: &str, version: &str, counts: &DocCounts) -> Result<String> {
    let mut out = content.to_string();
    // Version badge, e.g. version-0.4.1-blue.svg
    out = replace(
        out,
        r"version-[\d.]+-blue\.svg",
        &format!("version-{version}-blue.svg"),
    )?;
    out = replace(
        out,
        r"\*\*Version:\*\*\s*v[\d.]+",
        &format!("**Version:** v{version}"),
    )?;
    out = replace(
        out,
        r"(\d+)\s+[Ss]kills",
        &format!("{} Skills", counts.skills),
    )?;
    out = replace(
        out,
        r"(\d+)\s+specialized\s+skills",
        &format!("{} specialized skills", counts.skills),
    )?;
    out = replace(
        out,
        r"(\d+)\s+[Ww]orkflows",
        &format!("{} Workflows", counts.workflows),
    )?;
    out = replace(
        out,
        r"(\d+)\s+project\s+workflow\s+commands",
        &format!("{} project workflow commands", counts.workflows),
    )?;
    out = replace(
        out,
        r"(\d+)\s+[Rr]eference\s+[Ff]iles",
        &format!("{} Reference Files", counts.reference_files),
    )?;
    Ok(out)
}

fn apply_html(content: &str, counts: &DocCounts) -> Result<String> {
    let mut out = content.to_string();
    out = replace(
        out,
        r">(\d+)\s+[Ss]kills<",
        &format!(">{} Skills<", counts.skills),
    )?;
    out = replace(
        out,
        r">(\d+)\s+[Ww]orkflows<",
        &format!(">{} Workflows<", counts.workflows),
    )?;
    out = replace(
        out,
        r">(\d+)\s+[Rr]eference\s+[Ff]iles<",
        &format!(">{} Reference Files<", counts.reference_files),
    )?;
    Ok(out)
}
