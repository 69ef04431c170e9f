//! Skill directory discovery
//!
//! A skill is a sub-directory of the skills root; hidden entries are
//! ignored. Whether a directory actually contains a SKILL.md is checked
//! per skill during migration, so a missing file surfaces as a recorded
//! failure instead of silently shrinking the set.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// List skill directories under `root`, sorted by name
pub fn skill_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("Skills directory not found: {}", root.display()))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        dirs.push(path);
    }
    dirs.sort();
    Ok(dirs)
}

/// The set of all valid skill directory names under `root`
///
/// Used to filter extracted related-skill names; built once per run and
/// never mutated.
pub fn skill_name_set(root: &Path) -> Result<HashSet<String>> {
    Ok(skill_dirs(root)?
        .iter()
        .filter_map(|dir| dir.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect())
}
