//! The two migration passes

use anyhow::{bail, Result};
use skillsmith_frontmatter::{
    build_frontmatter, extract_related_skills, insert_related_skills, HeaderParser,
};
use skillsmith_types::{DomainMap, MigrateError, MigrationOutcome, RunSummary};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::discover;

/// Options for one pass over the skill set
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Parse and build everything, print previews, write nothing
    pub dry_run: bool,
    /// Restrict the pass to one named skill
    pub skill: Option<String>,
}

/// Drives the migration passes over a skills collection
pub struct Migrator {
    skills_dir: PathBuf,
    domains: DomainMap,
    parser: HeaderParser,
}

impl Migrator {
    /// Create a migrator rooted at `skills_dir`
    pub fn new(skills_dir: impl Into<PathBuf>, domains: DomainMap) -> Self {
        Self {
            skills_dir: skills_dir.into(),
            domains,
            parser: HeaderParser::new(),
        }
    }

    /// Override the header parsing strategy
    pub fn with_parser(mut self, parser: HeaderParser) -> Self {
        self.parser = parser;
        self
    }

    /// Pass A: rebuild every selected skill's frontmatter
    pub fn run_migration(&self, opts: &RunOptions) -> Result<RunSummary> {
        let dirs = self.selected_dirs(opts.skill.as_deref())?;
        self.warn_unmapped(&dirs);

        let mut summary = RunSummary::default();
        for dir in &dirs {
            let outcome = self.migrate_skill(dir, opts.dry_run);
            report_failure(dir, &outcome);
            summary.record(&outcome);
        }

        print_summary("Migration", "Migrated", opts.dry_run, &summary);
        Ok(summary)
    }

    /// Pass B: splice related-skills into every selected skill's header
    pub fn run_related(&self, opts: &RunOptions) -> Result<RunSummary> {
        let dirs = self.selected_dirs(opts.skill.as_deref())?;
        // The filter set always covers the whole collection, even when the
        // pass is restricted to a single skill.
        let valid = discover::skill_name_set(&self.skills_dir)?;

        let mut summary = RunSummary::default();
        for dir in &dirs {
            let outcome = self.related_skill(dir, &valid, opts.dry_run);
            report_failure(dir, &outcome);
            summary.record(&outcome);
        }

        print_summary("Related-skills migration", "Updated", opts.dry_run, &summary);
        Ok(summary)
    }

    fn selected_dirs(&self, skill: Option<&str>) -> Result<Vec<PathBuf>> {
        let dirs = discover::skill_dirs(&self.skills_dir)?;
        match skill {
            Some(name) => {
                let selected: Vec<PathBuf> = dirs
                    .into_iter()
                    .filter(|dir| skill_name(dir) == name)
                    .collect();
                if selected.is_empty() {
                    bail!("Skill not found: {name}");
                }
                Ok(selected)
            }
            None => Ok(dirs),
        }
    }

    /// Report skills that will fall back to the unknown domain
    fn warn_unmapped(&self, dirs: &[PathBuf]) {
        let unmapped: Vec<String> = dirs
            .iter()
            .map(|dir| skill_name(dir))
            .filter(|name| !self.domains.contains(name))
            .collect();
        if !unmapped.is_empty() {
            warn!(
                "Skills without domain mapping: {}. These will get domain 'unknown'.",
                unmapped.join(", ")
            );
        }
    }

    /// Pass A on a single skill directory
    pub fn migrate_skill(&self, dir: &Path, dry_run: bool) -> MigrationOutcome {
        match self.try_migrate(dir, dry_run) {
            Ok(outcome) => outcome,
            Err(e) => MigrationOutcome::Failed(e),
        }
    }

    fn try_migrate(&self, dir: &Path, dry_run: bool) -> Result<MigrationOutcome, MigrateError> {
        let name = skill_name(dir);
        let skill_md = dir.join("SKILL.md");
        if !skill_md.exists() {
            return Err(MigrateError::MissingFile);
        }

        let content = fs::read_to_string(&skill_md)?;
        let Some((fields, body)) = self.parser.parse(&content)? else {
            return Err(MigrateError::NoFrontmatter);
        };

        // The metadata group is the idempotency marker for this pass.
        if fields.contains("metadata") {
            debug!("{name}: already migrated");
            return Ok(MigrationOutcome::AlreadyMigrated);
        }

        for field in ["name", "description", "triggers"] {
            if !fields.contains(field) {
                return Err(MigrateError::MissingField(field));
            }
        }

        let header = build_frontmatter(&fields, &name, &self.domains)?;

        if dry_run {
            println!("\n{}", "=".repeat(60));
            println!("  {name}");
            println!("{}", "=".repeat(60));
            println!("{header}");
            return Ok(MigrationOutcome::WouldMigrate);
        }

        fs::write(&skill_md, format!("{header}{body}"))?;
        Ok(MigrationOutcome::Migrated)
    }

    /// Pass B on a single skill directory
    ///
    /// `valid` is the set of all skill directory names; extracted related
    /// names outside it are dropped.
    pub fn related_skill(
        &self,
        dir: &Path,
        valid: &HashSet<String>,
        dry_run: bool,
    ) -> MigrationOutcome {
        match self.try_related(dir, valid, dry_run) {
            Ok(outcome) => outcome,
            Err(e) => MigrationOutcome::Failed(e),
        }
    }

    fn try_related(
        &self,
        dir: &Path,
        valid: &HashSet<String>,
        dry_run: bool,
    ) -> Result<MigrationOutcome, MigrateError> {
        let name = skill_name(dir);
        let skill_md = dir.join("SKILL.md");
        if !skill_md.exists() {
            return Err(MigrateError::MissingFile);
        }

        let content = fs::read_to_string(&skill_md)?;
        let Some((fields, body)) = self.parser.parse(&content)? else {
            return Err(MigrateError::NoFrontmatter);
        };

        if fields.metadata_contains("related-skills") {
            debug!("{name}: already has related-skills");
            return Ok(MigrationOutcome::AlreadyMigrated);
        }

        let related = extract_related_skills(body, valid)?;
        let new_content = insert_related_skills(&content, &related);

        if dry_run {
            let shown = if related.is_empty() {
                "(empty)"
            } else {
                related.as_str()
            };
            println!("  {name}: related-skills: {shown}");
            return Ok(MigrationOutcome::WouldMigrate);
        }

        fs::write(&skill_md, new_content)?;
        Ok(MigrationOutcome::Migrated)
    }
}

/// A skill is identified by its containing directory's name
fn skill_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn report_failure(dir: &Path, outcome: &MigrationOutcome) {
    if let MigrationOutcome::Failed(e) = outcome {
        eprintln!("  FAIL: {}: {e}", skill_name(dir));
    }
}

fn print_summary(title: &str, migrated_label: &str, dry_run: bool, summary: &RunSummary) {
    println!();
    println!(
        "{title} {}:",
        if dry_run { "preview" } else { "complete" }
    );
    println!("  {:<10}{}", format!("{migrated_label}:"), summary.migrated);
    println!("  {:<10}{}", "Skipped:", summary.skipped);
    println!("  {:<10}{}", "Failed:", summary.failed);
    println!("  {:<10}{}", "Total:", summary.total);
}
