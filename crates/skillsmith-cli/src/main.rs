//! Frontmatter migration CLI
//!
//! The default action rebuilds every skill's frontmatter (Pass A);
//! `--related-skills` runs the independent related-skills pass (Pass B)
//! instead. Both combine with `--dry-run` and `--skill`.

use anyhow::Result;
use clap::Parser;
use skillsmith_migrate::{Migrator, RunOptions};
use skillsmith_types::DomainMap;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "skillsmith")]
#[command(about = "Migrate skill SKILL.md frontmatter to the Agent Skills layout")]
#[command(version)]
struct Cli {
    /// Preview changes without writing files
    #[arg(long)]
    dry_run: bool,

    /// Migrate only the specified skill
    #[arg(long)]
    skill: Option<String>,

    /// Add related-skills metadata extracted from the ## Related Skills body section
    #[arg(long)]
    related_skills: bool,

    /// Root directory containing one sub-directory per skill
    #[arg(long, default_value = "skills")]
    skills_dir: PathBuf,

    /// Log filter when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    skillsmith_logging::init_logging(&cli.log_level)?;

    let migrator = Migrator::new(cli.skills_dir.clone(), DomainMap::builtin());
    let opts = RunOptions {
        dry_run: cli.dry_run,
        skill: cli.skill.clone(),
    };

    let summary = if cli.related_skills {
        migrator.run_related(&opts)?
    } else {
        migrator.run_migration(&opts)?
    };

    Ok(!summary.has_failures())
}
