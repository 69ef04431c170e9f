//! Documentation synchronizer CLI
//!
//! Recomputes skill/workflow/reference counts from the tree, reconciles
//! version.json, and substitutes version and counts into publish-facing
//! files. `--check` is for CI: it writes nothing and fails when anything
//! is out of sync.

use anyhow::Result;
use clap::Parser;
use skillsmith_docs::{sync_docs, SyncOptions, SyncReport};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "skillsmith-docs")]
#[command(about = "Update documentation files with version and counts from version.json")]
#[command(version)]
struct Cli {
    /// Check if files are in sync (exit 1 if not)
    #[arg(long)]
    check: bool,

    /// Show what would change without making changes
    #[arg(long)]
    dry_run: bool,

    /// Repository root containing version.json
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Log filter when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(report) => {
            if cli.check && report.out_of_sync() {
                println!("\nFiles are out of sync. Run 'skillsmith-docs' to update.");
                return ExitCode::FAILURE;
            }
            println!("\nDone!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<SyncReport> {
    skillsmith_logging::init_logging(&cli.log_level)?;

    sync_docs(&SyncOptions {
        check: cli.check,
        dry_run: cli.dry_run,
        root: cli.root.clone(),
    })
}
