//! The synchronization run

use crate::counts::DocCounts;
use crate::update;
use crate::version::VersionInfo;
use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

/// Options for one synchronization run
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Report drift without writing; exit status reflects sync state
    pub check: bool,
    /// Report would-be changes without writing
    pub dry_run: bool,
    /// Repository root containing version.json and the target files
    pub root: PathBuf,
}

/// What a synchronization run found
#[derive(Debug, Clone, Copy)]
pub struct SyncReport {
    /// Target files that changed (or would change)
    pub files_changed: usize,
    /// version.json counts differed from the computed ones
    pub version_stale: bool,
}

impl SyncReport {
    /// True when anything differed from the on-disk state
    pub fn out_of_sync(&self) -> bool {
        self.files_changed > 0 || self.version_stale
    }
}

/// Recompute counts, reconcile version.json, and rewrite every target file
///
/// A missing version.json is fatal; missing target files are skipped.
pub fn sync_docs(opts: &SyncOptions) -> Result<SyncReport> {
    let version_path = opts.root.join("version.json");
    let mut info = VersionInfo::load(&version_path)?;
    debug!("Loaded {}", version_path.display());

    println!("Computing counts...");
    let counts = DocCounts::compute(&opts.root);
    println!("  Skills: {}", counts.skills);
    println!("  Workflows: {}", counts.workflows);
    println!("  Reference files: {}", counts.reference_files);

    let version_stale = info.counts_stale(&counts);
    if version_stale {
        info.apply_counts(&counts);
        if opts.dry_run {
            println!("\nWould update version.json");
        } else if !opts.check {
            info.save(&version_path)?;
            println!("\nUpdated version.json");
        }
    }

    println!("\nUpdating files with version {}...", info.version);
    let preview = opts.dry_run || opts.check;
    let mut files_changed = 0;
    for (rel, kind) in update::TARGETS {
        if update::update_file(&opts.root.join(rel), *kind, &info.version, &counts, preview)? {
            files_changed += 1;
        }
    }

    println!(
        "\n{} {files_changed} files",
        if preview { "Would update" } else { "Updated" }
    );

    Ok(SyncReport {
        files_changed,
        version_stale,
    })
}
