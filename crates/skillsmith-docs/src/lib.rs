//! Documentation synchronizer
//!
//! Publish-facing files (README, plugin manifests, the social preview)
//! quote the version and the number of skills, workflows, and reference
//! files. Those numbers live on disk; this crate recomputes them, updates
//! `version.json`, and substitutes them into each target file. A check
//! mode reports drift without writing.

pub mod counts;
pub mod sync;
pub mod update;
pub mod version;

pub use counts::DocCounts;
pub use sync::{sync_docs, SyncOptions, SyncReport};
pub use version::VersionInfo;
