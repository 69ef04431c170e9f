//! Migration orchestration over a skills collection
//!
//! Drives the two independent migration passes across every skill
//! directory (or a single named one):
//!
//! - Pass A rebuilds each SKILL.md frontmatter into the spec-compliant
//!   layout; a file whose frontmatter already carries a `metadata` group
//!   is skipped.
//! - Pass B extracts related skills from the body and splices a
//!   `related-skills` line into the existing header; a header that
//!   already carries one is skipped.
//!
//! Skills are processed sequentially in name order. Per-skill failures
//! are recorded and never halt the pass; the caller turns aggregate
//! failure into a nonzero exit status once the whole set was attempted.

pub mod discover;
pub mod migrator;

pub use migrator::{Migrator, RunOptions};
