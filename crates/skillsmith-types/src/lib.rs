//! Skillsmith Types - Core types shared across the migration toolchain
//!
//! This crate defines the frontmatter data model, the skill-to-domain
//! classification table, per-skill migration outcomes, and the error
//! taxonomy used by the migrator.

pub mod domain;
pub mod error;
pub mod fields;
pub mod outcome;

pub use domain::{Domain, DomainMap};
pub use error::MigrateError;
pub use fields::{FieldValue, Frontmatter};
pub use outcome::{MigrationOutcome, RunSummary};
