//! SKILL.md frontmatter engine
//!
//! Parses the YAML frontmatter block at the head of a SKILL.md file,
//! rebuilds it in the spec-compliant field order, and extracts related
//! skills from the document body.
//!
//! ## Parsing strategies
//!
//! Two interchangeable strategies read the header block:
//! - [`ParserStrategy::Yaml`] delegates to a full YAML reader
//! - [`ParserStrategy::Scan`] is a line-oriented scanner covering exactly
//!   the scalar and single-level list shapes this tool emits and consumes
//!
//! Both produce the same mapping for that subset, so either can drive the
//! migration.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod builder;
pub mod parser;
pub mod related;
pub mod splice;

pub use builder::build_frontmatter;
pub use parser::{HeaderParser, ParserStrategy};
pub use related::extract_related_skills;
pub use splice::insert_related_skills;
