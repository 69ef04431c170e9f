//! Error taxonomy for per-skill migration failures

use thiserror::Error;

/// Why a single skill could not be migrated
///
/// These are recorded per skill and never abort the pass; the run surfaces
/// aggregate failure through its exit status once every skill has been
/// attempted.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// The skill directory has no SKILL.md
    #[error("SKILL.md not found")]
    MissingFile,

    /// The file does not start with a frontmatter block, or the closing
    /// delimiter is missing
    #[error("No valid frontmatter found")]
    NoFrontmatter,

    /// A required frontmatter field is absent
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    /// The frontmatter block is not parseable YAML
    #[error("Invalid frontmatter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A scan pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Reading or writing the skill file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
