//! Filesystem-derived documentation counts

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Directory holding one sub-directory per skill
pub const SKILLS_DIR: &str = "skills";

/// Directory holding project workflow commands
pub const COMMANDS_DIR: &str = "commands/project";

/// Counts derived from the repository tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocCounts {
    /// Skill directories containing a SKILL.md
    pub skills: usize,
    /// Workflow command markdown files
    pub workflows: usize,
    /// Reference markdown files under any `references/` directory
    pub reference_files: usize,
}

impl DocCounts {
    /// Compute all counts from the tree rooted at `base`
    ///
    /// Missing directories count as zero; they are not an error.
    pub fn compute(base: &Path) -> Self {
        Self {
            skills: count_skills(base),
            workflows: count_workflows(base),
            reference_files: count_references(base),
        }
    }
}

/// Count skill directories that contain a SKILL.md file
fn count_skills(base: &Path) -> usize {
    let skills_dir = base.join(SKILLS_DIR);
    let Ok(entries) = fs::read_dir(&skills_dir) else {
        return 0;
    };
    entries
        .flatten()
        .filter(|e| e.path().is_dir() && e.path().join("SKILL.md").exists())
        .count()
}

/// Count reference markdown files anywhere under the skills tree
fn count_references(base: &Path) -> usize {
    markdown_files(&base.join(SKILLS_DIR))
        .filter(|path| {
            path.parent()
                .and_then(|p| p.file_name())
                .is_some_and(|name| name == "references")
        })
        .count()
}

/// Count workflow command markdown files
fn count_workflows(base: &Path) -> usize {
    markdown_files(&base.join(COMMANDS_DIR)).count()
}

fn markdown_files(root: &Path) -> impl Iterator<Item = std::path::PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
}
