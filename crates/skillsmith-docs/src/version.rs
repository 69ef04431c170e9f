//! version.json handling

use crate::counts::DocCounts;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Contents of version.json
///
/// Keys other than the version and counts are carried through a rewrite
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Release version quoted in docs and manifests
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(rename = "skillCount", default, skip_serializing_if = "Option::is_none")]
    pub skill_count: Option<usize>,

    #[serde(
        rename = "workflowCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub workflow_count: Option<usize>,

    #[serde(
        rename = "referenceFileCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reference_file_count: Option<usize>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_version() -> String {
    "0.0.0".to_string()
}

impl VersionInfo {
    /// Load version.json from `path`
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("{} not found", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Write back with two-space indentation and a trailing newline
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// True when the stored counts differ from the computed ones
    pub fn counts_stale(&self, counts: &DocCounts) -> bool {
        self.skill_count != Some(counts.skills)
            || self.workflow_count != Some(counts.workflows)
            || self.reference_file_count != Some(counts.reference_files)
    }

    /// Replace the stored counts with the computed ones
    pub fn apply_counts(&mut self, counts: &DocCounts) {
        self.skill_count = Some(counts.skills);
        self.workflow_count = Some(counts.workflows);
        self.reference_file_count = Some(counts.reference_files);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("version.json");
        fs::write(
            &path,
            r#"{"version": "0.4.1", "skillCount": 65, "releaseName": "autumn"}"#,
        )
        .unwrap();

        let mut info = VersionInfo::load(&path).unwrap();
        assert_eq!(info.version, "0.4.1");
        assert_eq!(info.skill_count, Some(65));

        info.apply_counts(&DocCounts {
            skills: 66,
            workflows: 9,
            reference_files: 355,
        });
        info.save(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"releaseName\": \"autumn\""));
        assert!(content.contains("\"skillCount\": 66"));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_version_defaults_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("version.json");
        fs::write(&path, r#"{"skillCount": 1}"#).unwrap();
        let info = VersionInfo::load(&path).unwrap();
        assert_eq!(info.version, "0.0.0");
    }

    #[test]
    fn test_counts_stale() {
        let info = VersionInfo {
            version: "1.0.0".into(),
            skill_count: Some(65),
            workflow_count: Some(9),
            reference_file_count: Some(355),
            extra: serde_json::Map::new(),
        };
        let same = DocCounts {
            skills: 65,
            workflows: 9,
            reference_files: 355,
        };
        let different = DocCounts {
            skills: 66,
            ..same
        };
        assert!(!info.counts_stale(&same));
        assert!(info.counts_stale(&different));
    }
}
