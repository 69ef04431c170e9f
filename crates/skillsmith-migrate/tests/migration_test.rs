//! End-to-end migration tests over on-disk skill trees

use skillsmith_migrate::{Migrator, RunOptions};
use skillsmith_types::{DomainMap, MigrateError, MigrationOutcome};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const REACT_SKILL: &str = r#"---
name: react-expert
description: Expert React development with hooks and context
triggers:
  - react
  - hooks
  - jsx
role: Senior React engineer
scope: frontend
output-format: markdown
---

# React Expert

Guidance for React work.

## Related Skills

- **Vue Expert** for alternative frameworks
- **Fullstack Guardian** for security review
- **Nonexistent Tool** that was never written
"#;

const VUE_SKILL: &str = r#"---
name: vue-expert
description: Vue development
triggers:
  - vue
---

# Vue Expert
"#;

fn write_skill(root: &Path, name: &str, content: &str) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("SKILL.md"), content).unwrap();
}

fn read_skill(root: &Path, name: &str) -> String {
    fs::read_to_string(root.join(name).join("SKILL.md")).unwrap()
}

fn fixture() -> TempDir {
    let root = TempDir::new().unwrap();
    write_skill(root.path(), "react-expert", REACT_SKILL);
    write_skill(root.path(), "vue-expert", VUE_SKILL);
    write_skill(root.path(), "fullstack-guardian", VUE_SKILL);
    root
}

fn migrator(root: &TempDir) -> Migrator {
    Migrator::new(root.path(), DomainMap::builtin())
}

#[test]
fn test_full_migration_rewrites_frontmatter() {
    let root = fixture();
    let summary = migrator(&root)
        .run_migration(&RunOptions::default())
        .unwrap();
    assert_eq!(summary.migrated, 3);
    assert_eq!(summary.failed, 0);

    let migrated = read_skill(root.path(), "react-expert");
    assert!(migrated.starts_with("---\nname: react-expert\n"));
    assert!(migrated.contains("license: MIT\nmetadata:\n"));
    assert!(migrated.contains("  domain: frontend\n"));
    assert!(migrated.contains("  triggers: react, hooks, jsx\n"));
    assert!(migrated.contains("  output-format: markdown\n---"));
    // Body survives the rebuild untouched.
    assert!(migrated.ends_with("- **Nonexistent Tool** that was never written\n"));
}

#[test]
fn test_migration_is_idempotent() {
    let root = fixture();
    let m = migrator(&root);
    m.run_migration(&RunOptions::default()).unwrap();
    let first = read_skill(root.path(), "react-expert");

    let summary = m.run_migration(&RunOptions::default()).unwrap();
    assert_eq!(summary.skipped, 3);
    assert_eq!(summary.migrated, 0);
    assert_eq!(first, read_skill(root.path(), "react-expert"));
}

#[test]
fn test_missing_required_field_leaves_file_unmodified() {
    let root = TempDir::new().unwrap();
    let no_triggers = "---\nname: broken\ndescription: No triggers here\n---\nbody\n";
    write_skill(root.path(), "broken", no_triggers);

    let m = migrator(&root);
    let outcome = m.migrate_skill(&root.path().join("broken"), false);
    assert!(matches!(
        outcome,
        MigrationOutcome::Failed(MigrateError::MissingField("triggers"))
    ));

    let summary = m.run_migration(&RunOptions::default()).unwrap();
    assert_eq!(summary.failed, 1);
    assert!(summary.has_failures());
    assert_eq!(read_skill(root.path(), "broken"), no_triggers);
}

#[test]
fn test_missing_file_and_missing_frontmatter_are_recorded() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("empty-dir")).unwrap();
    write_skill(root.path(), "no-header", "# No frontmatter at all\n");

    let summary = migrator(&root)
        .run_migration(&RunOptions::default())
        .unwrap();
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.total, 2);
}

#[test]
fn test_unmapped_skill_migrates_with_unknown_domain() {
    let root = TempDir::new().unwrap();
    write_skill(root.path(), "mystery-skill", VUE_SKILL);

    let summary = migrator(&root)
        .run_migration(&RunOptions::default())
        .unwrap();
    assert_eq!(summary.migrated, 1);
    assert!(read_skill(root.path(), "mystery-skill").contains("  domain: unknown\n"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let root = fixture();
    let opts = RunOptions {
        dry_run: true,
        skill: None,
    };
    let summary = migrator(&root).run_migration(&opts).unwrap();
    assert_eq!(summary.migrated, 3);
    assert_eq!(read_skill(root.path(), "react-expert"), REACT_SKILL);
}

#[test]
fn test_single_skill_selection() {
    let root = fixture();
    let opts = RunOptions {
        dry_run: false,
        skill: Some("vue-expert".into()),
    };
    let summary = migrator(&root).run_migration(&opts).unwrap();
    assert_eq!(summary.total, 1);
    // The others are untouched.
    assert_eq!(read_skill(root.path(), "react-expert"), REACT_SKILL);
}

#[test]
fn test_unknown_skill_selection_is_fatal() {
    let root = fixture();
    let opts = RunOptions {
        dry_run: false,
        skill: Some("no-such-skill".into()),
    };
    assert!(migrator(&root).run_migration(&opts).is_err());
}

#[test]
fn test_related_pass_splices_filtered_names() {
    let root = fixture();
    let m = migrator(&root);
    m.run_migration(&RunOptions::default()).unwrap();

    let before = read_skill(root.path(), "react-expert");
    let summary = m.run_related(&RunOptions::default()).unwrap();
    assert_eq!(summary.migrated, 3);

    let after = read_skill(root.path(), "react-expert");
    assert!(after.contains(
        "  output-format: markdown\n  related-skills: vue-expert, fullstack-guardian\n---"
    ));

    // Every original line survives byte-identical.
    let original: Vec<&str> = before.lines().collect();
    let spliced: Vec<&str> = after
        .lines()
        .filter(|l| !l.starts_with("  related-skills:"))
        .collect();
    assert_eq!(original, spliced);
}

#[test]
fn test_related_pass_is_idempotent() {
    let root = fixture();
    let m = migrator(&root);
    m.run_migration(&RunOptions::default()).unwrap();
    m.run_related(&RunOptions::default()).unwrap();
    let first = read_skill(root.path(), "react-expert");

    let summary = m.run_related(&RunOptions::default()).unwrap();
    assert_eq!(summary.skipped, 3);
    assert_eq!(first, read_skill(root.path(), "react-expert"));
}

#[test]
fn test_related_pass_without_section_records_empty_value() {
    let root = fixture();
    let m = migrator(&root);
    m.run_migration(&RunOptions::default()).unwrap();
    m.run_related(&RunOptions::default()).unwrap();

    // vue-expert has no Related Skills section; the key is still spliced in
    // with an empty value so the pass stays idempotent.
    let vue = read_skill(root.path(), "vue-expert");
    assert!(vue.contains("\n  related-skills: \n"));
}

#[test]
fn test_related_pass_on_flat_header_finds_no_insertion_point() {
    // A pre-migration header has no indented `key:` line, so the splice
    // has nowhere to land and the file round-trips unchanged.
    let root = TempDir::new().unwrap();
    let flat = "---\nname: solo\ndescription: d\ntriggers:\n  - t\n---\n\n## Related Skills\n\n- **Solo**\n";
    write_skill(root.path(), "solo", flat);

    let summary = migrator(&root).run_related(&RunOptions::default()).unwrap();
    assert_eq!(summary.migrated, 1);
    assert_eq!(read_skill(root.path(), "solo"), flat);
}
