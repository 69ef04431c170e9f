//! Canonical frontmatter construction
//!
//! Hand-builds the header text line by line so the emitted key order is
//! fixed; a YAML serializer would reorder keys and drift the formatting.

use skillsmith_types::{DomainMap, FieldValue, Frontmatter, MigrateError};

/// Characters in a description that force double-quoting
///
/// Downstream consumers rely on exactly this set; descriptions without any
/// of them are emitted unquoted.
const QUOTE_TRIGGERS: &str = ":#{}[]|>&*!%@`";

/// Author recorded on every migrated skill
const AUTHOR: &str = "https://github.com/Jeffallan";

/// Version stamped on every migrated skill
const VERSION: &str = "1.0.0";

/// Build the spec-compliant frontmatter block for a skill
///
/// Field order is fixed: `name`, `description`, `license`, `allowed-tools`
/// (when present), then the `metadata` group with `author`, `version`,
/// `domain`, `triggers`, and the relocated `role`/`scope`/`output-format`
/// fields. The `triggers` list is flattened to a comma-joined scalar.
///
/// The returned block ends with the closing `---` and no trailing newline;
/// the body split off by the parser keeps its leading newline, so the
/// caller concatenates the two directly.
pub fn build_frontmatter(
    fields: &Frontmatter,
    skill_name: &str,
    domains: &DomainMap,
) -> Result<String, MigrateError> {
    let mut lines: Vec<String> = vec!["---".into()];

    let name = fields
        .get("name")
        .ok_or(MigrateError::MissingField("name"))?;
    lines.push(format!("name: {}", name.to_line()));

    let desc = fields
        .get("description")
        .ok_or(MigrateError::MissingField("description"))?
        .to_line();
    if desc.chars().any(|c| QUOTE_TRIGGERS.contains(c)) {
        lines.push(format!("description: \"{desc}\""));
    } else {
        lines.push(format!("description: {desc}"));
    }

    lines.push("license: MIT".into());

    if let Some(tools) = fields.get("allowed-tools") {
        lines.push(format!("allowed-tools: {}", tools.to_line()));
    }

    lines.push("metadata:".into());
    lines.push(format!("  author: {AUTHOR}"));
    lines.push(format!("  version: \"{VERSION}\""));
    lines.push(format!("  domain: {}", domains.classify(skill_name)));

    let triggers = fields
        .get("triggers")
        .map(FieldValue::to_line)
        .unwrap_or_default();
    lines.push(format!("  triggers: {triggers}"));

    for key in ["role", "scope", "output-format"] {
        if let Some(value) = fields.get(key) {
            lines.push(format!("  {key}: {}", value.to_line()));
        }
    }

    lines.push("---".into());
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> Frontmatter {
        let mut fields = Frontmatter::new();
        fields.insert("name", FieldValue::Scalar("react-expert".into()));
        fields.insert(
            "description",
            FieldValue::Scalar("Expert React development".into()),
        );
        fields.insert(
            "triggers",
            FieldValue::List(vec!["react".into(), "hooks".into(), "jsx".into()]),
        );
        fields
    }

    #[test]
    fn test_field_order_and_flattened_triggers() {
        let header =
            build_frontmatter(&sample_fields(), "react-expert", &DomainMap::builtin()).unwrap();
        assert_eq!(
            header,
            "---\n\
             name: react-expert\n\
             description: Expert React development\n\
             license: MIT\n\
             metadata:\n\
             \x20\x20author: https://github.com/Jeffallan\n\
             \x20\x20version: \"1.0.0\"\n\
             \x20\x20domain: frontend\n\
             \x20\x20triggers: react, hooks, jsx\n\
             ---"
        );
    }

    #[test]
    fn test_description_quoted_when_special_chars_present() {
        let mut fields = sample_fields();
        fields.insert(
            "description",
            FieldValue::Scalar("React: hooks, context & more".into()),
        );
        let header =
            build_frontmatter(&fields, "react-expert", &DomainMap::builtin()).unwrap();
        assert!(header.contains("description: \"React: hooks, context & more\""));
    }

    #[test]
    fn test_description_unquoted_without_special_chars() {
        let header =
            build_frontmatter(&sample_fields(), "react-expert", &DomainMap::builtin()).unwrap();
        assert!(header.contains("description: Expert React development\n"));
        assert!(!header.contains("description: \""));
    }

    #[test]
    fn test_optional_fields_relocate_under_metadata() {
        let mut fields = sample_fields();
        fields.insert("role", FieldValue::Scalar("Senior React engineer".into()));
        fields.insert("scope", FieldValue::Scalar("frontend".into()));
        fields.insert("output-format", FieldValue::Scalar("markdown".into()));
        fields.insert("allowed-tools", FieldValue::Scalar("Read, Grep".into()));

        let header =
            build_frontmatter(&fields, "react-expert", &DomainMap::builtin()).unwrap();
        assert!(header.contains("\nallowed-tools: Read, Grep\nmetadata:"));
        assert!(header.contains("\n  role: Senior React engineer\n"));
        assert!(header.ends_with("  output-format: markdown\n---"));

        let role_pos = header.find("  role:").unwrap();
        let scope_pos = header.find("  scope:").unwrap();
        let output_pos = header.find("  output-format:").unwrap();
        assert!(role_pos < scope_pos && scope_pos < output_pos);
    }

    #[test]
    fn test_unmapped_skill_gets_unknown_domain() {
        let header =
            build_frontmatter(&sample_fields(), "mystery-skill", &DomainMap::builtin()).unwrap();
        assert!(header.contains("  domain: unknown\n"));
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let original =
            "---\nname: react-expert\ndescription: Expert React development\ntriggers:\n  - react\n  - hooks\n---\nbody";
        let parser = crate::parser::HeaderParser::new();
        let (fields, body) = parser.parse(original).unwrap().unwrap();
        let rebuilt =
            build_frontmatter(&fields, "react-expert", &DomainMap::builtin()).unwrap();

        let (reparsed, _) = parser
            .parse(&format!("{rebuilt}{body}"))
            .unwrap()
            .unwrap();
        assert_eq!(
            reparsed.get("name"),
            Some(&FieldValue::Scalar("react-expert".into()))
        );
        assert_eq!(
            reparsed.get("description"),
            Some(&FieldValue::Scalar("Expert React development".into()))
        );
        // The triggers list is preserved in order, now as a comma-joined
        // scalar under metadata.
        match reparsed.get("metadata") {
            Some(FieldValue::Map(map)) => {
                assert_eq!(map.get("triggers").map(String::as_str), Some("react, hooks"));
            }
            other => panic!("expected metadata mapping, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_name_is_reported() {
        let mut fields = sample_fields();
        let header = build_frontmatter(&fields, "x", &DomainMap::builtin());
        assert!(header.is_ok());

        fields = Frontmatter::new();
        fields.insert("description", FieldValue::Scalar("d".into()));
        let err = build_frontmatter(&fields, "x", &DomainMap::builtin()).unwrap_err();
        assert!(matches!(err, MigrateError::MissingField("name")));
    }
}
