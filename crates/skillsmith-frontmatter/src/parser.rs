//! Dual-mode frontmatter parsing
//!
//! Splits a SKILL.md file into its frontmatter mapping and body. The
//! header block is delimited by a leading `---` and the next `---`
//! occurrence; a file without both delimiters has no frontmatter.

use skillsmith_types::{FieldValue, Frontmatter, MigrateError};
use std::collections::HashMap;

/// Strategy for reading the header block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserStrategy {
    /// Full YAML reader
    #[default]
    Yaml,
    /// Line-oriented scanner for the scalar/list subset this tool emits
    Scan,
}

/// Splits a document into frontmatter fields and body
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderParser {
    strategy: ParserStrategy,
}

impl HeaderParser {
    /// Create a parser using the full YAML strategy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with an explicit strategy
    pub fn with_strategy(strategy: ParserStrategy) -> Self {
        Self { strategy }
    }

    /// Parse a document into its frontmatter mapping and remaining body
    ///
    /// Returns `Ok(None)` when the text does not begin with the `---`
    /// delimiter or the closing delimiter never occurs. An empty header
    /// block yields an empty mapping, never a failure. Malformed YAML
    /// inside the delimiters is an error the caller records per skill.
    pub fn parse<'a>(
        &self,
        content: &'a str,
    ) -> Result<Option<(Frontmatter, &'a str)>, MigrateError> {
        let Some((header, body)) = split_document(content) else {
            return Ok(None);
        };
        let fields = match self.strategy {
            ParserStrategy::Yaml => parse_yaml(header)?,
            ParserStrategy::Scan => parse_scan(header),
        };
        Ok(Some((fields, body)))
    }
}

/// Split at the first two `---` occurrences
///
/// The body keeps everything after the closing delimiter verbatim,
/// including its leading newline, so rebuild-and-concatenate is
/// byte-exact.
fn split_document(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---")?;
    let end = rest.find("---")?;
    Some((&rest[..end], &rest[end + 3..]))
}

fn parse_yaml(header: &str) -> Result<Frontmatter, MigrateError> {
    let value: serde_yaml::Value = serde_yaml::from_str(header)?;
    let mut fields = Frontmatter::new();

    // An empty header parses as null; anything non-mapping carries no fields.
    let serde_yaml::Value::Mapping(mapping) = value else {
        return Ok(fields);
    };

    for (key, value) in &mapping {
        let Some(key) = scalar_string(key) else {
            continue;
        };
        match value {
            serde_yaml::Value::Sequence(items) => {
                let list = items.iter().filter_map(scalar_string).collect();
                fields.insert(key, FieldValue::List(list));
            }
            serde_yaml::Value::Mapping(inner) => {
                // One level deep is enough: only `metadata` nests, and only
                // key presence matters for the idempotency checks.
                let map: HashMap<String, String> = inner
                    .iter()
                    .filter_map(|(k, v)| {
                        scalar_string(k).map(|k| (k, scalar_string(v).unwrap_or_default()))
                    })
                    .collect();
                fields.insert(key, FieldValue::Map(map));
            }
            other => {
                if let Some(s) = scalar_string(other) {
                    fields.insert(key, FieldValue::Scalar(s));
                }
            }
        }
    }
    Ok(fields)
}

fn scalar_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Line-oriented fallback parser
///
/// Covers scalar `key: value` lines and single-level `key:` + `- item`
/// lists. Indented `key: value` lines (the migrated `metadata` group) are
/// not descended into; the bare `metadata:` key surfaces as an empty list,
/// which is all the idempotency check needs.
fn parse_scan(header: &str) -> Frontmatter {
    let mut fields = Frontmatter::new();
    let mut pending: Option<(String, Vec<String>)> = None;

    for line in header.trim().lines() {
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with("  - ") || line.starts_with("    - ") {
            if let Some((_, items)) = pending.as_mut() {
                let item = line.trim().trim_start_matches(['-', ' ']).trim();
                items.push(item.to_string());
            }
            continue;
        }
        if line.contains(':') && !line.starts_with(' ') {
            if let Some((key, items)) = pending.take() {
                fields.insert(key, FieldValue::List(items));
            }
            let (key, value) = line.split_once(':').unwrap_or((line, ""));
            let key = key.trim().to_string();
            let value = value.trim();
            if value.is_empty() {
                pending = Some((key, Vec::new()));
            } else {
                fields.insert(key, FieldValue::Scalar(value.to_string()));
            }
        }
    }
    if let Some((key, items)) = pending.take() {
        fields.insert(key, FieldValue::List(items));
    }
    fields
}
