//! Related-skill extraction from the document body
//!
//! Display names appear as bold text inside the `## Related Skills`
//! section. Each is normalized to its directory-name form and filtered
//! against the set of skills that actually exist on disk.

use regex::Regex;
use skillsmith_types::MigrateError;
use std::collections::HashSet;

/// Extract related skill names from the `## Related Skills` body section
///
/// Bold display names (e.g. `**Fullstack Guardian**`) are lowercased with
/// spaces replaced by hyphens, then kept only when present in `valid`.
/// Returns a comma-separated string in extraction order, or an empty
/// string when the section is absent or nothing survives the filter.
/// Repeated display names are kept as-is.
pub fn extract_related_skills(
    body: &str,
    valid: &HashSet<String>,
) -> Result<String, MigrateError> {
    let section_re = Regex::new(r"(?s)## Related Skills\s*\n(.*)")?;
    let Some(tail) = section_re.captures(body).and_then(|c| c.get(1)) else {
        return Ok(String::new());
    };

    // The section runs to the next top-level heading or end of text.
    let tail = tail.as_str();
    let section = match tail.find("\n## ") {
        Some(end) => &tail[..end],
        None => tail,
    };

    let bold_re = Regex::new(r"\*\*(.+?)\*\*")?;
    let mut related = Vec::new();
    for caps in bold_re.captures_iter(section) {
        if let Some(display) = caps.get(1) {
            let dir_name = display.as_str().to_lowercase().replace(' ', "-");
            if valid.contains(&dir_name) {
                related.push(dir_name);
            }
        }
    }

    Ok(related.join(", "))
}
