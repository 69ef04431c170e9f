//! Related-skills splice into an existing header
//!
//! Unlike the first migration pass, this edits the header textually
//! instead of rebuilding it. Every other line of the original header must
//! survive byte-identical, so re-running is safe regardless of how the
//! header was produced.

/// Splice a `related-skills` entry into an existing metadata block
///
/// The new line lands immediately after the `output-format` line when one
/// exists, otherwise after the last indented `key:` line found scanning
/// backward from the end of the header. Returns the content unchanged when
/// the header is missing, a `related-skills` line is already present, or
/// no insertion point exists.
pub fn insert_related_skills(content: &str, related: &str) -> String {
    let Some(rest) = content.strip_prefix("---") else {
        return content.to_string();
    };
    let Some(end) = rest.find("---") else {
        return content.to_string();
    };
    let header = &rest[..end];
    let body = &rest[end + 3..];

    if header.contains("  related-skills:") {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut inserted = false;

    for line in header.split('\n') {
        lines.push(line.to_string());
        if !inserted && line.trim_start().starts_with("output-format:") {
            lines.push(format!("  related-skills: {related}"));
            inserted = true;
        }
    }

    if !inserted {
        // No output-format line; fall back to the last indented metadata
        // field and insert after it.
        for i in (0..lines.len()).rev() {
            if lines[i].starts_with("  ") && lines[i].contains(':') {
                lines.insert(i + 1, format!("  related-skills: {related}"));
                break;
            }
        }
    }

    format!("---{}---{}", lines.join("\n"), body)
}
