//! Commit message formatting

use crate::commit::CommitFields;

/// Footer appended to breaking commits
pub const BREAKING_FOOTER: &str = "BREAKING CHANGE: This commit introduces breaking changes";

/// Header line: `type[!][(scope)]: description`
pub fn format_header(fields: &CommitFields) -> String {
    let bang = if fields.breaking { "!" } else { "" };
    match fields.scope.as_deref() {
        Some(scope) if !scope.is_empty() => format!(
            "{}{}({}): {}",
            fields.commit_type, bang, scope, fields.description
        ),
        _ => format!("{}{}: {}", fields.commit_type, bang, fields.description),
    }
}

/// Full message text.
///
/// The body is copied verbatim; its line breaks are never re-wrapped.
pub fn format_message(fields: &CommitFields) -> String {
    let mut parts = vec![format_header(fields)];

    if let Some(body) = fields.body.as_deref().filter(|b| !b.is_empty()) {
        parts.push(String::new());
        parts.push(body.to_string());
    }

    if fields.breaking {
        parts.push(String::new());
        parts.push(BREAKING_FOOTER.to_string());
    }

    parts.join("\n")
}
