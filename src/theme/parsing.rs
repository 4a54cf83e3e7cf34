//! Small helpers shared by the config parsers.

/// What: Remove trailing inline comments from a `key = value` value.
///
/// Inputs:
/// - `s`: Raw value portion
///
/// Output:
/// - Comment-free & trimmed substring of the input
///
/// Details:
/// - Strips ` #` and ` //` comments only when preceded by whitespace, so URLs such as
///   `http://host/api` and fragments like `a#b` survive
pub(super) fn strip_inline_comment(s: &str) -> &str {
    let mut end = s.len();
    for marker in [" #", "\t#", " //", "\t//"] {
        if let Some(i) = s.find(marker) {
            end = end.min(i);
        }
    }
    s[..end].trim()
}
