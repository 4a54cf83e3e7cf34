//! Small text helpers shared by the UI and the plain-text printer.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Truncate a string to at most `max` terminal columns.
///
/// Inputs:
/// - `s`: Text to fit; may contain wide (CJK) characters
/// - `max`: Column budget
///
/// Output:
/// - `s` unchanged when it fits, otherwise a prefix followed by `…` within `max` columns
///
/// Details:
/// - Counts display columns, not bytes or chars, so a CJK character uses two columns
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let budget = max - 1;
    let mut used = 0usize;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Display width of `s` in terminal columns.
#[must_use]
pub fn display_width(s: &str) -> usize {
    s.width()
}
