//! Script detection and per-script name validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::api::NameError;
use crate::state::InputType;

/// CJK ideograph classes: Unified, Extension A, Compatibility.
const CJK_CLASS: &str = r"\x{4E00}-\x{9FFF}\x{3400}-\x{4DBF}\x{F900}-\x{FAFF}";

/// Any CJK ideograph.
static CJK_ANY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("[{CJK_CLASS}]")).expect("valid CJK pattern"));

/// Any Latin letter.
static LATIN_ANY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Za-z]").expect("valid Latin pattern"));

/// A whole Chinese name: 2 to 10 ideographs and nothing else.
static CHINESE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[{CJK_CLASS}]{{2,10}}$")).expect("valid Chinese name pattern")
});

/// A whole English name: 2 to 50 letters, spaces or hyphens.
static ENGLISH_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s-]{2,50}$").expect("valid English name pattern"));

/// Outcome of checking the current input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validation {
    /// Nothing typed yet; no marker.
    Empty,
    /// Classified and matching its script's pattern.
    Valid(InputType),
    /// Unclassifiable (`None`) or not matching its script's pattern.
    Invalid(Option<InputType>),
}

impl Validation {
    /// Whether the input box should carry the invalid marker.
    #[must_use]
    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

/// What: Classify the script of a name.
///
/// Inputs:
/// - `value`: Raw input
///
/// Output:
/// - `Chinese` when any CJK ideograph is present, else `English` when any Latin letter is
///   present, else `None`
#[must_use]
pub fn detect_input_type(value: &str) -> Option<InputType> {
    if CJK_ANY.is_match(value) {
        Some(InputType::Chinese)
    } else if LATIN_ANY.is_match(value) {
        Some(InputType::English)
    } else {
        None
    }
}

/// What: Validate a name against the pattern of its detected script.
///
/// Inputs:
/// - `value`: Raw input; surrounding whitespace is ignored
///
/// Output:
/// - `Validation::Empty` for blank input, otherwise `Valid`/`Invalid` as described on
///   [`Validation`]
#[must_use]
pub fn validate_input(value: &str) -> Validation {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Validation::Empty;
    }
    match detect_input_type(trimmed) {
        Some(kind) if pattern_for(kind).is_match(trimmed) => Validation::Valid(kind),
        other => Validation::Invalid(other),
    }
}

/// What: Decide whether a value may be submitted.
///
/// Inputs:
/// - `value`: Raw input
///
/// Output:
/// - `Ok((trimmed name, detected script))` when valid
///
/// # Errors
/// - `NameError::InvalidInput` when the value is blank or has no recognizable script
/// - `NameError::ValidationFailed(kind)` when it does not match its script's pattern
pub fn check_submission(value: &str) -> Result<(String, InputType), NameError> {
    let trimmed = value.trim();
    let Some(kind) = detect_input_type(trimmed) else {
        return Err(NameError::InvalidInput);
    };
    if pattern_for(kind).is_match(trimmed) {
        Ok((trimmed.to_string(), kind))
    } else {
        Err(NameError::ValidationFailed(kind))
    }
}

/// Whole-name pattern of a script.
fn pattern_for(kind: InputType) -> &'static Regex {
    match kind {
        InputType::Chinese => &CHINESE_NAME,
        InputType::English => &ENGLISH_NAME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_scripts() {
        assert_eq!(detect_input_type("李明"), Some(InputType::Chinese));
        assert_eq!(detect_input_type("123 李"), Some(InputType::Chinese));
        assert_eq!(detect_input_type("Barack Obama"), Some(InputType::English));
        assert_eq!(detect_input_type("o'neil 42"), Some(InputType::English));
        assert_eq!(detect_input_type("12345"), None);
        assert_eq!(detect_input_type("  -- "), None);
        assert_eq!(detect_input_type(""), None);
    }

    #[test]
    fn cjk_wins_over_latin_when_mixed() {
        assert_eq!(detect_input_type("Li 明"), Some(InputType::Chinese));
        assert_eq!(
            validate_input("Li 明"),
            Validation::Invalid(Some(InputType::Chinese))
        );
    }

    #[test]
    fn chinese_length_bounds() {
        assert_eq!(validate_input("李"), Validation::Invalid(Some(InputType::Chinese)));
        assert_eq!(validate_input("李明"), Validation::Valid(InputType::Chinese));
        assert_eq!(
            validate_input(&"李".repeat(10)),
            Validation::Valid(InputType::Chinese)
        );
        assert_eq!(
            validate_input(&"李".repeat(11)),
            Validation::Invalid(Some(InputType::Chinese))
        );
        assert_eq!(
            validate_input("李 明"),
            Validation::Invalid(Some(InputType::Chinese))
        );
    }

    #[test]
    fn english_pattern() {
        assert_eq!(validate_input("Jo"), Validation::Valid(InputType::English));
        assert_eq!(
            validate_input("Mary-Jane Watson"),
            Validation::Valid(InputType::English)
        );
        assert_eq!(
            validate_input(&"a".repeat(50)),
            Validation::Valid(InputType::English)
        );
        assert_eq!(
            validate_input(&"a".repeat(51)),
            Validation::Invalid(Some(InputType::English))
        );
        assert_eq!(validate_input("J"), Validation::Invalid(Some(InputType::English)));
        assert_eq!(
            validate_input("R2D2"),
            Validation::Invalid(Some(InputType::English))
        );
        assert_eq!(
            validate_input("O'Brien"),
            Validation::Invalid(Some(InputType::English))
        );
    }

    #[test]
    fn blank_and_unclassified() {
        assert_eq!(validate_input(""), Validation::Empty);
        assert_eq!(validate_input("   "), Validation::Empty);
        assert_eq!(validate_input("42"), Validation::Invalid(None));
        assert!(validate_input("42").is_flagged());
        assert!(!validate_input("").is_flagged());
    }

    #[test]
    fn check_submission_errors() {
        assert_eq!(check_submission(""), Err(NameError::InvalidInput));
        assert_eq!(check_submission("!!"), Err(NameError::InvalidInput));
        assert_eq!(
            check_submission("李"),
            Err(NameError::ValidationFailed(InputType::Chinese))
        );
        assert_eq!(
            check_submission("  Barack Obama "),
            Ok(("Barack Obama".to_string(), InputType::English))
        );
    }
}
