//! Core value types exchanged with the name-generation service.

use serde::{Deserialize, Serialize};

/// One character of a suggested Chinese name with its romanization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterInfo {
    /// The Chinese character itself.
    #[serde(default)]
    pub character: Option<String>,
    /// Pinyin of this character.
    #[serde(default)]
    pub pinyin: Option<String>,
}

/// A single name suggestion returned by the service.
///
/// Every field is optional; a renderer omits the section of an absent field.
/// The service emits `snake_case` keys, `camelCase` spellings are accepted too.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSuggestion {
    /// The suggested name in Chinese characters.
    #[serde(default, alias = "chineseName")]
    pub chinese_name: Option<String>,
    /// Space-separated pinyin syllables of the whole name.
    #[serde(default)]
    pub pinyin: Option<String>,
    /// Per-character breakdown, in name order.
    #[serde(default)]
    pub characters: Option<Vec<CharacterInfo>>,
    /// Meaning of the name.
    #[serde(default)]
    pub meaning: Option<String>,
    /// Cultural background of the chosen characters.
    #[serde(default, alias = "culturalNotes")]
    pub cultural_notes: Option<String>,
    /// Personality traits the name evokes.
    #[serde(default)]
    pub personality: Option<String>,
    /// Short English introduction of the name.
    #[serde(default, alias = "englishIntro")]
    pub english_intro: Option<String>,
}

/// Success body of `POST /generate`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    /// Suggestions in the order the service ranked them.
    #[serde(default)]
    pub suggestions: Vec<NameSuggestion>,
}

/// Error body the service sends with non-2xx statuses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure reason.
    #[serde(default)]
    pub error: Option<String>,
}

/// Script a name is written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Contains CJK ideographs.
    Chinese,
    /// Latin letters only.
    English,
}

impl InputType {
    /// The other script; used as the `mode` hint (a Latin name asks for a Chinese name).
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Chinese => Self::English,
            Self::English => Self::Chinese,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_accepts_snake_and_camel_case() {
        let snake: NameSuggestion = serde_json::from_str(
            r#"{"chinese_name":"慧森","pinyin":"hui sen","cultural_notes":"c","english_intro":"e"}"#,
        )
        .expect("snake_case suggestion should parse");
        let camel: NameSuggestion = serde_json::from_str(
            r#"{"chineseName":"慧森","pinyin":"hui sen","culturalNotes":"c","englishIntro":"e"}"#,
        )
        .expect("camelCase suggestion should parse");
        assert_eq!(snake, camel);
        assert_eq!(snake.chinese_name.as_deref(), Some("慧森"));
    }

    #[test]
    fn suggestion_fields_may_be_missing_or_null() {
        let s: NameSuggestion = serde_json::from_str(r#"{"meaning":null}"#)
            .expect("sparse suggestion should parse");
        assert_eq!(s, NameSuggestion::default());

        let r: SuggestionResponse =
            serde_json::from_str("{}").expect("empty response should parse");
        assert!(r.suggestions.is_empty());
    }

    #[test]
    fn input_type_opposite_and_wire_name() {
        assert_eq!(InputType::English.opposite(), InputType::Chinese);
        assert_eq!(InputType::Chinese.opposite(), InputType::English);
        assert_eq!(
            serde_json::to_string(&InputType::Chinese).expect("serialize"),
            "\"chinese\""
        );
    }
}
