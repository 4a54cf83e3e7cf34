//! Post-processing of suggestion records returned by the service.

use crate::state::{CharacterInfo, NameSuggestion};

/// What: Capitalize the first letter of every space-delimited pinyin syllable.
///
/// Inputs:
/// - `pinyin`: Raw pinyin such as `"hui sen"`
///
/// Output:
/// - `"Hui Sen"`; the rest of each syllable and the spacing are kept as they were
///
/// Details:
/// - Uppercasing is Unicode-aware, so tone-marked initials (`"ǎi"`) are handled
/// - Consecutive spaces produce empty syllables which are preserved
#[must_use]
pub fn format_pinyin(pinyin: &str) -> String {
    pinyin
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first char of `word`, leaving the tail untouched.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut out: String = first.to_uppercase().collect();
        out.push_str(chars.as_str());
        out
    })
}

/// What: Apply pinyin formatting to a suggestion and each of its characters.
///
/// Inputs:
/// - `suggestion`: Record as decoded from the service
///
/// Output:
/// - Same record with the name's and every character's pinyin capitalized
#[must_use]
pub fn format_name_suggestion(suggestion: NameSuggestion) -> NameSuggestion {
    NameSuggestion {
        pinyin: suggestion.pinyin.as_deref().map(format_pinyin),
        characters: suggestion.characters.map(|chars| {
            chars
                .into_iter()
                .map(|c| CharacterInfo {
                    pinyin: c.pinyin.as_deref().map(format_pinyin),
                    character: c.character,
                })
                .collect()
        }),
        ..suggestion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_syllable() {
        assert_eq!(format_pinyin("hui sen"), "Hui Sen");
        assert_eq!(format_pinyin("li"), "Li");
        assert_eq!(format_pinyin("ǎi lín"), "Ǎi Lín");
        assert_eq!(format_pinyin("Ou Yang"), "Ou Yang");
    }

    #[test]
    fn keeps_empty_syllables_and_empty_input() {
        assert_eq!(format_pinyin(""), "");
        assert_eq!(format_pinyin("hui  sen"), "Hui  Sen");
    }

    #[test]
    fn formats_nested_character_pinyin() {
        let raw = NameSuggestion {
            chinese_name: Some("慧森".into()),
            pinyin: Some("hui sen".into()),
            characters: Some(vec![
                CharacterInfo {
                    character: Some("慧".into()),
                    pinyin: Some("hui".into()),
                },
                CharacterInfo {
                    character: Some("森".into()),
                    pinyin: None,
                },
            ]),
            ..NameSuggestion::default()
        };
        let formatted = format_name_suggestion(raw);
        assert_eq!(formatted.pinyin.as_deref(), Some("Hui Sen"));
        let chars = formatted.characters.expect("characters kept");
        assert_eq!(chars[0].pinyin.as_deref(), Some("Hui"));
        assert_eq!(chars[1].pinyin, None);
        assert_eq!(formatted.chinese_name.as_deref(), Some("慧森"));
    }
}
