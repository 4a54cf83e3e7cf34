//! Translation map and lookup utilities.

use std::collections::{BTreeSet, HashMap};

/// Translation map: dot-notation key -> translated string.
pub type TranslationMap = HashMap<String, String>;

/// What: Look up a translation in the translation map.
///
/// Inputs:
/// - `key`: Dot-notation key (e.g., `app.form.generate_button`)
/// - `translations`: Translation map to search
///
/// Output:
/// - `Option<String>` containing translation or None if not found
#[must_use]
pub fn translate(key: &str, translations: &TranslationMap) -> Option<String> {
    translations.get(key).cloned()
}

/// What: Look up a translation, returning the key itself when it is missing.
///
/// Inputs:
/// - `key`: Dot-notation key
/// - `translations`: Translation map of the active language
///
/// Output:
/// - Translated string, or `key` unchanged if the map has no entry
///
/// Details:
/// - Never fails; a missing key is logged at debug level so it stays discoverable
///   without flooding the log on every frame
#[must_use]
pub fn translate_or_key(key: &str, translations: &TranslationMap) -> String {
    translate(key, translations).unwrap_or_else(|| {
        tracing::debug!(
            "Missing translation key: '{}'. Returning key as-is. Please add this key to locale files.",
            key
        );
        key.to_string()
    })
}

/// What: List keys defined in one table but not the other.
///
/// Inputs:
/// - `left`, `right`: Translation maps to compare
///
/// Output:
/// - Sorted list of keys present in exactly one of the maps (empty when the key spaces match)
#[must_use]
pub fn key_space_difference(left: &TranslationMap, right: &TranslationMap) -> Vec<String> {
    let l: BTreeSet<&String> = left.keys().collect();
    let r: BTreeSet<&String> = right.keys().collect();
    l.symmetric_difference(&r).map(|k| (*k).clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        let mut translations = HashMap::new();
        translations.insert("app.title".to_string(), "姓名生成器".to_string());

        assert_eq!(
            translate("app.title", &translations),
            Some("姓名生成器".to_string())
        );
        assert_eq!(translate("app.subtitle", &translations), None);
    }

    #[test]
    fn test_translate_or_key() {
        let mut translations = HashMap::new();
        translations.insert("app.card.pinyin".to_string(), "Pinyin".to_string());

        assert_eq!(translate_or_key("app.card.pinyin", &translations), "Pinyin");
        assert_eq!(
            translate_or_key("app.card.missing", &translations),
            "app.card.missing"
        );
    }

    #[test]
    fn test_key_space_difference() {
        let mut en = HashMap::new();
        en.insert("a".to_string(), "A".to_string());
        en.insert("b".to_string(), "B".to_string());
        let mut zh = HashMap::new();
        zh.insert("a".to_string(), "甲".to_string());
        zh.insert("c".to_string(), "丙".to_string());

        assert_eq!(key_space_difference(&en, &zh), vec!["b", "c"]);
        assert!(key_space_difference(&en, &en).is_empty());
    }
}
