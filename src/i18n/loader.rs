//! Locale table loading and parsing.

use std::fs;
use std::path::Path;

use crate::i18n::Language;
use crate::i18n::translations::TranslationMap;

/// English table shipped with the binary.
const EMBEDDED_EN: &str = include_str!("../../config/locales/en.yml");
/// Chinese table shipped with the binary.
const EMBEDDED_ZH: &str = include_str!("../../config/locales/zh.yml");

/// What: Return the built-in translation table for a language.
///
/// Inputs:
/// - `lang`: Language whose table should be parsed
///
/// Output:
/// - Flattened `TranslationMap`; empty if the embedded YAML fails to parse
///
/// Details:
/// - The YAML is compiled into the binary, so a parse failure is a packaging bug.
///   It is logged and an empty table is returned, which degrades every lookup to
///   its key instead of aborting startup.
#[must_use]
pub fn embedded_table(lang: Language) -> TranslationMap {
    let source = match lang {
        Language::En => EMBEDDED_EN,
        Language::Zh => EMBEDDED_ZH,
    };
    match parse_locale_yaml(source) {
        Ok(map) => map,
        Err(e) => {
            tracing::error!(lang = %lang, error = %e, "embedded locale table is invalid");
            TranslationMap::new()
        }
    }
}

/// What: Load a locale YAML file and parse it into a `TranslationMap`.
///
/// Inputs:
/// - `lang`: Language whose file should be read (`{code}.yml`)
/// - `locales_dir`: Path to locales directory
///
/// Output:
/// - `Result<TranslationMap, String>` containing translations or error
///
/// # Errors
/// - Returns `Err` when the locale file does not exist in the locales directory
/// - Returns `Err` when the locale file cannot be read (I/O error)
/// - Returns `Err` when the locale file is empty
/// - Returns `Err` when the YAML content cannot be parsed
pub fn load_locale_file(lang: Language, locales_dir: &Path) -> Result<TranslationMap, String> {
    let file_path = locales_dir.join(format!("{}.yml", lang.code()));

    if !file_path.exists() {
        return Err(format!("Locale file not found: {}", file_path.display()));
    }

    let contents = fs::read_to_string(&file_path)
        .map_err(|e| format!("Failed to read locale file {}: {e}", file_path.display()))?;

    if contents.trim().is_empty() {
        return Err(format!("Locale file is empty: {}", file_path.display()));
    }

    parse_locale_yaml(&contents).map_err(|e| {
        format!(
            "Failed to parse locale file {}: {}. Please check YAML syntax.",
            file_path.display(),
            e
        )
    })
}

/// What: Parse YAML content into a `TranslationMap`.
///
/// Inputs:
/// - `yaml_content`: YAML file content as string
///
/// Output:
/// - `Result<TranslationMap, String>` containing parsed translations
///
/// Details:
/// - Expects a top-level key naming the language (e.g., "zh:")
/// - Flattens nested structure into dot-notation keys
fn parse_locale_yaml(yaml_content: &str) -> Result<TranslationMap, String> {
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("Failed to parse YAML: {e}"))?;

    let mut translations = TranslationMap::new();

    if let Some(locale_obj) = doc.as_mapping() {
        for (_locale_key, locale_value) in locale_obj {
            flatten_yaml_value(locale_value, "", &mut translations);
        }
    }

    Ok(translations)
}

/// Recursively flatten a YAML tree into dot-notation keys.
fn flatten_yaml_value(value: &serde_norway::Value, prefix: &str, translations: &mut TranslationMap) {
    match value {
        serde_norway::Value::Mapping(map) => {
            for (key, val) in map {
                if let Some(key_str) = key.as_str() {
                    let new_prefix = if prefix.is_empty() {
                        key_str.to_string()
                    } else {
                        format!("{prefix}.{key_str}")
                    };
                    flatten_yaml_value(val, &new_prefix, translations);
                }
            }
        }
        serde_norway::Value::String(s) => {
            translations.insert(prefix.to_string(), s.clone());
        }
        serde_norway::Value::Number(n) => {
            translations.insert(prefix.to_string(), n.to_string());
        }
        serde_norway::Value::Bool(b) => {
            translations.insert(prefix.to_string(), b.to_string());
        }
        _ => {
            tracing::debug!(key = prefix, "skipping non-scalar locale value");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::translations::key_space_difference;
    use tempfile::TempDir;

    #[test]
    fn test_parse_locale_yaml_nested() {
        let yaml = r#"
en:
  app:
    card:
      pinyin: "Pinyin"
      meaning: "Meaning"
"#;
        let result = parse_locale_yaml(yaml).expect("Failed to parse test locale YAML");
        assert_eq!(result.get("app.card.pinyin"), Some(&"Pinyin".to_string()));
        assert_eq!(result.get("app.card.meaning"), Some(&"Meaning".to_string()));
    }

    #[test]
    fn test_parse_locale_yaml_invalid() {
        let yaml = "invalid: yaml: content: [";
        assert!(parse_locale_yaml(yaml).is_err());
    }

    #[test]
    fn embedded_tables_share_key_space() {
        let en = embedded_table(Language::En);
        let zh = embedded_table(Language::Zh);
        assert!(!en.is_empty());
        assert_eq!(key_space_difference(&en, &zh), Vec::<String>::new());
    }

    #[test]
    fn embedded_tables_carry_brand_names() {
        assert_eq!(
            embedded_table(Language::En).get("app.brand_name"),
            Some(&"Elegance Names".to_string())
        );
        assert_eq!(
            embedded_table(Language::Zh).get("app.brand_name"),
            Some(&"雅名阁".to_string())
        );
    }

    #[test]
    fn test_load_locale_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
        let yaml_content = r#"
zh:
  app:
    title: "起名"
"#;
        fs::write(temp_dir.path().join("zh.yml"), yaml_content)
            .expect("Failed to write test locale file");

        let result =
            load_locale_file(Language::Zh, temp_dir.path()).expect("Failed to load test locale file");
        assert_eq!(result.get("app.title"), Some(&"起名".to_string()));
    }

    #[test]
    fn test_load_locale_file_not_found_or_empty() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory for test");

        let missing = load_locale_file(Language::En, temp_dir.path());
        assert!(missing.is_err_and(|e| e.contains("not found")));

        fs::write(temp_dir.path().join("en.yml"), "  \n").expect("Failed to write empty file");
        let empty = load_locale_file(Language::En, temp_dir.path());
        assert!(empty.is_err_and(|e| e.contains("empty")));
    }
}
