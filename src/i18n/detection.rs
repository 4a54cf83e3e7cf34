//! System locale detection utilities.

use std::env;

use crate::i18n::Language;

/// What: Detect the UI language from the system locale.
///
/// Inputs:
/// - None (reads from environment)
///
/// Output:
/// - `Some(Language::Zh)` for any `zh*` locale, `Some(Language::En)` for any other
///   parsable locale, `None` when nothing usable is set
///
/// Details:
/// - Checks `LC_ALL`, `LC_MESSAGES` and `LANG` in that order; the first parsable value wins
/// - `C` and `POSIX` count as "nothing usable" so the caller's default is kept
#[must_use]
pub fn detect_system_language() -> Option<Language> {
    let locale_vars = ["LC_ALL", "LC_MESSAGES", "LANG"];

    for var_name in &locale_vars {
        if let Ok(locale_str) = env::var(var_name)
            && let Some(language) = parse_locale_language(&locale_str)
        {
            return Some(language);
        }
    }

    None
}

/// What: Extract the language subtag from a locale string and map it.
///
/// Inputs:
/// - `locale_str`: Locale string like `zh_CN.UTF-8`, `en-US` or `de_DE@euro`
///
/// Output:
/// - Mapped `Language`, or `None` for empty, `C` or `POSIX` locales
fn parse_locale_language(locale_str: &str) -> Option<Language> {
    let trimmed = locale_str.trim();
    if trimmed.is_empty() {
        return None;
    }

    // "zh_CN.UTF-8@pinyin" -> "zh"
    let language = trimmed
        .split(['.', '@', '_', '-'])
        .next()?
        .to_ascii_lowercase();

    match language.as_str() {
        "" | "c" | "posix" => None,
        "zh" => Some(Language::Zh),
        _ => Some(Language::En),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale_language() {
        assert_eq!(parse_locale_language("zh_CN.UTF-8"), Some(Language::Zh));
        assert_eq!(parse_locale_language("zh-Hant-TW"), Some(Language::Zh));
        assert_eq!(parse_locale_language("en_US.utf8"), Some(Language::En));
        assert_eq!(parse_locale_language("de_DE@euro"), Some(Language::En));
        assert_eq!(parse_locale_language("C"), None);
        assert_eq!(parse_locale_language("POSIX"), None);
        assert_eq!(parse_locale_language("   "), None);
    }

    #[test]
    fn test_detect_system_language_with_env() {
        let original_lang = env::var("LANG").ok();
        let original_lc_all = env::var("LC_ALL").ok();
        let original_lc_messages = env::var("LC_MESSAGES").ok();

        unsafe {
            env::set_var("LANG", "zh_CN.UTF-8");
            env::remove_var("LC_ALL");
            env::remove_var("LC_MESSAGES");
        }
        assert_eq!(detect_system_language(), Some(Language::Zh));

        unsafe {
            // LC_ALL takes priority over LANG
            env::set_var("LC_ALL", "en_GB.UTF-8");
        }
        assert_eq!(detect_system_language(), Some(Language::En));

        unsafe {
            env::remove_var("LC_ALL");
            env::remove_var("LANG");
        }
        assert_eq!(detect_system_language(), None);

        unsafe {
            if let Some(val) = original_lang {
                env::set_var("LANG", val);
            } else {
                env::remove_var("LANG");
            }
            if let Some(val) = original_lc_all {
                env::set_var("LC_ALL", val);
            } else {
                env::remove_var("LC_ALL");
            }
            if let Some(val) = original_lc_messages {
                env::set_var("LC_MESSAGES", val);
            } else {
                env::remove_var("LC_MESSAGES");
            }
        }
    }
}
