//! Internationalization (i18n) for the name generator.
//!
//! # Overview
//!
//! - **Languages**: exactly two, English (`en`) and Chinese (`zh`); Chinese is the default
//! - **Tables**: YAML locale files (`config/locales/{code}.yml`) compiled into the binary and
//!   flattened into dot-notation keys; a user locale directory may override individual keys
//! - **Lookup**: [`I18n::t`] returns the active language's string or the key itself
//! - **Page refresh**: [`I18n::update_page_language`] rewrites every tagged element of the
//!   retained [`Page`] model that the terminal UI renders
//!
//! # Error Handling
//!
//! - Unsupported language codes are logged and ignored; the active language is kept
//! - Missing keys return the key itself and log at debug level
//! - Broken override files are logged and skipped

mod detection;
mod loader;
pub mod page;
pub mod translations;

use std::fmt;
use std::path::Path;

pub use detection::detect_system_language;
pub use loader::{embedded_table, load_locale_file};
pub use page::{Page, PageElement};
pub use translations::{TranslationMap, key_space_difference, translate, translate_or_key};

/// A supported UI language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// English.
    En,
    /// Simplified Chinese.
    #[default]
    Zh,
}

impl Language {
    /// Both supported languages.
    pub const ALL: [Self; 2] = [Self::En, Self::Zh];

    /// Wire/locale code (`"en"` or `"zh"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// What: Parse a language code.
    ///
    /// Inputs:
    /// - `code`: Candidate code; case and surrounding whitespace are ignored
    ///
    /// Output:
    /// - `Some(Language)` for `en`/`zh`, `None` for anything else
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }

    /// The other language.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }

    /// Label of the language switch while `self` is active: it names the language
    /// the switch leads to, in that language.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::En => "中文",
            Self::Zh => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Translation service: the active language plus one table per language.
///
/// Constructed once at startup and owned by the application state.
#[derive(Clone, Debug)]
pub struct I18n {
    /// Active language.
    current: Language,
    /// English table.
    en: TranslationMap,
    /// Chinese table.
    zh: TranslationMap,
}

impl I18n {
    /// What: Create the service from the built-in tables.
    ///
    /// Inputs:
    /// - `initial`: Language to start in
    ///
    /// Output:
    /// - Service ready for lookups
    ///
    /// Details:
    /// - Logs a warning listing any key defined in only one table
    #[must_use]
    pub fn new(initial: Language) -> Self {
        Self::with_tables(
            initial,
            embedded_table(Language::En),
            embedded_table(Language::Zh),
        )
    }

    /// Create the service from explicit tables (used by tests and overrides).
    #[must_use]
    pub fn with_tables(initial: Language, en: TranslationMap, zh: TranslationMap) -> Self {
        let mismatched = key_space_difference(&en, &zh);
        if !mismatched.is_empty() {
            tracing::warn!(keys = ?mismatched, "translation tables define different key sets");
        }
        Self {
            current: initial,
            en,
            zh,
        }
    }

    /// What: Overlay user-provided locale files on top of the current tables.
    ///
    /// Inputs:
    /// - `locales_dir`: Directory that may contain `en.yml` and/or `zh.yml`
    ///
    /// Details:
    /// - Missing files are skipped silently; unreadable or invalid ones are logged
    /// - Only keys present in the file are replaced
    pub fn apply_overrides(&mut self, locales_dir: &Path) {
        for lang in Language::ALL {
            if !locales_dir.join(format!("{}.yml", lang.code())).exists() {
                continue;
            }
            match load_locale_file(lang, locales_dir) {
                Ok(overrides) => {
                    tracing::info!(
                        lang = %lang,
                        keys = overrides.len(),
                        "applied locale overrides"
                    );
                    self.table_mut(lang).extend(overrides);
                }
                Err(e) => tracing::warn!(lang = %lang, error = %e, "ignoring locale override"),
            }
        }
    }

    /// What: Switch the active language by code.
    ///
    /// Inputs:
    /// - `code`: `"en"` or `"zh"`
    ///
    /// Output:
    /// - The active language after the call
    ///
    /// Details:
    /// - Any other code is logged and ignored; the active language stays unchanged
    pub fn set_language(&mut self, code: &str) -> Language {
        match Language::from_code(code) {
            Some(lang) => {
                self.current = lang;
                tracing::debug!(lang = %lang, "language changed");
            }
            None => {
                tracing::warn!(code, "unsupported language; keeping {}", self.current);
            }
        }
        self.current
    }

    /// Flip between English and Chinese and return the new language.
    pub fn toggle_language(&mut self) -> Language {
        self.set_language(self.current.toggled().code())
    }

    /// Active language.
    #[must_use]
    pub const fn current_lang(&self) -> Language {
        self.current
    }

    /// What: Translate a key in the active language.
    ///
    /// Inputs:
    /// - `key`: Dot-notation key (e.g., "app.errors.server")
    ///
    /// Output:
    /// - Localized string, or `key` itself if the table has no entry
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        translate_or_key(key, self.table(self.current))
    }

    /// What: Translate a key and substitute `{}` placeholders in order.
    ///
    /// Inputs:
    /// - `key`: Dot-notation key
    /// - `args`: Format arguments (as Display trait objects)
    ///
    /// Output:
    /// - Formatted translated string
    #[must_use]
    pub fn t_fmt(&self, key: &str, args: &[&dyn fmt::Display]) -> String {
        let mut result = self.t(key);
        for arg in args {
            result = result.replacen("{}", &arg.to_string(), 1);
        }
        result
    }

    /// Single-argument shorthand for [`I18n::t_fmt`].
    #[must_use]
    pub fn t_fmt1<T: fmt::Display>(&self, key: &str, arg: T) -> String {
        self.t_fmt(key, &[&arg])
    }

    /// What: Rewrite the page model into the active language.
    ///
    /// Inputs:
    /// - `page`: Page model to update in place
    ///
    /// Details:
    /// - Sets the document language
    /// - Every element with a text key gets its text replaced; every element with a
    ///   placeholder key gets its placeholder replaced
    /// - The language toggle gets its label; a page without one is left as is
    pub fn update_page_language(&self, page: &mut Page) {
        page.document_lang = self.current;

        for element in &mut page.elements {
            if let Some(key) = element.text_key {
                element.text = self.t(key);
            }
            if let Some(key) = element.placeholder_key {
                element.placeholder = self.t(key);
            }
        }

        if let Some(toggle) = page.element_mut(page::ids::LANG_TOGGLE) {
            toggle.text = self.current.toggle_label().to_string();
        } else {
            tracing::debug!("page has no language toggle; label not updated");
        }
    }

    /// Table of a language.
    const fn table(&self, lang: Language) -> &TranslationMap {
        match lang {
            Language::En => &self.en,
            Language::Zh => &self.zh,
        }
    }

    /// Mutable table of a language.
    const fn table_mut(&mut self, lang: Language) -> &mut TranslationMap {
        match lang {
            Language::En => &mut self.en,
            Language::Zh => &mut self.zh,
        }
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::page::ids;
    use super::*;

    #[test]
    fn default_language_is_chinese() {
        assert_eq!(I18n::default().current_lang(), Language::Zh);
    }

    #[test]
    fn t_returns_localized_string_or_key() {
        let mut i18n = I18n::new(Language::En);
        assert_eq!(i18n.t("app.errors.server"), "Server error. Please try again later.");
        i18n.set_language("zh");
        assert_eq!(i18n.t("app.errors.server"), "服务器错误，请稍后重试。");
        assert_eq!(i18n.t("app.no.such.key"), "app.no.such.key");
    }

    #[test]
    fn unsupported_language_is_ignored() {
        let mut i18n = I18n::new(Language::En);
        assert_eq!(i18n.set_language("fr"), Language::En);
        assert_eq!(i18n.current_lang(), Language::En);
        assert_eq!(i18n.set_language(""), Language::En);
    }

    #[test]
    fn set_language_accepts_case_and_whitespace() {
        let mut i18n = I18n::new(Language::En);
        assert_eq!(i18n.set_language(" ZH "), Language::Zh);
    }

    #[test]
    fn toggle_twice_round_trips() {
        let mut i18n = I18n::new(Language::Zh);
        assert_eq!(i18n.toggle_language(), Language::En);
        assert_eq!(i18n.toggle_language(), Language::Zh);
    }

    #[test]
    fn t_fmt_substitutes_in_order() {
        let i18n = I18n::new(Language::En);
        assert_eq!(i18n.t_fmt1("app.results.title", 3), "Suggestions (3)");
    }

    #[test]
    fn update_page_language_rewrites_tagged_elements() {
        let mut i18n = I18n::new(Language::En);
        let mut page = Page::standard();
        i18n.update_page_language(&mut page);

        assert_eq!(page.document_lang, Language::En);
        assert_eq!(page.text(ids::TITLE), "Name Generator");
        assert_eq!(
            page.placeholder(ids::NAME_INPUT),
            "Enter your name (Chinese or English)"
        );
        assert_eq!(page.text(ids::LANG_TOGGLE), "中文");

        i18n.toggle_language();
        i18n.update_page_language(&mut page);
        assert_eq!(page.document_lang, Language::Zh);
        assert_eq!(page.text(ids::TITLE), "姓名生成器");
        assert_eq!(page.text(ids::LANG_TOGGLE), "English");
    }

    #[test]
    fn update_page_language_tolerates_missing_elements() {
        let i18n = I18n::new(Language::En);
        let mut page = Page::new(vec![PageElement::text("only", "app.title")]);
        i18n.update_page_language(&mut page);
        assert_eq!(page.text("only"), "Name Generator");
        assert_eq!(page.text(ids::LANG_TOGGLE), "");
    }

    #[test]
    fn overrides_replace_only_given_keys() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp directory for test");
        std::fs::write(
            dir.path().join("en.yml"),
            "en:\n  app:\n    title: \"Namer\"\n",
        )
        .expect("Failed to write override file");

        let mut i18n = I18n::new(Language::En);
        i18n.apply_overrides(dir.path());
        assert_eq!(i18n.t("app.title"), "Namer");
        assert_eq!(i18n.t("app.card.pinyin"), "Pinyin");
    }
}
