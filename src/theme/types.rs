use ratatui::style::Color;

use crate::i18n::Language;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Subtle surface color for component backgrounds (level 2).
    pub surface2: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color commonly used for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent color for emphasized headings or selections.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for subtle emphasis and borders.
    pub lavender: Color,
}

/// Language choice from the settings file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguagePreference {
    /// Follow the system locale, falling back to the default language.
    Auto,
    /// Always start in this language.
    Fixed(Language),
}

impl LanguagePreference {
    /// What: Parse a settings/CLI value.
    ///
    /// Inputs:
    /// - `value`: `auto`, `system`, `en` or `zh` (case-insensitive)
    ///
    /// Output:
    /// - Parsed preference or `None` for anything else
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        if v == "auto" || v == "system" {
            return Some(Self::Auto);
        }
        Language::from_code(&v).map(Self::Fixed)
    }

    /// Resolve to a concrete language.
    #[must_use]
    pub fn resolve(self) -> Language {
        match self {
            Self::Fixed(lang) => lang,
            Self::Auto => crate::i18n::detect_system_language().unwrap_or_default(),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Initial UI language.
    pub language: LanguagePreference,
    /// Root URL of the name-generation service.
    pub api_base_url: String,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// How long error banners stay visible, in seconds.
    pub error_display_secs: u64,
    /// Stagger between card reveals, in milliseconds.
    pub card_reveal_delay_ms: u64,
}

impl Default for Settings {
    /// Defaults: Chinese UI, local service, 20 s timeout, 5 s banners, 150 ms stagger.
    fn default() -> Self {
        Self {
            language: LanguagePreference::Fixed(Language::Zh),
            api_base_url: crate::api::DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: crate::api::DEFAULT_TIMEOUT.as_secs(),
            error_display_secs: crate::logic::DEFAULT_ERROR_DISPLAY.as_secs(),
            card_reveal_delay_ms: 150,
        }
    }
}

impl Settings {
    /// Connection settings for the API client.
    #[must_use]
    pub fn api_config(&self) -> crate::api::ApiConfig {
        crate::api::ApiConfig {
            base_url: self.api_base_url.clone(),
            timeout: std::time::Duration::from_secs(self.request_timeout_secs),
        }
    }

    /// Timing settings for the form controller.
    #[must_use]
    pub const fn controller_config(&self) -> crate::logic::ControllerConfig {
        crate::logic::ControllerConfig {
            error_display: std::time::Duration::from_secs(self.error_display_secs),
            reveal_delay: std::time::Duration::from_millis(self.card_reveal_delay_ms),
        }
    }
}
