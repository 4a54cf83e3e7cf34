//! Name-generation API: the client seam used by the form controller.
//!
//! The controller only sees [`SuggestionSource`]; the production implementation is
//! [`NameApi`], tests plug in their own.

mod client;
mod error;
mod format;

use async_trait::async_trait;

pub use client::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, NameApi};
pub use error::{GENERIC_FAILURE, NameError};
pub use format::{format_name_suggestion, format_pinyin};

use crate::i18n::Language;
use crate::state::{InputType, NameSuggestion};

/// Per-request options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuggestionOptions {
    /// Language of the texts the service writes (meaning, notes, ...).
    pub language: Language,
    /// Script of the name to produce; `None` lets the service decide.
    pub mode: Option<InputType>,
}

impl SuggestionOptions {
    /// Options with a language and no mode hint.
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self {
            language,
            mode: None,
        }
    }

    /// Set the mode hint.
    #[must_use]
    pub const fn with_mode(mut self, mode: InputType) -> Self {
        self.mode = Some(mode);
        self
    }
}

/// Source of name suggestions.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// What: Fetch suggestions for a name.
    ///
    /// Inputs:
    /// - `name`: Name to translate; must be non-empty
    /// - `options`: Language and mode hint
    ///
    /// Output:
    /// - Suggestions with pinyin already capitalized
    ///
    /// # Errors
    /// - `NameError::InvalidInput` for an empty name, before any network activity
    /// - Network, server and decode failures as their `NameError` variants
    async fn get_name_suggestions(
        &self,
        name: &str,
        options: &SuggestionOptions,
    ) -> Result<Vec<NameSuggestion>, NameError>;
}
