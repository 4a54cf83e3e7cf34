//! Central `AppState` container.

use std::time::Instant;

use crate::i18n::{I18n, Language, Page};
use crate::logic::{ControllerConfig, FormController};

/// Application state shared by the event and UI layers.
///
/// Owned by the event loop. The translation service and the page model live here
/// so a language switch updates both in one place; the form controller receives
/// the translation service by reference.
#[derive(Debug)]
pub struct AppState {
    /// Translation service.
    pub i18n: I18n,
    /// Page model the header, form and footer are rendered from.
    pub page: Page,
    /// Name form and results.
    pub form: FormController,
    /// Endpoint shown in the status line.
    pub endpoint: String,
}

impl AppState {
    /// What: Build the state and fill the page in the initial language.
    ///
    /// Inputs:
    /// - `i18n`: Translation service, already in its initial language
    /// - `config`: Controller timing
    /// - `endpoint`: Service URL for display
    #[must_use]
    pub fn new(i18n: I18n, config: ControllerConfig, endpoint: impl Into<String>) -> Self {
        let mut page = Page::standard();
        i18n.update_page_language(&mut page);
        Self {
            i18n,
            page,
            form: FormController::new(config),
            endpoint: endpoint.into(),
        }
    }

    /// What: Switch language by code and refresh everything that shows text.
    ///
    /// Inputs:
    /// - `code`: Language code; unsupported codes are ignored by the translation service
    /// - `now`: Current time (restarts the card reveal on re-render)
    ///
    /// Output:
    /// - Active language after the call
    pub fn set_language(&mut self, code: &str, now: Instant) -> Language {
        let before = self.i18n.current_lang();
        let after = self.i18n.set_language(code);
        if before != after {
            self.refresh_language(now);
        }
        after
    }

    /// Flip the language and refresh; returns the new language.
    pub fn toggle_language(&mut self, now: Instant) -> Language {
        let lang = self.i18n.toggle_language();
        self.refresh_language(now);
        lang
    }

    /// Rewrite the page and, if results are visible, their cards.
    fn refresh_language(&mut self, now: Instant) {
        self.i18n.update_page_language(&mut self.page);
        if self.form.rerender_results(&self.i18n, now) {
            tracing::debug!(lang = %self.i18n.current_lang(), "re-rendered results after language switch");
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            I18n::default(),
            ControllerConfig::default(),
            crate::api::DEFAULT_BASE_URL,
        )
    }
}
