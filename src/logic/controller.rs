//! Form controller: input handling, submission state and result rendering.
//!
//! Observable states are Idle, Loading and Error. Loading and the error banner are
//! tracked as separate visibility flags because an error from one submission may
//! arrive while another submission is still pending; [`FormController::phase`]
//! collapses them for callers that only need the headline state.

use std::time::{Duration, Instant};

use crate::api::{NameError, SuggestionOptions};
use crate::i18n::I18n;
use crate::logic::validation::{Validation, check_submission, validate_input};
use crate::state::{InputType, NameSuggestion};
use crate::ui::view_model::{CardView, build_cards};

/// Default lifetime of the error banner.
pub const DEFAULT_ERROR_DISPLAY: Duration = Duration::from_secs(5);
/// Default per-card reveal stagger.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(150);

/// Headline state of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for input.
    Idle,
    /// A request is in flight.
    Loading,
    /// An error banner is showing.
    Error,
}

/// A transient error banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorBanner {
    /// Localized message.
    pub message: String,
    /// When the banner appeared.
    pub shown_at: Instant,
}

/// Timing knobs of the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
    /// How long an error banner stays up.
    pub error_display: Duration,
    /// Stagger between consecutive card reveals.
    pub reveal_delay: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            error_display: DEFAULT_ERROR_DISPLAY,
            reveal_delay: DEFAULT_REVEAL_DELAY,
        }
    }
}

/// A validated request ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    /// Trimmed name.
    pub name: String,
    /// Script the name was detected as.
    pub detected: InputType,
    /// Language and mode hint for the service.
    pub options: SuggestionOptions,
}

/// State of the name form and its results area.
#[derive(Debug)]
pub struct FormController {
    /// Timing configuration.
    config: ControllerConfig,
    /// Current input text.
    input: String,
    /// Result of the last input validation.
    validation: Validation,
    /// Whether the loading indicator is visible.
    loading: bool,
    /// Visible error banner.
    error: Option<ErrorBanner>,
    /// Last successful result, overwritten by every successful submission.
    last_results: Option<Vec<NameSuggestion>>,
    /// Whether the results area is shown.
    results_visible: bool,
    /// Cards currently rendered.
    cards: Vec<CardView>,
    /// When `cards` were rendered (start of the reveal animation).
    rendered_at: Option<Instant>,
    /// Index of the first card in view.
    scroll: usize,
    /// How many cards fit side by side in the last drawn frame.
    visible_cards: usize,
}

impl FormController {
    /// Create an idle controller with empty input.
    #[must_use]
    pub const fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            input: String::new(),
            validation: Validation::Empty,
            loading: false,
            error: None,
            last_results: None,
            results_visible: false,
            cards: Vec::new(),
            rendered_at: None,
            scroll: 0,
            visible_cards: 1,
        }
    }

    /// Current input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input text and re-validate.
    pub fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
        self.on_input_changed();
    }

    /// Append typed text and re-validate.
    pub fn insert_str(&mut self, text: &str) {
        self.input.push_str(text);
        self.on_input_changed();
    }

    /// Append one typed char and re-validate.
    pub fn insert_char(&mut self, ch: char) {
        self.input.push(ch);
        self.on_input_changed();
    }

    /// Delete the last char and re-validate.
    pub fn backspace(&mut self) {
        self.input.pop();
        self.on_input_changed();
    }

    /// Re-run validation after an edit. Only updates the marker; typing is never blocked.
    fn on_input_changed(&mut self) {
        self.validation = validate_input(&self.input);
    }

    /// Result of the last validation.
    #[must_use]
    pub const fn validation(&self) -> Validation {
        self.validation
    }

    /// Whether the input box carries the invalid marker.
    #[must_use]
    pub const fn input_flagged_invalid(&self) -> bool {
        self.validation.is_flagged()
    }

    /// Headline state.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else {
            Phase::Idle
        }
    }

    /// Whether the loading indicator is visible.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Visible error banner, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&ErrorBanner> {
        self.error.as_ref()
    }

    /// Whether results are shown (the "has results" flag).
    #[must_use]
    pub const fn has_results(&self) -> bool {
        self.results_visible
    }

    /// Last successful result.
    #[must_use]
    pub fn last_results(&self) -> Option<&[NameSuggestion]> {
        self.last_results.as_deref()
    }

    /// Cards to draw; empty while results are hidden.
    #[must_use]
    pub fn cards(&self) -> &[CardView] {
        if self.results_visible { &self.cards } else { &[] }
    }

    /// Time since the cards were rendered, for the staggered reveal.
    #[must_use]
    pub fn reveal_elapsed(&self, now: Instant) -> Duration {
        self.rendered_at
            .map_or(Duration::ZERO, |t| now.saturating_duration_since(t))
    }

    /// Index of the first card in view.
    #[must_use]
    pub const fn scroll(&self) -> usize {
        self.scroll
    }

    /// Scroll the card row one card to the left.
    pub const fn scroll_left(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Record how many cards fit in the results row; re-clamps the scroll offset.
    pub fn set_visible_cards(&mut self, count: usize) {
        self.visible_cards = count.max(1);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Largest scroll offset that still fills the row.
    fn max_scroll(&self) -> usize {
        self.cards().len().saturating_sub(self.visible_cards)
    }

    /// Scroll the card row one card to the right, stopping once the last card is in view.
    pub fn scroll_right(&mut self) {
        if self.scroll < self.max_scroll() {
            self.scroll += 1;
        }
    }

    /// What: Handle a form submission.
    ///
    /// Inputs:
    /// - `i18n`: Translation service (error messages and request language)
    /// - `now`: Current time, stamps an error banner
    ///
    /// Output:
    /// - `Some(SubmitRequest)` to send; `None` when validation aborted the submission
    ///
    /// Details:
    /// - Unclassifiable input shows the invalid-input error; a pattern mismatch shows the
    ///   script-specific error. Neither path touches the loading indicator.
    /// - On success: clears any banner, shows loading, hides prior results, and asks for
    ///   the opposite script of the one detected, in the current UI language
    pub fn handle_submit(&mut self, i18n: &I18n, now: Instant) -> Option<SubmitRequest> {
        let (name, detected) = match check_submission(&self.input) {
            Ok(ok) => ok,
            Err(e) => {
                tracing::info!(error = %e, "submission rejected by validation");
                self.show_error(i18n.t(e.user_message_key()), now);
                return None;
            }
        };

        self.error = None;
        self.loading = true;
        self.results_visible = false;

        let options = SuggestionOptions::new(i18n.current_lang()).with_mode(detected.opposite());
        tracing::info!(
            detected = ?detected,
            language = %options.language,
            "submitting name"
        );
        Some(SubmitRequest {
            name,
            detected,
            options,
        })
    }

    /// What: Apply the outcome of a request.
    ///
    /// Inputs:
    /// - `outcome`: Suggestions or the failure
    /// - `i18n`: Translation service
    /// - `now`: Current time
    ///
    /// Details:
    /// - Loading is cleared in every case
    /// - Success overwrites the last result and renders it
    /// - Failure logs the raw error and shows only the generic server message
    pub fn complete_submit(
        &mut self,
        outcome: Result<Vec<NameSuggestion>, NameError>,
        i18n: &I18n,
        now: Instant,
    ) {
        self.loading = false;
        match outcome {
            Ok(suggestions) => {
                self.render_results(suggestions, i18n, now);
            }
            Err(e) => {
                if e.is_network_or_server() {
                    tracing::error!(error = %e, "name request failed");
                } else {
                    tracing::warn!(error = %e, "name request rejected");
                }
                self.show_error(i18n.t("app.errors.server"), now);
            }
        }
    }

    /// What: Store and display a new set of suggestions.
    ///
    /// Inputs:
    /// - `suggestions`: New result, replaces the previous one wholesale
    /// - `i18n`: Translation service for card headings
    /// - `now`: Start of the reveal animation
    pub fn render_results(&mut self, suggestions: Vec<NameSuggestion>, i18n: &I18n, now: Instant) {
        self.cards = build_cards(&suggestions, i18n, self.config.reveal_delay);
        self.last_results = Some(suggestions);
        self.results_visible = true;
        self.rendered_at = Some(now);
        self.scroll = 0;
    }

    /// What: Rebuild the cards of the last result in the current language.
    ///
    /// Output:
    /// - `true` when cards were rebuilt; `false` when no results are visible
    ///
    /// Details:
    /// - No network request is made; the reveal animation restarts
    pub fn rerender_results(&mut self, i18n: &I18n, now: Instant) -> bool {
        if !self.results_visible {
            return false;
        }
        let Some(last) = self.last_results.as_deref() else {
            return false;
        };
        self.cards = build_cards(last, i18n, self.config.reveal_delay);
        self.rendered_at = Some(now);
        true
    }

    /// Show an error banner.
    fn show_error(&mut self, message: String, now: Instant) {
        self.error = Some(ErrorBanner {
            message,
            shown_at: now,
        });
    }

    /// What: Advance timers.
    ///
    /// Output:
    /// - `true` when the error banner expired during this tick
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self.error.as_ref().is_some_and(|banner| {
            now.saturating_duration_since(banner.shown_at) >= self.config.error_display
        });
        if expired {
            self.error = None;
        }
        expired
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}
