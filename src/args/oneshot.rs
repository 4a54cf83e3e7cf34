//! Non-interactive `--name` mode.

use std::time::Duration;

use crate::api::{NameError, SuggestionOptions, SuggestionSource};
use crate::i18n::I18n;
use crate::logic::check_submission;
use crate::ui::plain::render_plain;
use crate::ui::view_model::build_cards;

/// What: Generate names for one input and format them as text.
///
/// Inputs:
/// - `name`: Raw input, validated exactly like the form
/// - `i18n`: Translation service in the output language
/// - `source`: Suggestion source
///
/// Output:
/// - `Ok(text)` with the formatted cards
///
/// # Errors
/// - `Err(message)` with the localized message the form would have shown, for invalid
///   input or a failed request
///
/// Details:
/// - Validation failures never reach the network
/// - Service failures are logged with their detail; the message stays generic
pub async fn run_once(
    name: &str,
    i18n: &I18n,
    source: &dyn SuggestionSource,
) -> Result<String, String> {
    let (name, detected) =
        check_submission(name).map_err(|e: NameError| i18n.t(e.user_message_key()))?;
    let options = SuggestionOptions::new(i18n.current_lang()).with_mode(detected.opposite());
    match source.get_name_suggestions(&name, &options).await {
        Ok(suggestions) => {
            let cards = build_cards(&suggestions, i18n, Duration::ZERO);
            Ok(render_plain(&cards, i18n))
        }
        Err(e) => {
            tracing::error!(error = %e, "name request failed");
            Err(i18n.t("app.errors.server"))
        }
    }
}
