//! Pure suggestion → card transformation.
//!
//! Nothing here touches the terminal; the renderer and the plain-text printer
//! both consume [`CardView`]s.

use std::time::Duration;

use crate::i18n::I18n;
use crate::state::NameSuggestion;

/// One cell of the characters grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharCell {
    /// The character (may be empty when the service omitted it).
    pub character: String,
    /// Its pinyin (may be empty).
    pub pinyin: String,
}

/// A titled text block of a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardSection {
    /// Localized heading.
    pub heading: String,
    /// Body text from the suggestion.
    pub body: String,
}

/// Everything needed to draw one suggestion card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    /// Position in the row, starting at 0.
    pub index: usize,
    /// Chinese name headline.
    pub chinese_name: Option<String>,
    /// Localized "Pinyin" label.
    pub pinyin_label: String,
    /// Formatted pinyin of the name.
    pub pinyin: Option<String>,
    /// Localized heading of the characters grid.
    pub characters_heading: String,
    /// Characters grid; `None` when the suggestion has no characters.
    pub characters: Option<Vec<CharCell>>,
    /// Meaning, cultural notes, personality and English intro, in that order, absent ones skipped.
    pub sections: Vec<CardSection>,
    /// Delay after rendering before the card is revealed.
    pub reveal_after: Duration,
}

impl CardView {
    /// Whether the card is visible `elapsed` after the results were rendered.
    #[must_use]
    pub fn is_revealed(&self, elapsed: Duration) -> bool {
        elapsed >= self.reveal_after
    }
}

/// What: Turn suggestions into card view models.
///
/// Inputs:
/// - `suggestions`: Suggestions in display order
/// - `i18n`: Translation service for headings
/// - `reveal_delay`: Per-index stagger of the reveal
///
/// Output:
/// - One `CardView` per suggestion; card `i` reveals after `i * reveal_delay`
///
/// Details:
/// - Blank strings count as absent, so an empty `meaning` does not produce a heading with no body
/// - A characters list that is present but empty is treated as absent
#[must_use]
pub fn build_cards(
    suggestions: &[NameSuggestion],
    i18n: &I18n,
    reveal_delay: Duration,
) -> Vec<CardView> {
    suggestions
        .iter()
        .enumerate()
        .map(|(index, s)| build_card(index, s, i18n, reveal_delay))
        .collect()
}

/// Build the card of one suggestion.
fn build_card(
    index: usize,
    suggestion: &NameSuggestion,
    i18n: &I18n,
    reveal_delay: Duration,
) -> CardView {
    let characters = suggestion
        .characters
        .as_ref()
        .filter(|chars| !chars.is_empty())
        .map(|chars| {
            chars
                .iter()
                .map(|c| CharCell {
                    character: c.character.clone().unwrap_or_default(),
                    pinyin: c.pinyin.clone().unwrap_or_default(),
                })
                .collect()
        });

    let sections = [
        ("app.card.meaning", &suggestion.meaning),
        ("app.card.cultural_significance", &suggestion.cultural_notes),
        ("app.card.personality_traits", &suggestion.personality),
        ("app.card.english_intro", &suggestion.english_intro),
    ]
    .into_iter()
    .filter_map(|(key, value)| {
        present(value.as_ref()).map(|body| CardSection {
            heading: i18n.t(key),
            body: body.to_string(),
        })
    })
    .collect();

    CardView {
        index,
        chinese_name: present(suggestion.chinese_name.as_ref()).map(str::to_string),
        pinyin_label: i18n.t("app.card.pinyin"),
        pinyin: present(suggestion.pinyin.as_ref()).map(str::to_string),
        characters_heading: i18n.t("app.card.pronunciation"),
        characters,
        sections,
        reveal_after: reveal_delay.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX)),
    }
}

/// Non-blank string content.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}
