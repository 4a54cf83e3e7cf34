//! Plain-text rendering of result cards for `--name` one-shot runs.

use std::fmt::Write as _;

use super::view_model::CardView;
use crate::i18n::I18n;

/// What: Format cards as indented plain text.
///
/// Inputs:
/// - `cards`: Cards to print, in order
/// - `i18n`: Translation service for the title and the empty message
///
/// Output:
/// - Multi-line string ending with a newline
///
/// Details:
/// - Same content and omission rules as the terminal cards, without colors or the reveal delay
#[must_use]
pub fn render_plain(cards: &[CardView], i18n: &I18n) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", i18n.t_fmt1("app.results.title", cards.len()));
    if cards.is_empty() {
        let _ = writeln!(out, "  {}", i18n.t("app.results.empty"));
        return out;
    }
    for card in cards {
        out.push('\n');
        let name = card.chinese_name.as_deref().unwrap_or("-");
        let _ = writeln!(out, "{}. {name}", card.index + 1);
        if let Some(pinyin) = &card.pinyin {
            let _ = writeln!(out, "   {}: {pinyin}", card.pinyin_label);
        }
        if let Some(chars) = &card.characters {
            let cells: Vec<String> = chars
                .iter()
                .map(|c| format!("{} {}", c.character, c.pinyin))
                .collect();
            let _ = writeln!(out, "   {}: {}", card.characters_heading, cells.join("  "));
        }
        for section in &card.sections {
            let _ = writeln!(out, "   {}: {}", section.heading, section.body);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::i18n::Language;
    use crate::state::{CharacterInfo, NameSuggestion};
    use crate::ui::view_model::build_cards;

    #[test]
    fn prints_populated_fields_only() {
        let i18n = I18n::new(Language::En);
        let cards = build_cards(
            &[NameSuggestion {
                chinese_name: Some("慧森".into()),
                pinyin: Some("Hui Sen".into()),
                characters: Some(vec![CharacterInfo {
                    character: Some("慧".into()),
                    pinyin: Some("Huì".into()),
                }]),
                meaning: Some("wise forest".into()),
                ..NameSuggestion::default()
            }],
            &i18n,
            Duration::ZERO,
        );
        let text = render_plain(&cards, &i18n);
        assert!(text.starts_with("Suggestions (1)\n"));
        assert!(text.contains("1. 慧森"));
        assert!(text.contains("Pinyin: Hui Sen"));
        assert!(text.contains("Pronunciation: 慧 Huì"));
        assert!(text.contains("Meaning: wise forest"));
        assert!(!text.contains("Cultural Significance"));
    }

    #[test]
    fn empty_result_prints_message() {
        let i18n = I18n::new(Language::Zh);
        let text = render_plain(&[], &i18n);
        assert!(text.contains("名字建议（0）"));
    }
}
