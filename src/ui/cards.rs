use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::view_model::CardView;
use crate::state::AppState;
use crate::theme::theme;

/// Narrowest a card gets before fewer cards are shown per row.
const MIN_CARD_WIDTH: u16 = 30;

/// What: Render the results block with a horizontally scrolling row of cards.
///
/// Inputs:
/// - `now`: Clock for the staggered reveal; cards not yet revealed leave their slot empty
///
/// Details:
/// - Nothing is drawn while results are hidden (before the first success, during loading)
/// - An empty result shows the block title with a count of zero and the empty message
pub(super) fn render_results(f: &mut Frame, app: &AppState, area: Rect, now: Instant) {
    if !app.form.has_results() {
        return;
    }
    let th = theme();
    let cards = app.form.cards();
    let title = app.i18n.t_fmt1("app.results.title", cards.len());
    let mut block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(th.lavender).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2))
        .style(Style::default().bg(th.base));

    let per_row = cards_per_row(area.width.saturating_sub(2));
    let first = app.form.scroll().min(cards.len().saturating_sub(per_row));
    if cards.len() > per_row {
        let last = (first + per_row).min(cards.len());
        block = block.title_bottom(Span::styled(
            format!(" {}-{}/{} ", first + 1, last, cards.len()),
            Style::default().fg(th.overlay1),
        ));
    }
    let inner = block.inner(area);
    f.render_widget(block, area);

    if cards.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(
                app.i18n.t("app.results.empty"),
                Style::default().fg(th.subtext0),
            )),
            inner,
        );
        return;
    }

    let constraints = vec![Constraint::Ratio(1, u32::try_from(per_row).unwrap_or(1)); per_row];
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    let elapsed = app.form.reveal_elapsed(now);
    for (card, slot) in cards.iter().skip(first).take(per_row).zip(slots.iter()) {
        if card.is_revealed(elapsed) {
            render_card(f, card, *slot);
        }
    }
}

/// How many cards fit side by side in `width` columns (at least one).
pub(super) fn cards_per_row(width: u16) -> usize {
    usize::from((width / MIN_CARD_WIDTH).max(1))
}

/// What: Render one suggestion card.
///
/// Details:
/// - Only populated parts are drawn; headings never appear without a body
fn render_card(f: &mut Frame, card: &CardView, area: Rect) {
    let th = theme();
    let mut lines: Vec<Line> = Vec::new();
    if let Some(name) = &card.chinese_name {
        lines.push(Line::from(Span::styled(
            name.clone(),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(pinyin) = &card.pinyin {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", card.pinyin_label),
                Style::default().fg(th.overlay2),
            ),
            Span::styled(pinyin.clone(), Style::default().fg(th.text)),
        ]));
    }
    if let Some(chars) = &card.characters {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            card.characters_heading.clone(),
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        )));
        let mut spans = Vec::with_capacity(chars.len() * 3);
        for (i, cell) in chars.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                cell.character.clone(),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", cell.pinyin),
                Style::default().fg(th.subtext0),
            ));
        }
        lines.push(Line::from(spans));
    }
    for section in &card.sections {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            section.heading.clone(),
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            section.body.clone(),
            Style::default().fg(th.text),
        )));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", card.index + 1),
                    Style::default().fg(th.overlay1),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.lavender)),
        );
    f.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_areas_still_show_one_card() {
        assert_eq!(cards_per_row(0), 1);
        assert_eq!(cards_per_row(29), 1);
        assert_eq!(cards_per_row(60), 2);
        assert_eq!(cards_per_row(100), 3);
    }
}
