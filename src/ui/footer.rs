use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::page::ids;
use crate::state::AppState;
use crate::theme::theme;

/// Separator between footer entries.
const SEP: &str = "  ·  ";

/// Render the about line, the link row and the copyright line.
pub(super) fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let dim = Style::default().fg(th.overlay1);
    let text = |id: &str| app.page.text(id).to_string();

    let mut links: Vec<Span> = Vec::new();
    for id in [
        ids::FOOTER_CONTACT,
        ids::FOOTER_SUPPORT,
        ids::FOOTER_PRIVACY,
        ids::FOOTER_TERMS,
        ids::FOOTER_FAQ,
    ] {
        if !links.is_empty() {
            links.push(Span::styled(SEP, dim));
        }
        links.push(Span::styled(text(id), Style::default().fg(th.subtext0)));
    }

    let rows = vec![
        Line::from(vec![
            Span::styled(
                text(ids::FOOTER_ABOUT),
                Style::default().fg(th.lavender).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(text(ids::FOOTER_DESCRIPTION), dim),
        ]),
        Line::from(links),
        Line::from(vec![
            Span::styled(text(ids::FOOTER_COPYRIGHT), dim),
            Span::styled(SEP, dim),
            Span::styled(text(ids::FOOTER_POWERED), dim),
        ]),
    ];
    f.render_widget(
        Paragraph::new(rows).style(Style::default().bg(th.base)),
        area,
    );
}

/// Render the key hints line.
pub(super) fn render_hints(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let mut spans: Vec<Span> = Vec::new();
    for id in [
        ids::HINT_SUBMIT,
        ids::HINT_TOGGLE,
        ids::HINT_SCROLL,
        ids::HINT_QUIT,
    ] {
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            app.page.text(id).to_string(),
            Style::default().fg(th.overlay2),
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.mantle)),
        area,
    );
}
