use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::page::ids;
use crate::state::AppState;
use crate::theme::theme;

/// What: Render the brand line, title/subtitle and the language toggle.
///
/// Details:
/// - The toggle names the language a press switches to, e.g. `[F2] English` while Chinese is active
pub(super) fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(14)])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            app.page.text(ids::BRAND).to_string(),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                app.page.text(ids::TITLE).to_string(),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                app.page.text(ids::SUBTITLE).to_string(),
                Style::default().fg(th.subtext0),
            ),
        ]),
    ];
    f.render_widget(
        Paragraph::new(lines).style(Style::default().bg(th.base)),
        cols[0],
    );

    let toggle = Paragraph::new(Line::from(vec![
        Span::styled("[F2] ", Style::default().fg(th.overlay1)),
        Span::styled(
            app.page.text(ids::LANG_TOGGLE).to_string(),
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Right)
    .style(Style::default().bg(th.base));
    f.render_widget(toggle, cols[1]);
}
