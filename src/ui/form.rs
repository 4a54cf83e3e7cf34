use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::i18n::page::ids;
use crate::state::AppState;
use crate::theme::theme;
use crate::util::{display_width, truncate_to_width};

/// What: Render the name input and the generate button.
///
/// Details:
/// - The input border turns red while the current text fails validation
/// - The placeholder shows while the input is empty
/// - The button is dimmed while a request is in flight
pub(super) fn render_form(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let button_label = app.page.text(ids::GENERATE_BUTTON);
    let button_w = u16::try_from(display_width(button_label) + 6).unwrap_or(u16::MAX);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(button_w)])
        .split(area);

    let flagged = app.form.input_flagged_invalid();
    let border = if flagged { th.red } else { th.mauve };
    let input = app.form.input();
    let content = if input.is_empty() {
        Span::styled(
            app.page.placeholder(ids::NAME_INPUT).to_string(),
            Style::default().fg(th.overlay1),
        )
    } else {
        Span::styled(input.to_string(), Style::default().fg(th.text))
    };
    let field = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(th.sapphire)),
        content,
    ]))
    .style(Style::default().bg(th.base))
    .block(
        Block::default()
            .title(Span::styled(
                app.page.text(ids::NAME_INPUT).to_string(),
                Style::default().fg(border),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(field, cols[0]);

    // Cursor after "> " and the typed text.
    let typed = u16::try_from(display_width(input)).unwrap_or(u16::MAX);
    let x = cols[0]
        .x
        .saturating_add(3)
        .saturating_add(typed)
        .min(cols[0].right().saturating_sub(2));
    f.set_cursor_position(Position::new(x, cols[0].y.saturating_add(1)));

    let loading = app.form.is_loading();
    let button_style = if loading {
        Style::default().fg(th.overlay1)
    } else {
        Style::default().fg(th.green).add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(Line::from(Span::styled(
        button_label.to_string(),
        button_style,
    )))
    .centered()
    .style(Style::default().bg(th.base))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if loading { th.surface2 } else { th.green })),
    );
    f.render_widget(button, cols[1]);
}

/// What: Render the one-line status: error banner, loading text or the endpoint.
///
/// Details:
/// - A validation error raised while a request is pending is drawn first, followed by the
///   loading text
pub(super) fn render_status(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let width = usize::from(area.width);
    let mut spans: Vec<Span> = Vec::new();
    if let Some(banner) = app.form.error() {
        spans.push(Span::styled(
            truncate_to_width(&banner.message, width),
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        ));
    }
    if app.form.is_loading() {
        if !spans.is_empty() {
            spans.push(Span::styled("  ·  ", Style::default().fg(th.overlay1)));
        }
        spans.push(Span::styled(
            app.page.text(ids::LOADING).to_string(),
            Style::default().fg(th.yellow).add_modifier(Modifier::ITALIC),
        ));
    }
    if spans.is_empty() {
        spans.push(Span::styled(
            truncate_to_width(&format!("POST {}", app.endpoint), width),
            Style::default().fg(th.overlay1),
        ));
    }
    let line = Line::from(spans);
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(th.base)),
        area,
    );
}
