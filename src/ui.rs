//! Terminal rendering of the application state.
//!
//! The frame is a vertical stack: header, name form, status line, result cards, footer and
//! key hints. All static text comes from the [`crate::i18n::Page`] model so a language switch
//! shows up on the next frame without touching the renderer.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::{state::AppState, theme::theme};

/// Result card row.
mod cards;
/// Footer links and key hints.
mod footer;
/// Name input, button and status line.
mod form;
/// Brand line, title and language toggle.
mod header;
/// Plain-text card printing for non-interactive runs.
pub mod plain;
/// Card view models built from suggestions.
pub mod view_model;

/// Header height in rows.
const HEADER_H: u16 = 3;
/// Input row height in rows.
const FORM_H: u16 = 3;
/// Footer height in rows (links + about + copyright).
const FOOTER_H: u16 = 3;

/// Number of result cards drawn side by side in a frame `width` columns wide.
#[must_use]
pub fn results_per_row(width: u16) -> usize {
    cards::cards_per_row(width.saturating_sub(2))
}

/// What: Draw one frame at the current time.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: State to render
pub fn ui(f: &mut Frame, app: &AppState) {
    ui_at(f, app, Instant::now());
}

/// What: Draw one frame as of `now`.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: State to render
/// - `now`: Clock used for the staggered card reveal
///
/// Details:
/// - Separate from [`ui`] so tests can render a deterministic reveal state
pub fn ui_at(f: &mut Frame, app: &AppState, now: Instant) {
    let th = theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_H),
            Constraint::Length(FORM_H),
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(FOOTER_H),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(f, app, chunks[0]);
    form::render_form(f, app, chunks[1]);
    form::render_status(f, app, chunks[2]);
    cards::render_results(f, app, chunks[3], now);
    footer::render_footer(f, app, chunks[4]);
    footer::render_hints(f, app, chunks[5]);
}
