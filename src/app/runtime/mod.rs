use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::api::SuggestionSource;
use crate::state::AppState;
use crate::ui::{results_per_row, ui};

use super::terminal::{restore_terminal, setup_terminal};

pub mod background;

use background::{Channels, spawn_event_thread, spawn_submit_worker};

/// Result type for the interactive loop.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Redraw and timer resolution.
const TICK: Duration = Duration::from_millis(100);

/// What: Run the interactive name generator until the user quits.
///
/// Inputs:
/// - `app`: Initial state (language, page, controller timing)
/// - `source`: Where suggestions come from
///
/// Output:
/// - `Ok(())` on a clean exit
///
/// # Errors
/// - Returns `Err` when the terminal cannot be set up, drawn to or sized
///
/// Details:
/// - The terminal is restored even when the loop fails
/// - A 100 ms tick drives the card reveal and error banner expiry
pub async fn run(app: AppState, source: Arc<dyn SuggestionSource>) -> Result<()> {
    setup_terminal()?;
    let outcome = event_loop(app, source).await;
    if let Err(e) = restore_terminal() {
        tracing::warn!(error = %e, "failed to restore terminal");
    }
    outcome
}

/// Body of [`run`] between terminal setup and restore.
async fn event_loop(mut app: AppState, source: Arc<dyn SuggestionSource>) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    let mut channels = Channels::new();

    spawn_event_thread(
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    let submit_rx = channels
        .submit_rx
        .take()
        .ok_or("submit receiver already taken")?;
    let worker = spawn_submit_worker(source, submit_rx, channels.outcome_tx.clone());

    let mut ticker = tokio::time::interval(TICK);
    tracing::info!(lang = %app.i18n.current_lang(), endpoint = %app.endpoint, "ui started");

    loop {
        app.form
            .set_visible_cards(results_per_row(terminal.size()?.width));
        terminal.draw(|f| ui(f, &app))?;

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app, &channels.submit_tx) {
                    break;
                }
            }
            Some(outcome) = channels.outcome_rx.recv() => {
                app.form.complete_submit(outcome, &app.i18n, Instant::now());
            }
            _ = ticker.tick() => {
                if app.form.tick(Instant::now()) {
                    tracing::debug!("error banner expired");
                }
            }
        }
    }

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    worker.abort();
    tracing::info!("ui exited");
    Ok(())
}
