use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::api::{NameError, SuggestionSource};
use crate::logic::SubmitRequest;
use crate::state::NameSuggestion;

/// Outcome of one name request, as delivered back to the event loop.
pub type SubmitOutcome = Result<Vec<NameSuggestion>, NameError>;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Events flow from the terminal thread, submissions to the worker, outcomes back
pub struct Channels {
    /// Sender for terminal events, owned by the event-reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Terminal events consumed by the main loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the event-reader thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Validated submissions queued by key handling.
    pub submit_tx: mpsc::UnboundedSender<SubmitRequest>,
    /// Submission queue read by the request worker; `None` once taken.
    pub submit_rx: Option<mpsc::UnboundedReceiver<SubmitRequest>>,
    /// Sender the request worker reports outcomes on.
    pub outcome_tx: mpsc::UnboundedSender<SubmitOutcome>,
    /// Request outcomes applied by the main loop.
    pub outcome_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
}

impl Channels {
    /// Create all channels; `submit_rx` is taken by the worker.
    #[must_use]
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (submit_tx, submit_rx) = mpsc::unbounded_channel::<SubmitRequest>();
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel::<SubmitOutcome>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            submit_tx,
            submit_rx: Some(submit_rx),
            outcome_tx,
            outcome_rx,
        }
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}

/// What: Spawn the request worker.
///
/// Inputs:
/// - `source`: Suggestion source (the HTTP client, or a fake in tests)
/// - `submit_rx`: Submissions from the event loop
/// - `outcome_tx`: Where results go
///
/// Details:
/// - Each submission runs in its own task, so requests overlap and outcomes arrive in
///   completion order; the event loop applies them as they come
/// - The worker stops when the submission channel closes
pub fn spawn_submit_worker(
    source: Arc<dyn SuggestionSource>,
    mut submit_rx: mpsc::UnboundedReceiver<SubmitRequest>,
    outcome_tx: mpsc::UnboundedSender<SubmitOutcome>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(req) = submit_rx.recv().await {
            let source = Arc::clone(&source);
            let tx = outcome_tx.clone();
            tokio::spawn(async move {
                tracing::debug!(name = %req.name, detected = ?req.detected, "request started");
                let outcome = source.get_name_suggestions(&req.name, &req.options).await;
                if tx.send(outcome).is_err() {
                    tracing::debug!("event loop gone; dropping outcome");
                }
            });
        }
        tracing::debug!("submit channel closed; worker exiting");
    })
}

/// What: Spawn the thread that reads terminal events.
///
/// Details:
/// - Polls with a short timeout so the cancellation flag is honored promptly
/// - Exits when the receiving side is dropped
pub fn spawn_event_thread(
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    // transient
                    Err(_) => {}
                },
                Ok(false) => {}
                Err(_) => std::thread::sleep(std::time::Duration::from_millis(50)),
            }
        }
    });
}
