//! Keyboard handling for the name generator.
//!
//! Converts raw `crossterm` events into mutations on [`AppState`]. Submissions are handed to
//! the request worker through a channel so input handling never waits on the network.
//!
//! Bindings:
//!
//! - Enter: submit the name
//! - F2 / Ctrl-L: toggle the UI language
//! - Left / Right: scroll the card row
//! - Backspace: delete the last character
//! - Esc / Ctrl-C: quit

use std::time::Instant;

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::SubmitRequest;
use crate::state::AppState;

/// What: Apply one terminal event to the application state.
///
/// Inputs:
/// - `ev`: Raw event from the terminal
/// - `app`: Mutable application state
/// - `submit_tx`: Channel to the request worker
///
/// Output:
/// - `true` when the application should exit
///
/// Details:
/// - Key releases and repeats other than presses are ignored
/// - Enter while a request is in flight starts another one; the last response wins
/// - Pasted text is inserted as typed
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    submit_tx: &mpsc::UnboundedSender<SubmitRequest>,
) -> bool {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => handle_key(ke, app, submit_tx),
        CEvent::Paste(text) => {
            app.form.insert_str(text.trim_end_matches(['\r', '\n']));
            false
        }
        _ => false,
    }
}

/// Key press dispatch; returns `true` to quit.
fn handle_key(
    ke: KeyEvent,
    app: &mut AppState,
    submit_tx: &mpsc::UnboundedSender<SubmitRequest>,
) -> bool {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if ctrl => return true,
        KeyCode::F(2) => {
            app.toggle_language(Instant::now());
        }
        KeyCode::Char('l') if ctrl => {
            app.toggle_language(Instant::now());
        }
        KeyCode::Enter => submit(app, submit_tx),
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Left => app.form.scroll_left(),
        KeyCode::Right => app.form.scroll_right(),
        KeyCode::Char(ch) if !ctrl => app.form.insert_char(ch),
        _ => {}
    }
    false
}

/// Validate and queue a submission.
fn submit(app: &mut AppState, submit_tx: &mpsc::UnboundedSender<SubmitRequest>) {
    let Some(req) = app.form.handle_submit(&app.i18n, Instant::now()) else {
        return;
    };
    if let Err(e) = submit_tx.send(req) {
        tracing::error!(error = %e, "request worker is gone");
        let outcome = Err(crate::api::NameError::Transport(e.to_string()));
        app.form.complete_submit(outcome, &app.i18n, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::i18n::page::ids;
    use crate::logic::Phase;

    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn type_text(app: &mut AppState, tx: &mpsc::UnboundedSender<SubmitRequest>, s: &str) {
        for ch in s.chars() {
            assert!(!handle_event(key(KeyCode::Char(ch)), app, tx));
        }
    }

    #[test]
    fn typing_and_submit_queues_request() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        type_text(&mut app, &tx, "Barack Obama");
        assert_eq!(app.form.input(), "Barack Obama");
        assert!(!handle_event(key(KeyCode::Enter), &mut app, &tx));
        let req = rx.try_recv().expect("request queued");
        assert_eq!(req.name, "Barack Obama");
        assert_eq!(req.options.language, Language::Zh);
        assert_eq!(app.form.phase(), Phase::Loading);
    }

    #[test]
    fn invalid_submit_queues_nothing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        type_text(&mut app, &tx, "李");
        handle_event(key(KeyCode::Enter), &mut app, &tx);
        assert!(rx.try_recv().is_err());
        assert_eq!(app.form.phase(), Phase::Error);
    }

    #[test]
    fn f2_and_ctrl_l_toggle_language() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        handle_event(key(KeyCode::F(2)), &mut app, &tx);
        assert_eq!(app.i18n.current_lang(), Language::En);
        assert_eq!(app.page.text(ids::LANG_TOGGLE), "中文");
        let ctrl_l = CEvent::Key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
        handle_event(ctrl_l, &mut app, &tx);
        assert_eq!(app.i18n.current_lang(), Language::Zh);
        assert_eq!(app.form.input(), "");
    }

    #[test]
    fn backspace_and_quit_keys() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        type_text(&mut app, &tx, "ab");
        handle_event(key(KeyCode::Backspace), &mut app, &tx);
        assert_eq!(app.form.input(), "a");
        assert!(handle_event(key(KeyCode::Esc), &mut app, &tx));
        let ctrl_c = CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(handle_event(ctrl_c, &mut app, &tx));
    }

    #[test]
    fn paste_inserts_text() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        handle_event(CEvent::Paste("慧森\n".into()), &mut app, &tx);
        assert_eq!(app.form.input(), "慧森");
    }
}
