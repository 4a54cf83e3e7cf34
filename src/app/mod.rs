//! Interactive application: terminal lifecycle, request worker and event loop.

/// Event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::background::{SubmitOutcome, spawn_submit_worker};
pub use runtime::run;
