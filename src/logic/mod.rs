//! Non-UI behavior: script detection, validation and the form controller.
//!
//! Everything here is synchronous and owned by the event loop; network work is
//! described by a [`SubmitRequest`] and performed elsewhere.

pub mod controller;
pub mod validation;

pub use controller::{
    ControllerConfig, DEFAULT_ERROR_DISPLAY, DEFAULT_REVEAL_DELAY, ErrorBanner, FormController,
    Phase, SubmitRequest,
};
pub use validation::{Validation, check_submission, detect_input_type, validate_input};
