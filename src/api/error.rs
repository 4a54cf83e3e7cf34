//! Error type of the name-generation flow.

use std::fmt;

use crate::state::InputType;

/// Fallback message when a failed response carries no usable `error` field.
pub const GENERIC_FAILURE: &str = "failed to generate names";

/// Failure of a name-generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Empty or unclassifiable name; no request was made.
    InvalidInput,
    /// Name was classified but does not match its script's pattern.
    ValidationFailed(InputType),
    /// The service answered with a non-success status.
    Server {
        /// HTTP status code.
        status: u16,
        /// Message from the response body, or [`GENERIC_FAILURE`].
        message: String,
    },
    /// The request never produced a response (connect failure, timeout).
    Transport(String),
    /// A success response whose body could not be decoded.
    Decode(String),
}

impl NameError {
    /// What: Build the error for a non-success HTTP response.
    ///
    /// Inputs:
    /// - `status`: HTTP status code
    /// - `body`: Raw response body
    ///
    /// Output:
    /// - `NameError::Server` carrying the body's `error` string, or the generic fallback
    ///   when the body is not JSON or has no non-empty `error`
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<crate::state::types::ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        Self::Server { status, message }
    }

    /// Whether this failure came from the network or the service (as opposed to local input checks).
    #[must_use]
    pub const fn is_network_or_server(&self) -> bool {
        matches!(
            self,
            Self::Server { .. } | Self::Transport(_) | Self::Decode(_)
        )
    }

    /// What: Translation key of the message shown to the user.
    ///
    /// Output:
    /// - Input errors map to their specific guidance; every network or server failure maps
    ///   to the generic server error so backend details never reach the screen
    #[must_use]
    pub const fn user_message_key(&self) -> &'static str {
        match self {
            Self::InvalidInput => "app.errors.invalid_input",
            Self::ValidationFailed(InputType::Chinese) => "app.errors.invalid_chinese_name",
            Self::ValidationFailed(InputType::English) => "app.errors.invalid_english_name",
            Self::Server { .. } | Self::Transport(_) | Self::Decode(_) => "app.errors.server",
        }
    }
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid input: a non-empty name is required"),
            Self::ValidationFailed(kind) => {
                write!(f, "name does not match the {kind:?} name pattern")
            }
            Self::Server { status, message } => write!(f, "server returned {status}: {message}"),
            Self::Transport(msg) => write!(f, "network error: {msg}"),
            Self::Decode(msg) => write!(f, "invalid response body: {msg}"),
        }
    }
}

impl std::error::Error for NameError {}

impl From<reqwest::Error> for NameError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            Self::Transport(format!("request timed out: {value}"))
        } else if value.is_decode() {
            Self::Decode(value.to_string())
        } else {
            Self::Transport(value.to_string())
        }
    }
}
