//! Application state and the value types it carries.

pub mod app_state;
pub mod types;

pub use app_state::AppState;
pub use types::{CharacterInfo, InputType, NameSuggestion, SuggestionResponse};
