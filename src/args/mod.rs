//! Command-line argument parsing and handling.

pub mod definition;
pub mod oneshot;
pub mod utils;

// Re-export commonly used items
pub use definition::Args;
pub use oneshot::run_once;
pub use utils::determine_log_level;
