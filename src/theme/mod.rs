//! Colors, config paths and user settings.
//!
//! Settings live in `~/.config/elegance-names/settings.conf` as `key = value` lines; the
//! palette is fixed.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings file parsing and first-run skeleton.
mod settings;
/// Palette access.
mod store;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, locales_dir, logs_dir};
pub use settings::{ensure_settings_file, load_settings_from, parse_settings, settings};
pub use store::theme;
pub use types::{LanguagePreference, Settings, Theme};
