use std::fs;
use std::path::{Path, PathBuf};

use super::parsing::strip_inline_comment;
use super::paths::{config_dir, resolve_settings_config_path};
use super::types::{LanguagePreference, Settings};

/// Written to `settings.conf` on first run.
const SETTINGS_SKELETON_CONTENT: &str = "# Elegance Names settings
# Lines are `key = value`; `#` starts a comment.

# UI language at startup: zh, en or auto (follow the system locale)
language = zh

# Root URL of the name-generation service (POST {api_base_url}/generate)
api_base_url = http://localhost:8080/api

# Whole-request timeout in seconds
request_timeout_secs = 20

# How long error messages stay on screen, in seconds
error_display_secs = 5

# Delay between revealing consecutive result cards, in milliseconds
card_reveal_delay_ms = 150
";

/// What: Parse `settings.conf` content into `settings`.
///
/// Inputs:
/// - `content`: File content
/// - `settings`: Settings to update in place; keys that are absent keep their value
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Keys are normalized (lowercase, `.`/`-`/space become `_`) and accept a few aliases
/// - Unparseable values and zero timeouts are logged and skipped
/// - Unknown keys are logged at debug level and ignored
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw.trim());
        match key.as_str() {
            "language" | "lang" | "locale" => {
                if let Some(pref) = LanguagePreference::parse(val) {
                    settings.language = pref;
                } else {
                    tracing::warn!(value = val, "ignoring unsupported language setting");
                }
            }
            "api_base_url" | "api_url" | "base_url" => {
                if val.is_empty() {
                    tracing::warn!("ignoring empty api_base_url");
                } else {
                    settings.api_base_url = val.to_string();
                }
            }
            "request_timeout_secs" | "timeout" | "timeout_secs" => {
                if let Some(v) = parse_positive(&key, val) {
                    settings.request_timeout_secs = v;
                }
            }
            "error_display_secs" | "error_timeout_secs" => {
                if let Some(v) = parse_positive(&key, val) {
                    settings.error_display_secs = v;
                }
            }
            "card_reveal_delay_ms" | "reveal_delay_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.card_reveal_delay_ms = v;
                } else {
                    tracing::warn!(key = %key, value = val, "ignoring invalid number");
                }
            }
            _ => tracing::debug!(key = %key, "ignoring unknown settings key"),
        }
    }
}

/// Parse a strictly positive integer, logging why a value was rejected.
fn parse_positive(key: &str, val: &str) -> Option<u64> {
    match val.parse::<u64>() {
        Ok(0) => {
            tracing::warn!(key, "ignoring zero value");
            None
        }
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = val, "ignoring invalid number");
            None
        }
    }
}

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: Settings file
///
/// Output:
/// - Parsed settings on top of the defaults; defaults alone when the file cannot be read
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut out);
            tracing::debug!(path = %path.display(), "loaded settings");
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "settings file not readable; using defaults");
        }
    }
    out
}

/// What: Load user settings, writing the commented skeleton on first run.
///
/// Output:
/// - Settings from the first existing `settings.conf`, or defaults
///
/// Details:
/// - When no file exists, the skeleton is written to the config dir so users can discover the
///   available keys; failure to write is logged and otherwise ignored
pub fn settings() -> Settings {
    if let Some(path) = resolve_settings_config_path() {
        return load_settings_from(&path);
    }
    let path = default_settings_path();
    if let Err(e) = ensure_settings_file(&path) {
        tracing::warn!(path = %path.display(), error = %e, "could not write settings skeleton");
    }
    Settings::default()
}

/// Where the skeleton goes when no settings file exists yet.
fn default_settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}

/// What: Create `path` from the skeleton when it is missing or empty.
///
/// Output:
/// - `Ok(true)` if the file was written, `Ok(false)` if it already had content
///
/// # Errors
/// - Propagates directory creation and write failures
pub fn ensure_settings_file(path: &Path) -> std::io::Result<bool> {
    let has_content = fs::metadata(path).is_ok_and(|m| m.len() > 0);
    if has_content {
        return Ok(false);
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, SETTINGS_SKELETON_CONTENT)?;
    tracing::info!(path = %path.display(), "wrote default settings skeleton");
    Ok(true)
}
