//! Command-line argument definition and processing.

use clap::Parser;

use crate::theme::{LanguagePreference, Settings};

/// Elegance Names - Chinese/English cultural name suggestions in your terminal
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "elegance-names")]
#[command(version)]
#[command(about = "Chinese/English cultural name suggestions in your terminal", long_about = None)]
pub struct Args {
    /// UI language: zh, en or auto (overrides settings.conf)
    #[arg(long, value_parser = parse_language)]
    pub lang: Option<LanguagePreference>,

    /// Root URL of the name service, e.g. `http://localhost:8080/api`
    #[arg(long)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Generate names for NAME, print them and exit (no TUI)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Clap value parser for `--lang`.
fn parse_language(value: &str) -> Result<LanguagePreference, String> {
    LanguagePreference::parse(value)
        .ok_or_else(|| format!("unsupported language '{value}' (use zh, en or auto)"))
}

impl Args {
    /// What: Layer command-line overrides on top of file settings.
    ///
    /// Inputs:
    /// - `settings`: Settings loaded from `settings.conf`
    ///
    /// Output:
    /// - Settings with every flag the user passed applied
    #[must_use]
    pub fn apply_to(&self, mut settings: Settings) -> Settings {
        if let Some(lang) = self.lang {
            settings.language = lang;
        }
        if let Some(url) = self.api_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            settings.api_base_url = url.to_string();
        }
        if let Some(secs) = self.timeout {
            settings.request_timeout_secs = secs;
        }
        settings
    }
}
