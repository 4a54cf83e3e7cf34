//! Elegance Names binary entrypoint kept minimal. The runtime lives in `app`.

use std::fmt;
use std::sync::{Arc, OnceLock};

use clap::Parser;

use elegance_names::api::NameApi;
use elegance_names::args::{Args, determine_log_level, run_once};
use elegance_names::i18n::I18n;
use elegance_names::state::AppState;
use elegance_names::{app, theme};

struct NamesTimer;

impl tracing_subscriber::fmt::time::FormatTime for NamesTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `~/.config/elegance-names/logs/elegance-names.log`.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
///
/// Details:
/// - Falls back to a stderr logger when the log file cannot be opened
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = theme::logs_dir().join("elegance-names.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(NamesTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(NamesTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&determine_log_level(&args));

    let settings = args.apply_to(theme::settings());
    let lang = settings.language.resolve();
    let mut i18n = I18n::new(lang);
    i18n.apply_overrides(&theme::locales_dir());
    tracing::info!(lang = %lang, api = %settings.api_base_url, "Elegance Names starting");

    let api = match NameApi::new(&settings.api_config()) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(error = %e, "failed to build HTTP client");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Some(name) = args.name.as_deref() {
        match run_once(name, &i18n, &api).await {
            Ok(text) => print!("{text}"),
            Err(message) => {
                eprintln!("{message}");
                std::process::exit(1);
            }
        }
        return;
    }

    let state = AppState::new(i18n, settings.controller_config(), api.endpoint());
    if let Err(err) = app::run(state, Arc::new(api)).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("{err}");
        std::process::exit(1);
    }
    tracing::info!("Elegance Names exited");
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    #[test]
    fn names_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let _ = super::NamesTimer.format_time(&mut writer);
        assert!(buf.starts_with("20"));
    }
}
