//! HTTP client for the name-generation endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use super::error::NameError;
use super::format::format_name_suggestion;
use super::{SuggestionOptions, SuggestionSource};
use crate::state::{InputType, NameSuggestion, SuggestionResponse};

/// Default service root used when neither settings nor CLI name one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
/// Default whole-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// JSON body of `POST /generate`.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    /// Name as typed by the user (either script, despite the field name).
    english_name: &'a str,
    /// UI language the service should answer in.
    language: &'static str,
    /// Script of the name the user wants back.
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<InputType>,
}

/// Connection settings of [`NameApi`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Service root, e.g. `http://localhost:8080/api`.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// `reqwest`-backed [`SuggestionSource`].
#[derive(Clone, Debug)]
pub struct NameApi {
    /// Pooled HTTP client carrying the timeout.
    client: reqwest::Client,
    /// Full URL of the generate endpoint.
    endpoint: String,
}

impl NameApi {
    /// What: Build a client for the configured service.
    ///
    /// Inputs:
    /// - `config`: Base URL and timeout
    ///
    /// Output:
    /// - `Ok(NameApi)`; `Err(NameError::Transport)` if the HTTP client cannot be built
    ///
    /// # Errors
    /// - Returns `Err` when the TLS backend fails to initialize
    pub fn new(config: &ApiConfig) -> Result<Self, NameError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("elegance-names/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NameError::Transport(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: generate_endpoint(&config.base_url),
        })
    }

    /// Full URL requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// What: Post one generate request and decode the answer.
    ///
    /// Inputs:
    /// - `name`: Non-empty name
    /// - `options`: Language and mode hint
    ///
    /// Output:
    /// - Decoded response as sent by the service (pinyin not yet formatted)
    ///
    /// # Errors
    /// - `NameError::Transport` when no response arrives (including timeouts)
    /// - `NameError::Server` for non-2xx statuses
    /// - `NameError::Decode` when a 2xx body is not a suggestion response
    async fn generate_names(
        &self,
        name: &str,
        options: &SuggestionOptions,
    ) -> Result<SuggestionResponse, NameError> {
        let body = GenerateRequest {
            english_name: name,
            language: options.language.code(),
            mode: options.mode,
        };
        tracing::debug!(
            endpoint = %self.endpoint,
            language = body.language,
            mode = ?body.mode,
            "posting generate request"
        );

        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::trace!(status = status.as_u16(), body = %text, "generate response");

        if !status.is_success() {
            return Err(NameError::from_response(status.as_u16(), &text));
        }

        serde_json::from_str::<SuggestionResponse>(&text)
            .map_err(|e| NameError::Decode(e.to_string()))
    }
}

#[async_trait]
impl SuggestionSource for NameApi {
    async fn get_name_suggestions(
        &self,
        name: &str,
        options: &SuggestionOptions,
    ) -> Result<Vec<NameSuggestion>, NameError> {
        if name.trim().is_empty() {
            tracing::error!("name generation refused: empty name");
            return Err(NameError::InvalidInput);
        }

        match self.generate_names(name, options).await {
            Ok(response) => {
                tracing::info!(count = response.suggestions.len(), "received name suggestions");
                Ok(response
                    .suggestions
                    .into_iter()
                    .map(format_name_suggestion)
                    .collect())
            }
            Err(e) => {
                tracing::error!(error = %e, endpoint = %self.endpoint, "name generation failed");
                Err(e)
            }
        }
    }
}

/// `{base}/generate`, tolerating a trailing slash on `base`.
fn generate_endpoint(base_url: &str) -> String {
    format!("{}/generate", base_url.trim().trim_end_matches('/'))
}
