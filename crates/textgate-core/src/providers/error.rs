//! Provider error types and normalization

use thiserror::Error;

use super::BackendId;

/// Errors that can occur while invoking a backend
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The backend's API rejected the request
    #[error("{provider} API error ({status}): {message}")]
    ApiError {
        provider: String,
        status: u16,
        message: String,
    },

    /// Network/HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl ProviderError {
    /// Create an API error
    pub fn api_error(provider: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            provider: provider.into(),
            status,
            message: message.into(),
        }
    }

    /// HTTP-style status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::ApiError { status, .. } => Some(*status),
            ProviderError::Http(err) => err.status().map(|s| s.as_u16()),
            ProviderError::Other(_) => None,
        }
    }

    /// Render this error as the caller-facing message
    ///
    /// The taxonomy is deliberately coarse: only the two actionable
    /// operator conditions (bad credential, rate limiting) get dedicated
    /// messages. Everything else is surfaced opaquely - its own message
    /// verbatim, or `fallback` when there is nothing to show.
    pub fn user_message(&self, provider: BackendId, fallback: &str) -> String {
        match self.status() {
            Some(401) => format!(
                "Authentication failed for {provider}; check the configured credential."
            ),
            Some(429) => format!("Rate limit exceeded for {provider}; try again later."),
            _ => {
                let message = self.to_string();
                if message.is_empty() {
                    fallback.to_string()
                } else {
                    message
                }
            }
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;
