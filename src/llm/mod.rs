pub mod chat;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("GEMINI_API_KEY not set on server.")]
    Configuration,

    #[error("Invalid Gemini endpoint '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("HTTP request to Gemini failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Gemini API returned HTTP {status}: {body}")]
    HttpStatus {
        status: u16,
        body: String,
    },

    #[error("Request blocked by Gemini: {0}")]
    Blocked(String),

    #[error("Invalid response structure from Gemini API.")]
    InvalidResponse,

    #[error("Invalid JSON response from AI.")]
    MalformedResponse {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GatewayError {
    /// Network failures and non-2xx statuses.
    pub fn is_transport(&self) -> bool {
        matches!(self, GatewayError::Transport(_) | GatewayError::HttpStatus { .. })
    }
}

impl From<reqwest::Error> for GatewayError {
    // The request URL carries the API key as a query parameter.
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transport(err.without_url())
    }
}
