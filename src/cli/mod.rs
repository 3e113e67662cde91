use clap::Parser;

use crate::llm::{ LlmConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE };

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Gemini Args ---
    /// API key for the Gemini API. Requests fail until this is set.
    #[arg(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: Option<String>,

    /// Base URL of the Gemini model collection.
    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub gemini_base_url: String,

    /// Gemini model used for both chat and translation.
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub gemini_model: String,

    /// Sampling temperature sent with every request.
    #[arg(long, env = "GEMINI_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    // --- Server Args ---
    /// Host address and port for the server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:5000")]
    pub server_addr: String,

    /// Directory served under /static.
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: String,

    /// HTML page served at /.
    #[arg(long, env = "INDEX_PATH", default_value = "templates/index.html")]
    pub index_path: String,

    /// Optional path to the TLS certificate file (PEM format). Requires --tls-key-path.
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Optional path to the TLS private key file (PEM format). Requires --tls-cert-path.
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,

    #[arg(long, env = "ENABLE_TLS", default_value = "false")]
    pub enable_tls: bool,
}

impl Args {
    pub fn llm_config(&self) -> LlmConfig {
        LlmConfig {
            api_key: self.gemini_api_key.clone().filter(|k| !k.trim().is_empty()),
            model: self.gemini_model.clone(),
            base_url: self.gemini_base_url.clone(),
            temperature: self.temperature,
        }
    }
}
