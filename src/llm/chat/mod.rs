pub mod gemini;

use async_trait::async_trait;
use std::sync::Arc;

use super::{ GatewayError, LlmConfig };
use self::gemini::GeminiChatClient;
use crate::models::chat::AiResponse;
use crate::models::content::Content;

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// One upstream call: `contents` plus a system instruction in, the
    /// model's structured reply out.
    async fn generate(
        &self,
        contents: &[Content],
        system_instruction: &str
    ) -> Result<AiResponse, GatewayError>;

    fn get_model(&self) -> String;
}

pub fn new_client(config: &LlmConfig) -> Result<Arc<dyn ChatClient>, GatewayError> {
    let client = GeminiChatClient::from_config(config)?;
    Ok(Arc::new(client))
}
