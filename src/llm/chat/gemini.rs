use async_trait::async_trait;
use serde::{ Deserialize, Serialize };
use url::Url;
use log::{ info, error };

use super::ChatClient;
use crate::llm::{ GatewayError, LlmConfig };
use crate::models::chat::AiResponse;
use crate::models::content::Content;

const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: &'a [Content],
    system_instruction: SystemInstruction<'a>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    response_mime_type: &'static str,
}

#[derive(Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    candidates: Option<Vec<GoogleCandidate>>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug)]
struct GoogleCandidate {
    content: Option<GoogleContent>,
}

#[derive(Deserialize, Debug)]
struct GoogleContent {
    #[serde(default)]
    parts: Vec<GooglePart>,
}

#[derive(Deserialize, Debug)]
struct GooglePart {
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

fn build_request<'a>(
    contents: &'a [Content],
    system_instruction: &'a str,
    temperature: f32
) -> GenerateContentRequest<'a> {
    GenerateContentRequest {
        contents,
        system_instruction: SystemInstruction {
            parts: vec![TextPart { text: system_instruction }],
        },
        generation_config: GenerationConfig {
            temperature,
            response_mime_type: "application/json",
        },
        // Language-learning chatter trips the default filters far too often.
        safety_settings: HARM_CATEGORIES.into_iter()
            .map(|category| SafetySetting { category, threshold: "BLOCK_NONE" })
            .collect(),
    }
}

/// First candidate's first text part. That text is itself JSON.
fn extract_text(resp: GenerateContentResponse) -> Result<String, GatewayError> {
    let candidates = resp.candidates.unwrap_or_default();
    let Some(first) = candidates.into_iter().next() else {
        let reason = resp.prompt_feedback.and_then(|f| f.block_reason);
        return Err(match reason {
            Some(reason) => GatewayError::Blocked(reason),
            None => GatewayError::InvalidResponse,
        });
    };

    first.content
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or(GatewayError::InvalidResponse)
}

/// Only a JSON syntax failure is an error; the shape is taken as-is.
fn parse_reply(text: String) -> Result<AiResponse, GatewayError> {
    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(value) => Ok(AiResponse::from_value(&value)),
        Err(source) => {
            error!("Failed to parse JSON response: {}", source);
            error!("Raw text from Gemini: {}", text);
            Err(GatewayError::MalformedResponse { raw: text, source })
        }
    }
}

pub struct GeminiChatClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: Option<String>,
    model: String,
    temperature: f32,
}

impl GeminiChatClient {
    pub fn new(
        api_key: Option<String>,
        model: String,
        base_url: &str,
        temperature: f32
    ) -> Result<Self, GatewayError> {
        let raw = format!("{}/{}:generateContent", base_url.trim_end_matches('/'), model);
        let endpoint = Url::parse(&raw).map_err(|source| GatewayError::InvalidEndpoint {
            url: raw.clone(),
            source,
        })?;
        let api_key = api_key.filter(|k| !k.trim().is_empty());

        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
            api_key,
            model,
            temperature,
        })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, GatewayError> {
        Self::new(
            config.api_key.clone(),
            config.model.clone(),
            &config.base_url,
            config.temperature
        )
    }

    fn url_with_key(&self, key: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("key", key);
        url
    }
}

#[async_trait]
impl ChatClient for GeminiChatClient {
    async fn generate(
        &self,
        contents: &[Content],
        system_instruction: &str
    ) -> Result<AiResponse, GatewayError> {
        let key = self.api_key.as_deref().ok_or(GatewayError::Configuration)?;

        info!(
            "GeminiChatClient::generate() → model={} contents={}",
            self.model,
            contents.len()
        );

        let payload = build_request(contents, system_instruction, self.temperature);
        let resp = self.http
            .post(self.url_with_key(key))
            .json(&payload)
            .send().await
            .map_err(|e| {
                let e = GatewayError::from(e);
                error!("HTTP Request failed: {}", e);
                e
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            error!("Gemini API returned {}: {}", status, body);
            return Err(GatewayError::HttpStatus { status: status.as_u16(), body });
        }

        let result: GenerateContentResponse = resp.json().await?;
        let text = extract_text(result).map_err(|e| {
            error!("Unusable Gemini response: {}", e);
            e
        })?;
        parse_reply(text)
    }

    fn get_model(&self) -> String {
        self.model.clone()
    }
}
