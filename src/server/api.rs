use crate::config::locale::localized_now_in_french;
use crate::config::prompt::{
    chat_system_prompt,
    difficulty_annotation,
    translate_system_prompt,
    translation_prompt,
    CURRENT_TIME_SENTINEL,
};
use crate::llm::chat::ChatClient;
use crate::llm::GatewayError;
use crate::models::chat::{
    AiResponse,
    ChatRequest,
    ConversationMessage,
    Difficulty,
    ErrorResponse,
    TranslateRequest,
};
use crate::models::content::Content;
use std::sync::Arc;
use axum::{
    routing::post,
    Router,
    Json,
    extract::{ State, rejection::JsonRejection },
    response::{ IntoResponse, Response },
    http::StatusCode,
};
use thiserror::Error;
use tower_http::cors::{ Any, CorsLayer };
use tower_http::services::{ ServeDir, ServeFile };
use log::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    // Every failure kind collapses to the same status and body shape.
    fn into_response(self) -> Response {
        let body = ErrorResponse { error: self.to_string() };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn ChatClient>,
}

/// `/api/chat` and `/api/translate`, without page or asset routes.
pub fn api_routes(client: Arc<dyn ChatClient>) -> Router {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/api/translate", post(translate_handler))
        .with_state(AppState { client })
}

pub fn app(client: Arc<dyn ChatClient>, static_dir: &str, index_path: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api_routes(client)
        .route_service("/", ServeFile::new(index_path))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors)
}

/// Maps the browser transcript onto upstream contents and tags the final
/// turn with the learner's level.
pub fn build_chat_contents(
    history: &[ConversationMessage],
    difficulty: Difficulty
) -> Result<Vec<Content>, ApiError> {
    let mut contents: Vec<Content> = history.iter().map(Content::from).collect();

    let last = contents
        .last_mut()
        .and_then(|c| c.parts.first_mut())
        .ok_or_else(|| {
            ApiError::Validation("conversationHistory must contain at least one message".into())
        })?;
    last.text = difficulty_annotation(difficulty, &last.text);

    Ok(contents)
}

/// Replaces the whole reply when it mentions the time sentinel anywhere.
pub fn resolve_time_request<F>(mut response: AiResponse, now_in_french: F) -> AiResponse
    where F: FnOnce() -> String
{
    if response.reply.contains(CURRENT_TIME_SENTINEL) {
        response.reply = now_in_french();
    }
    response
}

pub async fn handle_chat(
    client: &dyn ChatClient,
    req: ChatRequest
) -> Result<AiResponse, ApiError> {
    let contents = build_chat_contents(&req.conversation_history, req.difficulty)?;
    let response = client.generate(&contents, chat_system_prompt()).await?;
    Ok(resolve_time_request(response, localized_now_in_french))
}

pub async fn handle_translate(
    client: &dyn ChatClient,
    req: TranslateRequest
) -> Result<AiResponse, ApiError> {
    let prompt = translation_prompt(&req.text_to_translate, req.target_lang);
    let contents = vec![Content::user(prompt)];
    let response = client.generate(&contents, translate_system_prompt()).await?;
    Ok(response)
}

async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>
) -> Response {
    let result = match payload {
        Ok(Json(req)) => handle_chat(state.client.as_ref(), req).await,
        Err(rejection) => Err(rejection.into()),
    };
    match result {
        Ok(resp) => Json(resp).into_response(),
        Err(e) => {
            error!("Error in /api/chat: {}", e);
            e.into_response()
        }
    }
}

async fn translate_handler(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>
) -> Response {
    let result = match payload {
        Ok(Json(req)) => handle_translate(state.client.as_ref(), req).await,
        Err(rejection) => Err(rejection.into()),
    };
    match result {
        Ok(resp) => Json(resp).into_response(),
        Err(e) => {
            error!("Error in /api/translate: {}", e);
            e.into_response()
        }
    }
}
