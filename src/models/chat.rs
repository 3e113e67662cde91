use serde::{ Serialize, Deserialize };
use serde_json::Value;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the transcript the browser keeps. Oldest first.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `"English"` asks for French to English; anything else lets the model
/// detect the direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TargetLang {
    English,
    #[default]
    Auto,
}

impl From<String> for TargetLang {
    fn from(value: String) -> Self {
        if value == "English" { TargetLang::English } else { TargetLang::Auto }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub conversation_history: Vec<ConversationMessage>,
    pub difficulty: Difficulty,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text_to_translate: String,
    #[serde(default)]
    pub target_lang: TargetLang,
}

/// The JSON object the model is instructed to emit. Missing fields fall back
/// to their defaults; nothing beyond a successful parse is enforced.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiResponse {
    #[serde(default)]
    pub reply: String,
    #[serde(default)]
    pub correction_tip: Option<String>,
}

impl AiResponse {
    /// Reads whatever JSON the model produced. A `reply` that is not a
    /// string becomes empty; a `correctionTip` that is not a string becomes null.
    pub fn from_value(value: &Value) -> Self {
        Self {
            reply: value.get("reply").and_then(Value::as_str).unwrap_or_default().to_string(),
            correction_tip: value.get("correctionTip").and_then(Value::as_str).map(str::to_string),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
