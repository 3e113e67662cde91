use serde::{ Serialize, Deserialize };

use super::chat::{ ConversationMessage, Role };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentRole {
    User,
    Model,
}

impl From<Role> for ContentRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => ContentRole::User,
            Role::Assistant => ContentRole::Model,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// One entry of the upstream `contents` array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub role: ContentRole,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ContentRole::User,
            parts: vec![Part { text: text.into() }],
        }
    }
}

impl From<&ConversationMessage> for Content {
    fn from(msg: &ConversationMessage) -> Self {
        Self {
            role: msg.role.into(),
            parts: vec![Part { text: msg.content.clone() }],
        }
    }
}
