use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::payload::Payload;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Opaque, generation-ordered message identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

/// One turn in the conversation. Immutable once appended to the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    /// Plain display text. Empty when the payload carries the whole answer.
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub payload: Option<Payload>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// A message that has not been assigned an id yet.
/// The conversation log stamps the id when it appends the draft.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub role: Role,
    pub text: String,
    pub payload: Option<Payload>,
    pub created_at: DateTime<Utc>,
}

impl NewMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            payload: None,
            created_at: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            payload: None,
            created_at: Utc::now(),
        }
    }

    pub fn card(payload: Payload) -> Self {
        Self {
            role: Role::Assistant,
            text: String::new(),
            payload: Some(payload),
            created_at: Utc::now(),
        }
    }

    pub fn into_message(self, id: MessageId) -> Message {
        Message {
            id,
            role: self.role,
            text: self.text,
            payload: self.payload,
            created_at: self.created_at,
        }
    }
}
