use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::VentasError;

/// A chat message posted to the dashboard assistant.
///
/// `text` is kept as a raw JSON value: clients occasionally send numbers,
/// arrays or `null`, and those must degrade to "no intent" rather than fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Dashboard user who wrote the message.
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub text: Value,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl IncomingMessage {
    /// Build a message from plain text.
    pub fn from_text(text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: None,
            text: Value::String(text.to_string()),
            timestamp: Utc::now(),
        }
    }

    /// Parse one line of a chat log.
    ///
    /// Lines starting with `{` are JSON objects; anything else is the message text.
    pub fn parse_line(line: &str) -> Result<Self, VentasError> {
        let trimmed = line.trim();
        if trimmed.starts_with('{') {
            serde_json::from_str(trimmed)
                .map_err(|e| VentasError::Message(format!("invalid chat message: {e}")))
        } else {
            Ok(Self::from_text(line))
        }
    }

    /// The text content, if it is a JSON string.
    pub fn text_str(&self) -> Option<&str> {
        self.text.as_str()
    }
}

/// What the chat route should do with a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    /// Trigger the sales-data import/update flow.
    ImportSales,
    /// Treat as a normal chat message.
    Chat,
}

impl ChatAction {
    pub fn from_intent(is_update: bool) -> Self {
        if is_update {
            Self::ImportSales
        } else {
            Self::Chat
        }
    }
}
