//! Message Entity
//!
//! One entry of the member / care-team chat log.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Timestamp;

/// A chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message ID, referenced by decisions
    pub id: i64,
    /// Who wrote the message (member name or care-team role)
    #[serde(default)]
    pub speaker: String,
    /// When the message was sent
    pub timestamp: Timestamp,
    /// Message body
    #[serde(default)]
    pub text: String,
}

impl Message {
    pub fn new(
        id: i64,
        speaker: impl Into<String>,
        timestamp: Timestamp,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            speaker: speaker.into(),
            timestamp,
            text: text.into(),
        }
    }

    /// Case-insensitive substring match on the body. `needle` must already be lowercase.
    pub fn text_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.text.to_lowercase().contains(needle)
    }
}
