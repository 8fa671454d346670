//! Decision Entity
//!
//! A recorded health-plan choice, the rationale behind it and the chat
//! messages that justify it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::value_objects::{DecisionType, Timestamp};

/// Decision - one entry of the decision log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    /// Stable key. Assigned from file position when the source has none.
    #[serde(default, deserialize_with = "positive_id")]
    pub id: u64,
    pub title: String,
    #[serde(rename = "type", default)]
    pub decision_type: DecisionType,
    pub date: Timestamp,
    #[serde(default, deserialize_with = "nullable_text")]
    pub rationale: String,
    /// Messages cited as evidence, in source order
    #[serde(default)]
    pub source_message_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Informal category tag (Autonomic, Structural, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pillar: Option<String>,
}

impl Decision {
    pub fn new(
        title: impl Into<String>,
        decision_type: DecisionType,
        date: Timestamp,
        rationale: impl Into<String>,
        source_message_ids: Vec<i64>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            decision_type,
            date,
            rationale: rationale.into(),
            source_message_ids,
            before: None,
            after: None,
            pillar: None,
        }
    }

    pub fn with_pillar(mut self, pillar: impl Into<String>) -> Self {
        self.pillar = Some(pillar.into());
        self
    }

    pub fn with_change(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self.after = Some(after.into());
        self
    }

    /// Case-insensitive substring match on title, type or rationale, one
    /// field at a time. `needle` must already be lowercase.
    pub fn matches_query(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [
            self.title.as_str(),
            self.decision_type.label(),
            self.rationale.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }

    pub fn has_pillar(&self, pillar: &str) -> bool {
        self.pillar
            .as_deref()
            .is_some_and(|p| p.trim().eq_ignore_ascii_case(pillar.trim()))
    }
}

/// Positive integer ids only; null, zero, negative or non-numeric read as 0
fn positive_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
