//! Dataset DTOs - The four datasets as returned by the read API

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use journey::{Decision, Message, MetricsRow, Persona};

/// Chat message
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub id: i64,
    pub speaker: String,
    /// ISO timestamp as written in the source file
    pub timestamp: String,
    pub text: String,
}

/// Decision log entry
#[derive(Debug, Serialize, ToSchema)]
pub struct DecisionResponse {
    pub id: u64,
    pub title: String,
    #[serde(rename = "type")]
    pub decision_type: String,
    /// ISO date as written in the source file
    pub date: String,
    pub rationale: String,
    pub source_message_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pillar: Option<String>,
}

/// Member persona. Missing fields read "N/A"; unknown keys are passed through.
#[derive(Debug, Serialize, ToSchema)]
pub struct PersonaResponse {
    pub member: String,
    pub age: String,
    pub occupation: String,
    pub goals: Vec<String>,
    pub snapshot_date: String,
    pub executive_summary: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One day of metrics, flat
#[derive(Debug, Serialize, ToSchema)]
pub struct MetricsRowResponse {
    pub date: NaiveDate,
    pub doctor_hours: f64,
    pub pt_hours: f64,
    pub ruby_hours: f64,
    pub performance_hours: f64,
    pub nutrition_hours: f64,
    pub hrv: Option<f64>,
    pub fatigue: Option<f64>,
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id,
            speaker: message.speaker.clone(),
            timestamp: message.timestamp.as_str().to_string(),
            text: message.text.clone(),
        }
    }
}

impl From<&Decision> for DecisionResponse {
    fn from(decision: &Decision) -> Self {
        Self {
            id: decision.id,
            title: decision.title.clone(),
            decision_type: decision.decision_type.label().to_string(),
            date: decision.date.as_str().to_string(),
            rationale: decision.rationale.clone(),
            source_message_ids: decision.source_message_ids.clone(),
            before: decision.before.clone(),
            after: decision.after.clone(),
            pillar: decision.pillar.clone(),
        }
    }
}

impl From<&Persona> for PersonaResponse {
    fn from(persona: &Persona) -> Self {
        Self {
            member: persona.member.clone(),
            age: persona.age.clone(),
            occupation: persona.occupation.clone(),
            goals: persona.goals.clone(),
            snapshot_date: persona.snapshot_date.clone(),
            executive_summary: persona.executive_summary.clone(),
            extra: persona
                .extra
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

impl From<&MetricsRow> for MetricsRowResponse {
    fn from(row: &MetricsRow) -> Self {
        Self {
            date: row.date,
            doctor_hours: row.doctor_hours,
            pt_hours: row.pt_hours,
            ruby_hours: row.ruby_hours,
            performance_hours: row.performance_hours,
            nutrition_hours: row.nutrition_hours,
            hrv: row.hrv,
            fatigue: row.fatigue,
        }
    }
}
