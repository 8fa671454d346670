//! Journey API Client

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// API Client for the Journey server
pub struct JourneyClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: i64,
    pub speaker: String,
    pub timestamp: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct DecisionResponse {
    pub id: u64,
    pub title: String,
    #[serde(rename = "type")]
    pub decision_type: String,
    pub date: String,
    pub rationale: String,
    #[serde(default)]
    pub before: Option<String>,
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub pillar: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PersonaResponse {
    pub member: String,
    pub age: String,
    pub occupation: String,
    pub goals: Vec<String>,
    pub snapshot_date: String,
    pub executive_summary: String,
}

#[derive(Debug, Deserialize)]
pub struct KpiResponse {
    pub label: String,
    pub total: f64,
    pub change_pct: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct DashboardStats {
    pub message_count: usize,
    pub decision_count: usize,
    pub metrics_days: usize,
    pub first_metrics_date: Option<NaiveDate>,
    pub last_metrics_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct DashboardResponse {
    pub profile: PersonaResponse,
    pub kpis: Vec<KpiResponse>,
    pub stats: DashboardStats,
}

#[derive(Debug, Deserialize)]
pub struct TimelineEntryResponse {
    pub decision: DecisionResponse,
    pub icon: String,
    pub trail: Vec<MessageResponse>,
}

#[derive(Debug, Deserialize)]
pub struct TimelineResponse {
    pub count: usize,
    pub entries: Vec<TimelineEntryResponse>,
    pub empty_state: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConversationResponse {
    pub count: usize,
    pub limit: usize,
    pub messages: Vec<MessageResponse>,
    pub empty_state: Option<String>,
}

#[derive(Debug, Deserialize)]
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

#[derive(Debug, Deserialize)]
pub struct MetricsRangeResponse {
    pub count: usize,
    pub rows: Vec<MetricsRowResponse>,
    pub empty_state: Option<String>,
}

impl JourneyClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Profile card, KPI tiles and dataset coverage
    pub async fn dashboard(&self) -> Result<DashboardResponse> {
        self.get("/dashboard", &[]).await
    }

    /// KPI tiles
    pub async fn kpis(&self) -> Result<Vec<KpiResponse>> {
        self.get("/views/kpis", &[]).await
    }

    /// Filtered decision timeline
    pub async fn timeline(
        &self,
        query: Option<&str>,
        pillar: Option<&str>,
        decision_type: Option<&str>,
    ) -> Result<TimelineResponse> {
        let params = query_params(&[
            ("query", query.map(str::to_string)),
            ("pillar", pillar.map(str::to_string)),
            ("type", decision_type.map(str::to_string)),
        ]);
        self.get("/views/timeline", &params).await
    }

    /// Conversation search, newest first
    pub async fn conversation(
        &self,
        query: Option<&str>,
        limit: Option<usize>,
    ) -> Result<ConversationResponse> {
        let params = query_params(&[
            ("query", query.map(str::to_string)),
            ("limit", limit.map(|l| l.to_string())),
        ]);
        self.get("/views/conversation", &params).await
    }

    /// Metrics rows between two inclusive dates
    pub async fn metrics_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<MetricsRangeResponse> {
        let params = query_params(&[
            ("start", start.map(|d| d.to_string())),
            ("end", end.map(|d| d.to_string())),
        ]);
        self.get("/views/metrics", &params).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .context("Failed to connect to Journey API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }
}

/// Keep only the parameters that were given
fn query_params<'a>(pairs: &[(&'a str, Option<String>)]) -> Vec<(&'a str, String)> {
    pairs
        .iter()
        .filter_map(|(key, value)| value.clone().map(|v| (*key, v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_skip_missing_values() {
        let params = query_params(&[
            ("query", Some("statin".to_string())),
            ("pillar", None),
            ("type", Some("Medication".to_string())),
        ]);
        assert_eq!(
            params,
            vec![("query", "statin".to_string()), ("type", "Medication".to_string())]
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = JourneyClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_kpi_with_null_change_parses() {
        let kpi: KpiResponse = serde_json::from_str(
            r#"{"column": "doctor_hours", "label": "Doctor Hours", "total": 3.0, "change_pct": null}"#,
        )
        .unwrap();
        assert_eq!(kpi.change_pct, None);
        assert_eq!(kpi.total, 3.0);
    }

    #[test]
    fn test_timeline_without_optional_fields_parses() {
        let timeline: TimelineResponse = serde_json::from_str(
            r#"{
                "count": 1,
                "entries": [{
                    "decision": {
                        "id": 3, "title": "Book lipid panel", "type": "Other",
                        "date": "2025-02-01", "rationale": "", "source_message_ids": [4]
                    },
                    "icon": "📌",
                    "trail": [{"id": 4, "speaker": "Ruby", "timestamp": "2025-02-01T12:00:00", "text": "Booked"}]
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(timeline.count, 1);
        assert!(timeline.empty_state.is_none());
        assert_eq!(timeline.entries[0].decision.pillar, None);
        assert_eq!(timeline.entries[0].trail[0].id, 4);
    }
}
