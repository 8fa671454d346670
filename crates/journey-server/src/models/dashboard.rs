//! Dashboard DTOs - Profile card and headline numbers

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::{KpiResponse, PersonaResponse};

/// Dashboard response - everything above the fold
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub profile: PersonaResponse,
    pub kpis: Vec<KpiResponse>,
    pub stats: DashboardStats,
}

/// Dataset sizes and coverage
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    /// Where the datasets were loaded from
    pub data_source: String,
    pub message_count: usize,
    pub decision_count: usize,
    pub metrics_days: usize,
    pub first_metrics_date: Option<NaiveDate>,
    pub last_metrics_date: Option<NaiveDate>,
}
