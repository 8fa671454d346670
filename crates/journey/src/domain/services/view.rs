//! JourneyView - Query facade over a loaded dataset
//!
//! Holds the dataset plus the few knobs the views need (KPI columns,
//! chat log length). Cheap to clone; the dataset itself is shared.

use std::sync::Arc;

use super::conversation::{search_messages, DEFAULT_CONVERSATION_LIMIT};
use super::kpi::{aggregate_kpis, Kpi, DEFAULT_KPI_COLUMNS};
use super::metrics_range::{date_span, filter_metrics, DateRange};
use super::timeline::{build_timeline, TimelineEntry, TimelineFilter};
use crate::domain::entities::{Message, MetricsRow};
use crate::domain::JourneyDataset;

#[derive(Debug, Clone)]
pub struct JourneyView {
    dataset: Arc<JourneyDataset>,
    kpi_columns: Vec<String>,
    conversation_limit: usize,
}

impl JourneyView {
    pub fn new(dataset: Arc<JourneyDataset>) -> Self {
        Self {
            dataset,
            kpi_columns: DEFAULT_KPI_COLUMNS.iter().map(|c| c.to_string()).collect(),
            conversation_limit: DEFAULT_CONVERSATION_LIMIT,
        }
    }

    pub fn with_kpi_columns(mut self, columns: Vec<String>) -> Self {
        self.kpi_columns = columns;
        self
    }

    pub fn with_conversation_limit(mut self, limit: usize) -> Self {
        self.conversation_limit = limit;
        self
    }

    pub fn dataset(&self) -> &JourneyDataset {
        &self.dataset
    }

    pub fn kpi_columns(&self) -> &[String] {
        &self.kpi_columns
    }

    pub fn conversation_limit(&self) -> usize {
        self.conversation_limit
    }

    pub fn kpis(&self) -> Vec<Kpi> {
        aggregate_kpis(self.dataset.metrics(), self.kpi_columns.as_slice())
    }

    pub fn timeline(&self, filter: &TimelineFilter) -> Vec<TimelineEntry<'_>> {
        build_timeline(&self.dataset, filter)
    }

    /// Chat log search; `limit` overrides the configured length
    pub fn search_conversation(&self, query: &str, limit: Option<usize>) -> Vec<&Message> {
        search_messages(
            self.dataset.messages(),
            query,
            limit.unwrap_or(self.conversation_limit),
        )
    }

    pub fn metrics_in_range(&self, range: DateRange) -> Vec<&MetricsRow> {
        filter_metrics(self.dataset.metrics(), range)
    }

    /// First and last metrics date, for seeding a date picker
    pub fn metrics_span(&self) -> Option<(chrono::NaiveDate, chrono::NaiveDate)> {
        date_span(self.dataset.metrics())
    }
}
