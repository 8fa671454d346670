//! Journey Application Service (Use Case)
//!
//! Owns the loaded dataset for the lifetime of the process and exposes the
//! read operations and derived views the routes need.

use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use journey::{
    DatasetSource, DateRange, Decision, DomainError, JourneyView, Kpi, Message, MetricsRow,
    Persona, TimelineEntry, TimelineFilter,
};

/// Everything the dashboard header shows
#[derive(Debug)]
pub struct DashboardSummary<'a> {
    pub persona: &'a Persona,
    pub kpis: Vec<Kpi>,
    pub message_count: usize,
    pub decision_count: usize,
    pub metrics_days: usize,
    pub metrics_span: Option<(NaiveDate, NaiveDate)>,
}

/// Application service for journey queries
pub struct JourneyService<S: DatasetSource> {
    source: Arc<S>,
    view: JourneyView,
}

impl<S: DatasetSource> JourneyService<S> {
    /// Load every dataset from `source`. Fails without a partial result.
    pub fn load(
        source: Arc<S>,
        kpi_columns: Vec<String>,
        conversation_limit: usize,
    ) -> Result<Self, DomainError> {
        let started = Instant::now();
        let dataset = source.load()?;

        tracing::info!(
            "Loaded journey data from {} in {:?}: {} messages, {} decisions, {} metrics rows",
            source.describe(),
            started.elapsed(),
            dataset.messages().len(),
            dataset.decisions().len(),
            dataset.metrics().len()
        );

        let view = JourneyView::new(Arc::new(dataset))
            .with_kpi_columns(kpi_columns)
            .with_conversation_limit(conversation_limit);

        Ok(Self { source, view })
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Get all messages
    pub fn messages(&self) -> &[Message] {
        self.view.dataset().messages()
    }

    /// Get all decisions
    pub fn decisions(&self) -> &[Decision] {
        self.view.dataset().decisions()
    }

    /// Get the persona record
    pub fn persona(&self) -> &Persona {
        self.view.dataset().persona()
    }

    /// Get all metrics rows
    pub fn metrics(&self) -> &[MetricsRow] {
        self.view.dataset().metrics()
    }

    pub fn kpis(&self) -> Vec<Kpi> {
        self.view.kpis()
    }

    pub fn timeline(&self, filter: &TimelineFilter) -> Vec<TimelineEntry<'_>> {
        self.view.timeline(filter)
    }

    /// Search the chat log. A zero `limit` is rejected.
    pub fn conversation(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<&Message>, DomainError> {
        if limit == Some(0) {
            return Err(DomainError::Validation(
                "limit must be at least 1".to_string(),
            ));
        }
        Ok(self.view.search_conversation(query, limit))
    }

    pub fn conversation_limit(&self) -> usize {
        self.view.conversation_limit()
    }

    pub fn metrics_in_range(&self, range: DateRange) -> Vec<&MetricsRow> {
        self.view.metrics_in_range(range)
    }

    pub fn dashboard(&self) -> DashboardSummary<'_> {
        let dataset = self.view.dataset();
        DashboardSummary {
            persona: dataset.persona(),
            kpis: self.view.kpis(),
            message_count: dataset.messages().len(),
            decision_count: dataset.decisions().len(),
            metrics_days: dataset.metrics().len(),
            metrics_span: self.view.metrics_span(),
        }
    }
}
