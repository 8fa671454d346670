//! Application Layer (Use Cases)
//!
//! Loads the datasets through a `DatasetSource` and answers view queries.

mod journey_service;

pub use journey_service::{DashboardSummary, JourneyService};
