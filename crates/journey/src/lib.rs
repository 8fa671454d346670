//! Journey Domain Library
//!
//! Core domain types and query services for the member health journey viewer.
//!
//! # Architecture
//!
//! This crate follows the same Hexagonal layout as the server that hosts it:
//!
//! - **Domain Layer** (`domain/`): Pure entities and logic
//!   - `entities/`: Message, Decision, Persona, MetricsRow
//!   - `value_objects/`: Immutable value types (Timestamp, DecisionType)
//!   - `services/`: KPI aggregation, timeline, conversation search, metrics range
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `DatasetSource`: where the four datasets come from
//!
//! # Usage
//!
//! ```rust,ignore
//! use journey::{JourneyView, TimelineFilter};
//!
//! let view = JourneyView::new(Arc::new(dataset));
//! let entries = view.timeline(&TimelineFilter::with_query("interval"));
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    DateRange, Decision, DecisionType, DomainError, JourneyDataset, JourneyView, Kpi, Message,
    MetricsRow, Persona, TimelineEntry, TimelineFilter, Timestamp, DEFAULT_CONVERSATION_LIMIT,
    DEFAULT_KPI_COLUMNS, PLACEHOLDER,
};
pub use ports::DatasetSource;
