//! Journey API Models
//!
//! - Dataset records: Message, Decision, Persona, MetricsRow as served by the read API
//! - Views: KPI tiles, timeline, conversation search, metrics range
//! - Dashboard: profile card plus headline numbers

mod dashboard;
mod dataset;
mod views;

pub use dashboard::*;
pub use dataset::*;
pub use views::*;
