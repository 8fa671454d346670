//! Journey API Routes
//!
//! - /messages, /decisions, /persona, /metrics - Read API over the raw datasets
//! - /views/kpis, /views/timeline, /views/conversation, /views/metrics - Derived views
//! - /dashboard - Profile card and headline numbers

pub mod dashboard;
pub mod dataset;
pub mod swagger;
pub mod views;
