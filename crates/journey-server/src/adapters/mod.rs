//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod files;

// Re-exports
pub use files::FileDatasetSource;
