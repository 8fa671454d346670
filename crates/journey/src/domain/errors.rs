//! Domain Errors
//!
//! Error types for domain operations.

use std::path::Path;

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Required data file missing: {dataset} ({path})")]
    DataMissing { dataset: String, path: String },

    #[error("Malformed {dataset} data: {reason}")]
    Malformed { dataset: String, reason: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn data_missing<T: AsRef<str>>(dataset: T, path: &Path) -> Self {
        Self::DataMissing {
            dataset: dataset.as_ref().to_string(),
            path: path.display().to_string(),
        }
    }

    pub fn malformed<T: AsRef<str>>(dataset: T, reason: impl std::fmt::Display) -> Self {
        Self::Malformed {
            dataset: dataset.as_ref().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether the error means the dataset could not be found at all
    pub fn is_missing_data(&self) -> bool {
        matches!(self, Self::DataMissing { .. })
    }
}
