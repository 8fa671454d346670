//! Dataset Source Port
//!
//! Abstract interface for loading the four journey datasets.
//! Loading happens once at startup; the result is never written back.

use crate::domain::{errors::DomainError, JourneyDataset};

/// Where messages, decisions, persona and metrics come from
pub trait DatasetSource: Send + Sync {
    /// Short description for logs (a directory, a URL, ...)
    fn describe(&self) -> String;

    /// Load every dataset.
    ///
    /// A missing required input is `DomainError::DataMissing`; unreadable
    /// content is `DomainError::Malformed`. No partial dataset is returned.
    fn load(&self) -> Result<JourneyDataset, DomainError>;
}
