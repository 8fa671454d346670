//! Domain Services
//!
//! Pure query logic over an in-memory [`JourneyDataset`](crate::JourneyDataset).
//! Every call recomputes from the dataset; nothing is cached.

mod conversation;
mod kpi;
mod metrics_range;
mod timeline;
mod view;

pub use conversation::*;
pub use kpi::*;
pub use metrics_range::*;
pub use timeline::*;
pub use view::*;
