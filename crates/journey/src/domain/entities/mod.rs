//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Message: one chat-log entry between member and care team
//! - Decision: a health-plan choice with rationale and cited messages
//! - Persona: the member profile card
//! - MetricsRow: one day of internal metrics

mod decision;
mod message;
mod metrics_row;
mod persona;

pub use decision::*;
pub use message::*;
pub use metrics_row::*;
pub use persona::*;
