//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod decision_type;
mod timestamp;

pub use decision_type::*;
pub use timestamp::*;
