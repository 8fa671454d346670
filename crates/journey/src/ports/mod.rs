//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! obtains its data from the outside world.
//!
//! Implementations of these traits live in the infrastructure layer.

mod dataset_source;

pub use dataset_source::*;
