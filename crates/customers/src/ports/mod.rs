//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems (storage, notifications).
//!
//! Implementations of these traits live in the server crate.

pub mod notifier;
pub mod repositories;

// Re-exports
pub use notifier::*;
pub use repositories::*;
