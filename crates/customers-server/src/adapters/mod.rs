//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod memory;
pub mod notifiers;

// Re-exports
pub use memory::{demo_customers, InMemoryCustomerRepository};
pub use notifiers::{LogNotifier, WebhookConfig, WebhookNotifier};
