//! Email Change Notification Port
//!
//! Abstract interface for announcing that a customer's email changed.

use async_trait::async_trait;

use crate::domain::{DomainError, EmailChange};

/// Notification interface for email changes
///
/// Called by the application layer after an upsert reports an
/// [`EmailChange`]; implementations decide how the news leaves the process
/// (log line, webhook, ...).
#[async_trait]
pub trait EmailChangeNotifier: Send + Sync {
    async fn notify(&self, change: &EmailChange) -> Result<(), DomainError>;
}
