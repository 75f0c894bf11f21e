//! Log-only email change notifier

use async_trait::async_trait;

use customers::{DomainError, EmailChange, EmailChangeNotifier};

/// Announces email changes as structured log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl EmailChangeNotifier for LogNotifier {
    async fn notify(&self, change: &EmailChange) -> Result<(), DomainError> {
        tracing::info!(
            customer_id = %change.customer_id,
            previous = %change.previous,
            current = %change.current,
            "customer email changed"
        );
        Ok(())
    }
}
