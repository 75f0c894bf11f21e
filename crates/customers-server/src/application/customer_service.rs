//! Customer Application Service (Use Case)
//!
//! Orchestrates store access and email-change notification.

use std::sync::Arc;

use customers::{
    Customer, CustomerId, CustomerRepository, DomainError, EmailChangeNotifier, UpsertOutcome,
};

/// Application service for customer operations
///
/// `R` may be unsized, so the server can hold `dyn CustomerRepository`.
pub struct CustomerService<R: CustomerRepository + ?Sized> {
    repo: Arc<R>,
    notifier: Arc<dyn EmailChangeNotifier>,
}

impl<R: CustomerRepository + ?Sized> CustomerService<R> {
    pub fn new(repo: Arc<R>, notifier: Arc<dyn EmailChangeNotifier>) -> Self {
        Self { repo, notifier }
    }

    /// Get all customers
    pub async fn list_all(&self) -> Result<Vec<Customer>, DomainError> {
        Ok(self.repo.find_all().await?)
    }

    /// Get a customer by ID; a missing record is `DomainError::NotFound`
    pub async fn get_by_id(&self, id: CustomerId) -> Result<Customer, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Customer", id))
    }

    /// Insert or replace a customer.
    ///
    /// When an existing record's email changed, the notifier is called
    /// exactly once. The record is already stored at that point, so a
    /// notifier failure is logged rather than returned.
    pub async fn upsert(&self, customer: &Customer) -> Result<UpsertOutcome, DomainError> {
        let outcome = self.repo.upsert(customer).await?;

        tracing::info!(
            customer_id = %customer.id(),
            created = outcome.is_created(),
            "Upserted customer"
        );

        if let Some(change) = outcome.email_change() {
            if let Err(e) = self.notifier.notify(change).await {
                tracing::warn!(
                    customer_id = %change.customer_id,
                    error = %e,
                    "Email change notification failed"
                );
            }
        }

        Ok(outcome)
    }

    /// Number of stored customers
    pub async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.repo.count().await?)
    }
}
