//! Customer Repository Port
//!
//! Abstract interface for customer persistence, keyed by identity.

use async_trait::async_trait;

use crate::domain::{Customer, CustomerId, RepositoryError, UpsertOutcome};

/// Repository interface for Customer aggregates
///
/// Every operation is a single-key read or replace; implementations must
/// make each call atomic with respect to the others.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find all customers (order is not significant)
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError>;

    /// Find a customer by identity
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError>;

    /// Insert a new customer, failing with `DuplicateKey` if one exists
    async fn insert(&self, customer: &Customer) -> Result<(), RepositoryError>;

    /// Replace an existing customer, failing with `KeyNotFound` if absent.
    /// Returns the record that was replaced.
    async fn update(&self, customer: &Customer) -> Result<Customer, RepositoryError>;

    /// Insert if absent, replace if present
    async fn upsert(&self, customer: &Customer) -> Result<UpsertOutcome, RepositoryError>;

    /// Number of stored customers
    async fn count(&self) -> Result<usize, RepositoryError>;
}
