//! In-memory implementation of CustomerRepository

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use customers::{Customer, CustomerId, CustomerRepository, EmailChange, RepositoryError, UpsertOutcome};

/// Map-backed store keyed by customer identity.
///
/// One lock guards the whole map; every operation holds it for exactly one
/// critical section and never across an await point.
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given customers (later duplicates win).
    pub fn with_customers(customers: impl IntoIterator<Item = Customer>) -> Self {
        let map = customers.into_iter().map(|c| (c.id(), c)).collect();
        Self {
            customers: RwLock::new(map),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<CustomerId, Customer>>, RepositoryError> {
        self.customers
            .read()
            .map_err(|e| RepositoryError::Backend(format!("customer store lock poisoned: {e}")))
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, HashMap<CustomerId, Customer>>, RepositoryError> {
        self.customers
            .write()
            .map_err(|e| RepositoryError::Backend(format!("customer store lock poisoned: {e}")))
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let mut all: Vec<Customer> = self.read()?.values().cloned().collect();
        all.sort_by_key(Customer::id);
        Ok(all)
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn insert(&self, customer: &Customer) -> Result<(), RepositoryError> {
        let mut customers = self.write()?;
        if customers.contains_key(&customer.id()) {
            return Err(RepositoryError::DuplicateKey(customer.id().value()));
        }
        customers.insert(customer.id(), customer.clone());
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<Customer, RepositoryError> {
        let mut customers = self.write()?;
        match customers.get_mut(&customer.id()) {
            Some(existing) => Ok(std::mem::replace(existing, customer.clone())),
            None => Err(RepositoryError::KeyNotFound(customer.id().value())),
        }
    }

    async fn upsert(&self, customer: &Customer) -> Result<UpsertOutcome, RepositoryError> {
        let previous = self.write()?.insert(customer.id(), customer.clone());

        Ok(match previous {
            None => UpsertOutcome::Inserted,
            Some(previous) => UpsertOutcome::Updated {
                email_change: EmailChange::between(&previous, customer),
            },
        })
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.len())
    }
}
