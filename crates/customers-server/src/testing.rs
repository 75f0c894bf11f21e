//! Test doubles for the domain ports

use std::sync::Mutex;

use async_trait::async_trait;
use customers::{
    Customer, CustomerId, CustomerRepository, DomainError, EmailChange, EmailChangeNotifier,
    RepositoryError, UpsertOutcome,
};

/// Notifier that records every change it is given
#[derive(Default)]
pub struct RecordingNotifier {
    changes: Mutex<Vec<EmailChange>>,
    fail: bool,
}

impl RecordingNotifier {
    /// Records changes, then reports a delivery failure
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn changes(&self) -> Vec<EmailChange> {
        self.changes.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailChangeNotifier for RecordingNotifier {
    async fn notify(&self, change: &EmailChange) -> Result<(), DomainError> {
        self.changes.lock().unwrap().push(change.clone());
        if self.fail {
            return Err(DomainError::Notification("endpoint down".into()));
        }
        Ok(())
    }
}

/// Repository whose backend is always broken
pub struct BrokenRepository;

fn broken() -> RepositoryError {
    RepositoryError::Backend("disk on fire".into())
}

#[async_trait]
impl CustomerRepository for BrokenRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        Err(broken())
    }
    async fn find_by_id(&self, _: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        Err(broken())
    }
    async fn insert(&self, _: &Customer) -> Result<(), RepositoryError> {
        Err(broken())
    }
    async fn update(&self, _: &Customer) -> Result<Customer, RepositoryError> {
        Err(broken())
    }
    async fn upsert(&self, _: &Customer) -> Result<UpsertOutcome, RepositoryError> {
        Err(broken())
    }
    async fn count(&self) -> Result<usize, RepositoryError> {
        Err(broken())
    }
}
