//! Upsert outcome and email-change detection

use serde::{Deserialize, Serialize};

use super::Customer;
use crate::domain::value_objects::{CustomerId, EmailAddress};

/// An existing customer's email was replaced by a different one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailChange {
    pub customer_id: CustomerId,
    pub previous: EmailAddress,
    pub current: EmailAddress,
}

impl EmailChange {
    /// Compare a stored record with its replacement.
    ///
    /// Returns `None` when the emails are equal or the records belong to
    /// different customers.
    pub fn between(previous: &Customer, current: &Customer) -> Option<Self> {
        if previous.id() != current.id() || previous.email() == current.email() {
            return None;
        }
        Some(Self {
            customer_id: current.id(),
            previous: previous.email().clone(),
            current: current.email().clone(),
        })
    }
}

/// What an upsert did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No record existed for the identity.
    Inserted,
    /// An existing record was replaced.
    Updated { email_change: Option<EmailChange> },
}

impl UpsertOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Inserted)
    }

    pub fn email_change(&self) -> Option<&EmailChange> {
        match self {
            Self::Inserted => None,
            Self::Updated { email_change } => email_change.as_ref(),
        }
    }
}
