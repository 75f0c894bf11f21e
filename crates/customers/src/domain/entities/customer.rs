//! Customer - The customer aggregate
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationErrors;
use crate::domain::value_objects::{CustomerId, EmailAddress, PersonalName};

/// Customer aggregate.
///
/// Every component is validated on its own, so a `Customer` is valid by
/// construction and cannot be observed half-built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: PersonalName,
    email: EmailAddress,
}

impl Customer {
    pub fn new(id: CustomerId, name: PersonalName, email: EmailAddress) -> Self {
        Self { id, name, email }
    }

    /// Combine the outcome of the three value constructors.
    ///
    /// Returns a customer only if every component is present; otherwise all
    /// component failures are returned together.
    pub fn assemble<E1, E2, E3>(
        id: Result<CustomerId, E1>,
        name: Result<PersonalName, E2>,
        email: Result<EmailAddress, E3>,
    ) -> Result<Self, ValidationErrors>
    where
        E1: Into<ValidationErrors>,
        E2: Into<ValidationErrors>,
        E3: Into<ValidationErrors>,
    {
        match (id, name, email) {
            (Ok(id), Ok(name), Ok(email)) => Ok(Self::new(id, name, email)),
            (id, name, email) => {
                // At least one component failed, so the collection is non-empty.
                let mut errors = ValidationErrors::collecting();
                let failures: [Option<ValidationErrors>; 3] = [
                    id.err().map(Into::into),
                    name.err().map(Into::into),
                    email.err().map(Into::into),
                ];
                for failure in failures.into_iter().flatten() {
                    errors.extend(failure);
                }
                Err(errors)
            }
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &PersonalName {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}
