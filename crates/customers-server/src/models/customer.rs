//! Customer transport record
//!
//! The DTO carries raw values only. All validation happens in the domain
//! constructors; conversion simply attempts construction.
//!
//! On writes the identity comes from the URL, so the body `id` may be
//! omitted (or sent as 0).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use customers::{
    Customer, CustomerId, EmailAddress, PersonalName, UpsertOutcome, ValidationError,
    ValidationErrors,
};

/// Customer as exchanged over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    /// Optional on writes; the path id is authoritative
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Alice")]
    pub first_name: String,
    #[schema(example = "Adams")]
    pub last_name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
}

impl CustomerDto {
    /// Sample write body; the id is left for the URL to supply
    pub fn example() -> Self {
        Self {
            id: 0,
            first_name: "Alice".to_string(),
            last_name: "Adams".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    /// Convert a PUT body addressed to `path_id`.
    ///
    /// A body id of 0 means "not given". Any other body id must match the
    /// path id; every other check is delegated to the domain constructors.
    pub fn into_customer_for(self, path_id: i64) -> Result<Customer, ValidationErrors> {
        let id = if self.id == 0 || self.id == path_id {
            CustomerId::new(path_id)
        } else {
            Err(ValidationError::IdMismatch {
                path: path_id,
                body: self.id,
            })
        };

        Customer::assemble(
            id,
            PersonalName::new(&self.first_name, &self.last_name),
            EmailAddress::new(&self.email),
        )
    }
}

impl TryFrom<CustomerDto> for Customer {
    type Error = ValidationErrors;

    fn try_from(dto: CustomerDto) -> Result<Self, Self::Error> {
        Customer::assemble(
            CustomerId::new(dto.id),
            PersonalName::new(&dto.first_name, &dto.last_name),
            EmailAddress::new(&dto.email),
        )
    }
}

impl From<&Customer> for CustomerDto {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id().value(),
            first_name: customer.name().first().to_string(),
            last_name: customer.name().last().to_string(),
            email: customer.email().as_str().to_string(),
        }
    }
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self::from(&customer)
    }
}

/// Result of an upsert
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertResponse {
    pub customer: CustomerDto,
    /// True when no record existed for the id
    pub created: bool,
    /// True when an existing record's email was replaced
    pub email_changed: bool,
}

impl UpsertResponse {
    pub fn new(customer: &Customer, outcome: &UpsertOutcome) -> Self {
        Self {
            customer: customer.into(),
            created: outcome.is_created(),
            email_changed: outcome.email_change().is_some(),
        }
    }
}
