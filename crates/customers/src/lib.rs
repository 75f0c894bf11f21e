//! Customers Domain Library
//!
//! Core domain types and interfaces for the customers API.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `value_objects/`: Validated values (CustomerId, PersonalName, EmailAddress)
//!   - `entities/`: The Customer aggregate and upsert outcomes
//!   - `errors/`: Validation, repository and domain error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `notifier`: Email-change notification interface
//!
//! # Usage
//!
//! ```rust
//! use customers::{Customer, CustomerId, EmailAddress, PersonalName};
//!
//! let customer = Customer::assemble(
//!     CustomerId::new(1),
//!     PersonalName::new("Alice", "Adams"),
//!     EmailAddress::new("alice@example.com"),
//! )
//! .unwrap();
//! assert_eq!(customer.id().value(), 1);
//!
//! assert!(CustomerId::new(0).is_err());
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Customer, CustomerId, DomainError, EmailAddress, EmailChange, PersonalName, RepositoryError,
    UpsertOutcome, ValidationError, ValidationErrors, EMAIL_MAX_LEN, NAME_PART_MAX_LEN,
};
pub use ports::{CustomerRepository, EmailChangeNotifier};
