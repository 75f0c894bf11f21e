//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.
//! Each one can only be obtained through its validating constructor.

mod customer_id;
mod email_address;
mod personal_name;

pub use customer_id::*;
pub use email_address::*;
pub use personal_name::*;
