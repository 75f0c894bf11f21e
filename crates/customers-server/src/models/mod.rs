//! Transport Models
//!
//! JSON request/response bodies and their conversion to and from the
//! domain aggregate.

mod customer;

pub use customer::*;
