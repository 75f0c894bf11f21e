//! Customers API Routes
//!
//! - /example - sample customer body
//! - /customers - list customers
//! - /customers/:id - get or upsert one customer
//! - /swagger-ui - OpenAPI documentation

pub mod customer;
pub mod swagger;
