//! Domain Entities
//!
//! - Customer: the validated customer aggregate
//! - EmailChange / UpsertOutcome: what replacing a record changed

mod customer;
mod upsert;

pub use customer::*;
pub use upsert::*;
