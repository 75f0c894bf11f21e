//! In-Memory Repository Implementations

mod customer_repository;
mod seed;

pub use customer_repository::InMemoryCustomerRepository;
pub use seed::demo_customers;
