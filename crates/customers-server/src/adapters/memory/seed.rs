//! Demo data for local runs

use customers::{Customer, CustomerId, EmailAddress, PersonalName, ValidationErrors};

const DEMO: [(i64, &str, &str, &str); 3] = [
    (1, "Alice", "Adams", "alice@example.com"),
    (2, "Bob", "Brown", "bob@example.com"),
    (3, "Carol", "Clark", "carol@example.com"),
];

/// Customers loaded when `CUSTOMERS_SEED_DEMO` is enabled.
pub fn demo_customers() -> Result<Vec<Customer>, ValidationErrors> {
    DEMO.iter()
        .map(|(id, first, last, email)| {
            Customer::assemble(
                CustomerId::new(*id),
                PersonalName::new(first, last),
                EmailAddress::new(email),
            )
        })
        .collect()
}
