//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::error::{ErrorResponse, FieldError};
use crate::models::{CustomerDto, UpsertResponse};
use crate::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        super::customer::example_customer,
        super::customer::list_customers,
        super::customer::get_customer,
        super::customer::upsert_customer,
    ),
    components(schemas(CustomerDto, UpsertResponse, ErrorResponse, FieldError, HealthCheck)),
    tags(
        (name = "Customer", description = "Customer records"),
        (name = "Health", description = "Service health")
    ),
    info(
        title = "Customers API",
        description = "Retrieve and upsert validated customer records"
    )
)]
pub struct ApiDoc;
