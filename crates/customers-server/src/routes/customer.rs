//! Customer Routes
//!
//! HTTP handlers that delegate to CustomerService for business logic.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::get,
    Json, Router,
};

use customers::CustomerId;

use crate::error::{ApiResult, ErrorResponse};
use crate::models::{CustomerDto, UpsertResponse};
use crate::AppState;

/// List all customers
#[utoipa::path(
    get,
    path = "/customers",
    responses(
        (status = 200, description = "List of all customers", body = Vec<CustomerDto>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Customer"
)]
pub async fn list_customers(State(state): State<AppState>) -> ApiResult<Json<Vec<CustomerDto>>> {
    let customers = state.customer_service.list_all().await?;

    Ok(Json(customers.iter().map(CustomerDto::from).collect()))
}

/// Get customer by ID
#[utoipa::path(
    get,
    path = "/customers/{id}",
    params(
        ("id" = i64, Path, description = "Customer ID (positive integer)")
    ),
    responses(
        (status = 200, description = "Customer found", body = CustomerDto),
        (status = 400, description = "Invalid customer ID", body = ErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Customer"
)]
pub async fn get_customer(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<CustomerDto>> {
    let Path(id) = path?;
    let id = CustomerId::new(id)?;
    let customer = state.customer_service.get_by_id(id).await?;

    Ok(Json(customer.into()))
}

/// Sample customer body to base a write on
#[utoipa::path(
    get,
    path = "/example",
    responses(
        (status = 200, description = "Sample customer body", body = CustomerDto)
    ),
    tag = "Customer"
)]
pub async fn example_customer() -> Json<CustomerDto> {
    Json(CustomerDto::example())
}

/// Insert or replace a customer
#[utoipa::path(
    put,
    path = "/customers/{id}",
    params(
        ("id" = i64, Path, description = "Customer ID (positive integer)")
    ),
    request_body = CustomerDto,
    responses(
        (status = 200, description = "Customer stored", body = UpsertResponse),
        (status = 400, description = "Invalid customer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Customer"
)]
pub async fn upsert_customer(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CustomerDto>, JsonRejection>,
) -> ApiResult<Json<UpsertResponse>> {
    let Path(id) = path?;
    let Json(payload) = payload?;
    let customer = payload.into_customer_for(id)?;

    let outcome = state.customer_service.upsert(&customer).await?;

    Ok(Json(UpsertResponse::new(&customer, &outcome)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/example", get(example_customer))
        .route("/customers", get(list_customers))
        .route("/customers/:id", get(get_customer).put(upsert_customer))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use customers::CustomerRepository;
    use serde::de::DeserializeOwned;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::adapters::InMemoryCustomerRepository;
    use crate::application::CustomerService;
    use crate::error::ErrorResponse;
    use crate::models::{CustomerDto, UpsertResponse};
    use crate::testing::{BrokenRepository, RecordingNotifier};
    use crate::{build_router, AppState};

    struct Harness {
        app: axum::Router,
        repo: Arc<InMemoryCustomerRepository>,
        notifier: Arc<RecordingNotifier>,
    }

    fn app_with(repo: Arc<dyn CustomerRepository>) -> axum::Router {
        let state = AppState {
            customer_service: Arc::new(CustomerService::new(
                repo,
                Arc::new(RecordingNotifier::default()),
            )),
            api_key: None,
        };
        build_router(state)
    }

    fn harness(api_key: Option<&str>) -> Harness {
        let repo = Arc::new(InMemoryCustomerRepository::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let state = AppState {
            customer_service: Arc::new(CustomerService::new(
                repo.clone() as Arc<dyn CustomerRepository>,
                notifier.clone(),
            )),
            api_key: api_key.map(Arc::from),
        };
        Harness {
            app: build_router(state),
            repo,
            notifier,
        }
    }

    fn put(id: &str, body: serde_json::Value) -> Request<Body> {
        Request::put(format!("/customers/{id}"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    async fn send<T: DeserializeOwned>(app: &axum::Router, request: Request<Body>) -> (StatusCode, T) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn alice(email: &str) -> serde_json::Value {
        json!({ "id": 1, "firstName": "Alice", "lastName": "Adams", "email": email })
    }

    #[tokio::test]
    async fn test_upsert_then_get() {
        let h = harness(None);

        let (status, body): (_, ErrorResponse) = send(&h.app, get("/customers/1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "not_found");

        let (status, body): (_, UpsertResponse) =
            send(&h.app, put("1", alice("alice@example.com"))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.created);
        assert!(!body.email_changed);

        let (status, body): (_, CustomerDto) = send(&h.app, get("/customers/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.first_name, "Alice");
        assert_eq!(body.last_name, "Adams");
        assert_eq!(body.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_zero_id_is_client_error_and_store_untouched() {
        let h = harness(None);
        let body = json!({ "id": 0, "firstName": "Alice", "lastName": "Adams", "email": "alice@example.com" });

        let (status, error): (_, ErrorResponse) = send(&h.app, put("0", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error, "bad_request");
        assert_eq!(error.details[0].field, "id");

        let (status, _): (_, ErrorResponse) = send(&h.app, get("/customers/0")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert_eq!(h.repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_email_change_fires_notification_once() {
        let h = harness(None);
        let _: (_, UpsertResponse) = send(&h.app, put("1", alice("alice@example.com"))).await;

        let (status, body): (_, UpsertResponse) =
            send(&h.app, put("1", alice("alice2@example.com"))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.created);
        assert!(body.email_changed);
        assert_eq!(body.customer.email, "alice2@example.com");

        let changes = h.notifier.changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].previous.as_str(), "alice@example.com");
        assert_eq!(changes[0].current.as_str(), "alice2@example.com");
    }

    #[tokio::test]
    async fn test_put_without_body_id_uses_path_id() {
        let h = harness(None);
        let body = json!({ "firstName": "Alice", "lastName": "Adams", "email": "alice@example.com" });

        let (status, body): (_, UpsertResponse) = send(&h.app, put("1", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.created);
        assert_eq!(body.customer.id, 1);

        let (status, body): (_, CustomerDto) = send(&h.app, get("/customers/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_example_body_can_be_written_back() {
        let h = harness(None);

        let (status, example): (_, CustomerDto) = send(&h.app, get("/example")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(example.first_name, "Alice");

        let body = serde_json::to_value(&example).unwrap();
        let (status, stored): (_, UpsertResponse) = send(&h.app, put("7", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(stored.customer.id, 7);
        assert_eq!(stored.customer.email, example.email);
    }

    #[tokio::test]
    async fn test_backend_failure_is_generic_server_error() {
        let app = app_with(Arc::new(BrokenRepository));

        for request in [
            get("/customers"),
            get("/customers/1"),
            put("1", alice("alice@example.com")),
        ] {
            let (status, error): (_, ErrorResponse) = send(&app, request).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(error.error, "internal_error");
            assert_eq!(error.message, "internal server error");
            assert!(!error.message.contains("disk"));
        }

        let response = app.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_list_returns_every_customer() {
        let h = harness(None);
        let _: (_, UpsertResponse) = send(&h.app, put("1", alice("alice@example.com"))).await;
        let bob = json!({ "id": 2, "firstName": "Bob", "lastName": "Brown", "email": "bob@example.com" });
        let _: (_, UpsertResponse) = send(&h.app, put("2", bob)).await;

        let (status, body): (_, Vec<CustomerDto>) = send(&h.app, get("/customers")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.len(), 2);
        assert_eq!(body[1].first_name, "Bob");
    }

    #[tokio::test]
    async fn test_invalid_fields_are_all_reported() {
        let h = harness(None);
        let body = json!({ "id": 1, "firstName": "", "lastName": "Adams", "email": "alice" });

        let (status, error): (_, ErrorResponse) = send(&h.app, put("1", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let fields: Vec<&str> = error.details.iter().map(|d| d.field.as_str()).collect();
        assert_eq!(fields, vec!["firstName", "email"]);
    }

    #[tokio::test]
    async fn test_malformed_requests_are_bad_requests() {
        let h = harness(None);

        let (status, _): (_, ErrorResponse) = send(&h.app, get("/customers/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let missing_email = json!({ "id": 1, "firstName": "Alice", "lastName": "Adams" });
        let (status, _): (_, ErrorResponse) = send(&h.app, put("1", missing_email)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, error): (_, ErrorResponse) =
            send(&h.app, put("2", alice("alice@example.com"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.details[0].field, "id");
    }

    #[tokio::test]
    async fn test_api_key_is_enforced_when_configured() {
        let h = harness(Some("s3cret"));

        let (status, error): (_, ErrorResponse) = send(&h.app, get("/customers")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(error.error, "unauthorized");

        let request = Request::get("/customers")
            .header(header::AUTHORIZATION, "Bearer s3cret")
            .body(Body::empty())
            .unwrap();
        let (status, body): (_, Vec<CustomerDto>) = send(&h.app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        // Health stays public.
        let response = h.app.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
