use std::sync::Arc;

use anyhow::Context;
use axum::{extract::State, middleware, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use customers::{CustomerRepository, EmailChangeNotifier};

mod adapters;
mod application;
mod auth;
mod config;
mod error;
mod models;
mod routes;
#[cfg(test)]
mod testing;

use adapters::{demo_customers, InMemoryCustomerRepository, LogNotifier, WebhookNotifier};
use application::CustomerService;
use config::ServerConfig;
use error::ApiResult;

/// Application service over whichever store was wired at startup
pub type AppCustomerService = CustomerService<dyn CustomerRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<AppCustomerService>,
    pub api_key: Option<Arc<str>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthCheck {
    status: String,
    version: String,
    customers: usize,
}

/// Service health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthCheck),
        (status = 500, description = "Store unavailable", body = error::ErrorResponse)
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthCheck>> {
    let customers = state.customer_service.count().await?;

    Ok(Json(HealthCheck {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        customers,
    }))
}

/// Build the full router: docs, health and (optionally guarded) customer routes
pub fn build_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .merge(routes::customer::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn build_state(config: &ServerConfig) -> anyhow::Result<AppState> {
    let repo: Arc<dyn CustomerRepository> = Arc::new(if config.seed_demo {
        let seed = demo_customers().context("Demo customers failed validation")?;
        tracing::info!("Seeded {} demo customers", seed.len());
        InMemoryCustomerRepository::with_customers(seed)
    } else {
        InMemoryCustomerRepository::new()
    });

    let notifier: Arc<dyn EmailChangeNotifier> = match &config.webhook {
        Some(webhook) => {
            tracing::info!(url = %webhook.url, "Email change webhook enabled");
            Arc::new(
                WebhookNotifier::new(webhook.clone())
                    .context("Failed to build webhook HTTP client")?,
            )
        }
        None => {
            tracing::info!("No CUSTOMERS_WEBHOOK_URL set - email changes are only logged");
            Arc::new(LogNotifier)
        }
    };

    if config.api_key.is_some() {
        tracing::info!("API key authentication enabled");
    } else {
        tracing::warn!("No CUSTOMERS_API_KEY set - authentication disabled");
    }

    Ok(AppState {
        customer_service: Arc::new(CustomerService::new(repo, notifier)),
        api_key: config.api_key.as_deref().map(Arc::from),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Customers API initializing...");

    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    let state = build_state(&config)?;
    let router = build_router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Customers API listening on {}", config.bind_addr);

    axum::serve(listener, router)
        .await
        .context("HTTP server terminated")?;

    Ok(())
}
