//! Customers API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// API Client for the customers service
pub struct CustomersClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

// ============================================
// API Types
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertResult {
    pub customer: CustomerRecord,
    pub created: bool,
    pub email_changed: bool,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub customers: usize,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    details: Vec<FieldErrorBody>,
}

#[derive(Debug, Deserialize)]
struct FieldErrorBody {
    field: String,
    message: String,
}

impl CustomersClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }

    /// Health check (public)
    pub async fn health(&self) -> Result<HealthResponse> {
        let resp = self
            .client
            .get(self.url("/health"))
            .send()
            .await
            .context("Failed to connect to customers API")?;

        parse(resp).await
    }

    /// List all customers
    pub async fn list_customers(&self) -> Result<Vec<CustomerRecord>> {
        let resp = self
            .authorized(self.client.get(self.url("/customers")))
            .send()
            .await
            .context("Failed to connect to customers API")?;

        parse(resp).await
    }

    /// Get a single customer
    pub async fn get_customer(&self, id: i64) -> Result<CustomerRecord> {
        let resp = self
            .authorized(self.client.get(self.url(&format!("/customers/{}", id))))
            .send()
            .await
            .context("Failed to connect to customers API")?;

        parse(resp).await
    }

    /// Insert or replace a customer
    pub async fn upsert_customer(&self, customer: &CustomerRecord) -> Result<UpsertResult> {
        let resp = self
            .authorized(
                self.client
                    .put(self.url(&format!("/customers/{}", customer.id)))
                    .json(customer),
            )
            .send()
            .await
            .context("Failed to connect to customers API")?;

        parse(resp).await
    }
}

async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        bail!("API error ({}): {}", status, describe_error(&text));
    }

    resp.json().await.context("Failed to parse response")
}

/// Render an error body as "message (field: reason, ...)", falling back to the raw text
fn describe_error(text: &str) -> String {
    let Ok(body) = serde_json::from_str::<ErrorBody>(text) else {
        return text.to_string();
    };

    if body.details.is_empty() {
        return body.message;
    }

    let fields: Vec<String> = body
        .details
        .iter()
        .map(|d| format!("{}: {}", d.field, d.message))
        .collect();
    format!("{} ({})", body.message, fields.join(", "))
}
