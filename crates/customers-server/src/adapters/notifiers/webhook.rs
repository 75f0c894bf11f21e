//! HTTP Webhook Notifier
//!
//! Delivers email-change events to an external endpoint using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use customers::{DomainError, EmailChange, EmailChangeNotifier};

pub const EMAIL_CHANGED_EVENT: &str = "customer.email_changed";
pub const SIGNATURE_HEADER: &str = "X-Customers-Signature";

/// Configuration for webhook delivery behavior
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Target URL for webhook delivery
    pub url: String,
    /// Secret for HMAC-SHA256 signature (optional)
    pub secret: Option<String>,
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Per-request timeout
    pub timeout: Duration,
    /// Base delay for exponential backoff (milliseconds)
    pub retry_base_delay_ms: u64,
    /// Maximum delay between retries (milliseconds)
    pub retry_max_delay_ms: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            secret: None,
            max_retries: 3,
            timeout: Duration::from_secs(10),
            retry_base_delay_ms: 500,
            retry_max_delay_ms: 10_000,
            user_agent: "Customers-Webhook/1.0".to_string(),
        }
    }
}

/// Payload sent to the webhook endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailChangedPayload {
    /// Unique ID for this delivery
    pub delivery_id: Uuid,
    pub event: String,
    pub customer_id: i64,
    pub previous_email: String,
    pub new_email: String,
    pub timestamp: DateTime<Utc>,
}

impl EmailChangedPayload {
    pub fn new(change: &EmailChange) -> Self {
        Self {
            delivery_id: Uuid::new_v4(),
            event: EMAIL_CHANGED_EVENT.to_string(),
            customer_id: change.customer_id.value(),
            previous_email: change.previous.to_string(),
            new_email: change.current.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// HTTP implementation of EmailChangeNotifier
pub struct WebhookNotifier {
    client: Client,
    config: WebhookConfig,
}

impl WebhookNotifier {
    pub fn new(config: WebhookConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Hex-encoded HMAC-SHA256 of the body, with a `sha256=` prefix
    pub fn sign_payload(secret: &str, payload: &[u8]) -> String {
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        type HmacSha256 = Hmac<Sha256>;

        let mut mac =
            HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
        mac.update(payload);
        let bytes = mac.finalize().into_bytes();

        format!("sha256={}", hex::encode(bytes))
    }

    /// Single delivery attempt; `Err` carries a description of the failure.
    async fn attempt(&self, body: &[u8]) -> Result<(), String> {
        let mut request = self
            .client
            .post(&self.config.url)
            .header("Content-Type", "application/json");

        if let Some(secret) = &self.config.secret {
            request = request.header(SIGNATURE_HEADER, Self::sign_payload(secret, body));
        }

        match request.body(body.to_vec()).send().await {
            Ok(resp) if resp.status().is_success() => Ok(()),
            Ok(resp) => Err(format!("endpoint responded with {}", resp.status())),
            Err(e) => Err(e.to_string()),
        }
    }
}

#[async_trait]
impl EmailChangeNotifier for WebhookNotifier {
    async fn notify(&self, change: &EmailChange) -> Result<(), DomainError> {
        let payload = EmailChangedPayload::new(change);
        let body = serde_json::to_vec(&payload)
            .map_err(|e| DomainError::Notification(format!("Failed to serialize payload: {e}")))?;

        let mut delay = self.config.retry_base_delay_ms;
        let mut last_error = String::new();

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tokio::time::sleep(Duration::from_millis(delay)).await;
                delay = (delay * 2).min(self.config.retry_max_delay_ms);
            }

            match self.attempt(&body).await {
                Ok(()) => {
                    tracing::debug!(
                        delivery_id = %payload.delivery_id,
                        attempt,
                        "email change webhook delivered"
                    );
                    return Ok(());
                }
                Err(error) => {
                    tracing::warn!(
                        delivery_id = %payload.delivery_id,
                        attempt,
                        %error,
                        "email change webhook attempt failed"
                    );
                    last_error = error;
                }
            }
        }

        Err(DomainError::Notification(format!(
            "webhook delivery failed after {} attempts: {last_error}",
            self.config.max_retries + 1
        )))
    }
}
