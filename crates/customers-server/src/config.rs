//! Server Configuration
//!
//! Read from the process environment (after `.env` is loaded by `main`).

use std::net::SocketAddr;

use thiserror::Error;

use crate::adapters::WebhookConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_WEBHOOK_MAX_RETRIES: u32 = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime configuration for the API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Bearer token required on customer routes; `None` disables auth
    pub api_key: Option<String>,
    /// Email-change webhook; `None` falls back to log notifications
    pub webhook: Option<WebhookConfig>,
    /// Seed the store with a few demo customers at startup
    pub seed_demo: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = parse(
            "CUSTOMERS_BIND_ADDR",
            get("CUSTOMERS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        )?;

        let webhook = match get("CUSTOMERS_WEBHOOK_URL") {
            Some(url) => {
                let max_retries = match get("CUSTOMERS_WEBHOOK_MAX_RETRIES") {
                    Some(raw) => parse("CUSTOMERS_WEBHOOK_MAX_RETRIES", raw)?,
                    None => DEFAULT_WEBHOOK_MAX_RETRIES,
                };
                Some(WebhookConfig {
                    url,
                    secret: get("CUSTOMERS_WEBHOOK_SECRET"),
                    max_retries,
                    ..WebhookConfig::default()
                })
            }
            None => None,
        };

        let seed_demo = match get("CUSTOMERS_SEED_DEMO") {
            Some(raw) => parse_bool("CUSTOMERS_SEED_DEMO", raw)?,
            None => false,
        };

        Ok(Self {
            bind_addr,
            api_key: get("CUSTOMERS_API_KEY"),
            webhook,
            seed_demo,
        })
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value: raw })
}

fn parse_bool(key: &'static str, raw: String) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value: raw }),
    }
}
