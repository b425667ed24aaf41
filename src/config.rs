use anyhow::{Context, Result};
use std::env;

/// Controls how errors are rendered into HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseConfig {
    /// Send 5xx messages to clients as-is. When `false` they are replaced by
    /// the status's reason phrase (the full message is still logged).
    pub expose_server_messages: bool,
    /// Log 4xx responses at `warn`.
    pub log_client_errors: bool,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            expose_server_messages: true,
            log_client_errors: true,
        }
    }
}

impl ResponseConfig {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(ResponseConfig {
            expose_server_messages: lookup("HTTPERROR_EXPOSE_SERVER_MESSAGES")
                .unwrap_or_else(|| "true".to_string())
                .parse()
                .context("HTTPERROR_EXPOSE_SERVER_MESSAGES must be true or false")?,
            log_client_errors: lookup("HTTPERROR_LOG_CLIENT_ERRORS")
                .unwrap_or_else(|| "true".to_string())
                .parse()
                .context("HTTPERROR_LOG_CLIENT_ERRORS must be true or false")?,
        })
    }
}
