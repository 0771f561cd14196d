//! Client configuration

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the admin backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g. "https://api.example.com/admin").
    pub base_url: String,
    /// Request timeout in seconds, applied to every call.
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Read configuration from `MEDADMIN_BASE_URL` and
    /// `MEDADMIN_TIMEOUT_SECS`, falling back to defaults for anything
    /// unset or unparsable.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("MEDADMIN_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = std::env::var("MEDADMIN_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::new(base_url).with_timeout(timeout)
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
