//! Payment provider client.

use std::fmt;

use crate::config::Config;

/// Client for the payment provider, built from the credential pair read
/// at startup. Handlers that take payments reach it through the
/// application context; the server lifecycle itself never calls it.
pub struct ProviderClient {
    key: String,
    secret: String,
    http: reqwest::Client,
}

impl ProviderClient {
    /// Build a client when both credentials are present; `None`
    /// otherwise. Downstream callers check, not the core.
    pub fn from_config(config: &Config) -> Option<Self> {
        if config.provider_key.is_empty() || config.provider_secret.is_empty() {
            return None;
        }
        Some(Self {
            key: config.provider_key.clone(),
            secret: config.provider_secret.clone(),
            http: reqwest::Client::new(),
        })
    }

    /// Publishable key, safe to embed in rendered pages.
    pub fn public_key(&self) -> &str {
        &self.key
    }

    /// Authorization header value for provider API calls.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.secret)
    }

    /// HTTP client checkout handlers use against the provider API.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

impl fmt::Debug for ProviderClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderClient")
            .field("key", &self.key)
            .field("secret", &"[redacted]")
            .finish_non_exhaustive()
    }
}
