//! Configuration schema.

/// Runtime configuration, assembled once at startup and owned by the
/// application context for the life of the process.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port the listener binds.
    pub port: u16,

    /// Deployment environment tag (development, staging, production).
    /// Advisory only: it changes log wording, never behavior.
    pub env: String,

    /// Base URL handlers use to reach the upstream API. The lifecycle
    /// core carries it but does not call it.
    pub api_base_url: String,

    /// Payment provider publishable key. Environment only, may be empty.
    pub provider_key: String,

    /// Payment provider secret key. Environment only, may be empty.
    pub provider_secret: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 4000,
            env: "development".to_string(),
            api_base_url: "http://localhost:4001".to_string(),
            provider_key: String::new(),
            provider_secret: String::new(),
        }
    }
}
