//! Configuration loading from process arguments and environment.

use clap::Parser;

use crate::config::schema::Config;

/// Environment variable holding the provider publishable key.
pub const PROVIDER_KEY_VAR: &str = "PAYMENT_PROVIDER_KEY";

/// Environment variable holding the provider secret key.
pub const PROVIDER_SECRET_VAR: &str = "PAYMENT_PROVIDER_SECRET";

/// Command-line flags recognized by the storefront binary.
#[derive(Debug, Parser)]
#[command(name = "shopfront", about = "Storefront web server", version)]
pub struct Cli {
    /// Port to listen on.
    #[arg(long, default_value_t = 4000)]
    pub port: u16,

    /// Application environment (development, staging, production).
    #[arg(long, default_value = "development")]
    pub env: String,

    /// URL of the upstream API.
    #[arg(long = "api", default_value = "http://localhost:4001")]
    pub api_base_url: String,
}

impl Config {
    /// Parse flags from argv and read credentials from the process
    /// environment. A malformed flag value exits the process with a
    /// usage error before any server state is constructed.
    pub fn load() -> Self {
        Self::from_sources(Cli::parse(), |name| std::env::var(name).ok())
    }

    /// Assemble a config from parsed flags and a credential lookup.
    ///
    /// Credential values pass through verbatim; absent variables become
    /// empty strings. The lookup is injected so tests never have to
    /// touch the process environment.
    pub fn from_sources(cli: Cli, env: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: cli.port,
            env: cli.env,
            api_base_url: cli.api_base_url,
            provider_key: env(PROVIDER_KEY_VAR).unwrap_or_default(),
            provider_secret: env(PROVIDER_SECRET_VAR).unwrap_or_default(),
        }
    }
}
