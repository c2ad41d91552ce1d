//! Application context.

use std::sync::Arc;

use crate::config::Config;
use crate::observability::LogSink;
use crate::payments::ProviderClient;
use crate::templates::TemplateCache;

/// Version stamp reported by the process and rendered into pages.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stylesheet version, used to cache-bust asset URLs in rendered HTML.
pub const CSS_VERSION: &str = "1.0.0";

/// Aggregate state shared with every request-handling task.
///
/// Read-only after construction. Handlers borrow what they need; the
/// context itself is never cloned per request.
pub struct AppContext {
    pub config: Config,
    pub info_log: LogSink,
    pub error_log: LogSink,
    pub templates: TemplateCache,
    /// Present only when both provider credentials were supplied.
    pub payments: Option<ProviderClient>,
    pub version: &'static str,
    pub css_version: &'static str,
}

impl AppContext {
    /// Assemble the context. Called once, before the listener starts.
    pub fn new(
        config: Config,
        info_log: LogSink,
        error_log: LogSink,
        templates: TemplateCache,
        payments: Option<ProviderClient>,
    ) -> Arc<Self> {
        Arc::new(Self {
            config,
            info_log,
            error_log,
            templates,
            payments,
            version: VERSION,
            css_version: CSS_VERSION,
        })
    }

    /// Base render context carrying the stamps every page needs.
    pub fn page_context(&self) -> tera::Context {
        let mut values = tera::Context::new();
        values.insert("version", self.version);
        values.insert("css_version", self.css_version);
        values.insert("env", &self.config.env);
        values.insert("payments_enabled", &self.payments.is_some());
        values
    }
}
