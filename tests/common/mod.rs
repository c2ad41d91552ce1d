//! Shared helpers for the integration suite.

use std::sync::Arc;
use std::time::Duration;

use shopfront::config::Config;
use shopfront::observability::{CapturedLog, LogSink};
use shopfront::templates::TemplateCache;
use shopfront::AppContext;
use tokio::net::TcpStream;

/// Context wired to capture sinks and an in-memory template set, plus
/// handles onto everything the sinks record.
#[allow(dead_code)]
pub struct Harness {
    pub ctx: Arc<AppContext>,
    pub info: CapturedLog,
    pub errors: CapturedLog,
}

/// Harness with the standard single-page template set.
pub fn harness(port: u16) -> Harness {
    harness_with(port, &[("home.html", "<h1>storefront v{{ version }}</h1>")])
}

/// Harness with an explicit template set.
pub fn harness_with(port: u16, templates: &[(&'static str, &'static str)]) -> Harness {
    let (info_log, info) = LogSink::capture("INFO", false);
    let (error_log, errors) = LogSink::capture("ERROR", true);
    let cache = TemplateCache::from_sources(templates.iter().copied()).unwrap();
    let config = Config {
        port,
        ..Config::default()
    };
    let ctx = AppContext::new(config, info_log, error_log, cache, None);
    Harness { ctx, info, errors }
}

/// Poll until a TCP connect on `port` succeeds.
pub async fn wait_for_listener(port: u16) {
    for _ in 0..100 {
        if TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("server did not start listening on port {port}");
}
