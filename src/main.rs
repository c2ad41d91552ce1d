//! Storefront process entry point.

use std::path::Path;
use std::process;

use shopfront::config::Config;
use shopfront::http::{routes, Server};
use shopfront::observability::{self, LogSink};
use shopfront::payments::ProviderClient;
use shopfront::templates::TemplateCache;
use shopfront::AppContext;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = Config::load();
    observability::init_tracing();

    let info_log = LogSink::info();
    let error_log = LogSink::error();

    let templates = match TemplateCache::load(Path::new("templates")) {
        Ok(templates) => templates,
        Err(err) => {
            error_log.print(&err);
            process::exit(1);
        }
    };
    info_log.print(format_args!(
        "compiled {} templates",
        templates.names().count()
    ));

    let payments = ProviderClient::from_config(&config);
    if payments.is_none() {
        info_log.print("payment provider credentials not set; checkout disabled");
    }

    let ctx = AppContext::new(config, info_log, error_log, templates, payments);
    let dispatcher = routes(ctx.clone());

    if let Err(err) = Server::new(ctx.clone(), dispatcher).serve().await {
        ctx.error_log.print(&err);
        process::exit(1);
    }
}
