//! Default route table.
//!
//! The server treats its dispatcher as a collaborator: anything that
//! turns a request into a response can be served. This is the
//! storefront's own table: a landing page that exercises the template
//! cache, and a template-free liveness probe.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::app::AppContext;

/// Build the default dispatcher over the shared context.
pub fn routes(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/healthz", get(healthz))
        .with_state(ctx)
}

/// Storefront landing page.
///
/// A missing or broken template fails this request with a 500 and a
/// line on the error sink; the process keeps serving.
async fn home(State(ctx): State<Arc<AppContext>>) -> Response {
    let mut page = ctx.page_context();
    if let Some(payments) = &ctx.payments {
        page.insert("provider_key", payments.public_key());
    }
    match ctx.templates.render("home.html", &page) {
        Ok(body) => Html(body).into_response(),
        Err(err) => {
            ctx.error_log.print(&err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
    env: String,
}

/// Liveness probe. Does not touch the template cache, so it stays up
/// even when rendering is broken.
async fn healthz(State(ctx): State<Arc<AppContext>>) -> Json<Health> {
    Json(Health {
        status: "ok",
        version: ctx.version,
        env: ctx.config.env.clone(),
    })
}
