//! Storefront bootstrap and HTTP server lifecycle.
//!
//! # Architecture Overview
//!
//! ```text
//! argv + environment ──▶ config ─┐
//!                                │
//!        log sinks ──────────────┤
//!                                ├──▶ AppContext ──▶ Server ──▶ listener
//!        template cache ─────────┤        ▲
//!                                │        │ shared read-only
//!        payment client ─────────┘     handlers
//! ```
//!
//! The context is assembled once in `main` and shared read-only with
//! every request-handling task; the server blocks the main task until a
//! terminal listener error.

// Core subsystems
pub mod app;
pub mod config;
pub mod http;
pub mod templates;

// Cross-cutting concerns
pub mod observability;
pub mod payments;

pub use app::AppContext;
pub use config::Config;
pub use http::{ServeError, Server, TimeoutPolicy};
