//! HTTP serving.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → timeouts.rs (read-inactivity / write-stall deadlines)
//!     → server.rs (hyper connection, header deadline, dispatch)
//!     → routes.rs (or any Router the caller supplies)
//! ```
//!
//! # Design Decisions
//! - The dispatcher is a capability: `Server` takes any `axum::Router`,
//!   so tests drive the lifecycle with a stub table
//! - Timeout values are fixed policy; tests shorten them through
//!   `Server::with_timeouts`, production code never does

pub mod routes;
pub mod server;
pub mod timeouts;

pub use routes::routes;
pub use server::{ServeError, Server};
pub use timeouts::TimeoutPolicy;
