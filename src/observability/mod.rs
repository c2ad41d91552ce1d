//! Logging and diagnostics.
//!
//! # Responsibilities
//! - Construct the two process-wide log sinks (informational, error)
//! - Initialize the tracing subscriber for HTTP-layer diagnostics
//!
//! # Design Decisions
//! - Sinks are explicit values injected into the application context,
//!   not ambient globals; tests substitute in-memory buffers
//! - The tracing subscriber only carries `TraceLayer` request traces;
//!   operational messages go through the sinks

pub mod logging;

pub use logging::{init_tracing, CapturedLog, LogSink};
