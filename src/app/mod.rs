//! Shared application state.
//!
//! # Design Decisions
//! - One aggregate, constructed exactly once in `main`, distributed as
//!   `Arc<AppContext>` to the dispatcher and every handler
//! - Nothing mutates it after construction; the log sinks are the only
//!   concurrently written members and they synchronize internally

pub mod context;

pub use context::{AppContext, CSS_VERSION, VERSION};
