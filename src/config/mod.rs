//! Runtime configuration.
//!
//! # Data Flow
//! ```text
//! process argv ──clap──▶ Cli ─┐
//!                             ├─▶ Config (immutable, owned by AppContext)
//! environment ──lookup────────┘
//! ```
//!
//! # Design Decisions
//! - Flags configure the listener and upstream API; provider credentials
//!   come only from the environment, so they never show up in `ps` output
//! - No semantic validation beyond type parsing; `u16` already carries
//!   the valid-TCP-port invariant
//! - A malformed flag value fails the process before any server state
//!   exists

pub mod loader;
pub mod schema;

pub use loader::Cli;
pub use schema::Config;
