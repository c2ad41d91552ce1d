//! Compiled template cache.
//!
//! # Data Flow
//! ```text
//! templates/*.html ──compile once──▶ TemplateCache
//!                                        │ (read-only, shared via AppContext)
//!                                        ▼
//!                                handlers render by name
//! ```
//!
//! # Design Decisions
//! - The cache is frozen before the listener starts; concurrent renders
//!   need no locking because nothing mutates it afterwards
//! - An unknown name is the calling handler's error, never the process's

pub mod cache;

pub use cache::{TemplateCache, TemplateError};
