//! Payment provider integration.
//!
//! # Responsibilities
//! - Construct the provider client from the two credential strings
//! - Expose the publishable key to rendered pages
//!
//! # Design Decisions
//! - The lifecycle core never calls the provider; checkout handlers
//!   reach the client through the application context
//! - Missing credentials disable the client rather than failing startup

pub mod client;

pub use client::ProviderClient;
