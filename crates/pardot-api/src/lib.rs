//! # Pardot API
//!
//! HTTP client for the Pardot marketing automation API.
//! This crate provides the authenticated request core, a generic resource
//! binding and typed wrappers for the supported Pardot objects.

pub mod client;
pub mod errors;
pub mod objects;
pub mod resource;
pub mod sdk;

// Re-export common types for convenience
pub use client::*;
pub use errors::*;
pub use resource::Resource;
pub use sdk::*;

// Re-export core types that API consumers will need
pub use pardot_core::{Credentials, Outcome, PardotApiError, Params, Request};
