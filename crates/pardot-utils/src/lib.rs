//! # Pardot Utils
//!
//! Helpers shared by the Pardot client crates: id-list normalization for
//! query parameters and secret masking for log output.

pub mod errors;
pub mod formatters;
pub mod parsers;

// Re-export common types for convenience
pub use errors::*;
pub use formatters::*;
pub use parsers::*;
