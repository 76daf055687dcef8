//! # pardot-rs
//!
//! Client library for the Pardot marketing automation API.
//!
//! The heavy lifting lives in the workspace crates; this crate adds
//! configuration loading and a config-driven constructor.

pub mod config;
pub mod errors;
pub mod sdk;

// Re-export main public types
pub use config::{load_config, Config};
pub use errors::{ConfigError, PardotError, Result};
pub use sdk::{connect, connect_with};

pub use pardot_api::objects;
pub use pardot_api::{
    ApiError, Credentials, Outcome, Params, Pardot, PardotApiClient, PardotApiError, Resource,
};
