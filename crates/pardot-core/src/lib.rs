//! # Pardot Core
//!
//! Core domain types for the Pardot API client.
//!
//! This crate contains pure logic with no I/O dependencies:
//! - Credentials and the API key state cell
//! - Request descriptors and query parameters
//! - Response classification into outcomes and API errors
//!
//! Transport lives in `pardot-api`; everything here can be tested without
//! a network.

pub mod errors;
pub mod models;
pub mod response;

// Re-export commonly used types
pub use errors::{
    CoreError, PardotApiError, Result, INVALID_CREDENTIALS_CODE, INVALID_CREDENTIALS_MESSAGE,
};
pub use models::{ApiKey, Credentials, Method, Outcome, Params, Request, LOGIN_OBJECT};
pub use response::{classify, is_json_content_type, ClassifyError};
