use serde_json::Value;
use thiserror::Error;

/// Error code Pardot reports for an expired or unknown API key.
///
/// Only read from `@attributes.err_code`; the `err` field itself is a flag.
pub const INVALID_CREDENTIALS_CODE: u32 = 1;

/// Message Pardot pairs with [`INVALID_CREDENTIALS_CODE`].
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid API key or user key";

/// Core domain errors - no I/O dependencies
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("An API key is already present; clear it before storing a new one")]
    KeyAlreadyPresent,
}

pub type Result<T> = std::result::Result<T, CoreError>;

/// An error payload returned by the Pardot API.
///
/// Pardot signals failures inside a JSON body with a truthy `err` field. Two
/// shapes are seen in the wild:
///
/// ```json
/// {"@attributes": {"stat": "fail", "err_code": 1}, "err": "Invalid API key or user key"}
/// {"err": "1", "err_msg": "Invalid API key or user key"}
/// ```
///
/// Both are normalized into a human readable `message`. A numeric `code` is
/// only taken from `@attributes.err_code`; `err` in the second shape is a
/// flag, not a code. The raw body is kept for callers that need more.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct PardotApiError {
    pub code: Option<u32>,
    pub message: String,
    pub body: Value,
}

impl PardotApiError {
    /// Build an error from a decoded error body.
    pub fn from_body(body: Value) -> Self {
        let err = body.get("err");
        let err_msg = body.get("err_msg").and_then(value_as_text);

        let code = body
            .get("@attributes")
            .and_then(|attrs| attrs.get("err_code"))
            .and_then(value_as_code);

        let message = err_msg
            .or_else(|| err.and_then(value_as_text))
            .unwrap_or_else(|| "Unknown API error occurred".to_string());

        Self {
            code,
            message,
            body,
        }
    }

    /// Whether the error means the API key (or user key) was rejected.
    ///
    /// The numeric code is checked first; the message text is the fallback
    /// for bodies that carry no code.
    pub fn is_invalid_credentials(&self) -> bool {
        match self.code {
            Some(INVALID_CREDENTIALS_CODE) => true,
            _ => self.message == INVALID_CREDENTIALS_MESSAGE,
        }
    }
}

fn value_as_code(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
