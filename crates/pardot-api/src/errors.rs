use pardot_core::{ClassifyError, PardotApiError};
use thiserror::Error;

/// API-specific errors for pardot-api
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Pardot API error: {0}")]
    Pardot(#[from] PardotApiError),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Core domain error: {0}")]
    Core(#[from] pardot_core::CoreError),

    #[error("Utils error: {0}")]
    Utils(#[from] pardot_utils::UtilsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}

impl From<ClassifyError> for ApiError {
    fn from(err: ClassifyError) -> Self {
        match err {
            ClassifyError::Api(err) => ApiError::Pardot(err),
            ClassifyError::Decode(err) => ApiError::Json(err),
        }
    }
}

impl ApiError {
    /// The Pardot error payload, if the server rejected the call.
    pub fn as_pardot(&self) -> Option<&PardotApiError> {
        match self {
            ApiError::Pardot(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_invalid_credentials(&self) -> bool {
        self.as_pardot()
            .map(PardotApiError::is_invalid_credentials)
            .unwrap_or(false)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
