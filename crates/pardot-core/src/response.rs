use crate::errors::PardotApiError;
use crate::models::Outcome;
use serde_json::Value;
use thiserror::Error;

/// Why a response could not be turned into an [`Outcome`].
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Pardot API error: {0}")]
    Api(#[from] PardotApiError),

    #[error("Invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Whether a `content-type` header value names JSON.
///
/// Only the media type is compared; parameters like `charset` are ignored.
pub fn is_json_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|media| media.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

/// Classify a raw response.
///
/// JSON bodies are decoded and checked for a truthy `err` field. Anything
/// else yields the bare status code, whatever that code is.
pub fn classify(
    content_type: Option<&str>,
    status: u16,
    body: &[u8],
) -> std::result::Result<Outcome, ClassifyError> {
    if !content_type.map(is_json_content_type).unwrap_or(false) {
        return Ok(Outcome::Status(status));
    }

    let json: Value = serde_json::from_slice(body)?;
    if json.get("err").map(is_truthy).unwrap_or(false) {
        return Err(PardotApiError::from_body(json).into());
    }

    Ok(Outcome::Json(json))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
