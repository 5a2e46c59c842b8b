//! Classification of error-shaped responses.
//!
//! FMP usually answers failures with HTTP 200 and a body such as
//! `{"Error Message": "Invalid API KEY. ..."}` in place of the expected
//! array or object. Only the shape and the message text are inspected here;
//! payloads that do not look like errors are left alone.

use reqwest::StatusCode;
use serde_json::Value;

use super::{ApiErrorKind, FmpError};

/// Field FMP uses for error messages on every endpoint.
const ERROR_MESSAGE_FIELD: &str = "Error Message";

/// Fields that carry a message on non-2xx responses.
const FALLBACK_MESSAGE_FIELDS: &[&str] = &["error", "message"];

/// A failure reported by the remote API.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApiFailure {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl From<ApiFailure> for FmpError {
    fn from(failure: ApiFailure) -> Self {
        FmpError::Api {
            kind: failure.kind,
            message: failure.message,
        }
    }
}

/// Inspects a decoded response and returns the failure it describes, if any.
///
/// # Examples
///
/// ```
/// use fmp_client::errors::{classify_response, ApiErrorKind};
/// use reqwest::StatusCode;
/// use serde_json::json;
///
/// let body = json!({ "Error Message": "Invalid API KEY. Please retry." });
/// let failure = classify_response(StatusCode::OK, &body).unwrap();
/// assert_eq!(failure.kind, ApiErrorKind::Auth);
///
/// let body = json!([{ "symbol": "AAPL" }]);
/// assert!(classify_response(StatusCode::OK, &body).is_none());
/// ```
pub fn classify_response(status: StatusCode, body: &Value) -> Option<ApiFailure> {
    let message = error_message(status, body);

    match message {
        Some(message) => {
            let kind = match kind_from_message(&message) {
                ApiErrorKind::Unknown => kind_from_status(status),
                kind => kind,
            };
            Some(ApiFailure { kind, message })
        }
        None if !status.is_success() => Some(ApiFailure {
            kind: kind_from_status(status),
            message: format!("HTTP {}", status),
        }),
        None => None,
    }
}

fn error_message(status: StatusCode, body: &Value) -> Option<String> {
    let object = body.as_object()?;

    if let Some(message) = object.get(ERROR_MESSAGE_FIELD).and_then(Value::as_str) {
        return Some(message.trim().to_string());
    }

    if status.is_success() {
        return None;
    }

    FALLBACK_MESSAGE_FIELDS
        .iter()
        .find_map(|field| object.get(*field).and_then(Value::as_str))
        .map(|message| message.trim().to_string())
}

fn kind_from_message(message: &str) -> ApiErrorKind {
    let lower = message.to_lowercase();

    if lower.contains("api key")
        || lower.contains("apikey")
        || lower.contains("api_key")
        || lower.contains("current subscription")
        || lower.contains("exclusive endpoint")
    {
        ApiErrorKind::Auth
    } else if lower.contains("limit reach")
        || lower.contains("rate limit")
        || lower.contains("too many requests")
    {
        ApiErrorKind::RateLimit
    } else if lower.contains("invalid")
        || lower.contains("missing")
        || lower.contains("parameter")
        || lower.contains("not found")
    {
        ApiErrorKind::MalformedRequest
    } else {
        ApiErrorKind::Unknown
    }
}

fn kind_from_status(status: StatusCode) -> ApiErrorKind {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiErrorKind::Auth,
        StatusCode::TOO_MANY_REQUESTS => ApiErrorKind::RateLimit,
        StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiErrorKind::MalformedRequest
        }
        _ => ApiErrorKind::Unknown,
    }
}
