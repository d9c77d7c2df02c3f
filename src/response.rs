/// Response normalization.
///
/// Every call ends in exactly one of three places:
/// - the transport failed: [`classify_transport_error`] raises a [`TokopayError`];
/// - the payload is empty or malformed: [`normalize_payload`] raises;
/// - the payload is well formed: [`normalize_payload`] returns an
///   [`ApiOutcome`], which is either the success `data` or the gateway's own
///   business rejection. Rejections are returned, not raised, so callers can
///   tell "the network failed" apart from "the gateway said no".
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ErrorCode, ErrorDetails, TokopayError};
use crate::transport::TransportError;

/// Literal status marker of a success envelope.
pub const SUCCESS_STATUS: &str = "Success";

/// A business-level rejection reported by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteError {
    pub status: String,
    pub message: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Result of a call that reached the gateway and got a well-formed answer.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Success(T),
    Rejected(RemoteError),
}

impl<T> ApiOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            ApiOutcome::Success(data) => Some(data),
            ApiOutcome::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&RemoteError> {
        match self {
            ApiOutcome::Success(_) => None,
            ApiOutcome::Rejected(err) => Some(err),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiOutcome<U> {
        match self {
            ApiOutcome::Success(data) => ApiOutcome::Success(f(data)),
            ApiOutcome::Rejected(err) => ApiOutcome::Rejected(err),
        }
    }

    /// Collapse a rejection into a [`TokopayError`].
    ///
    /// The error code is the remote code when it names a known kind,
    /// otherwise `UNKNOWN_ERROR`; the rejection itself is kept in `details`.
    pub fn into_result(self) -> Result<T, TokopayError> {
        match self {
            ApiOutcome::Success(data) => Ok(data),
            ApiOutcome::Rejected(err) => {
                let code = err.code.parse().unwrap_or(ErrorCode::UnknownError);
                Err(TokopayError {
                    message: err.message.clone(),
                    status: err.status.clone(),
                    code,
                    details: Some(ErrorDetails::Rejected(err)),
                })
            }
        }
    }
}

impl ApiOutcome<Value> {
    /// Decode the success data into a typed model.
    pub fn decode<T: DeserializeOwned>(self) -> Result<ApiOutcome<T>, TokopayError> {
        match self {
            ApiOutcome::Success(data) => match serde_json::from_value(data.clone()) {
                Ok(typed) => Ok(ApiOutcome::Success(typed)),
                Err(e) => Err(TokopayError::new(
                    ErrorCode::InvalidResponse,
                    format!("Failed to decode response data: {e}"),
                )
                .with_details(ErrorDetails::Payload(data))),
            },
            ApiOutcome::Rejected(err) => Ok(ApiOutcome::Rejected(err)),
        }
    }
}

/// Map a transport failure to the structured error.
pub fn classify_transport_error(err: TransportError) -> TokopayError {
    let (code, message) = match err.status_code {
        Some(401) => (ErrorCode::AuthenticationError, "Authentication failed".to_string()),
        Some(400) => (ErrorCode::ValidationError, "Invalid request parameters".to_string()),
        Some(404) => (ErrorCode::OrderError, "Resource not found".to_string()),
        Some(_) => (ErrorCode::NetworkError, "Request failed".to_string()),
        None if err.message.is_empty() => {
            (ErrorCode::NetworkError, "Network request failed".to_string())
        }
        None => (ErrorCode::NetworkError, err.message.clone()),
    };
    debug!(
        "response.transport_error status_code={:?} code={}",
        err.status_code, code
    );
    TokopayError::new(code, message).with_details(ErrorDetails::Transport(err))
}

fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Render a status/message/code field that may arrive as a string or a
/// number. Falsy values (`""`, `0`, `false`) count as absent so the
/// caller's default applies.
fn field_as_string(payload: &Value, key: &str) -> Option<String> {
    match payload.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Classify a successfully transported payload.
///
/// `rejection_code` is the code reported for a rejection whose payload
/// carries no `code` of its own.
pub fn normalize_payload(
    payload: Option<Value>,
    rejection_code: ErrorCode,
) -> Result<ApiOutcome<Value>, TokopayError> {
    let payload = match payload {
        Some(p) if !is_empty_payload(&p) => p,
        _ => {
            return Err(TokopayError::new(
                ErrorCode::EmptyResponse,
                "Empty response received",
            ))
        }
    };

    let status = payload.get("status").and_then(Value::as_str);
    if status != Some(SUCCESS_STATUS) {
        let rejection = RemoteError {
            status: field_as_string(&payload, "status").unwrap_or_else(|| "Error".to_string()),
            message: field_as_string(&payload, "message")
                .unwrap_or_else(|| "Request failed".to_string()),
            code: field_as_string(&payload, "code")
                .unwrap_or_else(|| rejection_code.as_str().to_string()),
            data: payload.get("data").filter(|d| !d.is_null()).cloned(),
        };
        debug!(
            "response.normalize rejected status={} code={}",
            rejection.status, rejection.code
        );
        return Ok(ApiOutcome::Rejected(rejection));
    }

    match payload.get("data") {
        Some(data) if !data.is_null() => Ok(ApiOutcome::Success(data.clone())),
        _ => Err(
            TokopayError::new(ErrorCode::InvalidResponse, "Response data is missing")
                .with_details(ErrorDetails::Payload(payload)),
        ),
    }
}
