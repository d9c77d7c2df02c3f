/// Error types for the Tokopay SDK.
///
/// Every failure path (client-side validation, transport, payload shape,
/// typed decoding) surfaces as a single [`TokopayError`] carrying a stable
/// [`ErrorCode`] that callers can match on.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::response::RemoteError;
use crate::transport::TransportError;

/// Coarse error kind attached to every [`TokopayError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NetworkError,
    ValidationError,
    AuthenticationError,
    OrderError,
    WithdrawalError,
    MerchantError,
    EmptyResponse,
    InvalidResponse,
    UnknownError,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::NetworkError,
        ErrorCode::ValidationError,
        ErrorCode::AuthenticationError,
        ErrorCode::OrderError,
        ErrorCode::WithdrawalError,
        ErrorCode::MerchantError,
        ErrorCode::EmptyResponse,
        ErrorCode::InvalidResponse,
        ErrorCode::UnknownError,
    ];

    /// The wire/string form, e.g. `"VALIDATION_ERROR"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::AuthenticationError => "AUTHENTICATION_ERROR",
            ErrorCode::OrderError => "ORDER_ERROR",
            ErrorCode::WithdrawalError => "WITHDRAWAL_ERROR",
            ErrorCode::MerchantError => "MERCHANT_ERROR",
            ErrorCode::EmptyResponse => "EMPTY_RESPONSE",
            ErrorCode::InvalidResponse => "INVALID_RESPONSE",
            ErrorCode::UnknownError => "UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or(())
    }
}

/// Underlying cause attached to a [`TokopayError`].
#[derive(Debug, Clone)]
pub enum ErrorDetails {
    /// The transport failed; carries its status code and raw body when known.
    Transport(TransportError),
    /// A remote payload that could not be turned into a result.
    Payload(serde_json::Value),
    /// A business rejection converted via [`ApiOutcome::into_result`](crate::ApiOutcome::into_result).
    Rejected(RemoteError),
    /// Free-form description (decode failures, config problems).
    Message(String),
}

/// The single structured error type of the SDK.
#[derive(Error, Debug, Clone)]
#[error("{message} ({code})")]
pub struct TokopayError {
    pub message: String,
    /// Status label, always `"Error"` for errors raised by the SDK itself.
    pub status: String,
    pub code: ErrorCode,
    pub details: Option<ErrorDetails>,
}

impl TokopayError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: "Error".to_string(),
            code,
            details: None,
        }
    }

    pub fn with_details(mut self, details: ErrorDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NetworkError, message)
    }

    /// HTTP status code of the underlying transport failure, if any.
    pub fn status_code(&self) -> Option<u16> {
        match &self.details {
            Some(ErrorDetails::Transport(t)) => t.status_code,
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TokopayError {
    fn from(err: serde_json::Error) -> Self {
        TokopayError::new(
            ErrorCode::InvalidResponse,
            format!("Failed to decode response data: {err}"),
        )
        .with_details(ErrorDetails::Message(err.to_string()))
    }
}

impl From<url::ParseError> for TokopayError {
    fn from(err: url::ParseError) -> Self {
        TokopayError::validation(format!("Invalid API base URL: {err}"))
    }
}
