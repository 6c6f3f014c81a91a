//! Error type for REST calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Message shown when the server fails without a usable `detail`.
pub const GENERIC_API_ERROR: &str = "Error en API";

/// Failure of a single REST call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-OK status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The response body was not the expected JSON shape.
    #[error("respuesta inválida: {0}")]
    Decode(String),
    /// Called outside the browser build.
    #[error("no disponible fuera del navegador")]
    Unavailable,
}

impl ApiError {
    /// Build a server error from the status code and raw response body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Server {
            status,
            message: error_message_from_body(body),
        }
    }
}

/// Extract the `detail` string of an error body, falling back to
/// [`GENERIC_API_ERROR`] for non-JSON bodies and structured details.
#[must_use]
pub fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|detail| match detail {
            serde_json::Value::String(message) if !message.trim().is_empty() => Some(message),
            _ => None,
        })
        .unwrap_or_else(|| GENERIC_API_ERROR.to_owned())
}
