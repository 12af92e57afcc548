//! HTTP error type and its mapping onto status codes and JSON bodies.
//!
//! Every error leaves the server as JSON with an `error` field: 400 for
//! request-shape problems, 413 for oversized messages and 422 when a cipher
//! rejects its input.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::error::ClassiCryptError;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Message too long: {len} characters, limit is {max}")]
    MessageTooLong { len: usize, max: usize },

    #[error("Processing failed: {0}")]
    Processing(ClassiCryptError),
}

impl From<ClassiCryptError> for ServerError {
    fn from(err: ClassiCryptError) -> Self {
        if err.is_request_error() {
            ServerError::BadRequest(err.to_string())
        } else {
            ServerError::Processing(err)
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ServerError::MessageTooLong { .. } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                json!({ "error": self.to_string() }),
            ),
            ServerError::Processing(err) => {
                tracing::warn!("Processing error: {}", err);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({ "error": "Processing failed", "details": err.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_errors_become_bad_request() {
        let err = ServerError::from(ClassiCryptError::UnsupportedCipher("Enigma".into()));
        assert!(matches!(err, ServerError::BadRequest(ref m) if m == "Unsupported cipher: Enigma"));
    }

    #[test]
    fn test_core_errors_become_processing() {
        let err = ServerError::from(ClassiCryptError::InvalidCharacter('J'));
        assert!(matches!(
            err,
            ServerError::Processing(ClassiCryptError::InvalidCharacter('J'))
        ));
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (ServerError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (
                ServerError::MessageTooLong { len: 11, max: 10 },
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (
                ServerError::Processing(ClassiCryptError::MalformedInput("odd".into())),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
