// ============================================================================
// HTTP Errors
// Mapping of domain errors onto responses, and server startup failures
// ============================================================================

use crate::numeric::NumericError;
use crate::store::StoreError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;
use std::net::SocketAddr;

/// Error returned by JSON handlers.
///
/// Rendered as `{"detail": "<message>"}` with a 4xx status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Store(StoreError),
    Numeric(NumericError),
    /// JSON body was malformed or failed operand validation
    Body(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Numeric(_) | ApiError::Body(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl From<NumericError> for ApiError {
    fn from(err: NumericError) -> Self {
        ApiError::Numeric(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Body(rejection.body_text())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Store(err) => fmt::Display::fmt(err, f),
            ApiError::Numeric(err) => fmt::Display::fmt(err, f),
            ApiError::Body(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Failure while starting or running a service.
#[derive(Debug)]
pub enum ServeError {
    /// Configuration failed validation
    Config(String),
    /// Global logger could not be installed
    Logging(String),
    /// Listener could not bind
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    /// Server loop terminated with an I/O error
    Server(std::io::Error),
}

impl fmt::Display for ServeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServeError::Config(msg) => write!(f, "config error: {msg}"),
            ServeError::Logging(msg) => write!(f, "logger error: {msg}"),
            ServeError::Bind { addr, source } => write!(f, "bind failed on {addr}: {source}"),
            ServeError::Server(err) => write!(f, "server error: {err}"),
        }
    }
}

impl std::error::Error for ServeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServeError::Bind { source, .. } => Some(source),
            ServeError::Server(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StudentId;

    #[test]
    fn status_mapping() {
        assert_eq!(
            ApiError::from(StoreError::NotFound(StudentId::new(1))).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(NumericError::DivisionByZero).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Body("missing field `op`".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn display_delegates() {
        assert_eq!(
            ApiError::from(StoreError::NotFound(StudentId::new(1))).to_string(),
            "Student not found"
        );
        assert_eq!(
            ApiError::from(NumericError::InvalidOperand).to_string(),
            "Square root of negative number is not allowed."
        );
    }

    #[test]
    fn serve_error_display() {
        let e = ServeError::Config("bad address".into());
        assert!(e.to_string().contains("bad address"));

        let addr: SocketAddr = "127.0.0.1:1".parse().unwrap();
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use");
        let e = ServeError::Bind { addr, source: io };
        assert!(e.to_string().contains("127.0.0.1:1"));
        assert!(std::error::Error::source(&e).is_some());
    }
}
