//! Client error types

use std::collections::HashMap;

use http::StatusCode;
use serde_json::Value;
use shared::ErrorCode;
use thiserror::Error;

use crate::session::SessionError;

/// Coarse classification used by callers to decide how to react
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Conflict,
    Unauthorized,
    Forbidden,
    /// Server could not be reached or did not answer in time
    Unreachable,
    System,
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection refused, DNS failure or timeout
    #[error("Server unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// Structured error returned by the server
    #[error("API error {code}: {message}")]
    Api {
        code: u16,
        message: String,
        details: Option<HashMap<String, Value>>,
    },

    /// Non-success status without a decodable error body
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Any other transport failure
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Response body did not match the expected type
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Operation needs a logged-in session
    #[error("Not logged in")]
    NotLoggedIn,

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::Unreachable(err)
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Http(err)
        }
    }
}

impl ClientError {
    /// Known error code: the server's, or the transport code when unreachable
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Unreachable(e) if e.is_timeout() => Some(ErrorCode::TimeoutError),
            Self::Unreachable(_) => Some(ErrorCode::NetworkError),
            Self::Api { code, .. } => ErrorCode::try_from(*code).ok(),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unreachable(_) => ErrorKind::Unreachable,
            Self::Api { code, .. } => match ErrorCode::try_from(*code) {
                Ok(code) => kind_for_status(code.http_status()),
                Err(_) => ErrorKind::System,
            },
            Self::Status { status, .. } => kind_for_status(*status),
            Self::NotLoggedIn => ErrorKind::Unauthorized,
            Self::Http(_) | Self::InvalidResponse(_) | Self::Session(_) => ErrorKind::System,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        self.kind() == ErrorKind::Unreachable
    }
}

fn kind_for_status(status: StatusCode) -> ErrorKind {
    match status {
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        StatusCode::BAD_REQUEST => ErrorKind::Validation,
        StatusCode::CONFLICT => ErrorKind::Conflict,
        StatusCode::UNAUTHORIZED => ErrorKind::Unauthorized,
        StatusCode::FORBIDDEN => ErrorKind::Forbidden,
        StatusCode::SERVICE_UNAVAILABLE => ErrorKind::Unreachable,
        _ => ErrorKind::System,
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api(code: ErrorCode) -> ClientError {
        ClientError::Api {
            code: code.code(),
            message: code.message().to_string(),
            details: None,
        }
    }

    #[test]
    fn test_kind_from_code() {
        assert_eq!(api(ErrorCode::TableNotFound).kind(), ErrorKind::NotFound);
        assert_eq!(api(ErrorCode::OrderEmpty).kind(), ErrorKind::Validation);
        assert_eq!(api(ErrorCode::TableNotAvailable).kind(), ErrorKind::Conflict);
        assert_eq!(api(ErrorCode::TokenExpired).kind(), ErrorKind::Unauthorized);
        assert_eq!(api(ErrorCode::PermissionDenied).kind(), ErrorKind::Forbidden);
        assert_eq!(api(ErrorCode::InternalError).kind(), ErrorKind::System);
        assert_eq!(api(ErrorCode::TimeoutError).kind(), ErrorKind::Unreachable);
    }

    #[test]
    fn test_unknown_code_is_system() {
        let err = ClientError::Api {
            code: 65000,
            message: "?".into(),
            details: None,
        };
        assert_eq!(err.kind(), ErrorKind::System);
        assert!(err.code().is_none());
    }

    #[test]
    fn test_status_fallback() {
        let err = ClientError::Status {
            status: StatusCode::FORBIDDEN,
            body: String::new(),
        };
        assert_eq!(err.kind(), ErrorKind::Forbidden);
    }
}
