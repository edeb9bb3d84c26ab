//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::NotFound
            | Self::OrderNotFound
            | Self::OrderItemNotFound
            | Self::DishNotFound
            | Self::TableNotFound
            | Self::StaffNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::OrderAlreadyCompleted
            | Self::OrderAlreadyCancelled
            | Self::OrderNotActive
            | Self::OrderHasOpenItems
            | Self::ItemStatusTransitionInvalid
            | Self::DishUnavailable
            | Self::TableNotAvailable
            | Self::TableAlreadyEmpty
            | Self::TableHasOrders
            | Self::TableNumberExists
            | Self::StaffUsernameExists
            | Self::StaffCannotDeleteSelf => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied => StatusCode::FORBIDDEN,

            // 503 Service Unavailable (transient errors, client can retry)
            Self::NetworkError | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError | Self::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation errors)
            Self::ValidationFailed | Self::InvalidRequest | Self::OrderEmpty => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::OrderNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::OrderItemNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::TableNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::DishNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_status() {
        assert_eq!(ErrorCode::TableNotAvailable.http_status(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::TableAlreadyEmpty.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::ItemStatusTransitionInvalid.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(ErrorCode::StaffUsernameExists.http_status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_auth_statuses() {
        assert_eq!(ErrorCode::NotAuthenticated.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::TokenExpired.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::InvalidCredentials.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::PermissionDenied.http_status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(ErrorCode::ValidationFailed.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::OrderEmpty.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::InvalidRequest.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_service_unavailable_status() {
        assert_eq!(
            ErrorCode::NetworkError.http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ErrorCode::TimeoutError.http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
