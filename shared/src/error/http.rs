//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::DeviceNotFound
            | Self::OrderNotFound
            | Self::CategoryNotFound
            | Self::ItemNotFound
            | Self::AddonNotFound
            | Self::ImageNotFound => StatusCode::NOT_FOUND,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::AdminAccountMissing
            | Self::DeviceTypeMismatch
            | Self::PairingClosed
            | Self::DeviceNotPaired => StatusCode::UNAUTHORIZED,

            // 413 Payload Too Large
            Self::ImageTooLarge => StatusCode::PAYLOAD_TOO_LARGE,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (bad credentials, duplicate signup, validation)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
