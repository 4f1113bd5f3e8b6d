//! Unified error codes for the kiosk system
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Device pairing errors
//! - 4xxx: Order errors
//! - 6xxx: Menu errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the front-end can
/// switch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,

    // ==================== 1xxx: Auth ====================
    /// Caller has no valid admin session
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Admin account has already been set up
    AdminAccountExists = 1004,
    /// Admin account has not been set up yet
    AdminAccountMissing = 1005,

    // ==================== 2xxx: Device ====================
    /// Paired device not found
    DeviceNotFound = 2001,
    /// Device token is registered for another device type
    DeviceTypeMismatch = 2002,
    /// Pairing window is closed
    PairingClosed = 2003,
    /// Caller is not paired with the required device type
    DeviceNotPaired = 2004,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has no parts
    OrderEmpty = 4002,
    /// Part quantity is zero
    InvalidQuantity = 4003,
    /// Two parts share a part id
    DuplicatePartId = 4004,

    // ==================== 6xxx: Menu ====================
    /// Category not found
    CategoryNotFound = 6001,
    /// Item not found
    ItemNotFound = 6002,
    /// Addon not found
    AddonNotFound = 6003,
    /// Image not found
    ImageNotFound = 6004,
    /// Uploaded image could not be decoded
    InvalidImage = 6005,
    /// Uploaded image exceeds the size limit
    ImageTooLarge = 6006,
    /// Price is negative or not a finite number
    InvalidPrice = 6007,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",

            // Auth
            ErrorCode::NotAuthenticated => "Unauthorized",
            ErrorCode::InvalidCredentials => "Incorrect username or password",
            ErrorCode::AdminAccountExists => {
                "Cannot setup admin account: admin account already exists"
            }
            ErrorCode::AdminAccountMissing => "Admin account has not been set up",

            // Device
            ErrorCode::DeviceNotFound => "Device not found",
            ErrorCode::DeviceTypeMismatch => "Device type error",
            ErrorCode::PairingClosed => "Pairing is not open",
            ErrorCode::DeviceNotPaired => "Device is not paired for this action",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderEmpty => "Order has no parts",
            ErrorCode::InvalidQuantity => "Quantity must be at least 1",
            ErrorCode::DuplicatePartId => "Order parts must have unique part ids",

            // Menu
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::ItemNotFound => "Item not found",
            ErrorCode::AddonNotFound => "Addon not found",
            ErrorCode::ImageNotFound => "Image not found",
            ErrorCode::InvalidImage => "Invalid image",
            ErrorCode::ImageTooLarge => "Image too large",
            ErrorCode::InvalidPrice => "Price must be a non-negative number",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1004 => Ok(ErrorCode::AdminAccountExists),
            1005 => Ok(ErrorCode::AdminAccountMissing),

            // Device
            2001 => Ok(ErrorCode::DeviceNotFound),
            2002 => Ok(ErrorCode::DeviceTypeMismatch),
            2003 => Ok(ErrorCode::PairingClosed),
            2004 => Ok(ErrorCode::DeviceNotPaired),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderEmpty),
            4003 => Ok(ErrorCode::InvalidQuantity),
            4004 => Ok(ErrorCode::DuplicatePartId),

            // Menu
            6001 => Ok(ErrorCode::CategoryNotFound),
            6002 => Ok(ErrorCode::ItemNotFound),
            6003 => Ok(ErrorCode::AddonNotFound),
            6004 => Ok(ErrorCode::ImageNotFound),
            6005 => Ok(ErrorCode::InvalidImage),
            6006 => Ok(ErrorCode::ImageTooLarge),
            6007 => Ok(ErrorCode::InvalidPrice),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
