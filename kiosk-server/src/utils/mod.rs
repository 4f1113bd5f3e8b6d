//! Utility module
//!
//! - [`logger`] - tracing subscriber setup
//! - [`validation`] - request payload checks

pub mod logger;
pub mod validation;

// Re-export error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
