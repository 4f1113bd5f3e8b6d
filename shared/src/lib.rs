//! Shared types for the kiosk workspace
//!
//! Data model, intent request bodies, the unified error type, order math
//! and report builders. Used by `kiosk-server` and by client code.

pub mod error;
pub mod intent;
pub mod models;
pub mod order;
pub mod report;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
