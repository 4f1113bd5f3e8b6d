//! API routes
//!
//! Every JSON endpoint takes a body tagged by `intent`:
//!
//! - [`auth`] - admin signup, login, session query, logout
//! - [`device`] - pairing window and paired devices
//! - [`menu`] - menu objects and settings
//! - [`order`] - order submission and order screen
//! - [`report`] - sales reports
//! - [`image`] - stored item images
//! - [`health`] - liveness check

pub mod auth;
pub mod device;
pub mod health;
pub mod image;
pub mod menu;
pub mod order;
pub mod report;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
