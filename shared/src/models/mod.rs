//! Data models
//!
//! Shared between kiosk-server and its clients (via API).
//! Document ids are opaque strings serialized as `_id`.

pub mod addon;
pub mod auth;
pub mod category;
pub mod device;
pub mod image;
pub mod item;
pub mod menu;
pub mod order;
pub mod settings;

// Re-exports
pub use addon::*;
pub use auth::*;
pub use category::*;
pub use device::*;
pub use image::*;
pub use item::*;
pub use menu::*;
pub use order::*;
pub use settings::*;
