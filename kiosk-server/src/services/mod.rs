//! Service layer
//!
//! - [`MenuService`] - menu collections, settings and item images
//! - [`ImagePipeline`] - base64 image decoding, resizing and JPEG encoding

pub mod image_pipeline;
pub mod menu;

pub use image_pipeline::{ImagePipeline, ProcessedImage};
pub use menu::{MenuObjectRef, MenuService};
