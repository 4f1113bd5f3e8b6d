//! Image Pipeline
//!
//! Item images arrive as base64 (plain or data URL), are downscaled to fit
//! the configured square and stored as JPEG. Formats: PNG, JPEG, WebP.

use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::imageops::FilterType;
use shared::{AppError, AppResult, ErrorCode};

/// Decoded and re-encoded image
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedImage {
    pub jpeg: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl ProcessedImage {
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.jpeg)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ImagePipeline {
    max_bytes: usize,
    max_dimension: u32,
    jpeg_quality: u8,
}

impl ImagePipeline {
    pub fn new(max_bytes: usize, max_dimension: u32, jpeg_quality: u8) -> Self {
        Self {
            max_bytes,
            max_dimension,
            jpeg_quality,
        }
    }

    /// Decode a base64 payload, accepting a `data:<mime>;base64,` prefix
    pub fn decode_base64(&self, input: &str) -> AppResult<Vec<u8>> {
        let payload = match input.split_once(";base64,") {
            Some((prefix, data)) if prefix.starts_with("data:") => data,
            _ => input,
        };
        let payload = payload.trim();

        // Reject before decoding, 4 base64 chars carry 3 bytes
        if payload.len() / 4 * 3 > self.max_bytes + 3 {
            return Err(self.too_large(payload.len() / 4 * 3));
        }

        let bytes = STANDARD.decode(payload).map_err(|e| {
            AppError::with_message(ErrorCode::InvalidImage, format!("Invalid image: {e}"))
        })?;

        if bytes.len() > self.max_bytes {
            return Err(self.too_large(bytes.len()));
        }
        Ok(bytes)
    }

    /// Decode, fit within `max_dimension` (aspect preserved, never upscaled)
    /// and re-encode as JPEG
    pub fn process(&self, data: &[u8]) -> AppResult<ProcessedImage> {
        let img = image::load_from_memory(data).map_err(|e| {
            AppError::with_message(ErrorCode::InvalidImage, format!("Invalid image: {e}"))
        })?;

        let max = self.max_dimension;
        let img = if img.width() > max || img.height() > max {
            img.resize(max, max, FilterType::Lanczos3)
        } else {
            img
        };

        let mut buffer = Vec::new();
        {
            let mut cursor = Cursor::new(&mut buffer);
            let rgb_img = img.to_rgb8();
            let encoder =
                image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, self.jpeg_quality);
            rgb_img
                .write_with_encoder(encoder)
                .map_err(|e| AppError::internal(format!("Failed to compress image: {}", e)))?;
        }

        Ok(ProcessedImage {
            jpeg: buffer,
            width: img.width(),
            height: img.height(),
        })
    }

    pub fn process_base64(&self, input: &str) -> AppResult<ProcessedImage> {
        let bytes = self.decode_base64(input)?;
        self.process(&bytes)
    }

    fn too_large(&self, size: usize) -> AppError {
        AppError::new(ErrorCode::ImageTooLarge)
            .with_detail("size", size)
            .with_detail("max", self.max_bytes)
    }
}
