// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! In-memory image files picked by the user.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// An image file held in memory, ready to be sent as a multipart part.
///
/// No size or type validation happens here; whatever the picker hands over
/// is accepted.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Random id, used to key preview textures.
    pub id: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Arc<[u8]>,
}

impl UploadedImage {
    /// Wrap raw bytes, sniffing the content type from the data.
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = detect_content_type(&file_name, &bytes);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            file_name,
            content_type,
            bytes: bytes.into(),
        }
    }

    /// Read an image file selected in the file dialog.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());

        let image = Self::from_bytes(file_name, bytes);
        log::info!(
            "Picked {} ({}, {} bytes)",
            path.display(),
            image.content_type,
            image.len()
        );
        Ok(image)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

/// Extensions the picker offers, mapped to the type a browser would send.
/// Covers HEIC/HEIF, which the `image` crate does not know.
const EXTENSION_CONTENT_TYPES: &[(&str, &str)] = &[
    ("heic", "image/heic"),
    ("heif", "image/heif"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
];

/// Content type from magic bytes, then file extension.
fn detect_content_type(file_name: &str, bytes: &[u8]) -> String {
    if let Ok(format) = image::guess_format(bytes) {
        return format.to_mime_type().to_string();
    }
    if let Ok(format) = image::ImageFormat::from_path(file_name) {
        return format.to_mime_type().to_string();
    }

    let extension = Path::new(file_name)
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase);
    extension
        .and_then(|ext| {
            EXTENSION_CONTENT_TYPES
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, mime)| mime.to_string())
        })
        .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string())
}
