// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image decoding for previews and results.
//!
//! This module turns uploaded files, catalogue assets, and result image
//! references into RGBA pixels suitable for display in egui.

use anyhow::{anyhow, bail, Context, Result};
use base64::Engine;

/// A decoded image ready to become a texture.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode an encoded image (PNG, JPEG, ...) into RGBA pixels.
pub fn decode_image(bytes: &[u8]) -> Result<LoadedImage> {
    let img = image::load_from_memory(bytes).context("Unsupported or corrupt image data")?;
    let rgba = img.to_rgba8();
    Ok(LoadedImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

/// Extract the payload of a base64 `data:` URI.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| anyhow!("Not a data URI"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| anyhow!("Data URI has no payload"))?;
    if !header.ends_with(";base64") {
        bail!("Only base64 data URIs are supported");
    }
    base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .context("Invalid base64 in data URI")
}

/// Resolve a result image reference to encoded bytes.
///
/// The service returns either a `data:` URI or an `http(s)` URL.
pub fn fetch_reference(client: &reqwest::blocking::Client, reference: &str) -> Result<Vec<u8>> {
    if reference.starts_with("data:") {
        return decode_data_uri(reference);
    }
    if reference.starts_with("http://") || reference.starts_with("https://") {
        let response = client.get(reference).send()?.error_for_status()?;
        return Ok(response.bytes()?.to_vec());
    }
    bail!("Unsupported image reference: {}", truncate(reference, 32))
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(2, 3, image::Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_image_dimensions() {
        let loaded = decode_image(&tiny_png()).unwrap();
        assert_eq!((loaded.width, loaded.height), (2, 3));
        assert_eq!(loaded.pixels.len(), 2 * 3 * 4);
        assert_eq!(&loaded.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_decode_image_rejects_garbage() {
        assert!(decode_image(b"definitely not an image").is_err());
    }

    #[test]
    fn test_data_uri_result_decodes() {
        let png = tiny_png();
        let uri = format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&png)
        );
        let client = reqwest::blocking::Client::new();
        let bytes = fetch_reference(&client, &uri).unwrap();
        assert_eq!(bytes, png);
        assert_eq!(decode_image(&bytes).unwrap().width, 2);
    }

    #[test]
    fn test_unsupported_references() {
        assert!(decode_data_uri("data:text/plain,hello").is_err());
        assert!(decode_data_uri("https://x/y.png").is_err());

        let client = reqwest::blocking::Client::new();
        assert!(fetch_reference(&client, "ftp://x/y.png").is_err());
    }
}
