// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Sizing helpers for showing images inside fixed-size cards while
//! keeping their aspect ratio.

/// Largest size with the image's aspect ratio that fits in `max_w` x `max_h`.
///
/// Images are never scaled up. Degenerate sizes collapse to zero.
pub fn fit_within(img_width: u32, img_height: u32, max_w: f32, max_h: f32) -> (f32, f32) {
    if img_width == 0 || img_height == 0 || max_w <= 0.0 || max_h <= 0.0 {
        return (0.0, 0.0);
    }

    let (w, h) = (img_width as f32, img_height as f32);
    let scale = (max_w / w).min(max_h / h).min(1.0);
    (w * scale, h * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_image_fits_to_width() {
        let (w, h) = fit_within(1920, 1080, 480.0, 300.0);
        assert!((h - 270.0).abs() < 0.001);
        assert!((w - 480.0).abs() < 0.001);
    }

    #[test]
    fn test_tall_image_fits_to_height() {
        let (w, h) = fit_within(1000, 2000, 480.0, 300.0);
        assert!((h - 300.0).abs() < 0.001);
        assert!((w - 150.0).abs() < 0.001);
    }

    #[test]
    fn test_small_image_not_upscaled() {
        assert_eq!(fit_within(100, 50, 480.0, 300.0), (100.0, 50.0));
    }

    #[test]
    fn test_degenerate_sizes() {
        assert_eq!(fit_within(0, 50, 480.0, 300.0), (0.0, 0.0));
        assert_eq!(fit_within(50, 50, 0.0, 300.0), (0.0, 0.0));
    }
}
