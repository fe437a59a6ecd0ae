// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image upload widget.
//!
//! Opens the native file picker and shows a preview of the chosen image.
//! Any file the picker allows is accepted.

use super::textures::{self, ImageSource, TextureCache};
use super::ViewContext;
use crate::models::image::UploadedImage;
use std::path::PathBuf;

/// Extensions offered by the picker.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "heic", "heif", "bmp", "gif"];

const PREVIEW_SIZE: egui::Vec2 = egui::vec2(320.0, 240.0);

/// Result of upload widget interaction.
pub enum IntakeAction {
    None,
    Picked(PathBuf),
    Clear,
}

/// Texture key for an uploaded image preview.
pub fn preview_key(image: &UploadedImage) -> String {
    format!("upload:{}", image.id)
}

/// Open the native file picker for an image.
pub fn pick_image_file(title: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
}

/// Display the upload button, file name, and preview.
pub fn show(
    ui: &mut egui::Ui,
    view: ViewContext,
    label: &str,
    image: Option<&UploadedImage>,
    textures: &mut TextureCache,
) -> IntakeAction {
    let mut action = IntakeAction::None;

    ui.horizontal(|ui| {
        if ui.button(format!("📁 {}", label)).clicked() {
            if let Some(path) = pick_image_file(label) {
                action = IntakeAction::Picked(path);
            }
        }
        if let Some(image) = image {
            ui.label(egui::RichText::new(&image.file_name).color(view.sub_text_color()));
            if ui.small_button("✖").on_hover_text("Clear").clicked() {
                action = IntakeAction::Clear;
            }
        }
    });

    if let Some(image) = image {
        ui.add_space(8.0);
        let bytes = image.bytes.clone();
        let slot = textures.get(&preview_key(image), move || ImageSource::Bytes(bytes));
        textures::show(ui, &slot, PREVIEW_SIZE);
    }

    action
}
