// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Result card and history grid.

use super::textures::{self, ImageSource, TextureCache};
use super::ViewContext;
use crate::models::result::TryOnResult;
use crate::session::history::ResultHistory;

const RESULT_IMAGE_SIZE: egui::Vec2 = egui::vec2(480.0, 300.0);
const HISTORY_IMAGE_SIZE: egui::Vec2 = egui::vec2(260.0, 300.0);
const HISTORY_COLUMNS: usize = 3;

/// Texture key for a result image.
pub fn result_key(result: &TryOnResult) -> String {
    format!("result:{}", result.id)
}

fn result_slot(result: &TryOnResult, textures: &mut TextureCache) -> textures::TextureSlot {
    let reference = result.result_image.clone();
    textures.get(&result_key(result), move || ImageSource::Reference(reference))
}

/// Display the latest result, scrolling it into view when `scroll` is set.
pub fn show_current(
    ui: &mut egui::Ui,
    view: ViewContext,
    result: &TryOnResult,
    textures: &mut TextureCache,
    scroll: bool,
) {
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        let heading = ui.label(
            egui::RichText::new("Your Try-On Result")
                .size(24.0)
                .strong()
                .color(view.text_color()),
        );
        if scroll {
            heading.scroll_to_me(Some(egui::Align::TOP));
        }
        ui.add_space(24.0);

        let slot = result_slot(result, textures);
        view.card().show(ui, |ui| {
            ui.set_max_width(RESULT_IMAGE_SIZE.x);
            ui.vertical_centered(|ui| {
                textures::show(ui, &slot, RESULT_IMAGE_SIZE);
                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new(&result.text)
                        .size(20.0)
                        .strong()
                        .color(view.text_color()),
                );
                ui.label(
                    egui::RichText::new(&result.timestamp)
                        .size(12.0)
                        .color(view.sub_text_color()),
                );
            });
        });
    });
}

/// Display every result of the session, newest first.
pub fn show_history(ui: &mut egui::Ui, view: ViewContext, history: &ResultHistory, textures: &mut TextureCache) {
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("Previous Try-On Results")
                .size(24.0)
                .strong()
                .color(view.text_color()),
        );
    });
    ui.add_space(24.0);

    egui::Grid::new("history_grid")
        .num_columns(HISTORY_COLUMNS)
        .spacing(egui::vec2(24.0, 24.0))
        .show(ui, |ui| {
            for (idx, result) in history.entries().enumerate() {
                let slot = result_slot(result, textures);
                view.card().show(ui, |ui| {
                    ui.set_width(HISTORY_IMAGE_SIZE.x);
                    textures::show(ui, &slot, HISTORY_IMAGE_SIZE);
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(&result.text)
                            .strong()
                            .color(view.text_color()),
                    );
                    ui.label(
                        egui::RichText::new(&result.timestamp)
                            .size(12.0)
                            .color(view.sub_text_color()),
                    );
                });
                if (idx + 1) % HISTORY_COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });
}
