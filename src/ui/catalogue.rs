// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalogue page: photo upload, result, and the garment grid.

use super::intake::{self, IntakeAction};
use super::textures::{self, ImageSource, TextureCache};
use super::{results, ViewContext};
use crate::session::catalogue::CatalogueFlow;
use std::path::PathBuf;

const THUMBNAIL_SIZE: egui::Vec2 = egui::vec2(240.0, 300.0);
const GRID_COLUMNS: usize = 3;

/// Result of catalogue page interaction.
pub enum CatalogueAction {
    None,
    Pick(PathBuf),
    Clear,
    Select(usize),
}

/// Display the catalogue page.
pub fn show(
    ui: &mut egui::Ui,
    view: ViewContext,
    flow: &mut CatalogueFlow,
    textures: &mut TextureCache,
    can_select: bool,
) -> CatalogueAction {
    let mut action = CatalogueAction::None;

    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("Dress Catalogue")
                .size(28.0)
                .strong()
                .color(view.text_color()),
        );
    });
    ui.add_space(24.0);

    // Upload and result side by side
    let scroll = flow.take_scroll_request();
    ui.columns(2, |columns| {
        view.card().show(&mut columns[0], |ui| {
            ui.label(view.heading("Upload Your Photo"));
            ui.add_space(12.0);
            match intake::show(ui, view, "Upload Selfie", flow.person_image(), textures) {
                IntakeAction::Picked(path) => action = CatalogueAction::Pick(path),
                IntakeAction::Clear => action = CatalogueAction::Clear,
                IntakeAction::None => {}
            }
        });

        let ui = &mut columns[1];
        if let Some(result) = flow.current() {
            results::show_current(ui, view, result, textures, scroll);
        } else {
            ui.vertical_centered(|ui| {
                ui.add_space(48.0);
                ui.label(
                    egui::RichText::new("Your result will appear here after selection")
                        .color(view.sub_text_color()),
                );
            });
        }
    });

    if flow.state().is_busy() {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| ui.spinner());
    }

    // Garment grid
    ui.add_space(40.0);
    let assets = flow.assets();
    egui::Grid::new("catalogue_grid")
        .num_columns(GRID_COLUMNS)
        .spacing(egui::vec2(24.0, 24.0))
        .show(ui, |ui| {
            for (idx, item) in flow.items().iter().enumerate() {
                let key = format!("catalogue:{}", item.id);
                let assets = assets.clone();
                let path = item.image.clone();
                let slot = textures.get(&key, move || ImageSource::Asset(assets, path));

                let response = view
                    .card()
                    .multiply_with_opacity(if can_select { 1.0 } else { 0.5 })
                    .show(ui, |ui| {
                        ui.set_width(THUMBNAIL_SIZE.x);
                        textures::show(ui, &slot, THUMBNAIL_SIZE);
                        ui.add_space(8.0);
                        ui.label(view.heading(&item.name));
                        ui.label(
                            egui::RichText::new(format!(
                                "{} • {}",
                                item.style.as_str(),
                                item.garment_type.as_str()
                            ))
                            .color(view.sub_text_color()),
                        );
                    })
                    .response
                    .interact(egui::Sense::click());

                let response = if can_select {
                    response.on_hover_cursor(egui::CursorIcon::PointingHand)
                } else {
                    response.on_hover_cursor(egui::CursorIcon::NotAllowed)
                };
                if response.clicked() && can_select {
                    action = CatalogueAction::Select(idx);
                }
                if (idx + 1) % GRID_COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });

    action
}
