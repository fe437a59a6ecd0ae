// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Header bar with page navigation and the theme switch.

use super::ViewContext;
use crate::app::Page;

/// Result of header interaction.
pub enum ToolbarAction {
    None,
    Navigate(Page),
    SetDarkMode(bool),
}

/// Display the header bar.
pub fn show(ui: &mut egui::Ui, view: ViewContext, page: Page) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("👗 Virtual Try-On")
                .size(22.0)
                .strong()
                .color(view.text_color()),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(8.0);

            let mut dark_mode = view.dark_mode;
            let icon = if dark_mode { "🌙" } else { "☀" };
            if ui
                .toggle_value(&mut dark_mode, icon)
                .on_hover_text("Toggle dark mode")
                .changed()
            {
                action = ToolbarAction::SetDarkMode(dark_mode);
            }

            let (label, target) = match page {
                Page::TryOn => ("Browse Catalogue", Page::Catalogue),
                Page::Catalogue => ("Back to Try-On", Page::TryOn),
            };
            if ui.button(label).clicked() {
                action = ToolbarAction::Navigate(target);
            }
        });
    });

    action
}
