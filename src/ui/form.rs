// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main try-on form.
//!
//! Model and garment sections side by side, special instructions below,
//! then the submit button, the latest result, and the session history.

use super::intake::{self, IntakeAction};
use super::textures::TextureCache;
use super::{results, ViewContext};
use crate::models::selection::{GarmentType, Gender, ModelType, Style};
use crate::session::form::{ImageRole, MainForm};
use std::path::PathBuf;

/// Result of form interaction.
pub enum FormAction {
    None,
    Submit,
    Pick(ImageRole, PathBuf),
    Clear(ImageRole),
}

/// Display the form and everything below it.
pub fn show(
    ui: &mut egui::Ui,
    view: ViewContext,
    form: &mut MainForm,
    textures: &mut TextureCache,
    can_submit: bool,
) -> FormAction {
    let mut action = FormAction::None;

    ui.columns(2, |columns| {
        // Model section
        view.card().show(&mut columns[0], |ui| {
            ui.label(view.heading("Model Image"));
            ui.add_space(12.0);
            let picked = intake::show(ui, view, "Upload Model Image", form.image(ImageRole::Person), textures);
            merge_intake(&mut action, ImageRole::Person, picked);

            ui.add_space(16.0);
            let selection = &mut form.selection;
            choice(ui, view, "Model Type", "Select model type", &mut selection.model_type, &ModelType::ALL, |v| {
                v.label().to_string()
            });
            choice(ui, view, "Gender", "Select gender", &mut selection.gender, &Gender::ALL, |v| {
                v.label().to_string()
            });
        });

        // Garment section
        view.card().show(&mut columns[1], |ui| {
            ui.label(view.heading("Garment Image"));
            ui.add_space(12.0);
            let picked = intake::show(ui, view, "Upload Cloth Image", form.image(ImageRole::Garment), textures);
            merge_intake(&mut action, ImageRole::Garment, picked);

            ui.add_space(16.0);
            let selection = &mut form.selection;
            choice(
                ui,
                view,
                "Garment Type",
                "Select garment type",
                &mut selection.garment_type,
                &GarmentType::KNOWN,
                |v| v.label().to_string(),
            );
            choice(ui, view, "Style", "Select style", &mut selection.style, &Style::KNOWN, |v| {
                v.label().to_string()
            });
        });
    });

    // Instructions
    ui.add_space(32.0);
    ui.label(view.heading("Special Instructions"));
    ui.add_space(8.0);
    ui.add(
        egui::TextEdit::multiline(&mut form.selection.instructions)
            .hint_text("e.g. Fit for walking pose, crop top, side view preferred...")
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );

    // Submit button; disabled while any request is in flight.
    ui.add_space(32.0);
    let busy = form.state().is_busy();
    ui.vertical_centered(|ui| {
        let text = if busy { "Processing..." } else { "Try On" };
        let button = egui::Button::new(egui::RichText::new(text).size(16.0).color(egui::Color32::WHITE))
            .fill(super::ACCENT)
            .min_size(egui::vec2(200.0, 48.0));
        if ui.add_enabled(can_submit, button).clicked() {
            action = FormAction::Submit;
        }
        if busy {
            ui.add_space(16.0);
            ui.spinner();
        }
    });

    // Latest result and history
    let scroll = form.take_scroll_request();
    let history = form.history();
    if let Some(result) = history.current() {
        ui.add_space(48.0);
        ui.separator();
        results::show_current(ui, view, result, textures, scroll);
    }
    if !history.is_empty() {
        ui.add_space(40.0);
        ui.separator();
        results::show_history(ui, view, history, textures);
    }

    action
}

fn merge_intake(action: &mut FormAction, role: ImageRole, intake: IntakeAction) {
    match intake {
        IntakeAction::Picked(path) => *action = FormAction::Pick(role, path),
        IntakeAction::Clear => *action = FormAction::Clear(role),
        IntakeAction::None => {}
    }
}

/// Labelled drop-down bound to an optional value.
fn choice<T: Clone + PartialEq>(
    ui: &mut egui::Ui,
    view: ViewContext,
    label: &str,
    placeholder: &str,
    value: &mut Option<T>,
    options: &[T],
    option_label: impl Fn(&T) -> String,
) {
    ui.label(egui::RichText::new(label).color(view.sub_text_color()));
    let selected = value
        .as_ref()
        .map(&option_label)
        .unwrap_or_else(|| placeholder.to_string());
    egui::ComboBox::from_id_source(label)
        .selected_text(selected)
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(value, Some(option.clone()), option_label(option));
            }
        });
    ui.add_space(8.0);
}
