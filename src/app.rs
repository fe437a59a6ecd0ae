// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns both screens, the shared try-on client, and the
//! display preference. It routes UI actions to the session flows and turns
//! their notifications into toasts.

use crate::io::preferences::DisplayPreferences;
use crate::models::image::UploadedImage;
use crate::service::client::TryOnClient;
use crate::session::catalogue::CatalogueFlow;
use crate::session::form::{ImageRole, MainForm};
use crate::session::uploads::{LoadedUpload, UploadLoader, UploadTarget};
use crate::session::Notification;
use crate::ui::catalogue::CatalogueAction;
use crate::ui::form::FormAction;
use crate::ui::textures::TextureCache;
use crate::ui::toasts::Toasts;
use crate::ui::toolbar::ToolbarAction;
use crate::ui::{catalogue, form, intake, toolbar, ViewContext};
use std::time::Duration;

/// Repaint cadence while waiting on background work.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Currently displayed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    TryOn,
    Catalogue,
}

/// Main application state.
pub struct TryOnApp {
    /// Page shown in the central panel
    page: Page,

    /// Persisted light/dark choice
    preferences: DisplayPreferences,

    /// Shared client; allows one request in flight
    client: TryOnClient,

    /// Main form screen state
    form: MainForm,

    /// Catalogue screen state
    catalogue: CatalogueFlow,

    /// Pending notifications
    toasts: Toasts,

    /// Decoded previews and results
    textures: TextureCache,

    /// Picked files still being read
    uploads: UploadLoader,
}

impl TryOnApp {
    /// Create the application, restoring the display preference.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        client: TryOnClient,
        catalogue: CatalogueFlow,
        textures: TextureCache,
    ) -> Self {
        let preferences = DisplayPreferences::load(cc.storage);
        cc.egui_ctx.set_visuals(ViewContext::from(preferences).visuals());

        Self {
            page: Page::TryOn,
            preferences,
            client,
            form: MainForm::new(),
            catalogue,
            toasts: Toasts::default(),
            textures,
            uploads: UploadLoader::default(),
        }
    }

    fn view(&self) -> ViewContext {
        ViewContext::from(self.preferences)
    }

    /// Apply a theme change and persist it right away.
    fn set_dark_mode(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame, dark_mode: bool) {
        self.preferences.dark_mode = dark_mode;
        ctx.set_visuals(self.view().visuals());
        match frame.storage_mut() {
            Some(storage) => self.preferences.save(storage),
            None => log::warn!("No app storage; display preference will not persist"),
        }
        log::info!("Dark mode {}", if dark_mode { "on" } else { "off" });
    }

    /// Place a finished read in its slot, reporting failures as a toast.
    fn apply_upload(&mut self, upload: LoadedUpload) {
        match upload.result {
            Ok(image) => match upload.target {
                UploadTarget::Form(role) => self.replace_form_image(role, Some(image)),
                UploadTarget::Catalogue => self.replace_catalogue_image(Some(image)),
            },
            Err(e) => {
                log::error!("{:#}", e);
                self.toasts.push(Notification::Error(format!(
                    "Could not open {}",
                    upload.path.display()
                )));
            }
        }
    }

    fn replace_form_image(&mut self, role: ImageRole, image: Option<UploadedImage>) {
        if let Some(old) = self.form.image(role) {
            self.textures.forget(&intake::preview_key(old));
        }
        self.form.set_image(role, image);
    }

    fn replace_catalogue_image(&mut self, image: Option<UploadedImage>) {
        if let Some(old) = self.catalogue.person_image() {
            self.textures.forget(&intake::preview_key(old));
        }
        self.catalogue.set_person_image(image);
    }

    fn handle_form_action(&mut self, action: FormAction) {
        match action {
            FormAction::Submit => {
                if let Err(e) = self.form.submit(&self.client) {
                    self.toasts.push(MainForm::submit_failure(&e));
                }
            }
            FormAction::Pick(role, path) => self.uploads.load(UploadTarget::Form(role), path),
            FormAction::Clear(role) => self.replace_form_image(role, None),
            FormAction::None => {}
        }
    }

    fn handle_catalogue_action(&mut self, action: CatalogueAction) {
        match action {
            CatalogueAction::Select(idx) => {
                if let Err(e) = self.catalogue.select(idx, &self.client) {
                    self.toasts.push(CatalogueFlow::select_failure(&e));
                }
            }
            CatalogueAction::Pick(path) => self.uploads.load(UploadTarget::Catalogue, path),
            CatalogueAction::Clear => self.replace_catalogue_image(None),
            CatalogueAction::None => {}
        }
    }
}

impl eframe::App for TryOnApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Apply finished requests and image loads
        for notification in self.form.poll().into_iter().chain(self.catalogue.poll()) {
            self.toasts.push(notification);
        }
        for upload in self.uploads.poll() {
            self.apply_upload(upload);
        }
        let loading = self.textures.poll(ctx) || self.uploads.is_loading();

        // Keep polling while background work or toasts are live
        if loading || self.client.is_busy() || !self.toasts.is_empty() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }

        let view = self.view();

        // Header
        let toolbar_action = egui::TopBottomPanel::top("header")
            .frame(egui::Frame::none().fill(view.background()).inner_margin(egui::Margin::symmetric(16.0, 12.0)))
            .show(ctx, |ui| toolbar::show(ui, view, self.page))
            .inner;

        match toolbar_action {
            ToolbarAction::Navigate(page) => {
                log::info!("Navigate to {:?}", page);
                self.page = page;
            }
            ToolbarAction::SetDarkMode(dark_mode) => self.set_dark_mode(ctx, frame, dark_mode),
            ToolbarAction::None => {}
        }

        // Footer
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Virtual Try-On • images are generated by a remote service")
                        .size(12.0)
                        .color(view.sub_text_color()),
                );
            });
        });

        // Current page
        let view = self.view();
        let can_submit = self.form.can_submit(&self.client);
        let can_select = self.catalogue.can_select(&self.client);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(16.0);
                    match self.page {
                        Page::TryOn => {
                            let action = form::show(ui, view, &mut self.form, &mut self.textures, can_submit);
                            self.handle_form_action(action);
                        }
                        Page::Catalogue => {
                            let action = catalogue::show(
                                ui,
                                view,
                                &mut self.catalogue,
                                &mut self.textures,
                                can_select,
                            );
                            self.handle_catalogue_action(action);
                        }
                    }
                    ui.add_space(32.0);
                });
        });

        self.toasts.show(ctx, view);
    }
}
