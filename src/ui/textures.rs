// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background image loading and texture cache.
//!
//! Decoding (and fetching, for result URLs and catalogue assets) happens on
//! worker threads. Finished images are turned into egui textures on the UI
//! thread in [`TextureCache::poll`].

use crate::io::assets::AssetSource;
use crate::io::media::{self, LoadedImage};
use crate::util::geometry::fit_within;
use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

/// Where the encoded bytes of an image come from.
pub enum ImageSource {
    /// Already in memory (uploads).
    Bytes(Arc<[u8]>),
    /// `data:` URI or URL returned by the service.
    Reference(String),
    /// Catalogue asset path.
    Asset(Arc<dyn AssetSource>, String),
}

/// Load state of one texture.
#[derive(Clone)]
pub enum TextureSlot {
    Loading,
    Ready(egui::TextureHandle),
    Failed,
}

pub struct TextureCache {
    slots: HashMap<String, TextureSlot>,
    sender: Sender<(String, Result<LoadedImage, String>)>,
    receiver: Receiver<(String, Result<LoadedImage, String>)>,
    http: reqwest::blocking::Client,
}

impl TextureCache {
    pub fn new(http: reqwest::blocking::Client) -> Self {
        let (sender, receiver) = channel();
        Self {
            slots: HashMap::new(),
            sender,
            receiver,
            http,
        }
    }

    /// Current slot for `key`, starting a load from `source` on first use.
    pub fn get(&mut self, key: &str, source: impl FnOnce() -> ImageSource) -> TextureSlot {
        if let Some(slot) = self.slots.get(key) {
            return slot.clone();
        }

        self.slots.insert(key.to_string(), TextureSlot::Loading);
        let sender = self.sender.clone();
        let http = self.http.clone();
        let key = key.to_string();
        let source = source();

        std::thread::spawn(move || {
            let result = (|| -> anyhow::Result<LoadedImage> {
                let bytes = match source {
                    ImageSource::Bytes(bytes) => return media::decode_image(&bytes),
                    ImageSource::Reference(reference) => media::fetch_reference(&http, &reference)?,
                    ImageSource::Asset(assets, path) => assets.fetch(&path)?,
                };
                media::decode_image(&bytes)
            })();

            let result = result.map_err(|e| format!("{:#}", e));
            let _ = sender.send((key, result));
        });

        TextureSlot::Loading
    }

    /// Upload finished images. Returns true while anything is still loading.
    pub fn poll(&mut self, ctx: &egui::Context) -> bool {
        while let Ok((key, result)) = self.receiver.try_recv() {
            let slot = match result {
                Ok(loaded) => {
                    let size = [loaded.width as usize, loaded.height as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                    log::debug!("Loaded texture {} ({}x{})", key, loaded.width, loaded.height);
                    TextureSlot::Ready(ctx.load_texture(key.as_str(), color_image, egui::TextureOptions::LINEAR))
                }
                Err(e) => {
                    log::error!("Failed to load image {}: {}", key, e);
                    TextureSlot::Failed
                }
            };
            self.slots.insert(key, slot);
        }
        self.slots.values().any(|slot| matches!(slot, TextureSlot::Loading))
    }

    /// Forget a texture, e.g. when an upload is replaced.
    pub fn forget(&mut self, key: &str) {
        self.slots.remove(key);
    }
}

/// Draw `slot` inside a `max` sized box: the image when ready, a spinner
/// while loading, and a placeholder if loading failed.
pub fn show(ui: &mut egui::Ui, slot: &TextureSlot, max: egui::Vec2) -> egui::Response {
    match slot {
        TextureSlot::Ready(texture) => {
            let [w, h] = texture.size();
            let (w, h) = fit_within(w as u32, h as u32, max.x, max.y);
            ui.image(egui::load::SizedTexture::new(texture.id(), egui::vec2(w, h)))
        }
        TextureSlot::Loading => {
            ui.allocate_ui(max, |ui| {
                ui.centered_and_justified(|ui| ui.spinner());
            })
            .response
        }
        TextureSlot::Failed => {
            ui.allocate_ui(max, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(egui::RichText::new("Image Not Found").weak());
                });
            })
            .response
        }
    }
}
