// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Virtual Try-On
//!
//! A cross-platform desktop client that sends a person photo and a garment
//! photo to a remote try-on service and shows the generated image.

mod app;
mod config;
mod error;
mod io;
mod models;
mod service;
mod session;
mod ui;
mod util;

use anyhow::Result;
use app::TryOnApp;
use clap::Parser;
use config::Config;
use service::client::TryOnClient;
use service::http::HttpTryOnService;
use session::catalogue::CatalogueFlow;
use std::sync::Arc;
use ui::textures::TextureCache;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = Config::parse();
    log::info!("Try-on endpoint: {}", config.endpoint);

    // Service and shared client
    let service = HttpTryOnService::new(config.endpoint.clone(), config.request_timeout())?;
    let client = TryOnClient::new(Arc::new(service));

    // Catalogue items and the images they reference
    let items = io::serialization::load_catalogue(config.catalogue.as_deref())?;
    let assets: Arc<dyn io::assets::AssetSource> = Arc::from(io::assets::from_location(&config.assets)?);
    log::info!("Loaded {} catalogue items, assets from {}", items.len(), config.assets);
    let catalogue = CatalogueFlow::new(items, assets);

    let textures = TextureCache::new(reqwest::blocking::Client::new());

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Virtual Try-On"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Virtual Try-On",
        options,
        Box::new(move |cc| Ok(Box::new(TryOnApp::new(cc, client, catalogue, textures)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
