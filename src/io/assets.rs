// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Static garment images referenced by the catalogue.
//!
//! Asset paths look like `/ProductImages/1.png` and are resolved either
//! under a local directory or against an HTTP origin.

use anyhow::{bail, Context, Result};
use std::path::{Component, Path, PathBuf};

/// Source of catalogue asset bytes.
pub trait AssetSource: Send + Sync {
    fn fetch(&self, asset_path: &str) -> Result<Vec<u8>>;
}

/// Pick the source for a `--assets` value: URLs go over HTTP, anything
/// else is a directory.
pub fn from_location(location: &str) -> Result<Box<dyn AssetSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpAssets::new(location)?))
    } else {
        Ok(Box::new(DirectoryAssets::new(location)))
    }
}

/// Assets stored under a local directory.
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, asset_path: &str) -> Result<PathBuf> {
        let relative = Path::new(asset_path.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            bail!("Asset path escapes the asset root: {}", asset_path);
        }
        Ok(self.root.join(relative))
    }
}

impl AssetSource for DirectoryAssets {
    fn fetch(&self, asset_path: &str) -> Result<Vec<u8>> {
        let path = self.resolve(asset_path)?;
        log::debug!("Reading asset {}", path.display());
        std::fs::read(&path).with_context(|| format!("Failed to read asset {}", path.display()))
    }
}

/// Assets served by a web origin.
pub struct HttpAssets {
    client: reqwest::blocking::Client,
    base: String,
}

impl HttpAssets {
    pub fn new(base: &str) -> Result<Self> {
        Ok(Self {
            client: reqwest::blocking::Client::builder().build()?,
            base: base.trim_end_matches('/').to_string(),
        })
    }
}

impl AssetSource for HttpAssets {
    fn fetch(&self, asset_path: &str) -> Result<Vec<u8>> {
        let url = format!("{}/{}", self.base, asset_path.trim_start_matches('/'));
        log::debug!("Fetching asset {}", url);
        let response = self.client.get(&url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}
