// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Predefined garments offered by the catalogue page.

use super::selection::{GarmentType, Style};
use serde::{Deserialize, Serialize};

/// Catalogue shipped with the binary.
pub const BUILTIN_CATALOGUE: &str = include_str!("../../assets/catalogue.yaml");

/// A hand-authored catalogue entry. Read-only at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueItem {
    pub id: String,
    pub name: String,
    /// Asset path, e.g. `/ProductImages/1.png`.
    pub image: String,
    #[serde(rename = "type")]
    pub garment_type: GarmentType,
    pub style: Style,
}

impl CatalogueItem {
    /// File name used when the asset is sent as the garment image.
    pub fn upload_file_name(&self) -> String {
        format!("{}.jpg", self.name)
    }
}

/// The catalogue document: a list of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    pub items: Vec<CatalogueItem>,
}
