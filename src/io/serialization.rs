// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalogue document loading.
//!
//! The catalogue is authored in YAML and embedded in the binary. A
//! replacement may be given at startup as a YAML or JSON file.

use crate::models::catalogue::{Catalogue, CatalogueItem, BUILTIN_CATALOGUE};
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Parse catalogue data in YAML format.
pub fn parse_yaml(yaml: &str) -> Result<Catalogue> {
    let data = serde_yaml::from_str(yaml)?;
    Ok(data)
}

/// Parse catalogue data in JSON format.
pub fn parse_json(json: &str) -> Result<Catalogue> {
    let data = serde_json::from_str(json)?;
    Ok(data)
}

/// Import a catalogue file, choosing the format by extension.
pub fn import_catalogue(path: &Path) -> Result<Catalogue> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalogue {}", path.display()))?;
    let extension = path.extension().and_then(|s| s.to_str());
    let catalogue = match extension {
        Some("yaml") | Some("yml") => parse_yaml(&text),
        Some("json") => parse_json(&text),
        _ => bail!("Unsupported catalogue extension: {:?}", extension),
    }
    .with_context(|| format!("Invalid catalogue {}", path.display()))?;

    log::info!("Imported {} catalogue items from {}", catalogue.items.len(), path.display());
    Ok(catalogue)
}

/// Items from `path`, or the built-in catalogue when no path is given.
pub fn load_catalogue(path: Option<&Path>) -> Result<Vec<CatalogueItem>> {
    let catalogue = match path {
        Some(path) => import_catalogue(path)?,
        None => parse_yaml(BUILTIN_CATALOGUE).context("Built-in catalogue is invalid")?,
    };
    Ok(catalogue.items)
}
