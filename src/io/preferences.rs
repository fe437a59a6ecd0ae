// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Persisted display preference (light/dark).
//!
//! Read once at startup and written on every change. The value lives in
//! eframe's app storage under a fixed key as a JSON boolean.

/// Storage key for the dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayPreferences {
    pub dark_mode: bool,
}

impl DisplayPreferences {
    /// Load from storage; missing or unreadable values mean light mode.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        let dark_mode = storage
            .and_then(|s| s.get_string(DARK_MODE_KEY))
            .and_then(|raw| match serde_json::from_str::<bool>(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    log::warn!("Ignoring stored {} value {:?}: {}", DARK_MODE_KEY, raw, e);
                    None
                }
            })
            .unwrap_or(false);
        log::debug!("Loaded display preference: dark_mode={}", dark_mode);
        Self { dark_mode }
    }

    /// Write and flush immediately.
    pub fn save(&self, storage: &mut dyn eframe::Storage) {
        storage.set_string(DARK_MODE_KEY, self.dark_mode.to_string());
        storage.flush();
    }
}
