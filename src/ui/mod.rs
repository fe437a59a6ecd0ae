// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the try-on application.
//!
//! Views receive the display preference through [`ViewContext`] instead
//! of reading any global state.

pub mod catalogue;
pub mod form;
pub mod intake;
pub mod results;
pub mod textures;
pub mod toasts;
pub mod toolbar;

use crate::io::preferences::DisplayPreferences;
use egui::Color32;

/// Accent used for primary actions.
pub const ACCENT: Color32 = Color32::from_rgb(0x0e, 0xa5, 0xe9);

/// Per-frame view settings derived from the display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewContext {
    pub dark_mode: bool,
}

impl From<DisplayPreferences> for ViewContext {
    fn from(preferences: DisplayPreferences) -> Self {
        Self {
            dark_mode: preferences.dark_mode,
        }
    }
}

impl ViewContext {
    pub fn text_color(&self) -> Color32 {
        if self.dark_mode {
            Color32::from_rgb(0xe4, 0xe4, 0xe4)
        } else {
            Color32::from_rgb(0x11, 0x18, 0x27)
        }
    }

    pub fn sub_text_color(&self) -> Color32 {
        if self.dark_mode {
            Color32::from_rgb(0x9c, 0xa3, 0xaf)
        } else {
            Color32::from_rgb(0x4b, 0x55, 0x63)
        }
    }

    pub fn card_color(&self) -> Color32 {
        if self.dark_mode {
            Color32::from_rgb(0x1c, 0x1c, 0x1c)
        } else {
            Color32::WHITE
        }
    }

    pub fn background(&self) -> Color32 {
        if self.dark_mode {
            Color32::from_rgb(0x0f, 0x0f, 0x0f)
        } else {
            Color32::from_rgb(0xf9, 0xfa, 0xfb)
        }
    }

    /// egui visuals for the whole window.
    pub fn visuals(&self) -> egui::Visuals {
        let mut visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = self.background();
        visuals.selection.bg_fill = ACCENT;
        visuals
    }

    /// Rounded card frame used for sections and results.
    pub fn card(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.card_color())
            .rounding(12.0)
            .inner_margin(egui::Margin::same(24.0))
    }

    /// Section heading.
    pub fn heading(&self, text: &str) -> egui::RichText {
        egui::RichText::new(text).size(20.0).strong().color(self.text_color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_preference() {
        let light = ViewContext::from(DisplayPreferences { dark_mode: false });
        let dark = ViewContext::from(DisplayPreferences { dark_mode: true });
        assert_ne!(light.card_color(), dark.card_color());
        assert!(!light.visuals().dark_mode);
        assert!(dark.visuals().dark_mode);
        assert_eq!(dark.visuals().panel_fill, dark.background());
    }
}
