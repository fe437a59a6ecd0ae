// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Transient notifications stacked in the top-right corner.

use super::ViewContext;
use crate::session::Notification;
use std::time::{Duration, Instant};

/// How long a notification stays on screen.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);

struct Toast {
    notification: Notification,
    shown_at: Instant,
}

#[derive(Default)]
pub struct Toasts {
    entries: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    fn push_at(&mut self, notification: Notification, now: Instant) {
        if notification.is_error() {
            log::warn!("Notify: {}", notification.text());
        } else {
            log::info!("Notify: {}", notification.text());
        }
        self.entries.push(Toast {
            notification,
            shown_at: now,
        });
    }

    /// Drop expired notifications.
    fn prune(&mut self, now: Instant) {
        self.entries
            .retain(|toast| now.duration_since(toast.shown_at) < TOAST_LIFETIME);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Draw live notifications. Clicking one dismisses it.
    pub fn show(&mut self, ctx: &egui::Context, view: ViewContext) {
        self.prune(Instant::now());
        if self.entries.is_empty() {
            return;
        }

        let mut dismissed = None;
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 72.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for (idx, toast) in self.entries.iter().enumerate() {
                    let (accent, icon) = match toast.notification {
                        Notification::Success(_) => (egui::Color32::from_rgb(0x22, 0xc5, 0x5e), "✔"),
                        Notification::Error(_) => (egui::Color32::from_rgb(0xef, 0x44, 0x44), "✖"),
                    };
                    let response = egui::Frame::none()
                        .fill(view.card_color())
                        .stroke(egui::Stroke::new(1.5, accent))
                        .rounding(8.0)
                        .inner_margin(egui::Margin::symmetric(14.0, 10.0))
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(icon).color(accent));
                                ui.label(
                                    egui::RichText::new(toast.notification.text())
                                        .color(view.text_color()),
                                );
                            });
                        })
                        .response
                        .interact(egui::Sense::click());
                    if response.clicked() {
                        dismissed = Some(idx);
                    }
                    ui.add_space(8.0);
                }
            });

        if let Some(idx) = dismissed {
            self.entries.remove(idx);
        }
    }
}
