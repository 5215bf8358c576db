//! Theme Module
//!
//! Colors and frame builders shared by the views.

pub mod colors;

use eframe::egui::{self, CornerRadius};

/// Frame around one board column
pub fn column_frame() -> egui::Frame {
    egui::Frame::default()
        .fill(colors::COLUMN_BG)
        .inner_margin(egui::Margin::same(10))
        .corner_radius(CornerRadius::same(6))
}

/// Frame around one note card
pub fn card_frame(pending: bool) -> egui::Frame {
    egui::Frame::default()
        .fill(if pending {
            colors::CARD_PENDING
        } else {
            colors::CARD_BG
        })
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .inner_margin(egui::Margin::same(8))
        .corner_radius(CornerRadius::same(4))
}
