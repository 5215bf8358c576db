//! Color Constants
//!
//! Warm brown/tan scheme for the board view. Columns are dark, note cards
//! are light.

use eframe::egui::Color32;

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x3E, 0x2A, 0x24);

/// Window background behind the columns
pub const BG_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Board column background
pub const COLUMN_BG: Color32 = Color32::from_rgb(0x3A, 0x27, 0x21);

/// Note card background
pub const CARD_BG: Color32 = Color32::from_rgb(0xF7, 0xF2, 0xEC);

/// Note card not yet confirmed by the server
pub const CARD_PENDING: Color32 = Color32::from_rgb(0xEA, 0xDB, 0xC8);

pub const CARD_BORDER: Color32 = Color32::from_rgb(0xC7, 0xB2, 0x9A);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xE0, 0xD6);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8B, 0x7B, 0x6B);

pub const TIMESTAMP: Color32 = Color32::from_rgb(0x8B, 0x7B, 0x6B);

pub const ACCENT: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);
