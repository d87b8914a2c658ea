pub mod content;
pub mod cover;
pub mod ending;
pub mod grid;
pub mod palette;
pub mod section;
pub mod typography;

use eframe::egui;

/// Outer margin shared by every layout, in reference pixels.
pub const PADDING: f32 = 96.0;

pub fn content_rect(rect: egui::Rect, scale: f32) -> egui::Rect {
    rect.shrink(PADDING * scale)
}
