pub mod chrome;
pub mod layouts;
pub mod overlays;
pub mod text;

use eframe::egui::{self, Color32, Pos2, Stroke};

use crate::catalog::{Slide, SlideKind};
use crate::theme::Theme;

/// Layouts are authored against a 1920x1080 canvas and scaled to fit.
pub fn compute_scale(rect: egui::Rect) -> f32 {
    let ref_w = 1920.0;
    let ref_h = 1080.0;
    (rect.width() / ref_w).min(rect.height() / ref_h)
}

/// Render a slide into `rect`. Returns the height of the content measured
/// from `rect.top()`, which may exceed the rect when the slide overflows.
pub fn render_slide(ui: &egui::Ui, slide: &Slide, theme: &Theme, rect: egui::Rect, scale: f32) -> f32 {
    match slide.kind {
        SlideKind::Welcome => layouts::cover::render_welcome(ui, theme, rect, scale),
        SlideKind::Cover => layouts::cover::render(ui, slide, theme, rect, scale),
        SlideKind::SectionHeader => layouts::section::render(ui, slide, theme, rect, scale),
        SlideKind::ContentText => layouts::content::render_text(ui, slide, theme, rect, scale),
        SlideKind::ContentList => layouts::content::render_list(ui, slide, theme, rect, scale),
        SlideKind::Palette => layouts::palette::render(ui, theme, rect, scale),
        SlideKind::Typography => layouts::typography::render(ui, theme, rect, scale),
        SlideKind::GridSystem => layouts::grid::render(ui, slide, theme, rect, scale),
        SlideKind::Ending => layouts::ending::render(ui, slide, theme, rect, scale),
    }
}

/// The "Origin" mark: an outer ring, a faint chevron, a solid apex and a dot.
pub fn draw_logo(painter: &egui::Painter, center: Pos2, size: f32, color: Color32) {
    // Geometry lives on a 100x100 grid centered on (50, 50)
    let unit = size / 100.0;
    let at = |x: f32, y: f32| Pos2::new(center.x + (x - 50.0) * unit, center.y + (y - 50.0) * unit);
    let stroke = Stroke::new(6.0 * unit, color);

    painter.circle_stroke(center, 42.0 * unit, stroke);

    let faint = Stroke::new(6.0 * unit, Theme::with_opacity(color, 0.3));
    painter.add(egui::Shape::closed_line(
        vec![at(50.0, 25.0), at(70.0, 65.0), at(30.0, 65.0)],
        faint,
    ));

    painter.add(egui::Shape::convex_polygon(
        vec![at(50.0, 25.0), at(60.0, 45.0), at(40.0, 45.0)],
        color,
        Stroke::NONE,
    ));
    painter.circle_filled(at(50.0, 65.0), 5.0 * unit, color);
}

/// Thin horizontal rule across `rect` at `y`.
pub fn draw_rule(painter: &egui::Painter, left: f32, right: f32, y: f32, color: Color32) {
    painter.line_segment([Pos2::new(left, y), Pos2::new(right, y)], Stroke::new(1.0, color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_fits_smaller_axis() {
        let full_hd = egui::Rect::from_min_size(Pos2::ZERO, egui::vec2(1920.0, 1080.0));
        assert_eq!(compute_scale(full_hd), 1.0);

        let wide = egui::Rect::from_min_size(Pos2::ZERO, egui::vec2(3840.0, 1080.0));
        assert_eq!(compute_scale(wide), 1.0);

        let half = egui::Rect::from_min_size(Pos2::ZERO, egui::vec2(960.0, 720.0));
        assert_eq!(compute_scale(half), 0.5);
    }
}
