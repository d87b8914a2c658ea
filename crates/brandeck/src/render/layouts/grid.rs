use eframe::egui::{self, Pos2, Stroke};

use crate::catalog::{Content, Slide};
use crate::render::{draw_rule, text};
use crate::theme::Theme;

pub const COLUMNS: usize = 12;
pub const GUTTER: f32 = 24.0;

/// The layout grid itself: twelve tinted columns under the slide title,
/// with any content listed as notes beneath.
pub fn render(ui: &egui::Ui, slide: &Slide, theme: &Theme, rect: egui::Rect, scale: f32) -> f32 {
    let content_rect = super::content_rect(rect, scale);
    let painter = ui.painter();

    let title_size = text::draw_line(
        ui,
        &theme.title_text(&slide.title.to_uppercase()),
        content_rect.left_top(),
        theme.display_font(theme.h2_size * scale),
        theme.foreground,
    );
    text::draw_line_right(
        ui,
        &text::spaced_caps(&format!("{COLUMNS} columns / {GUTTER:.0}px gutter")),
        content_rect.right(),
        content_rect.top(),
        theme.mono_font(theme.label_size * scale),
        theme.accent,
    );

    let grid_top = content_rect.top() + title_size.y + 48.0 * scale;
    let grid_height = content_rect.height() * 0.5;
    let gutter = GUTTER * scale;
    let column_width = (content_rect.width() - gutter * (COLUMNS - 1) as f32) / COLUMNS as f32;

    for i in 0..COLUMNS {
        let column = egui::Rect::from_min_size(
            Pos2::new(content_rect.left() + (column_width + gutter) * i as f32, grid_top),
            egui::vec2(column_width, grid_height),
        );
        painter.rect_filled(column, 0.0, Theme::with_opacity(theme.accent, 0.12));
        painter.rect_stroke(
            column,
            0.0,
            Stroke::new(1.0, Theme::with_opacity(theme.accent, 0.4)),
            egui::StrokeKind::Inside,
        );
        text::draw_line(
            ui,
            &text::padded(i + 1),
            Pos2::new(column.left() + 6.0 * scale, column.bottom() + 8.0 * scale),
            theme.mono_font(11.0 * scale),
            theme.secondary,
        );
    }

    let mut y = grid_top + grid_height + 56.0 * scale;
    draw_rule(painter, content_rect.left(), content_rect.right(), y, theme.border);
    y += 32.0 * scale;

    let notes: Vec<&str> = match &slide.content {
        Some(Content::List(items)) => items.iter().map(String::as_str).collect(),
        Some(Content::Text(text)) => vec![text.as_str()],
        None => Vec::new(),
    };
    for note in notes {
        y += text::draw_wrapped(
            ui,
            note,
            Pos2::new(content_rect.left(), y),
            theme.display_font(theme.body_size * 0.7 * scale),
            theme.foreground,
            content_rect.width(),
        ) + 16.0 * scale;
    }

    (y + super::PADDING * scale - rect.top()).max(rect.height())
}
