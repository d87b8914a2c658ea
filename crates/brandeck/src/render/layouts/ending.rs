use eframe::egui::{self, Color32, Pos2, Stroke};

use crate::catalog::Slide;
use crate::render::{draw_logo, draw_rule, text};
use crate::theme::Theme;

/// Closing slide. Always black regardless of theme: mark and title left,
/// contact block right.
pub fn render(ui: &egui::Ui, slide: &Slide, theme: &Theme, rect: egui::Rect, scale: f32) -> f32 {
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, Color32::BLACK);

    let content_rect = super::content_rect(rect, scale);
    let muted = Color32::from_rgb(0x6B, 0x72, 0x80);
    let hairline = Color32::from_rgba_unmultiplied(0xFF, 0xFF, 0xFF, 0x1A);
    let gutter = 96.0 * scale;
    let half = (content_rect.width() - gutter) / 2.0;

    // Left: mark on top, title at the bottom, behind a hairline
    let column_height = content_rect.height() * 0.6;
    let top = content_rect.center().y - column_height / 2.0;
    let bottom = top + column_height;
    painter.line_segment(
        [Pos2::new(content_rect.left(), top), Pos2::new(content_rect.left(), bottom)],
        Stroke::new(1.0, hairline),
    );

    let left = content_rect.left() + 48.0 * scale;
    let mark = 192.0 * scale;
    draw_logo(painter, Pos2::new(left + mark / 2.0, top + mark / 2.0), mark, theme.accent);

    let caption_font = theme.mono_font(theme.label_size * scale);
    let caption_height = caption_font.size * 1.4;
    let title_galley = painter.layout(
        theme.title_text(&slide.title.to_uppercase()),
        theme.display_font(theme.h1_size * 1.3 * scale),
        Color32::WHITE,
        half - 48.0 * scale,
    );
    let title_top = bottom - caption_height - 16.0 * scale - title_galley.rect.height();
    let title_height = title_galley.rect.height();
    painter.galley(Pos2::new(left, title_top), title_galley, Color32::WHITE);
    text::draw_label(
        ui,
        "System Shutdown",
        Pos2::new(left, title_top + title_height + 16.0 * scale),
        theme,
        muted,
        scale,
    );

    // Right: inquiries, then the detail pairs in two columns
    let right_left = content_rect.left() + half + gutter;
    let mut y = content_rect.center().y - 160.0 * scale;

    if let Some(contact) = &slide.subtitle {
        y += text::draw_label(ui, "Inquiries", Pos2::new(right_left, y), theme, muted, scale).y
            + 12.0 * scale;
        y += text::draw_wrapped(
            ui,
            contact,
            Pos2::new(right_left, y),
            theme.display_font(theme.h2_size * 0.75 * scale),
            Color32::WHITE,
            half,
        ) + 48.0 * scale;
    }

    if !slide.details.is_empty() {
        draw_rule(painter, right_left, right_left + half, y, hairline);
        y += 32.0 * scale;
        let column_width = half / 2.0;
        for (i, detail) in slide.details.iter().enumerate() {
            let x = right_left + column_width * (i % 2) as f32;
            let row_top = y + (i / 2) as f32 * 96.0 * scale;
            let label = text::draw_label(ui, &detail.label, Pos2::new(x, row_top), theme, muted, scale);
            text::draw_line(
                ui,
                &detail.value,
                Pos2::new(x, row_top + label.y + 8.0 * scale),
                theme.display_font(theme.body_size * 0.6 * scale),
                Color32::WHITE,
            );
        }
    }

    rect.height()
}
