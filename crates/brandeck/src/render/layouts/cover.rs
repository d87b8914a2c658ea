use eframe::egui::{self, Pos2, Stroke};

use crate::catalog::Slide;
use crate::render::{draw_logo, draw_rule, text};
use crate::theme::Theme;

pub fn render(ui: &egui::Ui, slide: &Slide, theme: &Theme, rect: egui::Rect, scale: f32) -> f32 {
    let content_rect = super::content_rect(rect, scale);
    let painter = ui.painter();
    let secondary = theme.secondary;

    // Header row: mark and studio name left, document label right
    let mark = 36.0 * scale;
    draw_logo(
        painter,
        Pos2::new(content_rect.left() + mark / 2.0, content_rect.top() + mark / 2.0),
        mark,
        theme.accent,
    );
    text::draw_line(
        ui,
        &text::spaced_caps("OAStudio"),
        Pos2::new(content_rect.left() + mark + 16.0 * scale, content_rect.top() + 6.0 * scale),
        theme.display_font(20.0 * scale),
        theme.foreground,
    );

    let label_font = theme.mono_font(12.0 * scale);
    let label_top = content_rect.top();
    let h = text::draw_line_right(
        ui,
        &text::spaced_caps("Brand Guidelines"),
        content_rect.right(),
        label_top,
        label_font.clone(),
        secondary,
    )
    .y;
    text::draw_line_right(
        ui,
        &text::spaced_caps("Version 2.0"),
        content_rect.right(),
        label_top + h + 4.0 * scale,
        label_font,
        secondary,
    );

    let header_bottom = content_rect.top() + mark + 32.0 * scale;
    draw_rule(
        painter,
        content_rect.left(),
        content_rect.right(),
        header_bottom,
        theme.border,
    );

    // Title block anchored to the bottom
    let title_font = theme.display_font(theme.h1_size * 1.6 * scale);
    let title_galley = painter.layout(
        slide.title.to_uppercase(),
        title_font,
        theme.foreground,
        content_rect.width(),
    );
    let subtitle_galley = slide.subtitle.as_ref().map(|subtitle| {
        painter.layout(
            text::spaced_caps(subtitle),
            theme.display_font(theme.body_size * 0.9 * scale),
            secondary,
            content_rect.width(),
        )
    });

    let ring = 64.0 * scale;
    let gap = 32.0 * scale;
    let block_height = ring
        + gap
        + title_galley.rect.height()
        + subtitle_galley
            .as_ref()
            .map_or(0.0, |g| g.rect.height() + gap);
    let mut y = (content_rect.bottom() - block_height).max(header_bottom + gap);

    let ring_center = Pos2::new(content_rect.left() + ring / 2.0, y + ring / 2.0);
    painter.circle_stroke(ring_center, ring / 2.0, Stroke::new(1.5 * scale, theme.accent));
    painter.circle_filled(ring_center, 4.0 * scale, theme.accent);
    y += ring + gap;

    let title_height = title_galley.rect.height();
    painter.galley(Pos2::new(content_rect.left(), y), title_galley, theme.foreground);
    y += title_height;

    if let Some(galley) = subtitle_galley {
        y += gap;
        let height = galley.rect.height();
        painter.galley(Pos2::new(content_rect.left(), y), galley, secondary);
        y += height;
    }

    y + super::PADDING * scale - rect.top()
}

/// Welcome slides carry no copy: just the mark.
pub fn render_welcome(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, scale: f32) -> f32 {
    draw_logo(ui.painter(), rect.center(), 320.0 * scale, theme.accent);
    rect.height()
}
