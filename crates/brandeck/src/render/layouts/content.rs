use eframe::egui::{self, Pos2, Stroke};

use crate::catalog::{Content, Slide};
use crate::render::{draw_rule, text};
use crate::theme::Theme;

/// Caption line such as `1.1 / MISSION`.
fn caption(slide: &Slide) -> String {
    match &slide.section_number {
        Some(number) => format!("{number} / {}", slide.title),
        None => slide.title.clone(),
    }
}

/// A single statement set large, with an accent hairline on its left edge.
pub fn render_text(ui: &egui::Ui, slide: &Slide, theme: &Theme, rect: egui::Rect, scale: f32) -> f32 {
    let content_rect = super::content_rect(rect, scale);
    let painter = ui.painter();

    let indent = 48.0 * scale;
    let left = content_rect.left() + indent;
    let width = (content_rect.width() - indent).min(1400.0 * scale);

    let body = match &slide.content {
        Some(Content::Text(text)) => text.clone(),
        Some(Content::List(items)) => items.join("\n"),
        None => String::new(),
    };
    let body_galley = painter.layout(
        body,
        theme.display_font(theme.h2_size * 0.85 * scale),
        theme.foreground,
        width,
    );

    let caption_height = theme.label_size * scale * 1.4;
    let gap = 48.0 * scale;
    let block_height = caption_height + gap + body_galley.rect.height();
    let top = (content_rect.center().y - block_height / 2.0).max(content_rect.top());

    painter.line_segment(
        [
            Pos2::new(content_rect.left(), top),
            Pos2::new(content_rect.left(), top + block_height),
        ],
        Stroke::new(1.0 * scale.max(1.0), theme.accent),
    );

    text::draw_label(
        ui,
        &caption(slide),
        Pos2::new(left, top),
        theme,
        Theme::with_opacity(theme.foreground, 0.5),
        scale,
    );

    let body_height = body_galley.rect.height();
    painter.galley(Pos2::new(left, top + caption_height + gap), body_galley, theme.foreground);

    let bottom = top + caption_height + gap + body_height + super::PADDING * scale;
    (bottom - rect.top()).max(rect.height())
}

/// Header row, a bracketed subtitle column, and either bullet items or
/// label/value detail rows.
pub fn render_list(ui: &egui::Ui, slide: &Slide, theme: &Theme, rect: egui::Rect, scale: f32) -> f32 {
    let content_rect = super::content_rect(rect, scale);
    let painter = ui.painter();

    // Header
    let title_size = text::draw_line(
        ui,
        &theme.title_text(&slide.title.to_uppercase()),
        content_rect.left_top(),
        theme.display_font(theme.h2_size * scale),
        theme.foreground,
    );
    if let Some(number) = &slide.section_number {
        let label_font = theme.mono_font(theme.label_size * scale);
        let label_height = painter
            .layout_no_wrap(number.clone(), label_font.clone(), theme.accent)
            .rect
            .height();
        text::draw_line_right(
            ui,
            number,
            content_rect.right(),
            content_rect.top() + title_size.y - label_height,
            label_font,
            theme.accent,
        );
    }

    let header_bottom = content_rect.top() + title_size.y + 32.0 * scale;
    draw_rule(
        painter,
        content_rect.left(),
        content_rect.right(),
        header_bottom,
        theme.border,
    );

    let body_top = header_bottom + 48.0 * scale;
    let gutter = 64.0 * scale;
    let left_width = content_rect.width() * 4.0 / 12.0 - gutter / 2.0;
    let right_left = content_rect.left() + left_width + gutter;
    let right_width = content_rect.right() - right_left;

    if let Some(subtitle) = &slide.subtitle {
        text::draw_wrapped(
            ui,
            &text::spaced_caps(&format!("[ {subtitle} ]")),
            Pos2::new(content_rect.left(), body_top),
            theme.mono_font(theme.label_size * scale),
            theme.secondary,
            left_width,
        );
    }

    let mut y = body_top;

    if let Some(content) = &slide.content {
        let items: Vec<&str> = match content {
            Content::List(items) => items.iter().map(String::as_str).collect(),
            Content::Text(text) => vec![text.as_str()],
        };
        let item_font = theme.display_font(theme.body_size * 0.95 * scale);
        let dot = 5.0 * scale;
        for item in items {
            let galley = painter.layout(
                item.to_string(),
                item_font.clone(),
                theme.foreground,
                right_width - 40.0 * scale,
            );
            let height = galley.rect.height();
            painter.circle_filled(
                Pos2::new(right_left + dot, y + height / 2.0),
                dot,
                theme.accent,
            );
            painter.galley(Pos2::new(right_left + 40.0 * scale, y), galley, theme.foreground);
            y += height + 36.0 * scale;
        }
    }

    if !slide.details.is_empty() {
        let row_height = 96.0 * scale;
        let inner = 28.0 * scale;
        for detail in &slide.details {
            let row = egui::Rect::from_min_size(
                Pos2::new(right_left, y),
                egui::vec2(right_width, row_height),
            );
            painter.rect_stroke(
                row,
                8.0 * scale,
                Stroke::new(1.0, theme.border),
                egui::StrokeKind::Inside,
            );

            let label_font = theme.mono_font(theme.label_size * scale);
            let label_height = painter
                .layout_no_wrap(detail.label.clone(), label_font.clone(), theme.accent)
                .rect
                .height();
            text::draw_line(
                ui,
                &text::spaced_caps(&detail.label),
                Pos2::new(row.left() + inner, row.center().y - label_height / 2.0),
                label_font,
                theme.accent,
            );

            let value_font = theme.display_font(theme.body_size * scale);
            let value_height = painter
                .layout_no_wrap(detail.value.clone(), value_font.clone(), theme.foreground)
                .rect
                .height();
            text::draw_line_right(
                ui,
                &detail.value,
                row.right() - inner,
                row.center().y - value_height / 2.0,
                value_font,
                theme.foreground,
            );

            y += row_height + 16.0 * scale;
        }
    }

    let bottom = y + super::PADDING * scale;
    (bottom - rect.top()).max(rect.height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_caption_with_and_without_number() {
        let catalog = Catalog::bundled().unwrap();
        let mission = catalog.slides.iter().find(|s| s.id == "1.1").unwrap();
        assert_eq!(caption(mission), "1.1 / Mission");

        let mut unnumbered = mission.clone();
        unnumbered.section_number = None;
        assert_eq!(caption(&unnumbered), "Mission");
    }
}
