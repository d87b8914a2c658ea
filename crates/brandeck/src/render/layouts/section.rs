use eframe::egui::{self, Pos2, Stroke};

use crate::catalog::Slide;
use crate::render::text;
use crate::theme::Theme;

/// Oversized accent section number on the left, title block on the right
/// behind a hairline divider.
pub fn render(ui: &egui::Ui, slide: &Slide, theme: &Theme, rect: egui::Rect, scale: f32) -> f32 {
    let content_rect = super::content_rect(rect, scale);
    let painter = ui.painter();

    let split = content_rect.left() + content_rect.width() * 4.0 / 12.0;

    if let Some(number) = &slide.section_number {
        let galley = painter.layout_no_wrap(
            number.clone(),
            theme.display_font(theme.h1_size * 2.4 * scale),
            theme.accent,
        );
        let pos = Pos2::new(
            content_rect.left(),
            content_rect.center().y - galley.rect.height() / 2.0,
        );
        painter.galley(pos, galley, theme.accent);
    }

    let column_left = split + 48.0 * scale;
    let column_width = content_rect.right() - column_left;

    let title_galley = painter.layout(
        slide.title.to_uppercase(),
        theme.display_font(theme.h1_size * 0.8 * scale),
        theme.foreground,
        column_width,
    );
    let subtitle_galley = slide.subtitle.as_ref().map(|subtitle| {
        painter.layout(
            text::spaced_caps(subtitle),
            theme.mono_font(20.0 * scale),
            theme.secondary,
            column_width.min(720.0 * scale),
        )
    });

    let gap = 24.0 * scale;
    let block_height = title_galley.rect.height()
        + subtitle_galley
            .as_ref()
            .map_or(0.0, |g| g.rect.height() + gap);
    let top = content_rect.center().y - block_height / 2.0;

    painter.line_segment(
        [
            Pos2::new(split, top - gap),
            Pos2::new(split, top + block_height + gap),
        ],
        Stroke::new(1.0, theme.border),
    );

    let mut y = top;
    let title_height = title_galley.rect.height();
    painter.galley(Pos2::new(column_left, y), title_galley, theme.foreground);
    y += title_height;

    if let Some(galley) = subtitle_galley {
        y += gap;
        painter.galley(Pos2::new(column_left, y), galley, theme.secondary);
    }

    rect.height()
}
