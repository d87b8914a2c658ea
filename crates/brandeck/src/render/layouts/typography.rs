use eframe::egui::{self, Pos2, Stroke};

use crate::render::text;
use crate::theme::Theme;

const SPECIMEN_QUOTE: &str = "\u{201C}Design is intelligence made visible.\u{201D}";

/// Specimen of the active font theme: glyph pair and name on the left,
/// quote and weight cards on the right.
pub fn render(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, scale: f32) -> f32 {
    let content_rect = super::content_rect(rect, scale);
    let painter = ui.painter();
    let gutter = 96.0 * scale;
    let half = (content_rect.width() - gutter) / 2.0;

    // Left column
    let glyph_galley = painter.layout_no_wrap(
        "Aa".to_string(),
        theme.display_font(theme.h1_size * 2.6 * scale),
        theme.foreground,
    );
    let name_font = theme.display_font(theme.h2_size * 0.75 * scale);
    let name_height = name_font.size * 1.3;
    let caption_height = theme.label_size * scale * 1.4;
    let column_height = glyph_galley.rect.height() + 32.0 * scale + name_height + 16.0 * scale + caption_height;
    let mut y = content_rect.center().y - column_height / 2.0;

    let glyph_height = glyph_galley.rect.height();
    painter.galley(Pos2::new(content_rect.left(), y), glyph_galley, theme.foreground);
    y += glyph_height + 32.0 * scale;

    let bar_x = content_rect.left() + 2.0 * scale;
    painter.line_segment(
        [
            Pos2::new(bar_x, y),
            Pos2::new(bar_x, y + name_height + 16.0 * scale + caption_height),
        ],
        Stroke::new(4.0 * scale, theme.accent),
    );
    let text_left = content_rect.left() + 32.0 * scale;
    text::draw_line(
        ui,
        &theme.title_text(theme.font.label()),
        Pos2::new(text_left, y),
        name_font,
        theme.foreground,
    );
    y += name_height + 16.0 * scale;
    text::draw_label(
        ui,
        "Primary Typeface",
        Pos2::new(text_left, y),
        theme,
        theme.secondary,
        scale,
    );

    // Right column
    let right_left = content_rect.left() + half + gutter;
    let quote_galley = painter.layout(
        SPECIMEN_QUOTE.to_string(),
        theme.display_font(theme.body_size * 1.2 * scale),
        theme.foreground,
        half,
    );
    let card_height = 140.0 * scale;
    let block_height = quote_galley.rect.height() + 64.0 * scale + card_height;
    let mut y = content_rect.center().y - block_height / 2.0;

    let quote_height = quote_galley.rect.height();
    painter.galley(Pos2::new(right_left, y), quote_galley, theme.foreground);
    y += quote_height + 64.0 * scale;

    let card_gap = 32.0 * scale;
    let card_width = (half - card_gap) / 2.0;
    let cards = [("Bold", "Headlines", 1.15), ("Light", "Body Copy", 0.9)];
    for (i, (word, role, weight)) in cards.iter().enumerate() {
        let card = egui::Rect::from_min_size(
            Pos2::new(right_left + (card_width + card_gap) * i as f32, y),
            egui::vec2(card_width, card_height),
        );
        painter.rect_filled(card, 12.0 * scale, Theme::with_opacity(theme.foreground, 0.05));
        painter.rect_stroke(
            card,
            12.0 * scale,
            Stroke::new(1.0, theme.border),
            egui::StrokeKind::Inside,
        );
        let inner = 24.0 * scale;
        let word_size = text::draw_line(
            ui,
            word,
            Pos2::new(card.left() + inner, card.top() + inner),
            theme.display_font(theme.body_size * weight * scale),
            theme.foreground,
        );
        text::draw_label(
            ui,
            role,
            Pos2::new(card.left() + inner, card.top() + inner + word_size.y + 8.0 * scale),
            theme,
            Theme::with_opacity(theme.foreground, 0.5),
            scale,
        );
    }

    rect.height()
}
