use eframe::egui::{self, Color32, FontId, Pos2};

use crate::theme::Theme;

/// Lay out and paint wrapped text, returning the height used.
pub fn draw_wrapped(
    ui: &egui::Ui,
    text: &str,
    pos: Pos2,
    font: FontId,
    color: Color32,
    max_width: f32,
) -> f32 {
    let galley = ui
        .painter()
        .layout(text.to_string(), font, color, max_width.max(1.0));
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Paint a single line, returning its size.
pub fn draw_line(ui: &egui::Ui, text: &str, pos: Pos2, font: FontId, color: Color32) -> egui::Vec2 {
    let galley = ui.painter().layout_no_wrap(text.to_string(), font, color);
    let size = galley.rect.size();
    ui.painter().galley(pos, galley, color);
    size
}

/// Paint a single line with its right edge at `right`.
pub fn draw_line_right(
    ui: &egui::Ui,
    text: &str,
    right: f32,
    top: f32,
    font: FontId,
    color: Color32,
) -> egui::Vec2 {
    let galley = ui.painter().layout_no_wrap(text.to_string(), font, color);
    let size = galley.rect.size();
    ui.painter()
        .galley(Pos2::new(right - size.x, top), galley, color);
    size
}

/// Small monospace uppercase caption, the deck's label style.
pub fn draw_label(
    ui: &egui::Ui,
    text: &str,
    pos: Pos2,
    theme: &Theme,
    color: Color32,
    scale: f32,
) -> egui::Vec2 {
    draw_line(
        ui,
        &spaced_caps(text),
        pos,
        theme.mono_font(theme.label_size * scale),
        color,
    )
}

/// Widen tracking by interleaving thin spaces; egui has no letter-spacing.
pub fn spaced_caps(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, ch) in text.to_uppercase().chars().enumerate() {
        if i > 0 && ch != ' ' {
            out.push('\u{2009}');
        }
        out.push(ch);
    }
    out
}

/// Zero-padded 1-based position, as shown in the counter.
pub fn padded(n: usize) -> String {
    format!("{n:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaced_caps() {
        assert_eq!(spaced_caps("ab"), "A\u{2009}B");
        assert_eq!(spaced_caps("a b"), "A \u{2009}B");
        assert_eq!(spaced_caps(""), "");
    }

    #[test]
    fn test_padded() {
        assert_eq!(padded(3), "03");
        assert_eq!(padded(18), "18");
        assert_eq!(padded(120), "120");
    }
}
