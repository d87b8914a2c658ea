use eframe::egui::{self, Color32, Pos2};

use crate::render::{draw_logo, text};
use crate::theme::Theme;

struct Swatch {
    name: &'static str,
    color: Color32,
    hex: String,
}

/// The four primary colors; the second follows the live accent.
fn swatches(theme: &Theme) -> [Swatch; 4] {
    let accent = theme.accent;
    [
        Swatch {
            name: "Obsidian",
            color: Color32::from_rgb(0x00, 0x00, 0x00),
            hex: "#000000".to_string(),
        },
        Swatch {
            name: "Accent",
            color: accent,
            hex: format!("#{:02X}{:02X}{:02X}", accent.r(), accent.g(), accent.b()),
        },
        Swatch {
            name: "Warm White",
            color: Color32::from_rgb(0xF7, 0xF5, 0xF2),
            hex: "#F7F5F2".to_string(),
        },
        Swatch {
            name: "Charcoal",
            color: Color32::from_rgb(0x1A, 0x1A, 0x1A),
            hex: "#1A1A1A".to_string(),
        },
    ]
}

/// Full-bleed vertical swatches, edge to edge.
pub fn render(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, scale: f32) -> f32 {
    let painter = ui.painter();
    let swatches = swatches(theme);
    let width = rect.width() / swatches.len() as f32;
    let inner = 48.0 * scale;

    for (i, swatch) in swatches.iter().enumerate() {
        let column = egui::Rect::from_min_size(
            Pos2::new(rect.left() + width * i as f32, rect.top()),
            egui::vec2(width, rect.height()),
        );
        painter.rect_filled(column, 0.0, swatch.color);

        let ink = Theme::contrast_on(swatch.color);
        let muted = Theme::with_opacity(ink, 0.6);

        text::draw_line(
            ui,
            &format!("0{}", i + 1),
            Pos2::new(column.left() + inner, column.top() + inner),
            theme.mono_font(theme.label_size * scale),
            muted,
        );
        draw_logo(
            painter,
            Pos2::new(column.right() - inner - 12.0 * scale, column.top() + inner + 12.0 * scale),
            24.0 * scale,
            Theme::with_opacity(ink, 0.4),
        );

        let hex_font = theme.mono_font(theme.label_size * scale);
        let name_font = theme.display_font(theme.h2_size * 0.7 * scale);
        let hex_height = painter
            .layout_no_wrap(swatch.hex.clone(), hex_font.clone(), muted)
            .rect
            .height();
        let hex_top = column.bottom() - inner - hex_height;
        text::draw_line(ui, &swatch.hex, Pos2::new(column.left() + inner, hex_top), hex_font, muted);

        let name_galley = painter.layout(
            swatch.name.to_uppercase(),
            name_font,
            ink,
            width - inner * 2.0,
        );
        let name_top = hex_top - 8.0 * scale - name_galley.rect.height();
        painter.galley(Pos2::new(column.left() + inner, name_top), name_galley, ink);
    }

    rect.height()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Accent, Appearance};

    #[test]
    fn test_accent_swatch_tracks_theme() {
        let theme = Appearance {
            accent: Accent::Orange,
            ..Default::default()
        }
        .theme();
        let swatches = swatches(&theme);
        assert_eq!(swatches[1].hex, Accent::Orange.hex());
        assert_eq!(swatches[1].color, Accent::Orange.color());
        assert_eq!(swatches[0].hex, "#000000");
    }
}
