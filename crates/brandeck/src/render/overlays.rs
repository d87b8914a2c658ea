use eframe::egui::{self, Color32, Pos2, Sense, Stroke};

use crate::catalog::{Catalog, Section};
use crate::deck::DeckEvent;
use crate::render::{chrome, draw_logo, draw_rule, text};
use crate::theme::Theme;

pub const PLAYLIST_URL: &str = "https://open.spotify.com/playlist/0ej4YNptsYtdPEYN5y4bvc";

const MENU_COLUMNS: usize = 4;

/// Full-screen sectioned index of the deck. Returns the event the user
/// triggered, if any: a jump to a slide or closing the menu.
pub fn draw_menu(
    ui: &egui::Ui,
    theme: &Theme,
    rect: egui::Rect,
    scale: f32,
    catalog: &Catalog,
    sections: &[Section],
    current: usize,
) -> Option<DeckEvent> {
    let s = scale.max(0.6);
    let painter = ui.painter();
    let mut event = None;

    // Swallow clicks that miss every entry
    ui.interact(rect, ui.id().with("menu-backdrop"), Sense::click());
    painter.rect_filled(rect, 0.0, theme.background);

    // Header
    let margin = 48.0 * s;
    let header_height = 112.0 * s;
    let mark = 40.0 * s;
    draw_logo(
        painter,
        Pos2::new(rect.left() + margin + mark / 2.0, rect.top() + header_height / 2.0),
        mark,
        theme.accent,
    );
    let title_left = rect.left() + margin + mark + 24.0 * s;
    let title = text::draw_line(
        ui,
        "OASTUDIO",
        Pos2::new(title_left, rect.top() + header_height / 2.0 - 22.0 * s),
        theme.display_font(26.0 * s),
        theme.foreground,
    );
    let subtitle = text::draw_label(
        ui,
        "System Navigator",
        Pos2::new(title_left, rect.top() + header_height / 2.0 - 22.0 * s + title.y + 2.0 * s),
        theme,
        Theme::with_opacity(theme.foreground, 0.6),
        s * 0.65,
    );
    let pulse = 0.5 + 0.5 * (ui.input(|i| i.time) as f32 * 3.0).sin();
    painter.circle_filled(
        Pos2::new(
            title_left + subtitle.x + 10.0 * s,
            rect.top() + header_height / 2.0 - 22.0 * s + title.y + 2.0 * s + subtitle.y / 2.0,
        ),
        3.0 * s,
        Theme::with_opacity(theme.accent, 0.4 + 0.6 * pulse),
    );
    ui.ctx().request_repaint();

    let close = egui::Rect::from_center_size(
        Pos2::new(rect.right() - margin - 24.0 * s, rect.top() + header_height / 2.0),
        egui::vec2(48.0 * s, 48.0 * s),
    );
    let close_response = ui.interact(close, ui.id().with("menu-close"), Sense::click());
    let close_ink = if close_response.hovered() {
        painter.circle_filled(close.center(), 24.0 * s, theme.accent);
        Theme::contrast_on(theme.accent)
    } else {
        painter.circle_stroke(
            close.center(),
            24.0 * s,
            Stroke::new(1.0, Theme::with_opacity(theme.foreground, 0.2)),
        );
        theme.foreground
    };
    let arm = 7.0 * s;
    let c = close.center();
    painter.line_segment(
        [c + egui::vec2(-arm, -arm), c + egui::vec2(arm, arm)],
        Stroke::new(1.8 * s, close_ink),
    );
    painter.line_segment(
        [c + egui::vec2(-arm, arm), c + egui::vec2(arm, -arm)],
        Stroke::new(1.8 * s, close_ink),
    );
    if close_response.clicked() {
        event = Some(DeckEvent::CloseMenu);
    }

    draw_rule(
        painter,
        rect.left(),
        rect.right(),
        rect.top() + header_height,
        theme.border,
    );

    // Section grid
    let grid_left = rect.left() + margin;
    let grid_width = rect.width() - margin * 2.0;
    let gap = 48.0 * s;
    let column_width = (grid_width - gap * (MENU_COLUMNS - 1) as f32) / MENU_COLUMNS as f32;
    let mut row_top = rect.top() + header_height + 40.0 * s;
    let item_height = 44.0 * s;

    for (row, chunk) in sections.chunks(MENU_COLUMNS).enumerate() {
        let mut row_bottom = row_top;
        for (col, section) in chunk.iter().enumerate() {
            let number = row * MENU_COLUMNS + col + 1;
            let x = grid_left + (column_width + gap) * col as f32;
            let mut y = row_top;

            let heading = text::draw_line(
                ui,
                &section.title.to_uppercase(),
                Pos2::new(x, y),
                theme.display_font(20.0 * s),
                theme.foreground,
            );
            text::draw_line_right(
                ui,
                &format!("0{number}"),
                x + column_width,
                y + 4.0 * s,
                theme.mono_font(12.0 * s),
                theme.accent,
            );
            y += heading.y + 8.0 * s;
            painter.line_segment(
                [Pos2::new(x, y), Pos2::new(x + column_width, y)],
                Stroke::new(2.0 * s, theme.border),
            );
            y += 12.0 * s;

            for &index in &section.slides {
                let Some(slide) = catalog.get(index) else {
                    continue;
                };
                let item = egui::Rect::from_min_size(Pos2::new(x, y), egui::vec2(column_width, item_height));
                let response = ui.interact(item, ui.id().with(("menu-item", index)), Sense::click());
                let active = index == current;
                let lit = active || response.hovered();
                let opacity = if lit { 1.0 } else { 0.4 };
                let indent = if response.hovered() { 24.0 * s } else { 12.0 * s };

                let bar = if lit {
                    egui::Rect::from_min_size(item.left_top(), egui::vec2(3.0 * s, item_height - 6.0 * s))
                } else {
                    egui::Rect::from_center_size(
                        Pos2::new(item.left() + 1.5 * s, item.center().y),
                        egui::vec2(3.0 * s, 3.0 * s),
                    )
                };
                painter.rect_filled(bar, 1.5 * s, theme.accent);

                let ink = Theme::with_opacity(theme.foreground, opacity);
                let title = text::draw_line(
                    ui,
                    &slide.title,
                    Pos2::new(item.left() + indent, item.top()),
                    theme.display_font(18.0 * s),
                    ink,
                );
                if let Some(subtitle) = &slide.subtitle {
                    text::draw_line(
                        ui,
                        &text::spaced_caps(subtitle),
                        Pos2::new(item.left() + indent, item.top() + title.y + 2.0 * s),
                        theme.mono_font(9.0 * s),
                        Theme::with_opacity(theme.foreground, opacity * 0.6),
                    );
                }

                if response.clicked() {
                    event = Some(DeckEvent::JumpTo(index as i64));
                }
                y += item_height + 4.0 * s;
            }

            row_bottom = row_bottom.max(y);
        }
        row_top = row_bottom + gap;
    }

    // Footer
    let footer_y = rect.bottom() - 40.0 * s;
    draw_rule(painter, rect.left(), rect.right(), footer_y - 16.0 * s, theme.border);
    let footer_color = Theme::with_opacity(theme.foreground, 0.4);
    text::draw_line(
        ui,
        &text::spaced_caps("Use arrow keys or drag the slider"),
        Pos2::new(rect.left() + margin, footer_y),
        theme.mono_font(9.0 * s),
        footer_color,
    );
    text::draw_line_right(
        ui,
        &text::spaced_caps("Esc to close"),
        rect.right() - margin,
        footer_y,
        theme.mono_font(9.0 * s),
        footer_color,
    );

    event
}

/// The "Soundscape" window. Only drawn while the player is visible; a
/// minimized player keeps playing with nothing on screen.
pub fn draw_music_panel(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, scale: f32) -> Option<DeckEvent> {
    let s = scale.max(0.6);
    let painter = ui.painter();
    let mut event = None;

    let size = egui::vec2(350.0 * s, 176.0 * s);
    let panel = egui::Rect::from_min_size(
        Pos2::new(rect.right() - 16.0 * s - size.x, rect.bottom() - 96.0 * s - size.y),
        size,
    );
    ui.interact(panel, ui.id().with("music-panel"), Sense::click());
    painter.rect_filled(panel, 16.0 * s, theme.panel);
    painter.rect_stroke(panel, 16.0 * s, Stroke::new(1.0, theme.border), egui::StrokeKind::Inside);

    // Title bar
    let bar_height = 40.0 * s;
    let time = ui.input(|i| i.time);
    let pulse = 0.5 + 0.5 * (time as f32 * 3.0).sin();
    let title_y = panel.top() + bar_height / 2.0;
    painter.circle_filled(
        Pos2::new(panel.left() + 18.0 * s, title_y),
        3.0 * s,
        Theme::with_opacity(theme.accent, 0.4 + 0.6 * pulse),
    );
    painter.text(
        Pos2::new(panel.left() + 30.0 * s, title_y),
        egui::Align2::LEFT_CENTER,
        text::spaced_caps("Soundscape"),
        theme.mono_font(10.0 * s),
        Theme::with_opacity(theme.foreground, 0.7),
    );

    let button = 26.0 * s;
    let power = egui::Rect::from_center_size(
        Pos2::new(panel.right() - 12.0 * s - button / 2.0, title_y),
        egui::vec2(button, button),
    );
    let minimize = power.translate(egui::vec2(-button - 4.0 * s, 0.0));

    let minimize_response = ui
        .interact(minimize, ui.id().with("music-minimize"), Sense::click())
        .on_hover_text("Minimize (keep playing)");
    if minimize_response.hovered() {
        painter.circle_filled(minimize.center(), button / 2.0, Theme::with_opacity(theme.foreground, 0.1));
    }
    painter.line_segment(
        [
            minimize.center() + egui::vec2(-5.0 * s, 0.0),
            minimize.center() + egui::vec2(5.0 * s, 0.0),
        ],
        Stroke::new(1.5 * s, theme.foreground),
    );
    if minimize_response.clicked() {
        event = Some(DeckEvent::MinimizeMusic);
    }

    let power_response = ui
        .interact(power, ui.id().with("music-power"), Sense::click())
        .on_hover_text("Power off");
    let danger = Color32::from_rgb(0xEF, 0x44, 0x44);
    let power_ink = if power_response.hovered() {
        painter.circle_filled(power.center(), button / 2.0, Theme::with_opacity(danger, 0.2));
        danger
    } else {
        theme.foreground
    };
    painter.circle_stroke(power.center(), 5.0 * s, Stroke::new(1.5 * s, power_ink));
    painter.line_segment(
        [
            power.center() + egui::vec2(0.0, -7.0 * s),
            power.center() + egui::vec2(0.0, -1.0 * s),
        ],
        Stroke::new(1.5 * s, power_ink),
    );
    if power_response.clicked() {
        event = Some(DeckEvent::StopMusic);
    }

    draw_rule(
        painter,
        panel.left(),
        panel.right(),
        panel.top() + bar_height,
        theme.border,
    );

    // Body: live waveform and a link to the playlist
    let body = egui::Rect::from_min_max(
        Pos2::new(panel.left(), panel.top() + bar_height),
        panel.max,
    );
    let wave = egui::Rect::from_center_size(
        Pos2::new(body.center().x, body.top() + body.height() * 0.4),
        egui::vec2(body.width() * 0.5, 40.0 * s),
    );
    for i in 0..5 {
        let slot = egui::Rect::from_min_size(
            Pos2::new(wave.left() + wave.width() * i as f32 / 5.0, wave.top()),
            egui::vec2(wave.width() / 5.0, wave.height()),
        );
        chrome::draw_waveform(painter, slot, theme.accent, s, time + i as f64 * 0.4);
    }

    let link = egui::Rect::from_center_size(
        Pos2::new(body.center().x, body.bottom() - 32.0 * s),
        egui::vec2(body.width() - 32.0 * s, 24.0 * s),
    );
    let link_response = ui.interact(link, ui.id().with("music-link"), Sense::click());
    let link_color = if link_response.hovered() {
        theme.accent
    } else {
        Theme::with_opacity(theme.foreground, 0.6)
    };
    painter.text(
        link.center(),
        egui::Align2::CENTER_CENTER,
        text::spaced_caps("Open playlist"),
        theme.mono_font(11.0 * s),
        link_color,
    );
    if link_response.clicked() {
        ui.ctx().open_url(egui::OpenUrl::new_tab(PLAYLIST_URL));
    }

    ui.ctx().request_repaint();
    event
}

/// Accent strip across the top when no AI key is configured. Returns its height.
pub fn draw_api_key_banner(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, scale: f32) -> f32 {
    let s = scale.max(0.6);
    let height = 32.0 * s;
    let strip = egui::Rect::from_min_size(rect.left_top(), egui::vec2(rect.width(), height));
    ui.painter().rect_filled(strip, 0.0, theme.accent);
    ui.painter().text(
        strip.center(),
        egui::Align2::CENTER_CENTER,
        "API_KEY missing. Run `brandeck ai init` to enable AI Studio.",
        theme.mono_font(12.0 * s),
        Theme::contrast_on(theme.accent),
    );
    height
}
