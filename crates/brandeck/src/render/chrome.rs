use eframe::egui::{self, Color32, Pos2, Sense, Stroke};

use crate::deck::{DeckEvent, MusicState};
use crate::render::text;
use crate::theme::{Accent, Appearance, Theme, ThemeMode};

/// What the user asked for through the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChromeAction {
    Deck(DeckEvent),
    ToggleStudio,
}

/// Snapshot of everything the bar displays.
pub struct ChromeState {
    pub current: usize,
    pub count: usize,
    pub appearance: Appearance,
    pub music: MusicState,
    pub studio_open: bool,
}

impl ChromeState {
    fn last(&self) -> usize {
        self.count.saturating_sub(1)
    }
}

const BUTTON: f32 = 40.0;
const SMALL_BUTTON: f32 = 32.0;
const SLIDER_WIDTH: f32 = 192.0;
const GAP: f32 = 8.0;

/// Map a pointer x onto a slide index over `0..=last`.
pub fn slider_value(x: f32, left: f32, width: f32, last: usize) -> i64 {
    if width <= 0.0 || last == 0 {
        return 0;
    }
    let t = ((x - left) / width).clamp(0.0, 1.0);
    (t * last as f32).round() as i64
}

/// Floating pill at the bottom center: menu, prev, slider with counter,
/// next, accent dots, font, theme, music and studio toggles.
pub fn draw_nav_bar(
    ui: &egui::Ui,
    theme: &Theme,
    rect: egui::Rect,
    scale: f32,
    state: &ChromeState,
) -> Vec<ChromeAction> {
    let s = scale.max(0.6);
    let mut actions = Vec::new();

    let dots_width = Accent::all().len() as f32 * 20.0 * s;
    let width = BUTTON * 3.0 * s
        + SLIDER_WIDTH * s
        + dots_width
        + SMALL_BUTTON * 4.0 * s
        + GAP * 14.0 * s;
    let height = 56.0 * s;
    let bar = egui::Rect::from_center_size(
        Pos2::new(rect.center().x, rect.bottom() - 24.0 * s - height / 2.0),
        egui::vec2(width, height),
    );

    let painter = ui.painter();
    painter.rect_filled(bar, height / 2.0, theme.panel);
    painter.rect_stroke(bar, height / 2.0, Stroke::new(1.0, theme.border), egui::StrokeKind::Inside);

    let cy = bar.center().y;
    let mut x = bar.left() + GAP * 2.0 * s;

    let mut slot = |size: f32| {
        let r = egui::Rect::from_min_size(Pos2::new(x, cy - size / 2.0), egui::vec2(size, size));
        x += size + GAP * s;
        r
    };

    // Menu
    let r = slot(BUTTON * s);
    if icon_button(ui, r, "nav-menu", true, theme, |p, r, c| draw_menu_icon(p, r, c, s)) {
        actions.push(ChromeAction::Deck(DeckEvent::OpenMenu));
    }

    let sep = slot(1.0);
    draw_separator(ui.painter(), sep, theme, s);

    // Prev
    let r = slot(BUTTON * s);
    let can_prev = state.current > 0;
    if icon_button(ui, r, "nav-prev", can_prev, theme, |p, r, c| draw_chevron(p, r, c, s, -1.0)) {
        actions.push(ChromeAction::Deck(DeckEvent::Seek(state.current as i64 - 1)));
    }

    // Slider with counter
    let slider = slot(SLIDER_WIDTH * s);
    let slider = egui::Rect::from_center_size(slider.center(), egui::vec2(SLIDER_WIDTH * s, height * 0.7));
    if let Some(target) = draw_slider(ui, slider, theme, s, state) {
        actions.push(ChromeAction::Deck(DeckEvent::Seek(target)));
    }

    // Next
    let r = slot(BUTTON * s);
    let can_next = state.current < state.last();
    if icon_button(ui, r, "nav-next", can_next, theme, |p, r, c| draw_chevron(p, r, c, s, 1.0)) {
        actions.push(ChromeAction::Deck(DeckEvent::Seek(state.current as i64 + 1)));
    }

    let sep = slot(1.0);
    draw_separator(ui.painter(), sep, theme, s);

    // Accent dots
    for accent in Accent::all() {
        let r = slot(12.0 * s);
        let selected = *accent == state.appearance.accent;
        let response = ui.interact(r, ui.id().with(("nav-accent", accent.name())), Sense::click());
        let radius = if selected || response.hovered() { 7.5 * s } else { 6.0 * s };
        let fill = if selected || response.hovered() {
            accent.color()
        } else {
            Theme::with_opacity(accent.color(), 0.3)
        };
        ui.painter().circle_filled(r.center(), radius, fill);
        if selected {
            ui.painter()
                .circle_stroke(r.center(), radius + 1.5 * s, Stroke::new(1.0, theme.foreground));
        }
        if response.on_hover_text(accent.label()).clicked() {
            actions.push(ChromeAction::Deck(DeckEvent::SelectAccent(*accent)));
        }
    }

    // Font
    let r = slot(SMALL_BUTTON * s);
    if icon_button(ui, r, "nav-font", true, theme, |p, r, c| {
        p.text(r.center(), egui::Align2::CENTER_CENTER, "Tt", theme.display_font(15.0 * s), c);
    }) {
        actions.push(ChromeAction::Deck(DeckEvent::CycleFont));
    }

    // Theme
    let r = slot(SMALL_BUTTON * s);
    let dark = state.appearance.mode == ThemeMode::Dark;
    if icon_button(ui, r, "nav-theme", true, theme, |p, r, c| {
        let bite = if c == theme.background { theme.foreground } else { theme.background };
        draw_theme_icon(p, r, c, bite, s, dark);
    }) {
        actions.push(ChromeAction::Deck(DeckEvent::ToggleTheme));
    }

    // Music
    let r = slot(SMALL_BUTTON * s);
    let music = state.music;
    let wave_color = if music.is_visible() { theme.accent } else { theme.foreground };
    let time = ui.input(|i| i.time);
    if icon_button(ui, r, "nav-music", true, theme, |p, r, c| {
        if music.is_active() {
            draw_waveform(p, r, wave_color, s, time);
        } else {
            draw_play_icon(p, r, c, s);
        }
    }) {
        actions.push(ChromeAction::Deck(DeckEvent::ToggleMusic));
    }
    if music.is_active() {
        ui.ctx().request_repaint();
    }

    // AI studio
    let r = slot(SMALL_BUTTON * s);
    let studio_color = if state.studio_open { theme.accent } else { theme.foreground };
    if icon_button(ui, r, "nav-studio", true, theme, |p, r, _| {
        p.text(r.center(), egui::Align2::CENTER_CENTER, "AI", theme.mono_font(12.0 * s), studio_color);
    }) {
        actions.push(ChromeAction::ToggleStudio);
    }

    actions
}

/// Round button with hover fill. Disabled buttons draw faded and never click.
fn icon_button(
    ui: &egui::Ui,
    r: egui::Rect,
    id: &str,
    enabled: bool,
    theme: &Theme,
    icon: impl FnOnce(&egui::Painter, egui::Rect, Color32),
) -> bool {
    let sense = if enabled { Sense::click() } else { Sense::hover() };
    let response = ui.interact(r, ui.id().with(id), sense);

    let color = if !enabled {
        Theme::with_opacity(theme.foreground, 0.2)
    } else if response.hovered() {
        ui.painter()
            .circle_filled(r.center(), r.width() / 2.0, theme.foreground);
        theme.background
    } else {
        theme.foreground
    };
    icon(ui.painter(), r, color);

    enabled && response.clicked()
}

fn draw_slider(
    ui: &egui::Ui,
    slider: egui::Rect,
    theme: &Theme,
    s: f32,
    state: &ChromeState,
) -> Option<i64> {
    let painter = ui.painter();
    let label_font = theme.mono_font(10.0 * s);
    let label_color = Theme::with_opacity(theme.foreground, 0.5);
    text::draw_line(
        ui,
        &text::padded(state.current + 1),
        slider.left_top(),
        label_font.clone(),
        label_color,
    );
    text::draw_line_right(
        ui,
        &text::padded(state.count),
        slider.right(),
        slider.top(),
        label_font,
        label_color,
    );

    let track_y = slider.bottom() - 8.0 * s;
    let track = egui::Rect::from_min_max(
        Pos2::new(slider.left(), track_y - 8.0 * s),
        Pos2::new(slider.right(), track_y + 8.0 * s),
    );
    painter.line_segment(
        [Pos2::new(track.left(), track_y), Pos2::new(track.right(), track_y)],
        Stroke::new(2.0 * s, Theme::with_opacity(theme.accent, 0.2)),
    );

    let last = state.last();
    let t = if last == 0 { 0.0 } else { state.current as f32 / last as f32 };
    let thumb_x = track.left() + t * track.width();
    painter.line_segment(
        [Pos2::new(track.left(), track_y), Pos2::new(thumb_x, track_y)],
        Stroke::new(2.0 * s, theme.accent),
    );
    painter.circle_filled(Pos2::new(thumb_x, track_y), 6.0 * s, theme.accent);

    let response = ui.interact(track, ui.id().with("nav-slider"), Sense::click_and_drag());
    if response.clicked() || response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            let target = slider_value(pos.x, track.left(), track.width(), last);
            if target != state.current as i64 {
                return Some(target);
            }
        }
    }
    None
}

fn draw_separator(painter: &egui::Painter, r: egui::Rect, theme: &Theme, s: f32) {
    painter.line_segment(
        [
            Pos2::new(r.center().x, r.center().y - 12.0 * s),
            Pos2::new(r.center().x, r.center().y + 12.0 * s),
        ],
        Stroke::new(1.0, theme.border),
    );
}

fn draw_menu_icon(painter: &egui::Painter, r: egui::Rect, color: Color32, s: f32) {
    let half = 8.0 * s;
    let stroke = Stroke::new(1.6 * s, color);
    for dy in [-5.0, 0.0, 5.0] {
        let y = r.center().y + dy * s;
        painter.line_segment(
            [Pos2::new(r.center().x - half, y), Pos2::new(r.center().x + half, y)],
            stroke,
        );
    }
}

/// `direction` is -1 for left, +1 for right.
fn draw_chevron(painter: &egui::Painter, r: egui::Rect, color: Color32, s: f32, direction: f32) {
    let c = r.center();
    let w = 4.0 * s * direction;
    let h = 7.0 * s;
    painter.add(egui::Shape::line(
        vec![
            Pos2::new(c.x - w, c.y - h),
            Pos2::new(c.x + w, c.y),
            Pos2::new(c.x - w, c.y + h),
        ],
        Stroke::new(2.0 * s, color),
    ));
}

fn draw_theme_icon(
    painter: &egui::Painter,
    r: egui::Rect,
    color: Color32,
    bite: Color32,
    s: f32,
    dark: bool,
) {
    let c = r.center();
    if dark {
        // Sun: offers the light theme
        painter.circle_stroke(c, 4.0 * s, Stroke::new(1.5 * s, color));
        for i in 0..8 {
            let angle = i as f32 * std::f32::consts::TAU / 8.0;
            let dir = egui::vec2(angle.cos(), angle.sin());
            painter.line_segment([c + dir * 6.5 * s, c + dir * 8.5 * s], Stroke::new(1.5 * s, color));
        }
    } else {
        // Moon: a disc with a bite taken out
        painter.circle_filled(c, 7.0 * s, color);
        painter.circle_filled(c + egui::vec2(3.5, -3.0) * s, 5.5 * s, bite);
    }
}

fn draw_play_icon(painter: &egui::Painter, r: egui::Rect, color: Color32, s: f32) {
    let c = r.center();
    painter.add(egui::Shape::convex_polygon(
        vec![
            Pos2::new(c.x - 4.0 * s, c.y - 6.0 * s),
            Pos2::new(c.x + 6.0 * s, c.y),
            Pos2::new(c.x - 4.0 * s, c.y + 6.0 * s),
        ],
        color,
        Stroke::NONE,
    ));
}

/// Five bars pulsing out of phase.
pub fn draw_waveform(painter: &egui::Painter, r: egui::Rect, color: Color32, s: f32, time: f64) {
    let c = r.center();
    for i in 0..5 {
        let phase = time as f32 * 6.0 + i as f32 * 1.3;
        let h = (3.0 + 4.0 * (0.5 + 0.5 * phase.sin())) * s;
        let x = c.x + (i as f32 - 2.0) * 3.5 * s;
        painter.line_segment(
            [Pos2::new(x, c.y - h), Pos2::new(x, c.y + h)],
            Stroke::new(1.8 * s, color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_value_endpoints() {
        assert_eq!(slider_value(100.0, 100.0, 200.0, 17), 0);
        assert_eq!(slider_value(300.0, 100.0, 200.0, 17), 17);
        assert_eq!(slider_value(200.0, 100.0, 200.0, 16), 8);
    }

    #[test]
    fn test_slider_value_clamps_outside_track() {
        assert_eq!(slider_value(-50.0, 100.0, 200.0, 17), 0);
        assert_eq!(slider_value(900.0, 100.0, 200.0, 17), 17);
    }

    #[test]
    fn test_slider_value_degenerate() {
        assert_eq!(slider_value(150.0, 100.0, 0.0, 17), 0);
        assert_eq!(slider_value(150.0, 100.0, 200.0, 0), 0);
    }

    #[test]
    fn test_last_index() {
        let state = ChromeState {
            current: 0,
            count: 18,
            appearance: Appearance::default(),
            music: MusicState::Off,
            studio_open: false,
        };
        assert_eq!(state.last(), 17);
    }
}
