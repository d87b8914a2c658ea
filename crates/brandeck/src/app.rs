use eframe::egui;
use std::time::Instant;

use crate::ai::GeminiClient;
use crate::ai::studio::AiStudio;
use crate::catalog::{Catalog, Section};
use crate::config::Config;
use crate::deck::{
    DeckEvent, Dispatch, NavKey, NavOutcome, ScrollRegion, Session, SessionOptions, Shortcut,
};
use crate::render::{self, chrome, overlays};
use crate::theme::{Theme, ThemeMode};

/// Pixels per wheel "line" for devices that report in lines.
const WHEEL_LINE_PX: f32 = 40.0;
/// Distance scrolled by Page Up / Page Down.
const KEY_SCROLL_PX: f32 = 120.0;

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    const DURATION: f32 = 2.5;
    const FADE_START: f32 = 2.0;

    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        if elapsed < Self::FADE_START {
            1.0
        } else if elapsed < Self::DURATION {
            1.0 - (elapsed - Self::FADE_START) / (Self::DURATION - Self::FADE_START)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= Self::DURATION
    }
}

/// Keys the viewer reacts to, before arbitration.
#[derive(Debug, Clone, Copy, PartialEq)]
enum KeyAction {
    Deck(DeckEvent),
    /// Scroll the slide's own content by this many pixels
    Scroll(f32),
    Quit,
    Fullscreen,
    Studio,
}

impl KeyAction {
    /// Whether OS key-repeat should fire this action again while the key is held.
    /// Stepping and scrolling repeat; toggles fire once per press.
    fn repeats(&self) -> bool {
        matches!(
            self,
            Self::Deck(DeckEvent::Key(NavKey::Next | NavKey::Previous))
                | Self::Deck(DeckEvent::Shortcut(Shortcut::First | Shortcut::Last))
                | Self::Scroll(_)
        )
    }
}

fn map_key(key: egui::Key) -> Option<KeyAction> {
    use egui::Key;
    let action = match key {
        Key::ArrowRight | Key::ArrowDown | Key::Space => {
            KeyAction::Deck(DeckEvent::Key(NavKey::Next))
        }
        Key::ArrowLeft | Key::ArrowUp => KeyAction::Deck(DeckEvent::Key(NavKey::Previous)),
        Key::Escape => KeyAction::Deck(DeckEvent::Key(NavKey::Cancel)),
        Key::PageDown => KeyAction::Scroll(KEY_SCROLL_PX),
        Key::PageUp => KeyAction::Scroll(-KEY_SCROLL_PX),
        Key::M => KeyAction::Deck(DeckEvent::Shortcut(Shortcut::OpenMenu)),
        Key::D => KeyAction::Deck(DeckEvent::Shortcut(Shortcut::ToggleTheme)),
        Key::A => KeyAction::Deck(DeckEvent::Shortcut(Shortcut::CycleAccent)),
        Key::T => KeyAction::Deck(DeckEvent::Shortcut(Shortcut::CycleFont)),
        Key::P => KeyAction::Deck(DeckEvent::Shortcut(Shortcut::ToggleMusic)),
        Key::Home => KeyAction::Deck(DeckEvent::Shortcut(Shortcut::First)),
        Key::End => KeyAction::Deck(DeckEvent::Shortcut(Shortcut::Last)),
        Key::Q => KeyAction::Quit,
        Key::F => KeyAction::Fullscreen,
        Key::I => KeyAction::Studio,
        _ => return None,
    };
    Some(action)
}

/// Convert a wheel delta into downward-positive pixels.
fn wheel_delta_y(unit: egui::MouseWheelUnit, delta: egui::Vec2, page_height: f32) -> f32 {
    let dy = -delta.y;
    match unit {
        egui::MouseWheelUnit::Point => dy,
        egui::MouseWheelUnit::Line => dy * WHEEL_LINE_PX,
        egui::MouseWheelUnit::Page => dy * page_height,
    }
}

/// Translate raw platform events into deck events, in arrival order.
fn collect_pointer_events(events: &[egui::Event], page_height: f32, now: Instant) -> Vec<DeckEvent> {
    let mut out = Vec::new();
    for event in events {
        match event {
            egui::Event::MouseWheel { unit, delta, .. } => {
                let delta_y = wheel_delta_y(*unit, *delta, page_height);
                if delta_y != 0.0 {
                    out.push(DeckEvent::Wheel { delta_y, at: now });
                }
            }
            egui::Event::Touch { phase, pos, .. } => match phase {
                egui::TouchPhase::Start => out.push(DeckEvent::TouchStart { y: Some(pos.y) }),
                egui::TouchPhase::End => out.push(DeckEvent::TouchEnd { y: Some(pos.y) }),
                egui::TouchPhase::Cancel => out.push(DeckEvent::TouchEnd { y: None }),
                egui::TouchPhase::Move => {}
            },
            _ => {}
        }
    }
    out
}

struct DeckApp {
    session: Session,
    sections: Vec<Section>,
    studio: AiStudio,
    toast: Option<Toast>,
    scroll_offsets: Vec<f32>,
    scroll_targets: Vec<f32>,
    /// Content height per slide as measured by the last render
    content_heights: Vec<f32>,
    viewport_height: f32,
    applied_mode: Option<ThemeMode>,
}

impl DeckApp {
    fn new(session: Session, studio: AiStudio) -> Self {
        let sections = session.catalog().sections();
        let count = session.slide_count();
        Self {
            session,
            sections,
            studio,
            toast: None,
            scroll_offsets: vec![0.0; count],
            scroll_targets: vec![0.0; count],
            content_heights: vec![0.0; count],
            viewport_height: 0.0,
            applied_mode: None,
        }
    }

    /// Current slide's scroll geometry from the last frame, if it overflows.
    fn scroll_region(&self) -> Option<ScrollRegion> {
        let idx = self.session.current_index();
        let height = self.content_heights.get(idx).copied().unwrap_or(0.0);
        if self.viewport_height <= 0.0 || height <= self.viewport_height {
            return None;
        }
        Some(ScrollRegion {
            top: self.scroll_targets[idx],
            height,
            viewport: self.viewport_height,
        })
    }

    fn dispatch(&mut self, event: DeckEvent) -> Dispatch {
        let probe = self.scroll_region();
        let result = self.session.dispatch(event, &probe);
        match result {
            Dispatch::Navigated(NavOutcome::Moved { to, .. }) => {
                self.scroll_offsets[to] = 0.0;
                self.scroll_targets[to] = 0.0;
            }
            Dispatch::NativeScroll => {
                if let DeckEvent::Wheel { delta_y, .. } = event {
                    self.scroll_by(delta_y);
                }
            }
            _ => {}
        }
        result
    }

    fn scroll_by(&mut self, delta: f32) {
        let idx = self.session.current_index();
        let max = (self.content_heights[idx] - self.viewport_height).max(0.0);
        self.scroll_targets[idx] = (self.scroll_targets[idx] + delta).clamp(0.0, max);
    }

    fn handle_keys(&mut self, ctx: &egui::Context, viewport_cmds: &mut Vec<egui::ViewportCommand>) {
        // Typing into the studio must not drive the deck
        if ctx.wants_keyboard_input() {
            return;
        }

        let (pressed, fullscreen): (Vec<(egui::Key, bool)>, bool) = ctx.input(|i| {
            let keys = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat,
                        ..
                    } => Some((*key, *repeat)),
                    _ => None,
                })
                .collect();
            (keys, i.viewport().fullscreen.unwrap_or(false))
        });

        for (key, repeat) in pressed {
            let Some(action) = map_key(key) else {
                continue;
            };
            if repeat && !action.repeats() {
                continue;
            }
            let menu_open = self.session.menu_open();
            match action {
                KeyAction::Deck(event) => {
                    let result = self.dispatch(event);
                    if event == DeckEvent::Key(NavKey::Cancel)
                        && result == Dispatch::Ignored
                        && self.studio.open
                    {
                        self.studio.open = false;
                    }
                }
                KeyAction::Scroll(delta) if !menu_open => self.scroll_by(delta),
                KeyAction::Quit if !menu_open => viewport_cmds.push(egui::ViewportCommand::Close),
                KeyAction::Fullscreen if !menu_open => {
                    viewport_cmds.push(egui::ViewportCommand::Fullscreen(!fullscreen));
                }
                KeyAction::Studio if !menu_open => self.studio.toggle(),
                _ => tracing::trace!(?key, "key ignored while menu is open"),
            }
        }
    }

    fn handle_pointer(&mut self, ctx: &egui::Context) {
        let over_window = ctx
            .pointer_latest_pos()
            .and_then(|pos| ctx.layer_id_at(pos))
            .is_some_and(|layer| layer.order != egui::Order::Background);

        let page_height = self.viewport_height.max(1.0);
        let events = ctx.input(|i| collect_pointer_events(&i.events, page_height, Instant::now()));

        for event in events {
            // The studio window scrolls itself
            if over_window && matches!(event, DeckEvent::Wheel { .. }) {
                continue;
            }
            self.dispatch(event);
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context, theme: &Theme) {
        if self.applied_mode == Some(theme.mode) {
            return;
        }
        let mut visuals = if theme.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.selection.bg_fill = Theme::with_opacity(theme.accent, 0.6);
        ctx.set_visuals(visuals);
        self.applied_mode = Some(theme.mode);
    }

    fn draw_slide_with_scroll(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, rect: egui::Rect, scale: f32) {
        let idx = self.session.current_index();
        let Some(slide) = self.session.catalog().get(idx) else {
            return;
        };
        let theme = self.session.theme();
        self.viewport_height = rect.height();

        let overflow = (self.content_heights[idx] - rect.height()).max(0.0);
        self.scroll_targets[idx] = self.scroll_targets[idx].clamp(0.0, overflow);

        // Ease toward the target
        let target = self.scroll_targets[idx];
        let current = self.scroll_offsets[idx];
        let diff = target - current;
        if diff.abs() < 0.5 {
            self.scroll_offsets[idx] = target;
        } else {
            self.scroll_offsets[idx] = current + diff * 0.2;
            ctx.request_repaint();
        }
        let offset = self.scroll_offsets[idx];

        let scrolled_rect = rect.translate(egui::vec2(0.0, -offset));
        let child = ui.new_child(egui::UiBuilder::new().max_rect(rect).id_salt("slide_clip"));
        let height = render::render_slide(&child, slide, &theme, scrolled_rect, scale);
        if (height - self.content_heights[idx]).abs() > 0.5 {
            self.content_heights[idx] = height;
            ctx.request_repaint();
        }

        if overflow > 0.0 {
            draw_scroll_hints(ui, &theme, rect, scale, offset, overflow);
        }
    }

    fn draw_toast(&self, ui: &egui::Ui, ctx: &egui::Context, theme: &Theme, rect: egui::Rect, scale: f32) {
        let Some(ref toast) = self.toast else {
            return;
        };
        let opacity = toast.opacity();
        if opacity <= 0.0 {
            return;
        }
        let s = scale.max(0.6);
        let toast_color = Theme::with_opacity(theme.foreground, opacity * 0.9);
        let toast_bg = Theme::with_opacity(theme.panel, opacity);
        let galley = ui.painter().layout_no_wrap(
            toast.message.clone(),
            egui::FontId::proportional(18.0 * s),
            toast_color,
        );
        let padding = 16.0 * s;
        let toast_rect = egui::Rect::from_min_size(
            egui::pos2(
                rect.center().x - galley.rect.width() / 2.0 - padding,
                rect.top() + 56.0 * s,
            ),
            egui::vec2(
                galley.rect.width() + padding * 2.0,
                galley.rect.height() + padding * 2.0,
            ),
        );
        ui.painter().rect_filled(toast_rect, 8.0 * s, toast_bg);
        ui.painter().rect_stroke(
            toast_rect,
            8.0 * s,
            egui::Stroke::new(1.0, Theme::with_opacity(theme.accent, opacity)),
            egui::StrokeKind::Inside,
        );
        let text_pos = egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding);
        ui.painter().galley(text_pos, galley, toast_color);
        ctx.request_repaint();
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Collect viewport commands to send after the input closures
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();

        self.handle_keys(ctx, &mut viewport_cmds);
        self.handle_pointer(ctx);

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        for notice in self.studio.poll(ctx) {
            self.toast = Some(Toast::new(notice));
        }
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        let theme = self.session.theme();
        self.apply_visuals(ctx, &theme);
        let bg = theme.background;

        let mut deck_events: Vec<DeckEvent> = Vec::new();
        let mut toggle_studio = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);
                let scale = render::compute_scale(rect);

                self.draw_slide_with_scroll(ui, ctx, rect, scale);

                if !self.studio.has_key() {
                    overlays::draw_api_key_banner(ui, &theme, rect, scale);
                }

                if self.session.menu_open() {
                    if let Some(event) = overlays::draw_menu(
                        ui,
                        &theme,
                        rect,
                        scale,
                        self.session.catalog(),
                        &self.sections,
                        self.session.current_index(),
                    ) {
                        deck_events.push(event);
                    }
                } else {
                    let state = chrome::ChromeState {
                        current: self.session.current_index(),
                        count: self.session.slide_count(),
                        appearance: self.session.appearance(),
                        music: self.session.music(),
                        studio_open: self.studio.open,
                    };
                    for action in chrome::draw_nav_bar(ui, &theme, rect, scale, &state) {
                        match action {
                            chrome::ChromeAction::Deck(event) => deck_events.push(event),
                            chrome::ChromeAction::ToggleStudio => toggle_studio = true,
                        }
                    }
                }

                if self.session.player_visible() {
                    if let Some(event) = overlays::draw_music_panel(ui, &theme, rect, scale) {
                        deck_events.push(event);
                    }
                }

                self.draw_toast(ui, ctx, &theme, rect, scale);
            });

        for event in deck_events {
            self.dispatch(event);
        }
        if toggle_studio {
            self.studio.toggle();
        }

        for notice in self.studio.show(ctx, &theme) {
            self.toast = Some(Toast::new(notice));
        }
        if self.studio.is_busy() {
            ctx.request_repaint();
        }
    }
}

fn draw_scroll_hints(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, scale: f32, offset: f32, overflow: f32) {
    let color = Theme::with_opacity(theme.foreground, 0.35);
    let font = egui::FontId::proportional(theme.body_size * 0.4 * scale);
    if offset < overflow - 0.5 {
        ui.painter().text(
            egui::pos2(rect.right() - 32.0 * scale, rect.bottom() - 40.0 * scale),
            egui::Align2::CENTER_CENTER,
            "\u{25BC}",
            font.clone(),
            color,
        );
    }
    if offset > 0.5 {
        ui.painter().text(
            egui::pos2(rect.right() - 32.0 * scale, rect.top() + 40.0 * scale),
            egui::Align2::CENTER_CENTER,
            "\u{25B2}",
            font,
            color,
        );
    }
}

pub fn run(
    catalog: Catalog,
    windowed: bool,
    start_slide: Option<usize>,
    config: &Config,
) -> anyhow::Result<()> {
    let title = catalog.display_title().to_string();

    let options = SessionOptions {
        tuning: config.tuning(),
        appearance: config.appearance(),
        // --slide is 1-indexed
        start_slide: start_slide.map(|s| s.saturating_sub(1)).unwrap_or(0),
    };
    let session = Session::start(catalog, options);
    let client = GeminiClient::from_config(&config.ai());
    if client.is_none() {
        tracing::warn!("no Gemini API key configured; AI Studio is disabled");
    }
    let studio = AiStudio::new(client);

    tracing::info!(
        slides = session.slide_count(),
        start = session.current_index() + 1,
        windowed,
        "starting viewer"
    );

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(DeckApp::new(session, studio)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            map_key(egui::Key::ArrowRight),
            Some(KeyAction::Deck(DeckEvent::Key(NavKey::Next)))
        );
        assert_eq!(
            map_key(egui::Key::Space),
            Some(KeyAction::Deck(DeckEvent::Key(NavKey::Next)))
        );
        assert_eq!(
            map_key(egui::Key::ArrowLeft),
            Some(KeyAction::Deck(DeckEvent::Key(NavKey::Previous)))
        );
        assert_eq!(
            map_key(egui::Key::Escape),
            Some(KeyAction::Deck(DeckEvent::Key(NavKey::Cancel)))
        );
        assert_eq!(
            map_key(egui::Key::ArrowDown),
            Some(KeyAction::Deck(DeckEvent::Key(NavKey::Next)))
        );
        assert_eq!(
            map_key(egui::Key::ArrowUp),
            Some(KeyAction::Deck(DeckEvent::Key(NavKey::Previous)))
        );
        assert_eq!(map_key(egui::Key::PageDown), Some(KeyAction::Scroll(KEY_SCROLL_PX)));
        assert_eq!(map_key(egui::Key::Z), None);
    }

    #[test]
    fn test_shortcut_keys() {
        let cases = [
            (egui::Key::M, Shortcut::OpenMenu),
            (egui::Key::D, Shortcut::ToggleTheme),
            (egui::Key::A, Shortcut::CycleAccent),
            (egui::Key::T, Shortcut::CycleFont),
            (egui::Key::P, Shortcut::ToggleMusic),
            (egui::Key::Home, Shortcut::First),
            (egui::Key::End, Shortcut::Last),
        ];
        for (key, shortcut) in cases {
            assert_eq!(
                map_key(key),
                Some(KeyAction::Deck(DeckEvent::Shortcut(shortcut))),
                "{key:?}"
            );
        }
        assert_eq!(map_key(egui::Key::Q), Some(KeyAction::Quit));
        assert_eq!(map_key(egui::Key::I), Some(KeyAction::Studio));
    }

    fn key_event(key: egui::Key, repeat: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn press_keys(app: &mut DeckApp, events: Vec<egui::Event>) -> Vec<egui::ViewportCommand> {
        let ctx = egui::Context::default();
        let mut cmds = Vec::new();
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.handle_keys(ctx, &mut cmds));
        cmds
    }

    fn bundled_app() -> DeckApp {
        let catalog = Catalog::bundled().unwrap();
        let session = Session::start(catalog, SessionOptions::default());
        DeckApp::new(session, AiStudio::new(None))
    }

    #[test]
    fn test_held_arrow_steps_on_every_repeat() {
        let mut app = bundled_app();
        press_keys(
            &mut app,
            vec![
                key_event(egui::Key::ArrowRight, false),
                key_event(egui::Key::ArrowRight, true),
                key_event(egui::Key::ArrowRight, true),
                key_event(egui::Key::ArrowRight, true),
            ],
        );
        assert_eq!(app.session.current_index(), 4, "each OS repeat should advance");

        press_keys(
            &mut app,
            vec![
                key_event(egui::Key::ArrowLeft, false),
                key_event(egui::Key::ArrowLeft, true),
            ],
        );
        assert_eq!(app.session.current_index(), 2);
    }

    #[test]
    fn test_held_toggle_fires_once() {
        let mut app = bundled_app();
        let before = app.session.appearance().mode;
        press_keys(
            &mut app,
            vec![
                key_event(egui::Key::D, false),
                key_event(egui::Key::D, true),
                key_event(egui::Key::D, true),
            ],
        );
        assert_eq!(app.session.appearance().mode, before.toggled());

        let cmds = press_keys(&mut app, vec![key_event(egui::Key::Q, true)]);
        assert!(cmds.is_empty(), "a repeated Q must not quit: {cmds:?}");
        let cmds = press_keys(&mut app, vec![key_event(egui::Key::Q, false)]);
        assert_eq!(cmds, vec![egui::ViewportCommand::Close]);
    }

    #[test]
    fn test_wheel_units() {
        let down = egui::vec2(0.0, -3.0);
        assert_eq!(wheel_delta_y(egui::MouseWheelUnit::Point, down, 800.0), 3.0);
        assert_eq!(wheel_delta_y(egui::MouseWheelUnit::Line, down, 800.0), 120.0);
        assert_eq!(
            wheel_delta_y(egui::MouseWheelUnit::Page, egui::vec2(0.0, 1.0), 800.0),
            -800.0
        );
    }

    #[test]
    fn test_touch_events_translate() {
        let now = Instant::now();
        let events = vec![
            egui::Event::Touch {
                device_id: egui::TouchDeviceId(0),
                id: egui::TouchId(1),
                phase: egui::TouchPhase::Start,
                pos: egui::pos2(10.0, 500.0),
                force: None,
            },
            egui::Event::Touch {
                device_id: egui::TouchDeviceId(0),
                id: egui::TouchId(1),
                phase: egui::TouchPhase::Move,
                pos: egui::pos2(10.0, 470.0),
                force: None,
            },
            egui::Event::Touch {
                device_id: egui::TouchDeviceId(0),
                id: egui::TouchId(1),
                phase: egui::TouchPhase::End,
                pos: egui::pos2(10.0, 420.0),
                force: None,
            },
        ];
        assert_eq!(
            collect_pointer_events(&events, 800.0, now),
            vec![
                DeckEvent::TouchStart { y: Some(500.0) },
                DeckEvent::TouchEnd { y: Some(420.0) },
            ]
        );
    }

    #[test]
    fn test_touch_cancel_has_no_position() {
        let events = vec![egui::Event::Touch {
            device_id: egui::TouchDeviceId(0),
            id: egui::TouchId(1),
            phase: egui::TouchPhase::Cancel,
            pos: egui::pos2(0.0, 0.0),
            force: None,
        }];
        assert_eq!(
            collect_pointer_events(&events, 800.0, Instant::now()),
            vec![DeckEvent::TouchEnd { y: None }]
        );
    }

    #[test]
    fn test_toast_lifecycle() {
        let toast = Toast::new("Copied to clipboard".to_string());
        assert_eq!(toast.opacity(), 1.0);
        assert!(!toast.is_expired());
    }

    #[test]
    fn test_scroll_probe_from_measurements() {
        let mut app = bundled_app();
        assert_eq!(app.scroll_region(), None);

        app.viewport_height = 1000.0;
        app.content_heights[0] = 1400.0;
        app.scroll_by(250.0);
        assert_eq!(
            app.scroll_region(),
            Some(ScrollRegion {
                top: 250.0,
                height: 1400.0,
                viewport: 1000.0
            })
        );

        // Scrolling clamps at the bottom edge
        app.scroll_by(10_000.0);
        assert_eq!(app.scroll_targets[0], 400.0);
    }

    #[test]
    fn test_slide_render_records_measurements() {
        let mut app = bundled_app();
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(1920.0, 1080.0),
            )),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let rect = ui.max_rect();
                let scale = render::compute_scale(rect);
                app.draw_slide_with_scroll(ui, ctx, rect, scale);
            });
        });
        assert!(app.viewport_height > 0.0);
        assert!(app.content_heights[0] > 0.0, "first slide height not measured");
    }

    #[test]
    fn test_wheel_scrolls_before_advancing() {
        let mut app = bundled_app();
        app.viewport_height = 1000.0;
        app.content_heights[0] = 1400.0;

        let wheel = DeckEvent::Wheel {
            delta_y: 120.0,
            at: Instant::now(),
        };
        assert_eq!(app.dispatch(wheel), Dispatch::NativeScroll);
        assert_eq!(app.session.current_index(), 0);
        assert_eq!(app.scroll_targets[0], 120.0);

        app.scroll_by(10_000.0);
        assert_eq!(
            app.dispatch(wheel),
            Dispatch::Navigated(NavOutcome::Moved { from: 0, to: 1 })
        );
    }
}
