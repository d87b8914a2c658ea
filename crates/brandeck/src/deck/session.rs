use std::time::Instant;

use super::input::{
    Direction, InputArbiter, NavKey, NavigationTuning, ScrollProbe, ScrollRegion, Suppression,
    Verdict,
};
use super::navigation::{NavOutcome, Navigator};
use super::overlay::{MusicState, Overlays};
use crate::catalog::{Catalog, Slide};
use crate::theme::{Accent, Appearance, Theme};

/// The four input channels a session listens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Keyboard,
    Wheel,
    Touch,
    Direct,
}

/// Keyboard shortcuts beyond plain navigation. They ride the keyboard
/// channel, so the menu suppresses them like any other key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    OpenMenu,
    ToggleTheme,
    CycleAccent,
    CycleFont,
    ToggleMusic,
    First,
    Last,
}

/// Typed input for a session. Raw platform events are converted into these
/// before dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeckEvent {
    Key(NavKey),
    Shortcut(Shortcut),
    /// `delta_y` is positive when scrolling down
    Wheel { delta_y: f32, at: Instant },
    TouchStart { y: Option<f32> },
    TouchEnd { y: Option<f32> },
    /// Slider-style positioning
    Seek(i64),
    /// Menu selection; also dismisses the menu
    JumpTo(i64),
    OpenMenu,
    CloseMenu,
    ToggleMusic,
    MinimizeMusic,
    StopMusic,
    ToggleTheme,
    CycleAccent,
    SelectAccent(Accent),
    CycleFont,
}

impl DeckEvent {
    /// Input channel carrying this event. Button actions return `None`.
    pub fn channel(&self) -> Option<Channel> {
        match self {
            Self::Key(_) | Self::Shortcut(_) => Some(Channel::Keyboard),
            Self::Wheel { .. } => Some(Channel::Wheel),
            Self::TouchStart { .. } | Self::TouchEnd { .. } => Some(Channel::Touch),
            Self::Seek(_) | Self::JumpTo(_) => Some(Channel::Direct),
            _ => None,
        }
    }
}

/// What happened to one dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Navigated(NavOutcome),
    /// Overlay or appearance state changed
    Applied,
    /// Left to the slide's own scroll region
    NativeScroll,
    Suppressed(Suppression),
    Ignored,
    /// The session has ended and no longer listens
    Unsubscribed,
}

#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub tuning: NavigationTuning,
    pub appearance: Appearance,
    /// 0-indexed, clamped into the catalog
    pub start_slide: usize,
}

/// Owns all view state for one presentation run: the navigator, the input
/// guards, the overlays and the appearance settings. Every mutation goes
/// through [`dispatch`](Self::dispatch) or one of the named operations, one
/// event at a time.
pub struct Session {
    catalog: Catalog,
    nav: Navigator,
    arbiter: InputArbiter,
    overlays: Overlays,
    appearance: Appearance,
    running: bool,
}

impl Session {
    /// Build a session and start listening on every input channel.
    pub fn start(catalog: Catalog, options: SessionOptions) -> Self {
        let nav = Navigator::starting_at(catalog.len(), options.start_slide);
        let mut session = Self {
            catalog,
            nav,
            arbiter: InputArbiter::new(options.tuning),
            overlays: Overlays::default(),
            appearance: options.appearance,
            running: true,
        };
        tracing::debug!(
            slides = session.nav.count(),
            start = session.nav.current(),
            "session started"
        );
        session
    }

    /// Stop listening on every channel. Safe to call more than once; `Drop` calls it too.
    pub fn end(&mut self) {
        if self.is_running() {
            tracing::debug!(at = self.nav.current(), "session ended");
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn dispatch(&mut self, event: DeckEvent, probe: &dyn ScrollProbe) -> Dispatch {
        if !self.running {
            return Dispatch::Unsubscribed;
        }

        let menu_open = self.overlays.menu_open();
        let result = match event {
            DeckEvent::Key(key) => {
                let verdict = self.arbiter.key(key, menu_open);
                self.apply(verdict)
            }
            DeckEvent::Shortcut(shortcut) => {
                if menu_open {
                    Dispatch::Suppressed(Suppression::MenuOpen)
                } else {
                    self.shortcut(shortcut)
                }
            }
            DeckEvent::Wheel { delta_y, at } => {
                let verdict = self.arbiter.wheel(delta_y, at, probe, menu_open);
                self.apply(verdict)
            }
            DeckEvent::TouchStart { y } => {
                self.arbiter.touch_start(y);
                Dispatch::Ignored
            }
            DeckEvent::TouchEnd { y } => {
                let verdict = self.arbiter.touch_end(y, menu_open);
                self.apply(verdict)
            }
            DeckEvent::Seek(target) => Dispatch::Navigated(self.seek(target)),
            DeckEvent::JumpTo(target) => Dispatch::Navigated(self.jump_to(target)),
            DeckEvent::OpenMenu => {
                self.overlays.open_menu();
                Dispatch::Applied
            }
            DeckEvent::CloseMenu => {
                self.overlays.close_menu();
                Dispatch::Applied
            }
            DeckEvent::ToggleMusic => {
                self.toggle_music();
                Dispatch::Applied
            }
            DeckEvent::MinimizeMusic => {
                self.overlays.minimize_music();
                Dispatch::Applied
            }
            DeckEvent::StopMusic => {
                self.overlays.stop_music();
                Dispatch::Applied
            }
            DeckEvent::ToggleTheme => {
                self.appearance.mode = self.appearance.mode.toggled();
                Dispatch::Applied
            }
            DeckEvent::CycleAccent => {
                self.appearance.accent = self.appearance.accent.next();
                Dispatch::Applied
            }
            DeckEvent::SelectAccent(accent) => {
                self.appearance.accent = accent;
                Dispatch::Applied
            }
            DeckEvent::CycleFont => {
                self.appearance.font = self.appearance.font.next();
                Dispatch::Applied
            }
        };

        match result {
            Dispatch::Suppressed(_) | Dispatch::Ignored | Dispatch::NativeScroll => {
                tracing::trace!(channel = ?event.channel(), ?event, ?result, "event not applied");
            }
            _ => {}
        }
        result
    }

    fn apply(&mut self, verdict: Verdict) -> Dispatch {
        match verdict {
            Verdict::Step(Direction::Forward) => Dispatch::Navigated(self.advance()),
            Verdict::Step(Direction::Backward) => Dispatch::Navigated(self.retreat()),
            Verdict::CloseMenu => {
                self.overlays.close_menu();
                Dispatch::Applied
            }
            Verdict::NativeScroll => Dispatch::NativeScroll,
            Verdict::Suppressed(reason) => Dispatch::Suppressed(reason),
            Verdict::Ignored => Dispatch::Ignored,
        }
    }

    fn shortcut(&mut self, shortcut: Shortcut) -> Dispatch {
        let event = match shortcut {
            Shortcut::OpenMenu => DeckEvent::OpenMenu,
            Shortcut::ToggleTheme => DeckEvent::ToggleTheme,
            Shortcut::CycleAccent => DeckEvent::CycleAccent,
            Shortcut::CycleFont => DeckEvent::CycleFont,
            Shortcut::ToggleMusic => DeckEvent::ToggleMusic,
            Shortcut::First => return Dispatch::Navigated(self.seek(0)),
            Shortcut::Last => return Dispatch::Navigated(self.seek(self.nav.last() as i64)),
        };
        self.dispatch(event, &None::<ScrollRegion>)
    }

    pub fn advance(&mut self) -> NavOutcome {
        log_outcome("advance", self.nav.advance())
    }

    pub fn retreat(&mut self) -> NavOutcome {
        log_outcome("retreat", self.nav.retreat())
    }

    pub fn seek(&mut self, target: i64) -> NavOutcome {
        log_outcome("seek", self.nav.seek(target))
    }

    /// Move and dismiss the menu in one step.
    pub fn jump_to(&mut self, target: i64) -> NavOutcome {
        let outcome = self.nav.jump_to(target);
        self.overlays.close_menu();
        log_outcome("jump", outcome)
    }

    pub fn toggle_music(&mut self) -> MusicState {
        let state = self.overlays.toggle_music();
        tracing::debug!(?state, "music toggled");
        state
    }

    pub fn current_index(&self) -> usize {
        self.nav.current()
    }

    pub fn slide_count(&self) -> usize {
        self.nav.count()
    }

    pub fn is_first(&self) -> bool {
        self.nav.is_first()
    }

    pub fn is_last(&self) -> bool {
        self.nav.is_last()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The slide record to render.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.catalog.get(self.nav.current())
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn theme(&self) -> Theme {
        self.appearance.theme()
    }

    pub fn tuning(&self) -> &NavigationTuning {
        self.arbiter.tuning()
    }

    pub fn menu_open(&self) -> bool {
        self.overlays.menu_open()
    }

    pub fn music(&self) -> MusicState {
        self.overlays.music()
    }

    pub fn music_active(&self) -> bool {
        self.overlays.music().is_active()
    }

    pub fn player_visible(&self) -> bool {
        self.overlays.music().is_visible()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.end();
    }
}

fn log_outcome(op: &'static str, outcome: NavOutcome) -> NavOutcome {
    match outcome {
        NavOutcome::Moved { from, to } => tracing::debug!(op, from, to, "slide changed"),
        other => tracing::trace!(op, ?other, "slide unchanged"),
    }
    outcome
}
