use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Tunable thresholds for the wheel and touch channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationTuning {
    /// Minimum time between two wheel-driven slide changes
    pub wheel_debounce_ms: u64,
    /// Wheel deltas within `[-threshold, threshold]` never change slides
    pub wheel_threshold: f32,
    /// Minimum vertical travel for a touch gesture to count as a swipe
    pub swipe_threshold: f32,
    /// Sub-pixel tolerance when deciding whether a region is scrolled to the bottom
    pub edge_epsilon: f32,
}

impl Default for NavigationTuning {
    fn default() -> Self {
        Self {
            wheel_debounce_ms: 500,
            wheel_threshold: 30.0,
            swipe_threshold: 50.0,
            edge_epsilon: 2.0,
        }
    }
}

impl NavigationTuning {
    pub fn wheel_debounce(&self) -> Duration {
        Duration::from_millis(self.wheel_debounce_ms)
    }

    /// Replace negative or non-finite thresholds with their defaults. A
    /// negative threshold would turn small ticks and taps into steps.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            wheel_debounce_ms: self.wheel_debounce_ms,
            wheel_threshold: valid_or("wheel_threshold", self.wheel_threshold, defaults.wheel_threshold),
            swipe_threshold: valid_or("swipe_threshold", self.swipe_threshold, defaults.swipe_threshold),
            edge_epsilon: valid_or("edge_epsilon", self.edge_epsilon, defaults.edge_epsilon),
        }
    }
}

fn valid_or(name: &str, value: f32, default: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        tracing::warn!("ignoring navigation.{name} = {value}; using {default}");
        default
    }
}

/// Geometry of the scrollable content region of the current slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRegion {
    /// Current scroll offset
    pub top: f32,
    /// Full content height
    pub height: f32,
    /// Visible height
    pub viewport: f32,
}

impl ScrollRegion {
    pub fn is_scrollable(&self) -> bool {
        self.height > self.viewport
    }

    pub fn is_at_top(&self) -> bool {
        self.top <= 0.0
    }

    pub fn is_at_bottom(&self, epsilon: f32) -> bool {
        (self.height - self.viewport - self.top).abs() < epsilon
    }
}

/// Measures the current slide's scroll region on demand. `None` means the
/// slide has no scrollable region, which allows transitions unconditionally.
pub trait ScrollProbe {
    fn measure(&self) -> Option<ScrollRegion>;
}

impl ScrollProbe for Option<ScrollRegion> {
    fn measure(&self) -> Option<ScrollRegion> {
        *self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Navigation keys after platform key codes have been mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Right or Down
    Next,
    /// Left or Up
    Previous,
    /// Escape
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppression {
    MenuOpen,
    Debounce,
}

/// What the arbiter decided to do with one raw event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Step(Direction),
    CloseMenu,
    /// Left to the slide's own scroll region
    NativeScroll,
    Suppressed(Suppression),
    /// Below threshold, malformed, or meaningless in the current state
    Ignored,
}

/// Per-channel guard state: the wheel debounce timestamp and the in-flight
/// touch gesture.
#[derive(Debug, Clone)]
pub struct InputArbiter {
    tuning: NavigationTuning,
    last_wheel_step: Option<Instant>,
    touch_start_y: Option<f32>,
}

impl InputArbiter {
    pub fn new(tuning: NavigationTuning) -> Self {
        Self {
            tuning: tuning.sanitized(),
            last_wheel_step: None,
            touch_start_y: None,
        }
    }

    pub fn tuning(&self) -> &NavigationTuning {
        &self.tuning
    }

    pub fn key(&self, key: NavKey, menu_open: bool) -> Verdict {
        match (key, menu_open) {
            (NavKey::Cancel, true) => Verdict::CloseMenu,
            (_, true) => Verdict::Suppressed(Suppression::MenuOpen),
            (NavKey::Next, false) => Verdict::Step(Direction::Forward),
            (NavKey::Previous, false) => Verdict::Step(Direction::Backward),
            (NavKey::Cancel, false) => Verdict::Ignored,
        }
    }

    /// `delta_y` is positive when scrolling down. The probe is queried on
    /// every call; measurements are never cached across events.
    pub fn wheel(
        &mut self,
        delta_y: f32,
        now: Instant,
        probe: &dyn ScrollProbe,
        menu_open: bool,
    ) -> Verdict {
        if menu_open {
            return Verdict::Suppressed(Suppression::MenuOpen);
        }
        if !delta_y.is_finite() {
            return Verdict::Ignored;
        }

        if let Some(region) = probe.measure().filter(ScrollRegion::is_scrollable) {
            if delta_y > 0.0 && !region.is_at_bottom(self.tuning.edge_epsilon) {
                return Verdict::NativeScroll;
            }
            if delta_y < 0.0 && !region.is_at_top() {
                return Verdict::NativeScroll;
            }
        }

        if let Some(last) = self.last_wheel_step {
            if now.saturating_duration_since(last) < self.tuning.wheel_debounce() {
                return Verdict::Suppressed(Suppression::Debounce);
            }
        }

        let direction = if delta_y > self.tuning.wheel_threshold {
            Direction::Forward
        } else if delta_y < -self.tuning.wheel_threshold {
            Direction::Backward
        } else {
            return Verdict::Ignored;
        };

        // Never move the timestamp backwards
        self.last_wheel_step = Some(self.last_wheel_step.map_or(now, |last| last.max(now)));
        Verdict::Step(direction)
    }

    /// Start tracking a gesture, replacing any unmatched start.
    pub fn touch_start(&mut self, y: Option<f32>) {
        self.touch_start_y = y.filter(|y| y.is_finite());
    }

    pub fn touch_end(&mut self, y: Option<f32>, menu_open: bool) -> Verdict {
        let start = self.touch_start_y.take();
        if menu_open {
            return Verdict::Suppressed(Suppression::MenuOpen);
        }
        let (Some(start), Some(end)) = (start, y.filter(|y| y.is_finite())) else {
            return Verdict::Ignored;
        };

        let diff = start - end;
        if diff.abs() <= self.tuning.swipe_threshold {
            return Verdict::Ignored;
        }
        if diff > 0.0 {
            Verdict::Step(Direction::Forward)
        } else {
            Verdict::Step(Direction::Backward)
        }
    }

    pub fn touch_in_flight(&self) -> bool {
        self.touch_start_y.is_some()
    }
}

impl Default for InputArbiter {
    fn default() -> Self {
        Self::new(NavigationTuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOT_SCROLLABLE: Option<ScrollRegion> = None;

    fn region(top: f32) -> Option<ScrollRegion> {
        Some(ScrollRegion {
            top,
            height: 1000.0,
            viewport: 400.0,
        })
    }

    #[test]
    fn test_keys_map_to_steps() {
        let arb = InputArbiter::default();
        assert_eq!(arb.key(NavKey::Next, false), Verdict::Step(Direction::Forward));
        assert_eq!(
            arb.key(NavKey::Previous, false),
            Verdict::Step(Direction::Backward)
        );
        assert_eq!(arb.key(NavKey::Cancel, false), Verdict::Ignored);
    }

    #[test]
    fn test_keys_suppressed_while_menu_open() {
        let arb = InputArbiter::default();
        assert_eq!(
            arb.key(NavKey::Next, true),
            Verdict::Suppressed(Suppression::MenuOpen)
        );
        assert_eq!(arb.key(NavKey::Cancel, true), Verdict::CloseMenu);
    }

    #[test]
    fn test_wheel_debounce_window() {
        let mut arb = InputArbiter::default();
        let t0 = Instant::now();
        assert_eq!(
            arb.wheel(100.0, t0, &NOT_SCROLLABLE, false),
            Verdict::Step(Direction::Forward)
        );
        assert_eq!(
            arb.wheel(100.0, t0 + Duration::from_millis(100), &NOT_SCROLLABLE, false),
            Verdict::Suppressed(Suppression::Debounce)
        );
        assert_eq!(
            arb.wheel(100.0, t0 + Duration::from_millis(600), &NOT_SCROLLABLE, false),
            Verdict::Step(Direction::Forward)
        );
    }

    #[test]
    fn test_wheel_small_deltas_ignored() {
        let mut arb = InputArbiter::default();
        let t0 = Instant::now();
        for delta in [-30.0, -12.5, 0.0, 8.0, 30.0] {
            assert_eq!(arb.wheel(delta, t0, &NOT_SCROLLABLE, false), Verdict::Ignored);
        }
        // Ignored ticks do not start a debounce window
        assert_eq!(
            arb.wheel(-31.0, t0, &NOT_SCROLLABLE, false),
            Verdict::Step(Direction::Backward)
        );
    }

    #[test]
    fn test_wheel_delegates_to_scroll_region() {
        let mut arb = InputArbiter::default();
        let t0 = Instant::now();
        assert_eq!(
            arb.wheel(50.0, t0, &region(300.0), false),
            Verdict::NativeScroll
        );
        assert_eq!(
            arb.wheel(50.0, t0, &region(600.0), false),
            Verdict::Step(Direction::Forward)
        );
    }

    #[test]
    fn test_wheel_up_needs_top() {
        let mut arb = InputArbiter::default();
        let t0 = Instant::now();
        assert_eq!(
            arb.wheel(-80.0, t0, &region(120.0), false),
            Verdict::NativeScroll
        );
        assert_eq!(
            arb.wheel(-80.0, t0, &region(0.0), false),
            Verdict::Step(Direction::Backward)
        );
    }

    #[test]
    fn test_wheel_bottom_epsilon() {
        let mut arb = InputArbiter::default();
        let t0 = Instant::now();
        // 1.5 short of the bottom counts as the bottom
        assert_eq!(
            arb.wheel(50.0, t0, &region(598.5), false),
            Verdict::Step(Direction::Forward)
        );
        let mut arb = InputArbiter::default();
        assert_eq!(
            arb.wheel(50.0, t0, &region(598.0), false),
            Verdict::NativeScroll
        );
    }

    #[test]
    fn test_wheel_short_content_is_not_scrollable() {
        let mut arb = InputArbiter::default();
        let short = Some(ScrollRegion {
            top: 0.0,
            height: 300.0,
            viewport: 400.0,
        });
        assert_eq!(
            arb.wheel(50.0, Instant::now(), &short, false),
            Verdict::Step(Direction::Forward)
        );
    }

    #[test]
    fn test_wheel_probe_is_queried_per_event() {
        use std::cell::Cell;

        struct Counting(Cell<u32>);
        impl ScrollProbe for Counting {
            fn measure(&self) -> Option<ScrollRegion> {
                self.0.set(self.0.get() + 1);
                None
            }
        }

        let probe = Counting(Cell::new(0));
        let mut arb = InputArbiter::default();
        let t0 = Instant::now();
        arb.wheel(100.0, t0, &probe, false);
        arb.wheel(100.0, t0, &probe, false);
        assert_eq!(probe.0.get(), 2);
    }

    #[test]
    fn test_wheel_menu_and_malformed() {
        let mut arb = InputArbiter::default();
        let t0 = Instant::now();
        assert_eq!(
            arb.wheel(100.0, t0, &NOT_SCROLLABLE, true),
            Verdict::Suppressed(Suppression::MenuOpen)
        );
        assert_eq!(
            arb.wheel(f32::NAN, t0, &NOT_SCROLLABLE, false),
            Verdict::Ignored
        );
    }

    #[test]
    fn test_wheel_clock_going_backwards() {
        let mut arb = InputArbiter::default();
        let t0 = Instant::now() + Duration::from_secs(5);
        arb.wheel(100.0, t0, &NOT_SCROLLABLE, false);
        assert_eq!(
            arb.wheel(100.0, t0 - Duration::from_secs(2), &NOT_SCROLLABLE, false),
            Verdict::Suppressed(Suppression::Debounce)
        );
    }

    #[test]
    fn test_swipe_threshold() {
        let mut arb = InputArbiter::default();
        arb.touch_start(Some(500.0));
        assert_eq!(
            arb.touch_end(Some(440.0), false),
            Verdict::Step(Direction::Forward)
        );

        arb.touch_start(Some(500.0));
        assert_eq!(arb.touch_end(Some(470.0), false), Verdict::Ignored);

        arb.touch_start(Some(300.0));
        assert_eq!(
            arb.touch_end(Some(420.0), false),
            Verdict::Step(Direction::Backward)
        );
    }

    #[test]
    fn test_swipe_exactly_at_threshold_is_tap() {
        let mut arb = InputArbiter::default();
        arb.touch_start(Some(500.0));
        assert_eq!(arb.touch_end(Some(450.0), false), Verdict::Ignored);
    }

    #[test]
    fn test_touch_start_overwrites() {
        let mut arb = InputArbiter::default();
        arb.touch_start(Some(900.0));
        arb.touch_start(Some(500.0));
        assert_eq!(arb.touch_end(Some(470.0), false), Verdict::Ignored);
    }

    #[test]
    fn test_touch_missing_coordinates() {
        let mut arb = InputArbiter::default();
        assert_eq!(arb.touch_end(Some(10.0), false), Verdict::Ignored);
        arb.touch_start(None);
        assert!(!arb.touch_in_flight());
        assert_eq!(arb.touch_end(Some(10.0), false), Verdict::Ignored);
        arb.touch_start(Some(500.0));
        assert_eq!(arb.touch_end(None, false), Verdict::Ignored);
        assert!(!arb.touch_in_flight());
    }

    #[test]
    fn test_touch_suppressed_while_menu_open() {
        let mut arb = InputArbiter::default();
        arb.touch_start(Some(500.0));
        assert_eq!(
            arb.touch_end(Some(100.0), true),
            Verdict::Suppressed(Suppression::MenuOpen)
        );
        assert!(!arb.touch_in_flight());
    }

    #[test]
    fn test_custom_tuning() {
        let mut arb = InputArbiter::new(NavigationTuning {
            wheel_debounce_ms: 50,
            wheel_threshold: 5.0,
            swipe_threshold: 10.0,
            edge_epsilon: 2.0,
        });
        let t0 = Instant::now();
        assert_eq!(
            arb.wheel(6.0, t0, &NOT_SCROLLABLE, false),
            Verdict::Step(Direction::Forward)
        );
        assert_eq!(
            arb.wheel(6.0, t0 + Duration::from_millis(60), &NOT_SCROLLABLE, false),
            Verdict::Step(Direction::Forward)
        );
        arb.touch_start(Some(100.0));
        assert_eq!(
            arb.touch_end(Some(85.0), false),
            Verdict::Step(Direction::Forward)
        );
    }

    #[test]
    fn test_malformed_tuning_falls_back_to_defaults() {
        let tuning: NavigationTuning = serde_yaml::from_str(
            "wheel_threshold: -10\nswipe_threshold: .nan\nedge_epsilon: 4\n",
        )
        .unwrap();
        let mut arb = InputArbiter::new(tuning);
        let defaults = NavigationTuning::default();
        assert_eq!(arb.tuning().wheel_threshold, defaults.wheel_threshold);
        assert_eq!(arb.tuning().swipe_threshold, defaults.swipe_threshold);
        assert_eq!(arb.tuning().edge_epsilon, 4.0, "valid fields are kept");

        let now = Instant::now();
        assert_eq!(
            arb.wheel(-5.0, now, &NOT_SCROLLABLE, false),
            Verdict::Ignored,
            "small upward tick must not step"
        );
        arb.touch_start(Some(500.0));
        assert_eq!(
            arb.touch_end(Some(499.0), false),
            Verdict::Ignored,
            "1px tap must not step"
        );
    }
}
