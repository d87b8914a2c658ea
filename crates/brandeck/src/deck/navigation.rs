/// Result of a navigation request. Out-of-range requests are never errors;
/// they clamp and report where they landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Moved { from: usize, to: usize },
    /// `retreat` on the first slide
    AtStart,
    /// `advance` on the last slide
    AtEnd,
    /// `seek`/`jump_to` onto the slide already shown
    Unchanged,
}

impl NavOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Owns the current slide index for the session.
///
/// The slide count is fixed at construction since the catalog is immutable,
/// so `current` is always in `0..count`.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: usize,
    count: usize,
}

impl Navigator {
    /// Create a navigator over `count` slides. A zero count is treated as a
    /// single slide so the index invariant holds.
    pub fn new(count: usize) -> Self {
        Self {
            current: 0,
            count: count.max(1),
        }
    }

    /// Create a navigator starting on `start`, clamped into range.
    pub fn starting_at(count: usize, start: usize) -> Self {
        let mut nav = Self::new(count);
        nav.current = start.min(nav.last());
        nav
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn last(&self) -> usize {
        self.count - 1
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == self.last()
    }

    pub fn advance(&mut self) -> NavOutcome {
        if self.is_last() {
            return NavOutcome::AtEnd;
        }
        self.move_to(self.current + 1)
    }

    pub fn retreat(&mut self) -> NavOutcome {
        if self.is_first() {
            return NavOutcome::AtStart;
        }
        self.move_to(self.current - 1)
    }

    /// Direct positioning, as from a slider. Any integer is accepted.
    pub fn seek(&mut self, target: i64) -> NavOutcome {
        let to = self.clamp(target);
        self.move_to(to)
    }

    /// Same clamping as [`seek`](Self::seek). The menu side effect lives in
    /// `Session::jump_to`, which owns both the navigator and the overlays.
    pub fn jump_to(&mut self, target: i64) -> NavOutcome {
        self.seek(target)
    }

    fn clamp(&self, target: i64) -> usize {
        if target <= 0 {
            0
        } else {
            usize::try_from(target).map_or(self.last(), |t| t.min(self.last()))
        }
    }

    fn move_to(&mut self, to: usize) -> NavOutcome {
        let from = self.current;
        if from == to {
            return NavOutcome::Unchanged;
        }
        self.current = to;
        NavOutcome::Moved { from, to }
    }
}
