/// Music player lifecycle. `(inactive, visible)` has no variant, so the
/// "visible implies active" rule cannot be broken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MusicState {
    #[default]
    Off,
    /// Loaded and playing, window hidden
    BackgroundPlaying,
    /// Loaded and playing, window shown
    Visible,
}

impl MusicState {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Off)
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Menu and music overlay state. Mutated only through the methods below.
#[derive(Debug, Clone, Default)]
pub struct Overlays {
    menu_open: bool,
    music: MusicState,
}

impl Overlays {
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn music(&self) -> MusicState {
        self.music
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    /// Returns whether the menu was open.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    /// First press starts playback and shows the window. Later presses only
    /// flip the window, playback keeps running.
    pub fn toggle_music(&mut self) -> MusicState {
        self.music = match self.music {
            MusicState::Off => MusicState::Visible,
            MusicState::Visible => MusicState::BackgroundPlaying,
            MusicState::BackgroundPlaying => MusicState::Visible,
        };
        self.music
    }

    /// Hide the window without stopping playback.
    pub fn minimize_music(&mut self) -> MusicState {
        if self.music == MusicState::Visible {
            self.music = MusicState::BackgroundPlaying;
        }
        self.music
    }

    /// Full teardown: releases the player.
    pub fn stop_music(&mut self) -> MusicState {
        self.music = MusicState::Off;
        self.music
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(o: &Overlays) -> (bool, bool) {
        (o.music().is_active(), o.music().is_visible())
    }

    #[test]
    fn test_toggle_asymmetry() {
        let mut o = Overlays::default();
        assert_eq!(flags(&o), (false, false));
        o.toggle_music();
        assert_eq!(flags(&o), (true, true));
        o.toggle_music();
        assert_eq!(flags(&o), (true, false));
        o.toggle_music();
        assert_eq!(flags(&o), (true, true));
        for _ in 0..7 {
            o.toggle_music();
            assert!(o.music().is_active(), "toggle must never stop playback");
        }
    }

    #[test]
    fn test_minimize_then_toggle_reopens_without_restart() {
        let mut o = Overlays::default();
        o.toggle_music();
        assert_eq!(o.minimize_music(), MusicState::BackgroundPlaying);
        assert_eq!(o.toggle_music(), MusicState::Visible);
    }

    #[test]
    fn test_minimize_when_off_stays_off() {
        let mut o = Overlays::default();
        assert_eq!(o.minimize_music(), MusicState::Off);
    }

    #[test]
    fn test_stop_from_any_state() {
        let starts = [0, 1, 2];
        for presses in starts {
            let mut o = Overlays::default();
            for _ in 0..presses {
                o.toggle_music();
            }
            assert_eq!(o.stop_music(), MusicState::Off);
            assert_eq!(flags(&o), (false, false));
        }
    }

    #[test]
    fn test_close_menu_reports_previous() {
        let mut o = Overlays::default();
        assert!(!o.close_menu());
        o.open_menu();
        assert!(o.menu_open());
        assert!(o.close_menu());
        assert!(!o.menu_open());
    }
}
