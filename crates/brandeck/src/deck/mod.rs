//! Navigation and view-state core.
//!
//! Keyboard, wheel, touch and direct-seek input all funnel into one
//! [`Session`], which arbitrates each event against its channel guards and
//! the menu overlay before touching the slide index.

pub mod input;
pub mod navigation;
pub mod overlay;
pub mod session;

pub use input::{NavKey, NavigationTuning, ScrollRegion};
pub use navigation::NavOutcome;
pub use overlay::MusicState;
pub use session::{DeckEvent, Dispatch, Session, SessionOptions, Shortcut};
