//! Input events fed to a frame context.
//!
//! The toolkit owns real input handling; these types describe the keys and
//! clicks a headless context replays into its widgets.

mod keyboard;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};

/// Mouse button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// An input event queued for the next frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Key(KeyEvent),
    Click {
        pos: crate::geometry::Vec2,
        button: MouseButton,
    },
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self::Key(event)
    }
}
