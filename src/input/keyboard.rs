//! Keys a text field or popup reacts to.

use bitflags::bitflags;

bitflags! {
    /// Modifiers held with a key.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const SHIFT = 0b0000_0001;
        const ALT = 0b0000_0010;
        const CTRL = 0b0000_0100;
    }
}

/// Key identity, without modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Backspace,
    Delete,
    /// Commits the active field.
    Enter,
    /// Inserts a tab under `ALLOW_TAB_INPUT`, else requests completion.
    Tab,
    /// Reverts the active field.
    Esc,
    Left,
    Right,
    /// Previous history entry.
    Up,
    /// Next history entry.
    Down,
    Home,
    End,
    /// A character key (includes space).
    Char(char),
}

impl KeyCode {
    /// Whether the key only moves the cursor or asks for history, so a
    /// read-only field still honours it.
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::Left | Self::Right | Self::Up | Self::Down | Self::Home | Self::End
        )
    }

    /// The typed character, if any.
    #[must_use]
    pub fn char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }
}

/// One key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    #[must_use]
    pub fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    /// Shift+`code`, extending the selection for cursor moves.
    #[must_use]
    pub fn with_shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    #[must_use]
    pub fn with_ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CTRL)
    }

    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }

    #[must_use]
    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CTRL)
    }

    /// Ctrl+A.
    #[must_use]
    pub fn is_select_all(&self) -> bool {
        self.ctrl() && matches!(self.code, KeyCode::Char('a' | 'A'))
    }
}

impl From<char> for KeyEvent {
    fn from(c: char) -> Self {
        Self::char(c)
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::key(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_char_has_no_modifiers() {
        let event = KeyEvent::from('a');
        assert_eq!(event.code, KeyCode::Char('a'));
        assert!(event.modifiers.is_empty());
        assert!(!event.is_select_all());
    }

    #[test]
    fn test_select_all_needs_ctrl() {
        assert!(KeyEvent::with_ctrl(KeyCode::Char('a')).is_select_all());
        assert!(KeyEvent::with_ctrl(KeyCode::Char('A')).is_select_all());
        assert!(!KeyEvent::with_ctrl(KeyCode::Char('c')).is_select_all());
        assert!(KeyEvent::with_shift(KeyCode::Left).shift());
    }

    #[test]
    fn test_navigation_keys() {
        assert!(KeyCode::Home.is_navigation());
        assert!(KeyCode::Up.is_navigation());
        assert!(!KeyCode::Enter.is_navigation());
        assert!(!KeyCode::Backspace.is_navigation());
        assert_eq!(KeyCode::Char('x').char(), Some('x'));
        assert_eq!(KeyCode::Tab.char(), None);
    }

    #[test]
    fn test_from_code() {
        let event: KeyEvent = KeyCode::Backspace.into();
        assert_eq!(event, KeyEvent::key(KeyCode::Backspace));
    }
}
