//! Behavior flags for text fields.

use bitflags::bitflags;

bitflags! {
    /// Flags accepted by the fixed-capacity text widget.
    ///
    /// The `CALLBACK_*` flags select which [`TextEvent`](super::TextEvent)s
    /// the widget raises. `CALLBACK_RESIZE` and `CALLBACK_EDIT` are owned by
    /// the buffer bridge and set by it.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InputTextFlags: u32 {
        /// Allow `0123456789.+-*/` only.
        const CHARS_DECIMAL       = 1 << 0;
        /// Allow `0123456789ABCDEFabcdef` only.
        const CHARS_HEXADECIMAL   = 1 << 1;
        /// Turn `a..z` into `A..Z`.
        const CHARS_UPPERCASE     = 1 << 2;
        /// Filter out spaces and tabs.
        const CHARS_NO_BLANK      = 1 << 3;
        /// Select the whole text when the field gains focus.
        const AUTO_SELECT_ALL     = 1 << 4;
        /// Return true only when Enter is pressed, not on every change.
        const ENTER_RETURNS_TRUE  = 1 << 5;
        /// Raise `Completion` on Tab.
        const CALLBACK_COMPLETION = 1 << 6;
        /// Raise `History` on Up/Down.
        const CALLBACK_HISTORY    = 1 << 7;
        /// Raise `Always` every frame while active.
        const CALLBACK_ALWAYS     = 1 << 8;
        /// Raise `CharFilter` for every typed character.
        const CALLBACK_CHAR_FILTER = 1 << 9;
        /// Tab inserts `\t` instead of moving focus.
        const ALLOW_TAB_INPUT     = 1 << 10;
        /// Typed characters overwrite instead of insert.
        const ALWAYS_OVERWRITE    = 1 << 11;
        /// Text is shown but cannot be edited.
        const READ_ONLY           = 1 << 12;
        /// Raise `Resize` whenever the applied text length changes.
        const CALLBACK_RESIZE     = 1 << 13;
        /// Raise `Edit` after any content change.
        const CALLBACK_EDIT       = 1 << 14;
    }
}

impl InputTextFlags {
    /// Filter a typed character according to the `CHARS_*` flags.
    /// Returns `None` if the character is rejected.
    #[must_use]
    pub fn filter_char(self, c: char) -> Option<char> {
        if c.is_control() && !(c == '\t' && self.contains(Self::ALLOW_TAB_INPUT)) {
            return None;
        }
        if self.contains(Self::CHARS_DECIMAL) && !(c.is_ascii_digit() || "+-*/.".contains(c)) {
            return None;
        }
        if self.contains(Self::CHARS_HEXADECIMAL) && !c.is_ascii_hexdigit() {
            return None;
        }
        if self.contains(Self::CHARS_NO_BLANK) && (c == ' ' || c == '\t') {
            return None;
        }
        if self.contains(Self::CHARS_UPPERCASE) {
            return Some(c.to_ascii_uppercase());
        }
        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_plain_accepts_printable() {
        let flags = InputTextFlags::empty();
        assert_eq!(flags.filter_char('a'), Some('a'));
        assert_eq!(flags.filter_char('é'), Some('é'));
        assert_eq!(flags.filter_char('\u{7}'), None);
        assert_eq!(flags.filter_char('\t'), None);
    }

    #[test]
    fn test_filter_decimal() {
        let flags = InputTextFlags::CHARS_DECIMAL;
        assert_eq!(flags.filter_char('7'), Some('7'));
        assert_eq!(flags.filter_char('.'), Some('.'));
        assert_eq!(flags.filter_char('x'), None);
    }

    #[test]
    fn test_filter_hex_uppercase() {
        let flags = InputTextFlags::CHARS_HEXADECIMAL | InputTextFlags::CHARS_UPPERCASE;
        assert_eq!(flags.filter_char('f'), Some('F'));
        assert_eq!(flags.filter_char('g'), None);
    }

    #[test]
    fn test_filter_no_blank_and_tab_input() {
        assert_eq!(InputTextFlags::CHARS_NO_BLANK.filter_char(' '), None);
        assert_eq!(
            InputTextFlags::ALLOW_TAB_INPUT.filter_char('\t'),
            Some('\t')
        );
    }
}
