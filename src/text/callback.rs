//! Events raised by the fixed-capacity text widget.
//!
//! The widget reports back through one hook, synchronously and on the
//! calling thread. Instead of a C-style callback struct with a flag field,
//! every event is a variant of [`TextEvent`] carrying exactly the state it
//! may touch, and the handler answers with a [`Reply`].
//!
//! [`TextEditState`] is the widget-side editing state (its working copy of
//! the text plus cursor and selection). Offsets are byte offsets into the
//! UTF-8 text and are kept on character boundaries.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

/// Answer from a text event handler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reply {
    /// The handler did nothing with the event.
    #[default]
    Ignored,
    /// The handler acted on the event. For `CharFilter` this discards the
    /// character.
    Consumed,
    /// A resize request was refused and clamped; the widget must cut its
    /// text to the returned length.
    Truncated,
}

/// Direction of a history request (Up/Down in a single-line field).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryDirection {
    Up,
    Down,
}

/// A growth (or shrink) request from the widget.
///
/// `text_len` is the length the widget wants to apply; `buf_size` is the
/// storage it needs including the null slot. The handler may lower both to
/// refuse growth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeRequest {
    pub text_len: usize,
    pub buf_size: usize,
}

/// One event raised by the text widget.
#[derive(Debug)]
pub enum TextEvent<'a> {
    /// The applied text length differs from the reserved storage.
    Resize(&'a mut ResizeRequest),
    /// The content changed this frame.
    Edit(&'a mut TextEditState),
    /// Raised every frame while the field is active.
    Always(&'a mut TextEditState),
    /// Tab was pressed.
    Completion(&'a mut TextEditState),
    /// Up or Down was pressed.
    History(&'a mut TextEditState, HistoryDirection),
    /// A character is about to be inserted; the handler may rewrite it.
    CharFilter(&'a mut char),
}

impl TextEvent<'_> {
    /// Short name of the event, for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Resize(_) => "resize",
            Self::Edit(_) => "edit",
            Self::Always(_) => "always",
            Self::Completion(_) => "completion",
            Self::History(..) => "history",
            Self::CharFilter(_) => "char_filter",
        }
    }

    /// The editing state, for events that carry one.
    pub fn state_mut(&mut self) -> Option<&mut TextEditState> {
        match self {
            Self::Edit(s) | Self::Always(s) | Self::Completion(s) | Self::History(s, _) => {
                Some(s)
            }
            Self::Resize(_) | Self::CharFilter(_) => None,
        }
    }
}

/// Working text, cursor and selection of an active text field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextEditState {
    text: String,
    cursor: usize,
    selection_start: usize,
    selection_end: usize,
    dirty: bool,
}

impl TextEditState {
    /// Create a state holding `text` with the cursor at the end.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Self {
            text,
            cursor: end,
            selection_start: end,
            selection_end: end,
            dirty: false,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamped to the text and snapped back to a
    /// character boundary. Does not touch the selection.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = self.snap(pos);
    }

    /// Raw selection endpoints as set, possibly reversed.
    #[must_use]
    pub fn selection_endpoints(&self) -> (usize, usize) {
        (self.selection_start, self.selection_end)
    }

    /// The selected byte range, ordered.
    #[must_use]
    pub fn selection(&self) -> Range<usize> {
        let (a, b) = (self.selection_start, self.selection_end);
        a.min(b)..a.max(b)
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.selection_start != self.selection_end
    }

    /// The selected text.
    #[must_use]
    pub fn selected_text(&self) -> &str {
        &self.text[self.selection()]
    }

    /// Set the selection endpoints (in any order).
    pub fn set_selection(&mut self, start: usize, end: usize) {
        self.selection_start = self.snap(start);
        self.selection_end = self.snap(end);
    }

    /// Collapse the selection onto the cursor.
    pub fn clear_selection(&mut self) {
        self.selection_start = self.cursor;
        self.selection_end = self.cursor;
    }

    pub fn select_all(&mut self) {
        self.selection_start = 0;
        self.selection_end = self.text.len();
        self.cursor = self.text.len();
    }

    /// Whether a handler changed the content since the last
    /// [`take_dirty`](Self::take_dirty).
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and reset the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Delete `count` bytes at `pos`. The cursor shifts left with the
    /// removed text and the selection collapses onto it.
    ///
    /// Returns false if the range is out of bounds or splits a character.
    pub fn delete_chars(&mut self, pos: usize, count: usize) -> bool {
        let Some(end) = pos.checked_add(count) else {
            return false;
        };
        if end > self.text.len()
            || !self.text.is_char_boundary(pos)
            || !self.text.is_char_boundary(end)
        {
            return false;
        }
        self.text.replace_range(pos..end, "");
        if self.cursor >= end {
            self.cursor -= count;
        } else if self.cursor >= pos {
            self.cursor = pos;
        }
        self.clear_selection();
        self.dirty = true;
        true
    }

    /// Insert `text` at `pos`. A cursor at or after `pos` moves right with
    /// the inserted text and the selection collapses onto it.
    ///
    /// Returns false if `pos` is out of bounds or inside a character.
    pub fn insert_chars(&mut self, pos: usize, text: &str) -> bool {
        if pos > self.text.len() || !self.text.is_char_boundary(pos) {
            return false;
        }
        self.text.insert_str(pos, text);
        if self.cursor >= pos {
            self.cursor += text.len();
        }
        self.clear_selection();
        self.dirty = true;
        true
    }

    /// Remove the selected text, leaving the cursor where it started.
    pub fn delete_selection(&mut self) -> bool {
        if !self.has_selection() {
            return false;
        }
        let range = self.selection();
        self.cursor = range.start;
        self.delete_chars(range.start, range.end - range.start)
    }

    /// Type text at the cursor, replacing the selection. With `overwrite`
    /// the characters after the cursor are replaced one for one.
    pub fn type_str(&mut self, text: &str, overwrite: bool) {
        self.delete_selection();
        if overwrite {
            let replaced: usize = self.text[self.cursor..]
                .chars()
                .take(text.chars().count())
                .map(char::len_utf8)
                .sum();
            self.delete_chars(self.cursor, replaced);
        }
        self.insert_chars(self.cursor, text);
    }

    /// Delete the selection, or the grapheme before the cursor.
    pub fn backspace(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let start = self.prev_boundary(self.cursor);
        let count = self.cursor - start;
        count != 0 && self.delete_chars(start, count)
    }

    /// Delete the selection, or the grapheme after the cursor.
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let end = self.next_boundary(self.cursor);
        let count = end - self.cursor;
        count != 0 && self.delete_chars(self.cursor, count)
    }

    pub fn move_left(&mut self, select: bool) {
        if !select && self.has_selection() {
            self.cursor = self.selection().start;
            self.clear_selection();
            return;
        }
        let target = self.prev_boundary(self.cursor);
        self.move_to(target, select);
    }

    pub fn move_right(&mut self, select: bool) {
        if !select && self.has_selection() {
            self.cursor = self.selection().end;
            self.clear_selection();
            return;
        }
        let target = self.next_boundary(self.cursor);
        self.move_to(target, select);
    }

    pub fn move_home(&mut self, select: bool) {
        self.move_to(0, select);
    }

    pub fn move_end(&mut self, select: bool) {
        self.move_to(self.text.len(), select);
    }

    fn move_to(&mut self, target: usize, select: bool) {
        if select {
            if !self.has_selection() {
                self.selection_start = self.cursor;
            }
            self.cursor = target;
            self.selection_end = target;
        } else {
            self.cursor = target;
            self.clear_selection();
        }
    }

    /// Truncate the working text to `len` bytes (snapped to a boundary),
    /// pulling cursor and selection inside it.
    pub fn truncate(&mut self, len: usize) {
        let len = self.snap(len);
        if len < self.text.len() {
            self.text.truncate(len);
            self.cursor = self.cursor.min(len);
            self.selection_start = self.selection_start.min(len);
            self.selection_end = self.selection_end.min(len);
        }
    }

    /// Replace the whole text without marking it dirty, cursor at end.
    pub fn reset(&mut self, text: &str) {
        *self = Self::new(text);
    }

    fn snap(&self, pos: usize) -> usize {
        let mut pos = pos.min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        self.text[..pos]
            .grapheme_indices(true)
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self, pos: usize) -> usize {
        self.text[pos..]
            .graphemes(true)
            .next()
            .map_or(pos, |g| pos + g.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_puts_cursor_at_end() {
        let state = TextEditState::new("hello");
        assert_eq!(state.cursor(), 5);
        assert!(!state.has_selection());
        assert!(!state.is_dirty());
    }

    // ============================================
    // delete_chars / insert_chars cursor rules
    // ============================================

    #[test]
    fn test_delete_before_cursor_shifts_cursor() {
        let mut state = TextEditState::new("abcdef");
        assert!(state.delete_chars(0, 2));
        assert_eq!(state.text(), "cdef");
        assert_eq!(state.cursor(), 4);
        assert!(state.is_dirty());
    }

    #[test]
    fn test_delete_around_cursor_moves_to_pos() {
        let mut state = TextEditState::new("abcdef");
        state.set_cursor(3);
        assert!(state.delete_chars(1, 4));
        assert_eq!(state.text(), "af");
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_delete_whole_text_then_insert() {
        let mut state = TextEditState::new("ap");
        state.delete_chars(0, state.len());
        assert_eq!(state.cursor(), 0);
        state.insert_chars(0, "apple");
        assert_eq!(state.text(), "apple");
        assert_eq!(state.cursor(), 5);
    }

    #[test]
    fn test_insert_after_cursor_keeps_cursor() {
        let mut state = TextEditState::new("ab");
        state.set_cursor(1);
        state.insert_chars(2, "cd");
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.text(), "abcd");
    }

    #[test]
    fn test_rejects_split_characters() {
        let mut state = TextEditState::new("é");
        assert!(!state.delete_chars(1, 1));
        assert!(!state.insert_chars(1, "x"));
        assert!(!state.delete_chars(0, 9));
        assert!(!state.is_dirty());
    }

    // ============================================
    // Typing and navigation
    // ============================================

    #[test]
    fn test_type_replaces_selection() {
        let mut state = TextEditState::new("apple");
        state.set_cursor(2);
        state.set_selection(2, 5);
        state.type_str("r", false);
        assert_eq!(state.text(), "apr");
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn test_type_overwrite() {
        let mut state = TextEditState::new("abcd");
        state.set_cursor(1);
        state.clear_selection();
        state.type_str("XY", true);
        assert_eq!(state.text(), "aXYd");
    }

    #[test]
    fn test_backspace_removes_grapheme() {
        let mut state = TextEditState::new("ae\u{301}");
        assert!(state.backspace());
        assert_eq!(state.text(), "a");
        assert!(state.backspace());
        assert!(!state.backspace());
        assert!(state.is_empty());
    }

    #[test]
    fn test_backspace_reports_each_deletion() {
        let mut state = TextEditState::new("abc");
        assert!(state.backspace());
        assert_eq!(state.text(), "ab");
        assert_eq!(state.cursor(), 2);

        let mut state = TextEditState::new("");
        assert!(!state.backspace());
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_backspace_deletes_selection_first() {
        let mut state = TextEditState::new("apple");
        state.set_cursor(2);
        state.set_selection(2, 5);
        assert!(state.backspace());
        assert_eq!(state.text(), "ap");
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn test_delete_forward() {
        let mut state = TextEditState::new("abc");
        state.move_home(false);
        assert!(state.delete_forward());
        assert_eq!(state.text(), "bc");
        state.move_end(false);
        assert!(!state.delete_forward());
    }

    #[test]
    fn test_delete_forward_removes_grapheme() {
        let mut state = TextEditState::new("e\u{301}b");
        state.move_home(false);
        assert!(state.delete_forward());
        assert_eq!(state.text(), "b");
        assert_eq!(state.cursor(), 0);
        assert!(state.delete_forward());
        assert!(!state.delete_forward());
        assert!(state.is_empty());
    }

    #[test]
    fn test_shift_selection_and_collapse() {
        let mut state = TextEditState::new("hello");
        state.move_left(true);
        state.move_left(true);
        assert_eq!(state.selection(), 3..5);
        assert_eq!(state.selected_text(), "lo");
        state.move_left(false);
        assert_eq!(state.cursor(), 3);
        assert!(!state.has_selection());
    }

    #[test]
    fn test_select_all() {
        let mut state = TextEditState::new("abc");
        state.select_all();
        assert_eq!(state.selection(), 0..3);
        state.type_str("z", false);
        assert_eq!(state.text(), "z");
    }

    #[test]
    fn test_truncate_clamps_cursor_and_selection() {
        let mut state = TextEditState::new("xyz");
        state.set_selection(1, 3);
        state.truncate(2);
        assert_eq!(state.text(), "xy");
        assert_eq!(state.cursor(), 2);
        assert_eq!(state.selection(), 1..2);
    }

    #[test]
    fn test_take_dirty_resets() {
        let mut state = TextEditState::new("");
        state.insert_chars(0, "a");
        assert!(state.take_dirty());
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_event_names_and_state_access() {
        let mut state = TextEditState::new("x");
        let mut event = TextEvent::Always(&mut state);
        assert_eq!(event.name(), "always");
        assert!(event.state_mut().is_some());

        let mut req = ResizeRequest {
            text_len: 1,
            buf_size: 2,
        };
        let mut event = TextEvent::Resize(&mut req);
        assert_eq!(event.name(), "resize");
        assert!(event.state_mut().is_none());
    }
}
