//! The active text field: key handling, widget events, apply to the window.

use crate::event::{LogLevel, emit_log};
use crate::id::Id;
use crate::input::{KeyCode, KeyEvent};
use crate::text::{
    EditSession, HistoryDirection, InputTextFlags, Reply, ResizeRequest, TextEditState, TextEvent,
    floor_char_boundary,
};

/// Editing state of the focused field, kept across frames.
#[derive(Clone, Debug)]
pub(crate) struct ActiveField {
    pub(crate) id: Id,
    pub(crate) state: TextEditState,
    /// Text when the field was activated, restored by Esc.
    initial: String,
    /// Whether the content changed since activation.
    pub(crate) edited: bool,
}

/// How a field left the active state this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Exit {
    /// Enter pressed.
    Commit,
    /// Esc pressed: the text was reverted.
    Cancel,
}

/// Result of one frame of an active field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct FieldFrame {
    pub(crate) value_changed: bool,
    pub(crate) enter_pressed: bool,
    pub(crate) exit: Option<Exit>,
}

impl ActiveField {
    /// Activate field `id` over the text currently in its window.
    pub(crate) fn activate(id: Id, session: &EditSession<'_, '_>, flags: InputTextFlags) -> Self {
        let text = session.widget_text().into_owned();
        let mut state = TextEditState::new(text.as_str());
        if flags.contains(InputTextFlags::AUTO_SELECT_ALL) {
            state.select_all();
        }
        Self {
            id,
            state,
            initial: text,
            edited: false,
        }
    }

    /// Run one frame: consume `keys`, raise the events `flags` ask for
    /// and write changed text back into the session's window.
    pub(crate) fn run(
        &mut self,
        keys: impl IntoIterator<Item = KeyEvent>,
        session: &mut EditSession<'_, '_>,
        flags: InputTextFlags,
    ) -> FieldFrame {
        let mut frame = FieldFrame::default();
        let read_only = flags.contains(InputTextFlags::READ_ONLY);

        // The window may have been changed by the caller since last frame.
        if !self.edited && self.state.text() != session.widget_text() {
            self.state.reset(&session.widget_text());
        }

        for key in keys {
            match key.code {
                KeyCode::Enter => {
                    frame.enter_pressed = true;
                    frame.exit = Some(Exit::Commit);
                    break;
                }
                KeyCode::Esc => {
                    let initial = std::mem::take(&mut self.initial);
                    self.state.reset(&initial);
                    self.initial = initial;
                    frame.exit = Some(Exit::Cancel);
                    break;
                }
                _ if read_only && !key.code.is_navigation() => {}
                _ => self.key(key, session, flags),
            }
        }

        if frame.exit.is_none() && flags.contains(InputTextFlags::CALLBACK_ALWAYS) {
            self.state.take_dirty();
            session.dispatch(TextEvent::Always(&mut self.state));
        }

        if !read_only && self.apply(session, flags) {
            frame.value_changed = true;
            if flags.contains(InputTextFlags::CALLBACK_EDIT) {
                self.state.take_dirty();
                session.dispatch(TextEvent::Edit(&mut self.state));
                if self.state.take_dirty() {
                    self.apply(session, flags);
                }
            }
        }

        if frame.value_changed && frame.exit != Some(Exit::Cancel) {
            self.edited = true;
        }
        frame
    }

    fn key(&mut self, key: KeyEvent, session: &mut EditSession<'_, '_>, flags: InputTextFlags) {
        let state = &mut self.state;
        match key.code {
            KeyCode::Char(_) if key.is_select_all() => state.select_all(),
            KeyCode::Char(_) if key.ctrl() => {}
            KeyCode::Char(c) => insert_char(state, c, session, flags),
            KeyCode::Tab if flags.contains(InputTextFlags::ALLOW_TAB_INPUT) => {
                insert_char(state, '\t', session, flags);
            }
            KeyCode::Tab => {
                if flags.contains(InputTextFlags::CALLBACK_COMPLETION) {
                    session.dispatch(TextEvent::Completion(state));
                }
            }
            KeyCode::Backspace => {
                state.backspace();
            }
            KeyCode::Delete => {
                state.delete_forward();
            }
            KeyCode::Left => state.move_left(key.shift()),
            KeyCode::Right => state.move_right(key.shift()),
            KeyCode::Home => state.move_home(key.shift()),
            KeyCode::End => state.move_end(key.shift()),
            KeyCode::Up | KeyCode::Down => {
                if flags.contains(InputTextFlags::CALLBACK_HISTORY) {
                    let dir = if key.code == KeyCode::Up {
                        HistoryDirection::Up
                    } else {
                        HistoryDirection::Down
                    };
                    session.dispatch(TextEvent::History(state, dir));
                }
            }
            KeyCode::Enter | KeyCode::Esc => {}
        }
    }

    /// Copy the working text into the window if it differs. Returns true
    /// if anything was written.
    fn apply(&mut self, session: &mut EditSession<'_, '_>, flags: InputTextFlags) -> bool {
        if self.state.text() == session.widget_text() {
            return false;
        }

        let mut text_len = self.state.len();
        if flags.contains(InputTextFlags::CALLBACK_RESIZE) {
            let mut request = ResizeRequest {
                text_len,
                buf_size: session.buf_size().max(text_len + 1),
            };
            if session.dispatch(TextEvent::Resize(&mut request)) == Reply::Truncated {
                emit_log(
                    LogLevel::Debug,
                    &format!("text field {:08x} clamped to {} bytes", self.id.0, request.text_len),
                );
            }
            text_len = request.text_len;
        }

        let window = session.bytes_mut();
        let Some(room) = window.len().checked_sub(1) else {
            return false;
        };
        let bytes = self.state.text().as_bytes();
        let len = floor_char_boundary(bytes, text_len.min(room));
        window[..len].copy_from_slice(&bytes[..len]);
        window[len] = 0;
        self.state.truncate(len);
        true
    }
}

fn insert_char(
    state: &mut TextEditState,
    c: char,
    session: &mut EditSession<'_, '_>,
    flags: InputTextFlags,
) {
    let Some(mut c) = flags.filter_char(c) else {
        return;
    };
    if flags.contains(InputTextFlags::CALLBACK_CHAR_FILTER)
        && session.dispatch(TextEvent::CharFilter(&mut c)) == Reply::Consumed
    {
        return;
    }
    let mut utf8 = [0; 4];
    state.type_str(c.encode_utf8(&mut utf8), flags.contains(InputTextFlags::ALWAYS_OVERWRITE));
}
