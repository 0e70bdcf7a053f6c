//! Growable-buffer bridge for the fixed-capacity text widget.
//!
//! The widget only understands a byte window of fixed size with a
//! terminating null. [`EditSession`] sits between that window and a
//! caller-owned [`GrowableBuffer`]: it grants the window, answers resize
//! requests (growing the buffer or clamping to `max_size`), normalizes the
//! buffer after every edit and forwards everything else to an optional
//! chained handler.
//!
//! ```
//! use imgui_modern::text::{EditSession, GrowableBuffer, Reply, ResizeRequest, TextEvent};
//!
//! let mut buffer = GrowableBuffer::with_text("xyz");
//! let mut session = EditSession::new(&mut buffer, 2, None);
//! let mut request = ResizeRequest { text_len: 3, buf_size: 4 };
//! assert_eq!(session.dispatch(TextEvent::Resize(&mut request)), Reply::Truncated);
//! assert_eq!(request.text_len, 2);
//! drop(session);
//! assert_eq!(buffer.as_bytes(), b"xy");
//! ```

use std::borrow::Cow;

use crate::event::{LogLevel, emit_log};
use crate::frame::TextWidget;

use super::buffer::GrowableBuffer;
use super::callback::{Reply, ResizeRequest, TextEvent};
use super::flags::InputTextFlags;

/// A chained event handler supplied by the caller.
pub type ChainCallback<'c> = &'c mut dyn FnMut(TextEvent<'_>) -> Reply;

/// Result of an edit call, layered over the widget's changed flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Change {
    #[default]
    NoChange,
    /// Content changed while the field is still being edited.
    Changed,
    /// The field lost focus after an edit: the value is committed.
    ChangedAndApplied,
}

impl Change {
    /// Combine the widget result with the deactivated-after-edit signal.
    #[must_use]
    pub fn from_result(result: bool, deactivated_after_edit: bool) -> Self {
        if deactivated_after_edit {
            Self::ChangedAndApplied
        } else if result {
            Self::Changed
        } else {
            Self::NoChange
        }
    }

    #[must_use]
    pub fn is_changed(self) -> bool {
        self != Self::NoChange
    }

    #[must_use]
    pub fn is_applied(self) -> bool {
        self == Self::ChangedAndApplied
    }
}

impl From<Change> for bool {
    fn from(change: Change) -> Self {
        change.is_changed()
    }
}

/// State of one widget call over a growable buffer.
pub struct EditSession<'b, 'c> {
    buffer: &'b mut GrowableBuffer,
    max_size: usize,
    buf_size: usize,
    chain: Option<ChainCallback<'c>>,
}

impl<'b, 'c> EditSession<'b, 'c> {
    /// Open a session over `buffer`. `max_size == 0` means unbounded.
    ///
    /// The granted window is `capacity + 1` bytes, or
    /// `min(capacity + 1, max_size + 1)` when bounded.
    pub fn new(
        buffer: &'b mut GrowableBuffer,
        max_size: usize,
        chain: Option<ChainCallback<'c>>,
    ) -> Self {
        let buf_size = buffer.widget_size(max_size);
        Self {
            buffer,
            max_size,
            buf_size,
            chain,
        }
    }

    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Size of the byte window the widget may write, null slot included.
    #[must_use]
    pub fn buf_size(&self) -> usize {
        self.buf_size
    }

    #[must_use]
    pub fn has_chain(&self) -> bool {
        self.chain.is_some()
    }

    /// The buffer under edit.
    #[must_use]
    pub fn buffer(&self) -> &GrowableBuffer {
        self.buffer
    }

    /// The granted window as the widget sees it.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.buffer.widget_bytes(self.buf_size)
    }

    /// The granted window for the widget to write into.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        self.buffer.widget_bytes_mut(self.buf_size)
    }

    /// The text the widget reads from its window: up to the first null,
    /// and never into the null slot.
    #[must_use]
    pub fn widget_text(&self) -> Cow<'_, str> {
        let window = self.bytes();
        let limit = window.len().saturating_sub(1);
        let end = window[..limit]
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(limit);
        String::from_utf8_lossy(&window[..end])
    }

    /// Handle one event from the widget.
    pub fn dispatch(&mut self, event: TextEvent<'_>) -> Reply {
        match event {
            TextEvent::Resize(request) => self.resize(request),
            TextEvent::Edit(state) => {
                self.normalize();
                self.forward(TextEvent::Edit(state))
            }
            other => self.forward(other),
        }
    }

    fn resize(&mut self, request: &mut ResizeRequest) -> Reply {
        if self.max_size != 0 && request.text_len > self.max_size {
            emit_log(
                LogLevel::Debug,
                &format!(
                    "text clamped to {} bytes ({} requested)",
                    self.max_size, request.text_len
                ),
            );
            request.text_len = self.max_size;
            request.buf_size = request.text_len + 1;
            self.buffer.resize(request.text_len);
            self.buf_size = request.buf_size;
            return Reply::Truncated;
        }
        self.buffer.resize(request.text_len);
        self.buffer.reserve_total(request.buf_size);
        self.buf_size = request.buf_size.max(request.text_len + 1);
        Reply::Consumed
    }

    /// Strip padding left by the widget and enforce the size bound.
    fn normalize(&mut self) {
        self.buffer.strip_padding();
        if self.max_size != 0 && self.buffer.truncate(self.max_size) {
            emit_log(
                LogLevel::Debug,
                &format!("edited text cut to {} bytes", self.max_size),
            );
        }
    }

    fn forward(&mut self, event: TextEvent<'_>) -> Reply {
        match self.chain.as_mut() {
            Some(chain) => chain(event),
            None => Reply::Ignored,
        }
    }
}

/// Whether a bridge call over a buffer of `len` bytes lets it grow.
#[must_use]
pub fn allows_growth(len: usize, max_size: usize) -> bool {
    max_size == 0 || len < max_size
}

/// Flags the bridge hands to the widget for a buffer of `len` bytes.
#[must_use]
pub fn bridge_flags(flags: InputTextFlags, len: usize, max_size: usize) -> InputTextFlags {
    debug_assert!(
        !flags.contains(InputTextFlags::CALLBACK_RESIZE),
        "CALLBACK_RESIZE is owned by the buffer bridge"
    );
    let mut flags = flags - InputTextFlags::CALLBACK_RESIZE;
    if allows_growth(len, max_size) {
        flags |= InputTextFlags::CALLBACK_RESIZE;
    }
    flags | InputTextFlags::CALLBACK_EDIT
}

/// Edit `buffer` through the fixed-capacity widget. Returns the widget's
/// result (changed, or Enter pressed under `ENTER_RETURNS_TRUE`).
pub fn input_text_buffer<U: TextWidget + ?Sized>(
    ui: &mut U,
    label: &str,
    buffer: &mut GrowableBuffer,
    flags: InputTextFlags,
    max_size: usize,
    chain: Option<ChainCallback<'_>>,
) -> bool {
    let flags = bridge_flags(flags, buffer.len(), max_size);
    let mut session = EditSession::new(buffer, max_size, chain);
    ui.input_text_raw(label, &mut session, flags)
}

/// Edit a `String` through the fixed-capacity widget.
pub fn input_text_with<U: TextWidget + ?Sized>(
    ui: &mut U,
    label: &str,
    value: &mut String,
    flags: InputTextFlags,
    max_size: usize,
    chain: Option<ChainCallback<'_>>,
) -> Change {
    let mut buffer = GrowableBuffer::from(std::mem::take(value));
    let result = input_text_buffer(ui, label, &mut buffer, flags, max_size, chain);
    *value = buffer.into_string();
    Change::from_result(result, ui.is_item_deactivated_after_edit())
}
