//! Growable text storage handed to the fixed-capacity text widget.
//!
//! [`GrowableBuffer`] keeps a logical length separate from its zero-padded
//! backing storage. The widget only ever sees a byte slice whose last byte
//! is reserved for the terminating null; growth happens between widget
//! writes through the resize protocol in [`EditSession`](super::EditSession).
//!
//! # Invariants
//!
//! - `storage.len() >= len + 1`: there is always a writable null slot.
//! - After an edit event the logical text holds no padding nulls.

use std::borrow::Cow;

use crate::error::Result;

/// Caller-owned growable text value.
///
/// Equality compares the logical text only; spare capacity and stale bytes
/// past the null slot are ignored.
#[derive(Clone, Debug)]
pub struct GrowableBuffer {
    storage: Vec<u8>,
    len: usize,
}

impl Default for GrowableBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl GrowableBuffer {
    /// Create an empty buffer with room for the null slot only.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: vec![0],
            len: 0,
        }
    }

    /// Create an empty buffer that can hold `capacity` bytes of text
    /// without growing.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: vec![0; capacity + 1],
            len: 0,
        }
    }

    /// Create a buffer holding `text`.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let mut storage = Vec::with_capacity(text.len() + 1);
        storage.extend_from_slice(text.as_bytes());
        storage.push(0);
        Self {
            storage,
            len: text.len(),
        }
    }

    /// Logical length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes of text the storage holds before it must grow.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len() - 1
    }

    /// The logical text as bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    /// The logical text, if it is valid UTF-8.
    pub fn as_str(&self) -> Result<&str> {
        std::str::from_utf8(self.as_bytes()).map_err(|e| crate::Error::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })
    }

    /// The logical text with invalid sequences replaced.
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Consume the buffer into a `String`, failing on invalid UTF-8.
    pub fn try_into_string(mut self) -> Result<String> {
        self.storage.truncate(self.len);
        Ok(String::from_utf8(self.storage)?)
    }

    /// Consume the buffer into a `String`, replacing invalid sequences.
    #[must_use]
    pub fn into_string(mut self) -> String {
        self.storage.truncate(self.len);
        String::from_utf8(self.storage)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
    }

    /// Replace the whole text.
    pub fn set_text(&mut self, text: &str) {
        self.storage.clear();
        self.storage.extend_from_slice(text.as_bytes());
        self.storage.push(0);
        self.len = text.len();
    }

    /// Set the logical length, zero-padding on growth.
    ///
    /// Growth exposes padding nulls until the widget writes the new text
    /// over them; the edit event strips whatever it did not overwrite.
    pub fn resize(&mut self, new_len: usize) {
        if new_len > self.len {
            let end = self.storage.len().min(new_len + 1);
            self.storage[self.len..end].fill(0);
            if self.storage.len() < new_len + 1 {
                self.storage.resize(new_len + 1, 0);
            }
        }
        self.len = new_len;
        self.storage[new_len] = 0;
    }

    /// Make sure at least `total` bytes (text plus null slot) are writable.
    pub fn reserve_total(&mut self, total: usize) {
        if self.storage.len() < total {
            self.storage.resize(total, 0);
        }
    }

    /// Size of the byte window to grant the widget: `capacity + 1`, or
    /// `min(capacity + 1, max_size + 1)` when bounded.
    #[must_use]
    pub fn widget_size(&self, max_size: usize) -> usize {
        if max_size == 0 {
            self.storage.len()
        } else {
            self.storage.len().min(max_size + 1)
        }
    }

    /// The first `size` bytes of storage, for the widget to write into.
    ///
    /// `size` is clamped to the storage length.
    pub fn widget_bytes_mut(&mut self, size: usize) -> &mut [u8] {
        let size = size.min(self.storage.len());
        &mut self.storage[..size]
    }

    /// The first `size` bytes of storage as the widget sees them.
    #[must_use]
    pub fn widget_bytes(&self, size: usize) -> &[u8] {
        &self.storage[..size.min(self.storage.len())]
    }

    /// Cut the logical text at the first null byte. Returns the number of
    /// bytes dropped.
    pub fn strip_padding(&mut self) -> usize {
        let end = self.as_bytes().iter().position(|&b| b == 0).unwrap_or(self.len);
        let dropped = self.len - end;
        self.len = end;
        dropped
    }

    /// Truncate to at most `max` bytes without splitting a UTF-8 sequence.
    /// Returns true if anything was cut.
    pub fn truncate(&mut self, max: usize) -> bool {
        if self.len <= max {
            return false;
        }
        self.len = floor_char_boundary(self.as_bytes(), max);
        self.storage[self.len] = 0;
        true
    }
}

impl PartialEq for GrowableBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for GrowableBuffer {}

impl From<String> for GrowableBuffer {
    fn from(text: String) -> Self {
        let len = text.len();
        let mut storage = text.into_bytes();
        storage.push(0);
        Self { storage, len }
    }
}

impl From<&str> for GrowableBuffer {
    fn from(text: &str) -> Self {
        Self::with_text(text)
    }
}

/// Largest index `<= index` that does not fall inside a UTF-8 sequence.
#[must_use]
pub fn floor_char_boundary(bytes: &[u8], index: usize) -> usize {
    if index >= bytes.len() {
        return bytes.len();
    }
    let mut i = index;
    while i > 0 && (bytes[i] & 0xC0) == 0x80 {
        i -= 1;
    }
    i
}
