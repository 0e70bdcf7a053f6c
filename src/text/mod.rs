//! Text editing through the fixed-capacity widget.
//!
//! The toolkit's text field edits a caller-supplied byte window of fixed
//! size. This module lets callers edit an arbitrarily growable value
//! through it and adds live type-ahead completion on top.
//!
//! Key types:
//!
//! - [`GrowableBuffer`]: zero-padded storage with a logical length
//! - [`EditSession`]: one widget call over a buffer, answering the widget's events
//! - [`TextEvent`] / [`Reply`]: the event protocol between widget and bridge
//! - [`TextEditState`]: the widget-side working text, cursor and selection
//!
//! # Examples
//!
//! ```
//! use imgui_modern::text::{TextEditState, propose};
//!
//! let mut state = TextEditState::new("ap");
//! propose(&mut state, &["banana", "apple", "apricot"]);
//! assert_eq!(state.text(), "apple");
//! assert_eq!(state.cursor(), 2);
//! assert_eq!(state.selection(), 2..5);
//! ```

mod autocomplete;
mod bridge;
mod buffer;
mod callback;
mod flags;

pub use autocomplete::{autocomplete_callback, propose};
pub use bridge::{
    Change, ChainCallback, EditSession, allows_growth, bridge_flags, input_text_buffer,
    input_text_with,
};
pub use buffer::{GrowableBuffer, floor_char_boundary};
pub use callback::{HistoryDirection, Reply, ResizeRequest, TextEditState, TextEvent};
pub use flags::InputTextFlags;
