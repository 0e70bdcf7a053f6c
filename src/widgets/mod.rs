//! Composite widgets built on the frame context traits.
//!
//! - [`panel`]: bordered group with a notched label
//! - [`text_input_combo`]: text field with type-ahead and a drop-down list
//! - [`input_text`]: labelled text field
//! - layout helpers: label columns, wrapping, right-aligned text, toolbars

mod combo;
mod input;
mod layout;
mod panel;

pub use combo::{COMBO_POPUP, text_input_combo};
pub use input::input_text;
pub use layout::{
    VALUE_COLUMN_FRACT, help_marker, remaining_x, text_right, value_column, vertical_toolbar,
    wrap_if_no_room_for, wrap_if_no_room_for_label,
};
pub use panel::{ClipQuad, PanelFrame, PanelStack, begin_panel, end_panel, panel};
