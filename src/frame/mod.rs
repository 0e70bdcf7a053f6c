//! The frame context widgets are written against.
//!
//! An immediate-mode toolkit owns the layout cursor, style, clip stack and
//! draw lists of the frame being built. The helpers in this crate only need
//! a narrow slice of that, expressed as three traits:
//!
//! - [`FrameContext`]: layout cursor, groups, style, clip stack, drawing, ids
//! - [`TextWidget`]: the fixed-capacity text field
//! - [`Ui`]: popups and the small widgets the composers use
//!
//! [`HeadlessUi`](crate::headless::HeadlessUi) implements all three off-screen.
//!
//! Positions are screen space unless a method says "local", in which case
//! they are relative to the current window's origin.

mod clip;
mod scope;
mod state;

pub use clip::ClipStack;
pub use scope::ScopeGuard;
pub use state::WidgetState;

use bitflags::bitflags;

use crate::color::Rgba;
use crate::geometry::{Rect, Vec2};
use crate::id::Id;
use crate::style::{StyleColor, StyleMetrics, StyleVar};
use crate::text::{EditSession, InputTextFlags};

bitflags! {
    /// Window behavior flags, as accepted by `begin_popup`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct WindowFlags: u32 {
        const NO_TITLE_BAR = 1 << 0;
        const NO_RESIZE    = 1 << 1;
        const NO_MOVE      = 1 << 2;
        const NO_SCROLLBAR = 1 << 3;
    }
}

/// Arrow direction for `arrow_button`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Layout, style, clipping and identity of the frame being built.
pub trait FrameContext {
    // Cursor and content region

    /// Where the next item will be placed.
    fn cursor_screen_pos(&self) -> Vec2;
    fn set_cursor_screen_pos(&mut self, pos: Vec2);
    /// Cursor relative to the window origin.
    fn cursor_pos(&self) -> Vec2;
    fn set_cursor_pos_x(&mut self, x: f32);
    /// Right/bottom edge of the content region, window-local.
    fn content_region_max(&self) -> Vec2;
    /// Space left between the cursor and the content region edge.
    fn content_region_avail(&self) -> Vec2;
    /// Window-local x at which an item placed with `same_line(0.0, -1.0)`
    /// would start.
    fn same_line_x(&self) -> f32;
    /// Whether the previous call was `same_line`.
    fn is_same_line(&self) -> bool;

    // Style

    fn style(&self) -> &StyleMetrics;
    fn style_color(&self, slot: StyleColor) -> Rgba;
    fn push_style_var(&mut self, var: StyleVar);
    fn pop_style_var(&mut self, count: usize);

    fn frame_height(&self) -> f32 {
        self.style().frame_height()
    }

    fn font_size(&self) -> f32 {
        self.style().font_size
    }

    // Layout

    fn begin_group(&mut self);
    fn end_group(&mut self);
    /// Number of groups open in the current window.
    fn group_depth(&self) -> usize;
    /// Reserve an empty item of `size`.
    fn dummy(&mut self, size: Vec2);
    /// Keep the next item on the current line. A non-zero
    /// `offset_from_start_x` places it at that window-local x; a negative
    /// `spacing` means the style's item spacing.
    fn same_line(&mut self, offset_from_start_x: f32, spacing: f32);
    fn new_line(&mut self);
    /// Current indent, window-local.
    fn indent_x(&self) -> f32;
    /// Indent by `width`, or by the style's indent spacing if zero.
    fn indent(&mut self, width: f32);
    fn unindent(&mut self, width: f32);

    // Items

    fn text(&mut self, text: &str);
    fn text_disabled(&mut self, text: &str);
    /// Size of `text` as `text` would lay it out, measured literally.
    fn calc_text_size(&self, text: &str) -> Vec2;
    /// Bounding rectangle of the last item (groups count as items).
    fn item_rect(&self) -> Rect;
    /// Width the next framed widget will get.
    fn calc_item_width(&self) -> f32;
    fn push_item_width(&mut self, width: f32);
    fn pop_item_width(&mut self);
    fn set_next_item_width(&mut self, width: f32);

    // Clipping and drawing

    /// Push a clip rectangle, intersected with the current one unless
    /// `intersect` is false.
    fn push_clip_rect(&mut self, min: Vec2, max: Vec2, intersect: bool);
    fn pop_clip_rect(&mut self);
    fn clip_rect(&self) -> Rect;
    /// Draw a rectangle outline in the current window, clipped.
    fn add_rect(&mut self, min: Vec2, max: Vec2, color: Rgba, rounding: f32);
    /// Move the right edge of the current window's work rect left by
    /// `amount` (right for negative values).
    fn inset_content_right(&mut self, amount: f32);

    // Identity and per-context state

    fn push_id(&mut self, label: &str);
    fn pop_id(&mut self);
    /// Id of `label` under the current id stack.
    fn get_id(&self, label: &str) -> Id;
    /// State the helpers keep across frames.
    fn widget_state(&mut self) -> &mut WidgetState;
}

/// The fixed-capacity text field.
pub trait TextWidget {
    /// Run the text field over the window granted by `session`.
    ///
    /// Raises `Resize` on every apply when `flags` has `CALLBACK_RESIZE`,
    /// `Edit` after every content change when it has `CALLBACK_EDIT`, and
    /// the other events per their flags. Returns true when Enter was
    /// pressed under `ENTER_RETURNS_TRUE`, otherwise when the content
    /// changed.
    fn input_text_raw(
        &mut self,
        label: &str,
        session: &mut EditSession<'_, '_>,
        flags: InputTextFlags,
    ) -> bool;

    /// Whether the last item just lost focus after being edited.
    fn is_item_deactivated_after_edit(&self) -> bool;
}

/// A full frame context: layout, text fields, popups and basic widgets.
pub trait Ui: FrameContext + TextWidget {
    fn open_popup(&mut self, name: &str);
    /// Open the popup when the last item is right-clicked.
    fn open_popup_on_item_click(&mut self, name: &str);
    fn is_popup_open(&self, name: &str) -> bool;
    /// Begin the popup window if it is open. Only call `end_popup` if this
    /// returned true.
    fn begin_popup(&mut self, name: &str, flags: WindowFlags) -> bool;
    fn end_popup(&mut self);
    fn close_current_popup(&mut self);
    fn set_next_window_pos(&mut self, pos: Vec2);
    fn set_next_window_size(&mut self, size: Vec2);

    fn button(&mut self, label: &str) -> bool;
    fn arrow_button(&mut self, label: &str, dir: Direction) -> bool;
    fn selectable(&mut self, label: &str, selected: bool) -> bool;
    fn separator(&mut self);

    fn is_item_hovered(&self) -> bool;
    fn set_tooltip(&mut self, text: &str);
}
