//! Style metrics and color palette.
//!
//! This module provides the values widgets read from the frame context:
//!
//! - [`StyleMetrics`]: spacing, padding and font metrics
//! - [`StyleVar`]: a single metric override pushed for a scope
//! - [`StyleColor`] / [`Palette`]: named color slots
//!
//! # Examples
//!
//! ```
//! use imgui_modern::style::{StyleMetrics, StyleVar};
//! use imgui_modern::Vec2;
//!
//! let mut style = StyleMetrics::default();
//! assert_eq!(style.frame_height(), 13.0 + 2.0 * 3.0);
//!
//! let previous = style.apply(StyleVar::FramePadding(Vec2::ZERO));
//! assert_eq!(style.frame_height(), 13.0);
//! style.apply(previous);
//! ```

use crate::color::Rgba;
use crate::geometry::Vec2;

/// Layout metrics shared by every widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleMetrics {
    /// Padding between the window border and its contents.
    pub window_padding: Vec2,
    /// Padding inside framed widgets (text fields, buttons).
    pub frame_padding: Vec2,
    /// Corner radius of framed widgets.
    pub frame_rounding: f32,
    /// Gap between consecutive items.
    pub item_spacing: Vec2,
    /// Gap between elements of one composite widget.
    pub item_inner_spacing: Vec2,
    /// Horizontal indent applied by `indent(0.0)`.
    pub indent_spacing: f32,
    /// Height of one text line.
    pub font_size: f32,
}

impl Default for StyleMetrics {
    fn default() -> Self {
        Self {
            window_padding: Vec2::new(8.0, 8.0),
            frame_padding: Vec2::new(4.0, 3.0),
            frame_rounding: 0.0,
            item_spacing: Vec2::new(8.0, 4.0),
            item_inner_spacing: Vec2::new(4.0, 4.0),
            indent_spacing: 21.0,
            font_size: 13.0,
        }
    }
}

impl StyleMetrics {
    /// Height of a framed widget: one text line plus vertical frame padding.
    #[must_use]
    pub fn frame_height(&self) -> f32 {
        self.font_size + self.frame_padding.y * 2.0
    }

    /// Height of a framed widget plus the vertical item spacing after it.
    #[must_use]
    pub fn frame_height_with_spacing(&self) -> f32 {
        self.frame_height() + self.item_spacing.y
    }

    /// Apply an override and return the value it replaced, so the caller
    /// can restore it by applying the returned var.
    pub fn apply(&mut self, var: StyleVar) -> StyleVar {
        match var {
            StyleVar::WindowPadding(v) => {
                StyleVar::WindowPadding(std::mem::replace(&mut self.window_padding, v))
            }
            StyleVar::FramePadding(v) => {
                StyleVar::FramePadding(std::mem::replace(&mut self.frame_padding, v))
            }
            StyleVar::FrameRounding(v) => {
                StyleVar::FrameRounding(std::mem::replace(&mut self.frame_rounding, v))
            }
            StyleVar::ItemSpacing(v) => {
                StyleVar::ItemSpacing(std::mem::replace(&mut self.item_spacing, v))
            }
            StyleVar::ItemInnerSpacing(v) => {
                StyleVar::ItemInnerSpacing(std::mem::replace(&mut self.item_inner_spacing, v))
            }
            StyleVar::IndentSpacing(v) => {
                StyleVar::IndentSpacing(std::mem::replace(&mut self.indent_spacing, v))
            }
        }
    }
}

/// A single style metric override.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleVar {
    WindowPadding(Vec2),
    FramePadding(Vec2),
    FrameRounding(f32),
    ItemSpacing(Vec2),
    ItemInnerSpacing(Vec2),
    IndentSpacing(f32),
}

/// Named color slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleColor {
    Text,
    TextDisabled,
    Border,
    FrameBg,
    PopupBg,
}

/// Colors for every [`StyleColor`] slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub text: Rgba,
    pub text_disabled: Rgba,
    pub border: Rgba,
    pub frame_bg: Rgba,
    pub popup_bg: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: Rgba::WHITE,
            text_disabled: Rgba::rgb(0.5, 0.5, 0.5),
            border: Rgba::new(0.43, 0.43, 0.5, 0.5),
            frame_bg: Rgba::new(0.16, 0.29, 0.48, 0.54),
            popup_bg: Rgba::new(0.08, 0.08, 0.08, 0.94),
        }
    }
}

impl Palette {
    #[must_use]
    pub fn get(&self, slot: StyleColor) -> Rgba {
        match slot {
            StyleColor::Text => self.text,
            StyleColor::TextDisabled => self.text_disabled,
            StyleColor::Border => self.border,
            StyleColor::FrameBg => self.frame_bg,
            StyleColor::PopupBg => self.popup_bg,
        }
    }

    /// Replace one slot and return the previous color.
    pub fn set(&mut self, slot: StyleColor, color: Rgba) -> Rgba {
        let target = match slot {
            StyleColor::Text => &mut self.text,
            StyleColor::TextDisabled => &mut self.text_disabled,
            StyleColor::Border => &mut self.border,
            StyleColor::FrameBg => &mut self.frame_bg,
            StyleColor::PopupBg => &mut self.popup_bg,
        };
        std::mem::replace(target, color)
    }
}
