//! Scoped begin/end pairs.
//!
//! A [`ScopeGuard`] makes one begin call and performs the matching end call
//! when dropped, on every exit path. It dereferences to the context so the
//! scope body keeps drawing through it:
//!
//! ```
//! use imgui_modern::frame::{FrameContext, ScopeGuard};
//! use imgui_modern::headless::HeadlessUi;
//!
//! let mut ui = HeadlessUi::default();
//! ui.new_frame();
//! {
//!     let mut group = ScopeGuard::group(&mut ui);
//!     group.text("inside");
//!     assert_eq!(group.group_depth(), 1);
//! }
//! assert_eq!(ui.group_depth(), 0);
//! ```

use std::ops::{Deref, DerefMut};

use crate::geometry::Vec2;
use crate::style::StyleVar;

use super::{Ui, WindowFlags};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Release {
    Group,
    ClipRect,
    ItemWidth,
    Id,
    StyleVar,
    Indent(f32),
    Popup,
}

/// Guard that ends a scope on drop.
pub struct ScopeGuard<'a, U: Ui + ?Sized> {
    ui: &'a mut U,
    release: Release,
}

impl<'a, U: Ui + ?Sized> ScopeGuard<'a, U> {
    fn new(ui: &'a mut U, release: Release) -> Self {
        Self { ui, release }
    }

    /// `begin_group` / `end_group`.
    pub fn group(ui: &'a mut U) -> Self {
        ui.begin_group();
        Self::new(ui, Release::Group)
    }

    /// `push_clip_rect` / `pop_clip_rect`.
    pub fn clip_rect(ui: &'a mut U, min: Vec2, max: Vec2, intersect: bool) -> Self {
        ui.push_clip_rect(min, max, intersect);
        Self::new(ui, Release::ClipRect)
    }

    /// `push_item_width` / `pop_item_width`.
    pub fn item_width(ui: &'a mut U, width: f32) -> Self {
        ui.push_item_width(width);
        Self::new(ui, Release::ItemWidth)
    }

    /// `push_id` / `pop_id`.
    pub fn id(ui: &'a mut U, label: &str) -> Self {
        ui.push_id(label);
        Self::new(ui, Release::Id)
    }

    /// `push_style_var` / `pop_style_var(1)`.
    pub fn style_var(ui: &'a mut U, var: StyleVar) -> Self {
        ui.push_style_var(var);
        Self::new(ui, Release::StyleVar)
    }

    /// `indent` / `unindent` by the same width.
    pub fn indent(ui: &'a mut U, width: f32) -> Self {
        ui.indent(width);
        Self::new(ui, Release::Indent(width))
    }

    /// `begin_popup` / `end_popup`. Returns `None` when the popup is not
    /// open, in which case there is nothing to end.
    pub fn popup(ui: &'a mut U, name: &str, flags: WindowFlags) -> Option<Self> {
        if ui.begin_popup(name, flags) {
            Some(Self::new(ui, Release::Popup))
        } else {
            None
        }
    }
}

impl<U: Ui + ?Sized> Deref for ScopeGuard<'_, U> {
    type Target = U;

    fn deref(&self) -> &U {
        self.ui
    }
}

impl<U: Ui + ?Sized> DerefMut for ScopeGuard<'_, U> {
    fn deref_mut(&mut self) -> &mut U {
        self.ui
    }
}

impl<U: Ui + ?Sized> Drop for ScopeGuard<'_, U> {
    fn drop(&mut self) {
        match self.release {
            Release::Group => self.ui.end_group(),
            Release::ClipRect => self.ui.pop_clip_rect(),
            Release::ItemWidth => self.ui.pop_item_width(),
            Release::Id => self.ui.pop_id(),
            Release::StyleVar => self.ui.pop_style_var(1),
            Release::Indent(width) => self.ui.unindent(width),
            Release::Popup => self.ui.end_popup(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)] // Exact float comparison is intentional in tests
    use super::*;
    use crate::frame::FrameContext;
    use crate::headless::HeadlessUi;

    fn frame() -> HeadlessUi {
        let mut ui = HeadlessUi::default();
        ui.new_frame();
        ui
    }

    #[test]
    fn test_clip_rect_restored_on_drop() {
        let mut ui = frame();
        let before = ui.clip_rect();
        {
            let guard =
                ScopeGuard::clip_rect(&mut ui, Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0), true);
            assert_eq!(guard.clip_rect().max, Vec2::new(20.0, 20.0));
        }
        assert_eq!(ui.clip_rect(), before);
    }

    #[test]
    fn test_style_var_restored_on_drop() {
        let mut ui = frame();
        {
            let guard = ScopeGuard::style_var(&mut ui, StyleVar::ItemSpacing(Vec2::ZERO));
            assert_eq!(guard.style().item_spacing, Vec2::ZERO);
        }
        assert_eq!(ui.style().item_spacing, Vec2::new(8.0, 4.0));
    }

    #[test]
    fn test_item_width_and_indent() {
        let mut ui = frame();
        let indent = ui.indent_x();
        {
            let mut guard = ScopeGuard::indent(&mut ui, 0.0);
            assert_eq!(guard.indent_x(), indent + 21.0);
            let guard = ScopeGuard::item_width(&mut *guard, 50.0);
            assert_eq!(guard.calc_item_width(), 50.0);
        }
        assert_eq!(ui.indent_x(), indent);
        assert_ne!(ui.calc_item_width(), 50.0);
    }

    #[test]
    fn test_id_scope_changes_ids() {
        let mut ui = frame();
        let outside = ui.get_id("field");
        {
            let guard = ScopeGuard::id(&mut ui, "row");
            assert_ne!(guard.get_id("field"), outside);
        }
        assert_eq!(ui.get_id("field"), outside);
    }

    #[test]
    fn test_closed_popup_yields_no_guard() {
        let mut ui = frame();
        assert!(ScopeGuard::popup(&mut ui, "menu", WindowFlags::empty()).is_none());
        ui.open_popup("menu");
        let popup = ScopeGuard::popup(&mut ui, "menu", WindowFlags::empty());
        assert!(popup.is_some());
        drop(popup);
        assert!(ui.end_frame().is_balanced());
    }
}
