//! Small layout helpers: label columns, wrapping, right alignment.

use crate::frame::{FrameContext, Ui};
use crate::id::display_text;

/// Share of the remaining width given to the label column by default.
pub const VALUE_COLUMN_FRACT: f32 = 0.15;

/// Horizontal space left on the current line.
pub fn remaining_x<U: FrameContext + ?Sized>(ui: &U) -> f32 {
    ui.content_region_max().x - ui.cursor_pos().x
}

/// Draw `label` as a column in front of a widget: the label text, an
/// optional help marker, then the cursor moved to `fract` of the width
/// that was remaining. Labels with no visible text draw nothing.
pub fn value_column<U: Ui + ?Sized>(ui: &mut U, label: &str, desc: &str, fract: f32) {
    let shown = display_text(label);
    if shown.is_empty() {
        return;
    }

    let rx = remaining_x(ui);
    ui.text(shown);
    if !desc.is_empty() {
        if ui.is_item_hovered() {
            ui.set_tooltip(desc);
        }
        ui.same_line(0.0, -1.0);
        help_marker(ui, desc);
    }
    let indent = ui.indent_x();
    ui.same_line(rx * fract + indent, -1.0);
}

/// A dimmed "(?)" that shows `desc` when hovered.
pub fn help_marker<U: Ui + ?Sized>(ui: &mut U, desc: &str) {
    ui.text_disabled("(?)");
    if ui.is_item_hovered() {
        ui.set_tooltip(desc);
    }
}

/// Continue the current line if at least `min_width` fits on it, else
/// start a new one. Returns true if the line continues.
pub fn wrap_if_no_room_for<U: FrameContext + ?Sized>(ui: &mut U, min_width: f32) -> bool {
    let next_x = ui.same_line_x();
    let max_x = ui.content_region_max().x;
    if next_x > max_x - min_width {
        if ui.is_same_line() {
            ui.new_line();
        }
        return false;
    }
    if !ui.is_same_line() {
        ui.same_line(next_x, -1.0);
    }
    true
}

/// [`wrap_if_no_room_for`] sized for a framed widget labelled `label`,
/// plus `extra`.
pub fn wrap_if_no_room_for_label<U: FrameContext + ?Sized>(
    ui: &mut U,
    label: &str,
    extra: f32,
) -> bool {
    let style = *ui.style();
    let width = ui.calc_text_size(display_text(label)).x
        + style.item_spacing.x
        + style.frame_padding.x * 2.0
        + extra;
    wrap_if_no_room_for(ui, width)
}

/// Draw `text` flush with the right edge of the content region.
pub fn text_right<U: FrameContext + ?Sized>(ui: &mut U, text: &str) {
    let width = ui.calc_text_size(text).x;
    let x = ui.content_region_max().x - (width + ui.style().item_spacing.x);
    ui.set_cursor_pos_x(x);
    ui.text(text);
}

/// A column of selectables, one per `(tooltip, label)` pair. Returns true
/// when the selection changed.
pub fn vertical_toolbar<U: Ui + ?Sized>(
    ui: &mut U,
    items: &[(&str, &str)],
    index: &mut usize,
) -> bool {
    let mut changed = false;
    for (i, (tooltip, label)) in items.iter().enumerate() {
        if ui.selectable(label, i == *index) {
            *index = i;
            changed = true;
        }
        if ui.is_item_hovered() {
            ui.set_tooltip(tooltip);
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)] // Exact float comparison is intentional in tests
    use super::*;
    use crate::geometry::Vec2;
    use crate::headless::{HeadlessOptions, HeadlessUi};

    fn frame() -> HeadlessUi {
        let mut ui = HeadlessUi::default();
        ui.new_frame();
        ui
    }

    #[test]
    fn test_remaining_x_from_window_start() {
        let ui = frame();
        // 800 wide, 8 padding each side.
        assert_eq!(remaining_x(&ui), 784.0);
    }

    #[test]
    fn test_value_column_places_cursor() {
        let mut ui = frame();
        value_column(&mut ui, "Name", "", VALUE_COLUMN_FRACT);
        assert!(ui.is_same_line());
        assert_eq!(ui.cursor_pos().x, 784.0 * 0.15 + 8.0);
    }

    #[test]
    fn test_value_column_skips_hidden_labels() {
        let mut ui = frame();
        let before = ui.cursor_pos();
        value_column(&mut ui, "##in", "", VALUE_COLUMN_FRACT);
        assert_eq!(ui.cursor_pos(), before);
        assert!(ui.end_frame().items.is_empty());
    }

    #[test]
    fn test_value_column_with_help_marker() {
        let mut ui = frame();
        value_column(&mut ui, "Speed", "units per second", VALUE_COLUMN_FRACT);
        let out = ui.end_frame();
        let labels: Vec<_> = out.items.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, ["Speed", "(?)"]);
    }

    #[test]
    fn test_wrap_continues_when_room() {
        let mut ui = frame();
        ui.text("abc");
        assert!(wrap_if_no_room_for(&mut ui, 50.0));
        assert!(ui.is_same_line());
        // 8 padding + 21 text + 8 spacing
        assert_eq!(ui.cursor_pos().x, 37.0);
    }

    #[test]
    fn test_wrap_breaks_line_when_full() {
        let mut ui = HeadlessUi::new(HeadlessOptions {
            display_size: Vec2::new(100.0, 100.0),
            ..HeadlessOptions::default()
        });
        ui.new_frame();
        ui.text("abcdefghij");
        ui.same_line(0.0, -1.0);
        assert!(!wrap_if_no_room_for_label(&mut ui, "Button", 0.0));
        assert!(!ui.is_same_line());
        assert_eq!(ui.cursor_pos().x, 8.0);
    }

    #[test]
    fn test_text_right_aligns() {
        let mut ui = frame();
        text_right(&mut ui, "end");
        let out = ui.end_frame();
        let rect = out.items[0].rect;
        // 792 content edge, minus 8 spacing.
        assert_eq!(rect.max.x, 784.0);
    }

    #[test]
    fn test_vertical_toolbar_selects_clicked() {
        let items = [("Move tool", "Move"), ("Scale tool", "Scale")];
        let mut index = 0;
        let mut ui = HeadlessUi::default();
        ui.new_frame();
        assert!(!vertical_toolbar(&mut ui, &items, &mut index));
        ui.end_frame();
        assert!(ui.click_label("Scale"));
        ui.new_frame();
        assert!(vertical_toolbar(&mut ui, &items, &mut index));
        assert_eq!(index, 1);
        let out = ui.end_frame();
        assert_eq!(out.tooltip.as_deref(), Some("Scale tool"));
    }
}
