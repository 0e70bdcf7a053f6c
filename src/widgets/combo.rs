//! Type-ahead combo box.
//!
//! A text field with live completion against a candidate list, plus an
//! arrow button (or right-click) that opens the full list in a popup.

use crate::frame::{Direction, FrameContext, ScopeGuard, Ui, WindowFlags};
use crate::geometry::Vec2;
use crate::text::{InputTextFlags, autocomplete_callback, input_text_with};

use super::input::input_text;
use super::layout::{VALUE_COLUMN_FRACT, value_column};

/// Name of the list popup, scoped under the combo's id.
pub const COMBO_POPUP: &str = "combobox";

/// Width reserved right of the field for the arrow button.
const ARROW_RESERVE: f32 = 32.0;

/// Extra popup height for the filter row and separator.
const POPUP_HEADER: f32 = 20.0;

/// Text field with type-ahead over `candidates` and a drop-down list.
///
/// `max_visible_rows` sizes the popup; 0 shows every candidate. Returns
/// true when the field reports a change (or Enter) or a list entry is
/// picked. Empty candidates are left out of the list but still complete.
pub fn text_input_combo<U, S>(
    ui: &mut U,
    id: &str,
    value: &mut String,
    candidates: &[S],
    max_visible_rows: usize,
) -> bool
where
    U: Ui + ?Sized,
    S: AsRef<str>,
{
    let rows = if max_visible_rows == 0 {
        candidates.len()
    } else {
        max_visible_rows
    };
    let widget_id = ui.get_id(id);

    let mut ui = ScopeGuard::id(ui, id);
    value_column(&mut *ui, id, "", VALUE_COLUMN_FRACT);
    ui.set_next_item_width(-ARROW_RESERVE);
    let mut complete = autocomplete_callback(candidates);
    let mut changed = input_text_with(
        &mut *ui,
        "##in",
        value,
        InputTextFlags::CALLBACK_ALWAYS | InputTextFlags::ENTER_RETURNS_TRUE,
        0,
        Some(&mut complete),
    )
    .is_changed();

    ui.open_popup_on_item_click(COMBO_POPUP);
    let field = ui.item_rect();

    ui.same_line(0.0, 0.0);
    if ui.arrow_button("##openCombo", Direction::Down) {
        ui.open_popup(COMBO_POPUP);
    }
    ui.open_popup_on_item_click(COMBO_POPUP);
    let arrow = ui.item_rect();

    #[allow(clippy::cast_precision_loss)]
    let size = Vec2::new(
        field.width() + arrow.width(),
        field.height() + POPUP_HEADER + field.height() * rows as f32,
    );
    ui.set_next_window_pos(Vec2::new(field.min.x, field.max.y));
    ui.set_next_window_size(size);

    if let Some(mut popup) = ScopeGuard::popup(&mut *ui, COMBO_POPUP, WindowFlags::NO_MOVE) {
        let mut filter = popup.widget_state().take_filter(widget_id);
        input_text(&mut *popup, "Filter", &mut filter, InputTextFlags::empty(), 0);
        popup.widget_state().store_filter(widget_id, filter);
        popup.separator();

        for candidate in candidates.iter().map(AsRef::as_ref) {
            if candidate.is_empty() {
                continue;
            }
            if popup.selectable(candidate, false) {
                candidate.clone_into(value);
                changed = true;
            }
        }
    }

    changed
}
