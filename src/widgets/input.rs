//! Labelled text field.

use crate::frame::{ScopeGuard, Ui};
use crate::text::{Change, InputTextFlags, input_text_with};

use super::layout::{VALUE_COLUMN_FRACT, value_column};

/// Text field preceded by a label column. The field's identity is scoped
/// under `label`.
pub fn input_text<U: Ui + ?Sized>(
    ui: &mut U,
    label: &str,
    value: &mut String,
    flags: InputTextFlags,
    max_size: usize,
) -> Change {
    let mut ui = ScopeGuard::id(ui, label);
    value_column(&mut *ui, label, "", VALUE_COLUMN_FRACT);
    input_text_with(&mut *ui, "", value, flags, max_size, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessUi;
    use crate::input::KeyCode;

    fn run(ui: &mut HeadlessUi, value: &mut String, max_size: usize) -> Change {
        ui.new_frame();
        let change = input_text(ui, "Name", value, InputTextFlags::empty(), max_size);
        ui.end_frame();
        change
    }

    #[test]
    fn test_typing_changes_value() {
        let mut ui = HeadlessUi::default();
        let mut value = String::from("Al");
        assert_eq!(run(&mut ui, &mut value, 0), Change::NoChange);

        assert!(ui.focus_label("Name"));
        ui.type_text("ice");
        assert_eq!(run(&mut ui, &mut value, 0), Change::Changed);
        assert_eq!(value, "Alice");
    }

    #[test]
    fn test_enter_commits() {
        let mut ui = HeadlessUi::default();
        let mut value = String::new();
        run(&mut ui, &mut value, 0);
        assert!(ui.focus_label("Name"));
        ui.type_text("Bo");
        ui.press(KeyCode::Enter);
        assert_eq!(run(&mut ui, &mut value, 0), Change::ChangedAndApplied);
        assert_eq!(value, "Bo");
    }

    #[test]
    fn test_blur_after_edit_commits_next_frame() {
        let mut ui = HeadlessUi::default();
        let mut value = String::new();
        run(&mut ui, &mut value, 0);
        assert!(ui.focus_label("Name"));
        ui.type_text("x");
        assert_eq!(run(&mut ui, &mut value, 0), Change::Changed);
        ui.blur();
        assert_eq!(run(&mut ui, &mut value, 0), Change::ChangedAndApplied);
        assert_eq!(run(&mut ui, &mut value, 0), Change::NoChange);
    }

    #[test]
    fn test_max_size_bounds_typing() {
        let mut ui = HeadlessUi::default();
        let mut value = String::new();
        run(&mut ui, &mut value, 0);
        assert!(ui.focus_label("Name"));
        ui.type_text("abcdef");
        run(&mut ui, &mut value, 4);
        assert_eq!(value, "abcd");
    }

    #[test]
    fn test_fields_in_different_label_scopes_are_distinct() {
        let mut ui = HeadlessUi::default();
        let mut a = String::new();
        let mut b = String::new();
        ui.new_frame();
        input_text(&mut ui, "A", &mut a, InputTextFlags::empty(), 0);
        input_text(&mut ui, "B", &mut b, InputTextFlags::empty(), 0);
        ui.end_frame();

        assert!(ui.focus_label("B"));
        ui.type_text("z");
        ui.new_frame();
        input_text(&mut ui, "A", &mut a, InputTextFlags::empty(), 0);
        input_text(&mut ui, "B", &mut b, InputTextFlags::empty(), 0);
        ui.end_frame();
        assert_eq!(a, "");
        assert_eq!(b, "z");
    }
}
