//! Property-based tests for panel nesting.

use imgui_modern::frame::FrameContext;
use imgui_modern::headless::{DrawCmd, HeadlessUi};
use imgui_modern::widgets::{begin_panel, end_panel};
use imgui_modern::{Error, Rect};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// A script of begins (true) and ends (false). Ends with nothing open are
/// turned into begins and whatever is left open is closed at the end.
fn script() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..24)
}

// ============================================================================
// Nesting Properties
// ============================================================================

proptest! {
    /// Ends pop exactly the label the matching begin pushed, innermost first.
    #[test]
    fn panels_unwind_lifo(ops in script()) {
        let mut ui = HeadlessUi::default();
        ui.new_frame();
        let mut model: Vec<Rect> = Vec::new();
        let mut opened = 0_usize;

        let close = |ui: &mut HeadlessUi, model: &mut Vec<Rect>| -> Result<(), TestCaseError> {
            let top = ui.widget_state().panels().last().map(|frame| frame.label);
            prop_assert_eq!(top, model.last().copied());
            prop_assert_eq!(end_panel(ui), Ok(()));
            model.pop();
            prop_assert_eq!(ui.widget_state().panels().len(), model.len());
            Ok(())
        };

        for begin in ops {
            if begin || model.is_empty() {
                begin_panel(&mut ui, &format!("p{opened}"), -1.0);
                opened += 1;
                let label = ui.widget_state().panels().last().map(|frame| frame.label);
                prop_assert!(label.is_some());
                let label = label.unwrap_or_default();
                if let Some(parent) = model.last() {
                    prop_assert!(label.min.y >= parent.max.y);
                    prop_assert!(label.min.x > parent.min.x);
                }
                model.push(label);
            } else {
                close(&mut ui, &mut model)?;
            }
        }
        while !model.is_empty() {
            close(&mut ui, &mut model)?;
        }

        prop_assert_eq!(ui.group_depth(), 0);
        prop_assert_eq!(end_panel(&mut ui), Err(Error::PanelUnderflow));
        let out = ui.end_frame();
        prop_assert!(out.is_balanced());
        let borders = out
            .draw_list
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Rect { .. }))
            .count();
        prop_assert_eq!(borders, opened * 4);
    }
}
