//! End-to-end flows through the type-ahead combo box.
//!
//! Run with:
//!   cargo test --test combo_flow
//! With logging:
//!   cargo test --test combo_flow -- --nocapture

use imgui_modern::headless::{FrameOutput, HeadlessUi, ItemKind};
use imgui_modern::widgets::{COMBO_POPUP, panel, text_input_combo};
use imgui_modern::{Id, KeyCode, MouseButton, Vec2};
use tracing::{Level, info};

const PRODUCE: [&str; 4] = ["banana", "apple", "apricot", "cherry"];

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// One frame with the combo inside a panel.
fn frame(ui: &mut HeadlessUi, value: &mut String) -> (bool, FrameOutput) {
    ui.new_frame();
    let changed = panel(ui, "Produce", -1.0, |ui| {
        text_input_combo(ui, "Fruit", value, &PRODUCE, 3)
    })
    .unwrap();
    let out = ui.end_frame();
    assert!(out.is_balanced(), "leaked: {:?}", out.leaked);
    (changed, out)
}

fn popup_id() -> Id {
    Id::path(&["Fruit", COMBO_POPUP])
}

#[test]
fn type_ahead_then_enter_commits() {
    init_logging();
    let mut ui = HeadlessUi::default();
    let mut value = String::new();
    frame(&mut ui, &mut value);

    assert!(ui.focus_label("Fruit"));
    ui.type_text("ba");
    let (changed, _) = frame(&mut ui, &mut value);
    assert!(!changed);
    assert_eq!(value, "banana");

    ui.press(KeyCode::Enter);
    let (changed, _) = frame(&mut ui, &mut value);
    info!(%value, "committed");
    assert!(changed);
    assert_eq!(value, "banana");
    assert!(ui.active_id().is_none());
}

#[test]
fn pick_from_list_after_partial_typing() {
    init_logging();
    let mut ui = HeadlessUi::default();
    let mut value = String::new();
    frame(&mut ui, &mut value);

    assert!(ui.focus_label("Fruit"));
    ui.type_text("ap");
    frame(&mut ui, &mut value);
    assert_eq!(value, "apple");

    // Leaving the field for the arrow commits what was typed.
    assert!(ui.click_label("##openCombo"));
    let (changed, out) = frame(&mut ui, &mut value);
    assert!(changed);
    assert!(ui.is_popup_open_at(popup_id()));
    assert_eq!(out.popups.len(), 1);
    let listed: Vec<_> = out
        .items
        .iter()
        .filter(|item| item.kind == ItemKind::Selectable)
        .map(|item| item.label.as_str())
        .collect();
    assert_eq!(listed, PRODUCE);

    assert!(ui.click_label("apricot"));
    let (changed, _) = frame(&mut ui, &mut value);
    assert!(changed);
    assert_eq!(value, "apricot");
    assert!(!ui.is_popup_open_at(popup_id()));
}

#[test]
fn clicking_outside_closes_the_list() {
    let mut ui = HeadlessUi::default();
    let mut value = String::new();
    frame(&mut ui, &mut value);
    assert!(ui.click_label("##openCombo"));
    let (_, out) = frame(&mut ui, &mut value);
    let popup = out.popups[0];

    ui.click_at(
        Vec2::new(popup.max.x + 50.0, popup.max.y + 50.0),
        MouseButton::Left,
    );
    let (changed, out) = frame(&mut ui, &mut value);
    assert!(!changed);
    assert!(out.popups.is_empty());
    assert!(value.is_empty());
}

#[test]
fn escape_restores_the_value_before_editing() {
    let mut ui = HeadlessUi::default();
    let mut value = String::from("plum");
    frame(&mut ui, &mut value);

    assert!(ui.focus_label("Fruit"));
    ui.press(KeyCode::Backspace);
    ui.press(KeyCode::Backspace);
    frame(&mut ui, &mut value);
    assert_eq!(value, "pl");

    ui.press(KeyCode::Esc);
    let (changed, _) = frame(&mut ui, &mut value);
    assert!(!changed);
    assert_eq!(value, "plum");
    assert!(ui.active_id().is_none());
}
