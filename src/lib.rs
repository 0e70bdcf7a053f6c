//! `imgui_modern` - helpers for immediate-mode GUI code
//!
//! Scoped begin/end guards, a growable-buffer bridge for fixed-capacity
//! text fields, live type-ahead completion, a type-ahead combo box and
//! notched group panels, written against a small set of frame context
//! traits. [`headless::HeadlessUi`] implements those traits off-screen for
//! tests and tooling.
//!
//! # Examples
//!
//! ```
//! use imgui_modern::frame::FrameContext;
//! use imgui_modern::headless::HeadlessUi;
//! use imgui_modern::widgets::panel;
//!
//! let mut ui = HeadlessUi::default();
//! ui.new_frame();
//! panel(&mut ui, "Settings", -1.0, |ui| ui.text("volume")).unwrap();
//! let out = ui.end_frame();
//! assert!(out.is_balanced());
//! ```

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::cast_precision_loss)] // Counts to pixel sizes
#![allow(clippy::module_name_repetitions)] // Allow text::TextEvent etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::float_cmp)] // Zero sentinels in layout arguments
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference
#![allow(clippy::needless_collect)] // Collect for assertions is clear

pub mod color;
pub mod error;
pub mod event;
pub mod frame;
pub mod geometry;
pub mod headless;
pub mod id;
pub mod input;
pub mod style;
pub mod text;
pub mod widgets;

// Re-export core types at crate root
pub use color::Rgba;
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use geometry::{Rect, Vec2};
pub use id::{Id, IdStack};
pub use style::{Palette, StyleColor, StyleMetrics, StyleVar};

// Re-export the frame context traits
pub use frame::{FrameContext, ScopeGuard, TextWidget, Ui, WidgetState};

// Re-export input types
pub use input::{KeyCode, KeyEvent, KeyModifiers, MouseButton};

// Re-export commonly used types
pub use headless::{HeadlessOptions, HeadlessUi};
pub use text::{Change, GrowableBuffer, InputTextFlags, Reply, TextEditState, TextEvent};
pub use widgets::{begin_panel, end_panel, input_text, panel, text_input_combo};
