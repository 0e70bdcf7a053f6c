//! Error types for imgui_modern.
//!
//! Most of the crate degrades instead of failing: oversized input is clamped
//! and a missing autocomplete match is a no-op. Errors are reserved for
//! broken scope discipline that would otherwise corrupt the context stacks.

use std::fmt;

/// Result type alias for imgui_modern operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for imgui_modern operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// `end_panel` was called with no panel open.
    PanelUnderflow,
    /// `end_panel` was called at a different group depth than the one its
    /// matching `begin_panel` left behind.
    PanelMismatch { expected: usize, found: usize },
    /// A widget handed back bytes that are not valid UTF-8.
    InvalidUtf8 { valid_up_to: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PanelUnderflow => write!(f, "end_panel called without a matching begin_panel"),
            Self::PanelMismatch { expected, found } => {
                write!(
                    f,
                    "panel closed at group depth {found}, expected {expected}"
                )
            }
            Self::InvalidUtf8 { valid_up_to } => {
                write!(f, "text buffer is not valid UTF-8 after byte {valid_up_to}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::string::FromUtf8Error> for Error {
    fn from(e: std::string::FromUtf8Error) -> Self {
        Self::InvalidUtf8 {
            valid_up_to: e.utf8_error().valid_up_to(),
        }
    }
}
