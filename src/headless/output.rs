//! What a headless frame produced: draw commands and submitted items.

use crate::color::Rgba;
use crate::geometry::{Rect, Vec2};
use crate::id::{Id, display_text};

/// One recorded draw command. Every command keeps the clip rectangle that
/// was current when it was issued.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// Rectangle outline.
    Rect {
        min: Vec2,
        max: Vec2,
        color: Rgba,
        rounding: f32,
        clip: Rect,
    },
    /// Filled rectangle (frames, backgrounds, separators).
    RectFilled {
        min: Vec2,
        max: Vec2,
        color: Rgba,
        clip: Rect,
    },
    /// A run of text.
    Text {
        pos: Vec2,
        text: String,
        color: Rgba,
        clip: Rect,
    },
}

impl DrawCmd {
    /// The clip rectangle the command was drawn under.
    #[must_use]
    pub fn clip(&self) -> Rect {
        match self {
            Self::Rect { clip, .. } | Self::RectFilled { clip, .. } | Self::Text { clip, .. } => {
                *clip
            }
        }
    }

    /// Geometry of the command. Text reports a zero-size rect at its
    /// origin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect { min, max, .. } | Self::RectFilled { min, max, .. } => {
                Rect::new(*min, *max)
            }
            Self::Text { pos, .. } => Rect::new(*pos, *pos),
        }
    }

    /// Whether any part of the command survives its clip.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.bounds().intersect(&self.clip()).is_empty()
            || matches!(self, Self::Text { pos, clip, .. } if clip.contains(*pos))
    }
}

/// Kind of a submitted item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Text,
    Button,
    Input,
    Selectable,
}

impl ItemKind {
    /// Whether clicks can land on this kind of item.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        !matches!(self, Self::Text)
    }
}

/// An item submitted during a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemRecord {
    pub id: Id,
    /// The label as passed, `##` suffix included. Text items carry their
    /// text.
    pub label: String,
    pub rect: Rect,
    pub kind: ItemKind,
    /// Window layer the item was submitted in; popups sit above 0.
    pub layer: usize,
}

impl ItemRecord {
    /// Whether `label` names this item, either exactly or by its visible
    /// text.
    #[must_use]
    pub fn matches(&self, label: &str) -> bool {
        self.label == label || display_text(&self.label) == label
    }
}

/// Everything one frame produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOutput {
    pub draw_list: Vec<DrawCmd>,
    pub items: Vec<ItemRecord>,
    /// Screen rects of the popup windows drawn this frame.
    pub popups: Vec<Rect>,
    pub tooltip: Option<String>,
    /// Scopes left open when the frame ended.
    pub leaked: Vec<&'static str>,
}

impl FrameOutput {
    /// Whether every begin/push of the frame was matched.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.leaked.is_empty()
    }

    /// The last item named `label`.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&ItemRecord> {
        self.items.iter().rev().find(|item| item.matches(label))
    }

    /// Text of every visible text command, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.draw_list.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, clip, pos, .. } if clip.contains(*pos) => Some(text.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
        Rect::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    #[test]
    fn test_clipped_away_rect_is_invisible() {
        let cmd = DrawCmd::Rect {
            min: Vec2::new(10.0, 10.0),
            max: Vec2::new(20.0, 20.0),
            color: Rgba::WHITE,
            rounding: 0.0,
            clip: rect(30.0, 0.0, 40.0, 40.0),
        };
        assert!(!cmd.is_visible());
        assert_eq!(cmd.bounds(), rect(10.0, 10.0, 20.0, 20.0));
    }

    #[test]
    fn test_find_matches_visible_label() {
        let out = FrameOutput {
            items: vec![ItemRecord {
                id: Id(7),
                label: "Save##file".to_string(),
                rect: rect(0.0, 0.0, 1.0, 1.0),
                kind: ItemKind::Button,
                layer: 0,
            }],
            ..FrameOutput::default()
        };
        assert_eq!(out.find("Save").map(|item| item.id), Some(Id(7)));
        assert_eq!(out.find("Save##file").map(|item| item.id), Some(Id(7)));
        assert!(out.find("Open").is_none());
        assert!(out.is_balanced());
    }
}
