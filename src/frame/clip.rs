//! Clip rectangle stack.

use crate::geometry::{Rect, Vec2};

/// Stack of clip rectangles with intersection.
#[derive(Clone, Debug)]
pub struct ClipStack {
    stack: Vec<Rect>,
    root: Rect,
    current: Rect,
}

impl ClipStack {
    /// Create a stack whose base clip is `root`.
    #[must_use]
    pub fn new(root: Rect) -> Self {
        Self {
            stack: Vec::new(),
            root,
            current: root,
        }
    }

    /// Push a clip rectangle. With `intersect` it is narrowed by the
    /// current one; otherwise it replaces it.
    pub fn push(&mut self, rect: Rect, intersect: bool) {
        self.stack.push(self.current);
        self.current = if intersect {
            self.current.intersect(&rect)
        } else {
            rect
        };
    }

    /// Pop the top clip rectangle. Returns false if nothing was pushed.
    pub fn pop(&mut self) -> bool {
        match self.stack.pop() {
            Some(rect) => {
                self.current = rect;
                true
            }
            None => false,
        }
    }

    /// Clear the stack back to the root clip.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.current = self.root;
    }

    /// Check if a point is within the current clip.
    #[must_use]
    pub fn contains(&self, p: Vec2) -> bool {
        self.current.contains(p)
    }

    #[must_use]
    pub fn current(&self) -> Rect {
        self.current
    }

    /// Number of pushed rectangles.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Check if the current clip region is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

impl Default for ClipStack {
    fn default() -> Self {
        Self::new(Rect::EVERYTHING)
    }
}
