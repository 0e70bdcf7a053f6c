//! Per-window layout state: cursor, line heights, groups, item widths.

use crate::frame::ClipStack;
use crate::geometry::{Rect, Vec2};
use crate::id::Id;
use crate::style::StyleMetrics;

/// Fraction of the window width given to framed widgets by default.
const DEFAULT_ITEM_WIDTH_FRACT: f32 = 0.65;

#[derive(Clone, Copy, Debug)]
struct GroupBackup {
    cursor: Vec2,
    cursor_max: Vec2,
    prev_line: Vec2,
    prev_line_h: f32,
    curr_line_h: f32,
    indent: f32,
    group_offset: f32,
    same_line: bool,
}

/// Layout state of one window (the main window or a popup).
#[derive(Clone, Debug)]
pub(crate) struct Window {
    pub(crate) pos: Vec2,
    pub(crate) size: Vec2,
    /// 0 for the main window, stacking upward for popups.
    pub(crate) layer: usize,
    pub(crate) cursor: Vec2,
    cursor_max: Vec2,
    prev_line: Vec2,
    prev_line_h: f32,
    curr_line_h: f32,
    same_line: bool,
    indent: f32,
    group_offset: f32,
    work_max: Vec2,
    default_item_width: f32,
    item_widths: Vec<f32>,
    next_item_width: Option<f32>,
    groups: Vec<GroupBackup>,
    pub(crate) clip: ClipStack,
    pub(crate) last_item: Rect,
    pub(crate) last_item_id: Option<Id>,
    pub(crate) last_item_deactivated: bool,
}

impl Window {
    pub(crate) fn new(pos: Vec2, size: Vec2, layer: usize, style: &StyleMetrics) -> Self {
        let padding = style.window_padding;
        let cursor = pos + padding;
        Self {
            pos,
            size,
            layer,
            cursor,
            cursor_max: cursor,
            prev_line: cursor,
            prev_line_h: 0.0,
            curr_line_h: 0.0,
            same_line: false,
            indent: padding.x,
            group_offset: 0.0,
            work_max: pos + size - padding,
            default_item_width: (size.x * DEFAULT_ITEM_WIDTH_FRACT).floor(),
            item_widths: Vec::new(),
            next_item_width: None,
            groups: Vec::new(),
            clip: ClipStack::new(Rect::from_pos_size(pos, size)),
            last_item: Rect::new(cursor, cursor),
            last_item_id: None,
            last_item_deactivated: false,
        }
    }

    #[must_use]
    pub(crate) fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[must_use]
    pub(crate) fn is_same_line(&self) -> bool {
        self.same_line
    }

    #[must_use]
    pub(crate) fn indent(&self) -> f32 {
        self.indent
    }

    #[must_use]
    pub(crate) fn work_max(&self) -> Vec2 {
        self.work_max
    }

    #[must_use]
    pub(crate) fn group_depth(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub(crate) fn item_width_depth(&self) -> usize {
        self.item_widths.len()
    }

    /// Window-local x where `same_line(0.0, -1.0)` would continue.
    #[must_use]
    pub(crate) fn same_line_x(&self, spacing_x: f32) -> f32 {
        self.prev_line.x + spacing_x - self.pos.x
    }

    pub(crate) fn set_cursor(&mut self, pos: Vec2) {
        self.cursor = pos;
        self.cursor_max = self.cursor_max.max(pos);
    }

    /// Advance the cursor past an item of `size`.
    pub(crate) fn item_size(&mut self, size: Vec2, spacing_y: f32) {
        let line_y1 = if self.same_line {
            self.prev_line.y
        } else {
            self.cursor.y
        };
        let line_h = self.curr_line_h.max(self.cursor.y - line_y1 + size.y);

        self.prev_line = Vec2::new(self.cursor.x + size.x, line_y1);
        self.cursor = Vec2::new(self.pos.x + self.indent, line_y1 + line_h + spacing_y);
        self.cursor_max.x = self.cursor_max.x.max(self.prev_line.x);
        self.cursor_max.y = self.cursor_max.y.max(self.cursor.y - spacing_y);

        self.prev_line_h = line_h;
        self.curr_line_h = 0.0;
        self.same_line = false;
    }

    /// Record the last submitted item.
    pub(crate) fn set_last_item(&mut self, rect: Rect, id: Option<Id>) {
        self.last_item = rect;
        self.last_item_id = id;
        self.last_item_deactivated = false;
    }

    pub(crate) fn same_line(
        &mut self,
        offset_from_start_x: f32,
        spacing: f32,
        default_spacing: f32,
    ) {
        let x = if offset_from_start_x == 0.0 {
            let spacing = if spacing < 0.0 { default_spacing } else { spacing };
            self.prev_line.x + spacing
        } else {
            self.pos.x + offset_from_start_x + spacing.max(0.0) + self.group_offset
        };
        self.cursor = Vec2::new(x, self.prev_line.y);
        self.curr_line_h = self.prev_line_h;
        self.same_line = true;
    }

    pub(crate) fn new_line(&mut self, font_size: f32, spacing_y: f32) {
        if self.curr_line_h > 0.0 {
            self.item_size(Vec2::ZERO, spacing_y);
        } else {
            self.item_size(Vec2::new(0.0, font_size), spacing_y);
        }
    }

    pub(crate) fn begin_group(&mut self) {
        self.groups.push(GroupBackup {
            cursor: self.cursor,
            cursor_max: self.cursor_max,
            prev_line: self.prev_line,
            prev_line_h: self.prev_line_h,
            curr_line_h: self.curr_line_h,
            indent: self.indent,
            group_offset: self.group_offset,
            same_line: self.same_line,
        });
        self.group_offset = self.cursor.x - self.pos.x;
        self.indent = self.group_offset;
        self.cursor_max = self.cursor;
        self.curr_line_h = 0.0;
    }

    /// Close the innermost group and lay it out as one item. Returns
    /// `None` if no group was open.
    pub(crate) fn end_group(&mut self, spacing_y: f32) -> Option<Rect> {
        let backup = self.groups.pop()?;
        let bounds = Rect::new(backup.cursor, self.cursor_max.max(backup.cursor));

        self.cursor = backup.cursor;
        self.cursor_max = backup.cursor_max.max(self.cursor_max);
        self.prev_line = backup.prev_line;
        self.prev_line_h = backup.prev_line_h;
        self.curr_line_h = backup.curr_line_h;
        self.indent = backup.indent;
        self.group_offset = backup.group_offset;
        self.same_line = backup.same_line;

        self.item_size(bounds.size(), spacing_y);
        self.set_last_item(bounds, None);
        Some(bounds)
    }

    pub(crate) fn indent_by(&mut self, width: f32) {
        self.indent += width;
        self.cursor.x = self.pos.x + self.indent;
    }

    /// Width of the next framed widget. Negative widths are relative to
    /// the right edge of the work rect.
    #[must_use]
    pub(crate) fn calc_item_width(&self) -> f32 {
        let width = self
            .next_item_width
            .or_else(|| self.item_widths.last().copied())
            .unwrap_or(self.default_item_width);
        if width < 0.0 {
            (self.work_max.x - self.cursor.x + width).max(1.0)
        } else {
            width
        }
    }

    /// Like [`calc_item_width`](Self::calc_item_width), consuming the
    /// one-shot width.
    pub(crate) fn take_item_width(&mut self) -> f32 {
        let width = self.calc_item_width();
        self.next_item_width = None;
        width
    }

    pub(crate) fn push_item_width(&mut self, width: f32) {
        let width = if width == 0.0 {
            self.default_item_width
        } else {
            width
        };
        self.item_widths.push(width);
    }

    pub(crate) fn pop_item_width(&mut self) -> bool {
        self.item_widths.pop().is_some()
    }

    pub(crate) fn set_next_item_width(&mut self, width: f32) {
        self.next_item_width = Some(width);
    }

    pub(crate) fn inset_content_right(&mut self, amount: f32) {
        self.work_max.x -= amount;
    }
}
