//! Off-screen reference frame context.
//!
//! [`HeadlessUi`] implements [`FrameContext`], [`TextWidget`] and [`Ui`]
//! with a deterministic layout (fixed-width glyphs, no fonts, no backend)
//! and records what a frame drew and submitted into a [`FrameOutput`].
//! Input is scripted: queue keys and clicks between frames and they are
//! delivered when the next frame starts.
//!
//! # Frame cycle
//!
//! ```text
//! new_frame()  -> deliver queued input, reset the main window
//! ... widgets ...
//! end_frame()  -> report leaked scopes, return FrameOutput
//! type_text() / press() / click_label() / focus_label()  -> queue input
//! ```
//!
//! # Examples
//!
//! ```
//! use imgui_modern::frame::FrameContext;
//! use imgui_modern::headless::HeadlessUi;
//! use imgui_modern::widgets::input_text;
//! use imgui_modern::text::InputTextFlags;
//!
//! let mut ui = HeadlessUi::default();
//! let mut name = String::new();
//!
//! ui.new_frame();
//! input_text(&mut ui, "Name", &mut name, InputTextFlags::empty(), 0);
//! ui.end_frame();
//!
//! ui.focus_label("Name");
//! ui.type_text("Ada");
//! ui.new_frame();
//! input_text(&mut ui, "Name", &mut name, InputTextFlags::empty(), 0);
//! let out = ui.end_frame();
//!
//! assert_eq!(name, "Ada");
//! assert!(out.is_balanced());
//! ```

mod field;
mod output;
mod window;

pub use output::{DrawCmd, FrameOutput, ItemKind, ItemRecord};

use std::collections::VecDeque;

use unicode_width::UnicodeWidthStr;

use crate::color::Rgba;
use crate::event::{LogLevel, emit_log};
use crate::frame::{Direction, FrameContext, TextWidget, Ui, WidgetState, WindowFlags};
use crate::geometry::{Rect, Vec2};
use crate::id::{Id, IdStack, display_text};
use crate::input::{InputEvent, KeyEvent, MouseButton};
use crate::style::{Palette, StyleColor, StyleMetrics, StyleVar};
use crate::text::{EditSession, InputTextFlags, TextEditState};

use field::{ActiveField, Exit};
use window::Window;

/// Popup size when none was requested with `set_next_window_size`.
const DEFAULT_POPUP_SIZE: Vec2 = Vec2::new(200.0, 150.0);

/// Configuration of a [`HeadlessUi`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadlessOptions {
    /// Size of the display; the main window covers all of it.
    pub display_size: Vec2,
    /// Advance of one terminal column of text.
    pub glyph_width: f32,
    pub style: StyleMetrics,
    pub palette: Palette,
}

impl Default for HeadlessOptions {
    fn default() -> Self {
        Self {
            display_size: Vec2::new(800.0, 600.0),
            glyph_width: 7.0,
            style: StyleMetrics::default(),
            palette: Palette::default(),
        }
    }
}

#[derive(Clone, Debug)]
struct PopupWindow {
    id: Id,
    window: Window,
}

/// Off-screen implementation of the frame context traits.
#[derive(Clone, Debug)]
pub struct HeadlessUi {
    options: HeadlessOptions,
    style: StyleMetrics,
    style_stack: Vec<StyleVar>,
    ids: IdStack,
    main: Window,
    popups: Vec<PopupWindow>,
    open_popups: Vec<Id>,
    next_window_pos: Option<Vec2>,
    next_window_size: Option<Vec2>,
    state: WidgetState,

    out: FrameOutput,
    frame_popups: Vec<(Rect, usize)>,
    prev_items: Vec<ItemRecord>,
    prev_popups: Vec<(Rect, usize)>,

    queued: VecDeque<InputEvent>,
    keys: Vec<KeyEvent>,
    mouse_pos: Option<Vec2>,
    hover_layer: usize,
    clicked: Option<(Id, MouseButton)>,

    active: Option<ActiveField>,
    active_seen: bool,
    focus_request: Option<Id>,
    focus_this_frame: Option<Id>,
    pending_deactivated: Option<Id>,
}

impl Default for HeadlessUi {
    fn default() -> Self {
        Self::new(HeadlessOptions::default())
    }
}

impl HeadlessUi {
    #[must_use]
    pub fn new(options: HeadlessOptions) -> Self {
        let style = options.style;
        Self {
            options,
            style,
            style_stack: Vec::new(),
            ids: IdStack::new(),
            main: Window::new(Vec2::ZERO, options.display_size, 0, &style),
            popups: Vec::new(),
            open_popups: Vec::new(),
            next_window_pos: None,
            next_window_size: None,
            state: WidgetState::new(),
            out: FrameOutput::default(),
            frame_popups: Vec::new(),
            prev_items: Vec::new(),
            prev_popups: Vec::new(),
            queued: VecDeque::new(),
            keys: Vec::new(),
            mouse_pos: None,
            hover_layer: 0,
            clicked: None,
            active: None,
            active_seen: false,
            focus_request: None,
            focus_this_frame: None,
            pending_deactivated: None,
        }
    }

    #[must_use]
    pub fn options(&self) -> &HeadlessOptions {
        &self.options
    }

    // ============================================
    // Frame cycle
    // ============================================

    /// Start a frame: deliver queued input and reset the main window.
    pub fn new_frame(&mut self) {
        self.out = FrameOutput::default();
        self.frame_popups.clear();
        self.keys.clear();
        self.clicked = None;
        self.active_seen = false;
        self.focus_this_frame = self.focus_request.take();

        while let Some(event) = self.queued.pop_front() {
            match event {
                InputEvent::Key(key) => self.keys.push(key),
                InputEvent::Click { pos, button } => self.resolve_click(pos, button),
            }
        }
        self.hover_layer = self.mouse_pos.map_or(0, |p| {
            self.prev_popups
                .iter()
                .filter(|(rect, _)| rect.contains(p))
                .map(|&(_, layer)| layer)
                .max()
                .unwrap_or(0)
        });

        self.main = Window::new(Vec2::ZERO, self.options.display_size, 0, &self.style);
        self.popups.clear();
        self.ids.clear();
        self.next_window_pos = None;
        self.next_window_size = None;
    }

    /// End the frame and return what it produced. Scopes left open are
    /// closed, logged and listed in [`FrameOutput::leaked`].
    pub fn end_frame(&mut self) -> FrameOutput {
        let mut leaked = Vec::new();
        if !self.popups.is_empty() {
            self.popups.clear();
            leaked.push("popup");
        }
        if self.main.group_depth() > 0 {
            leaked.push("group");
        }
        if !self.style_stack.is_empty() {
            while let Some(previous) = self.style_stack.pop() {
                self.style.apply(previous);
            }
            leaked.push("style_var");
        }
        if self.ids.depth() > 0 {
            leaked.push("id");
        }
        if self.main.clip.depth() > 0 {
            leaked.push("clip_rect");
        }
        if self.main.item_width_depth() > 0 {
            leaked.push("item_width");
        }
        if !self.state.panels().is_empty() {
            while self.state.panels_mut().pop().is_some() {}
            leaked.push("panel");
        }
        for scope in &leaked {
            emit_log(
                LogLevel::Warn,
                &format!("frame ended with an unbalanced {scope} scope"),
            );
        }

        if !self.active_seen {
            self.deactivate();
        }
        self.keys.clear();
        self.focus_this_frame = None;

        let mut out = std::mem::take(&mut self.out);
        out.leaked = leaked;
        self.prev_items.clone_from(&out.items);
        self.prev_popups = std::mem::take(&mut self.frame_popups);
        out
    }

    fn resolve_click(&mut self, pos: Vec2, button: MouseButton) {
        self.mouse_pos = Some(pos);
        if !self.open_popups.is_empty() && !self.prev_popups.iter().any(|(r, _)| r.contains(pos)) {
            self.open_popups.clear();
        }
        let hit = self
            .prev_items
            .iter()
            .filter(|item| item.kind.is_interactive() && item.rect.contains(pos))
            .max_by_key(|item| item.layer)
            .map(|item| item.id);
        if self.active.as_ref().map(|field| field.id) != hit {
            self.deactivate();
        }
        self.clicked = hit.map(|id| (id, button));
    }

    fn deactivate(&mut self) {
        if let Some(field) = self.active.take() {
            if field.edited {
                self.pending_deactivated = Some(field.id);
            }
        }
    }

    // ============================================
    // Scripted input
    // ============================================

    /// Queue one key press per character of `text`.
    pub fn type_text(&mut self, text: &str) {
        self.queued
            .extend(text.chars().map(|c| InputEvent::Key(KeyEvent::char(c))));
    }

    /// Queue a key press.
    pub fn press(&mut self, key: impl Into<KeyEvent>) {
        self.queued.push_back(InputEvent::Key(key.into()));
    }

    /// Queue a click at `pos` and move the mouse there.
    pub fn click_at(&mut self, pos: Vec2, button: MouseButton) {
        self.mouse_pos = Some(pos);
        self.queued.push_back(InputEvent::Click { pos, button });
    }

    /// Move the mouse without clicking.
    pub fn hover_at(&mut self, pos: Vec2) {
        self.mouse_pos = Some(pos);
    }

    /// Left-click the center of the last item named `label` in the
    /// previous frame. Returns false if there is none.
    pub fn click_label(&mut self, label: &str) -> bool {
        self.click_label_with(label, MouseButton::Left)
    }

    pub fn right_click_label(&mut self, label: &str) -> bool {
        self.click_label_with(label, MouseButton::Right)
    }

    pub fn click_label_with(&mut self, label: &str, button: MouseButton) -> bool {
        match self.prev_items.iter().rev().find(|item| item.matches(label)) {
            Some(item) => {
                let center = item.rect.center();
                self.click_at(center, button);
                true
            }
            None => false,
        }
    }

    /// Give keyboard focus to the field named `label` in the previous
    /// frame. A label that names a text item focuses the first field after
    /// it in the same window. Returns false if no field was found.
    pub fn focus_label(&mut self, label: &str) -> bool {
        let Some(start) = self.prev_items.iter().rposition(|item| item.matches(label)) else {
            return false;
        };
        let layer = self.prev_items[start].layer;
        let target = self.prev_items[start..]
            .iter()
            .filter(|item| item.layer == layer)
            .find(|item| item.kind == ItemKind::Input)
            .map(|item| item.id);
        match target {
            Some(id) => {
                self.focus_id(id);
                true
            }
            None => false,
        }
    }

    /// Give keyboard focus to field `id` on the next frame.
    pub fn focus_id(&mut self, id: Id) {
        self.focus_request = Some(id);
    }

    /// Take focus away from the active field now.
    pub fn blur(&mut self) {
        self.focus_request = None;
        self.deactivate();
    }

    #[must_use]
    pub fn active_id(&self) -> Option<Id> {
        self.active.as_ref().map(|field| field.id)
    }

    /// Editing state of the focused field.
    #[must_use]
    pub fn active_text_state(&self) -> Option<&TextEditState> {
        self.active.as_ref().map(|field| &field.state)
    }

    /// Open the popup with the full id `id`.
    pub fn open_popup_at(&mut self, id: Id) {
        if !self.open_popups.contains(&id) {
            self.open_popups.push(id);
        }
    }

    #[must_use]
    pub fn is_popup_open_at(&self, id: Id) -> bool {
        self.open_popups.contains(&id)
    }

    /// Items submitted in the previous frame.
    #[must_use]
    pub fn last_items(&self) -> &[ItemRecord] {
        &self.prev_items
    }

    // ============================================
    // Internals
    // ============================================

    fn window(&self) -> &Window {
        self.popups.last().map_or(&self.main, |popup| &popup.window)
    }

    fn window_mut(&mut self) -> &mut Window {
        match self.popups.last_mut() {
            Some(popup) => &mut popup.window,
            None => &mut self.main,
        }
    }

    fn color(&self, slot: StyleColor) -> Rgba {
        self.options.palette.get(slot)
    }

    fn draw_text(&mut self, pos: Vec2, text: &str, slot: StyleColor) {
        let cmd = DrawCmd::Text {
            pos,
            text: text.to_string(),
            color: self.color(slot),
            clip: self.window().clip.current(),
        };
        self.out.draw_list.push(cmd);
    }

    fn draw_filled(&mut self, rect: Rect, slot: StyleColor) {
        let cmd = DrawCmd::RectFilled {
            min: rect.min,
            max: rect.max,
            color: self.color(slot),
            clip: self.window().clip.current(),
        };
        self.out.draw_list.push(cmd);
    }

    /// Lay out and record an item occupying `rect`.
    fn submit(&mut self, label: &str, kind: ItemKind, id: Id, rect: Rect) {
        let spacing_y = self.style.item_spacing.y;
        let window = self.window_mut();
        window.item_size(rect.size(), spacing_y);
        window.set_last_item(rect, Some(id));
        let layer = window.layer;
        if self.pending_deactivated == Some(id) {
            self.pending_deactivated = None;
            self.window_mut().last_item_deactivated = true;
        }
        self.out.items.push(ItemRecord {
            id,
            label: label.to_string(),
            rect,
            kind,
            layer,
        });
    }

    fn text_item(&mut self, text: &str, slot: StyleColor) {
        let pos = self.window().cursor;
        let rect = Rect::from_pos_size(pos, self.calc_text_size(text));
        self.draw_text(pos, text, slot);
        let id = self.ids.get(text);
        self.submit(text, ItemKind::Text, id, rect);
    }

    fn is_clicked(&self, id: Id, button: MouseButton) -> bool {
        self.clicked == Some((id, button))
    }

    fn warn_underflow(what: &str) {
        emit_log(LogLevel::Warn, &format!("{what} called with nothing to pop"));
    }
}

impl FrameContext for HeadlessUi {
    fn cursor_screen_pos(&self) -> Vec2 {
        self.window().cursor
    }

    fn set_cursor_screen_pos(&mut self, pos: Vec2) {
        self.window_mut().set_cursor(pos);
    }

    fn cursor_pos(&self) -> Vec2 {
        let window = self.window();
        window.cursor - window.pos
    }

    fn set_cursor_pos_x(&mut self, x: f32) {
        let window = self.window_mut();
        let pos = Vec2::new(window.pos.x + x, window.cursor.y);
        window.set_cursor(pos);
    }

    fn content_region_max(&self) -> Vec2 {
        let window = self.window();
        window.work_max() - window.pos
    }

    fn content_region_avail(&self) -> Vec2 {
        let window = self.window();
        window.work_max() - window.cursor
    }

    fn same_line_x(&self) -> f32 {
        self.window().same_line_x(self.style.item_spacing.x)
    }

    fn is_same_line(&self) -> bool {
        self.window().is_same_line()
    }

    fn style(&self) -> &StyleMetrics {
        &self.style
    }

    fn style_color(&self, slot: StyleColor) -> Rgba {
        self.color(slot)
    }

    fn push_style_var(&mut self, var: StyleVar) {
        let previous = self.style.apply(var);
        self.style_stack.push(previous);
    }

    fn pop_style_var(&mut self, count: usize) {
        for _ in 0..count {
            let Some(previous) = self.style_stack.pop() else {
                Self::warn_underflow("pop_style_var");
                return;
            };
            self.style.apply(previous);
        }
    }

    fn begin_group(&mut self) {
        self.window_mut().begin_group();
    }

    fn end_group(&mut self) {
        let spacing_y = self.style.item_spacing.y;
        if self.window_mut().end_group(spacing_y).is_none() {
            Self::warn_underflow("end_group");
        }
    }

    fn group_depth(&self) -> usize {
        self.window().group_depth()
    }

    fn dummy(&mut self, size: Vec2) {
        let spacing_y = self.style.item_spacing.y;
        let window = self.window_mut();
        let rect = Rect::from_pos_size(window.cursor, size);
        window.item_size(size, spacing_y);
        window.set_last_item(rect, None);
    }

    fn same_line(&mut self, offset_from_start_x: f32, spacing: f32) {
        let default_spacing = self.style.item_spacing.x;
        self.window_mut()
            .same_line(offset_from_start_x, spacing, default_spacing);
    }

    fn new_line(&mut self) {
        let (font_size, spacing_y) = (self.style.font_size, self.style.item_spacing.y);
        self.window_mut().new_line(font_size, spacing_y);
    }

    fn indent_x(&self) -> f32 {
        self.window().indent()
    }

    fn indent(&mut self, width: f32) {
        let width = if width == 0.0 {
            self.style.indent_spacing
        } else {
            width
        };
        self.window_mut().indent_by(width);
    }

    fn unindent(&mut self, width: f32) {
        let width = if width == 0.0 {
            self.style.indent_spacing
        } else {
            width
        };
        self.window_mut().indent_by(-width);
    }

    fn text(&mut self, text: &str) {
        self.text_item(text, StyleColor::Text);
    }

    fn text_disabled(&mut self, text: &str) {
        self.text_item(text, StyleColor::TextDisabled);
    }

    #[allow(clippy::cast_precision_loss)]
    fn calc_text_size(&self, text: &str) -> Vec2 {
        let (lines, columns) = text
            .split('\n')
            .fold((0_usize, 0_usize), |(lines, columns), line| {
                (lines + 1, columns.max(line.width()))
            });
        Vec2::new(
            columns as f32 * self.options.glyph_width,
            lines as f32 * self.style.font_size,
        )
    }

    fn item_rect(&self) -> Rect {
        self.window().last_item
    }

    fn calc_item_width(&self) -> f32 {
        self.window().calc_item_width()
    }

    fn push_item_width(&mut self, width: f32) {
        self.window_mut().push_item_width(width);
    }

    fn pop_item_width(&mut self) {
        if !self.window_mut().pop_item_width() {
            Self::warn_underflow("pop_item_width");
        }
    }

    fn set_next_item_width(&mut self, width: f32) {
        self.window_mut().set_next_item_width(width);
    }

    fn push_clip_rect(&mut self, min: Vec2, max: Vec2, intersect: bool) {
        self.window_mut().clip.push(Rect::new(min, max), intersect);
    }

    fn pop_clip_rect(&mut self) {
        if !self.window_mut().clip.pop() {
            Self::warn_underflow("pop_clip_rect");
        }
    }

    fn clip_rect(&self) -> Rect {
        self.window().clip.current()
    }

    fn add_rect(&mut self, min: Vec2, max: Vec2, color: Rgba, rounding: f32) {
        let cmd = DrawCmd::Rect {
            min,
            max,
            color,
            rounding,
            clip: self.window().clip.current(),
        };
        self.out.draw_list.push(cmd);
    }

    fn inset_content_right(&mut self, amount: f32) {
        self.window_mut().inset_content_right(amount);
    }

    fn push_id(&mut self, label: &str) {
        self.ids.push(label);
    }

    fn pop_id(&mut self) {
        if !self.ids.pop() {
            Self::warn_underflow("pop_id");
        }
    }

    fn get_id(&self, label: &str) -> Id {
        self.ids.get(label)
    }

    fn widget_state(&mut self) -> &mut WidgetState {
        &mut self.state
    }
}

impl TextWidget for HeadlessUi {
    fn input_text_raw(
        &mut self,
        label: &str,
        session: &mut EditSession<'_, '_>,
        flags: InputTextFlags,
    ) -> bool {
        let id = self.ids.get(label);
        let style = self.style;
        let shown = display_text(label);
        let label_width = self.calc_text_size(shown).x;

        let width = self.window_mut().take_item_width();
        let pos = self.window().cursor;
        let frame = Rect::from_pos_size(pos, Vec2::new(width, style.frame_height()));
        let bounds = if label_width > 0.0 {
            Rect::new(
                pos,
                Vec2::new(
                    frame.max.x + style.item_inner_spacing.x + label_width,
                    frame.max.y,
                ),
            )
        } else {
            frame
        };

        let focused = self.focus_this_frame == Some(id);
        if (focused || self.is_clicked(id, MouseButton::Left)) && self.active_id() != Some(id) {
            self.deactivate();
            self.active = Some(ActiveField::activate(id, session, flags));
            if focused {
                self.focus_this_frame = None;
            }
        }

        let mut result = false;
        let mut exit = None;
        let keys = std::mem::take(&mut self.keys);
        match self.active.as_mut() {
            Some(field) if field.id == id => {
                self.active_seen = true;
                let step = field.run(keys, session, flags);
                result = if flags.contains(InputTextFlags::ENTER_RETURNS_TRUE) {
                    step.enter_pressed
                } else {
                    step.value_changed
                };
                exit = step.exit.map(|exit| (exit, field.edited));
            }
            _ => self.keys = keys,
        }

        let content = match &self.active {
            Some(field) if field.id == id => field.state.text().to_string(),
            _ => session.widget_text().into_owned(),
        };
        self.draw_filled(frame, StyleColor::FrameBg);
        self.draw_text(frame.min + style.frame_padding, &content, StyleColor::Text);
        if label_width > 0.0 {
            let label_pos = Vec2::new(
                frame.max.x + style.item_inner_spacing.x,
                pos.y + style.frame_padding.y,
            );
            self.draw_text(label_pos, shown, StyleColor::Text);
        }
        self.submit(label, ItemKind::Input, id, bounds);

        if let Some((exit, edited)) = exit {
            self.active = None;
            if exit == Exit::Commit && edited {
                self.window_mut().last_item_deactivated = true;
            }
        }
        result
    }

    fn is_item_deactivated_after_edit(&self) -> bool {
        self.window().last_item_deactivated
    }
}

impl Ui for HeadlessUi {
    fn open_popup(&mut self, name: &str) {
        let id = self.ids.get(name);
        self.open_popup_at(id);
    }

    fn open_popup_on_item_click(&mut self, name: &str) {
        let last = self.window().last_item_id;
        if last.is_some_and(|id| self.is_clicked(id, MouseButton::Right)) {
            self.open_popup(name);
        }
    }

    fn is_popup_open(&self, name: &str) -> bool {
        self.is_popup_open_at(self.ids.get(name))
    }

    // Headless windows never move or resize, so `flags` has nothing to act on.
    fn begin_popup(&mut self, name: &str, _flags: WindowFlags) -> bool {
        let id = self.ids.get(name);
        let pos = self.next_window_pos.take();
        let size = self.next_window_size.take();
        if !self.is_popup_open_at(id) {
            return false;
        }

        let pos = pos.unwrap_or(self.window().cursor);
        let size = size.unwrap_or(DEFAULT_POPUP_SIZE);
        let layer = self.popups.len() + 1;
        let window = Window::new(pos, size, layer, &self.style);
        let rect = window.rect();
        self.popups.push(PopupWindow { id, window });
        self.ids.push_id(id);

        self.draw_filled(rect, StyleColor::PopupBg);
        self.out.popups.push(rect);
        self.frame_popups.push((rect, layer));
        true
    }

    fn end_popup(&mut self) {
        if self.popups.pop().is_some() {
            self.ids.pop();
        } else {
            Self::warn_underflow("end_popup");
        }
    }

    fn close_current_popup(&mut self) {
        if let Some(popup) = self.popups.last() {
            let id = popup.id;
            self.open_popups.retain(|open| *open != id);
        }
    }

    fn set_next_window_pos(&mut self, pos: Vec2) {
        self.next_window_pos = Some(pos);
    }

    fn set_next_window_size(&mut self, size: Vec2) {
        self.next_window_size = Some(size);
    }

    fn button(&mut self, label: &str) -> bool {
        let id = self.ids.get(label);
        let padding = self.style.frame_padding;
        let shown = display_text(label);
        let size = self.calc_text_size(shown) + padding * 2.0;
        let rect = Rect::from_pos_size(self.window().cursor, size);
        self.draw_filled(rect, StyleColor::FrameBg);
        self.draw_text(rect.min + padding, shown, StyleColor::Text);
        self.submit(label, ItemKind::Button, id, rect);
        self.is_clicked(id, MouseButton::Left)
    }

    fn arrow_button(&mut self, label: &str, dir: Direction) -> bool {
        let id = self.ids.get(label);
        let side = self.style.frame_height();
        let rect = Rect::from_pos_size(self.window().cursor, Vec2::new(side, side));
        let glyph = match dir {
            Direction::Left => "<",
            Direction::Right => ">",
            Direction::Up => "^",
            Direction::Down => "v",
        };
        self.draw_filled(rect, StyleColor::FrameBg);
        self.draw_text(rect.min + self.style.frame_padding, glyph, StyleColor::Text);
        self.submit(label, ItemKind::Button, id, rect);
        self.is_clicked(id, MouseButton::Left)
    }

    fn selectable(&mut self, label: &str, selected: bool) -> bool {
        let id = self.ids.get(label);
        let size = Vec2::new(self.content_region_avail().x, self.style.font_size);
        let rect = Rect::from_pos_size(self.window().cursor, size);
        if selected {
            self.draw_filled(rect, StyleColor::FrameBg);
        }
        self.draw_text(rect.min, display_text(label), StyleColor::Text);
        self.submit(label, ItemKind::Selectable, id, rect);

        let pressed = self.is_clicked(id, MouseButton::Left);
        if pressed {
            self.close_current_popup();
        }
        pressed
    }

    fn separator(&mut self) {
        let spacing_y = self.style.item_spacing.y;
        let window = self.window();
        let min = Vec2::new(window.pos.x, window.cursor.y);
        let rect = Rect::new(min, Vec2::new(window.pos.x + window.size.x, min.y + 1.0));
        self.draw_filled(rect, StyleColor::Border);
        let window = self.window_mut();
        window.item_size(Vec2::new(0.0, 1.0), spacing_y);
        window.set_last_item(rect, None);
    }

    fn is_item_hovered(&self) -> bool {
        let window = self.window();
        window.layer == self.hover_layer
            && self.mouse_pos.is_some_and(|p| window.last_item.contains(p))
    }

    fn set_tooltip(&mut self, text: &str) {
        self.out.tooltip = Some(text.to_string());
    }
}
