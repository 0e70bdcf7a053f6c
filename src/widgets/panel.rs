//! Decorative group panels with a notched border.
//!
//! A panel is a bordered box whose top edge is interrupted where its label
//! sits. The border is one rectangle outline drawn four times, each pass
//! clipped to one half-plane around the label (left of it, right of it,
//! above it, below it). Together the four clips cover everything except
//! the label box, so no compound clip shape is needed.
//!
//! Panels nest. Each [`begin_panel`] records its label rectangle on the
//! context's [`PanelStack`]; [`end_panel`] pops it, so ends must mirror
//! begins.
//!
//! # Layout
//!
//! ```text
//! outer group
//! ├── full-width spacer (claims the panel width)
//! ├── half-frame indent, then label group
//! │   ├── half-frame indent + label text   <- label rect captured here
//! │   ├── spacer of one frame height + item spacing
//! │   └── body group (content region and item width shrunk)
//! └── trailing spacers
//! ```

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_event, emit_log};
use crate::frame::FrameContext;
use crate::geometry::{Rect, Vec2};
use crate::style::{StyleColor, StyleVar};

/// A panel begun and not yet ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelFrame {
    /// Screen-space bounds of the label text.
    pub label: Rect,
    /// Group depth right after the panel began; its end must see the same.
    pub group_depth: usize,
}

/// LIFO stack of open panels.
#[derive(Clone, Debug, Default)]
pub struct PanelStack {
    frames: Vec<PanelFrame>,
}

impl PanelStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: PanelFrame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<PanelFrame> {
        self.frames.pop()
    }

    /// The innermost open panel.
    #[must_use]
    pub fn last(&self) -> Option<&PanelFrame> {
        self.frames.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Open panels, outermost first.
    pub fn iter(&self) -> impl Iterator<Item = &PanelFrame> {
        self.frames.iter()
    }
}

/// The four half-plane clips around a label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipQuad {
    pub left: Rect,
    pub right: Rect,
    pub above: Rect,
    pub below: Rect,
}

impl ClipQuad {
    /// Clips around `label` widened by `spacing` on both sides.
    #[must_use]
    pub fn around(label: Rect, spacing: f32) -> Self {
        let notch = label.expand_x(spacing);
        let far = f32::MAX;
        Self {
            left: Rect::new(Vec2::new(-far, -far), Vec2::new(notch.min.x, far)),
            right: Rect::new(Vec2::new(notch.max.x, -far), Vec2::new(far, far)),
            above: Rect::new(
                Vec2::new(notch.min.x, -far),
                Vec2::new(notch.max.x, notch.min.y),
            ),
            below: Rect::new(
                Vec2::new(notch.min.x, notch.max.y),
                Vec2::new(notch.max.x, far),
            ),
        }
    }

    /// The clips in drawing order.
    #[must_use]
    pub fn passes(&self) -> [Rect; 4] {
        [self.left, self.right, self.above, self.below]
    }

    /// Whether any pass draws at `p`, i.e. `p` is outside the notch.
    #[must_use]
    pub fn covers(&self, p: Vec2) -> bool {
        self.passes().iter().any(|clip| clip.contains(p))
    }
}

/// Begin a panel labelled `name`. A negative `width` takes all remaining
/// horizontal space.
pub fn begin_panel<U: FrameContext + ?Sized>(ui: &mut U, name: &str, width: f32) {
    ui.begin_group();

    let item_spacing = ui.style().item_spacing;
    ui.push_style_var(StyleVar::FramePadding(Vec2::ZERO));
    ui.push_style_var(StyleVar::ItemSpacing(Vec2::ZERO));

    let frame_height = ui.frame_height();
    ui.begin_group();

    let width = if width < 0.0 {
        ui.content_region_avail().x
    } else {
        width
    };
    ui.dummy(Vec2::new(width, 0.0));

    ui.dummy(Vec2::new(frame_height * 0.5, 0.0));
    ui.same_line(0.0, 0.0);
    ui.begin_group();
    ui.dummy(Vec2::new(frame_height * 0.5, 0.0));
    ui.same_line(0.0, 0.0);
    ui.text(name);
    let label = ui.item_rect();
    ui.same_line(0.0, 0.0);
    ui.dummy(Vec2::new(0.0, frame_height + item_spacing.y));
    ui.begin_group();

    ui.pop_style_var(2);

    // Keep body content off the border's rounded right side.
    ui.inset_content_right(frame_height * 0.5);
    let item_width = ui.calc_item_width();
    ui.push_item_width((item_width - frame_height).max(0.0));

    let group_depth = ui.group_depth();
    ui.widget_state()
        .panels_mut()
        .push(PanelFrame { label, group_depth });
    emit_event("panel_open", name);
}

/// End the innermost panel and draw its border.
///
/// Fails without touching the context if no panel is open
/// ([`Error::PanelUnderflow`]) or if groups opened inside the panel were
/// left open or closed past it ([`Error::PanelMismatch`]).
pub fn end_panel<U: FrameContext + ?Sized>(ui: &mut U) -> Result<()> {
    let depth = ui.group_depth();
    let Some(&frame) = ui.widget_state().panels().last() else {
        emit_log(LogLevel::Error, "end_panel called with no open panel");
        return Err(Error::PanelUnderflow);
    };
    if frame.group_depth != depth {
        emit_log(
            LogLevel::Error,
            &format!(
                "end_panel at group depth {depth}, panel began at depth {}",
                frame.group_depth
            ),
        );
        return Err(Error::PanelMismatch {
            expected: frame.group_depth,
            found: depth,
        });
    }
    ui.widget_state().panels_mut().pop();

    ui.pop_item_width();

    let item_spacing = ui.style().item_spacing;
    ui.push_style_var(StyleVar::FramePadding(Vec2::ZERO));
    ui.push_style_var(StyleVar::ItemSpacing(Vec2::ZERO));

    let frame_height = ui.frame_height();

    ui.end_group();
    ui.end_group();

    ui.same_line(0.0, 0.0);
    ui.dummy(Vec2::new(frame_height * 0.5, 0.0));
    ui.dummy(Vec2::new(0.0, frame_height - frame_height * 0.5 - item_spacing.y));

    ui.end_group();

    let bounds = ui.item_rect();
    let half_frame = Vec2::new(frame_height * 0.25, frame_height) * 0.5;
    let border = Rect::new(
        bounds.min + half_frame,
        bounds.max - Vec2::new(half_frame.x, 0.0),
    );
    draw_notched_border(
        ui,
        border,
        &ClipQuad::around(frame.label, item_spacing.x),
        half_frame.x,
    );

    ui.pop_style_var(2);

    ui.inset_content_right(-frame_height * 0.5);

    ui.dummy(Vec2::ZERO);

    ui.end_group();

    let open = ui.widget_state().panels().len();
    emit_event("panel_close", &open.to_string());
    Ok(())
}

/// Run `body` inside a panel.
pub fn panel<U, R>(ui: &mut U, name: &str, width: f32, body: impl FnOnce(&mut U) -> R) -> Result<R>
where
    U: FrameContext + ?Sized,
{
    begin_panel(ui, name, width);
    let result = body(ui);
    end_panel(ui)?;
    Ok(result)
}

fn draw_notched_border<U: FrameContext + ?Sized>(
    ui: &mut U,
    border: Rect,
    clips: &ClipQuad,
    rounding: f32,
) {
    let color = ui.style_color(StyleColor::Border);
    for clip in clips.passes() {
        ui.push_clip_rect(clip.min, clip.max, true);
        ui.add_rect(border.min, border.max, color, rounding);
        ui.pop_clip_rect();
    }
}
