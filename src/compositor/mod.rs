//! Layer compositor for interactive surfaces.
//!
//! A surface is drawn as three layers, back to front:
//!
//! 1. **Background**: clip to the surface outline, fill, then one ripple per
//!    visible press
//! 2. **Content**: the caller's drawing, centered and inset
//! 3. **Hit test**: an invisible input region covering the surface
//!
//! Composition is a pure function of the [`FrameContext`], the
//! [`SurfaceStyle`] and the [`PressHistory`]. A [`Surface`] bundles the latter
//! two with the redraw bookkeeping a frame loop needs:
//!
//! ```
//! use std::time::{Duration, Instant};
//! use inkstack::prelude::*;
//!
//! let mut surface = Surface::new(SurfaceStyle::button(Color::from_hex(0x3F51B5)));
//! let t0 = Instant::now();
//! surface.press(Point::new(20.0, 10.0), t0);
//!
//! let cx = FrameContext::new(Constraints::tight(Size::new(120.0, 40.0)), t0 + Duration::from_millis(16));
//! let frame = surface.compose(&cx, |_: &mut Recorder, _: Constraints| Size::new(60.0, 16.0));
//! assert!(frame.needs_redraw());
//! assert_eq!(frame.size, Size::new(120.0, 40.0));
//! ```

pub mod constants;
pub mod invalidation;
mod layers;
mod style;

use std::time::Instant;

use crate::error::{check_finite_size, check_size, InvariantResult};
use crate::geometry::{Point, Size};
use crate::layout::Constraints;
use crate::press::PressHistory;
use crate::renderer::{check_balanced, flatten, Flattened, OperationStream, Recorder};

pub use constants::DISABLED_ALPHA;
pub use invalidation::RedrawFlags;
pub use style::{SurfaceShape, SurfaceStyle};

/// How a surface is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Normal, input-receiving rendering
    #[default]
    Interactive,
    /// Non-interactive rendering (previews, disabled state); the background
    /// is dimmed by [`DISABLED_ALPHA`]
    Preview,
}

/// Content drawn inside a surface.
///
/// Receives the constraints left after centering and insetting and returns
/// the size it used. Closures `FnMut(&mut Recorder, Constraints) -> Size`
/// implement it.
pub trait Content {
    fn draw(&mut self, recorder: &mut Recorder, constraints: Constraints) -> Size;
}

impl<F> Content for F
where
    F: FnMut(&mut Recorder, Constraints) -> Size,
{
    fn draw(&mut self, recorder: &mut Recorder, constraints: Constraints) -> Size {
        self(recorder, constraints)
    }
}

/// Per-frame inputs from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    pub constraints: Constraints,
    /// Frame time every ripple is evaluated at
    pub now: Instant,
    pub mode: RenderMode,
}

impl FrameContext {
    pub fn new(constraints: Constraints, now: Instant) -> Self {
        Self {
            constraints,
            now,
            mode: RenderMode::Interactive,
        }
    }

    pub fn mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Output of composing one surface for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Background, content and hit-test layers, in that order
    pub ops: OperationStream,
    /// Size the surface occupies
    pub size: Size,
    /// Number of ripples drawn
    pub ripples: usize,
}

impl Frame {
    /// Whether a ripple is still animating and the host should draw again.
    pub fn needs_redraw(&self) -> bool {
        self.ripples > 0
    }

    /// Flatten the operations for a viewport the size of this surface.
    pub fn flatten(&self) -> InvariantResult<Flattened> {
        flatten(self.ops.ops(), self.size)
    }
}

/// Compose a surface.
///
/// # Panics
///
/// Panics if a constraint bound is negative or NaN, a minimum bound is
/// infinite, the surface size comes out infinite, or the style's corner radii
/// are invalid.
pub fn compose(
    cx: &FrameContext,
    style: &SurfaceStyle,
    history: &PressHistory,
    content: impl Content,
) -> Frame {
    match try_compose(cx, style, history, content) {
        Ok(frame) => frame,
        Err(violation) => panic!("{violation}"),
    }
}

/// Fallible form of [`compose`].
pub fn try_compose(
    cx: &FrameContext,
    style: &SurfaceStyle,
    history: &PressHistory,
    mut content: impl Content,
) -> InvariantResult<Frame> {
    let outer = cx.constraints;
    check_finite_size(outer.min_width, outer.min_height)?;
    check_size(outer.max_width, outer.max_height)?;
    style.shape.validate()?;

    let (content_layer, stacked) = layers::content(outer, style.inset, &mut content);
    let size = outer.constrain(stacked.max(outer.min_size()));
    check_finite_size(size.width, size.height)?;

    let (background, ripples) = layers::background(size, style, cx.mode, history, cx.now);
    let hit = layers::hit_test(size, &style.shape);

    let ops = OperationStream::from_layers([background, content_layer, hit]);
    check_balanced(ops.ops())?;
    log::trace!(
        "composed {}x{} surface: {} ops, {} ripples",
        size.width,
        size.height,
        ops.len(),
        ripples
    );

    Ok(Frame { ops, size, ripples })
}

/// An interactive surface: style, press history and pending redraw reasons.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    style: SurfaceStyle,
    history: PressHistory,
    pending: RedrawFlags,
}

impl Surface {
    pub fn new(style: SurfaceStyle) -> Self {
        Self::with_history(style, PressHistory::new())
    }

    pub fn with_history(style: SurfaceStyle, history: PressHistory) -> Self {
        Self {
            style,
            history,
            pending: RedrawFlags::empty(),
        }
    }

    pub fn style(&self) -> &SurfaceStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: SurfaceStyle) {
        self.style = style;
    }

    pub fn history(&self) -> &PressHistory {
        &self.history
    }

    /// Record a press-down at a position in surface coordinates.
    ///
    /// # Panics
    ///
    /// Panics if a press is already in progress.
    pub fn press(&mut self, position: Point, now: Instant) {
        self.history.record_press(position, now);
        self.pending |= RedrawFlags::PRESS_CHANGED;
    }

    /// Fallible form of [`Surface::press`].
    pub fn try_press(&mut self, position: Point, now: Instant) -> InvariantResult<()> {
        self.history.try_record_press(position, now)?;
        self.pending |= RedrawFlags::PRESS_CHANGED;
        Ok(())
    }

    /// Record a press-up. Returns `false` if no press was in progress.
    pub fn release(&mut self, now: Instant) -> bool {
        let released = self.history.record_release(now);
        if released {
            self.pending |= RedrawFlags::PRESS_CHANGED;
        }
        released
    }

    /// Cancel the in-progress press. Returns `false` if there was none.
    pub fn cancel(&mut self, now: Instant) -> bool {
        let cancelled = self.history.cancel(now);
        if cancelled {
            self.pending |= RedrawFlags::PRESS_CHANGED;
        }
        cancelled
    }

    /// Why the surface needs another frame, if it does.
    pub fn redraw_flags(&self) -> RedrawFlags {
        self.pending
    }

    pub fn needs_frame(&self) -> bool {
        self.pending.needs_redraw()
    }

    /// Compose this surface for a frame.
    ///
    /// Clears the pending input flags; keeps [`RedrawFlags::ANIMATING`] set
    /// while a ripple is visible.
    pub fn compose(&mut self, cx: &FrameContext, content: impl Content) -> Frame {
        let frame = compose(cx, &self.style, &self.history, content);
        self.pending = if frame.needs_redraw() {
            RedrawFlags::ANIMATING
        } else {
            RedrawFlags::empty()
        };
        frame
    }

    /// Drop decayed presses after the frame for `now` has been drawn.
    pub fn end_frame(&mut self, now: Instant) -> usize {
        self.history.prune(now)
    }
}
