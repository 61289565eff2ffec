//! Builders for the three layers of a surface, back to front.
//!
//! Each builder records into its own [`Layer`], wrapped in one scope, so clip
//! and translate state never crosses from one layer into the next.

use std::time::Instant;

use crate::animation::{RippleFrame, RippleVisual};
use crate::geometry::{Padding, Rect, Size};
use crate::layout::{center_offset, inflate, Constraints};
use crate::press::PressHistory;
use crate::renderer::{Layer, LayerKind, Recorder};

use super::constants::DISABLED_ALPHA;
use super::style::{SurfaceShape, SurfaceStyle};
use super::{Content, RenderMode};

/// Clip to the surface outline, fill it, then draw one ripple per visible
/// press. Returns the layer and the number of ripples drawn.
pub(crate) fn background(
    size: Size,
    style: &SurfaceStyle,
    mode: RenderMode,
    history: &PressHistory,
    now: Instant,
) -> (Layer, usize) {
    Layer::record(LayerKind::Background, |rec| {
        rec.clip(style.shape.clip(size));

        if let Some(color) = style.background {
            let mut fill = color.premultiplied();
            if mode == RenderMode::Preview {
                fill = fill.mul_alpha(DISABLED_ALPHA);
            }
            rec.fill(Rect::from_size(size), fill);
        }

        let mut ripples = 0;
        for press in history.visible_entries(now) {
            if let RippleFrame::Visible(ripple) = history.config().evaluate(press, now, size) {
                ripple_ink(rec, &ripple);
                ripples += 1;
            }
        }
        ripples
    })
}

fn ripple_ink(rec: &mut Recorder, ripple: &RippleVisual) {
    let mut ink = rec.save();
    ink.translate(ripple.center_offset);
    ink.clip(ripple.clip());
    ink.fill(Rect::new(0.0, 0.0, ripple.size, ripple.size), ripple.color);
}

/// Lay out and record the content, centered and inset within the outer
/// constraints. Returns the layer and the stacked size.
pub(crate) fn content(
    outer: Constraints,
    inset: Padding,
    content: &mut impl Content,
) -> (Layer, Size) {
    // Centering drops the minimum; the inset shrinks what is left.
    let inner = outer.loosen().deflate(inset);

    let mut child = Recorder::new();
    let drawn = content.draw(&mut child, inner);
    let child_ops = child.finish();

    let padded = inflate(drawn, inset);
    let stacked = padded.max(outer.min_size());
    let offset = center_offset(stacked, padded) + inset.leading();

    Layer::record(LayerKind::Content, |rec| {
        rec.translate(offset);
        rec.append(child_ops);
        stacked
    })
}

/// Register the input region covering the whole surface.
pub(crate) fn hit_test(size: Size, shape: &SurfaceShape) -> Layer {
    let (layer, ()) = Layer::record(LayerKind::HitTest, |rec| {
        rec.hit_area(shape.hit_shape(), Rect::from_size(size));
    });
    layer
}
