//! Operation stream flattening with world offset and clip computation.
//!
//! Walks a stream once, tracking the translate and clip state that
//! `Save`/`Restore` scope, and turns every fill into a [`DrawQuad`] carrying
//! its world rect and the clips it is drawn under.

use crate::error::{InvariantResult, InvariantViolation};
use crate::geometry::{Color, Point, Rect, RoundedRect, Size, Vector};

use super::gpu::UniformBlock;
use super::ops::{HitShape, Op};

/// A clip shape placed in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldClip {
    /// World position of the shape's top-left corner
    pub origin: Point,
    pub shape: RoundedRect,
}

impl WorldClip {
    /// Axis-aligned bounds in world coordinates.
    pub fn bounds(&self) -> Rect {
        self.shape.bounds().offset(self.origin.to_vector())
    }

    pub fn contains(&self, point: Point) -> bool {
        self.shape.contains(point - self.origin.to_vector())
    }
}

/// A fill ready for GPU submission.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawQuad {
    /// Fill rect in world coordinates
    pub rect: Rect,
    /// Premultiplied fill color
    pub color: Color,
    /// Clips in effect, outermost first
    pub clips: Vec<WorldClip>,
    /// Intersection of the clip bounds, usable as a scissor rect
    pub scissor: Option<Rect>,
    /// Vertex-stage placement, depth included
    pub uniforms: UniformBlock,
}

impl DrawQuad {
    /// Whether a world point is painted by this quad.
    pub fn covers(&self, point: Point) -> bool {
        self.rect.contains(point) && self.clips.iter().all(|clip| clip.contains(point))
    }
}

/// An input region in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub shape: HitShape,
    pub rect: Rect,
    /// Number of clips in effect where the region was registered
    pub clip_depth: usize,
}

/// Result of flattening one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flattened {
    /// Quads in back-to-front order
    pub quads: Vec<DrawQuad>,
    pub hit_regions: Vec<HitRegion>,
}

#[derive(Debug, Clone, Default)]
struct State {
    offset: Vector,
    clips: Vec<WorldClip>,
}

/// Flatten operations for a viewport of the given size.
///
/// Fills that are empty, fully transparent or clipped away entirely are
/// dropped. Depths decrease from the first quad to the last, so later
/// quads win a less-than depth test.
pub fn flatten(ops: &[Op], viewport: Size) -> InvariantResult<Flattened> {
    let mut stack: Vec<State> = Vec::new();
    let mut state = State::default();
    let mut pending: Vec<(Rect, Color, Vec<WorldClip>, Option<Rect>)> = Vec::new();
    let mut hit_regions = Vec::new();

    for (index, op) in ops.iter().enumerate() {
        match op {
            Op::Save => stack.push(state.clone()),
            Op::Restore => {
                state = stack
                    .pop()
                    .ok_or(InvariantViolation::UnbalancedRestore { index })?;
            }
            Op::Translate(delta) => state.offset = state.offset + *delta,
            Op::Clip(shape) => state.clips.push(WorldClip {
                origin: Point::ORIGIN + state.offset,
                shape: *shape,
            }),
            Op::Fill { rect, color } => {
                let world = rect.offset(state.offset);
                if world.size().is_empty() || color.a <= 0.0 {
                    continue;
                }
                let scissor = clip_bounds(&state.clips);
                if !state.clips.is_empty() {
                    let visible = scissor.and_then(|s| s.intersect(&world));
                    if visible.is_none() {
                        log::trace!("fill at op {} clipped away", index);
                        continue;
                    }
                }
                pending.push((world, *color, state.clips.clone(), scissor));
            }
            Op::HitArea { shape, rect } => hit_regions.push(HitRegion {
                shape: *shape,
                rect: rect.offset(state.offset),
                clip_depth: state.clips.len(),
            }),
        }
    }

    let count = pending.len() as f32;
    let quads = pending
        .into_iter()
        .enumerate()
        .map(|(i, (rect, color, clips, scissor))| {
            let depth = 1.0 - (i as f32 + 1.0) / (count + 1.0);
            DrawQuad {
                rect,
                color,
                clips,
                scissor,
                uniforms: UniformBlock::for_rect(rect, viewport, depth),
            }
        })
        .collect();

    Ok(Flattened {
        quads,
        hit_regions,
    })
}

fn clip_bounds(clips: &[WorldClip]) -> Option<Rect> {
    let mut clips = clips.iter();
    let first = clips.next()?.bounds();
    clips.try_fold(first, |acc, clip| acc.intersect(&clip.bounds()))
}
