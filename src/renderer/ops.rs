//! Draw operations and the recorder that produces them.
//!
//! Operations are plain data. A layer records its operations into its own
//! [`Recorder`]; a frame's [`OperationStream`] is the concatenation of its
//! layers. Clip and transform state is scoped with [`Recorder::save`], whose
//! guard emits the matching [`Op::Restore`] when dropped, on every exit path.

use std::ops::{Deref, DerefMut, Range};

use crate::error::{InvariantResult, InvariantViolation};
use crate::geometry::{Color, Rect, RoundedRect, Vector};

/// Shape of an input region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitShape {
    Rect,
    /// The ellipse inscribed in the region's rect
    Ellipse,
}

/// A single drawing directive in the coordinate space set up by the
/// preceding transforms.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// Push the current transform and clip state.
    Save,
    /// Pop back to the state of the matching `Save`.
    Restore,
    /// Move the local origin.
    Translate(Vector),
    /// Intersect the clip with a rounded rect anchored at the local origin.
    Clip(RoundedRect),
    /// Paint a rect with a premultiplied color, inside the current clip.
    Fill { rect: Rect, color: Color },
    /// Register an input region. Paints nothing.
    HitArea { shape: HitShape, rect: Rect },
}

/// Records operations for one layer or one piece of content.
#[derive(Debug, Default)]
pub struct Recorder {
    ops: Vec<Op>,
    depth: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a state scope. The returned guard restores the state when dropped.
    pub fn save(&mut self) -> Scope<'_> {
        self.ops.push(Op::Save);
        self.depth += 1;
        Scope { recorder: self }
    }

    pub fn translate(&mut self, offset: Vector) {
        if !offset.is_zero() {
            self.ops.push(Op::Translate(offset));
        }
    }

    pub fn clip(&mut self, shape: RoundedRect) {
        self.ops.push(Op::Clip(shape));
    }

    pub fn fill(&mut self, rect: Rect, color: Color) {
        self.ops.push(Op::Fill { rect, color });
    }

    pub fn hit_area(&mut self, shape: HitShape, rect: Rect) {
        self.ops.push(Op::HitArea { shape, rect });
    }

    /// Append operations recorded elsewhere, e.g. a measured child.
    ///
    /// A `Restore` in `ops` only closes a `Save` from the same batch; one that
    /// would pop a scope of this recorder is dropped. Saves the batch leaves
    /// open count toward [`Recorder::depth`] and are closed like any other.
    pub fn append(&mut self, ops: Vec<Op>) {
        let mut opened = 0usize;
        let mut dropped = 0usize;
        self.ops.reserve(ops.len());
        for op in ops {
            match op {
                Op::Save => opened += 1,
                Op::Restore if opened == 0 => {
                    dropped += 1;
                    continue;
                }
                Op::Restore => opened -= 1,
                _ => {}
            }
            self.ops.push(op);
        }
        if dropped > 0 {
            log::debug!("dropped {dropped} appended restores with no matching save");
        }
        self.depth += opened;
    }

    /// Number of scopes currently open.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Close any scope left open (a leaked guard) and hand out the operations.
    pub fn finish(mut self) -> Vec<Op> {
        if self.depth > 0 {
            log::debug!("closing {} scopes left open by recorded content", self.depth);
        }
        while self.depth > 0 {
            self.ops.push(Op::Restore);
            self.depth -= 1;
        }
        self.ops
    }
}

/// Guard for a scope opened by [`Recorder::save`].
///
/// Derefs to the recorder so drawing continues through the guard.
#[derive(Debug)]
pub struct Scope<'a> {
    recorder: &'a mut Recorder,
}

impl Deref for Scope<'_> {
    type Target = Recorder;

    fn deref(&self) -> &Recorder {
        self.recorder
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Recorder {
        self.recorder
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        // A guard forgotten and then closed by `finish` cannot reach here twice.
        if self.recorder.depth > 0 {
            self.recorder.depth -= 1;
            self.recorder.ops.push(Op::Restore);
        }
    }
}

/// Which part of a surface a layer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// Clip, fill and ripples
    Background,
    /// Inset, centered content
    Content,
    /// Invisible input region
    HitTest,
}

/// The immutable output of one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    kind: LayerKind,
    ops: Vec<Op>,
}

impl Layer {
    /// Record a layer. Its operations are wrapped in one scope so nothing it
    /// pushes is visible to the next layer.
    pub fn record<R>(kind: LayerKind, f: impl FnOnce(&mut Recorder) -> R) -> (Self, R) {
        let mut recorder = Recorder::new();
        let result = {
            let mut scope = recorder.save();
            f(&mut scope)
        };
        let layer = Self {
            kind,
            ops: recorder.finish(),
        };
        (layer, result)
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }
}

/// Ordered operations for one frame, back to front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationStream {
    ops: Vec<Op>,
    spans: Vec<(LayerKind, Range<usize>)>,
}

impl OperationStream {
    /// Concatenate layers in the given order.
    pub fn from_layers(layers: impl IntoIterator<Item = Layer>) -> Self {
        let mut stream = Self::default();
        for layer in layers {
            let start = stream.ops.len();
            stream.ops.extend(layer.ops);
            stream.spans.push((layer.kind, start..stream.ops.len()));
        }
        stream
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Op> {
        self.ops.iter()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Layer kinds in emission order.
    pub fn layer_order(&self) -> Vec<LayerKind> {
        self.spans.iter().map(|(kind, _)| *kind).collect()
    }

    /// Operations of the first layer of the given kind.
    pub fn layer(&self, kind: LayerKind) -> Option<&[Op]> {
        self.spans
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, range)| &self.ops[range.clone()])
    }

    /// Index range of the first layer of the given kind.
    pub fn layer_range(&self, kind: LayerKind) -> Option<Range<usize>> {
        self.spans
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, range)| range.clone())
    }

    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }
}

impl<'a> IntoIterator for &'a OperationStream {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

/// Check that every `Save` has a matching `Restore` and no `Restore`
/// underflows.
pub fn check_balanced(ops: &[Op]) -> InvariantResult<()> {
    let mut depth = 0usize;
    for (index, op) in ops.iter().enumerate() {
        match op {
            Op::Save => depth += 1,
            Op::Restore => {
                if depth == 0 {
                    return Err(InvariantViolation::UnbalancedRestore { index });
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    if depth > 0 {
        return Err(InvariantViolation::UnclosedSave { open: depth });
    }
    Ok(())
}

/// Whether every `Save` has a matching `Restore` and no `Restore` underflows.
pub fn is_balanced(ops: &[Op]) -> bool {
    check_balanced(ops).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    #[test]
    fn test_scope_restores_on_drop() {
        let mut rec = Recorder::new();
        {
            let mut scope = rec.save();
            scope.translate(Vector::new(1.0, 2.0));
            assert_eq!(scope.depth(), 1);
        }
        assert_eq!(rec.depth(), 0);
        assert_eq!(
            rec.ops(),
            &[Op::Save, Op::Translate(Vector::new(1.0, 2.0)), Op::Restore]
        );
    }

    #[test]
    fn test_nested_scopes() {
        let mut rec = Recorder::new();
        {
            let mut outer = rec.save();
            outer.clip(RoundedRect::rect(Size::new(10.0, 10.0)));
            {
                let mut inner = outer.save();
                inner.fill(Rect::new(0.0, 0.0, 5.0, 5.0), Color::WHITE);
            }
            outer.fill(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        }
        let ops = rec.finish();
        assert!(is_balanced(&ops));
        assert_eq!(ops.first(), Some(&Op::Save));
        assert_eq!(ops.last(), Some(&Op::Restore));
        assert_eq!(ops.iter().filter(|op| **op == Op::Restore).count(), 2);
    }

    #[test]
    fn test_scope_restores_on_early_return() {
        fn draw(rec: &mut Recorder, skip: bool) -> bool {
            let mut scope = rec.save();
            scope.translate(Vector::new(3.0, 3.0));
            if skip {
                return false;
            }
            scope.fill(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
            true
        }

        let mut rec = Recorder::new();
        assert!(!draw(&mut rec, true));
        assert!(draw(&mut rec, false));
        assert!(is_balanced(rec.ops()));
    }

    #[test]
    fn test_finish_closes_leaked_scopes() {
        let mut rec = Recorder::new();
        std::mem::forget(rec.save());
        rec.translate(Vector::new(4.0, 0.0));
        assert_eq!(rec.depth(), 1);
        let ops = rec.finish();
        assert!(is_balanced(&ops));
        assert_eq!(ops.last(), Some(&Op::Restore));
    }

    #[test]
    fn test_zero_translate_is_skipped() {
        let mut rec = Recorder::new();
        rec.translate(Vector::ZERO);
        assert!(rec.is_empty());
    }

    #[test]
    fn test_layer_record_wraps_in_scope() {
        let (layer, value) = Layer::record(LayerKind::Content, |rec| {
            rec.translate(Vector::new(2.0, 2.0));
            42
        });
        assert_eq!(value, 42);
        assert_eq!(layer.kind(), LayerKind::Content);
        assert_eq!(
            layer.ops(),
            &[Op::Save, Op::Translate(Vector::new(2.0, 2.0)), Op::Restore]
        );
    }

    #[test]
    fn test_stream_concatenates_layers() {
        let (a, _) = Layer::record(LayerKind::Background, |rec| {
            rec.fill(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE)
        });
        let (b, _) = Layer::record(LayerKind::HitTest, |rec| {
            rec.hit_area(HitShape::Rect, Rect::new(0.0, 0.0, 1.0, 1.0))
        });
        let stream = OperationStream::from_layers([a, b]);

        assert_eq!(stream.len(), 6);
        assert_eq!(
            stream.layer_order(),
            vec![LayerKind::Background, LayerKind::HitTest]
        );
        assert_eq!(stream.layer_range(LayerKind::HitTest), Some(3..6));
        assert!(matches!(
            stream.layer(LayerKind::HitTest),
            Some([Op::Save, Op::HitArea { .. }, Op::Restore])
        ));
        assert!(stream.layer(LayerKind::Content).is_none());
        assert_eq!((&stream).into_iter().count(), 6);
    }

    #[test]
    fn test_append_tracks_depth() {
        let mut rec = Recorder::new();
        rec.append(vec![
            Op::Save,
            Op::Translate(Vector::new(50.0, 50.0)),
            Op::Clip(RoundedRect::circle(2.0)),
        ]);
        assert_eq!(rec.depth(), 1);
        let ops = rec.finish();
        assert!(is_balanced(&ops));
        assert_eq!(ops.last(), Some(&Op::Restore));
    }

    #[test]
    fn test_append_cannot_pop_parent_scope() {
        let mut rec = Recorder::new();
        {
            let mut scope = rec.save();
            scope.append(vec![Op::Save, Op::Restore, Op::Restore]);
            assert_eq!(scope.depth(), 1);
        }
        assert_eq!(rec.ops(), &[Op::Save, Op::Save, Op::Restore, Op::Restore]);
        assert_eq!(rec.depth(), 0);
    }

    #[test]
    fn test_check_balanced_reports_position() {
        assert_eq!(
            check_balanced(&[Op::Save, Op::Restore, Op::Restore]),
            Err(InvariantViolation::UnbalancedRestore { index: 2 })
        );
        assert_eq!(
            check_balanced(&[Op::Save, Op::Save, Op::Restore]),
            Err(InvariantViolation::UnclosedSave { open: 1 })
        );
        assert_eq!(check_balanced(&[Op::Save, Op::Restore]), Ok(()));
    }

    #[test]
    fn test_is_balanced() {
        assert!(is_balanced(&[]));
        assert!(is_balanced(&[Op::Save, Op::Restore]));
        assert!(!is_balanced(&[Op::Save]));
        assert!(!is_balanced(&[Op::Restore, Op::Save]));
    }
}
