//! Draw operation recording and the GPU-facing data contract.
//!
//! - [`ops`]: operations, the scoped [`Recorder`] and the per-frame
//!   [`OperationStream`]
//! - [`flatten`](mod@flatten): turns a stream into positioned, clipped quads
//! - [`gpu`]: uniform and vertex layouts shared with `quad.wgsl`

pub mod flatten;
pub mod gpu;
pub mod ops;

pub use flatten::{flatten, DrawQuad, Flattened, HitRegion, WorldClip};
pub use gpu::{encode_uniforms, QuadVertex, UniformBlock, QUAD_INDICES, QUAD_SHADER, QUAD_VERTICES};
pub use ops::{check_balanced, is_balanced, HitShape, Layer, LayerKind, Op, OperationStream, Recorder, Scope};
