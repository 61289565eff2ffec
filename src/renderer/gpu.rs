//! GPU data structures for the quad pipeline.
//!
//! Every fill is drawn as the shared unit quad, placed by a per-draw
//! [`UniformBlock`]. The block's byte layout is mirrored by the `Block`
//! struct in `quad.wgsl`; changing one without the other breaks rendering.

use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::geometry::{Rect, Size};

/// WGSL source of the quad vertex stage.
pub const QUAD_SHADER: &str = include_str!("quad.wgsl");

/// Alignment of uniform blocks packed into one buffer for dynamic offsets.
/// 256 is the default `min_uniform_buffer_offset_alignment` of wgpu limits.
pub const UNIFORM_STRIDE: usize = 256;

/// Per-draw uniform data for the vertex stage.
///
/// Maps the unit quad to clip space: `position * scale + offset`, with the
/// depth written to z. Texture coordinates follow the same pattern with
/// `uv_scale` and `uv_offset`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UniformBlock {
    /// Depth in [0, 1]; later draws get smaller values
    pub depth: f32,
    /// Padding so `scale` lands on an 8-byte boundary, as WGSL lays out vec2
    pub _pad0: f32,
    /// Quad-to-NDC scale
    pub scale: [f32; 2],
    /// Quad-to-NDC offset
    pub offset: [f32; 2],
    /// Quad-to-UV scale
    pub uv_scale: [f32; 2],
    /// Quad-to-UV offset
    pub uv_offset: [f32; 2],
    /// Padding for 16-byte alignment (wgpu uniform buffer requirement)
    pub _pad1: [f32; 2],
}

impl Default for UniformBlock {
    fn default() -> Self {
        Self {
            depth: 0.0,
            _pad0: 0.0,
            scale: [1.0, 1.0],
            offset: [0.0, 0.0],
            uv_scale: [1.0, 1.0],
            uv_offset: [0.0, 0.0],
            _pad1: [0.0, 0.0],
        }
    }
}

impl UniformBlock {
    /// Block that draws the unit quad over `rect`, given in logical pixels of a
    /// viewport of size `viewport` with y pointing down.
    pub fn for_rect(rect: Rect, viewport: Size, depth: f32) -> Self {
        let (vw, vh) = (viewport.width.max(f32::EPSILON), viewport.height.max(f32::EPSILON));
        Self {
            depth,
            scale: [2.0 * rect.width / vw, -2.0 * rect.height / vh],
            offset: [2.0 * rect.x / vw - 1.0, 1.0 - 2.0 * rect.y / vh],
            ..Default::default()
        }
    }

    /// Sample the given normalized sub-rect of a texture.
    pub fn with_uv_rect(mut self, uv: Rect) -> Self {
        self.uv_scale = [uv.width, uv.height];
        self.uv_offset = [uv.x, uv.y];
        self
    }

    /// Clip-space position of a unit-quad vertex, as the vertex stage computes it.
    pub fn apply(&self, position: [f32; 2]) -> [f32; 3] {
        [
            position[0] * self.scale[0] + self.offset[0],
            position[1] * self.scale[1] + self.offset[1],
            self.depth,
        ]
    }

    /// Texture coordinate of a unit-quad vertex.
    pub fn apply_uv(&self, position: [f32; 2]) -> [f32; 2] {
        [
            position[0] * self.uv_scale[0] + self.uv_offset[0],
            position[1] * self.uv_scale[1] + self.uv_offset[1],
        ]
    }

    /// Bind group layout entry for a buffer holding one block, visible to
    /// the vertex stage.
    pub fn layout_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<Self>() as u64),
            },
            count: None,
        }
    }
}

/// Pack blocks into one buffer, each starting at a multiple of `stride`.
///
/// `stride` is rounded up to the block size if smaller.
pub fn encode_uniforms(blocks: &[UniformBlock], stride: usize) -> Vec<u8> {
    let block_size = std::mem::size_of::<UniformBlock>();
    let stride = stride.max(block_size);
    let mut bytes = vec![0u8; stride * blocks.len()];
    for (i, block) in blocks.iter().enumerate() {
        let start = i * stride;
        bytes[start..start + block_size].copy_from_slice(bytemuck::bytes_of(block));
    }
    bytes
}

/// A single vertex of the unit quad (shared across all draws).
///
/// The unit quad spans [0,0] to [1,1] and is placed per draw by its
/// [`UniformBlock`].
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    /// Position in 0..1 range
    pub position: [f32; 2],
}

impl QuadVertex {
    /// Vertex buffer layout for the unit quad.
    pub fn desc() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: VertexStepMode::Vertex,
            attributes: &[VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: VertexFormat::Float32x2,
            }],
        }
    }
}

/// The shared unit quad vertices.
pub const QUAD_VERTICES: &[QuadVertex] = &[
    QuadVertex {
        position: [0.0, 0.0],
    }, // top-left
    QuadVertex {
        position: [1.0, 0.0],
    }, // top-right
    QuadVertex {
        position: [0.0, 1.0],
    }, // bottom-left
    QuadVertex {
        position: [1.0, 1.0],
    }, // bottom-right
];

/// Index buffer for the unit quad (two triangles).
pub const QUAD_INDICES: &[u16] = &[
    0, 1, 2, // top-left, top-right, bottom-left
    1, 3, 2, // top-right, bottom-right, bottom-left
];
