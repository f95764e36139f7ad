//! Per-sprite GPU instance data

use bytemuck::{Pod, Zeroable};

/// One textured quad, ready for an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Top-left corner in screen pixels
    pub position: [f32; 2],
    /// Quad size in screen pixels
    pub size: [f32; 2],
    /// Normalized texture rect: u0, v0, u1, v1
    pub uv: [f32; 4],
    pub color: [f32; 4],
    /// Rotation (radians) about `position + origin`
    pub rotation: f32,
    pub origin: [f32; 2],
    pub _pad: f32,
}

impl SpriteInstance {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
            0 => Float32x2,
            1 => Float32x2,
            2 => Float32x4,
            3 => Float32x4,
            4 => Float32,
            5 => Float32x2,
        ];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &ATTRIBUTES,
        }
    }
}
