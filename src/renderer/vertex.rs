//! GPU vertex format

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::draw::Color;
use crate::sim::ViewBounds;

/// Colored 2D vertex; world units until [`Vertex::to_ndc`] runs at upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    #[inline]
    pub fn at(p: Vec2, color: Color) -> Self {
        Self::new(p.x, p.y, color)
    }

    /// Same vertex projected through `bounds`
    pub fn to_ndc(self, bounds: &ViewBounds) -> Self {
        let (x, y) = bounds.to_ndc(self.position[0], self.position[1]);
        Self::new(x, y, self.color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}
