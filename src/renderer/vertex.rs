//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
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

/// Colors for game elements
pub mod colors {
    pub const BRICK: [f32; 4] = [0.373, 0.176, 0.741, 1.0];
    pub const PADDLE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const CLEAR: [f32; 4] = [0.94, 0.94, 0.96, 1.0];

    /// Per-ball palette, indexed by `Ball::color`
    const BALLS: [[f32; 4]; 2] = [
        [0.0, 0.867, 0.145, 1.0], // primary: green
        [1.0, 0.702, 0.0, 1.0],   // second ball: amber
    ];

    pub fn ball(index: u32) -> [f32; 4] {
        BALLS[index as usize % BALLS.len()]
    }
}
