//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Texture slot value for untextured (solid color) vertices
pub const NO_TEXTURE: u32 = u32::MAX;

/// Textured 2D vertex with tint color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
    /// `TextureId` index, or `NO_TEXTURE`
    pub texture: u32,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4], texture: u32) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            color,
            texture,
        }
    }

    pub const fn solid(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self::new(x, y, 0.0, 0.0, color, NO_TEXTURE)
    }
}

/// Colors for game elements
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    /// Daytime sky behind everything
    pub const SKY: [f32; 4] = [0.31, 0.75, 0.79, 1.0];
}
