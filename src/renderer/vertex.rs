//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
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

    /// Stride of one vertex in an upload buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    use crate::Color;

    pub const BACKGROUND: Color = Color::BLACK;
    pub const PADDLE: Color = Color::GREEN;
    pub const BALL: Color = Color::RED;
    pub const HUD_TEXT: Color = Color::WHITE;
    pub const BANNER_BLOCK: Color = Color::WHITE;
    pub const BANNER_GLYPH: Color = Color::BLACK;
    pub const BANNER_SPARK: Color = Color::RED;
}
