//! Rendering module
//!
//! The game draws through the [`Renderer`] trait: filled rectangles, filled
//! circles and text runs. [`ShapeBatch`] tessellates those calls into a vertex
//! buffer and serves as the headless backend.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::Color;
use crate::sim::{GameState, ParticleShape};
pub use vertex::{Vertex, colors};

/// Draw-call sink for one frame at a time
pub trait Renderer {
    fn clear(&mut self, color: Color);
    /// `pos` is the top-left corner; `rotation` is in degrees about the centre
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color, rotation: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
    /// Finish the frame
    fn present(&mut self);
}

/// HUD character size
pub const HUD_TEXT_SIZE: f32 = 20.0;
/// HUD position
pub const HUD_POS: Vec2 = Vec2::new(10.0, 10.0);

/// Status line shown at the top of the field
pub fn hud_text(state: &GameState) -> String {
    format!(
        "Score: {} | Balls: {} | Level: {}",
        state.score, state.lives, state.level
    )
}

/// Draw the whole field: paddle, bricks, balls, debris, HUD
pub fn draw_scene<R: Renderer + ?Sized>(renderer: &mut R, state: &GameState) {
    renderer.clear(colors::BACKGROUND);

    renderer.fill_rect(state.paddle.pos, state.paddle.size, colors::PADDLE, 0.0);

    for brick in &state.bricks {
        renderer.fill_rect(brick.pos, brick.size, brick.color, 0.0);
    }

    for ball in &state.balls {
        renderer.fill_circle(ball.pos, ball.radius, colors::BALL);
    }

    for particle in &state.particles {
        match particle.shape {
            ParticleShape::Square { size } => renderer.fill_rect(
                particle.pos,
                Vec2::splat(size),
                particle.color,
                particle.rotation,
            ),
            ParticleShape::Dot { radius } => {
                renderer.fill_circle(particle.pos, radius, particle.color)
            }
        }
    }

    renderer.draw_text(&hud_text(state), HUD_POS, HUD_TEXT_SIZE, colors::HUD_TEXT);
}

/// A text run recorded for the frame
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
}

/// Headless renderer that tessellates draw calls into vertices
#[derive(Debug, Default)]
pub struct ShapeBatch {
    clear_color: Option<Color>,
    vertices: Vec<Vertex>,
    texts: Vec<TextRun>,
    /// Last presented frame
    frame_vertices: Vec<Vertex>,
    frame_texts: Vec<TextRun>,
    frames_presented: u64,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices of the last presented frame
    pub fn vertices(&self) -> &[Vertex] {
        &self.frame_vertices
    }

    /// Raw bytes of the last presented frame, ready for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.frame_vertices)
    }

    /// Text runs of the last presented frame
    pub fn texts(&self) -> &[TextRun] {
        &self.frame_texts
    }

    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Renderer for ShapeBatch {
    fn clear(&mut self, color: Color) {
        self.clear_color = Some(color);
        self.vertices.clear();
        self.texts.clear();
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color, rotation: f32) {
        if color.a == 0 {
            return;
        }
        self.vertices
            .extend(shapes::rect(pos, size, color.to_f32(), rotation));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if color.a == 0 {
            return;
        }
        self.vertices.extend(shapes::circle(
            center,
            radius,
            color.to_f32(),
            shapes::circle_segments(radius),
        ));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.texts.push(TextRun {
            text: text.to_owned(),
            pos,
            size,
            color,
        });
    }

    fn present(&mut self) {
        self.frame_vertices = std::mem::take(&mut self.vertices);
        self.frame_texts = std::mem::take(&mut self.texts);
        self.frames_presented += 1;
    }
}
