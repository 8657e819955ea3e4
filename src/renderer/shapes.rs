//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled rectangle rotated about its centre
///
/// `pos` is the top-left corner before rotation; `rotation` is in degrees.
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4], rotation: f32) -> Vec<Vertex> {
    let half = size / 2.0;
    let center = pos + half;
    let rot = Vec2::from_angle(rotation.to_radians());

    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .map(|c| center + rot.rotate(c));

    // Two triangles
    [0, 1, 2, 0, 2, 3]
        .iter()
        .map(|&i| Vertex::new(corners[i].x, corners[i].y, color))
        .collect()
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Segment count that keeps small circles cheap and big ones round
pub fn circle_segments(radius: f32) -> u32 {
    ((radius * 2.0) as u32).clamp(6, 48)
}
