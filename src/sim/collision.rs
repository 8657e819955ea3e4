//! Collision detection and response for axis-aligned geometry
//!
//! Everything on the field is a box except the ball, and the ball is treated
//! as its bounding square for brick and paddle tests.

use glam::Vec2;

use super::state::{Ball, Brick, Paddle};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Bounding square of a ball
    pub fn of_ball(ball: &Ball) -> Self {
        let half = Vec2::splat(ball.radius);
        Self {
            min: ball.pos - half,
            max: ball.pos + half,
        }
    }

    /// Strict overlap (touching edges do not count)
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

/// Which boundary a ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
    Top,
}

impl Wall {
    /// Normal pointing back into the field
    pub fn normal(self) -> Vec2 {
        match self {
            Wall::Left => Vec2::X,
            Wall::Right => Vec2::NEG_X,
            Wall::Top => Vec2::Y,
        }
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Bounce a ball off the side and top walls of a field `field_width` wide
///
/// Velocity only flips while it still points out of the field, so a ball that
/// stays past an edge for a second frame keeps heading back in.
/// The bottom is open.
pub fn reflect_off_walls(ball: &mut Ball, field_width: f32) -> Option<Wall> {
    let bounds = Aabb::of_ball(ball);
    let mut hit = None;

    if bounds.min.x < 0.0 {
        hit = Some(Wall::Left);
    } else if bounds.max.x > field_width {
        hit = Some(Wall::Right);
    }
    if let Some(wall) = hit {
        let normal = wall.normal();
        if ball.vel.dot(normal) < 0.0 {
            ball.vel = reflect_velocity(ball.vel, normal);
        }
    }

    if bounds.min.y < 0.0 {
        let normal = Wall::Top.normal();
        if ball.vel.dot(normal) < 0.0 {
            ball.vel = reflect_velocity(ball.vel, normal);
        }
        hit = Some(Wall::Top);
    }

    hit
}

/// Ball bottom has reached the paddle top while horizontally overlapping it
pub fn touches_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y + ball.radius >= paddle.top()
        && ball.pos.x + ball.radius >= paddle.left()
        && ball.pos.x - ball.radius <= paddle.right()
}

/// Park the ball on the paddle and send it upward
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle) {
    ball.pos.y = paddle.top() - ball.radius;
    ball.vel.y = -ball.vel.y.abs();
}

/// Index of the first brick (in grid order) the ball overlaps
pub fn first_brick_hit(ball: &Ball, bricks: &[Brick]) -> Option<usize> {
    let bounds = Aabb::of_ball(ball);
    bricks.iter().position(|brick| bounds.overlaps(&brick.bounds()))
}

/// Ball has dropped fully below the bottom edge
pub fn ball_out_of_bounds(ball: &Ball, field_height: f32) -> bool {
    ball.pos.y - ball.radius > field_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use crate::consts::*;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(vx, vy))
    }

    #[test]
    fn test_reflect_velocity() {
        // Ball moving right, hits vertical wall (normal pointing left)
        let velocity = Vec2::new(100.0, 0.0);
        let normal = Vec2::new(-1.0, 0.0);

        let reflected = reflect_velocity(velocity, normal);
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }

    #[test]
    fn test_side_walls_flip_horizontal_velocity() {
        let mut ball = ball_at(5.0, 300.0, -3.0, -4.0);
        assert_eq!(reflect_off_walls(&mut ball, FIELD_WIDTH), Some(Wall::Left));
        assert_eq!(ball.vel, Vec2::new(3.0, -4.0));

        let mut ball = ball_at(795.0, 300.0, 3.0, 4.0);
        assert_eq!(reflect_off_walls(&mut ball, FIELD_WIDTH), Some(Wall::Right));
        assert_eq!(ball.vel, Vec2::new(-3.0, 4.0));
    }

    #[test]
    fn test_top_wall_flips_vertical_velocity() {
        let mut ball = ball_at(400.0, 4.0, 3.0, -4.0);
        assert_eq!(reflect_off_walls(&mut ball, FIELD_WIDTH), Some(Wall::Top));
        assert_eq!(ball.vel, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_no_double_flip_when_still_outside() {
        // Already heading back in: leave it alone
        let mut ball = ball_at(5.0, 300.0, 3.0, -4.0);
        reflect_off_walls(&mut ball, FIELD_WIDTH);
        assert_eq!(ball.vel, Vec2::new(3.0, -4.0));
    }

    #[test]
    fn test_bottom_is_open() {
        let mut ball = ball_at(400.0, 640.0, 3.0, 4.0);
        assert_eq!(reflect_off_walls(&mut ball, FIELD_WIDTH), None);
        assert_eq!(ball.vel, Vec2::new(3.0, 4.0));
        assert!(ball_out_of_bounds(&ball, FIELD_HEIGHT));
    }

    #[test]
    fn test_paddle_contact_and_bounce() {
        let paddle = Paddle::default();
        let mut ball = ball_at(450.0, 545.0, 3.0, 4.0);
        assert!(touches_paddle(&ball, &paddle));

        bounce_off_paddle(&mut ball, &paddle);
        assert_eq!(ball.pos.y, paddle.top() - BALL_RADIUS);
        assert_eq!(ball.vel.y, -4.0);
    }

    #[test]
    fn test_paddle_miss_when_outside_horizontally() {
        let paddle = Paddle::default();
        let ball = ball_at(100.0, 555.0, 3.0, 4.0);
        assert!(!touches_paddle(&ball, &paddle));
    }

    #[test]
    fn test_first_brick_hit_picks_grid_order() {
        let bricks = vec![
            Brick::new(Vec2::new(10.0, 50.0), 0, 0, Color::RED),
            Brick::new(Vec2::new(75.0, 50.0), 0, 1, Color::RED),
        ];
        // Straddles both bricks
        let ball = ball_at(72.0, 60.0, 3.0, -4.0);
        assert_eq!(first_brick_hit(&ball, &bricks), Some(0));

        let ball = ball_at(400.0, 300.0, 3.0, -4.0);
        assert_eq!(first_brick_hit(&ball, &bricks), None);
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::from_pos_size(Vec2::ZERO, Vec2::splat(10.0));
        let b = Aabb::from_pos_size(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        assert!(!a.overlaps(&b));
    }

    proptest! {
        #[test]
        fn wall_reflection_preserves_speed(
            x in -20.0f32..820.0,
            y in -20.0f32..600.0,
            vx in -12.0f32..12.0,
            vy in -12.0f32..12.0,
        ) {
            let mut ball = ball_at(x, y, vx, vy);
            let before = ball.vel.length();
            reflect_off_walls(&mut ball, FIELD_WIDTH);
            prop_assert!((ball.vel.length() - before).abs() < 1e-4);
        }

        #[test]
        fn paddle_bounce_always_goes_up(
            x in 340.0f32..560.0,
            vx in -12.0f32..12.0,
            vy in -12.0f32..12.0,
        ) {
            prop_assume!(vy != 0.0);
            let paddle = Paddle::default();
            let mut ball = ball_at(x, 548.0, vx, vy);
            prop_assert!(touches_paddle(&ball, &paddle));
            bounce_off_paddle(&mut ball, &paddle);
            prop_assert!(ball.vel.y < 0.0);
        }
    }
}
