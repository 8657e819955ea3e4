//! Debris bursts spawned when bricks break
//!
//! Particles are decoration only: they never touch gameplay state.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Color;
use crate::consts::*;

/// Spark speed scale (px/s per unit of the -1..1 draw)
const SPARK_SPEED: f32 = 60.0;
const SPARK_RADIUS: f32 = 2.0;
const SPARK_LIFETIME: f32 = 1.0;

/// Burst look
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebrisStyle {
    /// Tumbling yellow/orange squares under gravity
    #[default]
    Explosion,
    /// Damped dots in the brick's color
    Sparks,
}

impl DebrisStyle {
    /// Particles per destroyed brick
    pub fn burst_count(self) -> usize {
        match self {
            DebrisStyle::Explosion => EXPLOSION_DEBRIS_COUNT,
            DebrisStyle::Sparks => SPARK_DEBRIS_COUNT,
        }
    }
}

/// How a particle is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParticleShape {
    Square { size: f32 },
    Dot { radius: f32 },
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Pixels per second
    pub vel: Vec2,
    /// Current color; alpha fades with remaining life
    pub color: Color,
    pub shape: ParticleShape,
    pub style: DebrisStyle,
    /// Seconds remaining
    pub life: f32,
    /// Seconds at spawn
    pub max_life: f32,
    /// Degrees
    pub rotation: f32,
    /// Revolutions per second
    pub rotation_speed: f32,
    initial_alpha: u8,
}

impl Particle {
    /// Explosion debris: random size, warm color, outward velocity and spin
    pub fn explosion<R: Rng>(rng: &mut R, pos: Vec2) -> Self {
        let size = rng.random_range(2.0..10.0);
        let shade: u8 = rng.random_range(0..100);
        let color = Color::rgb(255 - shade, 255 - shade / 2, 0);

        let angle = rng.random_range(0.0..360.0f32).to_radians();
        let speed: f32 = rng.random_range(50.0..200.0);
        let life = rng.random_range(0.5..1.5);

        Self {
            pos,
            vel: Vec2::from_angle(angle) * speed,
            color,
            shape: ParticleShape::Square { size },
            style: DebrisStyle::Explosion,
            life,
            max_life: life,
            rotation: rng.random_range(0.0..360.0),
            rotation_speed: rng.random_range(-1.0..1.0),
            initial_alpha: color.a,
        }
    }

    /// Spark: small dot in the brick color with a short fixed life
    pub fn spark<R: Rng>(rng: &mut R, pos: Vec2, color: Color) -> Self {
        let vel = Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)) * SPARK_SPEED;
        Self {
            pos,
            vel,
            color,
            shape: ParticleShape::Dot {
                radius: SPARK_RADIUS,
            },
            style: DebrisStyle::Sparks,
            life: SPARK_LIFETIME,
            max_life: SPARK_LIFETIME,
            rotation: 0.0,
            rotation_speed: 0.0,
            initial_alpha: color.a,
        }
    }

    /// Advance by `dt` seconds. Returns false once expired.
    pub fn update(&mut self, dt: f32) -> bool {
        self.pos += self.vel * dt;
        match self.style {
            DebrisStyle::Explosion => {
                self.vel.y += DEBRIS_GRAVITY * dt;
                self.rotation += self.rotation_speed * 360.0 * dt;
            }
            DebrisStyle::Sparks => {
                self.vel *= SPARK_DAMPING;
            }
        }

        self.life -= dt;
        self.color.a = self.faded_alpha();
        self.life > 0.0
    }

    /// Alpha proportional to the remaining fraction of life.
    /// Rounds up so it only reaches zero when life does.
    fn faded_alpha(&self) -> u8 {
        if self.max_life <= 0.0 {
            return 0;
        }
        let remaining = (self.life / self.max_life).clamp(0.0, 1.0);
        (self.initial_alpha as f32 * remaining).ceil() as u8
    }
}

/// Spawn one brick's worth of debris, dropping the oldest particles past `cap`
pub fn spawn_burst<R: Rng>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    style: DebrisStyle,
    pos: Vec2,
    color: Color,
    cap: usize,
) {
    if cap == 0 {
        return;
    }
    let count = style.burst_count();
    particles.reserve(count);
    for _ in 0..count {
        let particle = match style {
            DebrisStyle::Explosion => Particle::explosion(rng, pos),
            DebrisStyle::Sparks => Particle::spark(rng, pos, color),
        };
        particles.push(particle);
    }

    if particles.len() > cap {
        let excess = particles.len() - cap;
        particles.drain(..excess);
    }
}

/// Advance every particle and drop the expired ones in one pass
pub fn update_particles(particles: &mut Vec<Particle>, dt: f32) {
    particles.retain_mut(|p| p.update(dt));
}
