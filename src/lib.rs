//! Breakout Remix - a brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Simulation (ball motion, collisions, bricks, debris, game state)
//! - `renderer`: Draw-call collaborator and headless shape batcher
//! - `audio`: Sound cues and the clip player
//! - `input`: Directional key sources (including an autopilot)
//! - `assets`: Startup font/clip loading
//! - `banner`: Blocking block-letter message animations
//! - `game`: Frame driver tying it all together
//! - `settings`: Player preferences

pub mod assets;
pub mod audio;
pub mod banner;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{AssetError, Assets};
pub use game::Game;
pub use settings::{DebrisStyle, QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Frame rate the simulation is tuned for
    pub const FRAME_RATE: u32 = 60;
    /// Nominal frame delta (seconds)
    pub const FRAME_DT: f32 = 1.0 / FRAME_RATE as f32;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_SIZE: Vec2 = Vec2::new(200.0, 20.0);
    pub const PADDLE_START: Vec2 = Vec2::new(350.0, 550.0);
    /// Horizontal step per frame while a key is held
    pub const PADDLE_STEP: f32 = 7.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_POS: Vec2 = Vec2::new(400.0, 300.0);
    /// Per-frame velocity (scaled by the level speed multiplier)
    pub const BALL_START_VEL: Vec2 = Vec2::new(3.0, -4.0);
    /// Respawned balls sit this far above the paddle top
    pub const BALL_RESPAWN_LIFT: f32 = 20.0;

    /// Brick grid
    pub const BRICK_SIZE: Vec2 = Vec2::new(60.0, 20.0);
    pub const BRICK_GAP: f32 = 5.0;
    pub const BRICK_ORIGIN: Vec2 = Vec2::new(10.0, 50.0);
    pub const BRICK_COLUMNS: usize = 10;
    pub const START_ROWS: usize = 3;

    /// Session defaults
    pub const START_LIVES: u32 = 3;
    pub const SCORE_PER_BRICK: u64 = 100;
    pub const SPEED_STEP_PER_LEVEL: f32 = 0.1;

    /// Staggered brick fall
    pub const BRICK_FALL_DELAY: f32 = 7.0;
    pub const BRICK_FALL_INTERVAL: f32 = 0.5;
    pub const BRICK_FALL_STEP: f32 = 50.0;

    /// Debris
    pub const EXPLOSION_DEBRIS_COUNT: usize = 10;
    pub const SPARK_DEBRIS_COUNT: usize = 20;
    pub const DEBRIS_GRAVITY: f32 = 50.0;
    pub const SPARK_DAMPING: f32 = 0.98;
}

/// RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Normalized `[r, g, b, a]` for vertex colors
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Brick colors, cycled by row
pub const BRICK_PALETTE: [Color; 5] = [
    Color::RED,
    Color::YELLOW,
    Color::GREEN,
    Color::BLUE,
    Color::MAGENTA,
];
