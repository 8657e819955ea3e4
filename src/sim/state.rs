//! Game state and core simulation types
//!
//! Every counter the session needs lives on [`GameState`]; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::grid::{BrickFall, generate_grid};
use super::particles::{DebrisStyle, Particle};
use crate::Color;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Brick set emptied; waiting for the win sequence to advance the level
    LevelCleared,
    /// No balls and no lives left
    GameOver,
}

/// Something that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball bounced off the paddle
    PaddleHit,
    /// Ball destroyed a brick
    BrickDestroyed { pos: Vec2, color: Color },
    /// A falling brick stepped down
    BrickDropped { pos: Vec2 },
    /// A falling brick left the field (no score)
    BrickFellOut { pos: Vec2 },
    /// Ball fell below the field
    BallLost,
    /// Last ball lost, a life was spent on a new one
    LifeSpent { remaining: u32 },
    /// Brick set is empty
    LevelCleared { level: u32 },
    /// Last ball lost with no lives left
    GameOver { score: u64 },
}

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Per-frame velocity before the level speed multiplier
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: BALL_RADIUS,
        }
    }

    /// Fresh ball parked above the paddle centre
    pub fn above_paddle(paddle: &Paddle) -> Self {
        Self::new(paddle.launch_point(), BALL_START_VEL)
    }

    /// Advance one frame
    #[inline]
    pub fn integrate(&mut self, speed_multiplier: f32) {
        self.pos += self.vel * speed_multiplier;
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: PADDLE_START,
            size: PADDLE_SIZE,
        }
    }
}

impl Paddle {
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Where new balls appear
    pub fn launch_point(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.top() - BALL_RESPAWN_LIFT)
    }

    /// Slide by `dx`, staying inside `[0, field_width]`
    pub fn slide(&mut self, dx: f32, field_width: f32) {
        let max_x = (field_width - self.size.x).max(0.0);
        self.pos.x = (self.pos.x + dx).clamp(0.0, max_x);
    }
}

/// A brick on the level grid
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
    pub row: usize,
    pub col: usize,
}

impl Brick {
    pub fn new(pos: Vec2, row: usize, col: usize, color: Color) -> Self {
        Self {
            pos,
            size: BRICK_SIZE,
            color,
            row,
            col,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Simulation switches derived from player settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimOptions {
    pub debris_style: DebrisStyle,
    /// Particle cap; zero disables debris entirely
    pub max_particles: usize,
    /// Enable the staggered brick fall
    pub brick_fall: bool,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            debris_style: DebrisStyle::Explosion,
            max_particles: 500,
            brick_fall: true,
        }
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Debris RNG
    pub rng: Pcg32,
    /// Current level (1-based)
    pub level: u32,
    /// Brick rows in the current level
    pub rows: usize,
    /// Spare lives
    pub lives: u32,
    pub score: u64,
    /// Applied to every ball's velocity each frame
    pub speed_multiplier: f32,
    /// Seconds since the level started
    pub level_time: f32,
    /// Frames simulated
    pub frame: u64,
    pub phase: GamePhase,
    pub brick_fall: BrickFall,
    pub paddle: Paddle,
    pub balls: Vec<Ball>,
    /// Grid order: row-major, top row first
    pub bricks: Vec<Brick>,
    /// Visual only
    pub particles: Vec<Particle>,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    pub options: SimOptions,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_options(seed, SimOptions::default())
    }

    pub fn with_options(seed: u64, options: SimOptions) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            level: 1,
            rows: START_ROWS,
            lives: START_LIVES,
            score: 0,
            speed_multiplier: 1.0,
            level_time: 0.0,
            frame: 0,
            phase: GamePhase::Playing,
            brick_fall: BrickFall::default(),
            paddle: Paddle::default(),
            balls: vec![Ball::new(BALL_START_POS, BALL_START_VEL)],
            bricks: generate_grid(START_ROWS, BRICK_COLUMNS),
            particles: Vec::new(),
            events: Vec::new(),
            options,
        }
    }

    /// Put a fresh ball above the paddle
    pub fn spawn_ball_above_paddle(&mut self) {
        self.balls.push(Ball::above_paddle(&self.paddle));
    }

    /// Set up the next level: one more row, faster balls, a bonus life and ball
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.rows += 1;
        self.lives += 1;
        self.speed_multiplier += SPEED_STEP_PER_LEVEL;
        self.level_time = 0.0;
        self.brick_fall = BrickFall::default();
        self.bricks = generate_grid(self.rows, BRICK_COLUMNS);
        self.spawn_ball_above_paddle();
        self.phase = GamePhase::Playing;
        log::info!(
            "Level {} begins: {} rows, speed x{:.1}",
            self.level,
            self.rows,
            self.speed_multiplier
        );
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let state = GameState::new(7);
        assert_eq!(state.level, 1);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.len(), START_ROWS * BRICK_COLUMNS);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.balls[0].pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.balls[0].vel, Vec2::new(3.0, -4.0));
        assert_eq!(state.speed_multiplier, 1.0);
    }

    #[test]
    fn test_paddle_slide_is_clamped() {
        let mut paddle = Paddle::default();
        paddle.slide(-1000.0, FIELD_WIDTH);
        assert_eq!(paddle.left(), 0.0);
        paddle.slide(1000.0, FIELD_WIDTH);
        assert_eq!(paddle.right(), FIELD_WIDTH);
    }

    #[test]
    fn test_advance_level() {
        let mut state = GameState::new(7);
        state.bricks.clear();
        state.level_time = 9.0;
        state.advance_level();

        assert_eq!(state.level, 2);
        assert_eq!(state.rows, START_ROWS + 1);
        assert_eq!(state.bricks.len(), (START_ROWS + 1) * BRICK_COLUMNS);
        assert_eq!(state.lives, START_LIVES + 1);
        assert!((state.speed_multiplier - 1.1).abs() < 1e-6);
        assert_eq!(state.level_time, 0.0);
        assert_eq!(state.balls.len(), 2);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_launch_point_above_paddle() {
        let ball = Ball::above_paddle(&Paddle::default());
        assert_eq!(ball.pos, Vec2::new(450.0, 530.0));
        assert_eq!(ball.vel, BALL_START_VEL);
    }
}
