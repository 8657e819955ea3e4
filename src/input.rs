//! Directional key sources
//!
//! The game only ever asks two questions: is left held, is right held.

use crate::sim::{GameState, TickInput};

/// Instantaneous key-down queries
pub trait InputSource {
    fn left_down(&self) -> bool;
    fn right_down(&self) -> bool;

    /// Refresh from the current state before it is queried
    fn observe(&mut self, _state: &GameState) {}

    /// Window closed / user quit
    fn quit_requested(&self) -> bool {
        false
    }

    fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left_down(),
            right: self.right_down(),
        }
    }
}

/// Demo player: keeps the paddle under the lowest descending ball
#[derive(Debug, Default, Clone)]
pub struct Autopilot {
    left: bool,
    right: bool,
}

impl Autopilot {
    /// Dead zone around the paddle centre (pixels)
    const SLACK: f32 = 20.0;

    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for Autopilot {
    fn left_down(&self) -> bool {
        self.left
    }

    fn right_down(&self) -> bool {
        self.right
    }

    fn observe(&mut self, state: &GameState) {
        // Most dangerous ball: lowest one heading down, else just the lowest
        let target = state
            .balls
            .iter()
            .filter(|b| b.vel.y > 0.0)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .or_else(|| state.balls.iter().max_by(|a, b| a.pos.y.total_cmp(&b.pos.y)));

        let Some(ball) = target else {
            self.left = false;
            self.right = false;
            return;
        };

        let offset = ball.pos.x - state.paddle.center_x();
        self.left = offset < -Self::SLACK;
        self.right = offset > Self::SLACK;
    }
}

/// Replays a fixed key sequence, one entry per frame, then holds nothing
#[derive(Debug, Default, Clone)]
pub struct Scripted {
    frames: Vec<TickInput>,
    cursor: usize,
    current: TickInput,
    quit_after: Option<usize>,
}

impl Scripted {
    pub fn new(frames: Vec<TickInput>) -> Self {
        Self {
            frames,
            ..Self::default()
        }
    }

    /// Request quit once this many frames have been observed
    pub fn quit_after(mut self, frames: usize) -> Self {
        self.quit_after = Some(frames);
        self
    }
}

impl InputSource for Scripted {
    fn left_down(&self) -> bool {
        self.current.left
    }

    fn right_down(&self) -> bool {
        self.current.right
    }

    fn observe(&mut self, _state: &GameState) {
        self.current = self.frames.get(self.cursor).copied().unwrap_or_default();
        self.cursor += 1;
    }

    fn quit_requested(&self) -> bool {
        self.quit_after.is_some_and(|n| self.cursor >= n)
    }
}
