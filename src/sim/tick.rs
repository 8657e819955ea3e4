//! Per-frame simulation tick
//!
//! Core game loop step: moves the paddle and balls, resolves collisions,
//! drops bricks, ages debris and detects level clear / game over.

use super::collision;
use super::grid::FallStep;
use super::particles::{spawn_burst, update_particles};
use super::state::{Ball, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left key held
    pub left: bool,
    /// Right key held
    pub right: bool,
}

impl TickInput {
    /// Net paddle direction (-1, 0 or 1)
    pub fn direction(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Advance the game state by one frame
///
/// Ball motion is per frame (scaled by the level speed multiplier); timers and
/// debris use `dt` seconds.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::GameOver => return,
        GamePhase::LevelCleared => {
            state.advance_level();
            return;
        }
        GamePhase::Playing => {}
    }

    state.frame += 1;
    state.level_time += dt;

    state
        .paddle
        .slide(input.direction() * PADDLE_STEP, FIELD_WIDTH);

    step_balls(state);

    if state.options.brick_fall {
        step_brick_fall(state, dt);
    }

    update_particles(&mut state.particles, dt);

    if state.phase == GamePhase::Playing && state.bricks.is_empty() {
        log::info!("Level {} cleared, score {}", state.level, state.score);
        state.phase = GamePhase::LevelCleared;
        state.events.push(GameEvent::LevelCleared { level: state.level });
    }
}

/// Move every ball and resolve its collisions, in order
fn step_balls(state: &mut GameState) {
    let GameState {
        balls,
        bricks,
        paddle,
        particles,
        rng,
        events,
        score,
        speed_multiplier,
        options,
        ..
    } = state;

    let mut lost = 0usize;
    balls.retain_mut(|ball| {
        ball.integrate(*speed_multiplier);

        collision::reflect_off_walls(ball, FIELD_WIDTH);

        if collision::touches_paddle(ball, paddle) {
            collision::bounce_off_paddle(ball, paddle);
            events.push(GameEvent::PaddleHit);
        }

        // First overlap only; the brick is taken out before anything reads it
        if let Some(idx) = collision::first_brick_hit(ball, bricks) {
            let brick = bricks.remove(idx);
            ball.vel.y = -ball.vel.y;
            *score += SCORE_PER_BRICK;
            spawn_burst(
                particles,
                &mut *rng,
                options.debris_style,
                brick.pos,
                brick.color,
                options.max_particles,
            );
            events.push(GameEvent::BrickDestroyed {
                pos: brick.pos,
                color: brick.color,
            });
        }

        if collision::ball_out_of_bounds(ball, FIELD_HEIGHT) {
            events.push(GameEvent::BallLost);
            lost += 1;
            false
        } else {
            true
        }
    });

    if lost == 0 || !state.balls.is_empty() {
        return;
    }

    if state.lives > 0 {
        state.lives -= 1;
        state.balls.push(Ball::above_paddle(&state.paddle));
        state.events.push(GameEvent::LifeSpent {
            remaining: state.lives,
        });
        log::debug!("Ball lost, {} lives left", state.lives);
    } else {
        log::info!("Game over at level {} with score {}", state.level, state.score);
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
    }
}

fn step_brick_fall(state: &mut GameState, dt: f32) {
    let step = state
        .brick_fall
        .step(&mut state.bricks, state.level_time, dt, FIELD_HEIGHT);
    match step {
        Some(FallStep::Dropped { pos }) => state.events.push(GameEvent::BrickDropped { pos }),
        Some(FallStep::Removed { pos }) => {
            log::debug!("Brick fell out at ({:.0}, {:.0})", pos.x, pos.y);
            state.events.push(GameEvent::BrickFellOut { pos });
        }
        None => {}
    }
}
