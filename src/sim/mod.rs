//! Simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering,
//! audio and platform dependencies:
//! - One sequential tick per frame
//! - Seeded RNG only
//! - Removal by index or `retain`, never while iterating

pub mod collision;
pub mod grid;
pub mod particles;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Wall, reflect_off_walls, reflect_velocity};
pub use grid::{BrickFall, FallStep, generate_grid, grid_position};
pub use particles::{DebrisStyle, Particle, ParticleShape, spawn_burst, update_particles};
pub use state::{Ball, Brick, GameEvent, GamePhase, GameState, Paddle, SimOptions};
pub use tick::{TickInput, tick};
