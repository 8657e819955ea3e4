//! Brick grid layout and the staggered brick fall

use glam::Vec2;

use super::state::Brick;
use crate::BRICK_PALETTE;
use crate::consts::*;

/// Lay out `rows × columns` bricks in row-major order
pub fn generate_grid(rows: usize, columns: usize) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(rows * columns);
    for row in 0..rows {
        for col in 0..columns {
            bricks.push(Brick::new(
                grid_position(row, col),
                row,
                col,
                BRICK_PALETTE[row % BRICK_PALETTE.len()],
            ));
        }
    }
    bricks
}

/// Top-left corner of a grid cell
pub fn grid_position(row: usize, col: usize) -> Vec2 {
    BRICK_ORIGIN
        + Vec2::new(
            col as f32 * (BRICK_SIZE.x + BRICK_GAP),
            row as f32 * (BRICK_SIZE.y + BRICK_GAP),
        )
}

/// Outcome of a fall step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FallStep {
    /// Brick moved down and is still on the field
    Dropped { pos: Vec2 },
    /// Brick left the bottom edge and was removed
    Removed { pos: Vec2 },
}

/// Staggered fall of the bottom row
///
/// After [`BRICK_FALL_DELAY`] seconds of a level, one brick at a time steps
/// down by [`BRICK_FALL_STEP`] every [`BRICK_FALL_INTERVAL`] seconds, starting
/// with the first brick of the last row and walking to the end of the list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrickFall {
    pub active: bool,
    /// Index of the next brick to drop
    pub cursor: usize,
    /// Seconds since the last drop
    pub timer: f32,
}

impl BrickFall {
    pub fn step(
        &mut self,
        bricks: &mut Vec<Brick>,
        level_time: f32,
        dt: f32,
        field_height: f32,
    ) -> Option<FallStep> {
        if bricks.is_empty() {
            return None;
        }
        if !self.active {
            if level_time <= BRICK_FALL_DELAY {
                return None;
            }
            self.active = true;
            self.cursor = bricks.len().saturating_sub(BRICK_COLUMNS);
            log::debug!("Bottom row starts falling at brick {}", self.cursor);
        }

        self.timer += dt;
        if self.timer <= BRICK_FALL_INTERVAL {
            return None;
        }
        self.timer = 0.0;

        if self.cursor >= bricks.len() {
            self.cursor = bricks.len().saturating_sub(BRICK_COLUMNS);
        }

        let brick = &mut bricks[self.cursor];
        brick.pos.y += BRICK_FALL_STEP;
        if brick.pos.y > field_height {
            // Cursor stays: the next brick slides into this slot
            let removed = bricks.remove(self.cursor);
            return Some(FallStep::Removed { pos: removed.pos });
        }

        let pos = brick.pos;
        self.cursor += 1;
        Some(FallStep::Dropped { pos })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_grid_layout() {
        let bricks = generate_grid(3, 10);
        assert_eq!(bricks.len(), 30);
        assert_eq!(bricks[0].pos, Vec2::new(10.0, 50.0));
        assert_eq!(bricks[1].pos, Vec2::new(75.0, 50.0));
        assert_eq!(bricks[10].pos, Vec2::new(10.0, 75.0));
        assert_eq!(bricks[29].row, 2);
        assert_eq!(bricks[29].col, 9);
    }

    #[test]
    fn test_grid_colors_cycle_by_row() {
        let bricks = generate_grid(6, 10);
        assert_eq!(bricks[0].color, Color::RED);
        assert_eq!(bricks[10].color, Color::YELLOW);
        assert_eq!(bricks[40].color, Color::MAGENTA);
        assert_eq!(bricks[50].color, Color::RED);
    }

    #[test]
    fn test_fall_waits_for_delay() {
        let mut bricks = generate_grid(3, 10);
        let mut fall = BrickFall::default();
        assert_eq!(fall.step(&mut bricks, 6.9, 1.0, FIELD_HEIGHT), None);
        assert!(!fall.active);
    }

    #[test]
    fn test_fall_drops_last_row_in_order() {
        let mut bricks = generate_grid(3, 10);
        let mut fall = BrickFall::default();

        // Activates, then needs a full interval
        assert_eq!(fall.step(&mut bricks, 7.1, 0.3, FIELD_HEIGHT), None);
        assert!(fall.active);
        assert_eq!(fall.cursor, 20);

        let step = fall.step(&mut bricks, 7.4, 0.3, FIELD_HEIGHT);
        assert_eq!(
            step,
            Some(FallStep::Dropped {
                pos: Vec2::new(10.0, 150.0)
            })
        );
        assert_eq!(fall.cursor, 21);
        assert_eq!(bricks.len(), 30);
    }

    #[test]
    fn test_fallen_brick_is_removed() {
        let mut bricks = generate_grid(1, 10);
        bricks[0].pos.y = 580.0;
        let mut fall = BrickFall {
            active: true,
            cursor: 0,
            timer: 0.0,
        };

        let step = fall.step(&mut bricks, 8.0, 0.6, FIELD_HEIGHT);
        assert_eq!(
            step,
            Some(FallStep::Removed {
                pos: Vec2::new(10.0, 630.0)
            })
        );
        assert_eq!(bricks.len(), 9);
        assert_eq!(fall.cursor, 0);
    }

    #[test]
    fn test_cursor_wraps_to_last_row() {
        let mut bricks = generate_grid(2, 10);
        let mut fall = BrickFall {
            active: true,
            cursor: 20,
            timer: 0.0,
        };
        fall.step(&mut bricks, 8.0, 0.6, FIELD_HEIGHT);
        assert_eq!(fall.cursor, 11);
        assert_eq!(bricks[10].pos.y, 75.0 + BRICK_FALL_STEP);
    }
}
