//! Brick grid layout
//!
//! Bricks live in a fixed-pitch grid indexed by column then row. The grid
//! only ever shrinks during a level; level changes replace it wholesale.

use glam::Vec2;

use crate::consts::*;

/// A single destructible brick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub alive: bool,
}

impl Brick {
    /// Strict-interior test: a point exactly on an edge does not count
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.pos.x
            && point.x < self.pos.x + BRICK_WIDTH
            && point.y > self.pos.y
            && point.y < self.pos.y + BRICK_HEIGHT
    }
}

/// One level's brick field, column-major
#[derive(Debug, Clone, PartialEq)]
pub struct BrickGrid {
    bricks: Vec<Brick>,
    columns: u32,
    rows: u32,
}

impl BrickGrid {
    /// Row count for a level: the base grid plus one row per level past the first
    pub fn rows_for_level(level: u32) -> u32 {
        BASE_BRICK_ROWS + level.saturating_sub(1)
    }

    /// Lay out the full grid for a level; column count is fixed
    pub fn generate(level: u32) -> Self {
        let columns = BRICK_COLUMNS;
        let rows = Self::rows_for_level(level);
        let mut bricks = Vec::with_capacity((columns * rows) as usize);
        for c in 0..columns {
            for r in 0..rows {
                bricks.push(Brick {
                    pos: Vec2::new(
                        c as f32 * (BRICK_WIDTH + BRICK_PADDING) + BRICK_OFFSET_LEFT,
                        r as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICK_OFFSET_TOP,
                    ),
                    alive: true,
                });
            }
        }
        Self {
            bricks,
            columns,
            rows,
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Brick count the level started with
    pub fn total(&self) -> u32 {
        self.columns * self.rows
    }

    /// Bricks still standing
    pub fn live_count(&self) -> u32 {
        self.bricks.iter().filter(|b| b.alive).count() as u32
    }

    pub fn is_cleared(&self) -> bool {
        self.bricks.iter().all(|b| !b.alive)
    }

    /// Column-major iteration, matching generation order
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }
}
