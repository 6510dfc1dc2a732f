//! Frame-locked simulation module
//!
//! All gameplay logic lives here. The module is display-free: no rendering
//! or platform dependencies, one fixed step per rendered frame, so tests
//! drive `tick` directly with a fake frame source.

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{FloorOutcome, reflect};
pub use grid::{Brick, BrickGrid};
pub use state::{Ball, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
