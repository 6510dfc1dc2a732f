//! Brickout - a browser Breakout arcade game
//!
//! Core modules:
//! - `sim`: frame-locked simulation (entities, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: browser glue (input intent, frame scheduling)
//! - `ui`: display-free view model for screen regions and HUD text

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical drawing surface size
    pub const CANVAS_WIDTH: f32 = 640.0;
    pub const CANVAS_HEIGHT: f32 = 480.0;

    /// Ball defaults - velocities are px per frame (the loop is frame-locked)
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 2.0;
    /// Serve height of a fresh ball above the bottom edge
    pub const BALL_START_OFFSET: f32 = 30.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Horizontal paddle speed, px per frame
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Brick grid layout. Column count is fixed; row count grows with level.
    pub const BRICK_COLUMNS: u32 = 5;
    pub const BASE_BRICK_ROWS: u32 = 3;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    pub const START_LIVES: u32 = 3;
    /// Level at which a second ball joins the serve
    pub const MULTI_BALL_LEVEL: u32 = 2;
    /// Last playable level. Rows grow by one per level; level 8 (10 rows)
    /// is the tallest grid that still clears the serve height.
    pub const MAX_LEVEL: u32 = 8;
}
