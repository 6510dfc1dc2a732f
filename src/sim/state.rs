//! Game state and core simulation types
//!
//! One `GameState` record owns everything a session mutates. The browser
//! driver holds it and hands it to `tick` each frame; nothing in here
//! touches the DOM or the GPU.

use glam::Vec2;

use super::grid::BrickGrid;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start menu is showing, nothing simulates
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended with no lives left
    GameOver,
    /// Every level cleared
    Won,
}

impl GamePhase {
    /// Terminal phases stop the frame loop until a restart
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }
}

/// A ball entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement applied each frame
    pub vel: Vec2,
    pub radius: f32,
    /// Palette index for rendering; each ball keeps its own color
    pub color: u32,
}

impl Ball {
    /// Serve a ball below the center, heading up. `mirrored` flips the
    /// horizontal component so a second ball splits away from the first.
    pub fn serve(mirrored: bool, color: u32) -> Self {
        let dx = if mirrored { -BALL_SPEED } else { BALL_SPEED };
        Self {
            pos: Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT - BALL_START_OFFSET),
            vel: Vec2::new(dx, -BALL_SPEED),
            radius: BALL_RADIUS,
            color,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: (CANVAS_WIDTH - PADDLE_WIDTH) / 2.0,
            y: CANVAS_HEIGHT - PADDLE_HEIGHT,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    /// Shift horizontally, clamped so the paddle never leaves the canvas
    pub fn shift(&mut self, dx: f32) {
        self.x = (self.x + dx).clamp(0.0, CANVAS_WIDTH - self.width);
    }

    /// Whether an x coordinate lies strictly within the paddle span
    pub fn spans(&self, x: f32) -> bool {
        x > self.x && x < self.x + self.width
    }
}

/// Complete session state, owned by the game-loop driver
#[derive(Debug, Clone)]
pub struct GameState {
    pub score: u32,
    pub lives: u32,
    /// 1-based level counter
    pub level: u32,
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub balls: Vec<Ball>,
    pub bricks: BrickGrid,
}

impl GameState {
    /// Fresh session sitting at the menu
    pub fn new() -> Self {
        let mut state = Self {
            score: 0,
            lives: START_LIVES,
            level: 1,
            phase: GamePhase::Menu,
            paddle: Paddle::default(),
            balls: Vec::new(),
            bricks: BrickGrid::generate(1),
        };
        state.init_level();
        state
    }

    /// Reset everything and enter play. First start and restart are the
    /// same operation; nothing survives from the previous session.
    pub fn start(&mut self) {
        self.score = 0;
        self.lives = START_LIVES;
        self.level = 1;
        self.init_level();
        self.phase = GamePhase::Playing;
    }

    /// Regenerate balls, paddle, and bricks for the current level
    pub fn init_level(&mut self) {
        self.bricks = BrickGrid::generate(self.level);
        self.paddle = Paddle::default();
        self.respawn_balls();
    }

    /// Serve the level's ball set: one ball, plus a mirrored second one
    /// from `MULTI_BALL_LEVEL` on
    pub fn respawn_balls(&mut self) {
        self.balls.clear();
        self.balls.push(Ball::serve(false, 0));
        if self.level >= MULTI_BALL_LEVEL {
            self.balls.push(Ball::serve(true, 1));
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
