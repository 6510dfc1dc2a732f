//! Frame-locked simulation tick
//!
//! One call advances the session by exactly one rendered frame: brick
//! collisions, wall/paddle/floor handling, paddle movement, then position
//! integration. Everything here is display-free; the browser driver owns
//! scheduling and rendering.

use glam::Vec2;

use super::collision::{self, FloorOutcome};
use super::state::{GamePhase, GameState, Paddle};
use crate::consts::*;

/// Input flags for a single frame. Movement flags persist across frames
/// (key-down sets them, key-up clears them); they are not one-shot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
}

/// Advance the session by one frame. Outside `Playing` this is a no-op, so
/// terminal phases stay frozen until a restart rebuilds the state.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Playing {
        return;
    }

    brick_pass(state);

    // Level clear: advance or win; the next frame starts on the new layout
    if state.bricks.is_cleared() {
        if state.level >= MAX_LEVEL {
            log::info!("final level cleared, score {}", state.score);
            state.phase = GamePhase::Won;
        } else {
            state.level += 1;
            log::info!("level {} start, score {}", state.level, state.score);
            state.init_level();
        }
        return;
    }

    wall_pass(state);
    if state.phase == GamePhase::GameOver {
        return;
    }

    // Paddle movement from the persistent input flags; right wins a tie
    if input.move_right {
        state.paddle.shift(PADDLE_SPEED);
    } else if input.move_left {
        state.paddle.shift(-PADDLE_SPEED);
    }

    // Integrate
    for ball in &mut state.balls {
        ball.pos += ball.vel;
    }
}

/// Ball-brick pass: bricks outer (column-major), balls inner. A brick's
/// `alive` flag is the only dedup, so a fast ball sitting inside two
/// bricks' interiors in the same frame destroys both.
fn brick_pass(state: &mut GameState) {
    for brick in state.bricks.iter_mut() {
        if !brick.alive {
            continue;
        }
        for ball in &mut state.balls {
            if brick.contains(ball.pos) {
                ball.vel = collision::reflect(ball.vel, Vec2::Y);
                brick.alive = false;
                state.score += 1;
                break;
            }
        }
    }
}

/// Wall, ceiling, and floor pass. Side and vertical reflections are
/// independent: a corner hit flips both components in the same frame.
fn wall_pass(state: &mut GameState) {
    let paddle = state.paddle;

    state.balls.retain_mut(|ball| {
        if collision::hits_side_wall(ball) {
            ball.vel = collision::reflect(ball.vel, Vec2::X);
        }
        if collision::hits_ceiling(ball) {
            ball.vel = collision::reflect(ball.vel, Vec2::Y);
            true
        } else if collision::hits_floor(ball) {
            match collision::floor_outcome(ball, &paddle) {
                FloorOutcome::Saved => {
                    ball.vel = collision::reflect(ball.vel, Vec2::Y);
                    true
                }
                FloorOutcome::Lost => false,
            }
        } else {
            true
        }
    });

    // Losing the last ball costs a life
    if state.balls.is_empty() {
        state.lives = state.lives.saturating_sub(1);
        if state.lives == 0 {
            log::info!("game over, final score {}", state.score);
            state.phase = GamePhase::GameOver;
        } else {
            state.respawn_balls();
            state.paddle = Paddle::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::BrickGrid;

    fn playing_state() -> GameState {
        let mut state = GameState::new();
        state.start();
        state
    }

    /// Drop every brick by teleporting the first ball into each one
    fn clear_level(state: &mut GameState) {
        let centers: Vec<Vec2> = state
            .bricks
            .iter()
            .map(|b| b.pos + Vec2::new(BRICK_WIDTH / 2.0, BRICK_HEIGHT / 2.0))
            .collect();
        for center in centers {
            if state.phase != GamePhase::Playing {
                break;
            }
            state.balls[0].pos = center;
            tick(state, &TickInput::default());
        }
    }

    #[test]
    fn test_menu_tick_is_inert() {
        let mut state = GameState::new();
        let before = state.balls.clone();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.balls, before);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_brick_hit_scores_and_reflects() {
        let mut state = playing_state();
        let center = state.bricks.iter().next().unwrap().pos
            + Vec2::new(BRICK_WIDTH / 2.0, BRICK_HEIGHT / 2.0);
        state.balls[0].pos = center;
        let dy_before = state.balls[0].vel.y;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 1);
        assert_eq!(state.bricks.live_count(), 14);
        assert_eq!(state.balls[0].vel.y, -dy_before);
    }

    #[test]
    fn test_score_tracks_destroyed_and_stays_bounded() {
        let mut state = playing_state();
        let total = state.bricks.total();
        let mut last_score = 0;
        let centers: Vec<Vec2> = state
            .bricks
            .iter()
            .take(7)
            .map(|b| b.pos + Vec2::new(BRICK_WIDTH / 2.0, BRICK_HEIGHT / 2.0))
            .collect();
        for center in centers {
            state.balls[0].pos = center;
            tick(&mut state, &TickInput::default());
            assert!(state.score >= last_score);
            assert!(state.score <= total);
            last_score = state.score;
        }
        assert_eq!(state.score, 7);
        assert_eq!(state.bricks.live_count(), total - 7);
    }

    #[test]
    fn test_level_clear_advances_and_adds_ball() {
        let mut state = playing_state();
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.bricks.total(), 15);

        clear_level(&mut state);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level, 2);
        assert_eq!(state.score, 15);
        // Fresh grid grows by one row; serve gains a mirrored second ball
        assert_eq!(state.bricks.rows(), 4);
        assert_eq!(state.bricks.live_count(), 20);
        assert_eq!(state.balls.len(), 2);
        assert_eq!(state.balls[0].vel.x, BALL_SPEED);
        assert_eq!(state.balls[1].vel.x, -BALL_SPEED);
        assert_ne!(state.balls[0].color, state.balls[1].color);
    }

    #[test]
    fn test_final_level_clear_wins() {
        let mut state = playing_state();
        state.level = MAX_LEVEL;
        state.init_level();

        clear_level(&mut state);

        assert_eq!(state.phase, GamePhase::Won);
        // Terminal: further ticks change nothing
        let score = state.score;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.score, score);
    }

    #[test]
    fn test_missed_ball_costs_life_and_respawns() {
        let mut state = playing_state();
        state.paddle.x = 0.0;
        state.balls[0].pos = Vec2::new(600.0, CANVAS_HEIGHT - BALL_RADIUS - 1.0);
        state.balls[0].vel = Vec2::new(0.0, 2.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.lives, START_LIVES - 1);
        assert_eq!(state.phase, GamePhase::Playing);
        // Ball set and paddle respawn at serve positions; the same frame
        // still integrates, so the fresh ball has moved one step
        assert_eq!(state.balls.len(), 1);
        assert_eq!(
            state.balls[0].pos.y,
            CANVAS_HEIGHT - BALL_START_OFFSET - BALL_SPEED
        );
        assert_eq!(state.paddle, Paddle::default());
    }

    #[test]
    fn test_last_life_triggers_game_over() {
        let mut state = playing_state();
        state.lives = 1;
        state.score = 9;
        state.paddle.x = 0.0;
        state.balls[0].pos = Vec2::new(600.0, CANVAS_HEIGHT - BALL_RADIUS - 1.0);
        state.balls[0].vel = Vec2::new(0.0, 2.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        // Final score is preserved for the game-over screen
        assert_eq!(state.score, 9);
        // Terminal phase freezes the session
        tick(&mut state, &TickInput::default());
        assert_eq!(state.lives, 0);
        assert_eq!(state.score, 9);
    }

    #[test]
    fn test_paddle_save_bounces() {
        let mut state = playing_state();
        let x = state.paddle.x + state.paddle.width / 2.0;
        state.balls[0].pos = Vec2::new(x, CANVAS_HEIGHT - BALL_RADIUS - 1.0);
        state.balls[0].vel = Vec2::new(0.0, 2.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.balls[0].vel.y, -2.0);
    }

    #[test]
    fn test_side_wall_reflects_and_contains() {
        let mut state = playing_state();
        state.balls[0].pos = Vec2::new(CANVAS_WIDTH - BALL_RADIUS - 1.0, 240.0);
        state.balls[0].vel = Vec2::new(2.0, 2.0);

        tick(&mut state, &TickInput::default());

        let ball = state.balls[0];
        assert_eq!(ball.vel.x, -2.0);
        assert!(ball.pos.x <= CANVAS_WIDTH - ball.radius);
    }

    #[test]
    fn test_losing_one_of_two_balls_keeps_playing() {
        let mut state = playing_state();
        state.level = 2;
        state.init_level();
        assert_eq!(state.balls.len(), 2);

        state.paddle.x = 0.0;
        state.balls[0].pos = Vec2::new(600.0, CANVAS_HEIGHT - BALL_RADIUS - 1.0);
        state.balls[0].vel = Vec2::new(0.0, 2.0);
        state.balls[1].pos = Vec2::new(320.0, 240.0);

        tick(&mut state, &TickInput::default());

        // One ball dropped, the survivor carries on with no life lost
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_paddle_clamps_at_both_walls() {
        let mut state = playing_state();
        let hold_right = TickInput {
            move_right: true,
            ..Default::default()
        };
        // Park the ball mid-air so nothing else interferes
        state.balls[0].pos = Vec2::new(320.0, 240.0);
        for _ in 0..200 {
            state.balls[0].pos = Vec2::new(320.0, 240.0);
            tick(&mut state, &hold_right);
        }
        assert_eq!(state.paddle.x, CANVAS_WIDTH - PADDLE_WIDTH);

        let hold_left = TickInput {
            move_left: true,
            ..Default::default()
        };
        for _ in 0..200 {
            state.balls[0].pos = Vec2::new(320.0, 240.0);
            tick(&mut state, &hold_left);
        }
        assert_eq!(state.paddle.x, 0.0);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = playing_state();
        state.score = 42;
        state.lives = 0;
        state.level = 5;
        state.bricks = BrickGrid::generate(5);
        state.phase = GamePhase::GameOver;

        state.start();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.level, 1);
        assert_eq!(state.bricks.total(), 15);
        assert_eq!(state.bricks.live_count(), 15);
        assert_eq!(state.balls.len(), 1);
    }

    #[test]
    fn test_two_balls_in_one_brick_count_once() {
        // Bricks are padded apart, so one ball center sits in at most one
        // brick; two balls sharing a brick must destroy it exactly once.
        let mut state = playing_state();
        state.level = 2;
        state.init_level();
        let center = state.bricks.iter().next().unwrap().pos
            + Vec2::new(BRICK_WIDTH / 2.0, BRICK_HEIGHT / 2.0);
        state.balls[0].pos = center;
        state.balls[1].pos = center;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 1);
        assert_eq!(state.bricks.live_count(), 19);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The paddle never leaves the canvas, whatever the input stream
            #[test]
            fn paddle_stays_in_bounds(moves in proptest::collection::vec((proptest::bool::ANY, proptest::bool::ANY), 1..300)) {
                let mut state = playing_state();
                for (left, right) in moves {
                    // Keep the ball parked so only paddle movement runs
                    state.balls[0].pos = Vec2::new(320.0, 240.0);
                    state.balls[0].vel = Vec2::ZERO;
                    tick(&mut state, &TickInput { move_left: left, move_right: right });
                    prop_assert!(state.paddle.x >= 0.0);
                    prop_assert!(state.paddle.x <= CANVAS_WIDTH - PADDLE_WIDTH);
                }
            }
        }
    }
}
