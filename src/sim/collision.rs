//! Collision detection for balls against walls, paddle, and floor
//!
//! All checks are look-ahead: the projected next position is tested before
//! velocity is integrated, so reflection happens at the boundary instead of
//! after penetration. Brick hits use `Brick::contains` on the current ball
//! center and are driven from the tick loop.

use glam::Vec2;

use super::state::{Ball, Paddle};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// What happens to a ball that reaches the floor line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorOutcome {
    /// Paddle was underneath: bounce
    Saved,
    /// Ball drops out of play
    Lost,
}

/// True when the projected x position leaves the side walls
pub fn hits_side_wall(ball: &Ball) -> bool {
    let next_x = ball.pos.x + ball.vel.x;
    next_x > CANVAS_WIDTH - ball.radius || next_x < ball.radius
}

/// True when the projected y position crosses the ceiling
pub fn hits_ceiling(ball: &Ball) -> bool {
    ball.pos.y + ball.vel.y < ball.radius
}

/// True when the projected y position crosses the floor line
pub fn hits_floor(ball: &Ball) -> bool {
    ball.pos.y + ball.vel.y > CANVAS_HEIGHT - ball.radius
}

/// Decide a floor crossing: the ball survives only if its center is
/// strictly within the paddle span
pub fn floor_outcome(ball: &Ball, paddle: &Paddle) -> FloorOutcome {
    if paddle.spans(ball.pos.x) {
        FloorOutcome::Saved
    } else {
        FloorOutcome::Lost
    }
}

/// Standard reflection: v' = v - 2(v·n)n
///
/// With an axis-aligned unit normal this negates exactly one component and
/// leaves the other untouched.
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BALL_RADIUS, BALL_SPEED};
    use crate::sim::state::Ball;

    fn ball_at(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(dx, dy),
            radius: BALL_RADIUS,
            color: 0,
        }
    }

    #[test]
    fn test_side_wall_lookahead() {
        // Projected position matters, not the current one
        let ball = ball_at(CANVAS_WIDTH - BALL_RADIUS - 1.0, 240.0, 2.0, 2.0);
        assert!(hits_side_wall(&ball));
        let ball = ball_at(CANVAS_WIDTH - BALL_RADIUS - 1.0, 240.0, -2.0, 2.0);
        assert!(!hits_side_wall(&ball));
        let ball = ball_at(BALL_RADIUS + 1.0, 240.0, -2.0, 2.0);
        assert!(hits_side_wall(&ball));
    }

    #[test]
    fn test_ceiling_and_floor() {
        let ball = ball_at(320.0, BALL_RADIUS + 1.0, 2.0, -2.0);
        assert!(hits_ceiling(&ball));
        assert!(!hits_floor(&ball));

        let ball = ball_at(320.0, CANVAS_HEIGHT - BALL_RADIUS - 1.0, 2.0, 2.0);
        assert!(hits_floor(&ball));
        assert!(!hits_ceiling(&ball));
    }

    #[test]
    fn test_floor_outcome_strict_span() {
        let paddle = Paddle::default();
        let floor_y = CANVAS_HEIGHT - BALL_RADIUS - 1.0;

        let over_center = ball_at(paddle.x + paddle.width / 2.0, floor_y, 0.0, 2.0);
        assert_eq!(floor_outcome(&over_center, &paddle), FloorOutcome::Saved);

        // Exactly on the paddle edge does not save
        let on_edge = ball_at(paddle.x, floor_y, 0.0, 2.0);
        assert_eq!(floor_outcome(&on_edge, &paddle), FloorOutcome::Lost);

        let beside = ball_at(paddle.x + paddle.width + 10.0, floor_y, 0.0, 2.0);
        assert_eq!(floor_outcome(&beside, &paddle), FloorOutcome::Lost);
    }

    #[test]
    fn test_reflect_negates_one_axis() {
        let vel = Vec2::new(BALL_SPEED, -BALL_SPEED);
        let off_wall = reflect(vel, Vec2::X);
        assert_eq!(off_wall, Vec2::new(-BALL_SPEED, -BALL_SPEED));
        let off_brick = reflect(vel, Vec2::Y);
        assert_eq!(off_brick, Vec2::new(BALL_SPEED, BALL_SPEED));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Reflection conserves per-axis speed; only the sign on the
            /// reflected axis flips.
            #[test]
            fn reflect_conserves_magnitude(
                dx in -50.0f32..50.0,
                dy in -50.0f32..50.0,
                horizontal in proptest::bool::ANY,
            ) {
                let vel = Vec2::new(dx, dy);
                let normal = if horizontal { Vec2::X } else { Vec2::Y };
                let out = reflect(vel, normal);
                prop_assert!((out.x.abs() - vel.x.abs()).abs() < 1e-4);
                prop_assert!((out.y.abs() - vel.y.abs()).abs() < 1e-4);
                if horizontal {
                    prop_assert_eq!(out.y, vel.y);
                } else {
                    prop_assert_eq!(out.x, vel.x);
                }
            }

            /// Reflecting twice off the same axis is the identity
            #[test]
            fn reflect_is_involutive(dx in -50.0f32..50.0, dy in -50.0f32..50.0) {
                let vel = Vec2::new(dx, dy);
                prop_assert_eq!(reflect(reflect(vel, Vec2::X), Vec2::X), vel);
                prop_assert_eq!(reflect(reflect(vel, Vec2::Y), Vec2::Y), vel);
            }
        }
    }
}
