//! Shape tessellation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::consts::{BRICK_HEIGHT, BRICK_WIDTH};
use crate::sim::GameState;

/// Segments used to tessellate a ball
const BALL_SEGMENTS: u32 = 24;

/// Two triangles covering an axis-aligned rectangle
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Build the frame's full scene in draw order: live bricks, paddle, balls.
/// The whole surface is redrawn every frame.
pub fn scene(state: &GameState) -> Vec<Vertex> {
    let brick_count = state.bricks.live_count() as usize;
    let mut vertices =
        Vec::with_capacity(brick_count * 6 + 6 + state.balls.len() * (BALL_SEGMENTS * 3) as usize);

    for brick in state.bricks.iter().filter(|b| b.alive) {
        vertices.extend_from_slice(&rect(
            brick.pos,
            Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
            colors::BRICK,
        ));
    }

    let paddle = &state.paddle;
    vertices.extend_from_slice(&rect(
        Vec2::new(paddle.x, paddle.y),
        Vec2::new(paddle.width, paddle.height),
        colors::PADDLE,
    ));

    for ball in &state.balls {
        vertices.extend(circle(
            ball.pos,
            ball.radius,
            colors::ball(ball.color),
            BALL_SEGMENTS,
        ));
    }

    vertices
}
