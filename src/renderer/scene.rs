//! Frame tessellation
//!
//! Turns a read-only view of the game state into a triangle list in
//! surface pixels. Runs every frame in every phase, so the last frame
//! before game over stays on screen under the overlay.

use glam::Vec2;

use super::shapes::{circle, dashed_vline, rect};
use super::vertex::{Vertex, colors};
use crate::consts::{DIVIDER_DASH, DIVIDER_GAP};
use crate::sim::GameState;

/// Segments used to tessellate the ball
pub const BALL_SEGMENTS: u32 = 32;
/// Divider stroke width in pixels
pub const DIVIDER_WIDTH: f32 = 1.0;

/// Build the vertices for one frame: background, divider, paddle, ball
pub fn build(state: &GameState) -> Vec<Vertex> {
    let surface = &state.surface;
    let paddle = &state.paddle;
    let ball = &state.ball;

    let mut vertices = rect(
        Vec2::ZERO,
        Vec2::new(surface.width, surface.height),
        colors::BACKGROUND,
    );

    vertices.extend(dashed_vline(
        Vec2::new(surface.width / 2.0, 0.0),
        surface.height,
        DIVIDER_WIDTH,
        DIVIDER_DASH,
        DIVIDER_GAP,
        colors::DIVIDER,
    ));

    vertices.extend(rect(
        Vec2::new(paddle.x, paddle.y),
        Vec2::new(paddle.width, paddle.height),
        colors::PADDLE,
    ));

    vertices.extend(circle(ball.pos, ball.radius, colors::BALL, BALL_SEGMENTS));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Surface;

    #[test]
    fn test_scene_layout() {
        let mut state = GameState::new(Surface::new(800.0, 560.0), 1);
        state.paddle.y = 80.0;
        let v = build(&state);

        // 560 / 28 = 20 dashes
        let dashes = 20 * 6;
        assert_eq!(v.len(), 6 + dashes + 6 + BALL_SEGMENTS as usize * 3);

        // Background covers the surface
        assert_eq!(v[0].position, [0.0, 0.0]);
        assert_eq!(v[5].position, [800.0, 560.0]);
        assert_eq!(v[0].color, colors::BACKGROUND);

        // Divider centered
        assert_eq!(v[6].position[0], 399.5);
        assert_eq!(v[6].color, colors::DIVIDER);

        // Paddle quad
        let paddle = &v[6 + dashes..6 + dashes + 6];
        assert_eq!(paddle[0].position, [40.0, 80.0]);
        assert_eq!(paddle[5].position, [54.0, 200.0]);

        // Ball fan centered on the ball
        assert_eq!(v[6 + dashes + 6].position, [400.0, 280.0]);
    }

    #[test]
    fn test_scene_renders_in_every_phase() {
        let mut state = GameState::new(Surface::new(800.0, 600.0), 1);
        let paused = build(&state);
        state.game_over = true;
        assert_eq!(build(&state), paused);
    }
}
