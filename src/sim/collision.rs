//! Collision tests for the ball against walls and the paddle
//!
//! Everything is axis-aligned: the ball is a circle, the paddle a
//! rectangle, and the surface edges are the walls. These are pure
//! predicates; the tick decides what to do with them.

use super::state::{Ball, Paddle, Surface};

/// Ball touches the top or bottom wall
pub fn vertical_wall_hit(ball: &Ball, surface: &Surface) -> bool {
    ball.pos.y <= ball.radius || ball.pos.y >= surface.height - ball.radius
}

/// Ball touches the far (right) wall
pub fn far_wall_hit(ball: &Ball, surface: &Surface) -> bool {
    ball.pos.x >= surface.width - ball.radius
}

/// Ball's leading edge has reached the paddle face while the center is
/// still right of the paddle's left edge, and the center is within the
/// paddle's vertical span (inclusive).
pub fn paddle_hit(ball: &Ball, paddle: &Paddle) -> bool {
    ball.leading_edge() <= paddle.right()
        && ball.pos.x > paddle.x
        && ball.pos.y >= paddle.y
        && ball.pos.y <= paddle.bottom()
}

/// Ball center has left the surface through the paddle side
pub fn ball_missed(ball: &Ball) -> bool {
    ball.pos.x <= 0.0
}
