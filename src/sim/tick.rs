//! One simulation step per display frame
//!
//! Advances paddle and ball and resolves collisions. The step never talks
//! to the presenter; it reports what happened and `machine::update` turns
//! that into score updates and state transitions.

use super::collision::{ball_missed, far_wall_hit, paddle_hit, vertical_wall_hit};
use super::state::GameState;
use crate::consts::SPEED_INCREMENT;

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Ball bounced off the paddle (score and speed already bumped)
    pub paddle_hit: bool,
    /// Ball crossed the left edge
    pub missed: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    if !state.running || state.game_over {
        return outcome;
    }

    // Paddle smoothing
    state.paddle.follow_target(&state.surface);

    // Ball movement
    let ball = &mut state.ball;
    ball.pos += ball.vel * ball.speed;

    // Top / bottom walls: reflect only, no position correction
    if vertical_wall_hit(ball, &state.surface) {
        ball.vel.y = -ball.vel.y;
    }

    // Far wall always sends the ball back
    if far_wall_hit(ball, &state.surface) {
        ball.vel.x = -ball.vel.x.abs();
    }

    if paddle_hit(ball, &state.paddle) {
        ball.vel.x = ball.vel.x.abs();
        ball.speed += SPEED_INCREMENT;
        state.score += 1;
        outcome.paddle_hit = true;
    }

    // Checked after the hit test so a hit on the same frame wins
    if ball_missed(ball) {
        outcome.missed = true;
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Surface;
    use glam::Vec2;
    use proptest::prelude::*;

    fn running_state() -> GameState {
        let mut state = GameState::new(Surface::new(800.0, 600.0), 12345);
        state.running = true;
        state.hand_visible = true;
        state
    }

    #[test]
    fn test_tick_noop_when_paused_or_over() {
        let mut state = GameState::new(Surface::new(800.0, 600.0), 1);
        let before = state.ball.pos;
        assert_eq!(tick(&mut state), TickOutcome::default());
        assert_eq!(state.ball.pos, before);

        state.running = true;
        state.game_over = true;
        tick(&mut state);
        assert_eq!(state.ball.pos, before);
    }

    #[test]
    fn test_ball_advances_by_scaled_velocity() {
        let mut state = running_state();
        state.ball.speed = 1.5;
        tick(&mut state);
        assert_eq!(state.ball.pos, Vec2::new(409.0, 306.0));
    }

    #[test]
    fn test_paddle_eases_toward_target() {
        let mut state = running_state();
        state.paddle.y = 100.0;
        state.paddle.target_y = 200.0;
        tick(&mut state);
        assert!((state.paddle.y - 130.0).abs() < 1e-4);
    }

    #[test]
    fn test_paddle_hit_scenario() {
        let mut state = running_state();
        state.paddle.y = 80.0;
        state.paddle.target_y = 80.0;
        // One step moves the ball to (44, 104): still a face hit
        state.ball.pos = Vec2::new(50.0, 100.0);
        state.ball.vel = Vec2::new(-6.0, 4.0);

        let outcome = tick(&mut state);
        assert!(outcome.paddle_hit);
        assert!(!outcome.missed);
        assert_eq!(state.ball.vel.x, 6.0);
        assert_eq!(state.score, 1);
        assert!((state.ball.speed - 1.05).abs() < 1e-6);
    }

    #[test]
    fn test_top_wall_inverts_vy() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(400.0, 12.0);
        state.ball.vel = Vec2::new(6.0, -4.0);
        tick(&mut state);
        assert_eq!(state.ball.vel.y, 4.0);
    }

    #[test]
    fn test_far_wall_forces_leftward() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(788.0, 300.0);
        state.ball.vel = Vec2::new(6.0, 4.0);
        tick(&mut state);
        assert_eq!(state.ball.vel.x, -6.0);

        // Already heading left past the threshold: stays left
        state.ball.pos = Vec2::new(805.0, 300.0);
        state.ball.vel = Vec2::new(-6.0, 4.0);
        tick(&mut state);
        assert_eq!(state.ball.vel.x, -6.0);
    }

    #[test]
    fn test_miss_reported() {
        let mut state = running_state();
        state.paddle.y = 400.0;
        state.paddle.target_y = 400.0;
        state.ball.pos = Vec2::new(4.0, 100.0);
        state.ball.vel = Vec2::new(-6.0, 4.0);
        let outcome = tick(&mut state);
        assert!(outcome.missed);
        assert!(!outcome.paddle_hit);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_large_step_can_overshoot_wall() {
        // Known boundary behavior: reflection does not correct position, so
        // a fast ball ends the step outside the surface.
        let mut state = running_state();
        state.ball.pos = Vec2::new(400.0, 590.0);
        state.ball.vel = Vec2::new(6.0, 4.0);
        state.ball.speed = 5.0;
        tick(&mut state);
        assert!(state.ball.pos.y > state.surface.height);
        assert!(state.ball.vel.y < 0.0);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_bounds(
            y in -2000.0f32..2000.0,
            target in -5000.0f32..5000.0,
            height in 50.0f32..2000.0,
        ) {
            let mut state = running_state();
            state.resize(800.0, height);
            state.paddle.y = y;
            state.paddle.target_y = target;
            tick(&mut state);
            let max_y = (height - state.paddle.height).max(0.0);
            prop_assert!(state.paddle.y >= 0.0);
            prop_assert!(state.paddle.y <= max_y);
        }

        #[test]
        fn prop_speed_and_score_move_together(
            targets in proptest::collection::vec(0.0f32..600.0, 1..400),
        ) {
            let mut state = running_state();
            for target in targets {
                state.paddle.target_y = target;
                let speed = state.ball.speed;
                let score = state.score;
                let outcome = tick(&mut state);
                prop_assert!(state.ball.speed >= speed);
                if outcome.paddle_hit {
                    prop_assert_eq!(state.score, score + 1);
                    prop_assert!((state.ball.speed - speed - SPEED_INCREMENT).abs() < 1e-5);
                } else {
                    prop_assert_eq!(state.score, score);
                    prop_assert_eq!(state.ball.speed, speed);
                }
                if outcome.missed {
                    break;
                }
            }
        }
    }
}
