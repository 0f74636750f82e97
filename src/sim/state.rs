//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// State-machine phase, derived from the `running` and `game_over` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a hand (initial state, hand lost, or after retry)
    Paused,
    /// Active gameplay
    Running,
    /// Ball missed, waiting for retry
    GameOver,
}

/// Drawable area in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge (fixed)
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Top edge the paddle eases toward (set from the palm position)
    pub target_y: f32,
}

impl Paddle {
    pub fn new(surface: &Surface) -> Self {
        let y = surface.height / 2.0;
        Self {
            x: PADDLE_X,
            y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            target_y: y,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Ease toward `target_y`, then clamp inside the surface
    pub fn follow_target(&mut self, surface: &Surface) {
        self.y += (self.target_y - self.y) * PADDLE_SMOOTHING;
        self.clamp(surface);
    }

    /// Clamp `y` to `[0, surface.height - height]`; a surface shorter than
    /// the paddle pins it to the top.
    pub fn clamp(&mut self, surface: &Surface) {
        let max_y = (surface.height - self.height).max(0.0);
        self.y = self.y.clamp(0.0, max_y);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Multiplier applied to `vel` each step (>= 1)
    pub speed: f32,
}

impl Ball {
    /// Ball at the surface center with the opening velocity
    pub fn new(surface: &Surface) -> Self {
        Self {
            pos: surface.center(),
            vel: Vec2::new(BALL_VX, BALL_VY),
            radius: BALL_RADIUS,
            speed: 1.0,
        }
    }

    /// Ball at the surface center heading in a random diagonal
    pub fn serve<R: Rng>(surface: &Surface, rng: &mut R) -> Self {
        let sx = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Self {
            vel: Vec2::new(BALL_VX * sx, BALL_VY * sy),
            ..Self::new(surface)
        }
    }

    /// Left edge of the ball
    pub fn leading_edge(&self) -> f32 {
        self.pos.x - self.radius
    }
}

/// Complete game state, owned by the driver and passed by reference into
/// the physics step, state machine, and renderer.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub surface: Surface,
    pub paddle: Paddle,
    pub ball: Ball,
    pub score: u32,
    pub running: bool,
    /// Latched tracker visibility, used to detect the falling edge
    pub hand_visible: bool,
    pub game_over: bool,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game for the given surface and seed
    pub fn new(surface: Surface, seed: u64) -> Self {
        Self {
            seed,
            surface,
            paddle: Paddle::new(&surface),
            ball: Ball::new(&surface),
            score: 0,
            running: false,
            hand_visible: false,
            game_over: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else if self.running {
            GamePhase::Running
        } else {
            GamePhase::Paused
        }
    }

    /// Update bounds only; paddle and ball keep their pixel positions
    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface = Surface::new(width, height);
    }

    /// Put a fresh ball at the center with random direction and base speed
    pub fn reset_ball(&mut self) {
        self.ball = Ball::serve(&self.surface, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_paused_and_centered() {
        let state = GameState::new(Surface::new(800.0, 600.0), 7);
        assert_eq!(state.phase(), GamePhase::Paused);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(6.0, 4.0));
        assert_eq!(state.paddle.y, 300.0);
        assert_eq!(state.paddle.target_y, 300.0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_phase_precedence() {
        let mut state = GameState::new(Surface::new(800.0, 600.0), 7);
        state.running = true;
        assert_eq!(state.phase(), GamePhase::Running);
        state.game_over = true;
        assert_eq!(state.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_resize_keeps_positions() {
        let mut state = GameState::new(Surface::new(800.0, 600.0), 7);
        state.resize(1024.0, 768.0);
        assert_eq!(state.surface, Surface::new(1024.0, 768.0));
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.paddle.y, 300.0);
    }

    #[test]
    fn test_serve_picks_diagonal() {
        let mut state = GameState::new(Surface::new(800.0, 600.0), 99);
        for _ in 0..16 {
            state.ball.speed = 3.0;
            state.reset_ball();
            assert_eq!(state.ball.vel.x.abs(), BALL_VX);
            assert_eq!(state.ball.vel.y.abs(), BALL_VY);
            assert_eq!(state.ball.speed, 1.0);
            assert_eq!(state.ball.pos, state.surface.center());
        }
    }

    #[test]
    fn test_paddle_clamp_short_surface() {
        let surface = Surface::new(300.0, 100.0);
        let mut paddle = Paddle::new(&surface);
        paddle.y = 40.0;
        paddle.clamp(&surface);
        assert_eq!(paddle.y, 0.0);
    }
}
