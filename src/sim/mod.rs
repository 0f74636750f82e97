//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per display frame, no wall-clock time
//! - Seeded RNG only
//! - Side effects only through the `Presenter` passed in by the caller

pub mod collision;
pub mod machine;
pub mod state;
pub mod tick;

pub use collision::{far_wall_hit, paddle_hit, vertical_wall_hit};
pub use machine::{GameEvent, Transition, dispatch, update};
pub use state::{Ball, GamePhase, GameState, Paddle, Surface};
pub use tick::{TickOutcome, tick};
