//! Game state machine
//!
//! Paused -> Running on a detected hand, Running -> Paused when the hand is
//! lost, Running -> GameOver on a miss, and GameOver -> Paused on retry.
//! Resuming after a retry needs a fresh hand detection.

use super::state::{GamePhase, GameState};
use super::tick::tick;
use crate::ui::{Overlay, Presenter};

/// Inputs to the state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Tracker sees a hand; `palm_y` is the normalized palm center (0 = top)
    HandDetected { palm_y: f32 },
    /// Tracker result had no hand
    HandLost,
    /// Ball crossed the left edge
    BallMissed,
    /// Player pressed the retry control
    Retry,
}

/// Result of dispatching an event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: GamePhase,
    pub to: GamePhase,
    pub event: GameEvent,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Apply one event to the game state
pub fn dispatch<P: Presenter + ?Sized>(
    state: &mut GameState,
    event: GameEvent,
    presenter: &mut P,
) -> Transition {
    let from = state.phase();

    match event {
        GameEvent::HandDetected { palm_y } => {
            if !state.game_over {
                state.hand_visible = true;
                state.running = true;
                presenter.hide_overlay();
                // Center the paddle on the palm
                state.paddle.target_y =
                    palm_y * state.surface.height - state.paddle.height / 2.0;
            }
        }
        GameEvent::HandLost => {
            // Only the falling edge pauses and prompts
            if state.hand_visible && !state.game_over {
                state.running = false;
                presenter.show_overlay(&Overlay::HandNotDetected);
            }
            state.hand_visible = false;
        }
        GameEvent::BallMissed => {
            if state.running && !state.game_over {
                state.game_over = true;
                state.running = false;
                presenter.show_overlay(&Overlay::GameOver { score: state.score });
            }
        }
        GameEvent::Retry => {
            if state.game_over {
                state.score = 0;
                presenter.set_score(0);
                state.game_over = false;
                state.reset_ball();
                presenter.hide_overlay();
                log::info!("Retry (seed {})", state.seed);
            }
        }
    }

    let transition = Transition {
        from,
        to: state.phase(),
        event,
    };
    if transition.changed() {
        log::info!(
            "{:?} -> {:?} on {:?}",
            transition.from,
            transition.to,
            transition.event
        );
    }
    transition
}

/// Run one physics step and feed its outcome back through the machine
pub fn update<P: Presenter + ?Sized>(state: &mut GameState, presenter: &mut P) {
    let outcome = tick(state);

    if outcome.paddle_hit {
        presenter.set_score(state.score);
    }

    if outcome.missed {
        dispatch(state, GameEvent::BallMissed, presenter);
    }
}
