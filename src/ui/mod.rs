//! Presenter capability and overlay messages
//!
//! The state machine never touches the page directly. It calls a
//! `Presenter`, implemented by the DOM layer in the browser and by
//! `LogPresenter` for the headless native build.

/// Modal messages shown on the overlay surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    /// Tracker lost the hand mid-game; clears on the next detection
    HandNotDetected,
    /// Ball missed; carries the final score and a retry control
    GameOver { score: u32 },
    /// Camera could not be started; persistent
    CameraRequired,
}

/// Element id of the retry control inside the game-over overlay
pub const RETRY_BUTTON_ID: &str = "retryBtn";

impl Overlay {
    /// HTML body written into the overlay text element
    pub fn markup(&self) -> String {
        match self {
            Overlay::HandNotDetected => "Hand not detected<br/>Show your hand to resume".to_string(),
            Overlay::GameOver { score } => format!(
                r#"<div style="text-align:center">
  <div style="font-size:36px;margin-bottom:12px;">YOU LOSE</div>
  <div style="font-size:20px;margin-bottom:20px;">Score: {score}</div>
  <button id="{RETRY_BUTTON_ID}" style="font-size:18px;padding:10px 24px;background:#fff;color:#000;border:none;cursor:pointer;">RETRY</button>
</div>"#
            ),
            Overlay::CameraRequired => "Camera access required".to_string(),
        }
    }

    /// Plain-text summary for logs
    pub fn summary(&self) -> String {
        match self {
            Overlay::HandNotDetected => "hand not detected".to_string(),
            Overlay::GameOver { score } => format!("game over (score {score})"),
            Overlay::CameraRequired => "camera access required".to_string(),
        }
    }

    pub fn has_retry(&self) -> bool {
        matches!(self, Overlay::GameOver { .. })
    }
}

/// UI side effects consumed by the game state machine
pub trait Presenter {
    fn show_overlay(&mut self, overlay: &Overlay);
    fn hide_overlay(&mut self);
    fn set_score(&mut self, score: u32);
}

/// Presenter that only logs, for the native build
#[derive(Debug, Default)]
pub struct LogPresenter {
    pub overlay: Option<Overlay>,
    pub score: u32,
}

impl Presenter for LogPresenter {
    fn show_overlay(&mut self, overlay: &Overlay) {
        log::info!("Overlay: {}", overlay.summary());
        self.overlay = Some(overlay.clone());
    }

    fn hide_overlay(&mut self) {
        if self.overlay.take().is_some() {
            log::debug!("Overlay hidden");
        }
    }

    fn set_score(&mut self, score: u32) {
        log::debug!("Score: {}", score);
        self.score = score;
    }
}
