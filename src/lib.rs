//! Palm Pong - single-paddle Pong steered by webcam hand tracking
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics step, game state machine)
//! - `hands`: Hand-tracker result model and paddle input adapter
//! - `renderer`: Scene tessellation and WebGPU rendering pipeline
//! - `ui`: Presenter capability for overlay and score side effects
//! - `platform`: Browser bindings (DOM, MediaPipe, camera)

pub mod error;
pub mod hands;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::GameError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Paddle sits at a fixed x on the left edge
    pub const PADDLE_X: f32 = 40.0;
    pub const PADDLE_WIDTH: f32 = 14.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    /// Fraction of the remaining distance to `target_y` covered per frame
    pub const PADDLE_SMOOTHING: f32 = 0.3;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 9.0;
    pub const BALL_VX: f32 = 6.0;
    pub const BALL_VY: f32 = 4.0;
    /// Added to the speed multiplier on every paddle hit
    pub const SPEED_INCREMENT: f32 = 0.05;

    /// Center divider dash pattern (on, off) in pixels
    pub const DIVIDER_DASH: f32 = 12.0;
    pub const DIVIDER_GAP: f32 = 16.0;

    /// Landmark indices averaged for the palm center (wrist + finger bases)
    pub const PALM_LANDMARKS: [usize; 5] = [0, 5, 9, 13, 17];

    /// Webcam capture size
    pub const CAMERA_WIDTH: u32 = 640;
    pub const CAMERA_HEIGHT: u32 = 480;

    /// Hand tracker defaults
    pub const MAX_HANDS: u32 = 1;
    pub const MODEL_COMPLEXITY: u32 = 1;
    pub const MIN_DETECTION_CONFIDENCE: f32 = 0.7;
    pub const MIN_TRACKING_CONFIDENCE: f32 = 0.7;
    pub const MEDIAPIPE_HANDS_CDN: &str = "https://cdn.jsdelivr.net/npm/@mediapipe/hands/";
}
