//! Error taxonomy
//!
//! Only two failures are user-facing (camera refused, hand out of frame);
//! the rest are startup or per-frame platform failures that get logged.

use thiserror::Error;

use crate::ui::Overlay;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("camera unavailable: {0}")]
    CameraUnavailable(String),

    #[error("no hand detected in frame")]
    HandTrackingAbsent,

    #[error("page setup failed: {0}")]
    Dom(String),

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("render surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("could not create render surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("GPU device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}

impl GameError {
    /// Overlay shown to the user for this error, if any
    pub fn overlay(&self) -> Option<Overlay> {
        match self {
            GameError::CameraUnavailable(_) => Some(Overlay::CameraRequired),
            GameError::HandTrackingAbsent => Some(Overlay::HandNotDetected),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
