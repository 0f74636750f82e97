//! Game settings and preferences
//!
//! Persisted in LocalStorage. Gameplay tuning is fixed in `consts`; these
//! only cover the HUD and the tracker/camera collaborators.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::hands::{CameraOptions, HandsOptions};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Show FPS counter
    pub show_fps: bool,
    /// Show the webcam preview video
    pub show_preview: bool,
    /// Hand tracker options
    pub tracker: HandsOptions,
    /// Camera capture size
    pub camera: CameraOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: false,
            show_preview: true,
            tracker: HandsOptions::default(),
            camera: CameraOptions::default(),
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "palm_pong_settings";

    /// Parse stored settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Discarding stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => {
                    let _ = storage.set_item(Self::STORAGE_KEY, &json);
                    log::info!("Settings saved");
                }
                Err(e) => log::warn!("Settings not saved: {}", e),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.show_fps);
        assert!(settings.show_preview);
        assert_eq!(settings.tracker.max_num_hands, 1);
        assert_eq!(settings.camera.width, 640);
        assert_eq!(settings.camera.height, 480);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings =
            Settings::from_json(r#"{"show_fps":true,"tracker":{"minDetectionConfidence":0.5}}"#)
                .unwrap();
        assert!(settings.show_fps);
        assert!(settings.show_preview);
        assert_eq!(settings.tracker.min_detection_confidence, 0.5);
        assert_eq!(settings.tracker.min_tracking_confidence, 0.7);
        assert_eq!(settings.camera, CameraOptions::default());
    }

    #[test]
    fn test_bad_json_is_settings_error() {
        let err = Settings::from_json("not json").unwrap_err();
        assert!(matches!(err, crate::GameError::Settings(_)));
    }

    #[test]
    fn test_json_survives_store() {
        let mut settings = Settings::default();
        settings.show_preview = false;
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
