//! Hand-tracker input adapter
//!
//! MediaPipe Hands reports each detected hand as 21 normalized landmarks.
//! The paddle follows the palm center: the mean `y` of the wrist and the
//! four finger bases. This module decodes tracker payloads and turns them
//! into `GameEvent`s; the state machine decides what each event means in
//! the current phase.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::GameEvent;

/// Number of landmarks in a tracked hand
pub const HAND_LANDMARKS: usize = 21;

/// One normalized landmark point (x, y in [0, 1], y pointing down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

/// A single tracker result: zero or more hands
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandResults {
    #[serde(rename = "multiHandLandmarks", default)]
    pub hands: Vec<Vec<Landmark>>,
}

impl HandResults {
    /// Decode the `multiHandLandmarks` array of a tracker result.
    /// `null` or a missing value means no hands.
    pub fn from_landmarks_json(json: &str) -> serde_json::Result<Self> {
        let hands: Option<Vec<Vec<Landmark>>> = serde_json::from_str(json)?;
        Ok(Self {
            hands: hands.unwrap_or_default(),
        })
    }
}

/// Options passed to `Hands.setOptions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HandsOptions {
    pub max_num_hands: u32,
    pub model_complexity: u32,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

impl Default for HandsOptions {
    fn default() -> Self {
        Self {
            max_num_hands: MAX_HANDS,
            model_complexity: MODEL_COMPLEXITY,
            min_detection_confidence: MIN_DETECTION_CONFIDENCE,
            min_tracking_confidence: MIN_TRACKING_CONFIDENCE,
        }
    }
}

/// Capture size requested from the camera helper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            width: CAMERA_WIDTH,
            height: CAMERA_HEIGHT,
        }
    }
}

/// URL for a MediaPipe Hands asset (passed as `locateFile`)
pub fn locate_file(file: &str) -> String {
    format!("{MEDIAPIPE_HANDS_CDN}{file}")
}

/// Mean normalized `y` of the palm landmarks, or `None` if the hand is
/// missing any of them
pub fn palm_center(hand: &[Landmark]) -> Option<f32> {
    let mut sum = 0.0;
    for &i in &PALM_LANDMARKS {
        sum += hand.get(i)?.y;
    }
    Some(sum / PALM_LANDMARKS.len() as f32)
}

/// Map a tracker result to a state-machine event
pub fn interpret(results: &HandResults) -> Option<GameEvent> {
    let Some(hand) = results.hands.first() else {
        return Some(GameEvent::HandLost);
    };

    match palm_center(hand) {
        Some(palm_y) => Some(GameEvent::HandDetected { palm_y }),
        None => {
            log::warn!(
                "Ignoring hand with {} landmarks (expected {})",
                hand.len(),
                HAND_LANDMARKS
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand_with_palm(ys: [f32; 5]) -> Vec<Landmark> {
        let mut hand = vec![
            Landmark {
                x: 0.5,
                y: 0.99,
                z: 0.0
            };
            HAND_LANDMARKS
        ];
        for (&i, y) in PALM_LANDMARKS.iter().zip(ys) {
            hand[i].y = y;
        }
        hand
    }

    #[test]
    fn test_palm_center_is_mean_of_five() {
        let hand = hand_with_palm([0.1, 0.2, 0.3, 0.4, 0.5]);
        let y = palm_center(&hand).unwrap();
        assert!((y - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_palm_center_short_hand() {
        let hand = hand_with_palm([0.5; 5]);
        assert!(palm_center(&hand[..17]).is_none());
        assert!(palm_center(&hand[..18]).is_some());
    }

    #[test]
    fn test_interpret_empty_is_hand_lost() {
        assert_eq!(interpret(&HandResults::default()), Some(GameEvent::HandLost));
    }

    #[test]
    fn test_interpret_uses_first_hand() {
        let results = HandResults {
            hands: vec![hand_with_palm([0.6; 5]), hand_with_palm([0.1; 5])],
        };
        match interpret(&results) {
            Some(GameEvent::HandDetected { palm_y }) => assert!((palm_y - 0.6).abs() < 1e-6),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_interpret_malformed_hand_is_ignored() {
        let results = HandResults {
            hands: vec![vec![Landmark { x: 0.0, y: 0.0, z: 0.0 }; 3]],
        };
        assert_eq!(interpret(&results), None);
    }

    #[test]
    fn test_decode_tracker_payload() {
        let mut json = String::from("[[");
        for i in 0..HAND_LANDMARKS {
            if i > 0 {
                json.push(',');
            }
            json.push_str(&format!(r#"{{"x":0.5,"y":{},"z":-0.01}}"#, i as f32 / 100.0));
        }
        json.push_str("]]");

        let results = HandResults::from_landmarks_json(&json).unwrap();
        assert_eq!(results.hands.len(), 1);
        assert_eq!(results.hands[0].len(), HAND_LANDMARKS);
        // (0 + 5 + 9 + 13 + 17) / 5 / 100
        let palm = palm_center(&results.hands[0]).unwrap();
        assert!((palm - 0.088).abs() < 1e-6);
    }

    #[test]
    fn test_decode_null_and_empty() {
        assert!(HandResults::from_landmarks_json("null").unwrap().hands.is_empty());
        assert!(HandResults::from_landmarks_json("[]").unwrap().hands.is_empty());
        assert!(HandResults::from_landmarks_json("{").is_err());
    }

    #[test]
    fn test_full_result_object_decodes() {
        let results: HandResults = serde_json::from_str(r#"{"image":{}}"#).unwrap();
        assert!(results.hands.is_empty());
    }

    #[test]
    fn test_options_serialize_for_mediapipe() {
        let json = serde_json::to_value(HandsOptions::default()).unwrap();
        assert_eq!(json["maxNumHands"], 1);
        assert_eq!(json["modelComplexity"], 1);
        assert!((json["minDetectionConfidence"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert!((json["minTrackingConfidence"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert_eq!(CameraOptions::default(), CameraOptions { width: 640, height: 480 });
    }

    #[test]
    fn test_locate_file() {
        assert_eq!(
            locate_file("hands.binarypb"),
            "https://cdn.jsdelivr.net/npm/@mediapipe/hands/hands.binarypb"
        );
    }
}
