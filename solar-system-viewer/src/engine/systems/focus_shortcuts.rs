use bevy::prelude::*;
use constants::bodies::CelestialBody;

use crate::engine::camera::focus::{FocusRequest, FocusSource};

const DIGIT_KEYS: [KeyCode; 10] = [
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// `0` is the Sun, `1`..`9` follow the body table outwards.
pub fn body_for_key(key: KeyCode) -> Option<CelestialBody> {
    DIGIT_KEYS
        .iter()
        .position(|digit| *digit == key)
        .map(|index| CelestialBody::ALL[index])
}

pub fn handle_focus_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut focus_events: EventWriter<FocusRequest>,
) {
    for key in keyboard.get_just_pressed() {
        if let Some(body) = body_for_key(*key) {
            focus_events.write(FocusRequest {
                body,
                source: FocusSource::Keyboard,
            });
        }
    }
}
