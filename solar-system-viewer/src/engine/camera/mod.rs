//! Camera focus on celestial bodies and the two control schemes.

use bevy::prelude::*;

/// Focus requests, reparenting of the camera and focus state.
pub mod focus;

/// Orbit controls: drag to rotate, wheel to zoom, optional auto-rotation.
pub mod orbit_controls;

/// First-person fly controls.
pub mod first_person;

/// Applies focus requests. Runs before the controls update.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocusSet;

/// Per-frame controls update.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CameraControlSet;

pub struct CameraControlsPlugin;

impl Plugin for CameraControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                orbit_controls::orbit_camera_controller
                    .run_if(resource_exists::<orbit_controls::OrbitControls>),
                first_person::first_person_camera_controller
                    .run_if(resource_exists::<first_person::FirstPersonControls>),
            )
                .in_set(CameraControlSet),
        );
    }
}
