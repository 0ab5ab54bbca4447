use bevy::{input::mouse::MouseMotion, math::EulerRot, prelude::*};
use constants::camera::{
    FIRST_PERSON_FAST_MULTIPLIER, FIRST_PERSON_MOVEMENT_SPEED, FIRST_PERSON_PITCH_LIMIT,
    FIRST_PERSON_PITCH_SENSITIVITY, FIRST_PERSON_SLOW_MULTIPLIER, FIRST_PERSON_YAW_SENSITIVITY,
};

use super::focus::MainCamera;

/// Free-fly camera state. Movement happens in the camera's parent space.
#[derive(Resource, Debug, Clone)]
pub struct FirstPersonControls {
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
}

impl Default for FirstPersonControls {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            movement_speed: FIRST_PERSON_MOVEMENT_SPEED,
        }
    }
}

impl FirstPersonControls {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    pub fn look(&mut self, mouse_delta: Vec2) {
        self.yaw -= mouse_delta.x * FIRST_PERSON_YAW_SENSITIVITY;
        self.pitch -= mouse_delta.y * FIRST_PERSON_PITCH_SENSITIVITY;
        self.pitch = self
            .pitch
            .clamp(-FIRST_PERSON_PITCH_LIMIT, FIRST_PERSON_PITCH_LIMIT);
    }

    /// Point the view from `from` towards `target`.
    pub fn face_towards(&mut self, from: Vec3, target: Vec3) {
        let direction = (target - from).normalize_or_zero();
        if direction == Vec3::ZERO {
            return;
        }
        self.pitch = direction
            .y
            .asin()
            .clamp(-FIRST_PERSON_PITCH_LIMIT, FIRST_PERSON_PITCH_LIMIT);
        self.yaw = (-direction.x).atan2(-direction.z);
    }

    /// Displacement for one frame. `input` is x right, y up, z backwards.
    pub fn displacement(&self, input: Vec3, speed_multiplier: f32, delta_secs: f32) -> Vec3 {
        if input == Vec3::ZERO {
            return Vec3::ZERO;
        }
        let view_rot = self.rotation();
        let forward = (view_rot * Vec3::Z).normalize();
        let right = (view_rot * Vec3::X).normalize();
        let world_delta = right * input.x + Vec3::Y * input.y + forward * input.z;
        world_delta.normalize_or_zero() * self.movement_speed * speed_multiplier * delta_secs
    }
}

/// WASD moves, E/Q rise and sink, Shift is faster, Ctrl slower, right-drag looks.
pub fn first_person_camera_controller(
    mut controls: ResMut<FirstPersonControls>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        controls.look(mouse_delta);
    }

    let mut move_input = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        move_input.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        move_input.z += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        move_input.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        move_input.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyE) {
        move_input.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyQ) {
        move_input.y -= 1.0;
    }

    let mut speed_multiplier = 1.0;
    if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
        speed_multiplier *= FIRST_PERSON_FAST_MULTIPLIER;
    }
    if keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]) {
        speed_multiplier *= FIRST_PERSON_SLOW_MULTIPLIER;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    transform.translation += controls.displacement(move_input, speed_multiplier, time.delta_secs());
    transform.rotation = controls.rotation();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_towards_points_forward_at_target() {
        let mut controls = FirstPersonControls::default();
        let from = Vec3::new(60.0, 10.0, 60.0);
        controls.face_towards(from, Vec3::ZERO);

        let forward = controls.rotation() * Vec3::NEG_Z;
        let expected = (Vec3::ZERO - from).normalize();
        assert!(forward.abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn look_clamps_pitch() {
        let mut controls = FirstPersonControls::default();
        controls.look(Vec2::new(0.0, -10000.0));
        assert_eq!(controls.pitch, FIRST_PERSON_PITCH_LIMIT);
        controls.look(Vec2::new(0.0, 10000.0));
        assert_eq!(controls.pitch, -FIRST_PERSON_PITCH_LIMIT);
    }

    #[test]
    fn forward_input_moves_along_view() {
        let controls = FirstPersonControls::default();
        let moved = controls.displacement(Vec3::new(0.0, 0.0, -1.0), 1.0, 0.5);
        assert!(moved.abs_diff_eq(Vec3::new(0.0, 0.0, -FIRST_PERSON_MOVEMENT_SPEED * 0.5), 1e-3));
    }

    #[test]
    fn no_input_no_movement() {
        let controls = FirstPersonControls::default();
        assert_eq!(controls.displacement(Vec3::ZERO, 3.5, 1.0), Vec3::ZERO);
    }
}
