use std::f32::consts::{PI, TAU};

use bevy::{
    input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel},
    prelude::*,
    window::PrimaryWindow,
};
use constants::camera::{
    ORBIT_AUTO_ROTATE_SPEED, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_POLAR_EPSILON,
    ORBIT_ROTATE_SPEED, ORBIT_ZOOM_SPEED, PIXELS_PER_SCROLL_LINE,
};

use super::focus::MainCamera;

/// Orbit camera state. The camera circles `target` on a sphere; input
/// accumulates rotation and zoom deltas which `update` applies once.
///
/// Positions are in the camera's parent space, so after a focus change the
/// target is the focused body's origin.
#[derive(Resource, Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    pub auto_rotate: bool,
    /// 2.0 is one full turn every 30 seconds.
    pub auto_rotate_speed: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    theta_delta: f32,
    phi_delta: f32,
    scale: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            auto_rotate: false,
            auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            theta_delta: 0.0,
            phi_delta: 0.0,
            scale: 1.0,
        }
    }
}

impl OrbitControls {
    pub fn rotate_left(&mut self, angle: f32) {
        self.theta_delta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.phi_delta -= angle;
    }

    /// Distance multiplier for one wheel step.
    pub fn zoom_scale(&self) -> f32 {
        0.95_f32.powf(self.zoom_speed)
    }

    /// Positive steps move towards the target, negative steps away.
    pub fn dolly(&mut self, steps: f32) {
        self.scale *= self.zoom_scale().powf(steps);
    }

    pub fn auto_rotation_angle(&self, delta_secs: f32) -> f32 {
        TAU / 60.0 * self.auto_rotate_speed * delta_secs
    }

    /// Apply pending deltas and auto-rotation to `position` and return the
    /// new position. Pending deltas are consumed.
    pub fn update(&mut self, position: Vec3, delta_secs: f32) -> Vec3 {
        let offset = position - self.target;
        let radius = offset.length();
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };

        if self.auto_rotate {
            self.rotate_left(self.auto_rotation_angle(delta_secs));
        }

        theta += self.theta_delta;
        phi = (phi + self.phi_delta).clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        let radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);

        self.theta_delta = 0.0;
        self.phi_delta = 0.0;
        self.scale = 1.0;

        let sin_phi_radius = phi.sin() * radius;
        self.target
            + Vec3::new(
                sin_phi_radius * theta.sin(),
                phi.cos() * radius,
                sin_phi_radius * theta.cos(),
            )
    }
}

/// Left-drag rotates, the wheel zooms, auto-rotation runs every frame.
pub fn orbit_camera_controller(
    mut controls: ResMut<OrbitControls>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();

    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        let height = windows
            .single()
            .map(|window| window.height())
            .unwrap_or(1.0)
            .max(1.0);
        let rotate_speed = controls.rotate_speed;
        controls.rotate_left(TAU * mouse_delta.x / height * rotate_speed);
        controls.rotate_up(TAU * mouse_delta.y / height * rotate_speed);
    }

    let mut scroll_steps = 0.0;
    for scroll in scroll_events.read() {
        scroll_steps += match scroll.unit {
            MouseScrollUnit::Line => scroll.y,
            MouseScrollUnit::Pixel => scroll.y / PIXELS_PER_SCROLL_LINE,
        };
    }
    if scroll_steps != 0.0 {
        controls.dolly(scroll_steps);
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    transform.translation = controls.update(transform.translation, time.delta_secs());
    transform.look_at(controls.target, Vec3::Y);
}
