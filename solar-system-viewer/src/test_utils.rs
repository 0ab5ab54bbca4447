//! Test utilities for headless Bevy integration tests.
//!
//! Provides `TestApp`, a wrapper around `bevy::app::App` that runs the focus,
//! animation loop and description panel plugins on `MinimalPlugins` with a
//! fixed 16 ms frame, without a rendering or windowing backend.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use constants::bodies::CelestialBody;

use crate::engine::animation::animation_loop::AnimationLoopPlugin;
use crate::engine::camera::focus::{
    CameraFocusPlugin, FocusChanged, FocusRequest, FocusSource, MainCamera,
};
use crate::engine::camera::orbit_controls::OrbitControls;
use crate::engine::camera::{CameraControlSet, FocusSet};
use crate::engine::animation::animation_loop::AnimationLoopSet;
use crate::ui::description_panel::DescriptionPanelPlugin;

pub(crate) const FRAME_TIME: Duration = Duration::from_millis(16);

pub(crate) struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Orbit controls are present but never updated by input systems, so
    /// camera positions only change through focus requests.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME_TIME));
        app.init_resource::<ButtonInput<KeyCode>>();
        app.insert_resource(OrbitControls::default());
        app.add_plugins((CameraFocusPlugin, AnimationLoopPlugin, DescriptionPanelPlugin));
        app.configure_sets(
            Update,
            (FocusSet, CameraControlSet, AnimationLoopSet).chain(),
        );
        // The first frame has no elapsed time.
        app.update();
        Self { app }
    }

    pub fn update(&mut self) {
        self.app.update();
    }

    /// Spawn a named scene node standing in for a body of the model.
    pub fn spawn_body(&mut self, body: CelestialBody, translation: Vec3) -> Entity {
        self.app
            .world_mut()
            .spawn((Name::new(body.name()), Transform::from_translation(translation)))
            .id()
    }

    pub fn spawn_camera(&mut self, translation: Vec3) -> Entity {
        self.app
            .world_mut()
            .spawn((
                Transform::from_translation(translation),
                Name::new("MainCamera"),
                MainCamera,
            ))
            .id()
    }

    pub fn request_focus(&mut self, body: CelestialBody) {
        self.app.world_mut().send_event(FocusRequest {
            body,
            source: FocusSource::Keyboard,
        });
    }

    pub fn send_focus_changed(&mut self, body: CelestialBody, source: FocusSource) {
        self.app
            .world_mut()
            .send_event(FocusChanged { body, source });
    }

    pub fn press_key(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    pub fn world(&self) -> &World {
        self.app.world()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
