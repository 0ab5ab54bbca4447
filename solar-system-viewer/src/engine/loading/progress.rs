use bevy::prelude::*;

#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    pub config_loaded: bool,
    pub model_spawned: bool,
    pub model_failed: bool,
    /// Every node of the model scene exists in the world.
    pub model_scene_ready: bool,
    /// The first focus was queued, or given up on because its node is missing.
    pub initial_focus_sent: bool,
}
