use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

/// Scene is usable once the model is spawned and the first focus is queued.
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.model_spawned && loading_progress.initial_focus_sent {
        info!("→ Scene ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
