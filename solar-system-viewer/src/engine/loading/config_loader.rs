use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use constants::render_settings::SCENE_CONFIG_PATH;

use crate::engine::assets::scene_config::{CameraMode, SceneConfig};
use crate::engine::camera::first_person::FirstPersonControls;
use crate::engine::camera::orbit_controls::OrbitControls;
use crate::engine::loading::model_loader::ModelAssets;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::lighting::spawn_lighting;

#[derive(Resource, Default)]
pub struct SceneConfigLoader {
    handle: Option<Handle<SceneConfig>>,
}

pub fn start_loading(mut config_loader: ResMut<SceneConfigLoader>, asset_server: Res<AssetServer>) {
    info!("Loading scene configuration from {SCENE_CONFIG_PATH}");
    config_loader.handle = Some(asset_server.load(SCENE_CONFIG_PATH));
}

/// Decide which configuration to run with. `None` means the file is still loading.
pub fn resolve_scene_config(loaded: Option<&SceneConfig>, failed: bool) -> Option<SceneConfig> {
    match loaded {
        Some(config) => match config.validate() {
            Ok(()) => Some(config.clone()),
            Err(error) => {
                error!("Invalid scene configuration ({error}), using defaults");
                Some(SceneConfig::default())
            }
        },
        None if failed => {
            error!("Scene configuration failed to load, using defaults");
            Some(SceneConfig::default())
        }
        None => None,
    }
}

/// Wait for the configuration, then build the scene around it: lighting,
/// camera controls, description panels and the model load.
pub fn load_scene_config_system(
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    mut model_assets: ResMut<ModelAssets>,
    config_loader: Res<SceneConfigLoader>,
    asset_server: Res<AssetServer>,
    configs: Res<Assets<SceneConfig>>,
) {
    if loading_progress.config_loaded {
        return;
    }
    let Some(ref handle) = config_loader.handle else {
        return;
    };

    let failed = matches!(asset_server.load_state(handle), LoadState::Failed(_));
    let Some(config) = resolve_scene_config(configs.get(handle), failed) else {
        return;
    };

    info!(
        "✓ Scene configuration ready: camera {:?}, lighting {:?}, starfield {}, panels {}",
        config.camera_mode, config.lighting, config.starfield, config.description_panels
    );

    spawn_lighting(&mut commands, config.lighting);

    match config.camera_mode {
        CameraMode::Orbit => commands.insert_resource(OrbitControls::default()),
        CameraMode::FirstPerson => commands.insert_resource(FirstPersonControls::default()),
    }

    // The browser page carries its own panel elements.
    #[cfg(not(target_arch = "wasm32"))]
    {
        if config.description_panels {
            crate::ui::description_panel::spawn_description_panels(&mut commands);
        }
    }

    model_assets.gltf = asset_server.load::<Gltf>(config.model_path.clone());
    commands.insert_resource(config);
    loading_progress.config_loaded = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::scene_config::LightingPreset;

    #[test]
    fn waits_while_loading() {
        assert_eq!(resolve_scene_config(None, false), None);
    }

    #[test]
    fn falls_back_to_defaults_on_failure() {
        assert_eq!(resolve_scene_config(None, true), Some(SceneConfig::default()));
    }

    #[test]
    fn valid_config_is_used_as_is() {
        let config = SceneConfig {
            lighting: LightingPreset::Directional,
            starfield: false,
            ..default()
        };
        assert_eq!(resolve_scene_config(Some(&config), false), Some(config));
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let config = SceneConfig {
            model_scale: 0.0,
            ..default()
        };
        assert_eq!(
            resolve_scene_config(Some(&config), false),
            Some(SceneConfig::default())
        );
    }
}
