use bevy::animation::graph::AnimationNodeIndex;
use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;

use crate::engine::animation::animation_loop::KeyframeAnimations;
use crate::engine::animation::keyframe_clip::KeyframeClip;
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::camera::focus::{FocusError, FocusRequest, FocusSource};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::starfield::spawn_starfield;

/// Handles for the model file and the animation graph built from its clips.
#[derive(Resource, Default)]
pub struct ModelAssets {
    pub gltf: Handle<Gltf>,
    pub graph: Option<Handle<AnimationGraph>>,
}

/// Root of the spawned model scene.
#[derive(Component)]
pub struct SolarSystemModel;

/// Register each clip as a non-looping clock at `time_scale`, then start them all.
/// Zero-length clips never advance and are left out.
pub fn track_clips(
    animations: &mut KeyframeAnimations,
    clips: impl IntoIterator<Item = (String, f32, AnimationNodeIndex)>,
    time_scale: f32,
) {
    for (name, duration, node) in clips {
        if duration <= 0.0 {
            warn!("Skipping animation clip '{name}' with no duration");
            continue;
        }
        animations.push(
            KeyframeClip::new(name, duration).with_time_scale(time_scale),
            node,
        );
    }
    animations.start_all();
}

fn clip_name(gltf: &Gltf, handle: &Handle<AnimationClip>, index: usize) -> String {
    gltf.named_animations
        .iter()
        .find(|(_, named)| *named == handle)
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| format!("clip {index}"))
}

pub fn spawn_model_when_ready(
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    mut model_assets: ResMut<ModelAssets>,
    mut animations: ResMut<KeyframeAnimations>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Option<Res<SceneConfig>>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    clips: Res<Assets<AnimationClip>>,
) {
    if !loading_progress.config_loaded
        || loading_progress.model_spawned
        || loading_progress.model_failed
    {
        return;
    }
    let Some(config) = config else {
        return;
    };

    let Some(gltf) = gltfs.get(&model_assets.gltf) else {
        if let LoadState::Failed(error) = asset_server.load_state(&model_assets.gltf) {
            error!("Model '{}' failed to load: {error}", config.model_path);
            loading_progress.model_failed = true;
        }
        return;
    };

    let Some(scene) = gltf.default_scene.clone().or_else(|| gltf.scenes.first().cloned()) else {
        error!("Model '{}' contains no scene", config.model_path);
        loading_progress.model_failed = true;
        return;
    };

    let (graph, nodes) = AnimationGraph::from_clips(gltf.animations.iter().cloned());
    let tracked = gltf
        .animations
        .iter()
        .zip(nodes)
        .enumerate()
        .map(|(index, (handle, node))| {
            let duration = clips.get(handle).map(AnimationClip::duration).unwrap_or_else(|| {
                warn!("Animation clip #{index} not available, treating it as empty");
                0.0
            });
            (clip_name(gltf, handle, index), duration, node)
        });
    track_clips(&mut animations, tracked, config.animation_time_scale);
    model_assets.graph = Some(graphs.add(graph));

    commands
        .spawn((
            SceneRoot(scene),
            config.model_transform(),
            Name::new("SolarSystemModel"),
            SolarSystemModel,
        ))
        .observe(mark_model_scene_ready);

    if config.starfield {
        spawn_starfield(&mut commands, &mut meshes, &mut materials);
    }

    if animations.is_empty() {
        warn!("Model '{}' has no animations", config.model_path);
    }
    info!(
        "✓ Model spawned with {} animation clips at time scale {}",
        animations.len(),
        config.animation_time_scale
    );
    loading_progress.model_spawned = true;
}

fn mark_model_scene_ready(
    _trigger: Trigger<SceneInstanceReady>,
    mut loading_progress: ResMut<LoadingProgress>,
) {
    debug!("Model scene instance ready");
    loading_progress.model_scene_ready = true;
}

/// Give every animation player of the model the shared clip graph.
pub fn attach_animation_graphs(
    mut commands: Commands,
    model_assets: Res<ModelAssets>,
    players: Query<Entity, Added<AnimationPlayer>>,
) {
    let Some(ref graph) = model_assets.graph else {
        return;
    };
    for player in &players {
        commands
            .entity(player)
            .insert(AnimationGraphHandle(graph.clone()));
    }
}

/// Request the configured first focus once the body's node exists in the
/// spawned scene. If the scene has finished spawning without that node, the
/// focus is given up so loading can still complete.
pub fn focus_initial_body(
    mut loading_progress: ResMut<LoadingProgress>,
    mut focus_events: EventWriter<FocusRequest>,
    config: Option<Res<SceneConfig>>,
    nodes: Query<&Name>,
) {
    if !loading_progress.model_spawned || loading_progress.initial_focus_sent {
        return;
    }
    let Some(config) = config else {
        return;
    };
    let body = match config.initial_body() {
        Ok(body) => body,
        Err(error) => {
            error!("{error}");
            return;
        }
    };

    if nodes.iter().any(|name| name.as_str() == body.name()) {
        focus_events.write(FocusRequest {
            body,
            source: FocusSource::Startup,
        });
        loading_progress.initial_focus_sent = true;
    } else if loading_progress.model_scene_ready {
        warn!(
            "Initial focus skipped: {}",
            FocusError::BodyNotFound(body.name())
        );
        loading_progress.initial_focus_sent = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::bodies::CelestialBody;

    use crate::engine::camera::focus::FocusState;
    use crate::test_utils::TestApp;

    #[test]
    fn tracked_clips_start_at_configured_scale() {
        let mut animations = KeyframeAnimations::default();
        track_clips(
            &mut animations,
            [
                ("Earth orbit".to_string(), 12.0, AnimationNodeIndex::new(1)),
                ("Moon orbit".to_string(), 3.0, AnimationNodeIndex::new(2)),
            ],
            0.25,
        );

        assert_eq!(animations.len(), 2);
        for tracked in animations.tracked() {
            assert!(tracked.clip.is_playing());
            assert!(!tracked.clip.looping);
            assert_eq!(tracked.clip.time_scale, 0.25);
            assert_eq!(tracked.clip.current_time, 0.0);
            assert_eq!(tracked.last_frame_time, 0.0);
        }
        assert_eq!(animations.tracked()[1].node, AnimationNodeIndex::new(2));
    }

    #[test]
    fn zero_length_clips_are_not_tracked() {
        let mut animations = KeyframeAnimations::default();
        track_clips(
            &mut animations,
            [
                ("missing".to_string(), 0.0, AnimationNodeIndex::new(1)),
                ("Mars orbit".to_string(), 8.0, AnimationNodeIndex::new(2)),
            ],
            1.0,
        );

        assert_eq!(animations.len(), 1);
        assert_eq!(animations.tracked()[0].clip.name, "Mars orbit");
    }

    fn initial_focus_app() -> TestApp {
        let mut app = TestApp::new();
        app.app
            .init_resource::<LoadingProgress>()
            .add_systems(
                Update,
                focus_initial_body.before(crate::engine::camera::FocusSet),
            );
        app.world_mut().insert_resource(SceneConfig::default());
        app.world_mut().resource_mut::<LoadingProgress>().model_spawned = true;
        app.spawn_camera(Vec3::ZERO);
        app
    }

    #[test]
    fn initial_focus_waits_for_scene_node() {
        let mut app = initial_focus_app();

        app.update();
        assert!(!app.world().resource::<LoadingProgress>().initial_focus_sent);

        app.spawn_body(CelestialBody::Sun, Vec3::ZERO);
        app.update();

        assert!(app.world().resource::<LoadingProgress>().initial_focus_sent);
        assert_eq!(
            app.world().resource::<FocusState>().current,
            Some(CelestialBody::Sun)
        );
    }

    #[test]
    fn missing_initial_body_does_not_block_loading() {
        let mut app = initial_focus_app();
        app.spawn_body(CelestialBody::Earth, Vec3::new(50.0, 0.0, 0.0));

        app.update();
        assert!(!app.world().resource::<LoadingProgress>().initial_focus_sent);

        app.world_mut().resource_mut::<LoadingProgress>().model_scene_ready = true;
        app.update();

        let progress = app.world().resource::<LoadingProgress>();
        assert!(progress.initial_focus_sent);
        assert_eq!(app.world().resource::<FocusState>().current, None);
    }
}
