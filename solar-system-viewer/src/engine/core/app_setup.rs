use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::camera::{FAR_CLIPPING_PLANE, NEAR_CLIPPING_PLANE, VIEW_ANGLE_DEGREES};
use constants::render_settings::{CLEAR_COLOUR, hex_colour};

// Crate engine modules
use crate::engine::animation::animation_loop::{AnimationLoopPlugin, AnimationLoopSet};
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::camera::focus::{CameraFocusPlugin, MainCamera};
use crate::engine::camera::{CameraControlSet, CameraControlsPlugin, FocusSet};
use crate::engine::core::app_state::{AppState, FpsText, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::config_loader::{
    SceneConfigLoader, load_scene_config_system, start_loading,
};
use crate::engine::loading::model_loader::{
    ModelAssets, attach_animation_graphs, focus_initial_body, spawn_model_when_ready,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::systems::fps_tracking::fps_notification_system;
// Web RPC and UI
use crate::rpc::web_rpc::{WebRpcPlugin, notify_scene_loaded};
use crate::ui::description_panel::DescriptionPanelPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::{
    focus_shortcuts::handle_focus_shortcuts, fps_tracking::fps_text_update_system,
};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneConfig as a loadable asset type from `*.scene.json` files.
        .add_plugins(JsonAssetPlugin::<SceneConfig>::new(&["scene.json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(CameraFocusPlugin)
        .add_plugins(CameraControlsPlugin)
        .add_plugins(AnimationLoopPlugin)
        .add_plugins(DescriptionPanelPlugin)
        .insert_resource(ClearColor(hex_colour(CLEAR_COLOUR)));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<SceneConfigLoader>()
        .init_resource::<ModelAssets>();

    // Focus first, then controls, then clip clocks.
    app.configure_sets(
        Update,
        (FocusSet, CameraControlSet, AnimationLoopSet).chain(),
    );

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                load_scene_config_system,
                spawn_model_when_ready,
                focus_initial_body,
                transition_to_running,
            )
                .chain()
                .before(FocusSet)
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(Update, attach_animation_graphs)
        .add_systems(OnEnter(AppState::Running), notify_scene_loaded)
        .add_systems(
            Update,
            fps_notification_system.run_if(in_state(AppState::Running)),
        );

    // Native-only overlay and shortcuts; the browser page drives focus through RPC.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
        app.add_systems(
            Update,
            handle_focus_shortcuts
                .before(FocusSet)
                .run_if(in_state(AppState::Running)),
        );
    }

    app
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: VIEW_ANGLE_DEGREES.to_radians(),
            near: NEAR_CLIPPING_PLANE,
            far: FAR_CLIPPING_PLANE,
            ..default()
        }),
        Transform::default(),
        Name::new("MainCamera"),
        MainCamera,
    ));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    info!("=== SOLAR SYSTEM VIEWER ===");
    spawn_camera(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
