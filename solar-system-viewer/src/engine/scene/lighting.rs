use bevy::prelude::*;
use constants::render_settings::{
    AMBIENT_BRIGHTNESS_PER_INTENSITY, AMBIENT_LIGHT_COLOUR, AMBIENT_LIGHT_INTENSITY,
    DIRECTIONAL_LIGHT_COLOUR, DIRECTIONAL_LIGHTS, LUX_PER_INTENSITY, hex_colour,
};

use crate::engine::assets::scene_config::LightingPreset;

#[derive(Component)]
pub struct SceneLight;

pub fn ambient_light_for(preset: LightingPreset) -> AmbientLight {
    match preset {
        LightingPreset::Ambient => AmbientLight {
            color: hex_colour(AMBIENT_LIGHT_COLOUR),
            brightness: AMBIENT_LIGHT_INTENSITY * AMBIENT_BRIGHTNESS_PER_INTENSITY,
            ..default()
        },
        LightingPreset::Directional => AmbientLight {
            brightness: 0.0,
            ..default()
        },
    }
}

pub fn spawn_lighting(commands: &mut Commands, preset: LightingPreset) {
    commands.insert_resource(ambient_light_for(preset));

    if preset == LightingPreset::Directional {
        for (position, intensity) in DIRECTIONAL_LIGHTS {
            commands.spawn((
                DirectionalLight {
                    color: hex_colour(DIRECTIONAL_LIGHT_COLOUR),
                    illuminance: intensity * LUX_PER_INTENSITY,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y),
                SceneLight,
            ));
        }
    }

    info!("Lighting preset: {preset:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambient_preset_is_bright() {
        let light = ambient_light_for(LightingPreset::Ambient);
        assert!(light.brightness > 0.0);
        assert_eq!(light.color, hex_colour(0x404040));
    }

    #[test]
    fn directional_preset_spawns_two_lights() {
        let mut world = World::new();
        let mut queue = bevy::ecs::world::CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);
        spawn_lighting(&mut commands, LightingPreset::Directional);
        queue.apply(&mut world);

        let mut lights = world.query_filtered::<&DirectionalLight, With<SceneLight>>();
        let mut illuminance: Vec<f32> =
            lights.iter(&world).map(|light| light.illuminance).collect();
        illuminance.sort_by(f32::total_cmp);
        assert_eq!(illuminance, vec![0.75 * LUX_PER_INTENSITY, 1.5 * LUX_PER_INTENSITY]);
        assert_eq!(world.resource::<AmbientLight>().brightness, 0.0);
    }
}
