use bevy::color::Color;
use bevy::math::Vec3;

/// Scene configuration asset, relative to the asset root.
pub const SCENE_CONFIG_PATH: &str = "solar_system.scene.json";

/// Model used when the configuration does not name one.
pub const DEFAULT_MODEL_PATH: &str = "models/solar_system.glb";

pub const CLEAR_COLOUR: u32 = 0x000000;

/// Ambient preset: soft white light.
pub const AMBIENT_LIGHT_COLOUR: u32 = 0x404040;
pub const AMBIENT_LIGHT_INTENSITY: f32 = 3.25;
/// Converts a unitless intensity into ambient brightness (cd/m²).
pub const AMBIENT_BRIGHTNESS_PER_INTENSITY: f32 = 250.0;

/// Directional preset: a key light and a dimmer fill light, both aimed at the origin.
pub const DIRECTIONAL_LIGHTS: [(Vec3, f32); 2] = [
    (Vec3::new(1.0, 1.0, 1.0), 1.5),
    (Vec3::new(-1.0, -0.5, -1.0), 0.75),
];
pub const DIRECTIONAL_LIGHT_COLOUR: u32 = 0xffffff;
/// Converts a unitless intensity into illuminance (lux).
pub const LUX_PER_INTENSITY: f32 = 4000.0;

/// Model placement
pub const MODEL_TRANSLATION: [f32; 3] = [100.0, 3.0, 30.0];
pub const MODEL_SCALE: f32 = 0.1;

/// Playback speed applied to every keyframe clip once the model is loaded.
pub const DEFAULT_ANIMATION_TIME_SCALE: f32 = 0.25;

/// Starfield
pub const STAR_COUNT: usize = 50000;
/// Edge length of the cube the stars are scattered in, centred on the origin.
pub const STARFIELD_SPREAD: f32 = 10000.0;
pub const STAR_COLOUR: u32 = 0x888888;
pub const STARFIELD_SEED: u64 = 0x5747_4152;

/// Convert a `0xRRGGBB` value into an sRGB colour.
pub fn hex_colour(hex: u32) -> Color {
    Color::srgb_u8(
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colour_splits_channels() {
        assert_eq!(hex_colour(0x404040), Color::srgb_u8(0x40, 0x40, 0x40));
        assert_eq!(hex_colour(0x888888), Color::srgb_u8(0x88, 0x88, 0x88));
        assert_eq!(hex_colour(0xff0000), Color::srgb_u8(255, 0, 0));
    }
}
