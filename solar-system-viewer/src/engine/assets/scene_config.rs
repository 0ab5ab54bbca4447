use bevy::prelude::*;
use constants::bodies::CelestialBody;
use constants::render_settings::{
    DEFAULT_ANIMATION_TIME_SCALE, DEFAULT_MODEL_PATH, MODEL_SCALE, MODEL_TRANSLATION,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    #[default]
    Orbit,
    FirstPerson,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingPreset {
    /// A single soft white light filling the whole scene.
    #[default]
    Ambient,
    /// A key light and a fill light aimed at the origin.
    Directional,
}

/// Scene variant and placement, loaded from `*.scene.json`.
/// Every field is optional in the file.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Model file relative to the asset root.
    pub model_path: String,
    pub camera_mode: CameraMode,
    pub lighting: LightingPreset,
    pub starfield: bool,
    pub description_panels: bool,
    pub animation_time_scale: f32,
    pub model_translation: [f32; 3],
    pub model_scale: f32,
    /// Body the camera is attached to once the model is loaded.
    pub initial_focus: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            camera_mode: CameraMode::Orbit,
            lighting: LightingPreset::Ambient,
            starfield: true,
            description_panels: true,
            animation_time_scale: DEFAULT_ANIMATION_TIME_SCALE,
            model_translation: MODEL_TRANSLATION,
            model_scale: MODEL_SCALE,
            initial_focus: CelestialBody::Sun.name().to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SceneConfigError {
    #[error("model_path is empty")]
    EmptyModelPath,
    #[error("animation_time_scale must be positive, got {0}")]
    InvalidTimeScale(f32),
    #[error("model_scale must be positive, got {0}")]
    InvalidModelScale(f32),
    #[error("unknown initial_focus body '{0}'")]
    UnknownBody(String),
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), SceneConfigError> {
        if self.model_path.trim().is_empty() {
            return Err(SceneConfigError::EmptyModelPath);
        }
        if !(self.animation_time_scale > 0.0) {
            return Err(SceneConfigError::InvalidTimeScale(self.animation_time_scale));
        }
        if !(self.model_scale > 0.0) {
            return Err(SceneConfigError::InvalidModelScale(self.model_scale));
        }
        self.initial_body()?;
        Ok(())
    }

    pub fn initial_body(&self) -> Result<CelestialBody, SceneConfigError> {
        CelestialBody::from_name(&self.initial_focus)
            .ok_or_else(|| SceneConfigError::UnknownBody(self.initial_focus.clone()))
    }

    pub fn model_transform(&self) -> Transform {
        Transform::from_translation(Vec3::from_array(self.model_translation))
            .with_scale(Vec3::splat(self.model_scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config: SceneConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_body(), Ok(CelestialBody::Sun));
    }

    #[test]
    fn parses_variant_options() {
        let json = r#"{
            "model_path": "models/planets.glb",
            "camera_mode": "first_person",
            "lighting": "directional",
            "starfield": false,
            "description_panels": false,
            "animation_time_scale": 1.0,
            "initial_focus": "earth"
        }"#;
        let config: SceneConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.camera_mode, CameraMode::FirstPerson);
        assert_eq!(config.lighting, LightingPreset::Directional);
        assert!(!config.starfield);
        assert!(!config.description_panels);
        assert_eq!(config.animation_time_scale, 1.0);
        assert_eq!(config.model_scale, MODEL_SCALE);
        assert_eq!(config.initial_body(), Ok(CelestialBody::Earth));
    }

    #[test]
    fn unknown_camera_mode_is_rejected() {
        let result = serde_json::from_str::<SceneConfig>(r#"{"camera_mode": "fly"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = SceneConfig {
            animation_time_scale: 0.0,
            ..default()
        };
        assert_eq!(config.validate(), Err(SceneConfigError::InvalidTimeScale(0.0)));

        let config = SceneConfig {
            model_scale: -1.0,
            ..default()
        };
        assert_eq!(config.validate(), Err(SceneConfigError::InvalidModelScale(-1.0)));

        let config = SceneConfig {
            initial_focus: "Pluto".into(),
            ..default()
        };
        assert_eq!(
            config.validate(),
            Err(SceneConfigError::UnknownBody("Pluto".into()))
        );

        let config = SceneConfig {
            model_path: " ".into(),
            ..default()
        };
        assert_eq!(config.validate(), Err(SceneConfigError::EmptyModelPath));
    }

    #[test]
    fn model_transform_uses_translation_and_uniform_scale() {
        let transform = SceneConfig::default().model_transform();
        assert_eq!(transform.translation, Vec3::new(100.0, 3.0, 30.0));
        assert_eq!(transform.scale, Vec3::splat(0.1));
    }
}
