//! Data assets read at startup.

/// Scene variant options and model placement, loaded from `*.scene.json`.
pub mod scene_config;
