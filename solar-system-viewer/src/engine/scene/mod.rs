//! Scene dressing around the loaded model.

/// Ambient or directional lighting preset.
pub mod lighting;

/// Procedural background of point stars.
pub mod starfield;
