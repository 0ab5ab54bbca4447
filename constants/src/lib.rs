//! Hand-placed constants for the solar system scene.
//!
//! Nothing here is simulated: body offsets, light intensities and starfield
//! dimensions are fixed values tuned for the bundled model.

/// Celestial body table: scene node names, camera offsets and panel facts.
pub mod bodies;

/// Perspective camera and control tuning.
pub mod camera;

/// Lighting, starfield, model placement and asset paths.
pub mod render_settings;
