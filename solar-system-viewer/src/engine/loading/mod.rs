//! Asset loading for the solar system scene.
//!
//! Loading runs in stages while the app is in `AppState::Loading`: scene
//! configuration, then the model it names, then the first camera focus.

/// Scene configuration loading and scene bootstrap from it.
///
/// Falls back to the built-in configuration when the file is missing or invalid.
pub mod config_loader;

/// Model spawning, animation graph setup and the initial focus request.
pub mod model_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
