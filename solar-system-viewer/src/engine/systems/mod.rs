//! Runtime systems for diagnostics and input shortcuts.

/// FPS tracking: RPC notifications and the native overlay.
pub mod fps_tracking;

/// Digit keys `0`..`9` focus the camera on a body.
pub mod focus_shortcuts;
