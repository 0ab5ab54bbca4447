//! Keyframe clip clocks and the per-frame loop that keeps them running.

/// Playback clock for a single clip.
pub mod keyframe_clip;

/// Per-frame advance, stall detection and restart of every loaded clip,
/// and syncing of the engine's animation players to the clip clocks.
pub mod animation_loop;
