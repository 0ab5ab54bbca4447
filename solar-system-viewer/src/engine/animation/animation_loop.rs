use bevy::animation::graph::AnimationNodeIndex;
use bevy::prelude::*;

use super::keyframe_clip::KeyframeClip;

/// A clip together with its node in the model's animation graph and the
/// playback time observed at the end of the previous frame.
#[derive(Debug, Clone)]
pub struct TrackedClip {
    pub clip: KeyframeClip,
    pub node: AnimationNodeIndex,
    pub last_frame_time: f32,
}

/// Every keyframe clip of the loaded model, in load order.
#[derive(Resource, Default, Debug)]
pub struct KeyframeAnimations {
    tracked: Vec<TrackedClip>,
}

impl KeyframeAnimations {
    pub fn push(&mut self, clip: KeyframeClip, node: AnimationNodeIndex) {
        self.tracked.push(TrackedClip {
            clip,
            node,
            last_frame_time: 0.0,
        });
    }

    pub fn tracked(&self) -> &[TrackedClip] {
        &self.tracked
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    /// Reset every record to zero and play every clip from the start.
    pub fn start_all(&mut self) {
        for tracked in &mut self.tracked {
            tracked.last_frame_time = 0.0;
            tracked.clip.play();
        }
    }

    pub fn advance_all(&mut self, delta: f32) {
        for tracked in &mut self.tracked {
            tracked.clip.advance(delta);
        }
    }

    /// Restart every playing, unpaused clip whose time has not moved since
    /// the previous frame. Returns the indices of the restarted clips.
    ///
    /// A zero-length frame looks exactly like a clip frozen at its end, so
    /// it also triggers a restart.
    pub fn restart_stalled(&mut self) -> Vec<usize> {
        let mut restarted = Vec::new();

        for (index, tracked) in self.tracked.iter_mut().enumerate() {
            let clip = &mut tracked.clip;
            if !clip.is_playing() || clip.is_paused() {
                continue;
            }

            if clip.current_time == tracked.last_frame_time {
                clip.stop();
                clip.play();
                tracked.last_frame_time = 0.0;
                restarted.push(index);
            }
        }

        restarted
    }

    /// Overwrite every record with the clip's current time.
    pub fn record_frame_times(&mut self) {
        for tracked in &mut self.tracked {
            tracked.last_frame_time = tracked.clip.current_time;
        }
    }
}

/// Advance, repair and apply clip clocks each frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnimationLoopSet;

pub struct AnimationLoopPlugin;

impl Plugin for AnimationLoopPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyframeAnimations>()
            .add_systems(
                Update,
                (
                    advance_keyframe_clips,
                    restart_stalled_clips,
                    sync_animation_players,
                )
                    .chain()
                    .in_set(AnimationLoopSet),
            )
            // Records are written at the end of the frame's update, after the repair check.
            .add_systems(Last, record_clip_frame_times);
    }
}

pub fn advance_keyframe_clips(time: Res<Time>, mut animations: ResMut<KeyframeAnimations>) {
    animations.advance_all(time.delta_secs());
}

pub fn restart_stalled_clips(mut animations: ResMut<KeyframeAnimations>) {
    for index in animations.restart_stalled() {
        debug!(
            "Restarted stalled clip '{}' (#{index})",
            animations.tracked[index].clip.name
        );
    }
}

/// Drive the engine's animation players from the clip clocks. Players keep
/// their animations paused so the only time source is `KeyframeClip`.
pub fn sync_animation_players(
    animations: Res<KeyframeAnimations>,
    mut players: Query<&mut AnimationPlayer, With<AnimationGraphHandle>>,
) {
    for mut player in &mut players {
        for tracked in animations.tracked() {
            if !tracked.clip.is_playing() {
                player.stop(tracked.node);
                continue;
            }

            if !player.is_playing_animation(tracked.node) {
                player.play(tracked.node);
            }

            if let Some(active) = player.animation_mut(tracked.node) {
                active.pause().seek_to(tracked.clip.current_time);
            }
        }
    }
}

pub fn record_clip_frame_times(mut animations: ResMut<KeyframeAnimations>) {
    animations.record_frame_times();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestApp;

    fn single_clip(duration: f32) -> KeyframeAnimations {
        let mut animations = KeyframeAnimations::default();
        animations.push(
            KeyframeClip::new("orbit", duration),
            AnimationNodeIndex::new(1),
        );
        animations.start_all();
        animations
    }

    fn frame(animations: &mut KeyframeAnimations, delta: f32) -> Vec<usize> {
        animations.advance_all(delta);
        let restarted = animations.restart_stalled();
        animations.record_frame_times();
        restarted
    }

    #[test]
    fn moving_clip_is_left_alone() {
        let mut animations = single_clip(1.0);
        assert!(frame(&mut animations, 0.5).is_empty());
        assert_eq!(animations.tracked()[0].last_frame_time, 0.5);
    }

    #[test]
    fn clip_frozen_at_end_restarts_from_zero() {
        let mut animations = single_clip(1.0);
        assert!(frame(&mut animations, 0.5).is_empty());
        assert!(frame(&mut animations, 0.6).is_empty());
        assert_eq!(animations.tracked()[0].clip.current_time, 1.0);

        assert_eq!(frame(&mut animations, 0.5), vec![0]);
        let tracked = &animations.tracked()[0];
        assert_eq!(tracked.clip.current_time, 0.0);
        assert_eq!(tracked.last_frame_time, 0.0);
        assert!(tracked.clip.is_playing());

        assert!(frame(&mut animations, 0.25).is_empty());
        assert_eq!(animations.tracked()[0].clip.current_time, 0.25);
    }

    #[test]
    fn zero_length_frame_counts_as_stall() {
        let mut animations = single_clip(1.0);
        frame(&mut animations, 0.5);
        assert_eq!(frame(&mut animations, 0.0), vec![0]);
        assert_eq!(animations.tracked()[0].clip.current_time, 0.0);
    }

    #[test]
    fn paused_and_stopped_clips_are_not_restarted() {
        let mut animations = KeyframeAnimations::default();
        animations.push(KeyframeClip::new("paused", 1.0), AnimationNodeIndex::new(1));
        animations.push(KeyframeClip::new("stopped", 1.0), AnimationNodeIndex::new(2));
        animations.start_all();
        frame(&mut animations, 0.5);

        animations.tracked[0].clip.pause();
        animations.tracked[1].clip.stop();

        assert!(frame(&mut animations, 0.5).is_empty());
        assert_eq!(animations.tracked()[0].clip.current_time, 0.5);
        assert!(!animations.tracked()[1].clip.is_playing());
    }

    #[test]
    fn only_stalled_clips_restart() {
        let mut animations = KeyframeAnimations::default();
        animations.push(KeyframeClip::new("short", 0.5), AnimationNodeIndex::new(1));
        animations.push(KeyframeClip::new("long", 10.0), AnimationNodeIndex::new(2));
        animations.start_all();

        frame(&mut animations, 0.5);
        assert_eq!(frame(&mut animations, 0.5), vec![0]);
        assert_eq!(animations.tracked()[1].clip.current_time, 1.0);
    }

    #[test]
    fn start_all_resets_records() {
        let mut animations = single_clip(2.0);
        frame(&mut animations, 1.0);
        animations.start_all();
        assert_eq!(animations.tracked()[0].last_frame_time, 0.0);
        assert_eq!(animations.tracked()[0].clip.current_time, 0.0);
    }

    #[test]
    fn systems_loop_a_short_clip() {
        let mut app = TestApp::new();
        {
            let mut animations = app.world_mut().resource_mut::<KeyframeAnimations>();
            // 16 ms frames reach the end of a 40 ms clip on the third frame.
            animations.push(KeyframeClip::new("orbit", 0.04), AnimationNodeIndex::new(1));
            animations.start_all();
        }

        let mut saw_end = false;
        let mut saw_restart = false;
        for _ in 0..8 {
            app.update();
            let tracked = &app.world().resource::<KeyframeAnimations>().tracked()[0];
            assert_eq!(tracked.last_frame_time, tracked.clip.current_time);
            assert!(tracked.clip.is_playing());
            if tracked.clip.current_time == 0.04 {
                saw_end = true;
            } else if saw_end && tracked.clip.current_time == 0.0 {
                saw_restart = true;
            }
        }

        assert!(saw_end);
        assert!(saw_restart);
    }

    fn player_seek(app: &TestApp, player: Entity, node: AnimationNodeIndex) -> Option<(f32, bool)> {
        app.world()
            .get::<AnimationPlayer>(player)
            .and_then(|player| player.animation(node))
            .map(|active| (active.seek_time(), active.is_paused()))
    }

    #[test]
    fn players_follow_clip_clocks() {
        let node = AnimationNodeIndex::new(1);
        let mut app = TestApp::new();
        {
            let mut animations = app.world_mut().resource_mut::<KeyframeAnimations>();
            animations.push(KeyframeClip::new("orbit", 0.04), node);
            animations.start_all();
        }
        let player = app
            .world_mut()
            .spawn((
                AnimationPlayer::default(),
                AnimationGraphHandle(Handle::default()),
            ))
            .id();

        let mut saw_restart = false;
        let mut previous = 0.0;
        for _ in 0..6 {
            app.update();
            let clip_time = app.world().resource::<KeyframeAnimations>().tracked()[0]
                .clip
                .current_time;
            let (seek_time, paused) = player_seek(&app, player, node).unwrap();
            assert_eq!(seek_time, clip_time);
            assert!(paused);
            if previous == 0.04 && seek_time == 0.0 {
                saw_restart = true;
            }
            previous = seek_time;
        }
        assert!(saw_restart);

        app.world_mut().resource_mut::<KeyframeAnimations>().tracked[0]
            .clip
            .stop();
        app.update();
        assert_eq!(player_seek(&app, player, node), None);
    }
}
