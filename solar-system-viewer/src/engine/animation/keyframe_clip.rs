/// Playback clock for one keyframe animation clip.
///
/// The clock owns the time value; the engine's animation player is only
/// seeked to it. A non-looping clip that reaches its end stays `playing`
/// with `current_time == duration`, which is the stall the animation loop
/// repairs.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeClip {
    pub name: String,
    pub duration: f32,
    pub current_time: f32,
    pub time_scale: f32,
    pub looping: bool,
    playing: bool,
    paused: bool,
}

impl KeyframeClip {
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration: duration.max(0.0),
            current_time: 0.0,
            time_scale: 1.0,
            looping: false,
            playing: false,
            paused: false,
        }
    }

    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Start from the beginning.
    pub fn play(&mut self) {
        self.playing = true;
        self.paused = false;
        self.current_time = 0.0;
    }

    pub fn stop(&mut self) {
        self.playing = false;
        self.paused = false;
    }

    pub fn pause(&mut self) {
        if self.playing {
            self.paused = true;
        }
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Move the clock forward by `delta` seconds of frame time.
    pub fn advance(&mut self, delta: f32) {
        if !self.playing || self.paused {
            return;
        }

        self.current_time += delta * self.time_scale;

        if self.looping {
            if self.duration > 0.0 {
                self.current_time = self.current_time.rem_euclid(self.duration);
            } else {
                self.current_time = 0.0;
            }
        } else {
            self.current_time = self.current_time.clamp(0.0, self.duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clip_is_stopped_at_zero() {
        let clip = KeyframeClip::new("orbit", 10.0);
        assert!(!clip.is_playing());
        assert!(!clip.looping);
        assert_eq!(clip.current_time, 0.0);
    }

    #[test]
    fn advance_applies_time_scale() {
        let mut clip = KeyframeClip::new("orbit", 10.0).with_time_scale(0.25);
        clip.play();
        clip.advance(2.0);
        assert_eq!(clip.current_time, 0.5);
    }

    #[test]
    fn non_looping_clip_freezes_at_end() {
        let mut clip = KeyframeClip::new("orbit", 1.0);
        clip.play();
        clip.advance(0.75);
        clip.advance(0.75);
        assert_eq!(clip.current_time, 1.0);
        assert!(clip.is_playing());

        clip.advance(0.5);
        assert_eq!(clip.current_time, 1.0);
    }

    #[test]
    fn looping_clip_wraps() {
        let mut clip = KeyframeClip::new("orbit", 1.0);
        clip.looping = true;
        clip.play();
        clip.advance(1.5);
        assert!((clip.current_time - 0.5).abs() < 1e-6);
    }

    #[test]
    fn paused_or_stopped_clip_does_not_move() {
        let mut clip = KeyframeClip::new("orbit", 4.0);
        clip.play();
        clip.advance(1.0);
        clip.pause();
        clip.advance(1.0);
        assert_eq!(clip.current_time, 1.0);

        clip.resume();
        clip.advance(1.0);
        assert_eq!(clip.current_time, 2.0);

        clip.stop();
        clip.advance(1.0);
        assert_eq!(clip.current_time, 2.0);
    }

    #[test]
    fn play_restarts_from_zero() {
        let mut clip = KeyframeClip::new("orbit", 4.0);
        clip.play();
        clip.advance(3.0);
        clip.stop();
        clip.play();
        assert_eq!(clip.current_time, 0.0);
        assert!(clip.is_playing());
        assert!(!clip.is_paused());
    }
}
