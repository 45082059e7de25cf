// animation/keyframes.rs
//
// Multi-keyframe animation sampled as a pure function of elapsed time.
// The same (track, time) always gives the same value.

use super::easing::{ease, Easing};

/// What happens when the track reaches its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopMode {
    /// Hold the last keyframe.
    #[default]
    Once,
    /// Restart from the first keyframe.
    Loop,
    /// Reverse direction at each end.
    PingPong,
}

/// Evenly spaced keyframes with easing between each adjacent pair.
#[derive(Debug, Clone, Copy)]
pub struct KeyframeTrack {
    pub values: &'static [f32],
    pub easing: Easing,
    pub loop_mode: LoopMode,
}

impl KeyframeTrack {
    pub const fn new(values: &'static [f32], easing: Easing, loop_mode: LoopMode) -> Self {
        Self { values, easing, loop_mode }
    }

    /// Sample at normalized progress `t` in [0, 1] across the whole track.
    pub fn sample_normalized(&self, t: f32) -> f32 {
        match self.values {
            [] => 0.0,
            [only] => *only,
            values => {
                let segments = (values.len() - 1) as f32;
                let pos = t.clamp(0.0, 1.0) * segments;
                let idx = (pos.floor() as usize).min(values.len() - 2);
                let local = pos - idx as f32;
                ease(values[idx], values[idx + 1], local, self.easing)
            }
        }
    }

    /// Sample at `elapsed` seconds for a track lasting `duration` seconds.
    pub fn sample(&self, elapsed: f32, duration: f32) -> f32 {
        if duration <= 0.0 {
            return self.sample_normalized(1.0);
        }
        let raw = elapsed.max(0.0) / duration;
        let t = match self.loop_mode {
            LoopMode::Once => raw.min(1.0),
            LoopMode::Loop => raw.fract(),
            LoopMode::PingPong => {
                let cycle = raw % 2.0;
                if cycle <= 1.0 { cycle } else { 2.0 - cycle }
            }
        };
        self.sample_normalized(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: [f32; 5] = [0.0, 30.0, -20.0, 20.0, 0.0];

    #[test]
    fn hits_keyframes_at_boundaries() {
        let track = KeyframeTrack::new(&TRACK, Easing::SineInOut, LoopMode::Loop);
        assert!((track.sample(0.0, 20.0) - 0.0).abs() < 1e-4);
        assert!((track.sample(5.0, 20.0) - 30.0).abs() < 1e-3);
        assert!((track.sample(10.0, 20.0) + 20.0).abs() < 1e-3);
        assert!((track.sample(15.0, 20.0) - 20.0).abs() < 1e-3);
    }

    #[test]
    fn loop_repeats() {
        let track = KeyframeTrack::new(&TRACK, Easing::Linear, LoopMode::Loop);
        let a = track.sample(2.5, 20.0);
        let b = track.sample(22.5, 20.0);
        assert!((a - b).abs() < 1e-3);
    }

    #[test]
    fn once_holds_last_value() {
        let track = KeyframeTrack::new(&[0.0, 10.0], Easing::Linear, LoopMode::Once);
        assert_eq!(track.sample(5.0, 1.0), 10.0);
    }

    #[test]
    fn ping_pong_reverses() {
        let track = KeyframeTrack::new(&[1.0, 0.0], Easing::Linear, LoopMode::PingPong);
        assert!((track.sample(0.8, 0.8) - 0.0).abs() < 1e-5);
        assert!((track.sample(1.2, 0.8) - 0.5).abs() < 1e-5);
        assert!((track.sample(1.6, 0.8) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn empty_track_is_zero() {
        let track = KeyframeTrack::new(&[], Easing::Linear, LoopMode::Loop);
        assert_eq!(track.sample(1.0, 1.0), 0.0);
    }
}
