//! Decorative background particle.

use glam::Vec2;

use crate::animation::{Easing, KeyframeTrack, LoopMode};
use crate::api::types::ParticleId;

/// Horizontal wander, in pixels, over one motion period.
const WANDER_X: KeyframeTrack =
    KeyframeTrack::new(&[0.0, 30.0, -20.0, 20.0, 0.0], Easing::SineInOut, LoopMode::Loop);
/// Vertical wander, in pixels, over one motion period.
const WANDER_Y: KeyframeTrack =
    KeyframeTrack::new(&[0.0, -20.0, 30.0, -25.0, 0.0], Easing::SineInOut, LoopMode::Loop);

/// A particle. Immutable after creation: where it is drawn is a pure
/// function of its parameters, the elapsed time and the viewport size.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    /// Base position in percent of the viewport, each axis in [0, 100).
    pub position: Vec2,
    /// Diameter in pixels.
    pub size: f32,
    /// Seconds per wander loop.
    pub duration: f32,
    /// Drift in percent of the viewport per second.
    pub velocity: Vec2,
    /// Offset into the wander loop, in seconds, so particles do not move in lockstep.
    pub phase: f32,
}

impl Particle {
    /// Keyframed wander offset in pixels at `elapsed` seconds.
    pub fn wander(&self, elapsed: f32) -> Vec2 {
        let t = elapsed + self.phase;
        Vec2::new(
            WANDER_X.sample(t, self.duration),
            WANDER_Y.sample(t, self.duration),
        )
    }

    /// Drifted base position in percent, wrapped back into [0, 100).
    pub fn percent_at(&self, elapsed: f32) -> Vec2 {
        let p = self.position + self.velocity * elapsed;
        Vec2::new(wrap_percent(p.x), wrap_percent(p.y))
    }

    /// Screen position in pixels for a viewport of `viewport` pixels.
    pub fn pixel_position(&self, elapsed: f32, viewport: Vec2) -> Vec2 {
        self.percent_at(elapsed) * viewport / 100.0 + self.wander(elapsed)
    }
}

fn wrap_percent(v: f32) -> f32 {
    let w = v.rem_euclid(100.0);
    // rem_euclid can round up to exactly 100.0 for tiny negative inputs
    if w >= 100.0 { 0.0 } else { w }
}

/// Pointer influence on a particle at `at`: 1 on top of it, falling off
/// linearly to 0 at `radius` pixels and beyond.
pub fn influence(at: Vec2, pointer: Vec2, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    let d = at.distance(pointer);
    if d >= radius {
        0.0
    } else {
        1.0 - d / radius
    }
}
