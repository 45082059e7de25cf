// animation/easing.rs
//
// Pure easing functions for animation interpolation.
// Pure math, no page state.

use std::f32::consts::PI;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    /// Sine wave easing, slow start and end (CSS `easeInOut` lookalike).
    SineInOut,
}

impl Easing {
    /// Apply the easing function to a normalized time value `t` in [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, easing: Easing) -> f32 {
    lerp(a, b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_endpoints() {
        assert_eq!(Easing::Linear.apply(0.0), 0.0);
        assert_eq!(Easing::Linear.apply(1.0), 1.0);
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn sine_in_out_is_symmetric() {
        assert!(Easing::SineInOut.apply(0.0).abs() < 1e-6);
        assert!((Easing::SineInOut.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((Easing::SineInOut.apply(1.0) - 1.0).abs() < 1e-6);
        let a = Easing::SineInOut.apply(0.25);
        let b = Easing::SineInOut.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-5);
    }

    #[test]
    fn ease_interpolates() {
        let result = ease(100.0, 200.0, 0.5, Easing::Linear);
        assert!((result - 150.0).abs() < 0.001);
    }
}
