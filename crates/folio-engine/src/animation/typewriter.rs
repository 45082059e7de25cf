// animation/typewriter.rs
//
// Reveals a string one character at a time with a blinking cursor.

use super::easing::Easing;
use super::keyframes::{KeyframeTrack, LoopMode};

/// Default delay between characters, in seconds.
pub const DEFAULT_CHAR_DELAY: f32 = 0.1;

/// Seconds for one cursor fade (opaque to transparent).
pub const CURSOR_BLINK_PERIOD: f32 = 0.8;

const CURSOR_TRACK: KeyframeTrack =
    KeyframeTrack::new(&[1.0, 0.0], Easing::Linear, LoopMode::PingPong);

#[derive(Debug, Clone)]
pub struct TypeWriter {
    chars: Vec<char>,
    delay: f32,
    revealed: usize,
    since_last: f32,
    elapsed: f32,
}

impl TypeWriter {
    pub fn new(text: &str, delay: f32) -> Self {
        Self {
            chars: text.chars().collect(),
            delay,
            revealed: 0,
            since_last: 0.0,
            elapsed: 0.0,
        }
    }

    /// Advance time, revealing as many characters as are due.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
        if self.is_done() {
            return;
        }
        self.since_last += dt;
        if self.delay <= 0.0 {
            self.revealed = self.chars.len();
            return;
        }
        while self.since_last >= self.delay && self.revealed < self.chars.len() {
            self.since_last -= self.delay;
            self.revealed += 1;
        }
    }

    /// The currently visible prefix.
    pub fn visible_text(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    /// Cursor opacity, fading 1 → 0 → 1 continuously.
    pub fn cursor_opacity(&self) -> f32 {
        CURSOR_TRACK.sample(self.elapsed, CURSOR_BLINK_PERIOD)
    }

    /// Start over with new text.
    pub fn reset(&mut self, text: &str) {
        *self = Self::new(text, self.delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_char_per_delay() {
        let mut tw = TypeWriter::new("amorelli.dev", 0.1);
        assert_eq!(tw.visible_text(), "");
        tw.tick(0.1);
        assert_eq!(tw.visible_text(), "a");
        tw.tick(0.25);
        assert_eq!(tw.visible_text(), "amo");
        assert!(!tw.is_done());
    }

    #[test]
    fn finishes_and_stops() {
        let mut tw = TypeWriter::new("ok", 0.1);
        tw.tick(5.0);
        assert_eq!(tw.visible_text(), "ok");
        assert!(tw.is_done());
    }

    #[test]
    fn handles_multibyte_text() {
        let mut tw = TypeWriter::new("Itajubá", 0.1);
        tw.tick(0.75);
        assert_eq!(tw.visible_text(), "Itajubá");
    }

    #[test]
    fn cursor_blinks() {
        let mut tw = TypeWriter::new("x", 0.1);
        assert!((tw.cursor_opacity() - 1.0).abs() < 1e-5);
        tw.tick(CURSOR_BLINK_PERIOD);
        assert!(tw.cursor_opacity() < 1e-4);
        tw.tick(CURSOR_BLINK_PERIOD);
        assert!((tw.cursor_opacity() - 1.0).abs() < 1e-4);
    }
}
