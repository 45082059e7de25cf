// animation/mod.rs
//
// Time-based animation helpers. Everything here is a pure function of
// elapsed time or a small self-contained state machine.

pub mod easing;
pub mod keyframes;
pub mod typewriter;

pub use easing::{ease, lerp, Easing};
pub use keyframes::{KeyframeTrack, LoopMode};
pub use typewriter::TypeWriter;
