pub mod api;
pub mod core;
pub mod input;
pub mod animation;
pub mod terminal;
pub mod field;
pub mod content;
pub mod bridge;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::page::{Page, PageConfig, PageTask};
pub use api::host::{dispatch_all, Host, RecordingHost};
pub use api::types::{HostEvent, ParticleId, Section};
pub use core::schedule::{Scheduler, TaskHandle};
pub use core::time::{FixedTimestep, IntervalTimer};
pub use input::queue::{InputEvent, InputQueue};
pub use animation::{ease, lerp, Easing, KeyframeTrack, LoopMode, TypeWriter};
pub use terminal::{
    Clock, Command, CommandKind, FixedClock, LocalClock, SubmitOutcome, Terminal,
    TerminalSnapshot,
};
pub use field::{Connection, ConnectionRule, FieldConfig, Particle, ParticleField};
pub use content::contact::ContactPanel;
pub use content::profile::{
    ContactEntry, ContactKind, Popularity, Profile, SkillCategory, SkillPackage, SocialLink,
    TimelineEntry,
};
pub use content::skills::{SkillFilter, SkillsPanel, SkillsSnapshot};
pub use bridge::instance::{ConnectionInstance, FrameBuffers, ParticleInstance};
pub use bridge::protocol::ProtocolLayout;
pub use error::{FolioError, Result};
