//! Command terminal simulator.
//!
//! A line-oriented fake shell over a fixed command table. Nothing is ever
//! executed: commands print canned lines, and navigation commands hand a
//! section back to the caller for a delayed scroll.

pub mod clock;
pub mod command;
pub mod session;

pub use clock::{Clock, FixedClock, LocalClock};
pub use command::{Command, CommandKind, COMMANDS};
pub use session::{SubmitOutcome, Terminal, TerminalSnapshot, PROMPT, WELCOME_BANNER};
