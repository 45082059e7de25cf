//! In-memory terminal session: input buffer, scrollback and suggestions.

use serde::Serialize;

use super::clock::Clock;
use super::command::{self, CommandKind, COMMANDS};
use crate::api::types::Section;
use crate::content::profile::Profile;

pub const PROMPT: &str = "$ ";

/// Scrollback right after mount and after every `clear`.
pub const WELCOME_BANNER: [&str; 3] = [
    "Welcome to the amorelli.dev terminal!",
    "Type 'help' to see available commands.",
    "Press Tab to autocomplete.",
];

pub const NOT_FOUND: &str = "Command not found.";
pub const HELP_HINT: &str = "Type 'help' to see available commands.";

/// Format of the `date` output (e.g. "Sun Oct 18 2026 14:03:09 -0300").
const DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S %z";

/// What `submit` did, for the caller to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmitOutcome {
    /// The matched command, `None` for unknown input.
    pub command: Option<CommandKind>,
    /// Section to scroll to once the navigation delay has passed.
    pub navigate: Option<Section>,
}

/// Static text the commands print, taken from the profile once.
#[derive(Debug, Clone)]
struct CannedOutput {
    about: Vec<String>,
    identity: String,
    cwd: String,
}

impl CannedOutput {
    fn from_profile(profile: &Profile) -> Self {
        Self {
            about: profile.about.clone(),
            identity: profile.handle.clone(),
            cwd: profile.home_dir.clone(),
        }
    }
}

/// Read-only view handed to the host for rendering.
#[derive(Debug, Serialize)]
pub struct TerminalSnapshot<'a> {
    pub prompt: &'static str,
    pub input: &'a str,
    pub history: &'a [String],
    pub suggestions: &'a [&'static str],
    pub show_suggestions: bool,
}

pub struct Terminal {
    input: String,
    history: Vec<String>,
    suggestions: Vec<&'static str>,
    show_suggestions: bool,
    output: CannedOutput,
    clock: Box<dyn Clock>,
}

impl Terminal {
    pub fn new(profile: &Profile, clock: Box<dyn Clock>) -> Self {
        Self {
            input: String::new(),
            history: banner(),
            suggestions: Vec::new(),
            show_suggestions: false,
            output: CannedOutput::from_profile(profile),
            clock,
        }
    }

    /// Swap the canned text (profile reload). History is left alone.
    pub fn set_profile(&mut self, profile: &Profile) {
        self.output = CannedOutput::from_profile(profile);
    }

    /// Run `raw_input` as a command line.
    pub fn submit(&mut self, raw_input: &str) -> SubmitOutcome {
        self.history.push(format!("{PROMPT}{raw_input}"));

        let outcome = match command::find(raw_input) {
            Some(cmd) => {
                log::debug!("terminal: running `{}`", cmd.name);
                SubmitOutcome {
                    command: Some(cmd.kind),
                    navigate: self.execute(cmd.kind),
                }
            }
            None => {
                log::debug!("terminal: unknown command {:?}", raw_input);
                self.history.push(NOT_FOUND.to_string());
                self.history.push(HELP_HINT.to_string());
                SubmitOutcome::default()
            }
        };

        self.input.clear();
        self.suggestions.clear();
        self.show_suggestions = false;
        outcome
    }

    fn execute(&mut self, kind: CommandKind) -> Option<Section> {
        match kind {
            CommandKind::Help => {
                self.history.push("Available commands:".to_string());
                for cmd in COMMANDS {
                    self.history.push(format!("  {:<12}{}", cmd.name, cmd.description));
                }
            }
            CommandKind::About => {
                self.history.extend(self.output.about.iter().cloned());
            }
            CommandKind::Navigate(section) => {
                self.history.push(format!("Navigating to {section}..."));
                return Some(section);
            }
            CommandKind::Clear => self.clear(),
            CommandKind::Ls => {
                for section in Section::ALL {
                    self.history.push(format!("drwxr-xr-x  fabio  staff  {}/", section.id()));
                }
            }
            CommandKind::Whoami => self.history.push(self.output.identity.clone()),
            CommandKind::Pwd => self.history.push(self.output.cwd.clone()),
            CommandKind::Date => {
                let now = self.clock.now();
                self.history.push(now.format(DATE_FORMAT).to_string());
            }
        }
        None
    }

    /// Replace the input buffer and recompute suggestions.
    /// Returns every command name the input is a prefix of.
    pub fn update_input(&mut self, partial: &str) -> &[&'static str] {
        self.input = partial.to_string();
        self.suggestions = command::complete(partial);
        // A lone suggestion identical to what is typed adds nothing
        self.show_suggestions = match self.suggestions.as_slice() {
            [] => false,
            [only] => *only != partial.to_lowercase(),
            _ => true,
        };
        &self.suggestions
    }

    /// Take `name` as the input and close the suggestion list.
    pub fn accept_suggestion(&mut self, name: &str) {
        self.input = name.to_string();
        self.suggestions.clear();
        self.show_suggestions = false;
    }

    /// Completion keystroke: accept the first suggestion, if any.
    pub fn complete(&mut self) -> bool {
        match self.suggestions.first().copied() {
            Some(first) => {
                self.accept_suggestion(first);
                true
            }
            None => false,
        }
    }

    /// Reset the scrollback to the welcome banner.
    pub fn clear(&mut self) {
        self.history = banner();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn suggestions(&self) -> &[&'static str] {
        &self.suggestions
    }

    /// Whether the suggestion list should be drawn.
    pub fn shows_suggestions(&self) -> bool {
        self.show_suggestions
    }

    pub fn snapshot(&self) -> TerminalSnapshot<'_> {
        TerminalSnapshot {
            prompt: PROMPT,
            input: &self.input,
            history: &self.history,
            suggestions: &self.suggestions,
            show_suggestions: self.show_suggestions,
        }
    }
}

fn banner() -> Vec<String> {
    WELCOME_BANNER.iter().map(|s| s.to_string()).collect()
}
