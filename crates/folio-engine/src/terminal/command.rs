use crate::api::types::Section;

/// What a command does. Dispatched by a single `match` in the session,
/// so behaviour can be asserted without running any host side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    About,
    Navigate(Section),
    Clear,
    Ls,
    Whoami,
    Pwd,
    Date,
}

/// A named entry of the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

const fn cmd(name: &'static str, description: &'static str, kind: CommandKind) -> Command {
    Command { name, description, kind }
}

/// The fixed vocabulary, in `help` order. Names are lowercase.
pub const COMMANDS: &[Command] = &[
    cmd("help", "Show available commands", CommandKind::Help),
    cmd("about", "Learn more about me", CommandKind::About),
    cmd(
        "home",
        "Go to the top of the page",
        CommandKind::Navigate(Section::Home),
    ),
    cmd(
        "skills",
        "View my technical skills",
        CommandKind::Navigate(Section::Skills),
    ),
    cmd(
        "experience",
        "See my work experience",
        CommandKind::Navigate(Section::Experience),
    ),
    cmd(
        "education",
        "Check my educational background",
        CommandKind::Navigate(Section::Education),
    ),
    cmd(
        "contact",
        "Get in touch",
        CommandKind::Navigate(Section::Contact),
    ),
    cmd("clear", "Clear the terminal", CommandKind::Clear),
    cmd("ls", "List available sections", CommandKind::Ls),
    cmd("whoami", "Display current user", CommandKind::Whoami),
    cmd("pwd", "Print working directory", CommandKind::Pwd),
    cmd("date", "Show current date and time", CommandKind::Date),
];

/// Exact, case-insensitive lookup of trimmed input. No argument parsing.
pub fn find(input: &str) -> Option<&'static Command> {
    let wanted = input.trim().to_lowercase();
    COMMANDS.iter().find(|c| c.name == wanted)
}

/// Names starting with `partial` (case-insensitive), in table order.
/// Empty input matches nothing.
pub fn complete(partial: &str) -> Vec<&'static str> {
    if partial.is_empty() {
        return Vec::new();
    }
    let prefix = partial.to_lowercase();
    COMMANDS
        .iter()
        .filter(|c| c.name.starts_with(&prefix))
        .map(|c| c.name)
        .collect()
}
