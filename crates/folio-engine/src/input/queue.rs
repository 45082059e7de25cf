use crate::api::types::Section;
use crate::content::skills::SkillFilter;

/// Input events the page understands.
/// The JS host translates DOM events into these; the page drains them each frame.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The cursor moved to absolute viewport coordinates (x, y) in pixels.
    PointerMove { x: f32, y: f32 },
    /// The viewport was resized.
    Resize { width: f32, height: f32 },
    /// The terminal input field now contains `text`.
    TerminalInput { text: String },
    /// Enter was pressed in the terminal.
    TerminalSubmit,
    /// Tab was pressed in the terminal: take the first suggestion.
    TerminalComplete,
    /// A suggestion was clicked.
    TerminalAccept { name: String },
    /// The terminal's clear button was pressed.
    TerminalClear,
    /// A navigation bar item was clicked.
    NavClick { section: Section },
    /// A contact entry's copy button was pressed.
    CopyRequest { item: usize },
    /// The host finished a clipboard write for `item`.
    CopyResult { item: usize, ok: bool },
    /// The CV download button was pressed.
    DownloadCv,
    /// A skills category button was pressed.
    SkillFilter { filter: SkillFilter },
    /// The install button of skill `name` was pressed.
    SkillInstall { name: String },
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
