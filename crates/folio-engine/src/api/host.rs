//! Collaborators the page needs from its host but does not implement.
//!
//! The browser implementation lives in `folio-web`; `RecordingHost` is a
//! stand-in that just remembers what it was asked to do.

use super::types::{HostEvent, Section};

/// Side-effecting capabilities provided by the embedding page.
pub trait Host {
    /// Smoothly bring `section` into view. No-op if it does not exist.
    fn scroll_to(&mut self, section: Section);

    /// Start writing `text` to the clipboard. The host reports the outcome
    /// back with `InputEvent::CopyResult { item, .. }`.
    fn write_clipboard(&mut self, item: usize, text: &str);

    /// Trigger a download of the asset at `url`. Fire and forget.
    fn download(&mut self, url: &str);
}

impl HostEvent {
    /// Hand this event to the collaborator that handles it.
    pub fn dispatch(&self, host: &mut dyn Host) {
        match self {
            HostEvent::ScrollTo(section) => host.scroll_to(*section),
            HostEvent::CopyToClipboard { item, text } => host.write_clipboard(*item, text),
            HostEvent::Download { url } => host.download(url),
        }
    }
}

/// Dispatch a batch of events in order.
pub fn dispatch_all(events: &[HostEvent], host: &mut dyn Host) {
    for event in events {
        event.dispatch(host);
    }
}

/// A host that records every request, for tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub scrolls: Vec<Section>,
    pub clipboard: Vec<(usize, String)>,
    pub downloads: Vec<String>,
}

impl Host for RecordingHost {
    fn scroll_to(&mut self, section: Section) {
        self.scrolls.push(section);
    }

    fn write_clipboard(&mut self, item: usize, text: &str) {
        self.clipboard.push((item, text.to_string()));
    }

    fn download(&mut self, url: &str) {
        self.downloads.push(url.to_string());
    }
}
