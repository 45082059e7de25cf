//! Contact widget state: copy-to-clipboard with a transient "copied" badge.

use crate::api::types::HostEvent;
use crate::content::profile::ContactEntry;
use crate::error::FolioError;

/// Seconds the "copied" badge stays visible.
pub const DEFAULT_COPIED_DURATION: f32 = 2.0;

pub struct ContactPanel {
    entries: Vec<ContactEntry>,
    indicator_duration: f32,
    /// Entry currently showing the badge and the seconds it has left.
    copied: Option<(usize, f32)>,
}

impl ContactPanel {
    pub fn new(entries: Vec<ContactEntry>, indicator_duration: f32) -> Self {
        Self {
            entries,
            indicator_duration,
            copied: None,
        }
    }

    /// Ask the host to copy entry `item`. `None` for an out-of-range index.
    pub fn request_copy(&self, item: usize) -> Option<HostEvent> {
        let entry = self.entries.get(item)?;
        log::debug!("contact: copy requested for entry {}", item);
        Some(HostEvent::CopyToClipboard {
            item,
            text: entry.text.clone(),
        })
    }

    /// Report the clipboard outcome. Failures are logged and otherwise invisible.
    pub fn on_copy_result(&mut self, item: usize, result: Result<(), FolioError>) {
        match result {
            Ok(()) if item < self.entries.len() => {
                self.copied = Some((item, self.indicator_duration));
            }
            Ok(()) => {}
            Err(err) => log::warn!("contact: {}", err),
        }
    }

    pub fn tick(&mut self, dt: f32) {
        if let Some((item, remaining)) = self.copied {
            let remaining = remaining - dt;
            self.copied = if remaining > 0.0 { Some((item, remaining)) } else { None };
        }
    }

    /// Entry whose "copied" badge is showing, if any.
    pub fn copied_item(&self) -> Option<usize> {
        self.copied.map(|(item, _)| item)
    }

    pub fn entries(&self) -> &[ContactEntry] {
        &self.entries
    }

    pub fn set_entries(&mut self, entries: Vec<ContactEntry>) {
        self.entries = entries;
        self.copied = None;
    }
}
