use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Unique identifier for a particle in the field.
/// Ids are dense (0..N) and reassigned on every regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticleId(pub u32);

/// A page section that can be scrolled into view.
/// The identifier is the lowercase name, matching the DOM element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Skills,
    Experience,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Self::Home,
        Self::Skills,
        Self::Experience,
        Self::Education,
        Self::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|section| section.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FolioError::UnknownSection(wanted.to_string()))
    }
}

/// A side effect requested by the page from the JavaScript host.
/// Queued during `Page::tick` and drained by the runner each frame.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Smoothly scroll the section into view.
    ScrollTo(Section),
    /// Write `text` to the system clipboard; the outcome comes back as
    /// `InputEvent::CopyResult { item, .. }`.
    CopyToClipboard { item: usize, text: String },
    /// Start a browser download of a static asset.
    Download { url: String },
}
