use std::str::FromStr;

use serde::Serialize;

use crate::content::profile::{SkillCategory, SkillPackage};
use crate::error::FolioError;

/// Seconds a simulated `install` takes.
pub const DEFAULT_INSTALL_DELAY: f32 = 1.5;

/// Category filter of the skills list. `All` shows everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillFilter {
    #[default]
    All,
    Only(SkillCategory),
}

impl SkillFilter {
    /// Filter buttons, in display order.
    pub const ALL: [SkillFilter; 5] = [
        Self::All,
        Self::Only(SkillCategory::Frontend),
        Self::Only(SkillCategory::Backend),
        Self::Only(SkillCategory::Tools),
        Self::Only(SkillCategory::Methodologies),
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.id(),
        }
    }

    pub fn matches(self, package: &SkillPackage) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => package.category == category,
        }
    }
}

impl FromStr for SkillFilter {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|filter| filter.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FolioError::UnknownCategory(wanted.to_string()))
    }
}

/// Read-only view of the panel for the host.
#[derive(Debug, Serialize)]
pub struct SkillsSnapshot<'a> {
    pub filter: &'static str,
    /// `(filter, package count)` for every filter button.
    pub counts: Vec<(&'static str, usize)>,
    pub visible: Vec<&'a SkillPackage>,
    /// Shown only under the `all` filter.
    pub featured: Vec<&'a SkillPackage>,
    pub installing: Option<&'a str>,
    pub installed: &'a [String],
    pub total: usize,
}

/// Skills list with a category filter and a fake package installer.
///
/// The install delay itself is owned by the page scheduler: `request_install`
/// only says whether a delayed `finish_install` should be scheduled.
pub struct SkillsPanel {
    packages: Vec<SkillPackage>,
    filter: SkillFilter,
    installing: Option<String>,
    pending: Vec<String>,
    installed: Vec<String>,
}

impl SkillsPanel {
    pub fn new(packages: Vec<SkillPackage>) -> Self {
        Self {
            packages,
            filter: SkillFilter::All,
            installing: None,
            pending: Vec::new(),
            installed: Vec::new(),
        }
    }

    pub fn set_filter(&mut self, filter: SkillFilter) {
        self.filter = filter;
    }

    /// Packages passing the current filter, in profile order.
    pub fn visible(&self) -> Vec<&SkillPackage> {
        self.packages.iter().filter(|p| self.filter.matches(p)).collect()
    }

    /// Number of packages a filter would show.
    pub fn count(&self, filter: SkillFilter) -> usize {
        self.packages.iter().filter(|p| filter.matches(p)).count()
    }

    pub fn featured(&self) -> Vec<&SkillPackage> {
        self.packages.iter().filter(|p| p.featured).collect()
    }

    /// Start installing `name`. Returns false for unknown packages and for
    /// ones already installed or on their way.
    pub fn request_install(&mut self, name: &str) -> bool {
        if !self.packages.iter().any(|p| p.name == name)
            || self.is_installed(name)
            || self.pending.iter().any(|p| p == name)
        {
            log::debug!("skills: ignoring install of {:?}", name);
            return false;
        }
        self.pending.push(name.to_string());
        self.installing = Some(name.to_string());
        true
    }

    /// The install delay for `name` has elapsed.
    pub fn finish_install(&mut self, name: &str) {
        let Some(idx) = self.pending.iter().position(|p| p == name) else {
            return;
        };
        self.pending.remove(idx);
        if self.installing.as_deref() == Some(name) {
            self.installing = None;
        }
        self.installed.push(name.to_string());
        log::debug!(
            "skills: installed {} ({}/{})",
            name,
            self.installed.len(),
            self.packages.len()
        );
    }

    /// Forget installs still in flight (teardown).
    pub fn cancel_pending(&mut self) {
        self.pending.clear();
        self.installing = None;
    }

    /// Package whose install spinner is showing.
    pub fn installing(&self) -> Option<&str> {
        self.installing.as_deref()
    }

    pub fn is_installed(&self, name: &str) -> bool {
        self.installed.iter().any(|i| i == name)
    }

    pub fn installed(&self) -> &[String] {
        &self.installed
    }

    /// Replace the package list; install state starts over.
    pub fn set_packages(&mut self, packages: Vec<SkillPackage>) {
        *self = Self::new(packages);
    }

    pub fn snapshot(&self) -> SkillsSnapshot<'_> {
        SkillsSnapshot {
            filter: self.filter.id(),
            counts: SkillFilter::ALL.iter().map(|f| (f.id(), self.count(*f))).collect(),
            visible: self.visible(),
            featured: if self.filter == SkillFilter::All {
                self.featured()
            } else {
                Vec::new()
            },
            installing: self.installing(),
            installed: &self.installed,
            total: self.packages.len(),
        }
    }
}
