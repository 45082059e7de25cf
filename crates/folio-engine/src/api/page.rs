use serde::{Deserialize, Serialize};

use crate::animation::typewriter::{TypeWriter, DEFAULT_CHAR_DELAY};
use crate::api::types::{HostEvent, Section};
use crate::content::contact::{ContactPanel, DEFAULT_COPIED_DURATION};
use crate::content::profile::Profile;
use crate::content::skills::{SkillsPanel, DEFAULT_INSTALL_DELAY};
use crate::core::schedule::Scheduler;
use crate::error::{FolioError, Result};
use crate::field::{FieldConfig, ParticleField};
use crate::input::queue::{InputEvent, InputQueue};
use crate::terminal::{Clock, Terminal};

/// Configuration for the page, optionally overridden by the host as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Viewport size used until the host reports a real one.
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub field: FieldConfig,
    /// Pause between "Navigating to ..." and the actual scroll, in seconds.
    pub navigation_delay: f32,
    /// Seconds per character of the logo typewriter.
    pub typewriter_delay: f32,
    /// Seconds the contact "copied" badge stays up.
    pub copied_duration: f32,
    /// Seconds a skill `install` takes.
    pub install_delay: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            viewport_width: 1280.0,
            viewport_height: 800.0,
            field: FieldConfig::default(),
            navigation_delay: 0.5,
            typewriter_delay: DEFAULT_CHAR_DELAY,
            copied_duration: DEFAULT_COPIED_DURATION,
            install_delay: DEFAULT_INSTALL_DELAY,
        }
    }
}

impl PageConfig {
    /// Parse and validate a config from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(FolioError::Config)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the page cannot run with.
    pub fn validate(&self) -> Result<()> {
        let non_negative = |v: f32| v >= 0.0 && v.is_finite();
        let checks = [
            (self.fixed_dt > 0.0 && self.fixed_dt.is_finite(), "fixed_dt must be positive"),
            (non_negative(self.viewport_width), "viewport_width must not be negative"),
            (non_negative(self.viewport_height), "viewport_height must not be negative"),
            (non_negative(self.navigation_delay), "navigation_delay must not be negative"),
            (non_negative(self.typewriter_delay), "typewriter_delay must not be negative"),
            (non_negative(self.copied_duration), "copied_duration must not be negative"),
            (non_negative(self.install_delay), "install_delay must not be negative"),
        ];
        if let Some((_, reason)) = checks.iter().find(|(ok, _)| !ok) {
            return Err(FolioError::InvalidConfig((*reason).to_string()));
        }
        self.field.validate()
    }
}

/// Deferred work owned by the page scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageTask {
    ScrollTo(Section),
    FinishInstall(String),
}

/// The interactive parts of the portfolio page, composed.
///
/// Input arrives through `tick`; requested side effects pile up until the
/// runner drains them with `drain_events` and hands them to a `Host`.
pub struct Page {
    config: PageConfig,
    profile: Profile,
    field: ParticleField,
    terminal: Terminal,
    scheduler: Scheduler<PageTask>,
    logo: TypeWriter,
    contact: ContactPanel,
    skills: SkillsPanel,
    events: Vec<HostEvent>,
    mounted: bool,
}

impl Page {
    pub fn new(config: PageConfig, profile: Profile, clock: Box<dyn Clock>) -> Self {
        Self {
            field: ParticleField::new(config.field.clone()),
            terminal: Terminal::new(&profile, clock),
            scheduler: Scheduler::new(),
            logo: TypeWriter::new(&profile.site, config.typewriter_delay),
            contact: ContactPanel::new(profile.contact.clone(), config.copied_duration),
            skills: SkillsPanel::new(profile.skills.clone()),
            events: Vec::new(),
            mounted: false,
            config,
            profile,
        }
    }

    /// Mount: generate the particle field for the configured viewport.
    pub fn init(&mut self) {
        self.field
            .initialize(self.config.viewport_width, self.config.viewport_height);
        self.mounted = true;
        log::info!(
            "page: mounted at {}x{}",
            self.config.viewport_width,
            self.config.viewport_height
        );
    }

    /// Drain the input queue, then advance every timer by `dt` seconds.
    pub fn tick(&mut self, dt: f32, input: &mut InputQueue) {
        for event in input.drain() {
            self.handle(event);
        }
        if !self.mounted {
            return;
        }

        for task in self.scheduler.advance(dt) {
            match task {
                PageTask::ScrollTo(section) => self.events.push(HostEvent::ScrollTo(section)),
                PageTask::FinishInstall(name) => self.skills.finish_install(&name),
            }
        }
        self.field.tick(dt);
        self.logo.tick(dt);
        self.contact.tick(dt);
    }

    /// Apply one input event immediately.
    pub fn handle(&mut self, event: InputEvent) {
        if !self.mounted {
            log::debug!("page: dropping {:?} while unmounted", event);
            return;
        }
        match event {
            InputEvent::PointerMove { x, y } => self.field.on_pointer_move(x, y),
            InputEvent::Resize { width, height } => {
                self.config.viewport_width = width;
                self.config.viewport_height = height;
                self.field.initialize(width, height);
            }
            InputEvent::TerminalInput { text } => {
                self.terminal.update_input(&text);
            }
            InputEvent::TerminalSubmit => {
                let line = self.terminal.input().to_string();
                self.submit(&line);
            }
            InputEvent::TerminalComplete => {
                self.terminal.complete();
            }
            InputEvent::TerminalAccept { name } => self.terminal.accept_suggestion(&name),
            InputEvent::TerminalClear => self.terminal.clear(),
            InputEvent::NavClick { section } => self.events.push(HostEvent::ScrollTo(section)),
            InputEvent::CopyRequest { item } => {
                if let Some(event) = self.contact.request_copy(item) {
                    self.events.push(event);
                }
            }
            InputEvent::CopyResult { item, ok } => {
                let result = if ok {
                    Ok(())
                } else {
                    Err(FolioError::Clipboard(format!("entry {item} was not copied")))
                };
                self.contact.on_copy_result(item, result);
            }
            InputEvent::DownloadCv => match &self.profile.cv_url {
                Some(url) => self.events.push(HostEvent::Download { url: url.clone() }),
                None => log::debug!("page: no cv configured"),
            },
            InputEvent::SkillFilter { filter } => self.skills.set_filter(filter),
            InputEvent::SkillInstall { name } => {
                if self.skills.request_install(&name) {
                    self.scheduler
                        .schedule(self.config.install_delay, PageTask::FinishInstall(name));
                }
            }
        }
    }

    /// Run a terminal line; navigation is deferred so the printed line shows first.
    pub fn submit(&mut self, line: &str) {
        let outcome = self.terminal.submit(line);
        if let Some(section) = outcome.navigate {
            self.scheduler
                .schedule(self.config.navigation_delay, PageTask::ScrollTo(section));
        }
    }

    /// Take the side effects requested since the last call.
    pub fn drain_events(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }

    /// Unmount: cancel pending tasks, stop the field, drop queued effects.
    pub fn teardown(&mut self) {
        let cancelled = self.scheduler.len();
        self.scheduler.cancel_all();
        self.skills.cancel_pending();
        self.field.teardown();
        self.events.clear();
        self.mounted = false;
        log::info!("page: torn down ({} pending tasks cancelled)", cancelled);
    }

    /// Replace the profile content. The terminal keeps its scrollback.
    pub fn set_profile(&mut self, profile: Profile) {
        self.terminal.set_profile(&profile);
        self.contact.set_entries(profile.contact.clone());
        self.skills.set_packages(profile.skills.clone());
        self.logo.reset(&profile.site);
        self.profile = profile;
    }

    /// Replace the configuration after validating it. A mounted page keeps
    /// its viewport and regenerates the field; an unmounted one stays empty.
    pub fn set_config(&mut self, mut config: PageConfig) -> Result<()> {
        config.validate()?;
        if self.mounted {
            config.viewport_width = self.config.viewport_width;
            config.viewport_height = self.config.viewport_height;
        }
        self.field.set_config(config.field.clone());
        self.logo = TypeWriter::new(&self.profile.site, config.typewriter_delay);
        self.contact = ContactPanel::new(self.profile.contact.clone(), config.copied_duration);
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn logo(&self) -> &TypeWriter {
        &self.logo
    }

    pub fn contact(&self) -> &ContactPanel {
        &self.contact
    }

    pub fn skills(&self) -> &SkillsPanel {
        &self.skills
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}
