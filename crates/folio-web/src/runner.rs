use folio_engine::bridge::protocol::HEADER_FLOATS;
use folio_engine::{
    dispatch_all, FixedTimestep, FrameBuffers, Host, InputEvent, InputQueue, Page, PageConfig,
    Profile, ProtocolLayout, TerminalSnapshot,
};

/// Runner that wires the page engine to a host.
///
/// `lib.rs` keeps one of these in a `thread_local!` and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct PageRunner<H: Host> {
    page: Page,
    host: H,
    input: InputQueue,
    timestep: FixedTimestep,
    buffers: FrameBuffers,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
    frame_counter: u32,
    initialized: bool,
}

impl<H: Host> PageRunner<H> {
    pub fn new(page: Page, host: H) -> Self {
        let timestep = FixedTimestep::new(page.config().fixed_dt);
        let layout = ProtocolLayout::from_config(&page.config().field);
        let buffers = FrameBuffers::with_capacity(layout.max_particles, layout.max_connections);

        Self {
            page,
            host,
            input: InputQueue::new(),
            timestep,
            buffers,
            layout,
            header: [0.0; HEADER_FLOATS],
            frame_counter: 0,
            initialized: false,
        }
    }

    /// Mount the page. Call once after construction.
    pub fn init(&mut self) {
        self.page.init();
        self.initialized = true;
        self.rebuild_buffers();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: step the page, hand its side effects to the host,
    /// rebuild the render buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Input is consumed by the first step; later steps see an empty queue
        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.page.tick(self.timestep.dt(), &mut self.input);
        }

        let events = self.page.drain_events();
        dispatch_all(&events, &mut self.host);

        self.frame_counter = self.frame_counter.wrapping_add(1);
        self.rebuild_buffers();
    }

    /// Cancel pending work and stop animating. Queued input is dropped.
    pub fn teardown(&mut self) {
        self.page.teardown();
        self.input.drain();
        self.initialized = false;
        self.rebuild_buffers();
    }

    pub fn load_profile(&mut self, json: &str) -> folio_engine::Result<()> {
        let profile = Profile::from_json(json)?;
        self.page.set_profile(profile);
        log::info!("runner: profile loaded");
        Ok(())
    }

    /// Replace the configuration; buffers are resized to the new capacities.
    /// An invalid config is rejected and the current one stays in effect.
    pub fn configure(&mut self, json: &str) -> folio_engine::Result<()> {
        let config = PageConfig::from_json(json)?;
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config.field);
        self.page.set_config(config)?;

        self.timestep = timestep;
        self.buffers = FrameBuffers::with_capacity(layout.max_particles, layout.max_connections);
        self.layout = layout;
        self.rebuild_buffers();
        log::info!("runner: configured ({} floats)", self.layout.buffer_total_floats);
        Ok(())
    }

    fn rebuild_buffers(&mut self) {
        self.buffers.rebuild(self.page.field());
        self.header = self
            .layout
            .header(self.frame_counter, &self.buffers, self.page.field().viewport());
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn terminal_snapshot(&self) -> TerminalSnapshot<'_> {
        self.page.terminal().snapshot()
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn particles_ptr(&self) -> *const f32 {
        self.buffers.particles_ptr()
    }

    pub fn particle_count(&self) -> u32 {
        self.buffers.particle_count()
    }

    pub fn connections_ptr(&self) -> *const f32 {
        self.buffers.connections_ptr()
    }

    pub fn connection_count(&self) -> u32 {
        self.buffers.connection_count()
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    // ---- Capacity accessors ----

    pub fn max_particles(&self) -> u32 {
        self.layout.max_particles as u32
    }

    pub fn max_connections(&self) -> u32 {
        self.layout.max_connections as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use folio_engine::bridge::protocol::{HEADER_FRAME_COUNTER, HEADER_PARTICLE_COUNT};
    use folio_engine::{FixedClock, FolioError, RecordingHost, Section};

    const FRAME: f32 = 1.0 / 60.0;

    fn runner() -> PageRunner<RecordingHost> {
        let at = Local.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
        let page = Page::new(PageConfig::default(), Profile::default(), Box::new(FixedClock(at)));
        let mut runner = PageRunner::new(page, RecordingHost::default());
        runner.init();
        runner
    }

    fn run_frames(runner: &mut PageRunner<RecordingHost>, frames: usize) {
        for _ in 0..frames {
            runner.tick(FRAME);
        }
    }

    #[test]
    fn init_fills_particle_buffer() {
        let runner = runner();
        assert_eq!(runner.particle_count(), 200);
        assert_eq!(runner.header[HEADER_PARTICLE_COUNT], 200.0);
        assert_eq!(runner.max_particles(), 200);
    }

    #[test]
    fn tick_before_init_is_a_no_op() {
        let at = Local.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
        let page = Page::new(PageConfig::default(), Profile::default(), Box::new(FixedClock(at)));
        let mut runner = PageRunner::new(page, RecordingHost::default());
        runner.tick(FRAME);
        assert_eq!(runner.frame_counter(), 0);
        assert_eq!(runner.particle_count(), 0);
    }

    #[test]
    fn skills_command_scrolls_once_after_half_a_second() {
        let mut runner = runner();
        runner.push_input(InputEvent::TerminalInput { text: "skills".into() });
        runner.push_input(InputEvent::TerminalSubmit);
        run_frames(&mut runner, 1);

        assert_eq!(
            runner.page().terminal().history().last().unwrap(),
            "Navigating to skills..."
        );
        assert!(runner.host().scrolls.is_empty());

        run_frames(&mut runner, 20);
        assert!(runner.host().scrolls.is_empty());

        run_frames(&mut runner, 20);
        assert_eq!(runner.host().scrolls, vec![Section::Skills]);

        run_frames(&mut runner, 120);
        assert_eq!(runner.host().scrolls, vec![Section::Skills]);
    }

    #[test]
    fn teardown_drops_pending_scroll() {
        let mut runner = runner();
        runner.push_input(InputEvent::TerminalInput { text: "education".into() });
        runner.push_input(InputEvent::TerminalSubmit);
        run_frames(&mut runner, 1);

        runner.teardown();
        run_frames(&mut runner, 120);
        assert!(runner.host().scrolls.is_empty());
        assert_eq!(runner.particle_count(), 0);
    }

    #[test]
    fn copy_and_download_reach_the_host() {
        let mut runner = runner();
        runner.push_input(InputEvent::CopyRequest { item: 1 });
        runner.push_input(InputEvent::DownloadCv);
        run_frames(&mut runner, 1);

        assert_eq!(runner.host().clipboard, vec![(1, "fabioavf".to_string())]);
        assert_eq!(runner.host().downloads, vec!["/fabio-amorelli-cv.pdf".to_string()]);

        runner.push_input(InputEvent::CopyResult { item: 1, ok: true });
        run_frames(&mut runner, 1);
        assert_eq!(runner.page().contact().copied_item(), Some(1));
    }

    #[test]
    fn frame_counter_advances_in_header() {
        let mut runner = runner();
        run_frames(&mut runner, 3);
        assert_eq!(runner.frame_counter(), 3);
        assert_eq!(runner.header[HEADER_FRAME_COUNTER], 3.0);
    }

    #[test]
    fn configure_resizes_buffers() {
        let mut runner = runner();
        runner
            .configure(r#"{ "field": { "large_count": 50, "small_count": 20 } }"#)
            .unwrap();
        assert_eq!(runner.max_particles(), 50);
        assert_eq!(runner.particle_count(), 50);
        assert!(runner.configure("not json").is_err());
    }

    #[test]
    fn configure_after_teardown_keeps_the_field_empty() {
        let mut runner = runner();
        runner.teardown();
        runner.configure(r#"{ "navigation_delay": 1.0 }"#).unwrap();

        assert!(!runner.page().is_mounted());
        assert_eq!(runner.particle_count(), 0);
        assert!(!runner.page().field().is_tracking_pointer());
        assert_eq!(runner.page().config().navigation_delay, 1.0);
    }

    #[test]
    fn invalid_config_is_rejected_and_page_keeps_running() {
        let mut runner = runner();
        let err = runner.configure(r#"{ "fixed_dt": 0.0 }"#).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));
        assert!(runner.configure(r#"{ "field": { "size_range": [12.0, 4.0] } }"#).is_err());
        assert_eq!(runner.page().config(), &PageConfig::default());

        runner.push_input(InputEvent::TerminalInput { text: "whoami".into() });
        runner.push_input(InputEvent::TerminalSubmit);
        run_frames(&mut runner, 2);
        assert_eq!(
            runner.page().terminal().history().last().unwrap(),
            "fabio@amorelli.dev"
        );
    }

    #[test]
    fn skill_install_lands_after_its_delay() {
        let mut runner = runner();
        runner.push_input(InputEvent::SkillInstall { name: "prisma".into() });
        run_frames(&mut runner, 60);
        assert_eq!(runner.page().skills().installing(), Some("prisma"));

        run_frames(&mut runner, 40);
        assert!(runner.page().skills().is_installed("prisma"));
        assert_eq!(runner.page().skills().installing(), None);
    }

    #[test]
    fn bad_profile_keeps_the_old_one() {
        let mut runner = runner();
        assert!(runner.load_profile("{").is_err());
        assert_eq!(runner.page().profile().site, "amorelli.dev");
    }
}
