use std::cell::RefCell;

use folio_engine::{
    FolioError, InputEvent, LocalClock, Page, PageConfig, Profile, Section, SkillFilter,
};
use wasm_bindgen::prelude::*;

pub mod host;
pub mod runner;

pub use host::BrowserHost;
pub use runner::PageRunner;

thread_local! {
    static RUNNER: RefCell<Option<PageRunner<BrowserHost>>> = RefCell::new(None);
}

/// Run `f` against the page runner, or log and return `None` before `page_init`.
fn with_runner<R>(f: impl FnOnce(&mut PageRunner<BrowserHost>) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("folio: page not initialized, call page_init() first");
                None
            }
        }
    })
}

fn to_js(err: FolioError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn push(event: InputEvent) {
    with_runner(|r| r.push_input(event));
}

#[wasm_bindgen]
pub fn page_init(width: f32, height: f32) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = PageConfig {
        viewport_width: width,
        viewport_height: height,
        ..PageConfig::default()
    };
    let page = Page::new(config, Profile::default(), Box::new(LocalClock));
    let mut runner = PageRunner::new(page, BrowserHost::new());
    runner.init();

    RUNNER.with(|cell| {
        if let Some(mut previous) = cell.borrow_mut().replace(runner) {
            previous.teardown();
        }
    });
    log::info!("folio: initialized");
}

#[wasm_bindgen]
pub fn page_tick(dt: f32) {
    with_runner(|r| {
        for report in r.host_mut().take_reports() {
            r.push_input(report);
        }
        r.tick(dt);
    });
}

#[wasm_bindgen]
pub fn page_pointer_move(x: f32, y: f32) {
    push(InputEvent::PointerMove { x, y });
}

#[wasm_bindgen]
pub fn page_resize(width: f32, height: f32) {
    push(InputEvent::Resize { width, height });
}

#[wasm_bindgen]
pub fn page_load_profile(json: &str) -> Result<(), JsValue> {
    with_runner(|r| r.load_profile(json))
        .unwrap_or(Ok(()))
        .map_err(to_js)
}

#[wasm_bindgen]
pub fn page_configure(json: &str) -> Result<(), JsValue> {
    with_runner(|r| r.configure(json))
        .unwrap_or(Ok(()))
        .map_err(to_js)
}

#[wasm_bindgen]
pub fn page_teardown() {
    with_runner(|r| r.teardown());
}

// ---- Terminal ----

#[wasm_bindgen]
pub fn terminal_input(text: &str) {
    push(InputEvent::TerminalInput { text: text.to_string() });
}

#[wasm_bindgen]
pub fn terminal_submit() {
    push(InputEvent::TerminalSubmit);
}

#[wasm_bindgen]
pub fn terminal_complete() {
    push(InputEvent::TerminalComplete);
}

#[wasm_bindgen]
pub fn terminal_accept(name: &str) {
    push(InputEvent::TerminalAccept { name: name.to_string() });
}

#[wasm_bindgen]
pub fn terminal_clear() {
    push(InputEvent::TerminalClear);
}

/// Terminal state as JSON: prompt, input, history, suggestions.
#[wasm_bindgen]
pub fn terminal_snapshot() -> Result<String, JsValue> {
    with_runner(|r| serde_json::to_string(&r.terminal_snapshot()))
        .unwrap_or_else(|| Ok(String::from("null")))
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

// ---- Navigation, contact, CV ----

#[wasm_bindgen]
pub fn nav_click(section: &str) -> Result<(), JsValue> {
    let section: Section = section.parse().map_err(to_js)?;
    push(InputEvent::NavClick { section });
    Ok(())
}

#[wasm_bindgen]
pub fn contact_copy(index: usize) {
    push(InputEvent::CopyRequest { item: index });
}

/// Index of the contact entry showing its "copied" badge, or -1.
#[wasm_bindgen]
pub fn contact_copied() -> i32 {
    with_runner(|r| r.page().contact().copied_item())
        .flatten()
        .map_or(-1, |item| item as i32)
}

#[wasm_bindgen]
pub fn cv_download() {
    push(InputEvent::DownloadCv);
}

// ---- Skills ----

/// Switch the skills filter: `all` or a category name.
#[wasm_bindgen]
pub fn skills_filter(category: &str) -> Result<(), JsValue> {
    let filter: SkillFilter = category.parse().map_err(to_js)?;
    push(InputEvent::SkillFilter { filter });
    Ok(())
}

#[wasm_bindgen]
pub fn skills_install(name: &str) {
    push(InputEvent::SkillInstall { name: name.to_string() });
}

/// Skills panel state as JSON: filter, counts, visible packages, installs.
#[wasm_bindgen]
pub fn skills_snapshot() -> Result<String, JsValue> {
    with_runner(|r| serde_json::to_string(&r.page().skills().snapshot()))
        .unwrap_or_else(|| Ok(String::from("null")))
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

// ---- Typewriter ----

#[wasm_bindgen]
pub fn logo_text() -> String {
    with_runner(|r| r.page().logo().visible_text()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn logo_cursor_opacity() -> f32 {
    with_runner(|r| r.page().logo().cursor_opacity()).unwrap_or(0.0)
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_header_ptr() -> *const f32 {
    with_runner(|r| r.header_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_particles_ptr() -> *const f32 {
    with_runner(|r| r.particles_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_particle_count() -> u32 {
    with_runner(|r| r.particle_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_connections_ptr() -> *const f32 {
    with_runner(|r| r.connections_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_connection_count() -> u32 {
    with_runner(|r| r.connection_count()).unwrap_or(0)
}

// ---- Capacity accessors ----

#[wasm_bindgen]
pub fn get_max_particles() -> u32 {
    with_runner(|r| r.max_particles()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_max_connections() -> u32 {
    with_runner(|r| r.max_connections()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats()).unwrap_or(0)
}
