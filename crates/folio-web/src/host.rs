use std::cell::RefCell;
use std::rc::Rc;

use folio_engine::{Host, InputEvent, Section};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

/// `Host` backed by the browser DOM.
///
/// Clipboard writes complete asynchronously; their outcomes are collected
/// as `CopyResult` events and fed back through `take_reports`.
#[derive(Default)]
pub struct BrowserHost {
    reports: Rc<RefCell<Vec<InputEvent>>>,
}

impl BrowserHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events produced by completed browser operations since the last call.
    pub fn take_reports(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut *self.reports.borrow_mut())
    }
}

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Resolve `navigator.clipboard.writeText(text)` to a promise.
fn clipboard_write(text: &str) -> Result<Promise, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() {
        return Err(JsValue::from_str("clipboard API unavailable"));
    }
    let write_text: Function =
        Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    write_text.call1(&clipboard, &JsValue::from_str(text))?.dyn_into()
}

/// File name for the download attribute: last path segment of the URL.
fn file_name(url: &str) -> &str {
    url.rsplit('/').find(|s| !s.is_empty()).unwrap_or(url)
}

impl Host for BrowserHost {
    fn scroll_to(&mut self, section: Section) {
        let Some(element) = document().and_then(|d| d.get_element_by_id(section.id())) else {
            log::debug!("host: no element #{}, not scrolling", section.id());
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn write_clipboard(&mut self, item: usize, text: &str) {
        let reports = Rc::clone(&self.reports);
        match clipboard_write(text) {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                let ok = match JsFuture::from(promise).await {
                    Ok(_) => true,
                    Err(err) => {
                        log::warn!("host: clipboard write failed: {:?}", err);
                        false
                    }
                };
                reports.borrow_mut().push(InputEvent::CopyResult { item, ok });
            }),
            Err(err) => {
                log::warn!("host: clipboard unavailable: {:?}", err);
                reports.borrow_mut().push(InputEvent::CopyResult { item, ok: false });
            }
        }
    }

    fn download(&mut self, url: &str) {
        let Some(document) = document() else {
            return;
        };
        let anchor = match document
            .create_element("a")
            .and_then(|el| el.dyn_into::<HtmlAnchorElement>().map_err(JsValue::from))
        {
            Ok(anchor) => anchor,
            Err(err) => {
                log::warn!("host: could not create download link: {:?}", err);
                return;
            }
        };
        anchor.set_href(url);
        anchor.set_download(file_name(url));
        anchor.click();
        log::debug!("host: download started for {}", url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_name_is_last_segment() {
        assert_eq!(file_name("/fabio-amorelli-cv.pdf"), "fabio-amorelli-cv.pdf");
        assert_eq!(file_name("https://amorelli.dev/files/cv.pdf"), "cv.pdf");
        assert_eq!(file_name("cv.pdf"), "cv.pdf");
    }

    #[test]
    fn reports_are_taken_once() {
        let mut host = BrowserHost::new();
        host.reports.borrow_mut().push(InputEvent::CopyResult { item: 0, ok: true });
        assert_eq!(host.take_reports(), vec![InputEvent::CopyResult { item: 0, ok: true }]);
        assert!(host.take_reports().is_empty());
    }
}
