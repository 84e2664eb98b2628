//! Browser bindings for the résumé page.
//!
//! `start` runs when the module is instantiated. Everything else exported here
//! is wired to inline `onclick` handlers in the page markup.

mod dom;
mod language;
mod navigation;
mod polish;
mod scrolling;
mod session;
mod widgets;

use wasm_bindgen::prelude::*;
use page::ReadyState;
use web_sys::Document;

use session::PageSession;

#[wasm_bindgen(start)]
pub fn start() {
    install_panic_hook();
    tracing_wasm::set_as_global_default();

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            tracing::error!(error = %err, "no document to attach to");
            return;
        }
    };

    if ReadyState::parse(&document.ready_state()).is_parsed() {
        boot(&document);
        return;
    }
    let ready = document.clone();
    let on_ready = Closure::once_into_js(move || boot(&ready));
    if let Err(err) =
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        tracing::error!(error = %dom::js_message(&err), "could not wait for DOMContentLoaded");
    }
}

fn install_panic_hook() {
    console_error_panic_hook::set_once();
}

fn boot(document: &Document) {
    let window = match dom::window() {
        Ok(window) => window,
        Err(err) => {
            tracing::error!(error = %err, "no window to attach to");
            return;
        }
    };
    let session = PageSession::boot(&window, document);
    log_runtime_config(&session);
    session::install(session);
}

fn log_runtime_config(session: &PageSession) {
    let config = session.config();
    tracing::info!(
        scroll_top_threshold = config.scroll_top_threshold,
        scroll_delta = config.scroll_delta,
        throttle_ms = config.throttle_ms,
        mobile_breakpoint = config.mobile_breakpoint,
        back_to_top_threshold = config.back_to_top_threshold,
        "page ready"
    );
}

#[wasm_bindgen(js_name = toggleLanguage)]
pub fn toggle_language() {
    session::with(PageSession::toggle_language);
}

#[wasm_bindgen(js_name = toggleMobileMenu)]
pub fn toggle_mobile_menu() {
    session::with(PageSession::toggle_menu);
}

#[wasm_bindgen(js_name = closeMobileMenu)]
pub fn close_mobile_menu() {
    session::with(PageSession::close_menu);
}

#[wasm_bindgen(js_name = scrollToContact)]
pub fn scroll_to_contact() {
    widgets::scroll_to_contact();
}

/// Saving the résumé as PDF goes through the print dialog.
#[wasm_bindgen(js_name = downloadCV)]
pub fn download_cv() {
    widgets::print_page();
}

#[wasm_bindgen(js_name = printCV)]
pub fn print_cv() {
    widgets::print_page();
}
