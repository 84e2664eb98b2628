//! Thin helpers over `web_sys` shared by every component.

use page::PageError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::MissingElement("window"))
}

pub fn document() -> Result<Document, PageError> {
    window()?
        .document()
        .ok_or(PageError::MissingElement("document"))
}

pub fn body(document: &Document) -> Result<HtmlElement, PageError> {
    document.body().ok_or(PageError::MissingElement("body"))
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn require(document: &Document, selector: &'static str) -> Result<Element, PageError> {
    query(document, selector).ok_or(PageError::MissingElement(selector))
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        tracing::warn!(selector, "invalid selector");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Turns a rejected browser call into a [`PageError::Platform`].
pub fn platform(action: &'static str) -> impl Fn(JsValue) -> PageError {
    move |err| PageError::platform(action, js_message(&err))
}

pub fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(err) = result {
        tracing::warn!(class, error = %js_message(&err), "class update failed");
    }
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(err) = html.style().set_property(property, value) {
        tracing::warn!(property, error = %js_message(&err), "style update failed");
    }
}

pub fn clear_style(element: &Element, property: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().remove_property(property);
    }
}

pub fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or_default()
}

pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or_default()
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Registers a listener that lives as long as the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), PageError> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(platform("addEventListener"))?;
    callback.forget();
    Ok(())
}

/// Calls `on_visible` for every target that enters the viewport.
///
/// The observer is handed to the callback so one-shot effects can unobserve
/// their element.
pub fn observe(
    targets: &[Element],
    threshold: f64,
    root_margin: &str,
    mut on_visible: impl FnMut(&Element, &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver, PageError> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_visible(&entry.target(), &observer);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(platform("IntersectionObserver"))?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(observer)
}
