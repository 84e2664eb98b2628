use gloo_timers::callback::Timeout;
use page::{
    card_hover_transform, is_empty_section, PageError, ReadyState, LAZY_IMAGE_SELECTOR,
};
use web_sys::{Document, HtmlElement, Window};

use crate::dom;

pub fn mark_empty_sections(document: &Document) {
    for section in dom::query_all(document, "section") {
        let text = section.text_content().unwrap_or_default();
        if is_empty_section(&text, &section.inner_html()) {
            dom::set_class(&section, "empty-section", true);
            let id = section.id();
            let name = if id.is_empty() { "unnamed" } else { id.as_str() };
            tracing::info!(section = name, "marked empty section");
        }
    }
}

/// Swaps `data-src` into `src` once an image is about to be seen.
pub fn attach_lazy_images(document: &Document) -> Result<(), PageError> {
    let images = dom::query_all(document, LAZY_IMAGE_SELECTOR);
    if images.is_empty() {
        return Ok(());
    }
    dom::observe(&images, 0.0, "0px", |image, observer| {
        if let Some(src) = image.get_attribute("data-src") {
            if let Err(err) = image.set_attribute("src", &src) {
                tracing::warn!(error = %dom::js_message(&err), "lazy image load failed");
            }
        }
        dom::set_class(image, "loaded", true);
        observer.unobserve(image);
    })?;
    Ok(())
}

pub fn attach_card_hover(document: &Document) -> Result<(), PageError> {
    for card in dom::query_all(document, ".project-card") {
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let target = card.clone();
            dom::listen(&card, event, move |_| {
                dom::set_style(&target, "transform", card_hover_transform(hovered));
            })?;
        }
    }
    Ok(())
}

/// Fades the body in once every resource has loaded.
///
/// The module usually boots after `load`, in which case the fade starts now.
pub fn attach_fade_in(window: &Window, document: &Document) -> Result<(), PageError> {
    let body = dom::body(document)?;
    if ReadyState::parse(&document.ready_state()).is_loaded() {
        fade_in(&body);
        return Ok(());
    }
    dom::listen(window, "load", move |_| fade_in(&body))
}

fn fade_in(body: &HtmlElement) {
    dom::set_style(body, "opacity", "0");
    let body = body.clone();
    Timeout::new(100, move || {
        dom::set_style(&body, "transition", "opacity 0.5s ease");
        dom::set_style(&body, "opacity", "1");
    })
    .forget();
}
