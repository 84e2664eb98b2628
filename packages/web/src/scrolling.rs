use std::rc::Rc;

use page::{
    anchor_destination, anchor_target, back_to_top_visible, header_shadow, PageConfig, PageError,
    RevealStyle, BACK_TO_TOP_STYLE, CARD_SELECTOR, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom;
use crate::navigation::Navigation;

/// Same-page links scroll smoothly and stop below the fixed header.
pub fn attach_anchors(
    window: &Window,
    document: &Document,
    config: Rc<PageConfig>,
    nav: Option<Rc<Navigation>>,
) -> Result<(), PageError> {
    for link in dom::query_all(document, "a[href^=\"#\"]") {
        let window = window.clone();
        let document = document.clone();
        let config = Rc::clone(&config);
        let nav = nav.clone();
        let anchor = link.clone();
        dom::listen(&link, "click", move |event| {
            event.prevent_default();
            let href = anchor.get_attribute("href").unwrap_or_default();
            let Some(id) = anchor_target(&href) else {
                return;
            };
            let Some(target) = document.get_element_by_id(&id) else {
                tracing::warn!(id = %id, "anchor target not found");
                return;
            };

            let header_height = nav.as_ref().map_or(0.0, |nav| nav.header_height());
            let top = anchor_destination(
                target.get_bounding_client_rect().top(),
                dom::scroll_offset(&window),
                header_height,
            );
            dom::smooth_scroll_to(&window, top);

            if let Some(nav) = &nav {
                if config.is_narrow(dom::viewport_width(&window)) {
                    nav.close_menu();
                }
                nav.reveal_header();
            }
        })?;
    }
    Ok(())
}

pub fn attach_back_to_top(
    window: &Window,
    document: &Document,
    config: Rc<PageConfig>,
) -> Result<(), PageError> {
    let button = document
        .create_element("button")
        .map_err(dom::platform("createElement"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PageError::platform("createElement", "button is not an HTML element"))?;
    button.set_class_name("back-to-top");
    button.set_inner_html(r#"<i class="fas fa-arrow-up"></i>"#);
    button.style().set_css_text(BACK_TO_TOP_STYLE);
    dom::body(document)?
        .append_child(&button)
        .map_err(dom::platform("appendChild"))?;

    let shown = button.clone();
    let scroll_window = window.clone();
    dom::listen(window, "scroll", move |_| {
        let visible = back_to_top_visible(
            dom::scroll_offset(&scroll_window),
            config.back_to_top_threshold,
        );
        dom::set_style(&shown, "opacity", if visible { "1" } else { "0" });
        dom::set_style(&shown, "visibility", if visible { "visible" } else { "hidden" });
    })?;

    let click_window = window.clone();
    dom::listen(&button, "click", move |_| {
        dom::smooth_scroll_to(&click_window, 0.0);
    })?;

    let hovered = button.clone();
    dom::listen(&button, "mouseenter", move |_| {
        dom::set_style(&hovered, "transform", "translateY(-5px)");
        dom::set_style(&hovered, "box-shadow", "0 6px 20px rgba(0, 0, 0, 0.3)");
    })?;
    let left = button.clone();
    dom::listen(&button, "mouseleave", move |_| {
        dom::set_style(&left, "transform", "translateY(0)");
        dom::set_style(&left, "box-shadow", "0 4px 15px rgba(0, 0, 0, 0.2)");
    })?;
    Ok(())
}

/// Deepens the header shadow once the page leaves the top.
pub fn attach_elevation(
    window: &Window,
    nav: &Navigation,
    config: Rc<PageConfig>,
) -> Result<(), PageError> {
    let header: Element = nav.header().clone().into();
    let scroll_window = window.clone();
    dom::listen(window, "scroll", move |_| {
        let offset = dom::scroll_offset(&scroll_window);
        dom::set_style(
            &header,
            "box-shadow",
            header_shadow(offset, config.scroll_top_threshold),
        );
    })
}

/// Fades sections and cards in the first time they scroll into view.
pub fn attach_reveal(document: &Document) -> Result<(), PageError> {
    let sections = dom::query_all(document, "section");
    let cards = dom::query_all(document, CARD_SELECTOR);

    let staged = sections
        .iter()
        .map(|section| (section, RevealStyle::section()))
        .chain(
            cards
                .iter()
                .enumerate()
                .map(|(index, card)| (card, RevealStyle::card(index))),
        );
    let mut targets = Vec::with_capacity(sections.len() + cards.len());
    for (element, style) in staged {
        for (property, value) in RevealStyle::HIDDEN {
            dom::set_style(element, property, value);
        }
        dom::set_style(element, "transition", &style.transition);
        targets.push(element.clone());
    }
    if targets.is_empty() {
        return Ok(());
    }

    dom::observe(
        &targets,
        REVEAL_THRESHOLD,
        REVEAL_ROOT_MARGIN,
        |element, observer| {
            for (property, value) in RevealStyle::SHOWN {
                dom::set_style(element, property, value);
            }
            observer.unobserve(element);
        },
    )?;
    Ok(())
}
