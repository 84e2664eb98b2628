use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use page::{
    copy_payload, start_counter, CopyFeedback, CounterAnimation, CounterMarker, Lang, PageConfig,
    PageError, ANIMATED_CLASS, COPIED_COLOR, PRINT_FALLBACK_ALERT, TICK_MS,
};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions};

use crate::dom;
use crate::language::LanguageController;

/// Set on a contact field while its "copied" flash is showing.
const COPYING_CLASS: &str = "copying";

struct ClassMarker<'a>(&'a Element);

impl CounterMarker for ClassMarker<'_> {
    fn is_animated(&self) -> bool {
        self.0.class_list().contains(ANIMATED_CLASS)
    }

    fn mark_animated(&mut self) {
        dom::set_class(self.0, ANIMATED_CLASS, true);
    }
}

/// Counts each statistic up from zero the first time its card is half visible.
pub fn attach_counters(document: &Document, config: &PageConfig) -> Result<(), PageError> {
    let cards = dom::query_all(document, ".stat-card");
    if cards.is_empty() {
        return Ok(());
    }
    let duration_ms = config.counter_duration_ms;
    dom::observe(&cards, 0.5, "0px", move |card, _| {
        let Ok(Some(number)) = card.query_selector(".stat-number") else {
            return;
        };
        let text = number.text_content().unwrap_or_default();
        let Some(animation) = start_counter(&mut ClassMarker(&number), &text, duration_ms) else {
            return;
        };
        number.set_text_content(Some("0"));
        spawn_local(run_counter(number, animation));
    })?;
    Ok(())
}

async fn run_counter(number: Element, mut animation: CounterAnimation) {
    while !animation.is_finished() {
        sleep(Duration::from_millis(TICK_MS)).await;
        if let Some(text) = animation.tick() {
            number.set_text_content(Some(&text));
        }
    }
    tracing::debug!(value = animation.target(), "counter finished");
}

/// Clicking a contact field copies its text and flashes a confirmation.
pub fn attach_contact_copy(
    document: &Document,
    config: &PageConfig,
    language: Option<Rc<LanguageController>>,
) -> Result<(), PageError> {
    let feedback = Duration::from_millis(u64::from(config.copy_feedback_ms));
    for item in dom::query_all(document, ".contact-item") {
        dom::set_style(&item, "cursor", "pointer");
        let target = item.clone();
        let language = language.clone();
        dom::listen(&item, "click", move |_| {
            if target.class_list().contains(COPYING_CLASS) {
                return;
            }
            dom::set_class(&target, COPYING_CLASS, true);
            let lang = language
                .as_ref()
                .map_or_else(Lang::default, |language| language.current());
            spawn_local(copy_contact(target.clone(), lang, feedback));
        })?;
    }
    Ok(())
}

async fn copy_contact(item: Element, lang: Lang, feedback: Duration) {
    let original = item.text_content().unwrap_or_default();
    if let Err(err) = write_clipboard(copy_payload(&original)).await {
        tracing::error!(error = %err, "copy to clipboard failed");
        dom::set_class(&item, COPYING_CLASS, false);
        return;
    }

    let flash = CopyFeedback::new(original, lang);
    item.set_text_content(Some(flash.message()));
    dom::set_style(&item, "color", COPIED_COLOR);

    sleep(feedback).await;

    item.set_text_content(Some(flash.original()));
    dom::clear_style(&item, "color");
    dom::set_class(&item, COPYING_CLASS, false);
}

async fn write_clipboard(text: &str) -> Result<(), PageError> {
    let clipboard = dom::window()?.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(dom::platform("clipboard.writeText"))?;
    Ok(())
}

/// Opens the print dialog so the page can be saved as PDF.
pub fn print_page() {
    let printed = dom::window().and_then(|window| window.print().map_err(dom::platform("print")));
    let Err(err) = printed else {
        return;
    };
    tracing::error!(error = %err, "could not open print dialog");
    if let Ok(window) = dom::window() {
        let _ = window.alert_with_message(PRINT_FALLBACK_ALERT);
    }
}

pub fn scroll_to_contact() {
    let contact = dom::document().and_then(|document| {
        document
            .get_element_by_id("contact")
            .ok_or(PageError::MissingElement("#contact"))
    });
    match contact {
        Ok(contact) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            contact.scroll_into_view_with_scroll_into_view_options(&options);
        }
        Err(err) => tracing::error!(error = %err, "cannot scroll to contact"),
    }
}
