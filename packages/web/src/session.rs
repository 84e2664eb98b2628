//! The page session: config plus the components that hold state between events.

use std::cell::RefCell;
use std::rc::Rc;

use page::{PageConfig, PageError};
use web_sys::{Document, Window};

use crate::language::LanguageController;
use crate::navigation::Navigation;
use crate::{polish, scrolling, widgets};

thread_local! {
    static SESSION: RefCell<Option<Rc<PageSession>>> = const { RefCell::new(None) };
}

pub struct PageSession {
    config: Rc<PageConfig>,
    language: Option<Rc<LanguageController>>,
    navigation: Option<Rc<Navigation>>,
}

impl PageSession {
    /// Boots every component in its own guarded scope.
    ///
    /// A component that fails is logged and left out; the rest still boot.
    pub fn boot(window: &Window, document: &Document) -> Self {
        let config = Rc::new(read_config(document));

        let language = guard("language", LanguageController::boot(document, Rc::clone(&config)));
        let navigation = guard(
            "navigation",
            Navigation::boot(window, document, Rc::clone(&config)),
        );

        guard(
            "anchors",
            scrolling::attach_anchors(window, document, Rc::clone(&config), navigation.clone()),
        );
        guard(
            "back-to-top",
            scrolling::attach_back_to_top(window, document, Rc::clone(&config)),
        );
        if let Some(nav) = &navigation {
            guard(
                "elevation",
                scrolling::attach_elevation(window, nav, Rc::clone(&config)),
            );
        }
        guard("reveal", scrolling::attach_reveal(document));

        guard("counters", widgets::attach_counters(document, &config));
        guard(
            "contact-copy",
            widgets::attach_contact_copy(document, &config, language.clone()),
        );

        polish::mark_empty_sections(document);
        guard("lazy-images", polish::attach_lazy_images(document));
        guard("card-hover", polish::attach_card_hover(document));
        guard("fade-in", polish::attach_fade_in(window, document));

        Self {
            config,
            language,
            navigation,
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn toggle_language(&self) {
        match &self.language {
            Some(language) => language.toggle(),
            None => tracing::error!(
                error = %PageError::MissingElement("#lang-text"),
                "language toggle unavailable"
            ),
        }
    }

    pub fn toggle_menu(&self) {
        match &self.navigation {
            Some(nav) => nav.toggle_menu(),
            None => tracing::error!("mobile menu elements not found"),
        }
    }

    pub fn close_menu(&self) {
        if let Some(nav) = &self.navigation {
            nav.close_menu();
        }
    }
}

fn read_config(document: &Document) -> PageConfig {
    let Some(raw) = document
        .get_element_by_id("page-config")
        .and_then(|element| element.text_content())
    else {
        return PageConfig::default();
    };
    PageConfig::from_json(&raw).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "using default page config");
        PageConfig::default()
    })
}

fn guard<T>(component: &'static str, result: Result<T, PageError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(component, error = %err, "component skipped");
            None
        }
    }
}

pub fn install(session: PageSession) {
    SESSION.with(|slot| *slot.borrow_mut() = Some(Rc::new(session)));
}

/// Runs `action` against the booted session; calls made before boot are logged and dropped.
pub fn with<R>(action: impl FnOnce(&PageSession) -> R) -> Option<R> {
    let session = SESSION.with(|slot| slot.borrow().clone());
    match session {
        Some(session) => Some(action(&session)),
        None => {
            tracing::warn!("page session not booted yet");
            None
        }
    }
}
