use std::cell::RefCell;
use std::rc::Rc;

use page::{
    Lang, LanguageSurface, LanguageToggle, PageConfig, PageError, PreferenceStore,
    DICTIONARY_SELECTOR, MARKED_SELECTOR, PAIRED_SELECTOR,
};
use web_sys::{Document, Element, HtmlElement, Storage};

use crate::dom;

/// The live document as seen by the language toggle.
pub struct DomSurface {
    document: Document,
    root: Element,
    switch_label: Element,
    brand: Option<Element>,
    body: Option<HtmlElement>,
}

impl DomSurface {
    pub fn resolve(document: &Document) -> Result<Self, PageError> {
        let root = document
            .document_element()
            .ok_or(PageError::MissingElement("html"))?;
        let switch_label = document
            .get_element_by_id("lang-text")
            .ok_or(PageError::MissingElement("#lang-text"))?;
        let brand = dom::query(document, ".nav-brand");
        if brand.is_none() {
            tracing::warn!("no .nav-brand; brand label will not follow the language");
        }

        Ok(Self {
            document: document.clone(),
            root,
            switch_label,
            brand,
            body: document.body(),
        })
    }

    fn write_attribute(node: &Element, name: &str, value: &str) {
        if let Err(err) = node.set_attribute(name, value) {
            tracing::warn!(name, error = %dom::js_message(&err), "attribute update failed");
        }
    }
}

impl LanguageSurface for DomSurface {
    type Node = Element;

    fn paired_nodes(&self) -> Vec<Element> {
        dom::query_all(&self.document, PAIRED_SELECTOR)
    }

    fn dictionary_nodes(&self) -> Vec<Element> {
        dom::query_all(&self.document, DICTIONARY_SELECTOR)
    }

    fn marked_nodes(&self) -> Vec<Element> {
        dom::query_all(&self.document, MARKED_SELECTOR)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        Self::write_attribute(node, name, value);
    }

    fn remove_attribute(&mut self, node: &Element, name: &str) {
        if let Err(err) = node.remove_attribute(name) {
            tracing::warn!(name, error = %dom::js_message(&err), "attribute removal failed");
        }
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn has_element_children(&self, node: &Element) -> bool {
        node.child_element_count() > 0
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_document_language(&mut self, lang: Lang) {
        Self::write_attribute(&self.root, "lang", lang.code());
        Self::write_attribute(&self.root, "dir", lang.dir());
    }

    fn set_switch_label(&mut self, label: &str) {
        self.switch_label.set_text_content(Some(label));
    }

    fn set_brand(&mut self, label: &str) {
        if let Some(brand) = &self.brand {
            brand.set_text_content(Some(label));
        }
    }

    fn set_font_family(&mut self, family: &str) {
        if let Some(body) = &self.body {
            dom::set_style(body, "font-family", family);
        }
    }
}

/// `localStorage`, when the browser lets us have it.
pub struct LocalPreferences {
    storage: Option<Storage>,
}

impl LocalPreferences {
    pub fn open() -> Self {
        let storage = dom::window()
            .ok()
            .and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage unavailable; language choice will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalPreferences {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            tracing::warn!(key, error = %dom::js_message(&err), "could not persist preference");
        }
    }
}

pub struct LanguageController {
    surface: RefCell<DomSurface>,
    store: RefCell<LocalPreferences>,
    toggle: RefCell<LanguageToggle>,
    config: Rc<PageConfig>,
}

impl LanguageController {
    /// Resolves the language handles and applies the saved preference.
    pub fn boot(document: &Document, config: Rc<PageConfig>) -> Result<Rc<Self>, PageError> {
        let controller = Rc::new(Self {
            surface: RefCell::new(DomSurface::resolve(document)?),
            store: RefCell::new(LocalPreferences::open()),
            toggle: RefCell::new(LanguageToggle::new()),
            config,
        });

        let restored = controller.toggle.borrow_mut().restore(
            &mut *controller.surface.borrow_mut(),
            &mut *controller.store.borrow_mut(),
            &controller.config,
        );
        if restored {
            tracing::info!(lang = controller.current().code(), "restored saved language");
        }
        Ok(controller)
    }

    pub fn current(&self) -> Lang {
        self.toggle.borrow().current()
    }

    pub fn toggle(&self) {
        self.toggle.borrow_mut().toggle(
            &mut *self.surface.borrow_mut(),
            &mut *self.store.borrow_mut(),
            &self.config,
        );
    }
}
