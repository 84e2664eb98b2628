//! Bilingual text swap.
//!
//! Two kinds of elements take part:
//! - elements carrying both [`ATTR_AR`] and [`ATTR_EN`] display whichever attribute
//!   matches the target language;
//! - elements matched by [`DICTIONARY_SELECTOR`] are looked up in the translation
//!   table by their trimmed text. Switching to English stashes the text they showed
//!   in [`ATTR_ORIGINAL`]; switching back restores it and drops the attribute.
//!   Elements with child elements are skipped, since replacing their text would
//!   drop the children.
//!
//! The algorithm is written against [`LanguageSurface`] so it runs the same on the
//! live document and on the in-memory tree used by the tests.

use crate::{lookup, Lang, PageConfig, LANG_STORAGE_KEY};

pub const ATTR_AR: &str = "data-ar";
pub const ATTR_EN: &str = "data-en";
pub const ATTR_ORIGINAL: &str = "data-original-ar";

pub const PAIRED_SELECTOR: &str = "[data-ar][data-en]";
pub const MARKED_SELECTOR: &str = "[data-original-ar]";
pub const DICTIONARY_SELECTOR: &str = "h4, li, p.project-details, p.project-details-small, p.mini-details, .stat-label, .section-title, h3, h5";

/// The parts of a page the language toggle reads and writes.
pub trait LanguageSurface {
    type Node;

    /// Elements carrying both language attributes.
    fn paired_nodes(&self) -> Vec<Self::Node>;
    /// Elements eligible for dictionary translation.
    fn dictionary_nodes(&self) -> Vec<Self::Node>;
    /// Elements currently carrying [`ATTR_ORIGINAL`].
    fn marked_nodes(&self) -> Vec<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);
    fn remove_attribute(&mut self, node: &Self::Node, name: &str);
    fn text(&self, node: &Self::Node) -> String;
    fn has_element_children(&self, node: &Self::Node) -> bool;
    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// `lang` and `dir` on the root element.
    fn set_document_language(&mut self, lang: Lang);
    fn set_switch_label(&mut self, label: &str);
    fn set_brand(&mut self, label: &str);
    fn set_font_family(&mut self, family: &str);
}

/// Where the chosen language is remembered between visits.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// Owns the session's current language.
#[derive(Debug, Default)]
pub struct LanguageToggle {
    current: Lang,
}

impl LanguageToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Lang {
        self.current
    }

    /// Flips the language and renders the whole page in it. Returns the new language.
    pub fn toggle<S, P>(&mut self, surface: &mut S, store: &mut P, config: &PageConfig) -> Lang
    where
        S: LanguageSurface,
        P: PreferenceStore,
    {
        let next = self.current.toggled();
        surface.set_document_language(next);
        surface.set_switch_label(next.switch_label());

        apply_pairs(surface, next);
        match next {
            Lang::En => translate_dictionary(surface),
            Lang::Ar => restore_dictionary(surface),
        }

        surface.set_brand(config.brand(next));
        self.current = next;
        store.save(LANG_STORAGE_KEY, next.code());
        surface.set_font_family(next.font_family());

        tracing::debug!(lang = next.code(), "language toggled");
        next
    }

    /// Brings the page in line with the saved preference. Toggles at most once.
    pub fn restore<S, P>(&mut self, surface: &mut S, store: &mut P, config: &PageConfig) -> bool
    where
        S: LanguageSurface,
        P: PreferenceStore,
    {
        let saved = match store.load(LANG_STORAGE_KEY) {
            Some(saved) => saved,
            None => return false,
        };
        match Lang::from_code(&saved) {
            Some(lang) if lang != self.current => {
                self.toggle(surface, store, config);
                true
            }
            Some(_) => false,
            None => {
                tracing::warn!(saved = %saved, "ignoring unrecognized language preference");
                false
            }
        }
    }
}

fn apply_pairs<S: LanguageSurface>(surface: &mut S, lang: Lang) {
    let attr = match lang {
        Lang::Ar => ATTR_AR,
        Lang::En => ATTR_EN,
    };
    for node in surface.paired_nodes() {
        if let Some(text) = surface.attribute(&node, attr).filter(|t| !t.is_empty()) {
            surface.set_text(&node, &text);
        }
    }
}

fn translate_dictionary<S: LanguageSurface>(surface: &mut S) {
    for node in surface.dictionary_nodes() {
        let has_pair = surface.attribute(&node, ATTR_AR).is_some()
            && surface.attribute(&node, ATTR_EN).is_some();
        if has_pair
            || surface.attribute(&node, ATTR_ORIGINAL).is_some()
            || surface.has_element_children(&node)
        {
            continue;
        }
        let shown = surface.text(&node);
        if let Some(english) = lookup(shown.trim()) {
            surface.set_attribute(&node, ATTR_ORIGINAL, &shown);
            surface.set_text(&node, english);
        }
    }
}

fn restore_dictionary<S: LanguageSurface>(surface: &mut S) {
    for node in surface.marked_nodes() {
        if let Some(original) = surface.attribute(&node, ATTR_ORIGINAL) {
            surface.set_text(&node, &original);
        }
        surface.remove_attribute(&node, ATTR_ORIGINAL);
    }
}
