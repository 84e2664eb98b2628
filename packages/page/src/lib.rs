//! This crate contains the platform-neutral behavior of the résumé page.
//!
//! Everything here runs without a browser: the `web` crate resolves DOM handles,
//! wires listeners and feeds these types with offsets, widths and element text.

mod error;
pub use error::PageError;

mod config;
pub use config::PageConfig;

mod i18n;
pub use i18n::{Lang, LANG_STORAGE_KEY};

mod translations;
pub use translations::{lookup, TRANSLATIONS};

mod language;
pub use language::{
    LanguageSurface, LanguageToggle, PreferenceStore, ATTR_AR, ATTR_EN, ATTR_ORIGINAL,
    DICTIONARY_SELECTOR, MARKED_SELECTOR, PAIRED_SELECTOR,
};

mod navbar;
pub use navbar::{next_header_state, HeaderState, NavState, ScrollThresholds, Throttle};

mod menu;
pub use menu::{ClickHit, MobileMenu};

mod scroll;
pub use scroll::{
    anchor_destination, anchor_target, back_to_top_visible, header_shadow, BACK_TO_TOP_STYLE,
};

mod scrollspy;
pub use scrollspy::{link_targets, SCROLLSPY_ROOT_MARGIN, SECTION_SELECTOR};

mod reveal;
pub use reveal::{
    card_hover_transform, is_empty_section, RevealStyle, CARD_SELECTOR, LAZY_IMAGE_SELECTOR,
    REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
};

mod counter;
pub use counter::{
    parse_stat, start_counter, CounterAnimation, CounterMarker, ANIMATED_CLASS, TICK_MS,
};

mod toast;
pub use toast::{copy_payload, CopyFeedback, COPIED_COLOR};

mod print;
pub use print::PRINT_FALLBACK_ALERT;

mod ready;
pub use ready::ReadyState;
