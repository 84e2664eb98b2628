pub const SECTION_SELECTOR: &str = "section[id]";

/// Only sections crossing the vertical middle of the viewport count as current.
pub const SCROLLSPY_ROOT_MARGIN: &str = "-50% 0px -50% 0px";

/// Whether a nav link's `href` points at the section with this id.
pub fn link_targets(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}
