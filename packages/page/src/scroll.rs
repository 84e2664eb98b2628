/// Inline style of the back-to-top button. It starts hidden.
pub const BACK_TO_TOP_STYLE: &str = "position: fixed; bottom: 30px; left: 30px; width: 50px; height: 50px; \
border-radius: 50%; background: linear-gradient(135deg, #1e3a8a 0%, #3b82f6 100%); color: white; \
border: none; cursor: pointer; opacity: 0; visibility: hidden; transition: all 0.3s ease; z-index: 999; \
box-shadow: 0 4px 15px rgba(0, 0, 0, 0.2); font-size: 1.2rem;";

/// Element id a same-page link points at, or `None` for a bare `#` or a non-hash href.
pub fn anchor_target(href: &str) -> Option<String> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    match urlencoding::decode(fragment) {
        Ok(id) => Some(id.into_owned()),
        Err(_) => Some(fragment.to_string()),
    }
}

/// Document offset that puts the target just below the fixed header.
pub fn anchor_destination(target_viewport_top: f64, page_offset: f64, header_height: f64) -> f64 {
    (target_viewport_top + page_offset - header_height).max(0.0)
}

pub fn back_to_top_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Box shadow of the header, deeper once the page has scrolled away from the top.
pub fn header_shadow(offset: f64, top_threshold: f64) -> &'static str {
    if offset > top_threshold {
        "0 5px 20px rgba(0, 0, 0, 0.1)"
    } else {
        "0 4px 6px rgba(0, 0, 0, 0.1)"
    }
}
