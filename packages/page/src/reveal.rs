pub const CARD_SELECTOR: &str = ".competency-card, .project-card, .stat-card, .skill-category-card, .award-card, .contact-card";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Entrance animation of a section or card: start state, end state, transition.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealStyle {
    pub transition: String,
}

impl RevealStyle {
    pub const HIDDEN: [(&'static str, &'static str); 2] =
        [("opacity", "0"), ("transform", "translateY(30px)")];
    pub const SHOWN: [(&'static str, &'static str); 2] =
        [("opacity", "1"), ("transform", "translateY(0)")];

    pub fn section() -> Self {
        Self {
            transition: "opacity 0.6s ease, transform 0.6s ease".to_string(),
        }
    }

    /// Cards fade in one after another, a tenth of a second apart.
    pub fn card(index: usize) -> Self {
        let delay = index as f64 * 0.1;
        Self {
            transition: format!("opacity 0.5s ease {delay:.1}s, transform 0.5s ease {delay:.1}s"),
        }
    }
}

pub fn card_hover_transform(hovered: bool) -> &'static str {
    if hovered {
        "translateY(-10px) scale(1.02)"
    } else {
        "translateY(0) scale(1)"
    }
}

/// A section with nothing but whitespace in it.
pub fn is_empty_section(text: &str, inner_html: &str) -> bool {
    text.chars().all(char::is_whitespace) || inner_html.trim().is_empty()
}
