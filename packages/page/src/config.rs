use serde::Deserialize;

use crate::navbar::ScrollThresholds;
use crate::{Lang, PageError};

/// Tunables read from the optional `#page-config` JSON block.
/// Every field falls back to the value the page was designed with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub scroll_top_threshold: f64,
    pub scroll_delta: f64,
    pub throttle_ms: u32,
    pub mobile_breakpoint: f64,
    pub back_to_top_threshold: f64,
    pub counter_duration_ms: u32,
    pub copy_feedback_ms: u32,
    pub brand_ar: String,
    pub brand_en: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_top_threshold: 100.0,
            scroll_delta: 5.0,
            throttle_ms: 100,
            mobile_breakpoint: 768.0,
            back_to_top_threshold: 300.0,
            counter_duration_ms: 2000,
            copy_feedback_ms: 2000,
            brand_ar: "معين نجم".to_string(),
            brand_en: "Moein Najem".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    pub fn thresholds(&self) -> ScrollThresholds {
        ScrollThresholds {
            top: self.scroll_top_threshold,
            delta: self.scroll_delta,
            mobile_breakpoint: self.mobile_breakpoint,
        }
    }

    pub fn brand(&self, lang: Lang) -> &str {
        match lang {
            Lang::Ar => &self.brand_ar,
            Lang::En => &self.brand_en,
        }
    }

    pub fn is_narrow(&self, viewport_width: f64) -> bool {
        viewport_width <= self.mobile_breakpoint
    }
}
