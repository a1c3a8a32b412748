//! Tunables shared by the stores and effect handlers.
//!
//! Defaults match the shipped page. A page may override any subset through an
//! inline JSON block (see `SiteConfig::from_json`).

use serde::Deserialize;

use crate::error::SiteError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Local-storage key holding `"light"` or `"dark"`.
    pub theme_storage_key: String,
    /// Local-storage key holding the active locale code.
    pub language_storage_key: String,
    pub default_locale: String,
    pub back_to_top_threshold_px: f64,
    pub navbar_shadow_threshold_px: f64,
    pub preloader_delay_ms: u32,
    pub theme_transition_ms: u32,
    /// Upward offset applied to `.hover-lift` nodes while hovered.
    pub hover_lift_px: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "wocon-theme".into(),
            language_storage_key: "wocon-language".into(),
            default_locale: "en".into(),
            back_to_top_threshold_px: 300.0,
            navbar_shadow_threshold_px: 50.0,
            preloader_delay_ms: 500,
            theme_transition_ms: 300,
            hover_lift_px: 5.0,
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(src: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(src)?)
    }
}
