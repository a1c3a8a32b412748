//! Scroll-driven indicators: progress bar, back-to-top control, navbar shadow.

use crate::config::SiteConfig;

/// Raw measurements taken from the window on each scroll event.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Current vertical offset (`window.scrollY`).
    pub offset: f64,
    /// Full scrollable height of the document.
    pub scroll_height: f64,
    /// Height of the viewport (`window.innerHeight`).
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            scroll_height,
            viewport_height,
        }
    }

    /// Scrolled fraction in `[0, 1]`. Pages no taller than the viewport report 0.
    pub fn fraction(&self) -> f64 {
        let range = self.scroll_height - self.viewport_height;
        if range <= 0.0 {
            return 0.0;
        }
        let fraction = self.offset / range;
        if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarShadow {
    Resting,
    Raised,
}

impl NavbarShadow {
    pub fn css(self) -> &'static str {
        match self {
            NavbarShadow::Resting => "0 1px 2px 0 rgba(0, 0, 0, 0.05)",
            NavbarShadow::Raised => "0 4px 6px -1px rgba(0, 0, 0, 0.1)",
        }
    }
}

/// Everything a scroll event changes on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEffect {
    pub progress_percent: f64,
    pub back_to_top_visible: bool,
    pub navbar_shadow: NavbarShadow,
}

impl ScrollEffect {
    pub fn evaluate(metrics: &ScrollMetrics, config: &SiteConfig) -> Self {
        let navbar_shadow = if metrics.offset > config.navbar_shadow_threshold_px {
            NavbarShadow::Raised
        } else {
            NavbarShadow::Resting
        };
        Self {
            progress_percent: metrics.fraction() * 100.0,
            back_to_top_visible: metrics.offset > config.back_to_top_threshold_px,
            navbar_shadow,
        }
    }
}
