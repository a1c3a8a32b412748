//! Shared client-side crate for the Wocon site. Locale, theme and the
//! scroll/menu/card effects live here; the `web` crate only wires events.

pub mod app;
pub mod config;
pub mod core;
pub mod effects;
pub mod error;
pub mod i18n;
pub mod theme;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use app::App;
pub use config::SiteConfig;
pub use error::SiteError;
