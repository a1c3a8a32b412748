//! Browser entry point for the Wocon landing page.
//!
//! Build with `wasm-pack build web --target web` and serve `web/` (the page
//! loads `pkg/wocon_web.js`). On non-wasm targets this crate is empty; its
//! tests only lint the shipped markup.

#[cfg(target_arch = "wasm32")]
pub mod listeners;
#[cfg(target_arch = "wasm32")]
pub mod start;
