use std::cell::RefCell;
use std::rc::Rc;

use ui::core::LocalStorage;
use ui::dom::DomView;
use ui::{App, SiteConfig};
use wasm_bindgen::prelude::*;

use crate::listeners;

pub type SharedApp = Rc<RefCell<App<DomView, LocalStorage>>>;

/// Inline `<script type="application/json">` carrying config overrides.
const CONFIG_ELEMENT_ID: &str = "site-config";

#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(view) = DomView::new() else {
        log::warn!("[web] no document; nothing to enhance");
        return Ok(());
    };
    let config = read_config(&view);
    let app: SharedApp = Rc::new(RefCell::new(App::new(config, view, LocalStorage::new())));
    app.borrow_mut().init();
    listeners::attach(&app)
}

fn read_config(view: &DomView) -> SiteConfig {
    let Some(src) = view
        .document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    SiteConfig::from_json(&src).unwrap_or_else(|err| {
        log::warn!("[web] {err}; using defaults");
        SiteConfig::default()
    })
}
