//! Event wiring. Each listener forwards one browser event to the controller.

use gloo_timers::callback::Timeout;
use ui::dom::{DomView, HOVER_SELECTOR};
use ui::effects::{CardGroup, HoverEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlSelectElement};

use crate::start::SharedApp;

const NAV_LINK_SELECTOR: &str = ".nav-link";
const THEME_TOGGLE_SELECTOR: &str = ".theme-toggle";
const SCROLL_TARGET_ATTR: &str = "data-scroll-target";

/// Register `handler` for `event` on `target` for the lifetime of the page.
fn on<T, F>(target: &T, event: &str, handler: F) -> Result<(), JsValue>
where
    T: AsRef<EventTarget>,
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .as_ref()
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn all(app: &SharedApp, selector: &str) -> Vec<Element> {
    app.borrow().view().query_all(selector)
}

fn by_id(app: &SharedApp, id: &str) -> Option<Element> {
    app.borrow().view().document().get_element_by_id(id)
}

pub fn attach(app: &SharedApp) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("window unavailable")?;

    let scroll_app = app.clone();
    on(&window, "scroll", move |_| scroll_app.borrow().on_scroll())?;

    // The module may start after `load` already fired.
    let loaded = app.borrow().view().document().ready_state() == "complete";
    if loaded {
        schedule_preloader(app);
    } else {
        let load_app = app.clone();
        on(&window, "load", move |_| schedule_preloader(&load_app))?;
    }

    if let Some(select) = by_id(app, "language-select") {
        let lang_app = app.clone();
        on(&select, "change", move |event: Event| {
            let value = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
                .map(|select| select.value());
            if let Some(value) = value {
                lang_app.borrow_mut().set_language(&value);
            }
        })?;
    }

    for toggle in all(app, THEME_TOGGLE_SELECTOR) {
        let theme_app = app.clone();
        on(&toggle, "click", move |_| {
            let delay = theme_app.borrow_mut().toggle_theme();
            let finish_app = theme_app.clone();
            Timeout::new(delay, move || finish_app.borrow().finish_theme_transition()).forget();
        })?;
    }

    if let Some(button) = by_id(app, "back-to-top") {
        let top_app = app.clone();
        on(&button, "click", move |_| top_app.borrow().scroll_to_top())?;
    }

    for link in all(app, NAV_LINK_SELECTOR) {
        let nav_app = app.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        on(&link, "click", move |event: Event| {
            if nav_app.borrow().on_nav_link(&href) {
                event.prevent_default();
            }
        })?;
    }

    for control in all(app, &format!("[{SCROLL_TARGET_ATTR}]")) {
        let cta_app = app.clone();
        let target = control.get_attribute(SCROLL_TARGET_ATTR).unwrap_or_default();
        on(&control, "click", move |event: Event| {
            if cta_app.borrow().scroll_to_section(&target) {
                event.prevent_default();
            }
        })?;
    }

    attach_cards(app)?;

    if let Some(toggle) = by_id(app, "menu-toggle") {
        let menu_app = app.clone();
        on(&toggle, "click", move |_| menu_app.borrow().toggle_menu())?;
    }

    for (index, node) in all(app, HOVER_SELECTOR).into_iter().enumerate() {
        let enter_app = app.clone();
        on(&node, "mouseenter", move |_| {
            enter_app.borrow().on_hover(index, HoverEvent::Enter)
        })?;
        let leave_app = app.clone();
        on(&node, "mouseleave", move |_| {
            leave_app.borrow().on_hover(index, HoverEvent::Leave)
        })?;
    }

    log::debug!("[web] listeners attached");
    Ok(())
}

/// Card clicks toggle the card, except clicks inside its details panel.
pub fn attach_cards(app: &SharedApp) -> Result<(), JsValue> {
    for group in CardGroup::ALL {
        for (index, card) in all(app, group.selector()).into_iter().enumerate() {
            let card_app = app.clone();
            on(&card, "click", move |event: Event| {
                let toggles = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .map_or(true, |target| DomView::is_card_toggle_click(&target));
                if toggles {
                    card_app.borrow().toggle_card(group, index);
                }
            })?;
        }
    }
    Ok(())
}

fn schedule_preloader(app: &SharedApp) {
    let delay = app.borrow().on_page_loaded();
    let hide_app = app.clone();
    Timeout::new(delay, move || hide_app.borrow().hide_preloader()).forget();
}
