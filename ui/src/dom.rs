//! [`View`] over the live document (`web-sys`).
//!
//! Nothing is cached: each call re-queries the document, so markup added
//! after start-up is picked up on the next event. A missing element is a
//! silent no-op, logged at `trace`.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlOptionElement, HtmlSelectElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollToOptions, Window,
};

use crate::effects::{CardGroup, MenuIcon, NavbarShadow, ScrollMetrics};
use crate::theme::Theme;
use crate::view::{TranslationAttr, View};

const LANGUAGE_SELECT_ID: &str = "language-select";
const PROGRESS_ID: &str = "scroll-progress";
const BACK_TO_TOP_ID: &str = "back-to-top";
const PRELOADER_ID: &str = "preloader";
const NAV_MENU_ID: &str = "nav-menu";
const MENU_TOGGLE_ID: &str = "menu-toggle";
const NAVBAR_SELECTOR: &str = ".navbar";
const THEME_ICON_SELECTOR: &str = ".theme-icon";
const CARD_DETAILS_SELECTOR: &str = ".card-details";
pub const HOVER_SELECTOR: &str = ".hover-lift";

#[derive(Debug, Clone)]
pub struct DomView {
    window: Window,
    document: Document,
}

impl DomView {
    /// `None` outside a browsing context (e.g. a worker).
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        let found = self.document.get_element_by_id(id);
        if found.is_none() {
            log::trace!("[dom] #{id} not on page");
        }
        found
    }

    fn html_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.by_id(id)?.dyn_into().ok()
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    /// All elements matching `selector`, in document order.
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn card(&self, group: CardGroup, index: usize) -> Option<Element> {
        self.query_all(group.selector()).into_iter().nth(index)
    }

    /// Whether a click on `target` should toggle its card. Clicks on
    /// controls inside the revealed details panel are left alone.
    pub fn is_card_toggle_click(target: &Element) -> bool {
        !matches!(target.closest(CARD_DETAILS_SELECTOR), Ok(Some(_)))
    }

    fn set_class(element: &Element, class: &str, on: bool) {
        let _ = element.class_list().toggle_with_force(class, on);
    }
}

impl View for DomView {
    fn translate_nodes(&self, attr: TranslationAttr, lookup: &dyn Fn(&str) -> String) {
        let marker = attr.marker();
        for element in self.query_all(&format!("[{marker}]")) {
            let Some(key) = element.get_attribute(marker) else {
                continue;
            };
            let text = lookup(&key);
            match attr {
                TranslationAttr::Text => element.set_text_content(Some(&text)),
                TranslationAttr::Placeholder => {
                    let _ = element.set_attribute("placeholder", &text);
                }
            }
        }
    }

    fn set_document_lang(&self, code: &str) {
        if let Some(root) = self.root() {
            let _ = root.set_attribute("lang", code);
        }
    }

    fn set_locale_select(&self, code: &str) {
        if let Some(select) = self
            .by_id(LANGUAGE_SELECT_ID)
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
        {
            select.set_value(code);
        }
    }

    fn fill_locale_select(&self, options: &[(&str, &str)]) {
        let Some(select) = self
            .by_id(LANGUAGE_SELECT_ID)
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
        else {
            return;
        };
        if select.length() > 0 {
            return;
        }
        for (code, label) in options {
            if let Ok(option) = HtmlOptionElement::new_with_text_and_value(label, code) {
                let _ = select.append_child(&option);
            }
        }
    }

    fn set_theme_attribute(&self, theme: Theme) {
        if let Some(root) = self.root() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }

    fn set_theme_icon(&self, svg: &str) {
        if let Some(icon) = self.query(THEME_ICON_SELECTOR) {
            icon.set_inner_html(svg);
        }
    }

    fn set_theme_transition(&self, active: bool) {
        if let Some(root) = self.root() {
            Self::set_class(&root, "theme-transition", active);
        }
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        let offset = self.window.scroll_y().unwrap_or(0.0);
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let scroll_height = self
            .root()
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(0.0);
        ScrollMetrics::new(offset, scroll_height, viewport_height)
    }

    fn set_progress_width(&self, percent: f64) {
        if let Some(bar) = self.html_by_id(PROGRESS_ID) {
            let _ = bar.style().set_property("width", &format!("{percent}%"));
        }
    }

    fn set_back_to_top_visible(&self, visible: bool) {
        if let Some(button) = self.by_id(BACK_TO_TOP_ID) {
            Self::set_class(&button, "visible", visible);
        }
    }

    fn set_navbar_shadow(&self, shadow: NavbarShadow) {
        if let Some(navbar) = self
            .query(NAVBAR_SELECTOR)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = navbar.style().set_property("box-shadow", shadow.css());
        }
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_to_element(&self, id: &str) -> bool {
        let Some(target) = self.by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn card_count(&self, group: CardGroup) -> usize {
        self.query_all(group.selector()).len()
    }

    fn is_card_open(&self, group: CardGroup, index: usize) -> bool {
        self.card(group, index)
            .is_some_and(|card| card.class_list().contains("active"))
    }

    fn set_card_open(&self, group: CardGroup, index: usize, open: bool) {
        let Some(card) = self.card(group, index) else {
            return;
        };
        Self::set_class(&card, "active", open);
        if let Ok(Some(details)) = card.query_selector(CARD_DETAILS_SELECTOR) {
            Self::set_class(&details, "show", open);
        }
    }

    fn is_menu_open(&self) -> bool {
        self.by_id(NAV_MENU_ID)
            .is_some_and(|menu| menu.class_list().contains("open"))
    }

    fn set_menu_open(&self, open: bool) {
        if let Some(menu) = self.by_id(NAV_MENU_ID) {
            Self::set_class(&menu, "open", open);
        }
    }

    fn set_menu_icon(&self, icon: MenuIcon) {
        let path = self
            .by_id(MENU_TOGGLE_ID)
            .and_then(|toggle| toggle.query_selector("svg path").ok().flatten());
        if let Some(path) = path {
            let _ = path.set_attribute("d", icon.path());
        }
    }

    fn hide_preloader(&self) {
        if let Some(preloader) = self.by_id(PRELOADER_ID) {
            Self::set_class(&preloader, "hidden", true);
        }
    }

    fn set_hover_offset(&self, index: usize, offset_px: f64) {
        let node = self
            .query_all(HOVER_SELECTOR)
            .into_iter()
            .nth(index)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if let Some(node) = node {
            let _ = node
                .style()
                .set_property("transform", &format!("translateY({offset_px}px)"));
        }
    }
}
