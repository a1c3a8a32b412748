//! View-binding layer.
//!
//! [`View`] names the page regions the stores and effects touch. Every
//! method must quietly do nothing when its region is missing from the page;
//! a page without a preloader simply never hides one.
//!
//! Two implementations exist: `dom::DomView` over the live document (wasm
//! only) and [`MemoryView`], an in-memory page used by tests and headless
//! rendering.

use std::cell::RefCell;

use crate::effects::{CardGroup, MenuIcon, NavbarShadow, ScrollMetrics};
use crate::theme::Theme;

/// Which attribute of a tagged node receives the translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationAttr {
    /// `data-i18n="key"`: text content is replaced.
    Text,
    /// `data-i18n-placeholder="key"`: the `placeholder` attribute is replaced.
    Placeholder,
}

impl TranslationAttr {
    pub fn marker(self) -> &'static str {
        match self {
            TranslationAttr::Text => "data-i18n",
            TranslationAttr::Placeholder => "data-i18n-placeholder",
        }
    }
}

pub trait View {
    /// Rewrite every node tagged with `attr` using `lookup(key)`.
    fn translate_nodes(&self, attr: TranslationAttr, lookup: &dyn Fn(&str) -> String);
    fn set_document_lang(&self, code: &str);
    fn set_locale_select(&self, code: &str);
    /// Populate the language picker with `(code, label)` pairs if it has no options yet.
    fn fill_locale_select(&self, options: &[(&str, &str)]);

    fn set_theme_attribute(&self, theme: Theme);
    fn set_theme_icon(&self, svg: &str);
    fn set_theme_transition(&self, active: bool);

    fn scroll_metrics(&self) -> ScrollMetrics;
    fn set_progress_width(&self, percent: f64);
    fn set_back_to_top_visible(&self, visible: bool);
    fn set_navbar_shadow(&self, shadow: NavbarShadow);
    fn scroll_to_top(&self);
    /// Smooth-scroll to the element with `id`. Returns false if it does not exist.
    fn scroll_to_element(&self, id: &str) -> bool;

    fn card_count(&self, group: CardGroup) -> usize;
    fn is_card_open(&self, group: CardGroup, index: usize) -> bool;
    /// Sets both the card's `active` class and its details panel's `show` class.
    fn set_card_open(&self, group: CardGroup, index: usize, open: bool);

    fn is_menu_open(&self) -> bool;
    fn set_menu_open(&self, open: bool);
    fn set_menu_icon(&self, icon: MenuIcon);

    fn hide_preloader(&self);
    fn set_hover_offset(&self, index: usize, offset_px: f64);
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryNode {
    pub attr: TranslationAttr,
    pub key: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSelect {
    pub value: String,
    pub options: Vec<(String, String)>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub active: bool,
    pub details_shown: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    pub open: bool,
    pub icon: MenuIcon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Element(String),
}

/// State of an in-memory page. `None` means the region is absent.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryDocument {
    pub nodes: Vec<MemoryNode>,
    pub lang: Option<String>,
    pub locale_select: Option<LocaleSelect>,
    pub theme: Option<Theme>,
    pub theme_icon: Option<String>,
    pub theme_transition: bool,
    pub metrics: ScrollMetrics,
    pub progress_width: Option<f64>,
    pub back_to_top_visible: Option<bool>,
    pub navbar_shadow: Option<NavbarShadow>,
    pub anchors: Vec<String>,
    pub scrolled_to: Option<ScrollTarget>,
    pub docs_cards: Vec<Card>,
    pub table_cards: Vec<Card>,
    pub menu: Option<Menu>,
    pub preloader_hidden: Option<bool>,
    pub hover_offsets: Vec<f64>,
}

impl MemoryDocument {
    fn cards(&self, group: CardGroup) -> &Vec<Card> {
        match group {
            CardGroup::Docs => &self.docs_cards,
            CardGroup::Table => &self.table_cards,
        }
    }

    fn cards_mut(&mut self, group: CardGroup) -> &mut Vec<Card> {
        match group {
            CardGroup::Docs => &mut self.docs_cards,
            CardGroup::Table => &mut self.table_cards,
        }
    }
}

/// In-memory page. Starts empty; builders add regions and tagged nodes.
#[derive(Debug, Default)]
pub struct MemoryView {
    doc: RefCell<MemoryDocument>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with every region of the shipped landing page.
    pub fn landing_page() -> Self {
        let mut view = Self::new()
            .with_anchor("home")
            .with_anchor("download")
            .with_anchor("team")
            .with_cards(CardGroup::Docs, 4)
            .with_cards(CardGroup::Table, 2)
            .with_hover_nodes(4)
            .with_metrics(ScrollMetrics::new(0.0, 3200.0, 800.0));
        for key in [
            "nav.home",
            "nav.download",
            "nav.team",
            "hero.title",
            "hero.subtitle",
            "hero.cta",
            "download.title",
            "button.download",
            "footer.copyright",
        ] {
            view = view.with_text(key, "");
        }
        let doc = view.doc.get_mut();
        doc.locale_select = Some(LocaleSelect {
            value: String::new(),
            options: Vec::new(),
        });
        doc.theme_icon = Some(String::new());
        doc.progress_width = Some(0.0);
        doc.back_to_top_visible = Some(false);
        doc.navbar_shadow = Some(NavbarShadow::Resting);
        doc.menu = Some(Menu {
            open: false,
            icon: MenuIcon::Hamburger,
        });
        doc.preloader_hidden = Some(false);
        view.with_placeholder("team.placeholder")
    }

    pub fn with_text(self, key: &str, initial: &str) -> Self {
        self.with_node(TranslationAttr::Text, key, initial)
    }

    pub fn with_placeholder(self, key: &str) -> Self {
        self.with_node(TranslationAttr::Placeholder, key, "")
    }

    fn with_node(mut self, attr: TranslationAttr, key: &str, initial: &str) -> Self {
        self.doc.get_mut().nodes.push(MemoryNode {
            attr,
            key: key.to_string(),
            content: initial.to_string(),
        });
        self
    }

    pub fn with_anchor(mut self, id: &str) -> Self {
        self.doc.get_mut().anchors.push(id.to_string());
        self
    }

    pub fn with_cards(mut self, group: CardGroup, count: usize) -> Self {
        *self.doc.get_mut().cards_mut(group) = vec![Card::default(); count];
        self
    }

    pub fn with_hover_nodes(mut self, count: usize) -> Self {
        self.doc.get_mut().hover_offsets = vec![0.0; count];
        self
    }

    pub fn with_metrics(mut self, metrics: ScrollMetrics) -> Self {
        self.doc.get_mut().metrics = metrics;
        self
    }

    /// Simulate the user scrolling to `offset`.
    pub fn scroll_by_user(&self, offset: f64) {
        self.doc.borrow_mut().metrics.offset = offset;
    }

    pub fn snapshot(&self) -> MemoryDocument {
        self.doc.borrow().clone()
    }

    /// Content of the first node tagged `data-i18n="key"`.
    pub fn text_of(&self, key: &str) -> Option<String> {
        self.content_of(TranslationAttr::Text, key)
    }

    /// Placeholder of the first node tagged `data-i18n-placeholder="key"`.
    pub fn placeholder_of(&self, key: &str) -> Option<String> {
        self.content_of(TranslationAttr::Placeholder, key)
    }

    fn content_of(&self, attr: TranslationAttr, key: &str) -> Option<String> {
        self.doc
            .borrow()
            .nodes
            .iter()
            .find(|n| n.attr == attr && n.key == key)
            .map(|n| n.content.clone())
    }

    pub fn card(&self, group: CardGroup, index: usize) -> Option<Card> {
        self.doc.borrow().cards(group).get(index).copied()
    }
}

impl View for MemoryView {
    fn translate_nodes(&self, attr: TranslationAttr, lookup: &dyn Fn(&str) -> String) {
        for node in self.doc.borrow_mut().nodes.iter_mut() {
            if node.attr == attr {
                node.content = lookup(&node.key);
            }
        }
    }

    fn set_document_lang(&self, code: &str) {
        self.doc.borrow_mut().lang = Some(code.to_string());
    }

    fn set_locale_select(&self, code: &str) {
        if let Some(select) = self.doc.borrow_mut().locale_select.as_mut() {
            select.value = code.to_string();
        }
    }

    fn fill_locale_select(&self, options: &[(&str, &str)]) {
        if let Some(select) = self.doc.borrow_mut().locale_select.as_mut() {
            if select.options.is_empty() {
                select.options = options
                    .iter()
                    .map(|(code, label)| (code.to_string(), label.to_string()))
                    .collect();
            }
        }
    }

    fn set_theme_attribute(&self, theme: Theme) {
        self.doc.borrow_mut().theme = Some(theme);
    }

    fn set_theme_icon(&self, svg: &str) {
        if let Some(icon) = self.doc.borrow_mut().theme_icon.as_mut() {
            *icon = svg.to_string();
        }
    }

    fn set_theme_transition(&self, active: bool) {
        self.doc.borrow_mut().theme_transition = active;
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.doc.borrow().metrics
    }

    fn set_progress_width(&self, percent: f64) {
        if let Some(width) = self.doc.borrow_mut().progress_width.as_mut() {
            *width = percent;
        }
    }

    fn set_back_to_top_visible(&self, visible: bool) {
        if let Some(shown) = self.doc.borrow_mut().back_to_top_visible.as_mut() {
            *shown = visible;
        }
    }

    fn set_navbar_shadow(&self, shadow: NavbarShadow) {
        if let Some(current) = self.doc.borrow_mut().navbar_shadow.as_mut() {
            *current = shadow;
        }
    }

    fn scroll_to_top(&self) {
        self.doc.borrow_mut().scrolled_to = Some(ScrollTarget::Top);
    }

    fn scroll_to_element(&self, id: &str) -> bool {
        let mut doc = self.doc.borrow_mut();
        if !doc.anchors.iter().any(|a| a == id) {
            return false;
        }
        doc.scrolled_to = Some(ScrollTarget::Element(id.to_string()));
        true
    }

    fn card_count(&self, group: CardGroup) -> usize {
        self.doc.borrow().cards(group).len()
    }

    fn is_card_open(&self, group: CardGroup, index: usize) -> bool {
        self.card(group, index).is_some_and(|c| c.active)
    }

    fn set_card_open(&self, group: CardGroup, index: usize, open: bool) {
        if let Some(card) = self.doc.borrow_mut().cards_mut(group).get_mut(index) {
            card.active = open;
            card.details_shown = open;
        }
    }

    fn is_menu_open(&self) -> bool {
        self.doc.borrow().menu.is_some_and(|m| m.open)
    }

    fn set_menu_open(&self, open: bool) {
        if let Some(menu) = self.doc.borrow_mut().menu.as_mut() {
            menu.open = open;
        }
    }

    fn set_menu_icon(&self, icon: MenuIcon) {
        if let Some(menu) = self.doc.borrow_mut().menu.as_mut() {
            menu.icon = icon;
        }
    }

    fn hide_preloader(&self) {
        if let Some(hidden) = self.doc.borrow_mut().preloader_hidden.as_mut() {
            *hidden = true;
        }
    }

    fn set_hover_offset(&self, index: usize, offset_px: f64) {
        if let Some(offset) = self.doc.borrow_mut().hover_offsets.get_mut(index) {
            *offset = offset_px;
        }
    }
}
