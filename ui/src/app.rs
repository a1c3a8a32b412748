//! Page controller: owns the two persisted settings and dispatches events.

use crate::config::SiteConfig;
use crate::core::Storage;
use crate::effects::{anchor_target, cards, menu, CardGroup, HoverEvent, ScrollEffect};
use crate::i18n::{Locale, LocaleStore};
use crate::theme::{Theme, ThemeStore};
use crate::view::View;

pub struct App<V: View, S: Storage> {
    config: SiteConfig,
    locale: LocaleStore,
    theme: ThemeStore,
    view: V,
    storage: S,
}

impl<V: View, S: Storage> App<V, S> {
    /// Read the persisted theme and language once. Nothing is rendered until [`App::init`].
    pub fn new(config: SiteConfig, view: V, storage: S) -> Self {
        let language = storage
            .read(&config.language_storage_key)
            .unwrap_or_else(|| config.default_locale.clone());
        let theme = storage
            .read(&config.theme_storage_key)
            .map(|value| Theme::parse(&value))
            .unwrap_or_default();
        Self {
            locale: LocaleStore::new(&language),
            theme: ThemeStore::new(theme),
            config,
            view,
            storage,
        }
    }

    /// Reflect the persisted settings onto the page.
    pub fn init(&mut self) {
        log::info!(
            "[app] starting with language={} theme={}",
            self.locale.active(),
            self.theme.current()
        );
        self.apply_theme();
        let options: Vec<(&str, &str)> = Locale::ALL
            .iter()
            .map(|l| (l.code(), l.native_name()))
            .collect();
        self.view.fill_locale_select(&options);
        let language = self.locale.active().to_string();
        self.set_language(&language);
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn current_language(&self) -> &str {
        self.locale.active()
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.locale.translate(key)
    }

    /// Switch language, persist it and re-render every translated node.
    pub fn set_language(&mut self, tag: &str) {
        let code = self.locale.set_locale(tag).to_string();
        log::debug!("[i18n] language -> {code}");
        self.persist(&self.config.language_storage_key, &code);
        self.render_translations();
        self.view.set_locale_select(&code);
    }

    pub fn render_translations(&self) {
        self.locale.render_all(&self.view);
    }

    pub fn apply_theme(&self) {
        self.theme.apply(&self.view);
    }

    /// Flip the theme and start the transition animation.
    ///
    /// Returns the delay in ms after which [`App::finish_theme_transition`]
    /// should run. Earlier pending removals are not cancelled.
    pub fn toggle_theme(&mut self) -> u32 {
        self.view.set_theme_transition(true);
        let theme = self.theme.toggle();
        log::debug!("[theme] -> {theme}");
        self.persist(&self.config.theme_storage_key, theme.as_str());
        self.apply_theme();
        self.config.theme_transition_ms
    }

    pub fn finish_theme_transition(&self) {
        self.view.set_theme_transition(false);
    }

    pub fn on_scroll(&self) {
        let effect = ScrollEffect::evaluate(&self.view.scroll_metrics(), &self.config);
        self.view.set_progress_width(effect.progress_percent);
        self.view.set_back_to_top_visible(effect.back_to_top_visible);
        self.view.set_navbar_shadow(effect.navbar_shadow);
    }

    pub fn scroll_to_top(&self) {
        self.view.scroll_to_top();
    }

    /// Smooth-scroll to a section by id; returns false if it is not on the page.
    pub fn scroll_to_section(&self, id: &str) -> bool {
        self.view.scroll_to_element(id)
    }

    /// A navigation link was clicked. Returns true when the default jump
    /// must be prevented (in-page anchor).
    pub fn on_nav_link(&self, href: &str) -> bool {
        menu::close_menu(&self.view);
        match anchor_target(href) {
            Some(id) => {
                self.view.scroll_to_element(id);
                true
            }
            None => false,
        }
    }

    pub fn toggle_card(&self, group: CardGroup, index: usize) {
        cards::toggle_card(&self.view, group, index);
    }

    pub fn toggle_menu(&self) {
        menu::toggle_menu(&self.view);
    }

    /// Page finished loading. Returns the delay in ms before [`App::hide_preloader`].
    pub fn on_page_loaded(&self) -> u32 {
        self.config.preloader_delay_ms
    }

    pub fn hide_preloader(&self) {
        self.view.hide_preloader();
    }

    pub fn on_hover(&self, index: usize, event: HoverEvent) {
        self.view
            .set_hover_offset(index, event.offset(self.config.hover_lift_px));
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(err) = self.storage.write(key, value) {
            log::warn!("[app] {err}; keeping in-memory value");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryStorage;
    use crate::effects::{MenuIcon, NavbarShadow};
    use crate::error::SiteError;
    use crate::view::{MemoryView, ScrollTarget};

    fn app() -> App<MemoryView, MemoryStorage> {
        let mut app = App::new(
            SiteConfig::default(),
            MemoryView::landing_page(),
            MemoryStorage::new(),
        );
        app.init();
        app
    }

    struct RefusingStorage;

    impl Storage for RefusingStorage {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&self, key: &str, _value: &str) -> Result<(), SiteError> {
            Err(SiteError::Storage {
                key: key.to_string(),
                reason: "quota exceeded".into(),
            })
        }
    }

    #[test]
    fn init_renders_defaults() {
        let app = app();
        let doc = app.view().snapshot();
        assert_eq!(app.current_language(), "en");
        assert_eq!(doc.lang.as_deref(), Some("en"));
        assert_eq!(doc.theme, Some(Theme::Light));
        assert_eq!(doc.theme_icon, Some(Theme::Light.icon_svg()));
        let select = doc.locale_select.unwrap();
        assert_eq!(select.value, "en");
        assert_eq!(select.options.len(), 4);
        assert_eq!(app.view().text_of("nav.download").as_deref(), Some("Download"));
    }

    #[test]
    fn toggle_theme_persists_and_animates() {
        let storage = MemoryStorage::new();
        let mut app = App::new(
            SiteConfig::default(),
            MemoryView::landing_page(),
            storage.clone(),
        );
        app.init();

        let delay = app.toggle_theme();
        assert_eq!(delay, 300);
        assert!(app.view().snapshot().theme_transition);
        assert_eq!(app.view().snapshot().theme, Some(Theme::Dark));
        assert_eq!(storage.read("wocon-theme").as_deref(), Some("dark"));

        app.finish_theme_transition();
        assert!(!app.view().snapshot().theme_transition);
    }

    #[test]
    fn refused_write_keeps_in_memory_value() {
        let mut app = App::new(SiteConfig::default(), MemoryView::landing_page(), RefusingStorage);
        app.init();
        app.set_language("hi");
        app.toggle_theme();
        assert_eq!(app.current_language(), "hi");
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(app.view().text_of("nav.team").as_deref(), Some("टीम"));
    }

    #[test]
    fn scroll_updates_all_indicators() {
        let app = app();
        app.view().scroll_by_user(1200.0);
        app.on_scroll();
        let doc = app.view().snapshot();
        assert_eq!(doc.progress_width, Some(50.0));
        assert_eq!(doc.back_to_top_visible, Some(true));
        assert_eq!(doc.navbar_shadow, Some(NavbarShadow::Raised));

        app.view().scroll_by_user(10.0);
        app.on_scroll();
        let doc = app.view().snapshot();
        assert_eq!(doc.back_to_top_visible, Some(false));
        assert_eq!(doc.navbar_shadow, Some(NavbarShadow::Resting));
    }

    #[test]
    fn nav_link_scrolls_and_closes_menu() {
        let app = app();
        app.toggle_menu();
        assert!(app.view().snapshot().menu.unwrap().open);

        assert!(app.on_nav_link("#download"));
        let doc = app.view().snapshot();
        assert_eq!(doc.scrolled_to, Some(ScrollTarget::Element("download".into())));
        assert_eq!(doc.menu.unwrap().icon, MenuIcon::Hamburger);
        assert!(!doc.menu.unwrap().open);
    }

    #[test]
    fn nav_link_to_missing_section_is_still_intercepted() {
        let app = app();
        assert!(app.on_nav_link("#pricing"));
        assert_eq!(app.view().snapshot().scrolled_to, None);
        assert!(!app.on_nav_link("https://example.com"));
    }

    #[test]
    fn back_to_top_and_cta_scroll() {
        let app = app();
        assert!(app.scroll_to_section("download"));
        app.scroll_to_top();
        assert_eq!(app.view().snapshot().scrolled_to, Some(ScrollTarget::Top));
        assert!(!app.scroll_to_section("nowhere"));
    }

    #[test]
    fn preloader_hides_after_load() {
        let app = app();
        assert_eq!(app.on_page_loaded(), 500);
        assert_eq!(app.view().snapshot().preloader_hidden, Some(false));
        app.hide_preloader();
        assert_eq!(app.view().snapshot().preloader_hidden, Some(true));
    }

    #[test]
    fn config_override_drives_delays_and_keys() {
        let config = SiteConfig::from_json(
            r#"{"preloader_delay_ms": 0, "theme_storage_key": "site-theme"}"#,
        )
        .unwrap();
        let storage = MemoryStorage::new();
        let mut app = App::new(config, MemoryView::landing_page(), storage.clone());
        app.init();
        assert_eq!(app.config().preloader_delay_ms, 0);
        assert_eq!(app.on_page_loaded(), app.config().preloader_delay_ms);
        assert_eq!(app.toggle_theme(), app.config().theme_transition_ms);
        assert_eq!(storage.read("site-theme").as_deref(), Some("dark"));
        assert_eq!(storage.read("wocon-theme"), None);
    }

    #[test]
    fn hover_lifts_and_resets() {
        let app = app();
        app.on_hover(2, HoverEvent::Enter);
        assert_eq!(app.view().snapshot().hover_offsets[2], -5.0);
        app.on_hover(2, HoverEvent::Leave);
        assert_eq!(app.view().snapshot().hover_offsets[2], 0.0);
        // out of range: ignored
        app.on_hover(9, HoverEvent::Enter);
    }
}
