//! Internationalization (i18n) support for `wocon-ui`.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of the per-locale `.json` tables)
//! - `serde_json` (parsing each table into a flat key → string map)
//! - `unic-langid` (mapping browser-style tags such as `es-MX` onto a locale)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en.json   (reference table)
//!   zh.json
//!   es.json
//!   hi.json
//! ```
//!
//! Keys are dot-namespaced (`nav.home`, `platform.web.desc`) and appear
//! verbatim in the page markup as `data-i18n="..."` or
//! `data-i18n-placeholder="..."`.
//!
//! Lookup policy: a key missing from the active table renders as the key
//! itself. There is no fallback to the reference locale, so an incomplete
//! table is visible on the page rather than silently papered over.
//!
//! To add a new locale:
//! 1. Copy `i18n/en.json` to `i18n/<code>.json` and translate each value.
//! 2. Add a variant to [`Locale`].
//! 3. Run tests to ensure completeness.
use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::error::SiteError;
use crate::view::{TranslationAttr, View};

/// Embed all locale tables under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Parsed tables for every embedded locale, loaded on first use.
///
/// A corrupt table is logged and replaced by an empty dictionary so the page
/// still renders (every node then shows its raw key).
pub static DICTIONARY: Lazy<Dictionary> = Lazy::new(|| {
    Dictionary::embedded().unwrap_or_else(|err| {
        log::error!("[i18n] {err}; rendering raw keys");
        Dictionary::default()
    })
});

/// The fixed set of languages the site ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Zh,
    Es,
    Hi,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Zh, Locale::Es, Locale::Hi];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::Es => "es",
            Locale::Hi => "hi",
        }
    }

    /// Label shown in the language picker, written in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Zh => "中文",
            Locale::Es => "Español",
            Locale::Hi => "हिंदी",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Map a BCP-47 tag onto a shipped locale by its primary language subtag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let id: LanguageIdentifier = tag.parse().ok()?;
        Self::from_code(id.language.as_str())
    }
}

/// Locale code → (translation key → display string).
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    tables: BTreeMap<String, BTreeMap<String, String>>,
}

impl Dictionary {
    /// Load and parse every embedded `i18n/<code>.json`.
    pub fn embedded() -> Result<Self, SiteError> {
        let mut tables = BTreeMap::new();
        for path in Localizations::iter() {
            let Some(code) = path.strip_suffix(".json") else {
                continue;
            };
            let Some(file) = Localizations::get(&path) else {
                continue;
            };
            let table = serde_json::from_slice(&file.data).map_err(|source| {
                SiteError::Dictionary {
                    locale: code.to_string(),
                    source,
                }
            })?;
            tables.insert(code.to_string(), table);
        }
        Ok(Self { tables })
    }

    /// Build a dictionary from literal tables (tests, headless rendering).
    pub fn from_tables<'a, I, T>(tables: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, T)>,
        T: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let tables = tables
            .into_iter()
            .map(|(code, entries)| {
                let entries = entries
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                (code.to_string(), entries)
            })
            .collect();
        Self { tables }
    }

    pub fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.tables.get(locale)?.get(key).map(String::as_str)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn keys(&self, locale: &str) -> impl Iterator<Item = &str> {
        self.tables
            .get(locale)
            .into_iter()
            .flat_map(|table| table.keys().map(String::as_str))
    }

    /// Keys defined by `reference` but absent from each other locale.
    /// Locales with a complete table are omitted from the report.
    pub fn missing_keys(&self, reference: &str) -> BTreeMap<String, Vec<String>> {
        let Some(reference_table) = self.tables.get(reference) else {
            return BTreeMap::new();
        };
        self.tables
            .iter()
            .filter(|(code, _)| code.as_str() != reference)
            .filter_map(|(code, table)| {
                let missing: Vec<String> = reference_table
                    .keys()
                    .filter(|k| !table.contains_key(*k))
                    .cloned()
                    .collect();
                (!missing.is_empty()).then(|| (code.clone(), missing))
            })
            .collect()
    }
}

/// List embedded locale codes (sorted).
pub fn available_languages() -> Vec<String> {
    DICTIONARY.locales().map(str::to_string).collect()
}

/// Holds the active locale and renders translated nodes.
#[derive(Debug, Clone)]
pub struct LocaleStore {
    active: String,
    dictionary: &'static Dictionary,
}

impl LocaleStore {
    pub fn new(code: &str) -> Self {
        Self::with_dictionary(&DICTIONARY, code)
    }

    pub fn with_dictionary(dictionary: &'static Dictionary, code: &str) -> Self {
        let mut store = Self {
            active: String::new(),
            dictionary,
        };
        store.set_locale(code);
        store
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn locale(&self) -> Option<Locale> {
        Locale::from_code(&self.active)
    }

    /// Switch the active locale and return the code that became active.
    ///
    /// Region-qualified tags collapse onto their shipped locale (`zh-CN` →
    /// `zh`). Anything else is kept verbatim, in which case every lookup
    /// degrades to the raw key.
    pub fn set_locale(&mut self, tag: &str) -> &str {
        let code = match Locale::from_code(tag).or_else(|| Locale::from_tag(tag)) {
            Some(locale) => locale.code().to_string(),
            None => {
                log::warn!("[i18n] unknown locale `{tag}`; keys will render untranslated");
                tag.to_string()
            }
        };
        self.active = code;
        &self.active
    }

    /// Translated string for `key`, or `key` itself when the active table lacks it.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.dictionary.lookup(&self.active, key).unwrap_or(key)
    }

    /// Rewrite every tagged text node and placeholder, then the document language.
    pub fn render_all<V: View + ?Sized>(&self, view: &V) {
        let lookup = |key: &str| self.translate(key).to_string();
        view.translate_nodes(TranslationAttr::Text, &lookup);
        view.translate_nodes(TranslationAttr::Placeholder, &lookup);
        view.set_document_lang(&self.active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shipped_locale_is_embedded() {
        let langs = available_languages();
        for locale in Locale::ALL {
            assert!(
                langs.iter().any(|l| l == locale.code()),
                "missing table for {}",
                locale.code()
            );
        }
    }

    #[test]
    fn basic_lookup_works() {
        let store = LocaleStore::new("en");
        assert_eq!(store.translate("nav.home"), "Home");
        assert_eq!(store.translate("platform.web.desc"), "Access Wocon directly in your browser");
    }

    #[test]
    fn each_locale_returns_its_own_string() {
        let expected = [
            ("en", "Team"),
            ("zh", "团队"),
            ("es", "Equipo"),
            ("hi", "टीम"),
        ];
        let mut store = LocaleStore::new("en");
        for (code, team) in expected {
            store.set_locale(code);
            assert_eq!(store.translate("nav.team"), team, "locale {code}");
        }
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        let store = LocaleStore::new("es");
        assert_eq!(store.translate("nav.pricing"), "nav.pricing");
    }

    #[test]
    fn region_tags_collapse_onto_shipped_locale() {
        let mut store = LocaleStore::new("en");
        assert_eq!(store.set_locale("es-MX"), "es");
        assert_eq!(store.locale(), Some(Locale::Es));
        assert_eq!(Locale::from_tag("zh-Hans-CN"), Some(Locale::Zh));
        assert_eq!(Locale::from_tag("fr-FR"), None);
        assert_eq!(Locale::from_tag("not a tag"), None);
    }

    #[test]
    fn unknown_locale_renders_raw_keys() {
        let mut store = LocaleStore::new("en");
        assert_eq!(store.set_locale("fr"), "fr");
        assert_eq!(store.locale(), None);
        assert_eq!(store.translate("nav.home"), "nav.home");
    }

    #[test]
    fn missing_keys_reports_incomplete_tables() {
        let dict = Dictionary::from_tables([
            ("en", vec![("nav.home", "Home"), ("nav.team", "Team")]),
            ("es", vec![("nav.home", "Inicio")]),
            ("zh", vec![("nav.home", "首页"), ("nav.team", "团队")]),
        ]);
        let missing = dict.missing_keys("en");
        assert_eq!(missing.len(), 1);
        assert_eq!(missing["es"], vec!["nav.team".to_string()]);
        assert!(dict.missing_keys("xx").is_empty());
    }

    #[test]
    fn injected_dictionary_is_used() {
        let dict: &'static Dictionary =
            Box::leak(Box::new(Dictionary::from_tables([("en", vec![("a.b", "A")])])));
        let store = LocaleStore::with_dictionary(dict, "en");
        assert_eq!(store.translate("a.b"), "A");
        assert_eq!(store.translate("nav.home"), "nav.home");
    }
}
