/*!
Page contract lint for the shipped landing page.

Purpose:
- Ensure the ids, classes and attributes the wasm controller looks up remain
  present in `web/index.html` and styled in `web/assets/main.css`.
- Ensure every `data-i18n` / `data-i18n-placeholder` key used by the markup
  exists in the reference locale table, so no node ever shows its raw key
  in English.

How it works:
- Both files are embedded with `include_str!` and checked with substring
  scans; a renamed selector fails here instead of silently breaking an effect.
- If you intentionally rename a region, update `ui/src/dom.rs`, the markup
  and the lists below together.
*/

use std::collections::BTreeSet;

use ui::effects::{CardGroup, MenuIcon};
use ui::i18n::Dictionary;

const INDEX_HTML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/index.html"));
const MAIN_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));

/// Markup hooks the controller depends on.
const REQUIRED_MARKUP: &[&str] = &[
    r#"id="preloader""#,
    r#"id="scroll-progress""#,
    r#"id="back-to-top""#,
    r#"id="language-select""#,
    r#"id="nav-menu""#,
    r#"id="menu-toggle""#,
    r#"class="navbar""#,
    r#"class="theme-icon""#,
    "theme-toggle",
    "nav-link",
    "card-details",
    "hover-lift",
    r#"data-scroll-target="download""#,
    r#"id="download""#,
];

/// Selectors the controller toggles; each needs a rule or the effect is invisible.
const REQUIRED_SELECTORS: &[&str] = &[
    "[data-theme=\"dark\"]",
    ".theme-transition",
    "#preloader.hidden",
    "#back-to-top.visible",
    ".card-details.show",
    ".nav-menu.open",
    ".docs-card.active",
    ".table-card.active",
    "#scroll-progress",
    "@media (max-width: 768px)",
];

/// Values of every `attr="..."` occurrence in the page.
fn attribute_values(html: &str, attr: &str) -> BTreeSet<String> {
    let needle = format!("{attr}=\"");
    let mut values = BTreeSet::new();
    let mut rest = html;
    while let Some(pos) = rest.find(&needle) {
        let start = pos + needle.len();
        let Some(len) = rest[start..].find('"') else {
            break;
        };
        values.insert(rest[start..start + len].to_string());
        rest = &rest[start + len..];
    }
    values
}

#[test]
fn page_contains_required_hooks() {
    let missing: Vec<_> = REQUIRED_MARKUP
        .iter()
        .filter(|hook| !INDEX_HTML.contains(*hook))
        .collect();
    assert!(missing.is_empty(), "index.html lost hooks: {missing:?}");
}

#[test]
fn stylesheet_styles_every_toggled_state() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !MAIN_CSS.contains(*sel))
        .collect();
    assert!(missing.is_empty(), "main.css lost selectors: {missing:?}");
}

#[test]
fn every_page_key_exists_in_reference_locale() {
    let dictionary = Dictionary::embedded().expect("embedded tables parse");
    let mut keys = attribute_values(INDEX_HTML, "data-i18n");
    keys.extend(attribute_values(INDEX_HTML, "data-i18n-placeholder"));
    assert!(!keys.is_empty(), "no translatable nodes found in index.html");

    let missing: Vec<_> = keys
        .iter()
        .filter(|k| dictionary.lookup("en", k).is_none())
        .collect();
    assert!(missing.is_empty(), "keys missing from en.json: {missing:?}");
}

#[test]
fn both_card_groups_are_on_the_page() {
    for group in CardGroup::ALL {
        let class = group.selector().trim_start_matches('.');
        assert!(
            INDEX_HTML.matches(&format!("class=\"{class}")).count() >= 2,
            "card group {group:?} needs at least two cards"
        );
    }
}

#[test]
fn links_inside_cards_never_jump_to_the_top() {
    assert!(
        !INDEX_HTML.contains(r##"href="#""##),
        "bare `#` links scroll the page back to the top"
    );
}

#[test]
fn menu_toggle_starts_with_hamburger_glyph() {
    assert!(INDEX_HTML.contains(MenuIcon::Hamburger.path()));
}

#[test]
fn attribute_scan_handles_multiple_occurrences() {
    let html = r#"<a data-i18n="a.b">x</a><span data-i18n="c.d"></span><i data-i18n-placeholder="e.f">"#;
    let values = attribute_values(html, "data-i18n");
    assert_eq!(
        values.into_iter().collect::<Vec<_>>(),
        vec!["a.b".to_string(), "c.d".to_string()]
    );
}
