//! In-page anchor navigation.

/// Fragment id of an in-page link (`"#download"` → `"download"`).
///
/// Links to other pages, bare `#` and empty hrefs are not intercepted.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_links_resolve_to_ids() {
        assert_eq!(anchor_target("#download"), Some("download"));
        assert_eq!(anchor_target(" #team "), Some("team"));
    }

    #[test]
    fn other_links_pass_through() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("https://example.com/#team"), None);
        assert_eq!(anchor_target("/docs"), None);
    }
}
