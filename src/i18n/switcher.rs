//! Language switcher back-end.
//!
//! Offers one link per locale for the page currently being viewed. Every
//! href comes straight from the alternates resolver, so it is byte-identical
//! to the URL the sitemap and page metadata emit for the same page.

use crate::i18n::{split_locale_path, AlternatesResolver, PathError};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitcherLink {
    pub locale: &'static str,
    pub label: String,
    pub native_name: &'static str,
    pub href: String,
    pub active: bool,
}

pub struct LanguageSwitcher<'a> {
    resolver: &'a AlternatesResolver,
}

impl<'a> LanguageSwitcher<'a> {
    pub fn new(resolver: &'a AlternatesResolver) -> Self {
        Self { resolver }
    }

    /// Links for every registered locale, in registry order.
    ///
    /// `request_path` is the browser path, with or without a locale prefix.
    /// Aliases and `x-default` are not offered.
    pub fn links(&self, request_path: &str) -> Result<Vec<SwitcherLink>, PathError> {
        let registry = self.resolver.registry();
        let (current, path) = split_locale_path(registry, request_path)?;
        let alternates = self.resolver.resolve(&path);

        Ok(registry
            .locales()
            .iter()
            .filter_map(|locale| {
                alternates.get(locale.code).map(|href| SwitcherLink {
                    locale: locale.code,
                    label: locale.label(),
                    native_name: locale.native_name,
                    href: href.to_string(),
                    active: locale.code == current.code,
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::registry::test_registry;
    use std::sync::Arc;

    fn resolver() -> AlternatesResolver {
        AlternatesResolver::new("https://example.test", Arc::new(test_registry()))
    }

    #[test]
    fn test_links_cover_every_locale_once() {
        let resolver = resolver();
        let links = LanguageSwitcher::new(&resolver)
            .links("/courses/hillside")
            .unwrap();

        let codes: Vec<_> = links.iter().map(|l| l.locale).collect();
        assert_eq!(codes, vec!["en", "de", "ja"]);
    }

    #[test]
    fn test_active_link_follows_prefix() {
        let resolver = resolver();
        let links = LanguageSwitcher::new(&resolver)
            .links("/ja/courses/hillside")
            .unwrap();

        let active: Vec<_> = links.iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].locale, "ja");
        assert_eq!(active[0].label, "JA");
    }

    #[test]
    fn test_hrefs_match_resolver_exactly() {
        let resolver = resolver();
        let links = LanguageSwitcher::new(&resolver)
            .links("/de/itineraries")
            .unwrap();
        let alternates = resolver.resolve_str("/itineraries").unwrap();

        for link in &links {
            assert_eq!(Some(link.href.as_str()), alternates.get(link.locale));
        }
        assert_eq!(links[0].href, "https://example.test/itineraries");
        assert_eq!(links[1].href, "https://example.test/de/itineraries");
    }

    #[test]
    fn test_home_page_links() {
        let resolver = resolver();
        let links = LanguageSwitcher::new(&resolver).links("/de").unwrap();

        assert_eq!(links[0].href, "https://example.test");
        assert_eq!(links[1].href, "https://example.test/de");
        assert!(links[1].active);
    }

    #[test]
    fn test_invalid_request_path_is_rejected() {
        let resolver = resolver();
        assert!(LanguageSwitcher::new(&resolver).links("courses").is_err());
    }
}
