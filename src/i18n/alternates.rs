//! URL alternates resolver.
//!
//! This is the only place that knows how a content path maps to a
//! locale-qualified URL. Page metadata, the sitemap, the language switcher,
//! the feed and the JSON-LD emitters all get their URLs from
//! [`AlternatesResolver`]; none of them prefix paths themselves.

use crate::i18n::{ContentPath, LocaleRegistry, PathError, X_DEFAULT};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;

/// Every hreflang key for one content path, mapped to its absolute URL.
///
/// Keys are unique and ordered: default locale, its aliases, the prefixed
/// locales in registry order, then `x-default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternatesMap {
    canonical: String,
    entries: Vec<(&'static str, String)>,
}

impl AlternatesMap {
    fn with_capacity(canonical: String, capacity: usize) -> Self {
        Self {
            canonical,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// First write wins. The registry resolves aliases before any map is
    /// built, so a repeated key never carries a different URL.
    fn insert(&mut self, hreflang: &'static str, url: String) {
        if self.entries.iter().any(|(key, _)| *key == hreflang) {
            return;
        }
        self.entries.push((hreflang, url));
    }

    /// URL for one hreflang key. Keys match exactly, so `EN-GB` is not
    /// `en-GB`.
    pub fn get(&self, hreflang: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == hreflang)
            .map(|(_, url)| url.as_str())
    }

    /// Unprefixed URL of the default locale.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// `(hreflang, url)` pairs in map order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(key, url)| (*key, url.as_str()))
    }

    /// Keys only, in map order.
    pub fn hreflangs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Number of hreflang keys, including aliases and `x-default`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AlternatesMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, url) in &self.entries {
            map.serialize_entry(key, url)?;
        }
        map.end()
    }
}

/// Builds [`AlternatesMap`]s for a fixed origin and locale registry.
#[derive(Debug, Clone)]
pub struct AlternatesResolver {
    origin: String,
    registry: Arc<LocaleRegistry>,
}

impl AlternatesResolver {
    /// `origin` is scheme + host (e.g. `https://www.seftonlinks.com`);
    /// trailing slashes are dropped.
    pub fn new(origin: impl Into<String>, registry: Arc<LocaleRegistry>) -> Self {
        let origin = origin.into();
        let origin = origin.trim_end_matches('/').to_string();
        Self { origin, registry }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Validate a raw path against this resolver's registry.
    pub fn parse_path(&self, raw: &str) -> Result<ContentPath, PathError> {
        ContentPath::parse(&self.registry, raw)
    }

    /// The one URL rule: the default locale is unprefixed, every other
    /// locale gets a leading `/{code}` segment.
    fn locale_qualified(&self, prefix: Option<&str>, path: &ContentPath) -> String {
        match prefix {
            Some(code) => format!("{}/{}{}", self.origin, code, path.as_str()),
            None => format!("{}{}", self.origin, path.as_str()),
        }
    }

    /// Resolve every locale URL for `path`. Total: never fails, never omits a key.
    pub fn resolve(&self, path: &ContentPath) -> AlternatesMap {
        let canonical = self.locale_qualified(None, path);
        let capacity = self.registry.locales().len() + self.registry.aliases().len() + 1;
        let mut map = AlternatesMap::with_capacity(canonical.clone(), capacity);

        map.insert(self.registry.default_locale().code, canonical.clone());
        for &alias in self.registry.aliases() {
            map.insert(alias, canonical.clone());
        }
        for locale in self.registry.non_default() {
            map.insert(locale.code, self.locale_qualified(Some(locale.code), path));
        }
        map.insert(X_DEFAULT, canonical);

        map
    }

    /// Parse then resolve.
    pub fn resolve_str(&self, raw: &str) -> Result<AlternatesMap, PathError> {
        Ok(self.resolve(&self.parse_path(raw)?))
    }

    /// URL of `path` in one locale (or alias / `x-default`).
    pub fn url_for(&self, path: &ContentPath, hreflang: &str) -> Option<String> {
        self.resolve(path).get(hreflang).map(str::to_owned)
    }

    /// Unprefixed default-locale URL of `path`, without building the full map.
    pub fn canonical_url(&self, path: &ContentPath) -> String {
        self.locale_qualified(None, path)
    }

    /// Parse `raw` and return its default-locale URL.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let url = resolver.page_url("/blog/links-golf-for-beginners")?;
    /// assert_eq!(url, "https://www.seftonlinks.com/blog/links-golf-for-beginners");
    /// ```
    pub fn page_url(&self, raw: &str) -> Result<String, PathError> {
        Ok(self.canonical_url(&self.parse_path(raw)?))
    }

    /// URL of `path` as seen from a page in `locale`. Unknown codes and
    /// aliases fall back to the default locale, so this never fails.
    pub fn localized_url(&self, path: &ContentPath, locale: &str) -> String {
        let locale = self.registry.resolve_or_default(Some(locale));
        if self.registry.is_default(locale.code) {
            self.locale_qualified(None, path)
        } else {
            self.locale_qualified(Some(locale.code), path)
        }
    }
}
