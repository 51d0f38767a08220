//! Per-page `<head>` metadata: canonical URL, hreflang alternates, text
//! direction and Open Graph locale.
//!
//! The canonical is the page's own locale URL. The alternates map is the
//! same for every locale of a page.

use crate::i18n::{split_locale_path, AlternatesMap, AlternatesResolver, ContentPath, PathError};
use quick_xml::escape::escape;
use serde::Serialize;

/// Head metadata for one page in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub path: ContentPath,
    /// The page's own URL in the rendered locale
    pub canonical: String,
    pub alternates: AlternatesMap,
    pub html_lang: &'static str,
    pub dir: &'static str,
    /// Open Graph locale, e.g. `de_DE`
    pub og_locale: &'static str,
}

impl PageMetadata {
    /// Build the metadata for `path` rendered in `locale`.
    ///
    /// # Arguments
    /// * `resolver` - Supplies every locale URL
    /// * `path` - The locale-free content path
    /// * `locale` - Locale the page is rendered in; unknown codes and aliases
    ///   render as the default locale
    ///
    /// # Returns
    /// Metadata whose canonical is the `locale` entry of the alternates map
    pub fn build(
        resolver: &AlternatesResolver,
        path: &ContentPath,
        locale: &str,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let locale = resolver.registry().resolve_or_default(Some(locale));
        let alternates = resolver.resolve(path);
        let canonical = alternates
            .get(locale.code)
            .unwrap_or_else(|| alternates.canonical())
            .to_string();

        Self {
            title: title.into(),
            description: description.into(),
            path: path.clone(),
            canonical,
            alternates,
            html_lang: locale.code,
            dir: if locale.rtl { "rtl" } else { "ltr" },
            og_locale: locale.og_locale,
        }
    }

    /// Build from a browser path such as `/de/courses/hillside`.
    pub fn for_request_path(
        resolver: &AlternatesResolver,
        request_path: &str,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, PathError> {
        let (locale, path) = split_locale_path(resolver.registry(), request_path)?;
        Ok(Self::build(resolver, &path, locale.code, title, description))
    }

    /// `<link>` and `<meta>` tags for the document head, one per line.
    pub fn render_head_links(&self) -> String {
        let mut lines = Vec::with_capacity(self.alternates.len() + 3);

        lines.push(format!(
            r#"<link rel="canonical" href="{}" />"#,
            escape(self.canonical.as_str())
        ));
        for (hreflang, url) in self.alternates.iter() {
            lines.push(format!(
                r#"<link rel="alternate" hreflang="{}" href="{}" />"#,
                escape(hreflang),
                escape(url)
            ));
        }
        lines.push(format!(
            r#"<meta property="og:url" content="{}" />"#,
            escape(self.canonical.as_str())
        ));
        lines.push(format!(
            r#"<meta property="og:locale" content="{}" />"#,
            escape(self.og_locale)
        ));

        lines.join("\n")
    }
}
