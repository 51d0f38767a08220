//! sitemaps.org XML with `xhtml:link` hreflang alternates.

use crate::i18n::{AlternatesMap, AlternatesResolver, ContentPath};
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use std::io::Cursor;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
    pub alternates: AlternatesMap,
}

/// Crawl priority and change frequency by page type.
fn page_weight(path: &ContentPath) -> (f32, ChangeFrequency) {
    let segments: Vec<&str> = path.segments().collect();

    match segments.as_slice() {
        [] => (1.0, ChangeFrequency::Weekly),
        ["the-open-2026"] => (0.95, ChangeFrequency::Monthly),
        ["conditions"] => (0.8, ChangeFrequency::Daily),
        ["courses", _] => (0.85, ChangeFrequency::Monthly),
        ["blog", "category", ..] => (0.7, ChangeFrequency::Monthly),
        ["blog", _] => (0.6, ChangeFrequency::Monthly),
        _ => (0.7, ChangeFrequency::Monthly),
    }
}

/// One entry per locale URL of every path: the default URL first, then each
/// prefixed locale. All entries for a path share the same alternates map.
pub fn build_sitemap(
    resolver: &AlternatesResolver,
    paths: &[ContentPath],
    last_modified: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let registry = resolver.registry();
    let mut entries = Vec::with_capacity(paths.len() * registry.locales().len());

    for path in paths {
        let alternates = resolver.resolve(path);
        let (priority, change_frequency) = page_weight(path);

        let urls = std::iter::once(alternates.canonical()).chain(
            registry
                .non_default()
                .filter_map(|locale| alternates.get(locale.code)),
        );

        for url in urls {
            entries.push(SitemapEntry {
                url: url.to_string(),
                last_modified,
                change_frequency,
                priority,
                alternates: alternates.clone(),
            });
        }
    }

    entries
}

pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    urlset.push_attribute(("xmlns:xhtml", XHTML_NS));
    writer.write_event(Event::Start(urlset))?;

    for entry in entries {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &entry.url)?;

        for (hreflang, href) in entry.alternates.iter() {
            let mut link = BytesStart::new("xhtml:link");
            link.push_attribute(("rel", "alternate"));
            link.push_attribute(("hreflang", hreflang));
            link.push_attribute(("href", href));
            writer.write_event(Event::Empty(link))?;
        }

        write_text_element(
            &mut writer,
            "lastmod",
            &entry
                .last_modified
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        )?;
        write_text_element(&mut writer, "changefreq", entry.change_frequency.as_str())?;
        write_text_element(&mut writer, "priority", &format!("{:.2}", entry.priority))?;

        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    String::from_utf8(writer.into_inner().into_inner()).context("Sitemap XML is not valid UTF-8")
}

fn write_text_element(writer: &mut Writer<Cursor<Vec<u8>>>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::i18n::registry::test_registry;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn resolver() -> AlternatesResolver {
        AlternatesResolver::new("https://example.test", Arc::new(test_registry()))
    }

    fn paths(resolver: &AlternatesResolver, raw: &[&str]) -> Vec<ContentPath> {
        raw.iter().map(|r| resolver.parse_path(r).unwrap()).collect()
    }

    fn modified() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 20, 7, 30, 0).unwrap()
    }

    // ==================== Weight Tests ====================

    #[test]
    fn test_page_weights() {
        let resolver = resolver();
        let cases = [
            ("", 1.0, ChangeFrequency::Weekly),
            ("/the-open-2026", 0.95, ChangeFrequency::Monthly),
            ("/conditions", 0.8, ChangeFrequency::Daily),
            ("/courses/hillside", 0.85, ChangeFrequency::Monthly),
            ("/courses", 0.7, ChangeFrequency::Monthly),
            ("/blog/hillside-golf-club-review", 0.6, ChangeFrequency::Monthly),
            ("/blog/category/course-reviews", 0.7, ChangeFrequency::Monthly),
            ("/terms", 0.7, ChangeFrequency::Monthly),
        ];

        for (raw, priority, frequency) in cases {
            let path = resolver.parse_path(raw).unwrap();
            assert_eq!(page_weight(&path), (priority, frequency), "weight for {raw:?}");
        }
    }

    // ==================== Build Tests ====================

    #[test]
    fn test_one_entry_per_locale_url() {
        let resolver = resolver();
        let entries = build_sitemap(&resolver, &paths(&resolver, &["", "/courses"]), modified());

        let urls: Vec<_> = entries.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://example.test",
                "https://example.test/de",
                "https://example.test/ja",
                "https://example.test/courses",
                "https://example.test/de/courses",
                "https://example.test/ja/courses",
            ]
        );
    }

    #[test]
    fn test_entries_share_resolver_alternates() {
        let resolver = resolver();
        let entries = build_sitemap(
            &resolver,
            &paths(&resolver, &["/courses/hillside"]),
            modified(),
        );
        let expected = resolver.resolve_str("/courses/hillside").unwrap();

        for entry in &entries {
            assert_eq!(entry.alternates, expected);
            assert!(entry.alternates.iter().any(|(_, url)| url == entry.url));
        }
    }

    #[test]
    fn test_bundled_catalog_sitemap_size() {
        let resolver = resolver();
        let catalog = Catalog::bundled().unwrap();
        let content = catalog.content_paths(resolver.registry()).unwrap();
        let entries = build_sitemap(&resolver, &content, modified());

        assert_eq!(entries.len(), content.len() * 3);
    }

    // ==================== XML Tests ====================

    #[test]
    fn test_render_sitemap_xml() {
        let resolver = resolver();
        let entries = build_sitemap(&resolver, &paths(&resolver, &["/conditions"]), modified());
        let xml = render_sitemap_xml(&entries).unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"xmlns="http://www.sitemaps.org/schemas/sitemap/0.9""#));
        assert!(xml.contains(r#"xmlns:xhtml="http://www.w3.org/1999/xhtml""#));
        assert!(xml.contains("<loc>https://example.test/de/conditions</loc>"));
        assert!(xml.contains(
            r#"<xhtml:link rel="alternate" hreflang="en-GB" href="https://example.test/conditions"/>"#
        ));
        assert!(xml.contains("<lastmod>2026-02-20T07:30:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>daily</changefreq>"));
        assert!(xml.contains("<priority>0.80</priority>"));
        assert_eq!(xml.matches("<url>").count(), 3);
        assert_eq!(xml.matches("<xhtml:link").count(), 3 * 7);
    }

    #[test]
    fn test_render_escapes_text() {
        let resolver =
            AlternatesResolver::new("https://example.test/?q=a&b", Arc::new(test_registry()));
        let entries = build_sitemap(&resolver, &[ContentPath::home()], modified());
        let xml = render_sitemap_xml(&entries).unwrap();

        assert!(xml.contains("<loc>https://example.test/?q=a&amp;b</loc>"));
    }

    #[test]
    fn test_render_empty_sitemap() {
        let xml = render_sitemap_xml(&[]).unwrap();
        assert!(xml.contains("<urlset"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }
}
