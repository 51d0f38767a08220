//! Static SEO artifacts for deployments that serve files instead of the
//! HTTP service.

use crate::catalog::Catalog;
use crate::i18n::AlternatesResolver;
use crate::seo;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub sitemap_urls: usize,
    pub feed_items: usize,
    pub content_paths: usize,
    pub files: Vec<PathBuf>,
}

/// Write `sitemap.xml`, `feed.xml` and `alternates.json` into `out_dir`,
/// creating it if needed.
pub fn write_static_artifacts(
    out_dir: &Path,
    resolver: &AlternatesResolver,
    catalog: &Catalog,
    feed_limit: usize,
    now: DateTime<Utc>,
) -> Result<ExportSummary> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let paths = catalog
        .content_paths(resolver.registry())
        .context("Catalog produced an invalid content path")?;

    let entries = seo::build_sitemap(resolver, &paths, now);
    let sitemap_path = out_dir.join("sitemap.xml");
    fs::write(&sitemap_path, seo::render_sitemap_xml(&entries)?)
        .with_context(|| format!("Failed to write {}", sitemap_path.display()))?;
    info!("Wrote {} sitemap URLs to {}", entries.len(), sitemap_path.display());

    let channel = seo::build_feed(resolver, &catalog.posts, feed_limit, now)
        .context("Catalog post does not form a valid feed link")?;
    let feed_path = out_dir.join("feed.xml");
    fs::write(&feed_path, seo::render_feed(&channel))
        .with_context(|| format!("Failed to write {}", feed_path.display()))?;
    info!("Wrote {} feed items to {}", channel.items().len(), feed_path.display());

    let mut alternates = Map::new();
    for path in &paths {
        alternates.insert(
            path.to_string(),
            serde_json::to_value(resolver.resolve(path))?,
        );
    }
    let alternates_path = out_dir.join("alternates.json");
    fs::write(
        &alternates_path,
        serde_json::to_string_pretty(&Value::Object(alternates))?,
    )
    .with_context(|| format!("Failed to write {}", alternates_path.display()))?;
    info!("Wrote alternates for {} paths to {}", paths.len(), alternates_path.display());

    Ok(ExportSummary {
        sitemap_urls: entries.len(),
        feed_items: channel.items().len(),
        content_paths: paths.len(),
        files: vec![sitemap_path, feed_path, alternates_path],
    })
}
