use anyhow::Result;
use chrono::Utc;
use sefton_links::catalog::Catalog;
use sefton_links::config::Config;
use sefton_links::export::write_static_artifacts;
use sefton_links::i18n::{AlternatesResolver, LocaleRegistry};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sefton_links=info".parse()?),
        )
        .init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("public"));

    let config = Config::from_env()?;
    let catalog = Catalog::load_configured(config.catalog_path.as_deref())?;
    let resolver = AlternatesResolver::new(config.site_origin.clone(), LocaleRegistry::shared());

    info!("Exporting static SEO artifacts to {}", out_dir.display());
    let summary =
        write_static_artifacts(&out_dir, &resolver, &catalog, config.feed_limit, Utc::now())?;

    println!(
        "✓ Exported {} sitemap URLs, {} feed items and alternates for {} paths to {}",
        summary.sitemap_urls,
        summary.feed_items,
        summary.content_paths,
        out_dir.display()
    );

    Ok(())
}
