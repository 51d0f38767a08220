//! Search-engine facing output: page head metadata, sitemap, RSS feed and
//! schema.org JSON-LD.
//!
//! Anything that emits a locale URL takes an [`AlternatesResolver`] rather
//! than building URLs itself.
//!
//! [`AlternatesResolver`]: crate::i18n::AlternatesResolver

pub mod feed;
pub mod metadata;
pub mod schema;
pub mod sitemap;

pub use feed::{build_feed, render_feed};
pub use metadata::PageMetadata;
pub use sitemap::{build_sitemap, render_sitemap_xml, ChangeFrequency, SitemapEntry};
