//! RSS 2.0 feed of the blog.
//!
//! Item and channel links are default-locale page URLs from the
//! [`AlternatesResolver`]; the feed itself is English only.

use crate::catalog::BlogPost;
use crate::i18n::{AlternatesResolver, PathError};
use chrono::{DateTime, NaiveTime, Utc};
use rss::{Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder};

pub const FEED_TITLE: &str = "SeftonLinks.com — Blog";
pub const FEED_DESCRIPTION: &str = "Links golf on the Sefton Coast: Royal Birkdale, Hillside, Formby, The Open 2026. Course reviews, tips and golf travel.";
/// Response headers for the served feed.
pub const FEED_CONTENT_TYPE: &str = "application/rss+xml; charset=utf-8";
pub const FEED_CACHE_CONTROL: &str = "public, max-age=3600, s-maxage=3600";

fn post_item(resolver: &AlternatesResolver, post: &BlogPost) -> Result<Item, PathError> {
    let url = resolver.page_url(&format!("/blog/{}", post.slug))?;
    // Posts carry a date only; publish at midnight UTC
    let published = post.date.and_time(NaiveTime::MIN).and_utc();

    Ok(ItemBuilder::default()
        .title(Some(post.title.clone()))
        .link(Some(url.clone()))
        .guid(Some(GuidBuilder::default().value(url).permalink(true).build()))
        .description(Some(post.excerpt.clone()))
        .pub_date(Some(published.to_rfc2822()))
        .build())
}

/// Blog RSS channel: newest posts first, at most `limit` items.
///
/// # Arguments
///
/// * `resolver` - Source of every link in the feed
/// * `posts` - Posts in any order
/// * `limit` - Maximum number of items
/// * `now` - Written as the channel's `lastBuildDate`
///
/// # Returns
///
/// The channel, or the first post slug that does not form a page path.
pub fn build_feed(
    resolver: &AlternatesResolver,
    posts: &[BlogPost],
    limit: usize,
    now: DateTime<Utc>,
) -> Result<Channel, PathError> {
    let mut newest: Vec<&BlogPost> = posts.iter().collect();
    newest.sort_by(|a, b| b.date.cmp(&a.date));

    let items: Vec<Item> = newest
        .into_iter()
        .take(limit)
        .map(|post| post_item(resolver, post))
        .collect::<Result<_, _>>()?;

    Ok(ChannelBuilder::default()
        .title(FEED_TITLE.to_string())
        .link(resolver.page_url("/blog")?)
        .description(FEED_DESCRIPTION.to_string())
        .language(Some("en-gb".to_string()))
        .last_build_date(Some(now.to_rfc2822()))
        .items(items)
        .build())
}

/// Serialise the channel as an RSS XML document.
pub fn render_feed(channel: &Channel) -> String {
    channel.to_string()
}
