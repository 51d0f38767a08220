//! Blog search and category counts.

use crate::catalog::BlogPost;
use std::collections::HashMap;

/// Posts whose title or excerpt contains `query`, ignoring case. A blank
/// query returns every post. Input order is kept.
pub fn search_posts<'a>(posts: &'a [BlogPost], query: &str) -> Vec<&'a BlogPost> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return posts.iter().collect();
    }

    posts
        .iter()
        .filter(|post| {
            post.title.to_lowercase().contains(&query)
                || post.excerpt.to_lowercase().contains(&query)
        })
        .collect()
}

/// Number of posts filed under each category slug. Categories with no
/// posts are absent rather than zero.
pub fn post_count_by_category(posts: &[BlogPost]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for post in posts {
        *counts.entry(post.category_slug.as_str()).or_insert(0) += 1;
    }
    counts
}
