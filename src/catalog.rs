//! Content catalog: read-only courses, blog posts, itineraries and condition
//! reports, keyed by stable slugs.
//!
//! The bundled catalog is compiled in from `data/catalog.json`; a different
//! file can be supplied with `CATALOG_PATH`. Either way the catalog is
//! validated once at load and never mutated afterwards.

use crate::conditions::CourseCondition;
use crate::i18n::{is_valid_segment, ContentPath, LocaleRegistry, PathError};
use crate::planner::{BudgetTier, SkillTier};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::info;

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// Pages that exist independently of catalog records, home first.
pub const STATIC_PAGES: &[&str] = &[
    "",
    "/courses",
    "/the-open-2026",
    "/itineraries",
    "/conditions",
    "/scorecard",
    "/tee-times",
    "/accommodation",
    "/contact",
    "/privacy",
    "/terms",
    "/blog",
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{kind} slug {slug:?} is not a valid URL segment")]
    InvalidSlug { kind: &'static str, slug: String },

    #[error("duplicate {kind} '{key}'")]
    Duplicate { kind: &'static str, key: String },

    #[error("itinerary '{0}' has zero days")]
    ZeroDays(String),

    #[error("itinerary '{plan}' references unknown course '{course}'")]
    UnknownCourse { plan: String, course: String },

    #[error("post '{post}' references unknown category '{category}'")]
    UnknownCategory { post: String, category: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Accessible,
    Moderate,
    Challenging,
    Championship,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub slug: String,
    pub name: String,
    pub short_name: String,
    pub tagline: String,
    pub address: String,
    pub postcode: String,
    pub latitude: f64,
    pub longitude: f64,
    pub par: u32,
    pub yardage: u32,
    pub course_rating: f64,
    pub slope_rating: u32,
    pub green_fee_from: u32,
    pub green_fee_to: u32,
    pub difficulty: Difficulty,
    pub open_championship: bool,
    pub featured: bool,
    pub website: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Course {
    /// Green fee range for display, e.g. "£300–£350".
    pub fn green_fee_range(&self) -> String {
        format!("£{}–£{}", self.green_fee_from, self.green_fee_to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogCategory {
    pub slug: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category_slug: String,
    pub date: NaiveDate,
    pub reading_time: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl BlogPost {
    /// Human date as shown on cards, e.g. "3 Feb 2026".
    pub fn display_date(&self) -> String {
        self.date.format("%-d %b %Y").to_string()
    }
}

/// A pre-built multi-day trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryPlan {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub days: u32,
    pub budget: BudgetTier,
    pub skill: SkillTier,
    /// Course slugs in playing order
    pub courses: Vec<String>,
    pub estimated_cost: String,
    pub description: String,
    pub accommodation: String,
    pub dining: String,
}

/// Manually maintained morning report for one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionReport {
    pub slug: String,
    pub name: String,
    pub condition: CourseCondition,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub courses: Vec<Course>,
    #[serde(default)]
    pub categories: Vec<BlogCategory>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub itineraries: Vec<ItineraryPlan>,
    #[serde(default)]
    pub conditions: Vec<ConditionReport>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// Parse and validate a catalog document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read a catalog file from disk, then parse and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load from `path` when given, otherwise the bundled catalog.
    pub fn load_configured(path: Option<&str>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => Self::load(path)?,
            None => Self::bundled()?,
        };

        info!(
            "Loaded catalog: {} courses, {} posts, {} itineraries, {} condition reports",
            catalog.courses.len(),
            catalog.posts.len(),
            catalog.itineraries.len(),
            catalog.conditions.len()
        );

        Ok(catalog)
    }

    /// Check slugs, uniqueness and cross references.
    ///
    /// Course, post and category slugs become page URLs, so each must be a
    /// valid content path segment.
    pub fn validate(&self) -> Result<(), CatalogError> {
        ensure_url_safe("course", self.courses.iter().map(|c| c.slug.as_str()))?;
        ensure_url_safe("category", self.categories.iter().map(|c| c.slug.as_str()))?;
        ensure_url_safe("post", self.posts.iter().map(|p| p.slug.as_str()))?;

        ensure_unique("course", self.courses.iter().map(|c| c.slug.as_str()))?;
        ensure_unique("category", self.categories.iter().map(|c| c.slug.as_str()))?;
        ensure_unique("post", self.posts.iter().map(|p| p.slug.as_str()))?;
        ensure_unique("itinerary", self.itineraries.iter().map(|i| i.id.as_str()))?;
        ensure_unique("condition report", self.conditions.iter().map(|c| c.slug.as_str()))?;

        for plan in &self.itineraries {
            if plan.days == 0 {
                return Err(CatalogError::ZeroDays(plan.id.clone()));
            }
            if let Some(unknown) = plan.courses.iter().find(|slug| self.course(slug).is_none()) {
                return Err(CatalogError::UnknownCourse {
                    plan: plan.id.clone(),
                    course: unknown.clone(),
                });
            }
        }

        for post in &self.posts {
            if self.category(&post.category_slug).is_none() {
                return Err(CatalogError::UnknownCategory {
                    post: post.slug.clone(),
                    category: post.category_slug.clone(),
                });
            }
        }

        Ok(())
    }

    /// Look up a course by slug.
    ///
    /// # Arguments
    /// * `slug` - The course slug, as used in `/courses/{slug}`
    ///
    /// # Returns
    /// The course, or `None` when no course has that slug
    pub fn course(&self, slug: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.slug == slug)
    }

    /// Courses flagged for the home page, in catalog order.
    pub fn featured_courses(&self) -> Vec<&Course> {
        self.courses.iter().filter(|c| c.featured).collect()
    }

    pub fn category(&self, slug: &str) -> Option<&BlogCategory> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Look up a blog post by slug.
    pub fn post(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Posts filed under `category_slug`, in catalog order. An unknown
    /// category yields an empty list.
    pub fn posts_by_category(&self, category_slug: &str) -> Vec<&BlogPost> {
        self.posts
            .iter()
            .filter(|p| p.category_slug == category_slug)
            .collect()
    }

    /// Posts sorted by date, newest first. Same-day posts keep catalog order.
    pub fn posts_newest_first(&self) -> Vec<&BlogPost> {
        let mut posts: Vec<&BlogPost> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    /// Look up an itinerary plan by id.
    pub fn itinerary(&self, id: &str) -> Option<&ItineraryPlan> {
        self.itineraries.iter().find(|i| i.id == id)
    }

    /// Every canonical page path: static pages, then course, post and
    /// category pages in catalog order.
    pub fn content_paths(&self, registry: &LocaleRegistry) -> Result<Vec<ContentPath>, PathError> {
        let courses = self.courses.iter().map(|c| format!("/courses/{}", c.slug));
        let posts = self.posts.iter().map(|p| format!("/blog/{}", p.slug));
        let categories = self
            .categories
            .iter()
            .map(|c| format!("/blog/category/{}", c.slug));

        STATIC_PAGES
            .iter()
            .map(|page| page.to_string())
            .chain(courses)
            .chain(posts)
            .chain(categories)
            .map(|raw| ContentPath::parse(registry, &raw))
            .collect()
    }
}

fn ensure_url_safe<'a>(
    kind: &'static str,
    mut slugs: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    match slugs.find(|slug| !is_valid_segment(slug)) {
        Some(slug) => Err(CatalogError::InvalidSlug {
            kind,
            slug: slug.to_string(),
        }),
        None => Ok(()),
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(CatalogError::Duplicate {
                kind,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}
