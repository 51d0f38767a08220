//! Canonical, locale-independent content paths.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("content path must start with '/': {0:?}")]
    NotRooted(String),

    #[error("content path {path:?} starts with locale segment '{segment}'")]
    LocalePrefixed { path: String, segment: String },

    #[error("content path {0:?} contains an empty segment")]
    EmptySegment(String),

    #[error("content path {path:?} contains invalid segment {segment:?}")]
    InvalidSegment { path: String, segment: String },
}

static SEGMENT_REGEX: OnceLock<Regex> = OnceLock::new();

fn segment_regex() -> &'static Regex {
    SEGMENT_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9._~-]+$").expect("valid regex"))
}

/// Whether `segment` may appear between two `/` of a content path.
pub fn is_valid_segment(segment: &str) -> bool {
    segment_regex().is_match(segment)
}

/// A site path with no locale prefix, e.g. `/courses/royal-birkdale`.
///
/// Stored normalised: the home page is the empty string and no path ends in
/// `/`, so `origin + path` never produces `//` or a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ContentPath(String);

impl ContentPath {
    pub fn home() -> Self {
        Self(String::new())
    }

    /// Validate and normalise a raw path.
    ///
    /// `""` and `"/"` both mean home. A single trailing slash is trimmed.
    /// The first segment may not be a locale code or alias.
    pub fn parse(registry: &LocaleRegistry, raw: &str) -> Result<Self, PathError> {
        if raw.is_empty() || raw == "/" {
            return Ok(Self::home());
        }

        let Some(body) = raw.strip_prefix('/') else {
            return Err(PathError::NotRooted(raw.to_string()));
        };
        let body = body.strip_suffix('/').unwrap_or(body);

        for segment in body.split('/') {
            if segment.is_empty() {
                return Err(PathError::EmptySegment(raw.to_string()));
            }
            if !segment_regex().is_match(segment) {
                return Err(PathError::InvalidSegment {
                    path: raw.to_string(),
                    segment: segment.to_string(),
                });
            }
        }

        if let Some(first) = body.split('/').next() {
            if registry.is_locale_segment(first) {
                return Err(PathError::LocalePrefixed {
                    path: raw.to_string(),
                    segment: first.to_string(),
                });
            }
        }

        Ok(Self(format!("/{}", body)))
    }

    /// Normalised form used for URL concatenation (`""` for home).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_home(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Whether this path sits directly below `section`, e.g. `/courses/x`
    /// under `courses`.
    pub fn is_child_of(&self, section: &str) -> bool {
        let mut segments = self.segments();
        segments.next() == Some(section) && segments.next().is_some()
    }
}

impl fmt::Display for ContentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_home() {
            f.write_str("/")
        } else {
            f.write_str(&self.0)
        }
    }
}

/// Split a browser path like `/de/courses/hillside` into its locale and
/// canonical content path.
///
/// Paths without a locale segment belong to the default locale. A leading
/// default-locale or alias segment (`/en/...`) is tolerated and stripped.
pub fn split_locale_path<'r>(
    registry: &'r LocaleRegistry,
    request_path: &str,
) -> Result<(&'r LocaleConfig, ContentPath), PathError> {
    if request_path.is_empty() || request_path == "/" {
        return Ok((registry.default_locale(), ContentPath::home()));
    }

    let Some(body) = request_path.strip_prefix('/') else {
        return Err(PathError::NotRooted(request_path.to_string()));
    };

    let (first, rest) = match body.find('/') {
        Some(index) => (&body[..index], &body[index..]),
        None => (body, ""),
    };

    if let Some(locale) = registry.get(first) {
        return Ok((locale, ContentPath::parse(registry, rest)?));
    }
    if registry.is_alias(first) {
        return Ok((registry.default_locale(), ContentPath::parse(registry, rest)?));
    }

    Ok((
        registry.default_locale(),
        ContentPath::parse(registry, request_path)?,
    ))
}
