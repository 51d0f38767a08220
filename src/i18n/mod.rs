//! Internationalization (i18n) module for locale-aware URLs.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales, the default
//!   locale and its regional aliases
//! - `path`: Canonical, locale-independent content paths
//! - `alternates`: The one resolver that turns a content path into every
//!   locale URL (used by metadata, sitemap and the language switcher)
//! - `switcher`: Language switcher links for the current page
//!
//! # Example
//!
//! ```rust,ignore
//! use sefton_links::i18n::{AlternatesResolver, LocaleRegistry};
//!
//! let resolver = AlternatesResolver::new("https://www.seftonlinks.com", LocaleRegistry::shared());
//! let alternates = resolver.resolve_str("/courses/royal-birkdale")?;
//! assert_eq!(alternates.get("de"), Some("https://www.seftonlinks.com/de/courses/royal-birkdale"));
//! ```

mod alternates;
mod path;
pub(crate) mod registry;
mod switcher;

pub use alternates::{AlternatesMap, AlternatesResolver};
pub use path::{is_valid_segment, split_locale_path, ContentPath, PathError};
pub use registry::{
    LocaleConfig, LocaleRegistry, RegistryError, DEFAULT_LOCALE_ALIASES, X_DEFAULT,
};
pub use switcher::{LanguageSwitcher, SwitcherLink};
