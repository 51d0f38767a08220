//! Locale registry: single source of truth for every locale the site serves.
//!
//! The registry is fixed at process start. It owns the default locale, the
//! ordered list of prefixed locales and the regional aliases that resolve to
//! the default locale. Alias resolution happens once, at construction, so the
//! URL resolver never has to deal with colliding keys.

use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// Regional variants that all mean "the default locale" for hreflang purposes.
pub const DEFAULT_LOCALE_ALIASES: &[&str] = &["en-GB", "en-US", "en-AU"];

/// Pseudo-locale that search engines use as the fallback alternate.
pub const X_DEFAULT: &str = "x-default";

/// Metadata for a single served locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    /// Locale code as it appears in URLs (e.g., "de", "ja")
    pub code: &'static str,

    /// English name of the locale (e.g., "German")
    pub name: &'static str,

    /// Name of the locale in its own language (e.g., "Deutsch")
    pub native_name: &'static str,

    /// Open Graph locale tag (e.g., "de_DE")
    pub og_locale: &'static str,

    /// Whether pages in this locale render right-to-left
    pub rtl: bool,
}

impl LocaleConfig {
    pub const fn new(
        code: &'static str,
        name: &'static str,
        native_name: &'static str,
        og_locale: &'static str,
    ) -> Self {
        Self {
            code,
            name,
            native_name,
            og_locale,
            rtl: false,
        }
    }

    pub const fn right_to_left(
        code: &'static str,
        name: &'static str,
        native_name: &'static str,
        og_locale: &'static str,
    ) -> Self {
        Self {
            code,
            name,
            native_name,
            og_locale,
            rtl: true,
        }
    }

    /// Short uppercase label shown in the language switcher (e.g., "DE").
    pub fn label(&self) -> String {
        self.code.to_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("locale registry is empty")]
    Empty,

    #[error("default locale '{0}' is not registered")]
    MissingDefault(String),

    #[error("locale '{0}' is registered more than once")]
    DuplicateLocale(String),

    #[error("alias '{0}' collides with a registered non-default locale")]
    AliasCollision(String),

    #[error("'{0}' is reserved and cannot be used as a locale or alias")]
    Reserved(String),
}

/// Ordered, validated set of locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
    default_index: usize,
    aliases: Vec<&'static str>,
}

/// Process-wide registry built from the bundled locale table
static SHARED: OnceLock<Arc<LocaleRegistry>> = OnceLock::new();

impl LocaleRegistry {
    /// Build a registry, resolving aliases up front.
    ///
    /// Codes are compared case-insensitively, matching how path segments are
    /// recognised. An alias equal to the default code (or repeated) is
    /// dropped. An alias equal to any other registered locale is rejected,
    /// since it would give one hreflang key two different URLs.
    ///
    /// # Arguments
    ///
    /// * `locales` - Locales in declaration order; this order is kept everywhere
    /// * `default_code` - The locale served without a path prefix
    /// * `aliases` - Extra hreflang codes that mean the default locale
    ///
    /// # Returns
    ///
    /// The registry, or the first configuration problem found.
    pub fn new(
        locales: Vec<LocaleConfig>,
        default_code: &str,
        aliases: &[&'static str],
    ) -> Result<Self, RegistryError> {
        if locales.is_empty() {
            return Err(RegistryError::Empty);
        }

        for (index, locale) in locales.iter().enumerate() {
            if locale.code.eq_ignore_ascii_case(X_DEFAULT) {
                return Err(RegistryError::Reserved(locale.code.to_string()));
            }
            if locales[..index]
                .iter()
                .any(|l| l.code.eq_ignore_ascii_case(locale.code))
            {
                return Err(RegistryError::DuplicateLocale(locale.code.to_string()));
            }
        }

        let default_index = locales
            .iter()
            .position(|l| l.code.eq_ignore_ascii_case(default_code))
            .ok_or_else(|| RegistryError::MissingDefault(default_code.to_string()))?;

        let mut resolved: Vec<&'static str> = Vec::with_capacity(aliases.len());
        for &alias in aliases {
            if alias.eq_ignore_ascii_case(X_DEFAULT) {
                return Err(RegistryError::Reserved(alias.to_string()));
            }
            if alias.eq_ignore_ascii_case(default_code)
                || resolved.iter().any(|seen| seen.eq_ignore_ascii_case(alias))
            {
                continue;
            }
            if locales.iter().any(|l| l.code.eq_ignore_ascii_case(alias)) {
                return Err(RegistryError::AliasCollision(alias.to_string()));
            }
            resolved.push(alias);
        }

        Ok(Self {
            locales,
            default_index,
            aliases: resolved,
        })
    }

    /// Get the shared registry instance.
    ///
    /// Initialised on first call from the bundled locale table.
    pub fn shared() -> Arc<LocaleRegistry> {
        SHARED
            .get_or_init(|| {
                let registry = LocaleRegistry::new(bundled_locales(), "en", DEFAULT_LOCALE_ALIASES)
                    .expect("bundled locale table should always be valid");
                Arc::new(registry)
            })
            .clone()
    }

    /// All locales in declaration order, default included.
    pub fn locales(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// The locale served without a path prefix.
    pub fn default_locale(&self) -> &LocaleConfig {
        &self.locales[self.default_index]
    }

    /// Locales that carry a `/code` path prefix, in declaration order.
    pub fn non_default(&self) -> impl Iterator<Item = &LocaleConfig> {
        let default_index = self.default_index;
        self.locales
            .iter()
            .enumerate()
            .filter(move |(index, _)| *index != default_index)
            .map(|(_, locale)| locale)
    }

    /// Resolved aliases of the default locale.
    pub fn aliases(&self) -> &[&'static str] {
        &self.aliases
    }

    /// Look up a registered locale by its exact code. Aliases are not locales
    /// and return `None`.
    pub fn get(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|l| l.code == code)
    }

    /// Whether `code` is a registered locale.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn is_default(&self, code: &str) -> bool {
        self.default_locale().code == code
    }

    pub fn is_alias(&self, code: &str) -> bool {
        self.aliases.contains(&code)
    }

    /// Whether a path segment names a locale or alias (case-insensitive).
    pub fn is_locale_segment(&self, segment: &str) -> bool {
        self.locales
            .iter()
            .any(|l| l.code.eq_ignore_ascii_case(segment))
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(segment))
    }

    /// Resolve a requested code to a locale, substituting the default for
    /// aliases, unknown codes and `None`.
    pub fn resolve_or_default(&self, code: Option<&str>) -> &LocaleConfig {
        code.and_then(|c| self.get(c))
            .unwrap_or_else(|| self.default_locale())
    }

    pub fn is_rtl(&self, code: &str) -> bool {
        self.get(code).map(|l| l.rtl).unwrap_or(false)
    }
}

/// Locales served by the site. English is the unprefixed default.
fn bundled_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig::new("en", "English", "English", "en_GB"),
        LocaleConfig::new("de", "German", "Deutsch", "de_DE"),
        LocaleConfig::new("ja", "Japanese", "日本語", "ja_JP"),
        LocaleConfig::new("sv", "Swedish", "Svenska", "sv_SE"),
        LocaleConfig::new("no", "Norwegian", "Norsk", "nb_NO"),
        LocaleConfig::new("nl", "Dutch", "Nederlands", "nl_NL"),
        LocaleConfig::new("ko", "Korean", "한국어", "ko_KR"),
        LocaleConfig::new("fr", "French", "Français", "fr_FR"),
        LocaleConfig::new("es", "Spanish", "Español", "es_ES"),
        LocaleConfig::new("da", "Danish", "Dansk", "da_DK"),
        LocaleConfig::new("fi", "Finnish", "Suomi", "fi_FI"),
        LocaleConfig::new("pl", "Polish", "Polski", "pl_PL"),
        LocaleConfig::new("zh", "Chinese", "中文", "zh_CN"),
        LocaleConfig::new("pt", "Portuguese", "Português", "pt_PT"),
        LocaleConfig::new("it", "Italian", "Italiano", "it_IT"),
        LocaleConfig::new("ca", "Catalan", "Català", "ca_ES"),
        LocaleConfig::right_to_left("ar", "Arabic", "العربية", "ar_AR"),
        LocaleConfig::new("cy", "Welsh", "Cymraeg", "cy_GB"),
    ]
}

#[cfg(test)]
pub(crate) fn test_registry() -> LocaleRegistry {
    LocaleRegistry::new(
        vec![
            LocaleConfig::new("en", "English", "English", "en_GB"),
            LocaleConfig::new("de", "German", "Deutsch", "de_DE"),
            LocaleConfig::new("ja", "Japanese", "日本語", "ja_JP"),
        ],
        "en",
        DEFAULT_LOCALE_ALIASES,
    )
    .expect("test registry is valid")
}
