use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};

pub const DEFAULT_SITE_ORIGIN: &str = "https://www.seftonlinks.com";
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_LEGACY_HOSTS: &str = "sefton-links.vercel.app,www.seftonlinks.co.uk,seftonlinks.co.uk";
pub const DEFAULT_OPEN_START: &str = "2026-07-16T06:30:00Z";

#[derive(Debug, Clone)]
pub struct Config {
    // Site
    pub site_origin: String,
    pub port: u16,
    pub catalog_path: Option<String>,
    pub feed_limit: usize,
    pub legacy_hosts: Vec<String>,

    // Weather (Open-Meteo, Southport PR8)
    pub weather_api_url: String,
    pub weather_latitude: f64,
    pub weather_longitude: f64,
    pub weather_cache_secs: u64,

    // The Open 2026, first tee time
    pub open_start: DateTime<Utc>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let site_origin = parse_origin(
            &std::env::var("SITE_ORIGIN").unwrap_or_else(|_| DEFAULT_SITE_ORIGIN.to_string()),
        )?;

        let open_start = std::env::var("OPEN_START")
            .unwrap_or_else(|_| DEFAULT_OPEN_START.to_string());
        let open_start = DateTime::parse_from_rfc3339(open_start.trim())
            .with_context(|| format!("OPEN_START is not an RFC 3339 timestamp: {}", open_start))?
            .with_timezone(&Utc);

        Ok(Self {
            site_origin,
            port: parse_or("PORT", 8080),
            catalog_path: std::env::var("CATALOG_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty()),
            feed_limit: parse_or("FEED_LIMIT", 20),
            legacy_hosts: parse_hosts(
                &std::env::var("LEGACY_HOSTS").unwrap_or_else(|_| DEFAULT_LEGACY_HOSTS.to_string()),
            ),

            weather_api_url: std::env::var("WEATHER_API_URL")
                .unwrap_or_else(|_| DEFAULT_WEATHER_API_URL.to_string()),
            weather_latitude: parse_or("WEATHER_LATITUDE", 53.6456),
            weather_longitude: parse_or("WEATHER_LONGITUDE", -3.0183),
            weather_cache_secs: parse_or("WEATHER_CACHE_SECS", 1800),

            open_start,
        })
    }

    /// Whether `host` (optionally with a port) should be redirected to the
    /// canonical origin.
    pub fn is_legacy_host(&self, host: &str) -> bool {
        let host = host.split(':').next().unwrap_or(host);
        self.legacy_hosts
            .iter()
            .any(|legacy| legacy.eq_ignore_ascii_case(host))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            port: 8080,
            catalog_path: None,
            feed_limit: 20,
            legacy_hosts: parse_hosts(DEFAULT_LEGACY_HOSTS),
            weather_api_url: DEFAULT_WEATHER_API_URL.to_string(),
            weather_latitude: 53.6456,
            weather_longitude: -3.0183,
            weather_cache_secs: 1800,
            open_start: DateTime::from_timestamp(1_784_183_400, 0).unwrap_or_default(),
        }
    }
}

/// Unset or unparseable values fall back to `default`.
fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_hosts(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|h| h.trim().to_ascii_lowercase())
        .filter(|h| !h.is_empty())
        .collect()
}

/// Scheme + host, no path. A trailing `/` is dropped.
fn parse_origin(raw: &str) -> Result<String> {
    let origin = raw.trim().trim_end_matches('/');

    let Some(rest) = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"))
    else {
        bail!("SITE_ORIGIN must start with http:// or https://, got '{}'", raw);
    };

    if rest.is_empty() || rest.contains('/') {
        bail!("SITE_ORIGIN must be scheme and host only, got '{}'", raw);
    }

    Ok(origin.to_string())
}
