//! Live wind observation for the Southport coast, from Open-Meteo.
//!
//! A reading is cached for the configured window. Every failure path ends in
//! `None` so pages can render without weather.

use crate::config::Config;
use crate::retry::{with_retry_if, RetryConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// 16-point compass name for a bearing in degrees.
pub fn degrees_to_compass(degrees: f64) -> &'static str {
    let index = (degrees / 22.5).round() as i64;
    COMPASS_POINTS[index.rem_euclid(16) as usize]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeatherReading {
    pub wind_speed_mph: u32,
    pub wind_direction: &'static str,
    pub wind_degrees: f64,
}

impl WeatherReading {
    pub fn new(wind_speed_mph: f64, wind_degrees: f64) -> Self {
        Self {
            wind_speed_mph: wind_speed_mph.max(0.0).round() as u32,
            wind_direction: degrees_to_compass(wind_degrees),
            wind_degrees,
        }
    }

    /// e.g. "18 mph SW"
    pub fn summary(&self) -> String {
        format!("{} mph {}", self.wind_speed_mph, self.wind_direction)
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentWind,
}

#[derive(Debug, Deserialize)]
struct CurrentWind {
    windspeed_10m: f64,
    winddirection_10m: f64,
}

#[derive(Debug, Error)]
enum FetchError {
    #[error("weather request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather API returned {0}")]
    Status(reqwest::StatusCode),
}

impl FetchError {
    fn is_retryable(&self) -> bool {
        match self {
            FetchError::Transport(e) => !e.is_decode(),
            FetchError::Status(status) => status.is_server_error(),
        }
    }
}

struct CachedReading {
    reading: WeatherReading,
    fetched_at: Instant,
}

pub struct WeatherClient {
    http: reqwest::Client,
    url: String,
    ttl: Duration,
    retry: RetryConfig,
    cache: RwLock<Option<CachedReading>>,
}

impl WeatherClient {
    pub fn new(api_url: &str, latitude: f64, longitude: f64, ttl: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .context("Failed to build weather HTTP client")?;

        let url = format!(
            "{}?latitude={}&longitude={}&current=windspeed_10m,winddirection_10m&windspeed_unit=mph",
            api_url, latitude, longitude
        );

        Ok(Self {
            http,
            url,
            ttl,
            retry: RetryConfig::weather(),
            cache: RwLock::new(None),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.weather_api_url,
            config.weather_latitude,
            config.weather_longitude,
            Duration::from_secs(config.weather_cache_secs),
        )
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Current wind, from cache when fresh. `None` if the API is unavailable.
    pub async fn current(&self) -> Option<WeatherReading> {
        if let Some(cached) = self.cache.read().await.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                debug!("Weather cache hit ({})", cached.reading.summary());
                return Some(cached.reading);
            }
        }

        let result = with_retry_if(
            &self.retry,
            "Open-Meteo fetch",
            || self.fetch(),
            FetchError::is_retryable,
        )
        .await;

        match result {
            Ok(reading) => {
                info!("Fetched weather: {}", reading.summary());
                *self.cache.write().await = Some(CachedReading {
                    reading,
                    fetched_at: Instant::now(),
                });
                Some(reading)
            }
            Err(e) => {
                warn!("Weather unavailable: {}", e);
                None
            }
        }
    }

    async fn fetch(&self) -> Result<WeatherReading, FetchError> {
        let response = self.http.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body: ForecastResponse = response.json().await?;
        Ok(WeatherReading::new(
            body.current.windspeed_10m,
            body.current.winddirection_10m,
        ))
    }
}
