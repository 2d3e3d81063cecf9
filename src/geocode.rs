//! Reverse geocoding of map clicks via a Nominatim-compatible service.

use crate::config::Config;
use crate::i18n::{Language, MessageKey};
use crate::metrics::ServiceMetrics;
use crate::retry::{is_retryable_error, with_retry_if, HttpStatusError, RetryConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use moka::policy::EvictionPolicy;
use moka::sync::Cache;
use std::time::Duration;
use tracing::{debug, warn};

/// Coordinates are cached at 4 decimal places (about 11 m).
const CACHE_PRECISION: f64 = 10_000.0;

const CACHE_CAPACITY: u64 = 10_000;
const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

type CacheKey = (i64, i64, &'static str);

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    display_name: Option<String>,
    /// Nominatim answers 200 with `{"error": "Unable to geocode"}` for open sea etc.
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatus {
    Found,
    Unknown,
    Failed,
}

/// Display-ready place name for a map click.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceLabel {
    pub label: String,
    pub status: LookupStatus,
}

pub struct Geocoder {
    client: reqwest::Client,
    base_url: String,
    retry: RetryConfig,
    cache: Cache<CacheKey, Option<String>>,
    metrics: &'static ServiceMetrics,
}

impl Geocoder {
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build geocoder HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry: RetryConfig::geocode(),
            cache: build_cache(CACHE_CAPACITY, CACHE_TTL),
            metrics: ServiceMetrics::global(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.geocoder_url,
            &config.geocoder_user_agent,
            config.geocoder_timeout,
        )
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Replace the lookup cache with one holding at most `capacity` places for `ttl`.
    pub fn with_cache(mut self, capacity: u64, ttl: Duration) -> Self {
        self.cache = build_cache(capacity, ttl);
        self
    }

    pub fn cached_entries(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    /// Place name for a coordinate in `language`.
    ///
    /// `Ok(None)` means the service has no place there; errors are transport
    /// or service failures after retries. Only successful answers are cached.
    pub async fn reverse(&self, lat: f64, lon: f64, language: Language) -> Result<Option<String>> {
        self.metrics.record_geocode_request();

        let key = cache_key(lat, lon, language);
        if let Some(hit) = self.cache.get(&key) {
            debug!("Geocode cache hit for ({}, {}, {})", lat, lon, language.code());
            self.metrics.record_geocode_cache_hit();
            return Ok(hit);
        }

        let name = self.fetch(lat, lon, language).await.inspect_err(|_| {
            self.metrics.record_geocode_failure();
        })?;

        self.cache.insert(key, name.clone());

        Ok(name)
    }

    /// Like [`reverse`](Self::reverse), but always yields a label, substituting
    /// the localized "unknown location" or "lookup failed" text.
    pub async fn describe(&self, lat: f64, lon: f64, language: Language) -> PlaceLabel {
        match self.reverse(lat, lon, language).await {
            Ok(Some(name)) => PlaceLabel {
                label: name,
                status: LookupStatus::Found,
            },
            Ok(None) => PlaceLabel {
                label: language.text(MessageKey::UnknownLocation).to_string(),
                status: LookupStatus::Unknown,
            },
            Err(e) => {
                warn!("Reverse geocoding failed for ({}, {}): {:#}", lat, lon, e);
                PlaceLabel {
                    label: language.text(MessageKey::LocationLookupFailed).to_string(),
                    status: LookupStatus::Failed,
                }
            }
        }
    }

    async fn fetch(&self, lat: f64, lon: f64, language: Language) -> Result<Option<String>> {
        let url = format!("{}/reverse", self.base_url);
        let lat = lat.to_string();
        let lon = lon.to_string();

        let body = with_retry_if(
            &self.retry,
            "Reverse geocode",
            || {
                let client = &self.client;
                let (url, lat, lon) = (&url, &lat, &lon);
                async move {
                    let response = client
                        .get(url)
                        .query(&[
                            ("format", "jsonv2"),
                            ("lat", lat.as_str()),
                            ("lon", lon.as_str()),
                            ("accept-language", language.code()),
                        ])
                        .send()
                        .await
                        .context("Failed to send request to geocoder")?;

                    let status = response.status();
                    if !status.is_success() {
                        let body = response.text().await.unwrap_or_default();
                        return Err(anyhow::Error::new(HttpStatusError {
                            service: "Geocoder",
                            status,
                            body,
                        }));
                    }

                    let parsed: ReverseResponse = response
                        .json()
                        .await
                        .context("Failed to parse geocoder response")?;
                    Ok::<_, anyhow::Error>(parsed)
                }
            },
            is_retryable_error,
        )
        .await?;

        if let Some(error) = &body.error {
            debug!("Geocoder has no place at ({}, {}): {}", lat, lon, error);
        }

        Ok(body.display_name.filter(|name| !name.trim().is_empty()))
    }
}

fn build_cache(capacity: u64, ttl: Duration) -> Cache<CacheKey, Option<String>> {
    Cache::builder()
        .max_capacity(capacity)
        .time_to_live(ttl)
        .eviction_policy(EvictionPolicy::lru())
        .build()
}

fn cache_key(lat: f64, lon: f64, language: Language) -> CacheKey {
    (
        (lat * CACHE_PRECISION).round() as i64,
        (lon * CACHE_PRECISION).round() as i64,
        language.code(),
    )
}
