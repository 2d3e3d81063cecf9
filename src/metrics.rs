//! Service metrics and observability module.
//!
//! Counters for predictions, validation failures, translation fallbacks and
//! geocoder traffic. Exposed as JSON on `/metrics`.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Process-wide counters.
#[derive(Debug, Default)]
pub struct ServiceMetrics {
    predictions: AtomicUsize,
    validation_failures: AtomicUsize,
    prediction_failures: AtomicUsize,
    translation_fallbacks: AtomicUsize,
    geocode_requests: AtomicUsize,
    geocode_cache_hits: AtomicUsize,
    geocode_failures: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<ServiceMetrics> = OnceLock::new();

impl ServiceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global metrics instance.
    pub fn global() -> &'static ServiceMetrics {
        METRICS.get_or_init(ServiceMetrics::new)
    }

    /// Record a successful prediction.
    pub fn record_prediction(&self) {
        self.predictions.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request rejected by the feature adapter.
    pub fn record_validation_failure(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an inference call that returned an error.
    pub fn record_prediction_failure(&self) {
        self.prediction_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that fell back to the canonical language.
    pub fn record_translation_fallback(&self) {
        self.translation_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_geocode_request(&self) {
        self.geocode_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_geocode_cache_hit(&self) {
        self.geocode_cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_geocode_failure(&self) {
        self.geocode_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn predictions(&self) -> usize {
        self.predictions.load(Ordering::Relaxed)
    }

    pub fn validation_failures(&self) -> usize {
        self.validation_failures.load(Ordering::Relaxed)
    }

    pub fn translation_fallbacks(&self) -> usize {
        self.translation_fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let predictions = self.predictions();
        let validation_failures = self.validation_failures();
        let prediction_failures = self.prediction_failures.load(Ordering::Relaxed);
        let submissions = predictions + validation_failures + prediction_failures;
        let prediction_success_rate = if submissions > 0 {
            (predictions as f64 / submissions as f64) * 100.0
        } else {
            0.0
        };

        let geocode_requests = self.geocode_requests.load(Ordering::Relaxed);
        let geocode_cache_hits = self.geocode_cache_hits.load(Ordering::Relaxed);
        let geocode_cache_hit_rate = if geocode_requests > 0 {
            (geocode_cache_hits as f64 / geocode_requests as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            predictions,
            validation_failures,
            prediction_failures,
            prediction_success_rate,
            translation_fallbacks: self.translation_fallbacks(),
            geocode_requests,
            geocode_cache_hits,
            geocode_cache_hit_rate,
            geocode_failures: self.geocode_failures.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of the current counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub predictions: usize,
    pub validation_failures: usize,
    pub prediction_failures: usize,

    /// Successful predictions as a percentage of submissions (0-100)
    pub prediction_success_rate: f64,

    pub translation_fallbacks: usize,
    pub geocode_requests: usize,
    pub geocode_cache_hits: usize,

    /// Cache hits as a percentage of geocode requests (0-100)
    pub geocode_cache_hit_rate: f64,

    pub geocode_failures: usize,
}
