//! Counters for Lookup API traffic.
//!
//! Tracks how many requests went out, how many failed, how long they took and
//! how many carrier records came back.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by clones of the lookup client.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    http_requests_total: Arc<AtomicU64>,
    http_errors_total: Arc<AtomicU64>,
    http_duration_total_ms: Arc<AtomicU64>,
    carriers_found_total: Arc<AtomicU64>,
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that returned carrier information.
    pub fn record_carrier_found(&self) {
        self.carriers_found_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    pub fn carriers_found_total(&self) -> u64 {
        self.carriers_found_total.load(Ordering::Relaxed)
    }

    /// Average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms();
        let count = self.http_requests_total();
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            carriers_found_total: self.carriers_found_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_avg_ms: f64,
    pub carriers_found_total: u64,
}

/// Times one HTTP request and records it on completion.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    /// Start timing an HTTP request.
    pub fn start(metrics: &Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics: metrics.clone(),
        }
    }

    /// Record the request as successful.
    pub fn complete(self) {
        self.metrics.record_http_request(self.start.elapsed());
    }

    /// Record the request as failed.
    pub fn complete_with_error(self) {
        self.metrics.record_http_request(self.start.elapsed());
        self.metrics.record_http_error();
    }
}
