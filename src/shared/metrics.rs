//! Metrics utilities module
//!
//! Counters for validated, rejected and failed gateway requests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime};

/// Metrics data structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metrics {
    /// Total requests processed
    pub total_requests: u64,

    /// Requests that passed validation and completed
    pub successful_requests: u64,

    /// Requests rejected by shape validation
    pub rejected_requests: u64,

    /// Individual field violations across all rejected requests
    pub field_violations: u64,

    /// Requests that passed validation but failed downstream
    pub failed_requests: u64,

    /// Average response time in milliseconds
    pub avg_response_time_ms: f64,

    /// Uptime in seconds
    pub uptime_seconds: u64,
}

/// Metrics utilities for the application
pub struct MetricsUtils {
    total_requests: AtomicU64,
    successful_requests: AtomicU64,
    rejected_requests: AtomicU64,
    field_violations: AtomicU64,
    failed_requests: AtomicU64,
    total_response_time: AtomicU64,
    response_count: AtomicU64,
    start_time: SystemTime,
}

impl MetricsUtils {
    /// Create a new metrics instance
    pub fn new() -> Self {
        Self {
            total_requests: AtomicU64::new(0),
            successful_requests: AtomicU64::new(0),
            rejected_requests: AtomicU64::new(0),
            field_violations: AtomicU64::new(0),
            failed_requests: AtomicU64::new(0),
            total_response_time: AtomicU64::new(0),
            response_count: AtomicU64::new(0),
            start_time: SystemTime::now(),
        }
    }

    /// Increment total requests
    pub fn increment_total_requests(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment successful requests
    pub fn increment_successful_requests(&self) {
        self.successful_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a validation rejection and how many fields it reported
    pub fn record_rejection(&self, violation_count: usize) {
        self.rejected_requests.fetch_add(1, Ordering::Relaxed);
        self.field_violations.fetch_add(violation_count as u64, Ordering::Relaxed);
    }

    /// Increment failed requests
    pub fn increment_failed_requests(&self) {
        self.failed_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record response time
    pub fn record_response_time(&self, duration_ms: u64) {
        self.total_response_time.fetch_add(duration_ms, Ordering::Relaxed);
        self.response_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics
    pub fn get_metrics(&self) -> Metrics {
        let total_response_time = self.total_response_time.load(Ordering::Relaxed);
        let response_count = self.response_count.load(Ordering::Relaxed);

        let avg_response_time_ms = if response_count > 0 {
            total_response_time as f64 / response_count as f64
        } else {
            0.0
        };

        let uptime = SystemTime::now()
            .duration_since(self.start_time)
            .unwrap_or(Duration::from_secs(0))
            .as_secs();

        Metrics {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            successful_requests: self.successful_requests.load(Ordering::Relaxed),
            rejected_requests: self.rejected_requests.load(Ordering::Relaxed),
            field_violations: self.field_violations.load(Ordering::Relaxed),
            failed_requests: self.failed_requests.load(Ordering::Relaxed),
            avg_response_time_ms,
            uptime_seconds: uptime,
        }
    }
}

impl Default for MetricsUtils {
    fn default() -> Self {
        Self::new()
    }
}
