//! Metrics service for collecting application metrics

use crate::shared::metrics::{Metrics, MetricsUtils};

/// Metrics service for collecting gateway request outcomes
pub struct MetricsService {
    metrics: MetricsUtils,
}

impl MetricsService {
    /// Create a new metrics service
    pub fn new() -> Self {
        Self {
            metrics: MetricsUtils::new(),
        }
    }

    /// Record a request that passed validation and completed
    pub fn record_success(&self, duration_ms: u64) {
        self.metrics.increment_total_requests();
        self.metrics.increment_successful_requests();
        self.metrics.record_response_time(duration_ms);
    }

    /// Record a request rejected by validation
    pub fn record_rejection(&self, violation_count: usize, duration_ms: u64) {
        self.metrics.increment_total_requests();
        self.metrics.record_rejection(violation_count);
        self.metrics.record_response_time(duration_ms);
    }

    /// Record a request that failed after validation
    pub fn record_failure(&self, duration_ms: u64) {
        self.metrics.increment_total_requests();
        self.metrics.increment_failed_requests();
        self.metrics.record_response_time(duration_ms);
    }

    /// Get a snapshot of the current metrics
    pub fn snapshot(&self) -> Metrics {
        self.metrics.get_metrics()
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}
