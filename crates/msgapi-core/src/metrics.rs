//! Request and creation counters.
//!
//! All counters live behind a single mutex so a [`MetricsSnapshot`] is always
//! internally consistent: `successful + failed == total` for both the request
//! and the creation families. Per-method and per-status maps create their keys
//! on first use; a missing key reads as zero.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Default, Clone)]
struct Counters {
    total_requests: u64,
    successful_requests: u64,
    failed_requests: u64,
    requests_by_type: BTreeMap<String, u64>,
    response_codes: BTreeMap<String, u64>,
    creation_attempts: u64,
    successful_creations: u64,
    failed_creations: u64,
}

/// Point-in-time copy of every counter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub requests_by_type: BTreeMap<String, u64>,
    pub response_codes: BTreeMap<String, u64>,
    pub creation_attempts: u64,
    pub successful_creations: u64,
    pub failed_creations: u64,
    pub start_time: DateTime<Utc>,
    pub uptime_seconds: f64,
}

impl MetricsSnapshot {
    /// Percentage (0-100) of requests that succeeded; 0.0 before any request.
    pub fn success_rate(&self) -> f64 {
        percentage(self.successful_requests, self.total_requests)
    }

    /// Percentage (0-100) of creation attempts that succeeded; 0.0 before any attempt.
    pub fn creation_success_rate(&self) -> f64 {
        percentage(self.successful_creations, self.creation_attempts)
    }
}

/// Process-wide usage counters, shared by reference.
#[derive(Debug)]
pub struct MetricsCollector {
    counters: Mutex<Counters>,
    start_time: DateTime<Utc>,
    started: Instant,
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            counters: Mutex::new(Counters::default()),
            start_time: Utc::now(),
            started: Instant::now(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Counters> {
        self.counters.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record one handled request.
    pub fn record_request(&self, method: &str, status_code: u16, success: bool) {
        let mut c = self.lock();
        c.total_requests += 1;
        *c.requests_by_type.entry(method.to_string()).or_insert(0) += 1;
        *c.response_codes.entry(status_code.to_string()).or_insert(0) += 1;
        if success {
            c.successful_requests += 1;
        } else {
            c.failed_requests += 1;
        }
    }

    /// Record one message creation attempt.
    pub fn record_creation_attempt(&self, success: bool) {
        let mut c = self.lock();
        c.creation_attempts += 1;
        if success {
            c.successful_creations += 1;
        } else {
            c.failed_creations += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let c = self.lock().clone();
        MetricsSnapshot {
            total_requests: c.total_requests,
            successful_requests: c.successful_requests,
            failed_requests: c.failed_requests,
            requests_by_type: c.requests_by_type,
            response_codes: c.response_codes,
            creation_attempts: c.creation_attempts,
            successful_creations: c.successful_creations,
            failed_creations: c.failed_creations,
            start_time: self.start_time,
            uptime_seconds: self.started.elapsed().as_secs_f64(),
        }
    }

    /// Percentage (0-100) of requests that succeeded; 0.0 before any request.
    pub fn success_rate(&self) -> f64 {
        let c = self.lock();
        percentage(c.successful_requests, c.total_requests)
    }

    /// Percentage (0-100) of creation attempts that succeeded; 0.0 before any attempt.
    pub fn creation_success_rate(&self) -> f64 {
        let c = self.lock();
        percentage(c.successful_creations, c.creation_attempts)
    }

    /// Zero every counter. The start time is kept.
    pub fn reset(&self) {
        *self.lock() = Counters::default();
    }

    /// Emit one summary line at info level.
    pub fn log_summary(&self) {
        let s = self.snapshot();
        tracing::info!(
            total_requests = s.total_requests,
            successful = s.successful_requests,
            failed = s.failed_requests,
            success_rate = %format!("{:.2}%", s.success_rate()),
            creations = %format!("{}/{}", s.successful_creations, s.creation_attempts),
            uptime_seconds = s.uptime_seconds,
            "metrics summary"
        );
    }
}

fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
