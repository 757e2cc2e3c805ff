use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use serde::Serialize;

/// Read-only percentile view over every sample received so far.
///
/// Computed fresh from the sequence on each query, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentileSnapshot {
    pub count: usize,
    pub p50_ms: Option<f64>,
    pub p95_ms: Option<f64>,
    pub max_ms: Option<f64>,
}

/// Receipt returned for each ingested alert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IngestReceipt {
    pub latency_ms: f64,
    pub count: usize,
}

/// Owns the delivery-latency sample sequence.
///
/// Samples are milliseconds, unbounded, and kept for the process lifetime;
/// there is no eviction. Appends are serialized by the mutex, so the receipt
/// count is strictly monotonic across concurrent callers.
#[derive(Debug, Default)]
pub struct LatencyAggregator {
    samples: Mutex<Vec<f64>>,
}

impl LatencyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the arrival latency for an alert stamped at `origin_timestamp`
    /// (unix seconds).
    ///
    /// Clocks are not assumed synchronized across services; a negative
    /// latency is recorded as-is, never clamped or rejected.
    pub fn ingest(&self, origin_timestamp: f64) -> IngestReceipt {
        let now = Utc::now().timestamp_micros() as f64 / 1_000_000.0;
        self.push((now - origin_timestamp) * 1000.0)
    }

    /// Compute percentiles over the current sequence, nearest-rank.
    ///
    /// A snapshot taken concurrently with an append may or may not include
    /// it.
    pub fn snapshot(&self) -> PercentileSnapshot {
        let mut sorted = self
            .samples
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        if sorted.is_empty() {
            return PercentileSnapshot {
                count: 0,
                p50_ms: None,
                p95_ms: None,
                max_ms: None,
            };
        }

        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();

        PercentileSnapshot {
            count: n,
            p50_ms: Some(nearest_rank(&sorted, 0.50)),
            p95_ms: Some(nearest_rank(&sorted, 0.95)),
            max_ms: Some(sorted[n - 1]),
        }
    }

    fn push(&self, latency_ms: f64) -> IngestReceipt {
        let mut samples = self.samples.lock().unwrap_or_else(PoisonError::into_inner);
        samples.push(latency_ms);
        IngestReceipt {
            latency_ms,
            count: samples.len(),
        }
    }
}

/// Index directly into the sorted samples; no interpolation between ranks.
fn nearest_rank(sorted: &[f64], q: f64) -> f64 {
    sorted[(q * (sorted.len() - 1) as f64) as usize]
}
