//! `vigil-metrics` — streaming percentiles over alert-delivery latency.
//!
//! One aggregator object owns the sample sequence; there is no ambient
//! global state.

pub mod aggregator;

pub use aggregator::{IngestReceipt, LatencyAggregator, PercentileSnapshot};
