use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::outcome::DenialReason;

/// Security alert emitted for every denied request.
///
/// `reason` is a plain string on the wire; the sink accepts reasons beyond
/// the gate's own denial taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEvent {
    pub reason: String,

    /// The resource owner the caller asked about.
    pub customer_id: String,

    /// The validated subject behind the attempt, when one exists.
    pub subject: Option<String>,

    /// Unix seconds (fractional) captured when the gate began evaluating the
    /// request.
    pub origin_timestamp: f64,
}

impl AlertEvent {
    pub fn denial(
        reason: DenialReason,
        customer_id: &str,
        subject: Option<String>,
        origin_timestamp: f64,
    ) -> Self {
        Self {
            reason: reason.as_str().to_string(),
            customer_id: customer_id.to_string(),
            subject,
            origin_timestamp,
        }
    }
}

/// Delivery seam for alerts.
///
/// Implementations must return without waiting on delivery; the gate never
/// blocks on the sink, and delivery failures stay inside the sink.
pub trait AlertSink: Send + Sync {
    fn dispatch(&self, event: AlertEvent);
}

/// Unix seconds with sub-second precision.
pub fn unix_timestamp(t: DateTime<Utc>) -> f64 {
    t.timestamp_micros() as f64 / 1_000_000.0
}
