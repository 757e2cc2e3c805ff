//! Request DTOs for the three services.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub token: String,
}

/// Inbound alert as the sink accepts it.
///
/// `reason` is an open string: the sink does not restrict alerts to the
/// gate's own denial taxonomy.
#[derive(Debug, Deserialize)]
pub struct AlertIngestRequest {
    pub reason: String,
    pub customer_id: String,
    #[serde(default)]
    pub subject: Option<String>,
    /// Unix seconds (fractional) stamped by the producer.
    pub origin_timestamp: f64,
}
