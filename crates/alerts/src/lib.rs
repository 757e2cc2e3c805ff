//! `vigil-alerts` — fire-and-forget alert delivery.
//!
//! Delivery is at-most-once: errors, timeouts, and non-success responses are
//! absorbed here and never reach the request path that produced the alert.

use std::time::Duration;

use vigil_gate::{AlertEvent, AlertSink};

/// Total budget for one outbound alert POST. Exists to bound resource usage,
/// not for correctness.
const DELIVERY_TIMEOUT: Duration = Duration::from_secs(2);

/// Posts alerts to the sink endpoint without ever blocking the caller.
#[derive(Debug, Clone)]
pub struct HttpAlertDispatcher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAlertDispatcher {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(DELIVERY_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl AlertSink for HttpAlertDispatcher {
    /// Hand the event to a spawned task and return immediately.
    ///
    /// Must be called from within a tokio runtime. The task is never joined;
    /// an in-flight alert is dropped if the process shuts down first.
    fn dispatch(&self, event: AlertEvent) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        tokio::spawn(async move {
            match client.post(&endpoint).json(&event).send().await {
                Ok(response) if !response.status().is_success() => {
                    tracing::debug!(status = %response.status(), "alert sink rejected event");
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::debug!(error = %err, "alert delivery failed");
                }
            }
        });
    }
}
