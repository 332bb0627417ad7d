//! Live adapter for the `WebhookTransport` port using reqwest.

use std::time::Duration;

use reqwest::Client;

use crate::ports::webhook::{
    DeliveryFuture, DeliveryOutcome, DeliveryRequest, HttpMethod, ProbeFuture, WebhookTransport,
};

/// Timeout for reachability probes. Probes answer fast or not at all.
const PROBE_TIMEOUT_SECS: u64 = 5;

/// Live webhook transport that performs real HTTP requests.
pub struct LiveWebhookTransport {
    client: Client,
}

impl LiveWebhookTransport {
    /// Creates a new live webhook transport.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for LiveWebhookTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl WebhookTransport for LiveWebhookTransport {
    fn deliver(&self, request: &DeliveryRequest) -> DeliveryFuture<'_> {
        let request = request.clone();

        Box::pin(async move {
            let timeout = Duration::from_secs(request.timeout_secs);

            let builder = match request.method {
                HttpMethod::Post => self.client.post(&request.url).json(&request.payload),
                HttpMethod::Get => self.client.get(&request.url).query(&[
                    ("message", request.payload.message.as_str()),
                    ("request_id", request.payload.request_id.as_str()),
                ]),
            };

            let response = builder.timeout(timeout).send().await.map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("webhook request to {} failed: {e}", request.url).into()
                },
            )?;

            let status = response.status().as_u16();
            let body = response.text().await.map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("failed to read webhook response body: {e}").into()
                },
            )?;

            Ok(DeliveryOutcome { status, body })
        })
    }

    fn probe(&self, url: &str) -> ProbeFuture<'_> {
        let url = url.to_string();

        Box::pin(async move {
            self.client
                .head(&url)
                .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
                .send()
                .await
                .is_ok()
        })
    }
}
