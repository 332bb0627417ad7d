//! Webhook transport port for delivering payloads over HTTP.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::payload::WebhookPayload;

/// Boxed future type alias used by [`WebhookTransport`] for deliveries,
/// keeping the trait dyn-compatible.
pub type DeliveryFuture<'a> = Pin<
    Box<dyn Future<Output = Result<DeliveryOutcome, Box<dyn Error + Send + Sync>>> + Send + 'a>,
>;

/// Boxed future type alias used by [`WebhookTransport`] for reachability probes.
pub type ProbeFuture<'a> = Pin<Box<dyn Future<Output = bool> + Send + 'a>>;

/// HTTP method used for webhook delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// JSON body request.
    Post,
    /// Query-parameter request.
    Get,
}

impl std::str::FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "POST" => Ok(Self::Post),
            "GET" => Ok(Self::Get),
            other => Err(format!("unsupported HTTP method: {other} (expected POST or GET)")),
        }
    }
}

/// A single webhook delivery to perform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryRequest {
    /// Target webhook URL.
    pub url: String,
    /// HTTP method to use.
    pub method: HttpMethod,
    /// Payload carried in the body (POST) or query string (GET).
    pub payload: WebhookPayload,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// The observed result of a webhook delivery.
///
/// Non-2xx statuses are represented here, not as errors; only
/// transport-level failures surface as `Err`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryOutcome {
    /// HTTP status code returned by the endpoint.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

/// Delivers payloads to webhook endpoints.
pub trait WebhookTransport: Send + Sync {
    /// Performs a single delivery.
    ///
    /// # Errors
    ///
    /// The future resolves to an error on transport-level failures
    /// (DNS, refused connection, timeout).
    fn deliver(&self, request: &DeliveryRequest) -> DeliveryFuture<'_>;

    /// Probes the endpoint with a HEAD request; any failure reads as
    /// unreachable rather than an error.
    fn probe(&self, url: &str) -> ProbeFuture<'_>;
}
