//! `hooksend send` command.

use crate::config::Settings;
use crate::context::ServiceContext;
use crate::payload::WebhookPayload;
use crate::ports::webhook::{DeliveryOutcome, DeliveryRequest, HttpMethod};

/// Result of one delivery: the generated identifier plus what the
/// endpoint answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Request identifier attached to the payload.
    pub request_id: String,
    /// Status and body as returned by the endpoint.
    pub outcome: DeliveryOutcome,
}

/// Execute the `send` command.
///
/// Resolves settings from the environment with CLI overrides applied,
/// delivers the message, and prints the request identifier, response
/// status, and response body. Non-2xx statuses are reported, not errors.
///
/// # Errors
///
/// Returns an error string when settings are invalid, the async runtime
/// cannot start, or the delivery fails at the transport level.
pub fn run(
    ctx: &ServiceContext,
    message: &str,
    method: Option<HttpMethod>,
    url: Option<&str>,
    timeout_secs: Option<u64>,
) -> Result<(), String> {
    let settings = Settings::from_env()?.with_overrides(url, method, timeout_secs);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;
    let report = runtime.block_on(deliver_message(ctx, &settings, message))?;

    println!("Request ID: {}", report.request_id);
    println!("Status: {}", report.outcome.status);
    println!("Response: {}", report.outcome.body);
    Ok(())
}

/// Build the payload for `message` and deliver it through the context's
/// transport port.
///
/// # Errors
///
/// Returns an error string on transport-level failure.
pub async fn deliver_message(
    ctx: &ServiceContext,
    settings: &Settings,
    message: &str,
) -> Result<DeliveryReport, String> {
    let request_id = ctx.id_gen.generate_id();
    let payload = WebhookPayload::new(message, request_id.clone());

    let request = DeliveryRequest {
        url: settings.url.clone(),
        method: settings.method,
        payload,
        timeout_secs: settings.timeout_secs,
    };

    let outcome = ctx
        .webhook
        .deliver(&request)
        .await
        .map_err(|e| format!("webhook delivery failed: {e}"))?;

    Ok(DeliveryReport { request_id, outcome })
}
