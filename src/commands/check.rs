//! `hooksend check` command.

use crate::config::Settings;
use crate::context::ServiceContext;

/// Execute the `check` command.
///
/// Probes the configured webhook endpoint with a HEAD request and reports
/// whether it answered. An unreachable endpoint is a command failure.
///
/// # Errors
///
/// Returns an error string when settings are invalid, the async runtime
/// cannot start, or the endpoint does not answer the probe.
pub fn run(ctx: &ServiceContext, url: Option<&str>) -> Result<(), String> {
    let settings = Settings::from_env()?.with_overrides(url, None, None);
    probe_endpoint(ctx, &settings.url)
}

/// Probe `url` through the context's transport port and print the verdict.
///
/// # Errors
///
/// Returns an error string when the runtime cannot start or the endpoint
/// is unreachable.
pub fn probe_endpoint(ctx: &ServiceContext, url: &str) -> Result<(), String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;

    if runtime.block_on(ctx.webhook.probe(url)) {
        println!("Webhook reachable: {url}");
        Ok(())
    } else {
        Err(format!("webhook endpoint is not reachable: {url}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::LiveIdGenerator;
    use crate::ports::webhook::{DeliveryFuture, DeliveryRequest, ProbeFuture, WebhookTransport};

    struct FixedProbeTransport {
        reachable: bool,
    }

    impl WebhookTransport for FixedProbeTransport {
        fn deliver(&self, _request: &DeliveryRequest) -> DeliveryFuture<'_> {
            Box::pin(async { Err("deliver not expected in probe tests".into()) })
        }

        fn probe(&self, _url: &str) -> ProbeFuture<'_> {
            let reachable = self.reachable;
            Box::pin(async move { reachable })
        }
    }

    fn probe_context(reachable: bool) -> ServiceContext {
        ServiceContext {
            id_gen: Box::new(LiveIdGenerator::new()),
            webhook: Box::new(FixedProbeTransport { reachable }),
        }
    }

    #[test]
    fn reachable_endpoint_succeeds() {
        let ctx = probe_context(true);
        assert!(probe_endpoint(&ctx, "http://example.test/hook").is_ok());
    }

    #[test]
    fn unreachable_endpoint_is_a_failure() {
        let ctx = probe_context(false);
        let err = probe_endpoint(&ctx, "http://example.test/hook").unwrap_err();
        assert!(err.contains("not reachable"));
        assert!(err.contains("http://example.test/hook"));
    }
}
