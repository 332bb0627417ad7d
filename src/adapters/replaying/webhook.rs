//! Replaying adapter for the `WebhookTransport` port.

use std::sync::Mutex;

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::webhook::{DeliveryFuture, DeliveryRequest, ProbeFuture, WebhookTransport};

/// Serves recorded webhook outcomes from a cassette.
pub struct ReplayingWebhookTransport {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingWebhookTransport {
    /// Creates a new replaying webhook transport from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn next_output(&self, method: &str) -> serde_json::Value {
        let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
        replayer.next_interaction("webhook", method).output.clone()
    }
}

impl WebhookTransport for ReplayingWebhookTransport {
    fn deliver(&self, _request: &DeliveryRequest) -> DeliveryFuture<'_> {
        let output = self.next_output("deliver");
        Box::pin(async move { replay_result(output) })
    }

    fn probe(&self, _url: &str) -> ProbeFuture<'_> {
        let output = self.next_output("probe");
        Box::pin(async move {
            output.as_bool().expect("webhook::probe: expected boolean output")
        })
    }
}
