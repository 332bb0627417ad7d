//! Recording adapter for the `WebhookTransport` port.

use std::sync::{Arc, Mutex};

use super::{record_interaction, record_result};
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::webhook::{DeliveryFuture, DeliveryRequest, ProbeFuture, WebhookTransport};

/// Records webhook interactions while delegating to an inner implementation.
pub struct RecordingWebhookTransport {
    inner: Box<dyn WebhookTransport>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingWebhookTransport {
    /// Creates a new recording webhook transport wrapping the given implementation.
    pub fn new(inner: Box<dyn WebhookTransport>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl WebhookTransport for RecordingWebhookTransport {
    fn deliver(&self, request: &DeliveryRequest) -> DeliveryFuture<'_> {
        let request_clone = request.clone();
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.deliver(&request_clone).await;
            record_result(&recorder, "webhook", "deliver", &request_clone, &result);
            result
        })
    }

    fn probe(&self, url: &str) -> ProbeFuture<'_> {
        let url = url.to_string();
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let reachable = self.inner.probe(&url).await;
            record_interaction(
                &recorder,
                "webhook",
                "probe",
                &serde_json::json!({ "url": url }),
                &reachable,
            );
            reachable
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::WebhookPayload;
    use crate::ports::webhook::{DeliveryOutcome, HttpMethod};

    struct StubTransport;

    impl WebhookTransport for StubTransport {
        fn deliver(&self, _request: &DeliveryRequest) -> DeliveryFuture<'_> {
            Box::pin(async { Ok(DeliveryOutcome { status: 200, body: "accepted".into() }) })
        }

        fn probe(&self, _url: &str) -> ProbeFuture<'_> {
            Box::pin(async { true })
        }
    }

    #[tokio::test]
    async fn records_delivery_with_ok_convention() {
        let dir = std::env::temp_dir().join("hooksend_rec_webhook_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("webhook.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test", "abc")));

        {
            let transport =
                RecordingWebhookTransport::new(Box::new(StubTransport), Arc::clone(&recorder));
            let request = DeliveryRequest {
                url: "http://example.test/hook".into(),
                method: HttpMethod::Post,
                payload: WebhookPayload::new("hi", "0123456789abcdef"),
                timeout_secs: 30,
            };
            let outcome = transport.deliver(&request).await.unwrap();
            assert_eq!(outcome.status, 200);

            assert!(transport.probe("http://example.test/hook").await);
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("deliver"));
        assert!(content.contains("probe"));
        assert!(content.contains("Ok"));
        assert!(content.contains("0123456789abcdef"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
