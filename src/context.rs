//! Service context bundling all port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::{LiveIdGenerator, LiveWebhookTransport};
use crate::adapters::recording::{RecordingIdGenerator, RecordingWebhookTransport};
use crate::adapters::replaying::{ReplayingIdGenerator, ReplayingWebhookTransport};
use crate::cassette::config::CassetteConfig;
use crate::cassette::session::RecordingSession;
use crate::ports::id_gen::IdGenerator;
use crate::ports::webhook::{DeliveryFuture, DeliveryRequest, ProbeFuture, WebhookTransport};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, recording, replaying).
pub struct ServiceContext {
    /// ID generator for request identifiers.
    pub id_gen: Box<dyn IdGenerator>,
    /// Webhook transport for payload delivery.
    pub webhook: Box<dyn WebhookTransport>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for all ports.
    #[must_use]
    pub fn live() -> Self {
        Self {
            id_gen: Box::new(LiveIdGenerator::new()),
            webhook: Box::new(LiveWebhookTransport::new()),
        }
    }

    /// Creates a recording context that captures live interactions to
    /// per-port cassette files under `base`.
    ///
    /// Returns the context plus the [`RecordingSession`] whose `finish()`
    /// writes the cassettes once the context has been dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(base: &Path) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new_at(base)?;

        let ctx = Self {
            id_gen: Box::new(RecordingIdGenerator::new(
                Box::new(LiveIdGenerator::new()),
                Arc::clone(&session.id_gen),
            )),
            webhook: Box::new(RecordingWebhookTransport::new(
                Box::new(LiveWebhookTransport::new()),
                Arc::clone(&session.webhook),
            )),
        };

        Ok((ctx, session))
    }

    /// Creates a replaying context from a monolithic cassette file.
    ///
    /// Both ports are served by a single cassette; each port/method pair
    /// is dispatched to the right interaction stream automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let load = || CassetteConfig::load_monolithic(path);

        // Each port gets its own replayer from the same cassette so that
        // per-port cursors are independent.
        Ok(Self {
            id_gen: Box::new(ReplayingIdGenerator::new(load()?)),
            webhook: Box::new(ReplayingWebhookTransport::new(load()?)),
        })
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette file use a panicking adapter
    /// that fails with a clear message when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            id_gen: match replayers.id_gen {
                Some(r) => Box::new(ReplayingIdGenerator::new(r)),
                None => Box::new(PanickingIdGenerator),
            },
            webhook: match replayers.webhook {
                Some(r) => Box::new(ReplayingWebhookTransport::new(r)),
                None => Box::new(PanickingWebhookTransport),
            },
        })
    }
}

// --- Panicking adapters for unspecified ports ---

struct PanickingIdGenerator;
impl IdGenerator for PanickingIdGenerator {
    fn generate_id(&self) -> String {
        panic!("IdGenerator port not configured in CassetteConfig — no cassette loaded for id_gen");
    }
}

struct PanickingWebhookTransport;
impl WebhookTransport for PanickingWebhookTransport {
    fn deliver(&self, _request: &DeliveryRequest) -> DeliveryFuture<'_> {
        panic!(
            "WebhookTransport port not configured in CassetteConfig — no cassette loaded for webhook"
        );
    }
    fn probe(&self, _url: &str) -> ProbeFuture<'_> {
        panic!(
            "WebhookTransport port not configured in CassetteConfig — no cassette loaded for webhook"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn write_cassette(path: &Path, interactions: Vec<Interaction>) {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions,
        };
        let yaml = serde_yaml::to_string(&cassette).unwrap();
        std::fs::write(path, yaml).unwrap();
    }

    #[test]
    fn replaying_context_from_monolithic_cassette() {
        let dir = std::env::temp_dir().join("hooksend_ctx_test_mono");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("full.cassette.yaml");

        write_cassette(
            &path,
            vec![Interaction {
                seq: 0,
                port: "id_gen".into(),
                method: "generate_id".into(),
                input: json!({}),
                output: json!("0123456789abcdef"),
            }],
        );

        let ctx = ServiceContext::replaying(&path).unwrap();
        assert_eq!(ctx.id_gen.generate_id(), "0123456789abcdef");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn replaying_from_per_port_cassettes() {
        let dir = std::env::temp_dir().join("hooksend_ctx_test_ports");
        std::fs::create_dir_all(&dir).unwrap();

        let id_path = dir.join("id_gen.cassette.yaml");
        write_cassette(
            &id_path,
            vec![Interaction {
                seq: 0,
                port: "id_gen".into(),
                method: "generate_id".into(),
                input: json!({}),
                output: json!("ffeeddccbbaa0099"),
            }],
        );

        let config = CassetteConfig { id_gen: Some(id_path), ..CassetteConfig::default() };
        let ctx = ServiceContext::replaying_from(&config).unwrap();
        assert_eq!(ctx.id_gen.generate_id(), "ffeeddccbbaa0099");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    #[should_panic(expected = "not configured in CassetteConfig")]
    fn unspecified_port_panics_with_clear_message() {
        let config = CassetteConfig::panic_on_unspecified();
        let ctx = ServiceContext::replaying_from(&config).unwrap();
        let _ = ctx.id_gen.generate_id();
    }
}
