//! Record-replay round-trip integration test.
//!
//! Proves that the record/replay system works end-to-end:
//! 1. Record a session using `CassetteRecorder` (exercises id_gen and webhook).
//! 2. Replay the cassette using `ServiceContext::replaying()`.
//! 3. Assert the delivery report matches what was recorded.
//! 4. Replay a second time and assert determinism.

use serde_json::json;

use hooksend::cassette::config::CassetteConfig;
use hooksend::cassette::recorder::CassetteRecorder;
use hooksend::commands::send::deliver_message;
use hooksend::config::Settings;
use hooksend::context::ServiceContext;
use hooksend::payload::is_valid_request_id;
use hooksend::ports::webhook::HttpMethod;

fn replay_settings() -> Settings {
    Settings {
        url: "http://example.test/webhook/plan/analyze".into(),
        method: HttpMethod::Post,
        timeout_secs: 30,
    }
}

#[tokio::test]
async fn record_then_replay_produces_identical_outputs() {
    let dir = std::env::temp_dir().join("hooksend_record_replay_test");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette_path = dir.join("roundtrip.cassette.yaml");

    // --- Phase 1: Record interactions ---
    // Simulate what the recording adapters would capture by building a
    // cassette with known id_gen and webhook interactions.
    let mut recorder = CassetteRecorder::new(&cassette_path, "roundtrip-test", "abc123");

    recorder.record("id_gen", "generate_id", json!({}), json!("4f1e2d3c4b5a6978"));
    recorder.record(
        "webhook",
        "deliver",
        json!({"url": "http://example.test/webhook/plan/analyze"}),
        json!({"Ok": {"status": 200, "body": "queued"}}),
    );

    let written_path = recorder.finish().expect("recording should succeed");
    assert_eq!(written_path, cassette_path);

    // --- Phase 2: Replay and verify outputs match the recording ---
    let ctx1 = ServiceContext::replaying(&cassette_path).unwrap();
    let report1 = deliver_message(&ctx1, &replay_settings(), "orbit, thunder, fabric")
        .await
        .expect("replayed delivery should succeed");

    assert_eq!(report1.request_id, "4f1e2d3c4b5a6978", "id_gen replay mismatch");
    assert!(is_valid_request_id(&report1.request_id));
    assert_eq!(report1.outcome.status, 200, "webhook status replay mismatch");
    assert_eq!(report1.outcome.body, "queued", "webhook body replay mismatch");

    // --- Phase 3: Replay a second time — determinism check ---
    let ctx2 = ServiceContext::replaying(&cassette_path).unwrap();
    let report2 = deliver_message(&ctx2, &replay_settings(), "orbit, thunder, fabric")
        .await
        .expect("second replay should succeed");

    assert_eq!(report1, report2, "determinism: replays differ");

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn replay_from_per_port_cassettes_matches_monolithic() {
    let dir = std::env::temp_dir().join("hooksend_record_replay_per_port_test");
    std::fs::create_dir_all(&dir).unwrap();

    // Build per-port cassettes under the conventional file names.
    let mut id_rec = CassetteRecorder::new(dir.join("id_gen.cassette.yaml"), "id-port", "abc123");
    id_rec.record("id_gen", "generate_id", json!({}), json!("99aabbccddeeff00"));
    id_rec.finish().unwrap();

    let mut hook_rec =
        CassetteRecorder::new(dir.join("webhook.cassette.yaml"), "webhook-port", "abc123");
    hook_rec.record(
        "webhook",
        "deliver",
        json!({}),
        json!({"Ok": {"status": 202, "body": "accepted"}}),
    );
    hook_rec.finish().unwrap();

    // Replay from per-port config assembled by directory convention.
    let config = CassetteConfig::from_dir(&dir);
    let ctx = ServiceContext::replaying_from(&config).unwrap();

    let report = deliver_message(&ctx, &replay_settings(), "mirror, canyon").await.unwrap();
    assert_eq!(report.request_id, "99aabbccddeeff00");
    assert_eq!(report.outcome.status, 202);
    assert_eq!(report.outcome.body, "accepted");

    // Replay again for determinism.
    let ctx2 = ServiceContext::replaying_from(&CassetteConfig::from_dir(&dir)).unwrap();
    let report2 = deliver_message(&ctx2, &replay_settings(), "mirror, canyon").await.unwrap();
    assert_eq!(report, report2);

    let _ = std::fs::remove_dir_all(&dir);
}
