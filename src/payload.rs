//! Webhook payload data model.
//!
//! One transient value: a free-text message plus a per-invocation request
//! identifier. Constructed, serialized once, discarded.

use serde::{Deserialize, Serialize};

/// Number of hexadecimal characters in a request identifier.
pub const REQUEST_ID_LEN: usize = 16;

/// The JSON payload delivered to a webhook endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebhookPayload {
    /// Free-text message content.
    pub message: String,
    /// Per-invocation request identifier (16 lowercase hex digits).
    pub request_id: String,
}

impl WebhookPayload {
    /// Creates a payload from a message and a request identifier.
    #[must_use]
    pub fn new(message: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self { message: message.into(), request_id: request_id.into() }
    }
}

/// Returns `true` if `id` is exactly [`REQUEST_ID_LEN`] lowercase hex digits.
#[must_use]
pub fn is_valid_request_id(id: &str) -> bool {
    id.len() == REQUEST_ID_LEN
        && id.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}
