//! Replaying adapters that replay recorded interactions.

pub mod id_gen;
pub mod webhook;

pub use id_gen::ReplayingIdGenerator;
pub use webhook::ReplayingWebhookTransport;

use std::error::Error;

use serde::de::DeserializeOwned;

/// Decode a recorded `Result` output using the Ok/Err JSON convention
/// written by `recording::record_result`.
pub(crate) fn replay_result<T>(
    output: serde_json::Value,
) -> Result<T, Box<dyn Error + Send + Sync>>
where
    T: DeserializeOwned,
{
    if let Some(ok) = output.get("Ok") {
        serde_json::from_value(ok.clone())
            .map_err(|e| format!("failed to deserialize recorded Ok value: {e}").into())
    } else if let Some(err) = output.get("Err") {
        Err(err.as_str().unwrap_or("recorded error").to_string().into())
    } else {
        Err("malformed recorded output: expected an Ok or Err object".into())
    }
}
