//! Endpoint settings resolved from the environment.
//!
//! Resolution order: built-in defaults, then `WEBHOOK_*` environment
//! variables (a `.env` file is honored via dotenvy before commands run),
//! then CLI flag overrides.

use std::env;

use crate::ports::webhook::HttpMethod;

/// Default webhook endpoint, matching the conventional local n8n layout.
pub const DEFAULT_WEBHOOK_URL: &str = "http://localhost:5678/webhook/plan/analyze";

/// Default delivery timeout. Workflow endpoints can take minutes to answer.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Resolved webhook endpoint settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Target webhook URL.
    pub url: String,
    /// HTTP method used for delivery.
    pub method: HttpMethod,
    /// Delivery timeout in seconds.
    pub timeout_secs: u64,
}

impl Settings {
    /// Reads settings from `WEBHOOK_URL`, `WEBHOOK_METHOD`, and
    /// `WEBHOOK_TIMEOUT_SECS`, falling back to defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns an error string when a variable is set to an unparseable
    /// value; misconfiguration should fail loudly rather than fall back.
    pub fn from_env() -> Result<Self, String> {
        let url = env::var("WEBHOOK_URL").unwrap_or_else(|_| DEFAULT_WEBHOOK_URL.to_string());

        let method = match env::var("WEBHOOK_METHOD") {
            Ok(raw) => raw.parse().map_err(|e| format!("WEBHOOK_METHOD: {e}"))?,
            Err(_) => HttpMethod::Post,
        };

        let timeout_secs = match env::var("WEBHOOK_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| format!("WEBHOOK_TIMEOUT_SECS: invalid value {raw:?}"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self { url, method, timeout_secs })
    }

    /// Applies CLI flag overrides on top of the resolved settings.
    #[must_use]
    pub fn with_overrides(
        mut self,
        url: Option<&str>,
        method: Option<HttpMethod>,
        timeout_secs: Option<u64>,
    ) -> Self {
        if let Some(url) = url {
            self.url = url.to_string();
        }
        if let Some(method) = method {
            self.method = method;
        }
        if let Some(timeout_secs) = timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        self
    }
}
