//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::ports::webhook::HttpMethod;

/// Top-level CLI parser for `hooksend`.
#[derive(Debug, Parser)]
#[command(name = "hooksend", version, about = "Deliver JSON payloads to webhook endpoints")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a message to the webhook endpoint and print the response.
    Send {
        /// Free-text message to deliver.
        message: String,
        /// HTTP method used for delivery (overrides `WEBHOOK_METHOD`).
        #[arg(long, value_enum)]
        method: Option<HttpMethod>,
        /// Webhook URL (overrides `WEBHOOK_URL`).
        #[arg(long)]
        url: Option<String>,
        /// Request timeout in seconds (overrides `WEBHOOK_TIMEOUT_SECS`).
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Probe the webhook endpoint and report whether it is reachable.
    Check {
        /// Webhook URL (overrides `WEBHOOK_URL`).
        #[arg(long)]
        url: Option<String>,
    },
}
