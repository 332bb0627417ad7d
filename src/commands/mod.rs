//! Command dispatch and handlers.

pub mod check;
pub mod send;

use std::env;
use std::path::PathBuf;

use crate::cassette::config::CassetteConfig;
use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// When `HOOKSEND_RECORD` is set to a directory path, all port interactions
/// are recorded to per-port cassette files in that directory. When
/// `HOOKSEND_REPLAY` is set, interactions are served from the cassette
/// files found there instead of touching the network.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    if let Ok(dir) = env::var("HOOKSEND_REPLAY") {
        let config = CassetteConfig::from_dir(&PathBuf::from(dir));
        let ctx = ServiceContext::replaying_from(&config)?;
        return dispatch_with_context(command, &ctx);
    }

    let (ctx, session) = if let Ok(dir) = env::var("HOOKSEND_RECORD") {
        let (ctx, session) = ServiceContext::recording_at(&PathBuf::from(dir))?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(), None)
    };

    let result = dispatch_with_context(command, &ctx);

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Send { message, method, url, timeout } => {
            send::run(ctx, message, *method, url.as_deref(), *timeout)
        }
        Command::Check { url } => check::run(ctx, url.as_deref()),
    }
}

/// Finish a recording session and print the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
