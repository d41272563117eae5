//! Runs the structured phase, then the raw phase, and decides the exit code.

use std::io::Write;

use crate::client::{RawTransport, StructuredTransport, Transport};
use crate::config::Config;
use crate::error::{MurlError, Result};
use crate::http::reader::DisplayMode;
use crate::http::request::RequestDescriptor;

pub const USAGE: &str = "Usage: murl <url>";

/// Returns the process exit code.
///
/// Fatal errors stop before the raw phase and yield 1. Raw-phase errors are
/// printed but leave the code at 0.
pub async fn run<W: Write>(cfg: &Config, out: &mut W) -> u8 {
    let Some(raw_url) = cfg.url.as_deref() else {
        let _ = writeln!(out, "{}", USAGE);
        return 0;
    };

    match execute(cfg, raw_url, out).await {
        Ok(()) => 0,
        Err(err) => {
            report(&err, out);
            if err.is_fatal() { 1 } else { 0 }
        }
    }
}

async fn execute<W: Write>(cfg: &Config, raw_url: &str, out: &mut W) -> Result<()> {
    let request = RequestDescriptor::from_config(cfg, raw_url)?;

    StructuredTransport::new(cfg.verbose)?
        .exchange(&request, out)
        .await?;

    RawTransport::new(DisplayMode::from_verbose(cfg.verbose))
        .exchange(&request, out)
        .await
}

/// Prints the user-facing text for an error.
pub fn report<W: Write>(err: &MurlError, out: &mut W) {
    if err.is_fatal() {
        tracing::debug!(error = ?err, "Request failed");
    } else {
        tracing::debug!(error = ?err, "Raw socket phase aborted");
    }

    let _ = writeln!(out, "{}", err);
    if let MurlError::Status { body, .. } = err {
        let _ = writeln!(out, "{}", body);
    }
}
