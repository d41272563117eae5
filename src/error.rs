//! Error taxonomy for both request phases.
//!
//! The `Display` text of each variant is the exact line printed to the user.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum MurlError {
    #[error("Error parsing URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Error parsing URL: missing host")]
    MissingHost,

    #[error("Error creating HTTP request: unsupported method {0:?}")]
    InvalidMethod(String),

    #[error("Error creating HTTP request: {0}")]
    RequestBuild(String),

    #[error("Error: Invalid header format. Use 'Key: Value'.")]
    HeaderFormat,

    #[error("Error: Request timed out")]
    Timeout,

    #[error("Error: Invalid URL or domain")]
    Resolution,

    #[error("Error: {0}")]
    Network(reqwest::Error),

    /// Any status >= 400. The body is printed on the line after the error.
    #[error("Error: HTTP {code}")]
    Status { code: u16, body: String },

    #[error("Error connecting to server: {0}")]
    RawConnect(io::Error),

    #[error("Error sending TCP request: {0}")]
    RawWrite(io::Error),

    #[error("Error reading TCP response: {0}")]
    RawRead(io::Error),

    #[error("Error writing output: {0}")]
    Output(#[from] io::Error),

    /// Stdout failed while the raw phase was printing.
    #[error("Error writing output: {0}")]
    RawOutput(io::Error),
}

impl MurlError {
    /// Whether the error ends the process with exit code 1.
    ///
    /// Raw-socket errors only abort the raw phase.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            MurlError::RawConnect(_)
                | MurlError::RawWrite(_)
                | MurlError::RawRead(_)
                | MurlError::RawOutput(_)
        )
    }

    /// Classifies a failed structured exchange.
    pub fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MurlError::Timeout
        } else if is_resolution_failure(&err) {
            MurlError::Resolution
        } else if err.is_builder() {
            MurlError::RequestBuild(err.to_string())
        } else {
            MurlError::Network(err)
        }
    }
}

fn is_resolution_failure(err: &reqwest::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = source {
        let text = e.to_string();
        if text.contains("dns error") || text.contains("failed to lookup address") {
            return true;
        }
        source = e.source();
    }
    false
}

pub type Result<T> = std::result::Result<T, MurlError>;
