//! Raw socket path
//!
//! Sends the hand-built HTTP/1.1 message over a plain TCP connection and
//! prints the transcript until the peer closes. There is no timeout: a peer
//! that never closes blocks this phase indefinitely.

use std::io::Write;

use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::client::Transport;
use crate::error::{MurlError, Result};
use crate::http::reader::{DisplayMode, print_response};
use crate::http::request::RequestDescriptor;
use crate::http::writer::{echo_request, serialize_request};

pub struct RawTransport {
    mode: DisplayMode,
}

impl RawTransport {
    pub fn new(mode: DisplayMode) -> Self {
        Self { mode }
    }

    async fn send_and_print<W: Write>(
        &self,
        request: &RequestDescriptor,
        out: &mut W,
    ) -> Result<()> {
        writeln!(out, "Connecting to {} via TCP...", request.authority())?;

        let host = request.connect_host();
        let mut stream = TcpStream::connect((host.as_str(), request.port))
            .await
            .map_err(MurlError::RawConnect)?;

        tracing::trace!(host = %host, port = request.port, "Connected");

        let raw = serialize_request(request);
        if self.mode == DisplayMode::Verbose {
            writeln!(out, "{}", echo_request(&raw))?;
        }

        stream.write_all(&raw).await.map_err(MurlError::RawWrite)?;
        stream.flush().await.map_err(MurlError::RawWrite)?;

        tracing::trace!(bytes = raw.len(), "Raw request sent");

        print_response(BufReader::new(stream), self.mode, out).await
    }
}

impl Transport for RawTransport {
    /// Output failures are reported as [`MurlError::RawOutput`], so nothing
    /// in this phase is fatal.
    async fn exchange<W: Write>(&self, request: &RequestDescriptor, out: &mut W) -> Result<()> {
        self.send_and_print(request, out)
            .await
            .map_err(|err| match err {
                MurlError::Output(e) => MurlError::RawOutput(e),
                other => other,
            })
    }
}
