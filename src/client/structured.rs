//! Structured request path
//!
//! Delegates request execution to `reqwest`, then prints headers (verbose)
//! and the body. Any status >= 400 is reported as one failure class.

use std::io::Write;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::client::Transport;
use crate::error::{MurlError, Result};
use crate::http::request::{Method, RequestDescriptor};

/// Fixed timeout for the whole structured exchange.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

pub struct StructuredTransport {
    client: reqwest::Client,
    verbose: bool,
}

impl StructuredTransport {
    /// Redirects are not followed and no proxy settings are read from the
    /// environment.
    pub fn new(verbose: bool) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .redirect(reqwest::redirect::Policy::none())
            .no_proxy()
            .build()
            .map_err(|e| MurlError::RequestBuild(e.to_string()))?;

        Ok(Self { client, verbose })
    }

    /// Builds the `reqwest` request for the descriptor.
    ///
    /// Both the user header and the JSON content type replace any earlier
    /// value for the same name.
    pub fn build_request(&self, request: &RequestDescriptor) -> Result<reqwest::Request> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), request.url.clone());

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let mut built = builder
            .build()
            .map_err(|e| MurlError::RequestBuild(e.to_string()))?;

        if let Some(header) = &request.header {
            let name = HeaderName::from_bytes(header.name.as_bytes())
                .map_err(|e| MurlError::RequestBuild(e.to_string()))?;
            let value = HeaderValue::from_str(&header.value)
                .map_err(|e| MurlError::RequestBuild(e.to_string()))?;
            built.headers_mut().insert(name, value);
        }

        if request.method.sends_json() {
            built
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        Ok(built)
    }
}

impl Transport for StructuredTransport {
    async fn exchange<W: Write>(&self, request: &RequestDescriptor, out: &mut W) -> Result<()> {
        let built = self.build_request(request)?;

        if self.verbose {
            writeln!(out, "> {} {} HTTP/1.1", request.method, request.target)?;
            write_headers(out, '>', built.headers())?;
            writeln!(out)?;
        }

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            "Sending structured request"
        );

        let response = self
            .client
            .execute(built)
            .await
            .map_err(MurlError::from_send)?;

        let status = response.status();

        tracing::debug!(status = status.as_u16(), "Structured response received");

        if self.verbose {
            writeln!(out, "< {:?} {}", response.version(), status)?;
            write_headers(out, '<', response.headers())?;
            writeln!(out)?;
        }

        let body = response.bytes().await.map_err(MurlError::from_send)?;
        let body = String::from_utf8_lossy(&body).into_owned();

        if status.as_u16() >= 400 {
            return Err(MurlError::Status {
                code: status.as_u16(),
                body,
            });
        }

        writeln!(out, "{}", body)?;
        Ok(())
    }
}

fn write_headers<W: Write>(out: &mut W, marker: char, headers: &HeaderMap) -> Result<()> {
    for (name, value) in headers {
        writeln!(
            out,
            "{} {}: {}",
            marker,
            name,
            String::from_utf8_lossy(value.as_bytes())
        )?;
    }
    Ok(())
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::GET => reqwest::Method::GET,
        Method::POST => reqwest::Method::POST,
        Method::PUT => reqwest::Method::PUT,
        Method::DELETE => reqwest::Method::DELETE,
        Method::HEAD => reqwest::Method::HEAD,
        Method::OPTIONS => reqwest::Method::OPTIONS,
        Method::PATCH => reqwest::Method::PATCH,
    }
}
