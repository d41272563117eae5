use std::fmt;

use url::{Host, Url};

use crate::config::Config;
use crate::error::{MurlError, Result};

/// Port used by the raw phase when the URL names none.
pub const DEFAULT_PORT: u16 = 80;

/// HTTP request methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// Matching is case-sensitive, as on the wire.
    ///
    /// ```
    /// # use murl::http::request::Method;
    /// assert_eq!(Method::from_str("PUT"), Some(Method::PUT));
    /// assert_eq!(Method::from_str("put"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
        }
    }

    /// POST and PUT carry a JSON content type on the structured path.
    pub fn sends_json(&self) -> bool {
        matches!(self, Method::POST | Method::PUT)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single user-supplied header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// The argument exactly as typed; the raw request sends this.
    pub raw: String,
    pub name: String,
    pub value: String,
}

impl Header {
    /// Parses `"Key: Value"`, splitting on the first colon and trimming both sides.
    pub fn parse(raw: &str) -> Result<Self> {
        let (name, value) = raw.split_once(':').ok_or(MurlError::HeaderFormat)?;

        Ok(Self {
            raw: raw.to_string(),
            name: name.trim().to_string(),
            value: value.trim().to_string(),
        })
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Everything both transports need to issue the same request.
///
/// Built once per invocation. Construction validates the method and the
/// header, so a malformed header is rejected before any socket is opened.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: Url,
    pub host: Host<String>,
    pub port: u16,
    /// Path plus query, `/` when the URL path is empty.
    pub target: String,
    pub header: Option<Header>,
    pub body: Option<String>,
}

impl RequestDescriptor {
    pub fn from_config(cfg: &Config, raw_url: &str) -> Result<Self> {
        RequestBuilder::new()
            .method(&cfg.method)
            .url(raw_url)
            .header(&cfg.header)
            .body(&cfg.data)
            .build()
    }

    /// `host:port` as printed before the raw connection is opened.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Host in the form the resolver expects; IPv6 literals lose their brackets.
    pub fn connect_host(&self) -> String {
        match &self.host {
            Host::Domain(domain) => domain.clone(),
            Host::Ipv4(addr) => addr.to_string(),
            Host::Ipv6(addr) => addr.to_string(),
        }
    }
}

/// Builder for constructing a [`RequestDescriptor`] from raw command-line strings.
pub struct RequestBuilder {
    method: String,
    url: String,
    header: String,
    body: String,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: Method::GET.as_str().to_string(),
            url: String::new(),
            header: String::new(),
            body: String::new(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// An empty string means no extra header.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// An empty string means no body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Result<RequestDescriptor> {
        let url = Url::parse(&self.url)?;
        let host = url.host().ok_or(MurlError::MissingHost)?.to_owned();
        let port = url.port().unwrap_or(DEFAULT_PORT);

        let method =
            Method::from_str(&self.method).ok_or_else(|| MurlError::InvalidMethod(self.method))?;

        let header = if self.header.is_empty() {
            None
        } else {
            Some(Header::parse(&self.header)?)
        };

        let body = (!self.body.is_empty()).then_some(self.body);

        let mut target = match url.path() {
            "" => "/".to_string(),
            path => path.to_string(),
        };
        if let Some(query) = url.query() {
            target.push('?');
            target.push_str(query);
        }

        Ok(RequestDescriptor {
            method,
            url,
            host,
            port,
            target,
            header,
            body,
        })
    }
}
