//! murl - minimal HTTP client
//!
//! Sends one request through `reqwest`, then repeats it as a hand-built
//! HTTP/1.1 message over a plain TCP socket and dumps what comes back.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
