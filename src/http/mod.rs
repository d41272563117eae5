//! Raw HTTP/1.1 protocol handling.
//!
//! - **`request`**: the request descriptor shared by both transports
//! - **`writer`**: formats the descriptor as a raw HTTP/1.1 message
//! - **`reader`**: reads a response transcript line by line until the peer closes
//!
//! # Wire format
//!
//! ```text
//! GET /path HTTP/1.1\r\n
//! Host: example.com\r\n
//! Accept: */*\r\n
//! Connection: close\r\n
//! X-Extra: value\r\n          (only with -H)
//! Content-Length: 5\r\n       (only with a non-empty body)
//! \r\n
//! hello
//! ```
//!
//! The response has no length framing on this path: `Connection: close` is
//! always requested, so end-of-stream ends the message.

pub mod reader;
pub mod request;
pub mod writer;
