use bytes::{BufMut, Bytes, BytesMut};

use crate::http::request::RequestDescriptor;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Headers sent on every raw request, in order.
pub const DEFAULT_HEADERS: &[(&str, &str)] = &[("Accept", "*/*"), ("Connection", "close")];

/// Formats the raw HTTP/1.1 request for the descriptor.
///
/// `Content-Length` is emitted only for a non-empty body and always equals
/// its byte length. Without a body the message ends with the bare separator.
/// The extra header goes out exactly as the user typed it.
pub fn serialize_request(req: &RequestDescriptor) -> Bytes {
    let mut buf = BytesMut::with_capacity(256);

    // Request line
    buf.put_slice(format!("{} {} {}\r\n", req.method, req.target, HTTP_VERSION).as_bytes());
    buf.put_slice(format!("Host: {}\r\n", req.host).as_bytes());

    for (key, value) in DEFAULT_HEADERS {
        buf.put_slice(format!("{}: {}\r\n", key, value).as_bytes());
    }

    if let Some(header) = &req.header {
        buf.put_slice(header.raw.as_bytes());
        buf.put_slice(b"\r\n");
    }

    match &req.body {
        Some(body) => {
            buf.put_slice(format!("Content-Length: {}\r\n\r\n", body.len()).as_bytes());
            buf.put_slice(body.as_bytes());
        }
        None => buf.put_slice(b"\r\n"),
    }

    buf.freeze()
}

/// Renders the outgoing bytes for verbose output, one `> ` prefix per line.
pub fn echo_request(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    format!("> {}", text.replace("\r\n", "\n> "))
}
