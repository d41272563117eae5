//! Request transports
//!
//! Both phases consume the same [`RequestDescriptor`] so the structured and
//! the raw request cannot drift apart.

pub mod raw;
pub mod structured;

use std::io::Write;

use crate::error::Result;
use crate::http::request::RequestDescriptor;

pub use raw::RawTransport;
pub use structured::StructuredTransport;

/// Sends a request and writes what comes back to `out`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn exchange<W: Write>(&self, request: &RequestDescriptor, out: &mut W) -> Result<()>;
}
