use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::{MurlError, Result};

/// How the raw response transcript is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Every line, prefixed with `< `.
    Verbose,
    /// Only the lines after the first empty line.
    Quiet,
}

impl DisplayMode {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            DisplayMode::Verbose
        } else {
            DisplayMode::Quiet
        }
    }
}

/// Splits a byte stream into text lines until end-of-stream.
///
/// Lines end at `\n`; a trailing `\r` is dropped. Bytes that are not UTF-8
/// are replaced rather than rejected. A final line without a terminator is
/// still returned.
pub struct LineReader<R> {
    inner: R,
    buffer: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: Vec::with_capacity(1024),
        }
    }

    pub async fn next_line(&mut self) -> std::io::Result<Option<String>> {
        self.buffer.clear();

        let n = self.inner.read_until(b'\n', &mut self.buffer).await?;
        if n == 0 {
            return Ok(None);
        }

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
            if self.buffer.last() == Some(&b'\r') {
                self.buffer.pop();
            }
        }

        Ok(Some(String::from_utf8_lossy(&self.buffer).into_owned()))
    }
}

/// Prints the transcript as it arrives.
///
/// Lines already written stay written if a read fails part way.
pub async fn print_response<R, W>(reader: R, mode: DisplayMode, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = LineReader::new(reader);
    let mut body_started = false;

    while let Some(line) = lines.next_line().await.map_err(MurlError::RawRead)? {
        match mode {
            DisplayMode::Verbose => writeln!(out, "< {}", line)?,
            DisplayMode::Quiet => {
                if body_started {
                    writeln!(out, "{}", line)?;
                } else if line.is_empty() {
                    body_started = true;
                }
            }
        }
    }

    Ok(())
}
