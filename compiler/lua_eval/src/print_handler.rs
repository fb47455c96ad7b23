//! Print handler for configurable output.
//!
//! `print` writes through one of these instead of touching stdout directly:
//! - Stdout: the binary's default
//! - Buffer: captures bytes for tests and embedding
//! - Silent: discards everything
//!
//! Enum dispatch, since the set of destinations is closed.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes straight to the process's standard output.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Write and flush, so program output interleaves correctly with
    /// diagnostics written to the same stream.
    pub fn write(&self, bytes: &[u8]) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(bytes)?;
        out.flush()
    }
}

/// Captures output in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<Vec<u8>>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&self, bytes: &[u8]) {
        self.buffer.lock().extend_from_slice(bytes);
    }

    /// Everything written so far, as raw bytes.
    pub fn get_output(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    /// Everything written so far, with invalid UTF-8 replaced.
    pub fn get_output_string(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Destination for `print` output.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    Silent,
}

impl PrintHandlerImpl {
    pub fn write(&self, bytes: &[u8]) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.write(bytes),
            Self::Buffer(h) => {
                h.write(bytes);
                Ok(())
            }
            Self::Silent => Ok(()),
        }
    }

    /// Captured bytes; empty for handlers that do not capture.
    pub fn get_output(&self) -> Vec<u8> {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => Vec::new(),
        }
    }

    /// Captured output as text; empty for handlers that do not capture.
    pub fn get_output_string(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output_string(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Shared print handler, so a caller can keep reading a buffer the
/// interpreter writes into.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_accumulates_writes() {
        let handler = BufferPrintHandler::new();
        handler.write(b"hello");
        handler.write(b"\tworld\n");
        assert_eq!(handler.get_output_string(), "hello\tworld\n");
    }

    #[test]
    fn buffer_keeps_non_utf8_bytes() {
        let handler = buffer_handler();
        handler.write(&[0xff, b'\n']).unwrap();
        assert_eq!(handler.get_output(), vec![0xff, b'\n']);
        assert_eq!(handler.get_output_string(), "\u{fffd}\n");
    }

    #[test]
    fn buffer_clear() {
        let handler = buffer_handler();
        handler.write(b"x").unwrap();
        handler.clear();
        assert_eq!(handler.get_output_string(), "");
    }

    #[test]
    fn silent_discards() {
        let handler = silent_handler();
        handler.write(b"ignored").unwrap();
        assert!(handler.get_output().is_empty());
    }

    #[test]
    fn stdout_captures_nothing() {
        let handler = stdout_handler();
        assert_eq!(handler.get_output_string(), "");
    }
}
