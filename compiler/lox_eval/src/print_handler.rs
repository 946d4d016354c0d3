//! Destinations for `print` output.
//!
//! The interpreter owns a shared handle so the driver can read captured
//! output back after a run:
//! - stdout for the `lox` binary
//! - a buffer for tests
//! - silent when only the side effects on globals matter

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Print a line (with newline).
    ///
    /// Write failures (a closed pipe, say) are dropped rather than
    /// turned into a runtime error of the program being run.
    pub fn println(&self, msg: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{msg}");
    }

    /// Print without newline.
    pub fn print(&self, msg: &str) {
        let mut out = std::io::stdout().lock();
        let _ = write!(out, "{msg}");
        let _ = out.flush();
    }

    /// Stdout does not capture; always empty.
    pub fn get_output(&self) -> String {
        String::new()
    }

    pub fn clear(&self) {}
}

/// Captures output in memory.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn print(&self, msg: &str) {
        self.buffer.lock().push_str(msg);
    }

    /// Everything printed since creation or the last `clear`.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Print handler using enum dispatch; `print` statements take this path
/// on every execution, so no vtable.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    /// Discards all output.
    Silent,
}

impl PrintHandlerImpl {
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Buffer(h) => h.print(msg),
            Self::Silent => {}
        }
    }

    /// Captured output; empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout(h) => h.get_output(),
            Self::Buffer(h) => h.get_output(),
            Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        match self {
            Self::Stdout(h) => h.clear(),
            Self::Buffer(h) => h.clear(),
            Self::Silent => {}
        }
    }
}

/// Shared handle to a print handler.
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
mod tests {
    use super::*;

    #[test]
    fn test_buffer_handler_captures_lines() {
        let handler = buffer_handler();
        handler.println("one");
        handler.print("two");
        handler.println("");
        assert_eq!(handler.get_output(), "one\ntwo\n");
        handler.clear();
        assert_eq!(handler.get_output(), "");
    }

    #[test]
    fn test_silent_handler_discards() {
        let handler = silent_handler();
        handler.println("gone");
        assert_eq!(handler.get_output(), "");
    }

    #[test]
    fn test_clones_share_the_buffer() {
        let handler = buffer_handler();
        let other = Arc::clone(&handler);
        other.println("shared");
        assert_eq!(handler.get_output(), "shared\n");
    }
}
