//! Diagnostic sinks
//!
//! Where stamped lines end up. The browser binding supplies its own
//! `console.log` sink; natively lines go to stderr.

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use super::stamp::stamp_line;

/// Destination for finished diagnostic lines
pub trait DiagnosticSink {
    /// Write one complete line
    fn write_line(&self, line: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Rc<S> {
    fn write_line(&self, line: &str) {
        (**self).write_line(line)
    }
}

/// Writes lines to the process's standard error stream
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn write_line(&self, line: &str) {
        eprintln!("{}", line);
    }
}

/// Keeps lines in memory, in write order.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

/// Stamps messages with the local time and hands them to a sink
#[derive(Debug, Clone, Default)]
pub struct Logger<S> {
    sink: S,
}

impl<S: DiagnosticSink> Logger<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Emit one stamped line. Never fails.
    pub fn log(&self, message: impl Display) {
        let line = stamp_line(&chrono::Local::now(), &message);
        tracing::debug!("{}", message);
        self.sink.write_line(&line);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_shares_buffer() {
        let sink = MemorySink::new();
        let logger = Logger::new(sink.clone());

        logger.log("Loaded");
        logger.log(format_args!("Clicked {}", 3));

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("> Loaded"));
        assert!(lines[1].ends_with("> Clicked 3"));
    }

    #[test]
    fn test_rc_sink_forwards() {
        let sink = Rc::new(MemorySink::new());
        let logger = Logger::new(Rc::clone(&sink));

        logger.log("one");
        assert_eq!(sink.len(), 1);
    }
}
