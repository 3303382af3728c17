//! Browser console sink

use photobook::diagnostics::DiagnosticSink;

/// Writes diagnostic lines with `console.log`
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn write_line(&self, line: &str) {
        web_sys::console::log_1(&line.into());
    }
}
