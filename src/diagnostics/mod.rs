//! Diagnostics
//!
//! Timestamped, single-line diagnostic output shared by the router, the
//! renderer and the native binaries.
//!
//! Every line has the form `YYYY/MM/DD HH:MM:SS.mmm> message`, stamped with
//! the local clock at the moment of the call.

pub mod sink;
pub mod stamp;
#[cfg(not(target_arch = "wasm32"))]
pub mod subscriber;

pub use sink::{DiagnosticSink, Logger, MemorySink, StderrSink};
pub use stamp::{format_timestamp, stamp_line, zero_pad, STAMP_SEPARATOR};
#[cfg(not(target_arch = "wasm32"))]
pub use subscriber::{init_tracing, StampedFormat};
