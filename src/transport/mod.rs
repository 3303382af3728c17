//! Transport
//!
//! The single network operation the client performs: a form-encoded POST
//! answered with JSON. Implementations must not retry.

#[cfg(not(target_arch = "wasm32"))]
pub mod http;
#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) mod mock;

use async_trait::async_trait;
use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpTransport;

/// Why a request produced no usable reply
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection, DNS, timeout or other network failure
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not valid JSON
    #[error("Parse error: {0}")]
    Decode(String),
}

/// Posts form payloads and returns the decoded JSON reply.
///
/// Futures are not required to be `Send`: the browser implementation lives
/// on the single JS thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn post_form(
        &self,
        path: &str,
        fields: &[(&'static str, String)],
    ) -> Result<serde_json::Value, TransportError>;
}
