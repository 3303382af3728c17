//! # Photobook
//!
//! Client fragment of the Photobook web application: clicks on table rows
//! and icons become requests to the shared `/ajax` endpoint, and replies
//! become log lines or navigation menu entries.
//!
//! The core is DOM- and network-agnostic so it runs both in the browser
//! (see the `photobook-ui` crate) and natively.
//!
//! ## Modules
//!
//! - [`dispatch`]: click targets, command codes, payloads and the event router
//! - [`render`]: DOM abstraction and the response renderer
//! - [`diagnostics`]: timestamped single-line logging
//! - [`transport`]: the POST-form/JSON-reply transport trait
//! - [`protocol`]: reply types shared with the server
//! - [`config`]: TOML configuration with environment overrides
//! - `api`: stand-in `/ajax` server (native only)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use photobook::config::ClientConfig;
//! use photobook::diagnostics::StderrSink;
//! use photobook::dispatch::{ClickTarget, EventRouter};
//! use photobook::render::VirtualDom;
//! use photobook::transport::HttpTransport;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::default();
//!     let dom = VirtualDom::with_mounts([&config.left_mount_id, &config.right_mount_id]);
//!     let transport = HttpTransport::new("http://localhost:8080", Duration::from_secs(10))?;
//!     let router = EventRouter::new(config, transport, dom, StderrSink);
//!
//!     router.bootstrap_menus().await;
//!     router.handle_click(&ClickTarget::new("I").with_text("edit")).await;
//!
//!     Ok(())
//! }
//! ```

#[cfg(not(target_arch = "wasm32"))]
pub mod api;
pub mod config;
pub mod diagnostics;
pub mod dispatch;
pub mod protocol;
pub mod render;
pub mod transport;

// Re-export top-level types for convenience
pub use config::{Binding, ClientConfig, Config, ConfigError, LoggingConfig, Role, ServerConfig};

pub use diagnostics::{DiagnosticSink, Logger, MemorySink, StderrSink};

pub use dispatch::{AjaxRequest, ClickTarget, CommandCode, EventRouter, Icon, Payload};

pub use protocol::{MenuEntry, MenuResponse};

pub use render::{Dom, DomError, ElementSpec, MenuItem, MenuLayout, ResponseRenderer, VirtualDom};

pub use transport::{Transport, TransportError};
