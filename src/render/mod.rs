//! Response rendering
//!
//! - [`dom`]: append-only DOM abstraction and an in-memory implementation
//! - [`menu`]: menu items and their mount points
//! - [`renderer`]: turns replies into log lines or menu nodes

pub mod dom;
pub mod menu;
pub mod renderer;

pub use dom::{Dom, DomError, ElementKind, ElementSpec, VirtualDom};
pub use menu::{MenuItem, MenuLayout, MenuSide};
pub use renderer::ResponseRenderer;
