//! Request dispatch
//!
//! - [`target`]: the parts of a click the router inspects
//! - [`command`]: icon name to command code mapping
//! - [`payload`]: request bodies for each interaction variant
//! - [`router`]: the event router tying it together

pub mod command;
pub mod payload;
pub mod router;
pub mod target;

pub use command::{CommandCode, Icon, UnknownIcon};
pub use payload::{encode_form, AjaxRequest, Payload, AJAX_PATH, MENU_JOB};
pub use router::EventRouter;
pub use target::{ClickTarget, ICON_TAG};
