//! Outbound requests
//!
//! Every interaction becomes one form-encoded POST to the shared endpoint.
//! The payload shape is picked by the caller; there is no universal builder
//! that branches at runtime.

use std::fmt;

use super::command::CommandCode;

/// Shared endpoint path
pub const AJAX_PATH: &str = "/ajax";

/// Job key understood by the server for the menu bootstrap
pub const MENU_JOB: &str = "loadMenuItems";

/// Request body variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// `state=<literal>`, sent by plain page triggers
    PageState { state: String, row: Option<String> },
    /// `id=<code>`, sent by icon clicks
    IconAction { id: CommandCode, row: Option<String> },
    /// `x=1&y=2&job=loadMenuItems`; x and y are placeholders the server
    /// expects to see verbatim
    MenuBootstrap { x: i32, y: i32, job: String },
}

impl Payload {
    pub fn page_state(state: impl Into<String>) -> Self {
        Payload::PageState {
            state: state.into(),
            row: None,
        }
    }

    pub fn icon_action(id: CommandCode) -> Self {
        Payload::IconAction { id, row: None }
    }

    pub fn menu_bootstrap() -> Self {
        Payload::MenuBootstrap {
            x: 1,
            y: 2,
            job: MENU_JOB.to_string(),
        }
    }

    /// Attach a row identifier. The bootstrap payload has no row context and
    /// is returned unchanged.
    pub fn with_row(self, row_id: Option<String>) -> Self {
        match self {
            Payload::PageState { state, .. } => Payload::PageState { state, row: row_id },
            Payload::IconAction { id, .. } => Payload::IconAction { id, row: row_id },
            other => other,
        }
    }

    /// Key/value pairs in wire order
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::with_capacity(3);
        match self {
            Payload::PageState { state, row } => {
                fields.push(("state", state.clone()));
                if let Some(row) = row {
                    fields.push(("row", row.clone()));
                }
            }
            Payload::IconAction { id, row } => {
                fields.push(("id", id.as_str().to_string()));
                if let Some(row) = row {
                    fields.push(("row", row.clone()));
                }
            }
            Payload::MenuBootstrap { x, y, job } => {
                fields.push(("x", x.to_string()));
                fields.push(("y", y.to_string()));
                fields.push(("job", job.clone()));
            }
        }
        fields
    }

    /// `application/x-www-form-urlencoded` body
    pub fn encode(&self) -> String {
        encode_form(&self.form_fields())
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Percent-encode key/value pairs into a form body
pub fn encode_form(fields: &[(&str, String)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// One outbound message: always a POST expecting JSON back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AjaxRequest {
    pub path: String,
    pub payload: Payload,
}

impl AjaxRequest {
    pub fn new(path: impl Into<String>, payload: Payload) -> Self {
        Self {
            path: path.into(),
            payload,
        }
    }

    pub fn method(&self) -> &'static str {
        "POST"
    }
}
