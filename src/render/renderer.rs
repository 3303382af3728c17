//! Response renderer

use serde_json::Value;

use crate::diagnostics::{DiagnosticSink, Logger};
use crate::protocol::MenuResponse;

use super::dom::{Dom, DomError};
use super::menu::{MenuItem, MenuLayout};

/// Turns successful replies into log lines or DOM nodes.
///
/// Rendering is not idempotent: the same menus rendered twice appear twice.
pub struct ResponseRenderer<D> {
    dom: D,
    layout: MenuLayout,
}

impl<D: Dom> ResponseRenderer<D> {
    pub fn new(dom: D, layout: MenuLayout) -> Self {
        Self { dom, layout }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn layout(&self) -> &MenuLayout {
        &self.layout
    }

    /// Simple case: the raw result goes to the log, the DOM is untouched
    pub fn log_result<S: DiagnosticSink>(&self, result: &Value, logger: &Logger<S>) {
        logger.log(format_args!("Success:{}", result));
    }

    /// Append every menu entry to its mount point in received order.
    ///
    /// Returns the number of nodes appended. Stops at the first DOM failure;
    /// nodes appended before it stay in place.
    pub fn render_menus(&self, menus: &MenuResponse) -> Result<usize, DomError> {
        let mut appended = 0;
        for item in MenuItem::from_response(menus) {
            self.dom
                .append(self.layout.mount_id(item.side), &item.element(&self.layout))?;
            appended += 1;
        }

        tracing::debug!(appended, "Rendered menu items");
        Ok(appended)
    }
}
