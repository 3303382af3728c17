//! Event router
//!
//! Turns clicks into requests and hands replies to the renderer. Every
//! interaction ends in exactly one log line after the network call; nothing
//! is retried and no error escapes.

use serde_json::Value;

use crate::config::{Binding, ClientConfig};
use crate::diagnostics::{DiagnosticSink, Logger};
use crate::protocol::MenuResponse;
use crate::render::{Dom, MenuLayout, ResponseRenderer};
use crate::transport::{Transport, TransportError};

use super::command::CommandCode;
use super::payload::{AjaxRequest, Payload};
use super::target::ClickTarget;

/// Dispatches clicks and the menu bootstrap
pub struct EventRouter<T, D, S> {
    config: ClientConfig,
    transport: T,
    renderer: ResponseRenderer<D>,
    logger: Logger<S>,
}

impl<T, D, S> EventRouter<T, D, S>
where
    T: Transport,
    D: Dom,
    S: DiagnosticSink,
{
    pub fn new(config: ClientConfig, transport: T, dom: D, sink: S) -> Self {
        let renderer = ResponseRenderer::new(dom, MenuLayout::from_config(&config));
        Self {
            config,
            transport,
            renderer,
            logger: Logger::new(sink),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn renderer(&self) -> &ResponseRenderer<D> {
        &self.renderer
    }

    pub fn logger(&self) -> &Logger<S> {
        &self.logger
    }

    /// Payload a click produces under the configured binding
    pub fn payload_for(&self, target: &ClickTarget) -> Payload {
        let payload = match self.config.binding {
            Binding::PageState => Payload::page_state(&self.config.page_state),
            Binding::Icon => Payload::icon_action(CommandCode::derive(target)),
        };

        if self.config.include_row_id {
            payload.with_row(target.row_id.clone())
        } else {
            payload
        }
    }

    pub fn request_for(&self, target: &ClickTarget) -> AjaxRequest {
        AjaxRequest::new(&self.config.endpoint, self.payload_for(target))
    }

    /// Handle one delegated click: log, send, log the outcome
    pub async fn handle_click(&self, target: &ClickTarget) {
        match &target.row_id {
            Some(row) => self.logger.log(format_args!("Clicked row {}", row)),
            None => self.logger.log("Clicked"),
        }

        let request = self.request_for(target);
        match self.send(&request).await {
            Ok(result) => self.renderer.log_result(&result, &self.logger),
            Err(e) => self.logger.log(format_args!("Failure:{}", e)),
        }
    }

    /// Ask the server for menu items and append them to the mount points
    pub async fn bootstrap_menus(&self) {
        self.logger.log("Loading menu items");

        let request = AjaxRequest::new(&self.config.endpoint, Payload::menu_bootstrap());
        let result = match self.send(&request).await {
            Ok(result) => result,
            Err(e) => {
                self.logger.log(format_args!("Failure:{}", e));
                return;
            }
        };

        let menus = match MenuResponse::from_value(&result) {
            Ok(menus) => menus,
            Err(e) => {
                self.logger
                    .log(format_args!("Failure:malformed menu response: {}", e));
                return;
            }
        };

        match self.renderer.render_menus(&menus) {
            Ok(count) => self.logger.log(format_args!("Loaded {} menu items", count)),
            Err(e) => self.logger.log(format_args!("Failure:{}", e)),
        }
    }

    async fn send(&self, request: &AjaxRequest) -> Result<Value, TransportError> {
        tracing::debug!(
            method = request.method(),
            path = %request.path,
            payload = %request.payload,
            "Dispatching request"
        );
        self.transport
            .post_form(&request.path, &request.payload.form_fields())
            .await
    }
}
