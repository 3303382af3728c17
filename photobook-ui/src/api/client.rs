//! HTTP API Client
//!
//! Browser transport for the `/ajax` endpoint.

use async_trait::async_trait;
use gloo_net::http::Request;
use photobook::dispatch::encode_form;
use photobook::transport::{Transport, TransportError};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Posts through `fetch`; paths resolve against the page origin
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl GlooTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn post_form(
        &self,
        path: &str,
        fields: &[(&'static str, String)],
    ) -> Result<serde_json::Value, TransportError> {
        let response = Request::post(path)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .header("Accept", "application/json")
            .body(encode_form(fields))
            .map_err(|e| TransportError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status { status, body });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
