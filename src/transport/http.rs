//! Native HTTP transport over reqwest

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};

use super::{Transport, TransportError};

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Posts to `<base_url><path>`
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn post_form(
        &self,
        path: &str,
        fields: &[(&'static str, String)],
    ) -> Result<serde_json::Value, TransportError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .form(fields)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{build_router, AppState};
    use crate::config::ServerConfig;
    use crate::dispatch::Payload;
    use axum::{routing::post, Router};

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn transport(base: &str) -> HttpTransport {
        HttpTransport::new(base, Duration::from_millis(DEFAULT_TIMEOUT_MS)).unwrap()
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let transport = transport("http://localhost:8080/");
        assert_eq!(transport.url("/ajax"), "http://localhost:8080/ajax");
    }

    #[tokio::test]
    async fn test_post_form_against_stub_server() {
        let base = spawn(build_router(AppState::new(ServerConfig::default()))).await;

        let reply = transport(&base)
            .post_form("/ajax", &Payload::menu_bootstrap().form_fields())
            .await
            .unwrap();

        assert_eq!(reply["MenuItemsLeft"][0]["Items"], "My Account");
    }

    #[tokio::test]
    async fn test_status_error() {
        let base = spawn(build_router(AppState::new(ServerConfig::default()))).await;

        let err = transport(&base).post_form("/ajax", &[]).await.unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 400, .. }), "{:?}", err);
    }

    #[tokio::test]
    async fn test_decode_error() {
        let base = spawn(Router::new().route("/ajax", post(|| async { "not json" }))).await;

        let err = transport(&base)
            .post_form("/ajax", &Payload::page_state("admin-home").form_fields())
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[tokio::test]
    async fn test_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = transport(&format!("http://{}", addr))
            .post_form("/ajax", &Payload::page_state("admin-home").form_fields())
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
    }
}
