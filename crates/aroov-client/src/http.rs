use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::{GatewayError, Result};
use crate::gateway::{Gateway, Method, server_message};

/// Gateway backed by `reqwest`.
pub struct HttpGateway {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpGateway {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| GatewayError::Config(format!("Invalid API URL '{}': {}", base_url, e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| GatewayError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| GatewayError::Config(format!("Invalid request path '{}': {}", path, e)))
    }
}

#[async_trait(?Send)]
impl Gateway for HttpGateway {
    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        let url = self.resolve(path)?;
        debug!(%method, %url, "sending request");

        let mut builder = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Delete => self.client.delete(url),
        };
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if !status.is_success() {
            debug!(%method, path, status = status.as_u16(), "request failed");
            return Err(GatewayError::http(status.as_u16(), server_message(&text)));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        let err = HttpGateway::new("not a url", 5).err().unwrap();
        assert!(matches!(err, GatewayError::Config(_)));
    }

    #[test]
    fn test_resolves_absolute_api_paths() {
        let gateway = HttpGateway::new("http://localhost:3000/app/", 5).unwrap();
        let url = gateway.resolve("/api/destinations?page=2").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/destinations?page=2");
    }

    #[tokio::test]
    async fn test_refused_connection_is_a_network_error() {
        let gateway = HttpGateway::new("http://127.0.0.1:9", 2).unwrap();
        let err = gateway
            .request(Method::Get, "/api/user/me", None)
            .await
            .unwrap_err();
        assert!(err.is_network(), "unexpected error: {err}");
    }
}
