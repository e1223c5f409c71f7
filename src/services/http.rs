use std::time::Duration;

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use url::Url;

use crate::error::TransportFailure;
use crate::ports::http::UpstreamHttp;

/// [`UpstreamHttp`] over a shared `reqwest` client.
pub struct ReqwestHttp {
    client: Client,
    timeout: Duration,
}

impl ReqwestHttp {
    pub fn new(timeout: Duration) -> Self {
        Self::with_client(Client::new(), timeout)
    }

    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait::async_trait]
impl UpstreamHttp for ReqwestHttp {
    async fn get_json(&self, url: &Url) -> Result<Value, TransportFailure> {
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| TransportFailure::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Keep the body only if it is JSON; upstream error payloads always are.
            let body = response
                .bytes()
                .await
                .ok()
                .and_then(|bytes| serde_json::from_slice(&bytes).ok());
            return Err(TransportFailure::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TransportFailure::Unreachable(format!("Unreadable response body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_is_reported_as_unreachable() {
        let http = ReqwestHttp::new(Duration::from_secs(2));
        // Nothing listens on port 1 of the loopback interface.
        let url = Url::parse("http://127.0.0.1:1/charts/2021-01-01").unwrap();

        let failure = http.get_json(&url).await.unwrap_err();
        assert!(matches!(failure, TransportFailure::Unreachable(_)));
    }
}
