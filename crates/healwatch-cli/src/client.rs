//! HTTP client for the HealWatch daemon

use crate::error::{CliError, CliResult};
use healwatch_types::{ElementData, HealingResponse, ServiceHealth};
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

/// HTTP client for one-off daemon requests
pub struct HealwatchClient {
    client: Client,
    base_url: String,
}

impl HealwatchClient {
    /// Create a new client
    pub fn new(endpoint: &str, timeout: Duration) -> CliResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Check daemon health
    pub async fn health_check(&self) -> CliResult<ServiceHealth> {
        self.get("/api/health").await
    }

    /// Heal a single element
    pub async fn heal_element(&self, data: &ElementData) -> CliResult<HealingResponse> {
        self.post("/api/heal-element", data).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> CliResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> CliResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> CliResult<T> {
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else if status == StatusCode::NOT_FOUND {
            Err(CliError::NotFound("Resource not found".into()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(CliError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_endpoint_normalization() {
        let client = HealwatchClient::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
