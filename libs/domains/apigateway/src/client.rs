//! API Gateway V2 client
//!
//! The data source only needs `GetIntegration`. Requests are sent unsigned:
//! the endpoint is expected to be pre-authenticated (a signing proxy, a local
//! emulator, or a gateway in front of the service).

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ApiGatewayConfig;
use crate::models::{GetIntegrationInput, GetIntegrationOutput};

/// Error type for API Gateway client operations
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("InvalidParameter: {0}")]
    InvalidParameter(String),

    #[error("NotFoundException: {0}")]
    NotFound(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Remote lookup used by the integration data source
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IntegrationClient: Send + Sync {
    /// Fetch one integration by `(api_id, integration_id)`
    async fn get_integration(&self, input: GetIntegrationInput)
    -> ClientResult<GetIntegrationOutput>;
}

/// [`IntegrationClient`] over the REST API
pub struct HttpIntegrationClient {
    config: ApiGatewayConfig,
    client: Client,
}

impl HttpIntegrationClient {
    pub fn new(config: ApiGatewayConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ApiGatewayConfig {
        &self.config
    }

    fn integration_url(&self, input: &GetIntegrationInput) -> String {
        format!(
            "{}/v2/apis/{}/integrations/{}",
            self.config.endpoint.trim_end_matches('/'),
            urlencoding::encode(&input.api_id),
            urlencoding::encode(&input.integration_id)
        )
    }
}

/// Pull the service's `message` out of an error body, if it has one
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("Message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

#[async_trait]
impl IntegrationClient for HttpIntegrationClient {
    async fn get_integration(
        &self,
        input: GetIntegrationInput,
    ) -> ClientResult<GetIntegrationOutput> {
        input.validate()?;

        let url = self.integration_url(&input);
        debug!(url = %url, "Fetching API Gateway V2 integration");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(error_message(&body).unwrap_or_else(
                || format!("Invalid Integration identifier specified {}", input.integration_id),
            )));
        }

        if !status.is_success() {
            warn!(
                status = %status,
                api_id = %input.api_id,
                "API Gateway returned non-success status"
            );
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(&body).unwrap_or(body),
            });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(endpoint: &str) -> HttpIntegrationClient {
        HttpIntegrationClient::new(ApiGatewayConfig::default().with_endpoint(endpoint)).unwrap()
    }

    #[test]
    fn test_integration_url() {
        let url = client("http://localhost:4566/")
            .integration_url(&GetIntegrationInput::new("abc123", "int-1"));
        assert_eq!(url, "http://localhost:4566/v2/apis/abc123/integrations/int-1");
    }

    #[test]
    fn test_integration_url_escapes_ids() {
        let url = client("http://localhost:4566")
            .integration_url(&GetIntegrationInput::new("a/b", "c d"));
        assert_eq!(url, "http://localhost:4566/v2/apis/a%2Fb/integrations/c%20d");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"message":"Invalid API identifier specified"}"#).as_deref(),
            Some("Invalid API identifier specified")
        );
        assert_eq!(error_message(r#"{"Message":"Throttled"}"#).as_deref(), Some("Throttled"));
        assert_eq!(error_message("<html>bad gateway</html>"), None);
    }

    #[tokio::test]
    async fn test_rejects_empty_ids_without_sending() {
        // Nothing listens here; validation must fail first
        let err = client("http://127.0.0.1:9")
            .get_integration(GetIntegrationInput::new("abc123", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidParameter(_)));
    }
}
