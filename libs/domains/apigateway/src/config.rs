use std::time::Duration;

use core_config::{ConfigError, FromEnv, env_duration_secs, env_optional, env_or_default};

const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the API Gateway V2 endpoint
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiGatewayConfig {
    pub region: String,
    /// Base URL, without the `/v2` path
    pub endpoint: String,
    pub timeout: Duration,
}

impl ApiGatewayConfig {
    /// Regional public endpoint
    pub fn for_region(region: impl Into<String>) -> Self {
        let region = region.into();
        Self {
            endpoint: regional_endpoint(&region),
            region,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn regional_endpoint(region: &str) -> String {
    format!("https://apigateway.{}.amazonaws.com", region)
}

impl Default for ApiGatewayConfig {
    fn default() -> Self {
        Self::for_region(DEFAULT_REGION)
    }
}

impl FromEnv for ApiGatewayConfig {
    /// - AWS_REGION: defaults to us-east-1
    /// - APIGATEWAY_ENDPOINT: defaults to the regional endpoint
    /// - APIGATEWAY_TIMEOUT_SECS: defaults to 30
    fn from_env() -> Result<Self, ConfigError> {
        let region = env_or_default("AWS_REGION", DEFAULT_REGION);
        let endpoint = env_optional("APIGATEWAY_ENDPOINT").unwrap_or_else(|| regional_endpoint(&region));
        let timeout = env_duration_secs("APIGATEWAY_TIMEOUT_SECS", DEFAULT_TIMEOUT)?;

        Ok(Self {
            region,
            endpoint,
            timeout,
        })
    }
}
