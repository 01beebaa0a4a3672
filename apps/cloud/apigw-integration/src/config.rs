//! Configuration for the integration reader

use core_config::{Environment, FromEnv};
use domain_apigateway::ApiGatewayConfig;
use eyre::Result;

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub apigateway: ApiGatewayConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            environment: Environment::from_env(),
            apigateway: ApiGatewayConfig::from_env()?,
        })
    }

    /// Apply command-line overrides on top of the environment
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.apigateway.endpoint = endpoint;
        }
        self
    }
}
