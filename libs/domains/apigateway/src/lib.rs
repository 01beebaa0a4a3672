//! API Gateway V2 Domain
//!
//! Read-only Terraform-style data source for API Gateway V2 integrations.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │ Registry         │  ← type name → data source
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │ Data source      │  ← decode config, look up, project, encode state
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │ Client           │  ← GetIntegration (trait + HTTP implementation)
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │ Schema / codec   │  ← (name, kind, mode) list, nullable values
//! └──────────────────┘
//! ```
//!
//! Failures never escape as errors: each read returns a [`ReadResponse`]
//! whose [`Diagnostics`] carry at most one error, and whose state is only
//! written on success.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_apigateway::{
//!     ApiGatewayConfig, Config, DataSourceRegistry, HttpIntegrationClient,
//!     IntegrationDataSource, ReadRequest, integration::TYPE_NAME,
//! };
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpIntegrationClient::new(ApiGatewayConfig::for_region("eu-west-1"))?;
//!
//! let mut registry = DataSourceRegistry::new();
//! registry.register(Box::new(IntegrationDataSource::new(client)));
//!
//! let config = Config::new(json!({"api_id": "abc123", "integration_id": "int-1"}));
//! let response = registry.read(TYPE_NAME, ReadRequest::new(config)).await;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod codec;
pub mod config;
pub mod data_source;
pub mod diag;
pub mod error;
pub mod integration;
pub mod models;
pub mod provider;
pub mod schema;
pub mod value;

// Re-export commonly used types
pub use client::{ClientError, ClientResult, HttpIntegrationClient, IntegrationClient};
pub use codec::{Config, DecodeError, EncodeError, Record, State};
pub use config::ApiGatewayConfig;
pub use data_source::{DataSource, ReadRequest, ReadResponse};
pub use diag::{Diagnostic, Diagnostics, Severity};
pub use error::ReadError;
pub use integration::{DS_NAME_INTEGRATION, IntegrationData, IntegrationDataSource};
pub use models::{GetIntegrationInput, GetIntegrationOutput, TlsConfig};
pub use provider::DataSourceRegistry;
pub use schema::{Attribute, AttributeKind, AttributeMode, Schema};
pub use value::TfString;
