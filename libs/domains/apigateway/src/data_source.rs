use async_trait::async_trait;

use crate::codec::{Config, State};
use crate::diag::Diagnostics;
use crate::schema::Schema;

#[derive(Debug, Clone)]
pub struct ReadRequest {
    pub config: Config,
}

impl ReadRequest {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

/// Outcome of a read. `state` is only written when `diagnostics` has no error.
#[derive(Debug, Clone, Default)]
pub struct ReadResponse {
    pub state: State,
    pub diagnostics: Diagnostics,
}

/// A read-only data source
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Type name used in configuration, e.g. `aws_apigatewayv2_integration`
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> &'static Schema;

    async fn read(&self, request: ReadRequest) -> ReadResponse;
}
