//! `aws_apigatewayv2_integration` data source
//!
//! Looks up one integration by `(api_id, integration_id)` and projects the
//! response's string fields into state. Map, integer and object fields of the
//! response (`request_parameters`, `request_templates`,
//! `response_parameters`, `timeout_in_millis`, `tls_config`) are not part of
//! the schema and are not projected.

use async_trait::async_trait;
use tracing::{Span, field, info, instrument, warn};

use crate::client::IntegrationClient;
use crate::codec::{Config, Record, State};
use crate::data_source::{DataSource, ReadRequest, ReadResponse};
use crate::error::ReadError;
use crate::models::{GetIntegrationInput, GetIntegrationOutput};
use crate::schema::{Attribute, Schema};
use crate::value::TfString;

pub const TYPE_NAME: &str = "aws_apigatewayv2_integration";

/// Resource label used in problem messages
pub const DS_NAME_INTEGRATION: &str = "Integration Data Source";

const ATTRIBUTES: &[Attribute] = &[
    Attribute::required_string("api_id"),
    Attribute::computed_string("connection_id"),
    Attribute::computed_string("connection_type"),
    Attribute::computed_string("content_handling_strategy"),
    Attribute::computed_string("credentials_arn"),
    Attribute::computed_string("description"),
    Attribute::optional_computed_string("integration_id"),
    Attribute::computed_string("integration_method"),
    Attribute::computed_string("integration_response_selection_expression"),
    Attribute::computed_string("integration_subtype"),
    Attribute::computed_string("integration_type"),
    Attribute::computed_string("integration_uri"),
    Attribute::computed_string("passthrough_behavior"),
    Attribute::computed_string("payload_format_version"),
    Attribute::computed_string("template_selection_expression"),
];

static SCHEMA: Schema = Schema::new(0, ATTRIBUTES);

/// Projection record: one value per schema attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrationData {
    pub api_id: TfString,
    pub connection_id: TfString,
    pub connection_type: TfString,
    pub content_handling_strategy: TfString,
    pub credentials_arn: TfString,
    pub description: TfString,
    pub integration_id: TfString,
    pub integration_method: TfString,
    pub integration_response_selection_expression: TfString,
    pub integration_subtype: TfString,
    pub integration_type: TfString,
    pub integration_uri: TfString,
    pub passthrough_behavior: TfString,
    pub payload_format_version: TfString,
    pub template_selection_expression: TfString,
}

impl IntegrationData {
    /// Copy the response into the computed attributes
    pub fn apply(&mut self, out: &GetIntegrationOutput) {
        self.connection_id = out.connection_id.as_ref().into();
        self.connection_type = out.connection_type.as_ref().into();
        self.content_handling_strategy = out.content_handling_strategy.as_ref().into();
        self.credentials_arn = out.credentials_arn.as_ref().into();
        self.description = out.description.as_ref().into();
        self.integration_method = out.integration_method.as_ref().into();
        self.integration_response_selection_expression =
            out.integration_response_selection_expression.as_ref().into();
        self.integration_subtype = out.integration_subtype.as_ref().into();
        self.integration_type = out.integration_type.as_ref().into();
        self.integration_uri = out.integration_uri.as_ref().into();
        self.passthrough_behavior = out.passthrough_behavior.as_ref().into();
        self.payload_format_version = out.payload_format_version.as_ref().into();
        self.template_selection_expression = out.template_selection_expression.as_ref().into();

        // Optional+computed: keep the configured id unless the service reports one
        if let Some(id) = &out.integration_id {
            self.integration_id = TfString::new(id.as_str());
        }
    }
}

impl Record for IntegrationData {
    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn field(&self, name: &str) -> Option<&TfString> {
        Some(match name {
            "api_id" => &self.api_id,
            "connection_id" => &self.connection_id,
            "connection_type" => &self.connection_type,
            "content_handling_strategy" => &self.content_handling_strategy,
            "credentials_arn" => &self.credentials_arn,
            "description" => &self.description,
            "integration_id" => &self.integration_id,
            "integration_method" => &self.integration_method,
            "integration_response_selection_expression" => {
                &self.integration_response_selection_expression
            }
            "integration_subtype" => &self.integration_subtype,
            "integration_type" => &self.integration_type,
            "integration_uri" => &self.integration_uri,
            "passthrough_behavior" => &self.passthrough_behavior,
            "payload_format_version" => &self.payload_format_version,
            "template_selection_expression" => &self.template_selection_expression,
            _ => return None,
        })
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut TfString> {
        Some(match name {
            "api_id" => &mut self.api_id,
            "connection_id" => &mut self.connection_id,
            "connection_type" => &mut self.connection_type,
            "content_handling_strategy" => &mut self.content_handling_strategy,
            "credentials_arn" => &mut self.credentials_arn,
            "description" => &mut self.description,
            "integration_id" => &mut self.integration_id,
            "integration_method" => &mut self.integration_method,
            "integration_response_selection_expression" => {
                &mut self.integration_response_selection_expression
            }
            "integration_subtype" => &mut self.integration_subtype,
            "integration_type" => &mut self.integration_type,
            "integration_uri" => &mut self.integration_uri,
            "passthrough_behavior" => &mut self.passthrough_behavior,
            "payload_format_version" => &mut self.payload_format_version,
            "template_selection_expression" => &mut self.template_selection_expression,
            _ => return None,
        })
    }
}

/// Reads one API Gateway V2 integration
pub struct IntegrationDataSource<C: IntegrationClient> {
    client: C,
}

impl<C: IntegrationClient> IntegrationDataSource<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    #[instrument(skip_all, fields(api_id = tracing::field::Empty, integration_id = tracing::field::Empty))]
    async fn try_read(&self, config: &Config) -> Result<State, ReadError> {
        let mut data: IntegrationData = config.get()?;

        let span = Span::current();
        span.record("api_id", data.api_id.value_str());
        span.record("integration_id", field::display(&data.integration_id));

        // A null integration_id goes out as "" and is rejected by the client;
        // there is no lookup by integration type.
        let input = GetIntegrationInput::new(data.api_id.value_str(), data.integration_id.value_str());
        let out = self
            .client
            .get_integration(input)
            .await
            .map_err(|source| ReadError::RemoteLookup {
                resource: DS_NAME_INTEGRATION,
                id: data.integration_id.clone(),
                source,
            })?;

        data.apply(&out);

        let mut state = State::default();
        state.set(&data)?;
        Ok(state)
    }
}

#[async_trait]
impl<C: IntegrationClient> DataSource for IntegrationDataSource<C> {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> &'static Schema {
        &SCHEMA
    }

    async fn read(&self, request: ReadRequest) -> ReadResponse {
        let mut response = ReadResponse::default();
        match self.try_read(&request.config).await {
            Ok(state) => {
                info!(type_name = TYPE_NAME, "Read data source");
                response.state = state;
            }
            Err(err) => {
                warn!(type_name = TYPE_NAME, error = %err, "Data source read failed");
                response.diagnostics.push(err.to_diagnostic());
            }
        }
        response
    }
}
