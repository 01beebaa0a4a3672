use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::client::ClientError;

/// Addresses one integration: `(api_id, integration_id)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetIntegrationInput {
    pub api_id: String,
    pub integration_id: String,
}

impl GetIntegrationInput {
    pub fn new(api_id: impl Into<String>, integration_id: impl Into<String>) -> Self {
        Self {
            api_id: api_id.into(),
            integration_id: integration_id.into(),
        }
    }

    /// Both identifiers are path segments and must be non-empty
    pub fn validate(&self) -> Result<(), ClientError> {
        let missing: Vec<&str> = [
            ("ApiId", &self.api_id),
            ("IntegrationId", &self.integration_id),
        ]
        .into_iter()
        .filter(|(_, v)| v.is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            return Ok(());
        }

        Err(ClientError::InvalidParameter(format!(
            "{} validation error(s) found: minimum field size of 1 for {}",
            missing.len(),
            missing.join(", ")
        )))
    }
}

/// TLS settings of a private integration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsConfig {
    pub server_name_to_verify: Option<String>,
}

/// `GetIntegration` response body. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetIntegrationOutput {
    pub api_gateway_managed: Option<bool>,
    pub connection_id: Option<String>,
    pub connection_type: Option<String>,
    pub content_handling_strategy: Option<String>,
    pub credentials_arn: Option<String>,
    pub description: Option<String>,
    pub integration_id: Option<String>,
    pub integration_method: Option<String>,
    pub integration_response_selection_expression: Option<String>,
    pub integration_subtype: Option<String>,
    pub integration_type: Option<String>,
    pub integration_uri: Option<String>,
    pub passthrough_behavior: Option<String>,
    pub payload_format_version: Option<String>,
    pub request_parameters: Option<BTreeMap<String, String>>,
    pub request_templates: Option<BTreeMap<String, String>>,
    pub response_parameters: Option<BTreeMap<String, BTreeMap<String, String>>>,
    pub template_selection_expression: Option<String>,
    pub timeout_in_millis: Option<i64>,
    pub tls_config: Option<TlsConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_accepts_both_ids() {
        assert!(GetIntegrationInput::new("abc123", "int-1").validate().is_ok());
    }

    #[test]
    fn test_validate_reports_every_empty_id() {
        let err = GetIntegrationInput::new("", "").validate().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("2 validation error(s)"));
        assert!(message.contains("ApiId, IntegrationId"));

        let err = GetIntegrationInput::new("abc123", "").validate().unwrap_err();
        assert!(matches!(err, ClientError::InvalidParameter(ref m) if m.contains("IntegrationId")));
    }

    #[test]
    fn test_output_parses_camel_case_body() {
        let body = json!({
            "apiGatewayManaged": false,
            "connectionType": "INTERNET",
            "integrationId": "int-1",
            "integrationType": "AWS_PROXY",
            "payloadFormatVersion": "2.0",
            "requestParameters": {"MessageBody": "$request.body"},
            "responseParameters": {"200": {"overwrite:statuscode": "204"}},
            "timeoutInMillis": 30000,
            "tlsConfig": {"serverNameToVerify": "example.com"}
        });

        let out: GetIntegrationOutput = serde_json::from_value(body).unwrap();
        assert_eq!(out.connection_type.as_deref(), Some("INTERNET"));
        assert_eq!(out.integration_type.as_deref(), Some("AWS_PROXY"));
        assert_eq!(out.description, None);
        assert_eq!(out.timeout_in_millis, Some(30000));
        assert_eq!(
            out.tls_config.and_then(|t| t.server_name_to_verify).as_deref(),
            Some("example.com")
        );
        assert_eq!(
            out.response_parameters.unwrap()["200"]["overwrite:statuscode"],
            "204"
        );
    }

    #[test]
    fn test_output_tolerates_unknown_fields() {
        let out: GetIntegrationOutput =
            serde_json::from_value(json!({"newField": 1, "description": "d"})).unwrap();
        assert_eq!(out.description.as_deref(), Some("d"));
    }
}
