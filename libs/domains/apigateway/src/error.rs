use std::fmt::Display;

use thiserror::Error;

use crate::client::ClientError;
use crate::codec::{DecodeError, EncodeError};
use crate::diag::Diagnostic;
use crate::value::TfString;

/// Service identifier for API Gateway V2
pub const SERVICE_APIGATEWAYV2: &str = "apigatewayv2";

pub const ERR_ACTION_READING: &str = "reading";

fn human_friendly_service(service: &str) -> Option<&'static str> {
    match service {
        SERVICE_APIGATEWAYV2 => Some("API Gateway V2"),
        _ => None,
    }
}

/// Standard problem text: `<action> <service> <resource> (<id>)[: <error>]`.
///
/// An unrecognised service id is used verbatim.
pub fn problem_standard_message(
    service: &str,
    action: &str,
    resource: &str,
    id: &str,
    error: Option<&dyn Display>,
) -> String {
    let service = human_friendly_service(service).unwrap_or(service);
    match error {
        Some(error) => format!("{} {} {} ({}): {}", action, service, resource, id, error),
        None => format!("{} {} {} ({})", action, service, resource, id),
    }
}

/// Why a data source read stopped
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to decode configuration: {0}")]
    ConfigDecode(#[from] DecodeError),

    #[error(
        "{}",
        problem_standard_message(SERVICE_APIGATEWAYV2, ERR_ACTION_READING, .resource, &.id.to_string(), Some(.source))
    )]
    RemoteLookup {
        resource: &'static str,
        id: TfString,
        #[source]
        source: ClientError,
    },

    #[error("failed to encode state: {0}")]
    StateEncode(#[from] EncodeError),
}

impl ReadError {
    /// The single diagnostic reported for this failure
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ReadError::ConfigDecode(err) => {
                let diag = Diagnostic::error("Value Conversion Error", err.to_string());
                match err.attribute() {
                    Some(attribute) => diag.with_attribute(attribute),
                    None => diag,
                }
            }
            ReadError::RemoteLookup { source, .. } => {
                Diagnostic::error(self.to_string(), source.to_string())
            }
            ReadError::StateEncode(err) => {
                Diagnostic::error("State Encode Error", err.to_string()).with_attribute(err.attribute())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_standard_message_with_error() {
        let err = ClientError::NotFound("Invalid Integration identifier specified".to_string());
        let message = problem_standard_message(
            SERVICE_APIGATEWAYV2,
            ERR_ACTION_READING,
            "Integration Data Source",
            "\"int-1\"",
            Some(&err),
        );
        assert_eq!(
            message,
            "reading API Gateway V2 Integration Data Source (\"int-1\"): NotFoundException: Invalid Integration identifier specified"
        );
    }

    #[test]
    fn test_problem_standard_message_without_error() {
        let message = problem_standard_message("lambda", "creating", "Function", "f", None);
        assert_eq!(message, "creating lambda Function (f)");
    }

    #[test]
    fn test_remote_lookup_diagnostic() {
        let err = ReadError::RemoteLookup {
            resource: "Integration Data Source",
            id: TfString::Null,
            source: ClientError::Api {
                status: 500,
                message: "Internal".to_string(),
            },
        };
        let diag = err.to_diagnostic();
        assert!(diag.is_error());
        assert_eq!(
            diag.summary,
            "reading API Gateway V2 Integration Data Source (<null>): API error (status 500): Internal"
        );
        assert_eq!(diag.detail, "API error (status 500): Internal");
    }

    #[test]
    fn test_decode_diagnostic_points_at_attribute() {
        let diag = ReadError::from(DecodeError::MissingRequired("api_id".to_string())).to_diagnostic();
        assert_eq!(diag.summary, "Value Conversion Error");
        assert_eq!(diag.attribute.as_deref(), Some("api_id"));
    }

    #[test]
    fn test_encode_diagnostic() {
        let diag = ReadError::from(EncodeError::UnknownValue("description".to_string())).to_diagnostic();
        assert_eq!(diag.summary, "State Encode Error");
        assert_eq!(diag.attribute.as_deref(), Some("description"));
    }
}
