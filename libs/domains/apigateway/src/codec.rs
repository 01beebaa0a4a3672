//! Reflection-free conversion between JSON objects and typed records.
//!
//! A [`Record`] exposes one [`TfString`] per schema attribute through
//! name-based accessors; [`decode`] and [`encode`] walk the schema list and
//! move values in or out of the record.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::schema::{AttributeKind, AttributeMode, Schema};
use crate::value::TfString;

pub type Object = Map<String, Value>;

/// A typed record backing one schema
pub trait Record: Default {
    fn schema() -> &'static Schema;

    fn field(&self, name: &str) -> Option<&TfString>;

    fn field_mut(&mut self, name: &str) -> Option<&mut TfString>;
}

/// Configuration could not be decoded into a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("configuration must be an object, found {0}")]
    NotAnObject(&'static str),

    #[error("an argument named \"{0}\" is not expected here")]
    UnsupportedAttribute(String),

    #[error("attribute \"{attribute}\" must be {expected}, found {found}")]
    TypeMismatch {
        attribute: String,
        expected: AttributeKind,
        found: &'static str,
    },

    #[error("attribute \"{attribute}\" has kind {kind}, which this record cannot hold")]
    UnsupportedKind {
        attribute: String,
        kind: AttributeKind,
    },

    #[error("the argument \"{0}\" is required, but no definition was found")]
    MissingRequired(String),

    #[error("attribute \"{0}\" has no corresponding record field")]
    NoField(String),
}

impl DecodeError {
    /// Attribute the error refers to, if any
    pub fn attribute(&self) -> Option<&str> {
        match self {
            DecodeError::NotAnObject(_) => None,
            DecodeError::UnsupportedAttribute(name)
            | DecodeError::MissingRequired(name)
            | DecodeError::NoField(name) => Some(name),
            DecodeError::TypeMismatch { attribute, .. }
            | DecodeError::UnsupportedKind { attribute, .. } => Some(attribute),
        }
    }
}

/// A record could not be encoded into state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("attribute \"{0}\" is still unknown after read")]
    UnknownValue(String),

    #[error("attribute \"{0}\" has no corresponding record field")]
    MissingField(String),
}

impl EncodeError {
    pub fn attribute(&self) -> &str {
        match self {
            EncodeError::UnknownValue(name) | EncodeError::MissingField(name) => name,
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}

/// Decode a configuration object into a fresh record.
///
/// Absent keys and JSON null both decode to [`TfString::Null`]. Keys that
/// the schema does not declare are rejected.
pub fn decode<R: Record>(value: &Value) -> Result<R, DecodeError> {
    let schema = R::schema();
    let object = value
        .as_object()
        .ok_or_else(|| DecodeError::NotAnObject(json_type_name(value)))?;

    if let Some(name) = object.keys().find(|k| schema.attribute(k).is_none()) {
        return Err(DecodeError::UnsupportedAttribute(name.clone()));
    }

    let mut record = R::default();
    for attribute in schema.attributes() {
        let raw = object.get(attribute.name).unwrap_or(&Value::Null);

        let decoded = match raw {
            Value::Null if attribute.mode.is_required() => {
                return Err(DecodeError::MissingRequired(attribute.name.to_string()));
            }
            Value::Null => TfString::Null,
            Value::String(s) if attribute.kind == AttributeKind::String => TfString::new(s.as_str()),
            other if attribute.kind.accepts(other) => {
                return Err(DecodeError::UnsupportedKind {
                    attribute: attribute.name.to_string(),
                    kind: attribute.kind,
                });
            }
            other => {
                return Err(DecodeError::TypeMismatch {
                    attribute: attribute.name.to_string(),
                    expected: attribute.kind,
                    found: json_type_name(other),
                });
            }
        };

        if !decoded.is_null() && attribute.mode == AttributeMode::Computed {
            debug!(attribute = attribute.name, "Configured value for computed attribute");
        }

        *record
            .field_mut(attribute.name)
            .ok_or_else(|| DecodeError::NoField(attribute.name.to_string()))? = decoded;
    }

    Ok(record)
}

/// Encode every schema attribute of `record` into a state object.
pub fn encode<R: Record>(record: &R) -> Result<Object, EncodeError> {
    let mut object = Object::new();
    for attribute in R::schema().attributes() {
        let field = record
            .field(attribute.name)
            .ok_or_else(|| EncodeError::MissingField(attribute.name.to_string()))?;
        let value = field
            .to_json()
            .ok_or_else(|| EncodeError::UnknownValue(attribute.name.to_string()))?;
        object.insert(attribute.name.to_string(), value);
    }
    Ok(object)
}

/// Configuration handed to a read
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    raw: Value,
}

impl Config {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn get<R: Record>(&self) -> Result<R, DecodeError> {
        decode(&self.raw)
    }
}

/// State produced by a read. Stays empty unless a record is fully encoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct State(Option<Object>);

impl State {
    pub fn set<R: Record>(&mut self, record: &R) -> Result<(), EncodeError> {
        let object = encode(record)?;
        self.0 = Some(object);
        Ok(())
    }

    pub fn is_written(&self) -> bool {
        self.0.is_some()
    }

    pub fn as_object(&self) -> Option<&Object> {
        self.0.as_ref()
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.0.as_ref().and_then(|o| o.get(name))
    }

    pub fn into_object(self) -> Option<Object> {
        self.0
    }
}
