//! Static attribute schemas.
//!
//! A schema is an ordered list of `(name, kind, mode)` tuples. The codec
//! walks this list to decode configuration and encode state, so there is no
//! reflection or annotation layer between the schema and the record types.

use serde::Serialize;
use serde_json::Value;
use strum::Display;

/// Value kind of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AttributeKind {
    String,
    Bool,
    Number,
    List,
    Map,
}

impl AttributeKind {
    /// Whether a non-null JSON value has this kind
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            AttributeKind::String => value.is_string(),
            AttributeKind::Bool => value.is_boolean(),
            AttributeKind::Number => value.is_number(),
            AttributeKind::List => value.is_array(),
            AttributeKind::Map => value.is_object(),
        }
    }
}

/// Who supplies an attribute's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttributeMode {
    /// Must be set in configuration
    Required,
    /// May be set in configuration
    Optional,
    /// Set by the data source only
    Computed,
    /// May be set in configuration; filled in by the data source otherwise
    OptionalComputed,
}

impl AttributeMode {
    pub fn is_required(&self) -> bool {
        matches!(self, AttributeMode::Required)
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, AttributeMode::Computed | AttributeMode::OptionalComputed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub mode: AttributeMode,
}

impl Attribute {
    pub const fn new(name: &'static str, kind: AttributeKind, mode: AttributeMode) -> Self {
        Self { name, kind, mode }
    }

    pub const fn required_string(name: &'static str) -> Self {
        Self::new(name, AttributeKind::String, AttributeMode::Required)
    }

    pub const fn optional_computed_string(name: &'static str) -> Self {
        Self::new(name, AttributeKind::String, AttributeMode::OptionalComputed)
    }

    pub const fn computed_string(name: &'static str) -> Self {
        Self::new(name, AttributeKind::String, AttributeMode::Computed)
    }
}

/// Ordered attribute list for one data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub version: u32,
    attributes: &'static [Attribute],
}

impl Schema {
    pub const fn new(version: u32, attributes: &'static [Attribute]) -> Self {
        Self {
            version,
            attributes,
        }
    }

    pub fn attributes(&self) -> &'static [Attribute] {
        self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&'static Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn required(self) -> impl Iterator<Item = &'static Attribute> {
        self.attributes.iter().filter(|a| a.mode.is_required())
    }

    pub fn computed(self) -> impl Iterator<Item = &'static Attribute> {
        self.attributes.iter().filter(|a| a.mode.is_computed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ATTRS: &[Attribute] = &[
        Attribute::required_string("name"),
        Attribute::optional_computed_string("id"),
        Attribute::computed_string("arn"),
    ];
    const SCHEMA: Schema = Schema::new(0, ATTRS);

    #[test]
    fn test_kind_accepts_matching_json() {
        assert!(AttributeKind::String.accepts(&json!("x")));
        assert!(!AttributeKind::String.accepts(&json!(1)));
        assert!(AttributeKind::Bool.accepts(&json!(true)));
        assert!(AttributeKind::Number.accepts(&json!(1.5)));
        assert!(AttributeKind::List.accepts(&json!([])));
        assert!(AttributeKind::Map.accepts(&json!({})));
    }

    #[test]
    fn test_schema_lookup_and_filters() {
        assert_eq!(SCHEMA.attribute("id").map(|a| a.mode), Some(AttributeMode::OptionalComputed));
        assert!(SCHEMA.attribute("missing").is_none());

        let required: Vec<_> = SCHEMA.required().map(|a| a.name).collect();
        assert_eq!(required, vec!["name"]);

        let computed: Vec<_> = SCHEMA.computed().map(|a| a.name).collect();
        assert_eq!(computed, vec!["id", "arn"]);
    }

    #[test]
    fn test_schema_serializes_in_declaration_order() {
        let value = serde_json::to_value(SCHEMA).unwrap();
        assert_eq!(
            value,
            json!({
                "version": 0,
                "attributes": [
                    {"name": "name", "kind": "string", "mode": "required"},
                    {"name": "id", "kind": "string", "mode": "optional_computed"},
                    {"name": "arn", "kind": "string", "mode": "computed"},
                ]
            })
        );
    }
}
