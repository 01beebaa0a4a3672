use std::fmt;

use serde_json::Value;

/// A string attribute value that keeps null and unknown apart from `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TfString {
    #[default]
    Null,
    /// Not yet known (only meaningful before a read completes)
    Unknown,
    Value(String),
}

impl TfString {
    pub fn new(value: impl Into<String>) -> Self {
        TfString::Value(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, TfString::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TfString::Unknown)
    }

    /// The contained string, or `""` when null or unknown
    pub fn value_str(&self) -> &str {
        match self {
            TfString::Value(s) => s,
            TfString::Null | TfString::Unknown => "",
        }
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            TfString::Value(s) => Some(s),
            TfString::Null | TfString::Unknown => None,
        }
    }

    /// JSON form used in state. Unknown has no JSON form.
    pub fn to_json(&self) -> Option<Value> {
        match self {
            TfString::Null => Some(Value::Null),
            TfString::Unknown => None,
            TfString::Value(s) => Some(Value::String(s.clone())),
        }
    }
}

impl From<Option<String>> for TfString {
    fn from(value: Option<String>) -> Self {
        value.map_or(TfString::Null, TfString::Value)
    }
}

impl From<Option<&String>> for TfString {
    fn from(value: Option<&String>) -> Self {
        value.cloned().into()
    }
}

impl From<&str> for TfString {
    fn from(value: &str) -> Self {
        TfString::new(value)
    }
}

/// Renders values the way problem messages quote identifiers:
/// `"abc"`, `<null>` or `<unknown>`.
impl fmt::Display for TfString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfString::Null => f.write_str("<null>"),
            TfString::Unknown => f.write_str("<unknown>"),
            TfString::Value(s) => write!(f, "{:?}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_maps_to_null_not_empty() {
        let value = TfString::from(None::<String>);
        assert!(value.is_null());
        assert_ne!(value, TfString::new(""));
        assert_eq!(value.to_json(), Some(Value::Null));
    }

    #[test]
    fn test_empty_string_is_a_value() {
        let value = TfString::from(Some(String::new()));
        assert_eq!(value, TfString::Value(String::new()));
        assert_eq!(value.to_json(), Some(Value::String(String::new())));
    }

    #[test]
    fn test_value_str_defaults_to_empty() {
        assert_eq!(TfString::Null.value_str(), "");
        assert_eq!(TfString::Unknown.value_str(), "");
        assert_eq!(TfString::new("abc").value_str(), "abc");
        assert_eq!(TfString::Unknown.as_deref(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(TfString::new("abc123").to_string(), "\"abc123\"");
        assert_eq!(TfString::Null.to_string(), "<null>");
        assert_eq!(TfString::Unknown.to_string(), "<unknown>");
    }

    #[test]
    fn test_unknown_has_no_json_form() {
        assert_eq!(TfString::Unknown.to_json(), None);
    }
}
