//! Conversions from caller-supplied values into masks.
//!
//! Strings are parsed with `*` as the default, so every component the
//! string leaves out matches anything. Records are used as they are.
//! [`MaskInput`] is the dynamic form read from JSON-like data, where
//! anything other than a string, an object of record fields, or `null`
//! is rejected.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::codec::parse_with_default;
use super::record::{UrlRecord, WILDCARD};
use crate::error::UrlMaskError;

/// Anything that can be matched as a mask.
pub trait AsMask {
    fn to_mask(&self) -> Cow<'_, UrlRecord>;
}

impl AsMask for UrlRecord {
    fn to_mask(&self) -> Cow<'_, UrlRecord> {
        Cow::Borrowed(self)
    }
}

impl AsMask for str {
    fn to_mask(&self) -> Cow<'_, UrlRecord> {
        Cow::Owned(parse_with_default(self, WILDCARD))
    }
}

impl AsMask for String {
    fn to_mask(&self) -> Cow<'_, UrlRecord> {
        self.as_str().to_mask()
    }
}

impl<T: AsMask + ?Sized> AsMask for &T {
    fn to_mask(&self) -> Cow<'_, UrlRecord> {
        (**self).to_mask()
    }
}

impl AsMask for MaskInput {
    fn to_mask(&self) -> Cow<'_, UrlRecord> {
        match self {
            Self::Text(text) => text.to_mask(),
            Self::Fields(partial) => Cow::Owned(UrlRecord::build_mask(partial)),
        }
    }
}

/// A mask as written in a config file: a string or a partial record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum MaskInput {
    Text(String),
    Fields(UrlRecord),
}

impl Default for MaskInput {
    fn default() -> Self {
        Self::Fields(UrlRecord::empty())
    }
}

impl TryFrom<&serde_json::Value> for MaskInput {
    type Error = UrlMaskError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(Self::default()),
            serde_json::Value::String(text) => Ok(Self::Text(text.clone())),
            serde_json::Value::Object(_) => UrlRecord::deserialize(value)
                .map(Self::Fields)
                .map_err(|e| UrlMaskError::InvalidMaskShape(e.to_string())),
            other => Err(UrlMaskError::InvalidMaskShape(format!(
                "expected a string, an object of URL fields, or null, got {}",
                json_kind(other)
            ))),
        }
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn string_mask_defaults_to_wildcards() {
        let mask = "example.com".to_mask();
        assert_eq!(mask.hostname(), Some("example.com"));
        assert_eq!(mask.port(), Some("*"));
    }

    #[test]
    fn null_is_the_wildcard_mask() {
        let input = MaskInput::try_from(&json!(null)).unwrap();
        assert_eq!(*input.to_mask(), UrlRecord::wildcard());
    }

    #[test]
    fn object_is_overlaid_on_wildcards() {
        let input = MaskInput::try_from(&json!({"hostname": "a.b", "path": "/x"})).unwrap();
        let mask = input.to_mask();
        assert_eq!(mask.hostname(), Some("a.b"));
        assert_eq!(mask.path(), Some("/x"));
        assert_eq!(mask.query(), Some("*"));
    }

    #[test]
    fn other_shapes_fail_fast() {
        for value in [json!(42), json!(true), json!(["a"])] {
            let err = MaskInput::try_from(&value).unwrap_err();
            assert!(matches!(err, UrlMaskError::InvalidMaskShape(_)));
        }
    }

    #[test]
    fn object_with_unknown_field_fails() {
        let err = MaskInput::try_from(&json!({"host": "a"})).unwrap_err();
        assert!(matches!(err, UrlMaskError::InvalidMaskShape(_)));
    }
}
