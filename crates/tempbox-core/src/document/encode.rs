//! Object-to-JSON encoding capability.

use serde::Serialize;

use crate::error::BoxedError;

/// A value that can render itself as JSON bytes.
///
/// Implement this for types that do not go through `serde`, or that need
/// control over their JSON form. Failures are returned as-is and wrapped by
/// [`JsonDocument::from_object`](super::JsonDocument::from_object).
///
/// # Example
///
/// ```
/// use tempbox_core::BoxedError;
/// use tempbox_core::document::{EncodeJson, JsonDocument};
///
/// struct Address(&'static str);
///
/// impl EncodeJson for Address {
///     fn encode_json(&self) -> Result<Vec<u8>, BoxedError> {
///         Ok(format!("{{\n  \"address\": \"{}\"\n}}", self.0).into_bytes())
///     }
/// }
///
/// let document = JsonDocument::from_object(&Address("a@tempbox.dev")).unwrap();
/// assert!(document.as_str().unwrap().contains("a@tempbox.dev"));
/// ```
pub trait EncodeJson {
    /// Produces pretty-printed JSON bytes.
    fn encode_json(&self) -> Result<Vec<u8>, BoxedError>;

    /// Produces the same JSON as a string.
    fn encode_json_string(&self) -> Result<String, BoxedError> {
        let bytes = self.encode_json()?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Formatting used when encoding `serde` values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    /// Two-space indented output.
    #[default]
    Pretty,
    /// Output without insignificant whitespace.
    Compact,
}

impl JsonStyle {
    /// Serializes `value` in this style.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the value cannot be serialized, for
    /// example a map with non-string keys.
    pub fn to_vec<T: Serialize + ?Sized>(self, value: &T) -> serde_json::Result<Vec<u8>> {
        match self {
            Self::Pretty => serde_json::to_vec_pretty(value),
            Self::Compact => serde_json::to_vec(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    struct Raw(Vec<u8>);

    impl EncodeJson for Raw {
        fn encode_json(&self) -> Result<Vec<u8>, BoxedError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_encode_json_string() {
        let raw = Raw(b"[1, 2]".to_vec());
        assert_eq!(raw.encode_json_string().unwrap(), "[1, 2]");
    }

    #[test]
    fn test_encode_json_string_rejects_invalid_utf8() {
        let raw = Raw(vec![0xFF]);
        assert!(raw.encode_json_string().is_err());
    }

    #[test]
    fn test_styles() {
        let value = BTreeMap::from([("a", 1)]);

        assert_eq!(JsonStyle::Compact.to_vec(&value).unwrap(), b"{\"a\":1}");
        assert_eq!(
            JsonStyle::Pretty.to_vec(&value).unwrap(),
            b"{\n  \"a\": 1\n}"
        );
        assert_eq!(JsonStyle::default(), JsonStyle::Pretty);
    }
}
