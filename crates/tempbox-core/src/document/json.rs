//! JSON documents.

use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use super::{EncodeJson, FileDocument, JsonStyle};
use crate::error::{Error, Result};
use crate::fs::MediaType;
use crate::io::ContentBytes;

/// JSON bytes exported as `application/json`.
///
/// The document is a transparent carrier: bytes are stored and exported
/// verbatim, and nothing checks that they are well-formed unless
/// [`validate`](Self::validate) is called.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JsonDocument {
    contents: ContentBytes,
}

impl JsonDocument {
    /// Creates a document from a string holding JSON text.
    ///
    /// # Example
    ///
    /// ```
    /// use tempbox_core::document::JsonDocument;
    ///
    /// let document = JsonDocument::from_json_str(r#"{"a":1}"#);
    /// assert_eq!(document.as_bytes(), br#"{"a":1}"#);
    /// ```
    #[must_use]
    pub fn from_json_str(json: &str) -> Self {
        Self {
            contents: ContentBytes::from(json),
        }
    }

    /// Creates a document from JSON text given as UTF-16 code units.
    ///
    /// # Errors
    ///
    /// Returns [`StringEncodingFailed`](crate::ErrorKind::StringEncodingFailed)
    /// when the units contain an unpaired surrogate and so have no UTF-8 form.
    pub fn from_json_utf16(units: &[u16]) -> Result<Self> {
        let json = String::from_utf16(units).map_err(|e| {
            Error::string_encoding_failed()
                .with_message("json text is not representable as utf-8")
                .with_source(e)
        })?;

        Ok(Self {
            contents: ContentBytes::from(json),
        })
    }

    /// Creates a document from bytes, stored without validation.
    pub fn from_bytes(bytes: impl Into<ContentBytes>) -> Self {
        Self {
            contents: bytes.into(),
        }
    }

    /// Creates a document by asking `object` to encode itself.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectEncodingFailed`](crate::ErrorKind::ObjectEncodingFailed)
    /// with the encoder's error as the source.
    pub fn from_object<E: EncodeJson + ?Sized>(object: &E) -> Result<Self> {
        let bytes = object.encode_json().map_err(|cause| {
            Error::object_encoding_failed()
                .with_message("object failed to encode as json")
                .with_boxed_source(cause)
        })?;

        Ok(Self::from_bytes(bytes))
    }

    /// Creates a pretty-printed document from a `serde` value.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectEncodingFailed`](crate::ErrorKind::ObjectEncodingFailed)
    /// when serialization fails.
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Self::from_serializable_with(value, JsonStyle::Pretty)
    }

    /// Creates a document from a `serde` value in the given style.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectEncodingFailed`](crate::ErrorKind::ObjectEncodingFailed)
    /// when serialization fails.
    pub fn from_serializable_with<T: Serialize + ?Sized>(
        value: &T,
        style: JsonStyle,
    ) -> Result<Self> {
        let bytes = style.to_vec(value).map_err(|e| {
            Error::object_encoding_failed()
                .with_message("value failed to serialize as json")
                .with_source(e)
        })?;

        Ok(Self::from_bytes(bytes))
    }

    /// Decodes the payload into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectDecodingFailed`](crate::ErrorKind::ObjectDecodingFailed)
    /// when the bytes are not valid JSON for `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(self.contents.as_bytes()).map_err(|e| {
            Error::object_decoding_failed()
                .with_message("json payload failed to decode")
                .with_source(e)
        })
    }

    /// Checks that the payload is a single well-formed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`](crate::ErrorKind::InvalidInput) naming the
    /// line and column of the first syntax error.
    pub fn validate(&self) -> Result<()> {
        serde_json::from_slice::<IgnoredAny>(self.contents.as_bytes())
            .map(|_| ())
            .map_err(|e| {
                Error::invalid_input()
                    .with_message(format!(
                        "malformed json at line {} column {}",
                        e.line(),
                        e.column()
                    ))
                    .with_source(e)
            })
    }

    /// Returns the bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.contents.as_bytes()
    }

    /// Returns the payload as text.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingInvalid`](crate::ErrorKind::EncodingInvalid) when
    /// the bytes are not UTF-8.
    pub fn as_str(&self) -> Result<&str> {
        self.contents.to_str()
    }

    /// Returns the underlying payload.
    #[must_use]
    pub fn contents(&self) -> &ContentBytes {
        &self.contents
    }

    /// Consumes the document and returns the payload.
    #[must_use]
    pub fn into_contents(self) -> ContentBytes {
        self.contents
    }
}

impl FileDocument for JsonDocument {
    const MEDIA_TYPE: MediaType = MediaType::Json;

    fn from_contents(contents: &ContentBytes) -> Result<Self> {
        Ok(Self {
            contents: contents.clone(),
        })
    }

    fn to_contents(&self) -> ContentBytes {
        self.contents.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::error::Error as _;
    use std::fmt;

    use serde::Deserialize;
    use serde::ser::{self, Serializer};

    use super::*;
    use crate::BoxedError;
    use crate::ErrorKind;
    use crate::io::FileContainer;

    #[derive(Debug)]
    struct EncoderError(&'static str);

    impl fmt::Display for EncoderError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    impl std::error::Error for EncoderError {}

    struct Failing;

    impl EncodeJson for Failing {
        fn encode_json(&self) -> std::result::Result<Vec<u8>, BoxedError> {
            Err(Box::new(EncoderError("cyclic reference in folder tree")))
        }
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(ser::Error::custom("value is not encodable"))
        }
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Mailbox {
        address: String,
        unread: u32,
    }

    #[test]
    fn test_json_str_round_trip() {
        let document = JsonDocument::from_json_str(r#"{"a":1}"#);
        let container = document.to_container();

        assert_eq!(container.media_type(), MediaType::Json);
        assert_eq!(container.len(), 7);

        let restored = JsonDocument::from_container(&container).unwrap();
        assert_eq!(restored.as_bytes(), br#"{"a":1}"#);
        assert_eq!(restored, document);
    }

    #[test]
    fn test_bytes_are_carried_verbatim() {
        let raw = b"  {\"b\" :\t[1,2 ,3]}\n\n".to_vec();
        let container = JsonDocument::from_bytes(raw.clone()).to_container();

        assert_eq!(
            container.regular_file_contents().unwrap().as_bytes(),
            raw.as_slice()
        );
    }

    #[test]
    fn test_malformed_bytes_are_not_rejected() {
        let document = JsonDocument::from_bytes("{not json");
        let restored = JsonDocument::from_container(&document.to_container()).unwrap();

        assert_eq!(restored.as_bytes(), b"{not json");
        assert_eq!(
            restored.validate().unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_from_utf16() {
        let units: Vec<u16> = r#"{"name":"Jürgen"}"#.encode_utf16().collect();
        let document = JsonDocument::from_json_utf16(&units).unwrap();
        assert_eq!(document.as_str().unwrap(), r#"{"name":"Jürgen"}"#);
    }

    #[test]
    fn test_from_utf16_unpaired_surrogate() {
        let units = [u16::from(b'"'), 0xD800, u16::from(b'"')];
        let error = JsonDocument::from_json_utf16(&units).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::StringEncodingFailed);
    }

    #[test]
    fn test_object_encoding_failure_is_wrapped() {
        let error = JsonDocument::from_object(&Failing).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::ObjectEncodingFailed);
        let source = error.source().expect("encoder error should be attached");
        assert!(source.to_string().contains("cyclic reference"));
        assert!(!error.to_string().contains("cyclic reference"));
    }

    #[test]
    fn test_serializable_failure_is_wrapped() {
        let error = JsonDocument::from_serializable(&Unserializable).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::ObjectEncodingFailed);
        let source = error.source().expect("serializer error should be attached");
        assert!(source.to_string().contains("value is not encodable"));
        assert!(!error.to_string().contains("value is not encodable"));
    }

    #[test]
    fn test_serializable_is_pretty_by_default() {
        let value = BTreeMap::from([("a", 1)]);

        let pretty = JsonDocument::from_serializable(&value).unwrap();
        assert_eq!(pretty.as_str().unwrap(), "{\n  \"a\": 1\n}");

        let compact = JsonDocument::from_serializable_with(&value, JsonStyle::Compact).unwrap();
        assert_eq!(compact.as_str().unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn test_decode() {
        let mailbox = Mailbox {
            address: "a@tempbox.dev".to_owned(),
            unread: 3,
        };

        let document = JsonDocument::from_serializable(&mailbox).unwrap();
        let container = document.to_container();
        let decoded: Mailbox = JsonDocument::from_container(&container)
            .unwrap()
            .decode()
            .unwrap();

        assert_eq!(decoded, mailbox);
    }

    #[test]
    fn test_decode_failure() {
        let document = JsonDocument::from_json_str(r#"{"address":1}"#);
        let error = document.decode::<Mailbox>().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ObjectDecodingFailed);
        assert_eq!(
            error.to_string(),
            "ObjectDecodingFailed: json payload failed to decode"
        );

        let source = error.source().expect("decoder error should be attached");
        assert!(source.to_string().contains("invalid type"));
    }
}
