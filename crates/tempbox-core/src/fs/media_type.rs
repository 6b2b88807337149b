//! Declared media types for exportable content
//!
//! This module provides the [`MediaType`] enum used to tag containers for the
//! host's file-picker and export integration.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Media type advertised by a document variant
///
/// The string form of each variant is its MIME type, so `Display`,
/// `FromStr` and serde all speak `text/plain`, `application/json`, etc.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, IntoStaticStr, Display, EnumString, EnumIter)]
#[derive(Serialize, Deserialize)]
pub enum MediaType {
    /// Plain UTF-8 text
    #[strum(serialize = "text/plain")]
    #[serde(rename = "text/plain")]
    PlainText,
    /// JSON payload
    #[strum(serialize = "application/json")]
    #[serde(rename = "application/json")]
    Json,
    /// Comma-separated values
    #[strum(serialize = "text/csv")]
    #[serde(rename = "text/csv")]
    Csv,
    /// Arbitrary binary data
    #[default]
    #[strum(serialize = "application/octet-stream")]
    #[serde(rename = "application/octet-stream")]
    Data,
}

impl MediaType {
    /// Returns the MIME string for this media type
    #[must_use]
    pub fn mime(&self) -> &'static str {
        (*self).into()
    }

    /// Returns the preferred filename extension, without the dot
    #[must_use]
    pub fn preferred_extension(&self) -> &'static str {
        match self {
            Self::PlainText => "txt",
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Data => "bin",
        }
    }

    /// Looks up a media type by filename extension, case-insensitively
    ///
    /// Unknown extensions yield `None`; callers usually fall back to
    /// [`MediaType::Data`].
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        match extension.as_str() {
            "txt" | "text" | "log" | "eml" => Some(Self::PlainText),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "bin" | "dat" => Some(Self::Data),
            _ => None,
        }
    }

    /// Looks up a media type by MIME string, ignoring parameters such as
    /// `; charset=utf-8`
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        Self::iter().find(|media_type| media_type.mime().eq_ignore_ascii_case(essence))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_media_type_display() {
        assert_eq!(MediaType::PlainText.to_string(), "text/plain");
        assert_eq!(MediaType::Json.to_string(), "application/json");
        assert_eq!(MediaType::Csv.to_string(), "text/csv");
        assert_eq!(MediaType::Data.to_string(), "application/octet-stream");
    }

    #[test]
    fn test_display_matches_mime() {
        for media_type in MediaType::iter() {
            assert_eq!(media_type.as_ref(), media_type.mime());
        }
    }

    #[test]
    fn test_mime_matches_parsed_and_serialized_forms() {
        for media_type in MediaType::iter() {
            let mime = media_type.mime();
            assert_eq!(MediaType::from_str(mime).unwrap(), media_type);
            assert_eq!(MediaType::from_mime(mime), Some(media_type));

            let serialized = serde_json::to_string(&media_type).unwrap();
            assert_eq!(serialized, format!("\"{mime}\""));
        }
    }

    #[test]
    fn test_media_type_from_str() {
        assert_eq!(MediaType::from_str("text/csv").unwrap(), MediaType::Csv);
        assert!(MediaType::from_str("text/html").is_err());
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(MediaType::from_extension("TXT"), Some(MediaType::PlainText));
        assert_eq!(MediaType::from_extension(".json"), Some(MediaType::Json));
        assert_eq!(MediaType::from_extension("csv"), Some(MediaType::Csv));
        assert_eq!(MediaType::from_extension("pdf"), None);
    }

    #[test]
    fn test_from_mime_ignores_parameters() {
        assert_eq!(
            MediaType::from_mime("text/plain; charset=utf-8"),
            Some(MediaType::PlainText)
        );
        assert_eq!(MediaType::from_mime("Application/JSON"), Some(MediaType::Json));
        assert_eq!(MediaType::from_mime("image/png"), None);
    }

    #[test]
    fn test_default() {
        assert_eq!(MediaType::default(), MediaType::Data);
    }

    #[test]
    fn test_serialization() {
        let serialized = serde_json::to_string(&MediaType::Csv).unwrap();
        assert_eq!(serialized, "\"text/csv\"");

        let deserialized: MediaType = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, MediaType::Csv);
    }
}
