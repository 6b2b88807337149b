//! Comma-separated documents.

use super::FileDocument;
use crate::error::{Error, Result};
use crate::fs::MediaType;
use crate::io::ContentBytes;

/// Comma-separated text exported as `text/csv`.
///
/// The adapter carries the text unchanged. [`rows`](Self::rows) splits on
/// line breaks and commas only; quoted fields are not interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CsvDocument {
    text: String,
}

impl CsvDocument {
    /// Creates a CSV document from already formatted text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Creates a CSV document by joining fields with `,` and rows with `\n`.
    ///
    /// Fields are written unquoted, so a field may not contain `,`, `\r` or
    /// `\n`; such a field would come back from [`rows`](Self::rows) split.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`](crate::ErrorKind::InvalidInput) naming the
    /// zero-based row and column of the first field containing a separator.
    ///
    /// # Example
    ///
    /// ```
    /// use tempbox_core::document::CsvDocument;
    ///
    /// let document =
    ///     CsvDocument::from_rows([["address", "expires"], ["a@tempbox.dev", "3600"]]).unwrap();
    /// assert_eq!(document.text(), "address,expires\na@tempbox.dev,3600");
    /// ```
    pub fn from_rows<I, R, F>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = F>,
        F: AsRef<str>,
    {
        let mut lines = Vec::new();

        for (row_index, row) in rows.into_iter().enumerate() {
            let mut fields = Vec::new();
            for (column_index, field) in row.into_iter().enumerate() {
                let field = field.as_ref();
                if field.contains([',', '\r', '\n']) {
                    return Err(Error::invalid_input().with_message(format!(
                        "field at row {row_index} column {column_index} contains a separator"
                    )));
                }
                fields.push(field.to_owned());
            }
            lines.push(fields.join(","));
        }

        Ok(Self {
            text: lines.join("\n"),
        })
    }

    /// Returns the text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the document and returns the text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Iterates over rows, accepting both `\n` and `\r\n` line endings.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> {
        self.text.lines().map(|line| line.split(',').collect())
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.text.lines().count()
    }
}

impl FileDocument for CsvDocument {
    const MEDIA_TYPE: MediaType = MediaType::Csv;

    fn from_contents(contents: &ContentBytes) -> Result<Self> {
        Ok(Self::new(contents.to_str()?))
    }

    fn to_contents(&self) -> ContentBytes {
        ContentBytes::from(self.text.as_str())
    }
}

impl From<String> for CsvDocument {
    fn from(text: String) -> Self {
        Self { text }
    }
}
