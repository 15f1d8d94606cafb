//! The normalized document model: the decoded, queryable form of a
//! [`crate::RawAsset`].
//!
//! Each variant is produced deterministically by exactly one decoder and is
//! meant to be queried and discarded — nothing here persists state across
//! calls.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::asset::FormatKind;
use crate::error::DecodeError;
use crate::format::archive::ArchiveDocument;
use crate::path;

/// A decoded asset, polymorphic over the declared format.
#[derive(Debug)]
#[non_exhaustive]
pub enum NormalizedDocument {
    /// Concatenated plain text (from PDF).
    Text(TextDocument),
    /// Ordered rows of string cells (from spreadsheet or CSV).
    Table(TableDocument),
    /// Forward-only cursor over archive entries (from ZIP).
    Archive(ArchiveDocument),
    /// A JSON-like tree (from JSON).
    Structured(StructuredDocument),
}

impl NormalizedDocument {
    /// The text variant, if this document is one.
    #[must_use]
    pub fn into_text(self) -> Option<TextDocument> {
        match self {
            NormalizedDocument::Text(doc) => Some(doc),
            _ => None,
        }
    }

    /// The table variant, if this document is one.
    #[must_use]
    pub fn into_table(self) -> Option<TableDocument> {
        match self {
            NormalizedDocument::Table(doc) => Some(doc),
            _ => None,
        }
    }

    /// The archive variant, if this document is one.
    #[must_use]
    pub fn into_archive(self) -> Option<ArchiveDocument> {
        match self {
            NormalizedDocument::Archive(doc) => Some(doc),
            _ => None,
        }
    }

    /// The structured variant, if this document is one.
    #[must_use]
    pub fn into_structured(self) -> Option<StructuredDocument> {
        match self {
            NormalizedDocument::Structured(doc) => Some(doc),
            _ => None,
        }
    }
}

/// Plain text extracted from a PDF, all pages concatenated in page order.
///
/// No layout or positional metadata is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    full_text: String,
}

impl TextDocument {
    /// Wrap already-extracted text. Decoders use this; it is public mainly
    /// for building fixtures.
    #[must_use]
    pub fn new(full_text: String) -> Self {
        TextDocument { full_text }
    }

    /// The full extracted text.
    #[must_use]
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// Whether the extracted text contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.full_text.contains(needle)
    }
}

/// Tabular data: an ordered sequence of rows of string cells.
///
/// Spreadsheet and CSV decoding both produce this shape, so callers can
/// treat the two uniformly. Row and column order are preserved from the
/// source; cells are coerced to strings without formula evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDocument {
    rows: Vec<Vec<String>>,
}

impl TableDocument {
    /// Wrap already-decoded rows. Decoders use this; it is public mainly
    /// for building fixtures.
    #[must_use]
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        TableDocument { rows }
    }

    /// All rows, in source order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// A single row.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldNotFound`] if `row` is out of range.
    pub fn row(&self, row: usize) -> Result<&[String], DecodeError> {
        self.rows.get(row).map(Vec::as_slice).ok_or_else(|| {
            DecodeError::field_not_found(
                format!("[{row}]"),
                format!("row {row} out of range (table has {} rows)", self.rows.len()),
            )
        })
    }

    /// Number of columns in one row.
    ///
    /// Rows are not padded to a common width, so the count is per-row.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldNotFound`] if `row` is out of range.
    pub fn column_count(&self, row: usize) -> Result<usize, DecodeError> {
        Ok(self.row(row)?.len())
    }

    /// A single cell, by zero-based row and column.
    ///
    /// A missing cell is an error, never an empty string — an empty cell
    /// that exists in the source decodes as `""` and is distinguishable
    /// from an absent one.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldNotFound`] if the row or column is out
    /// of range.
    pub fn cell(&self, row: usize, col: usize) -> Result<&str, DecodeError> {
        let cells = self.row(row)?;
        cells.get(col).map(String::as_str).ok_or_else(|| {
            DecodeError::field_not_found(
                format!("[{row}][{col}]"),
                format!("column {col} out of range (row {row} has {} columns)", cells.len()),
            )
        })
    }
}

/// A JSON-like tree with path-based lookup.
///
/// Object key order is preserved from the source for round-trip fidelity,
/// but queries address keys by name, never by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredDocument {
    root: Value,
}

impl StructuredDocument {
    /// Wrap an already-parsed tree. Decoders use this; it is public mainly
    /// for building fixtures.
    #[must_use]
    pub fn new(root: Value) -> Self {
        StructuredDocument { root }
    }

    /// The root of the tree.
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Resolve a dotted/indexed path (`"GlossDiv.title"`, `"entries[0].name"`).
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldNotFound`] when the path does not exist;
    /// the error names the offending segment and the fields available at
    /// the failure point.
    pub fn path(&self, path: &str) -> Result<&Value, DecodeError> {
        path::resolve(&self.root, path)
    }

    /// Resolve a path expecting a string value.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldNotFound`] if the path is missing or the
    /// value at it is not a string.
    pub fn string_at(&self, path: &str) -> Result<&str, DecodeError> {
        let value = self.path(path)?;
        value.as_str().ok_or_else(|| {
            DecodeError::field_not_found(
                path,
                format!("expected a string, found {}", path::json_kind(value)),
            )
        })
    }

    /// Resolve a path expecting an integer value.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldNotFound`] if the path is missing or the
    /// value at it is not an integer.
    pub fn i64_at(&self, path: &str) -> Result<i64, DecodeError> {
        let value = self.path(path)?;
        value.as_i64().ok_or_else(|| {
            DecodeError::field_not_found(
                path,
                format!("expected an integer, found {}", path::json_kind(value)),
            )
        })
    }

    /// Resolve a path expecting a boolean value.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldNotFound`] if the path is missing or the
    /// value at it is not a boolean.
    pub fn bool_at(&self, path: &str) -> Result<bool, DecodeError> {
        let value = self.path(path)?;
        value.as_bool().ok_or_else(|| {
            DecodeError::field_not_found(
                path,
                format!("expected a boolean, found {}", path::json_kind(value)),
            )
        })
    }

    /// Strict decode-to-shape: deserialize the tree onto a caller-supplied
    /// target type.
    ///
    /// This is the typed alternative to [`StructuredDocument::path`]; both
    /// run over the same decoded tree.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MalformedInput`] if the tree does not match
    /// the target shape.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        serde_json::from_value(self.root.clone())
            .map_err(|e| DecodeError::malformed(FormatKind::Json, e))
    }
}
