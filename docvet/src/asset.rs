//! Raw assets: an immutable byte sequence tagged with a declared format.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::DecodeOptions;
use crate::document::NormalizedDocument;
use crate::error::DecodeError;

/// The declared format of a [`RawAsset`].
///
/// Decoding dispatches purely on this tag — there is no content sniffing.
/// Use [`FormatKind::from_path`] when the caller wants the conventional
/// extension mapping, and [`FormatKind::from_str`] to parse a tag string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    /// PDF document; decodes to [`crate::TextDocument`].
    Pdf,
    /// XLSX workbook; decodes to [`crate::TableDocument`].
    Spreadsheet,
    /// Delimiter-separated values; decodes to [`crate::TableDocument`].
    Csv,
    /// ZIP archive; decodes to [`crate::ArchiveDocument`].
    Zip,
    /// JSON text; decodes to [`crate::StructuredDocument`].
    Json,
}

impl FormatKind {
    /// The canonical tag string for this format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FormatKind::Pdf => "pdf",
            FormatKind::Spreadsheet => "spreadsheet",
            FormatKind::Csv => "csv",
            FormatKind::Zip => "zip",
            FormatKind::Json => "json",
        }
    }

    /// Infer a format from a file extension.
    ///
    /// This is an explicit convenience for callers sourcing assets from
    /// files — `decode` itself never sniffs. Returns `None` for unknown
    /// extensions.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<FormatKind> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("pdf") => Some(FormatKind::Pdf),
            Some("xlsx" | "xls") => Some(FormatKind::Spreadsheet),
            Some("csv") => Some(FormatKind::Csv),
            Some("zip") => Some(FormatKind::Zip),
            Some("json") => Some(FormatKind::Json),
            _ => None,
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatKind {
    type Err = DecodeError;

    /// Parse a declared format tag. `xlsx`/`xls` are accepted as aliases
    /// for `spreadsheet`; matching is case-insensitive.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "pdf" => Ok(FormatKind::Pdf),
            "spreadsheet" | "xlsx" | "xls" => Ok(FormatKind::Spreadsheet),
            "csv" => Ok(FormatKind::Csv),
            "zip" => Ok(FormatKind::Zip),
            "json" => Ok(FormatKind::Json),
            _ => Err(DecodeError::UnsupportedFormat {
                tag: tag.to_owned(),
            }),
        }
    }
}

/// An opaque byte sequence plus its declared format.
///
/// Immutable once constructed, and consumed exactly once by
/// [`RawAsset::decode`] to produce a [`NormalizedDocument`]. Assets are
/// created by the caller — from an in-memory download, a file on disk via
/// [`crate::load_asset`], or an archive entry via
/// [`crate::ArchiveDocument::entry_asset`].
#[derive(Debug, Clone)]
pub struct RawAsset {
    bytes: Vec<u8>,
    format: FormatKind,
}

impl RawAsset {
    /// Wrap already-sourced bytes with their declared format.
    #[must_use]
    pub fn new(bytes: Vec<u8>, format: FormatKind) -> Self {
        RawAsset { bytes, format }
    }

    /// The declared format tag.
    #[must_use]
    pub fn format(&self) -> FormatKind {
        self.format
    }

    /// The raw bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes in the asset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the asset is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the asset, yielding the underlying bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Decode this asset with default options.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MalformedInput`] if the bytes cannot be parsed
    /// as the declared format.
    pub fn decode(self) -> Result<NormalizedDocument, DecodeError> {
        crate::format::decode(self)
    }

    /// Decode this asset with explicit [`DecodeOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MalformedInput`] if the bytes cannot be parsed
    /// as the declared format (including a `sheet` name that does not exist
    /// in the workbook).
    pub fn decode_with(self, options: &DecodeOptions) -> Result<NormalizedDocument, DecodeError> {
        crate::format::decode_with(self, options)
    }
}
