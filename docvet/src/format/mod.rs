//! Format-specific decoders and the tag-driven dispatch.
//!
//! Each sub-module handles one declared format:
//! - `pdf` — plain-text extraction, page order preserved
//! - `sheet` — XLSX workbook, cells coerced to strings
//! - `csv` — delimiter-separated values, RFC 4180 quoting
//! - `archive` — forward-only streaming over ZIP entries
//! - `json` — structured tree with key order preserved

pub mod archive;
pub mod csv;
pub mod json;
pub mod pdf;
pub mod sheet;

use tracing::debug;

use crate::asset::{FormatKind, RawAsset};
use crate::config::DecodeOptions;
use crate::document::NormalizedDocument;
use crate::error::DecodeError;

/// Decode an asset into its normalized document, with default options.
///
/// Dispatch is purely on the declared format tag — no content sniffing.
/// Each call is stateless and independent.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedInput`] if the bytes cannot be parsed
/// as the declared format.
pub fn decode(asset: RawAsset) -> Result<NormalizedDocument, DecodeError> {
    decode_with(asset, &DecodeOptions::default())
}

/// Decode an asset with explicit [`DecodeOptions`].
///
/// # Errors
///
/// Returns [`DecodeError::MalformedInput`] if the bytes cannot be parsed
/// as the declared format, including a `sheet` name missing from the
/// workbook.
pub fn decode_with(
    asset: RawAsset,
    options: &DecodeOptions,
) -> Result<NormalizedDocument, DecodeError> {
    debug!(format = %asset.format(), len = asset.len(), "decoding asset");
    match asset.format() {
        FormatKind::Pdf => pdf::decode_pdf(asset.bytes()).map(NormalizedDocument::Text),
        FormatKind::Spreadsheet => {
            sheet::decode_sheet(asset.bytes(), options.sheet.as_deref())
                .map(NormalizedDocument::Table)
        }
        FormatKind::Csv => {
            csv::decode_csv(asset.bytes(), options.csv_delimiter).map(NormalizedDocument::Table)
        }
        FormatKind::Zip => archive::decode_zip(asset.into_bytes()).map(NormalizedDocument::Archive),
        FormatKind::Json => json::decode_json(asset.bytes()).map(NormalizedDocument::Structured),
    }
}
