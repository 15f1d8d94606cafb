//! CSV decoder.
//!
//! Produces the same row/column shape as spreadsheet decoding so callers
//! can treat both uniformly. A header row is an ordinary first row — this
//! crate attaches no meaning to it.

use csv::ReaderBuilder;

use crate::asset::FormatKind;
use crate::document::TableDocument;
use crate::error::DecodeError;

/// Decode delimiter-separated bytes into a [`TableDocument`].
///
/// Quoting follows RFC 4180. Rows with unequal field counts are rejected as
/// malformed rather than padded — a partial document is never returned.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedInput`] on invalid UTF-8, unbalanced
/// quoting, or ragged rows.
pub fn decode_csv(bytes: &[u8], delimiter: u8) -> Result<TableDocument, DecodeError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| DecodeError::malformed(FormatKind::Csv, e))?;
        rows.push(record.iter().map(ToOwned::to_owned).collect());
    }
    Ok(TableDocument::new(rows))
}
