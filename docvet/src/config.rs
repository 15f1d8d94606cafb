//! Decode options.
//!
//! Kept separate from the asset itself: the declared format travels with the
//! bytes, while per-call knobs (delimiter, sheet selection) are supplied by
//! the caller at decode time.

/// Options for a single `decode_with` call.
///
/// The defaults reproduce plain `decode`: comma-delimited CSV and the first
/// worksheet of a workbook.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct DecodeOptions {
    /// Field delimiter for CSV decoding (default: `,`).
    ///
    /// Quoting follows RFC 4180 regardless of the delimiter.
    pub csv_delimiter: u8,
    /// Worksheet to decode from a spreadsheet, by name.
    ///
    /// `None` (the default) selects the first sheet. Naming a sheet that
    /// does not exist in the workbook is a `MalformedInput` error, not a
    /// silent fallback.
    pub sheet: Option<String>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            csv_delimiter: b',',
            sheet: None,
        }
    }
}
