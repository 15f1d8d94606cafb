//! XLSX decoder.
//!
//! Reads one worksheet (the first by default) into the shared table shape.
//! Cells are rendered to strings; formulas are not evaluated — a formula
//! cell yields its last computed value, as stored in the workbook.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use tracing::trace;

use crate::asset::FormatKind;
use crate::document::TableDocument;
use crate::error::DecodeError;

/// Decode XLSX bytes into a [`TableDocument`].
///
/// `sheet` selects a worksheet by name; `None` selects the first sheet.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedInput`] if the bytes are not a readable
/// workbook, the workbook has no sheets, or the named sheet is missing.
pub fn decode_sheet(bytes: &[u8], sheet: Option<&str>) -> Result<TableDocument, DecodeError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| DecodeError::malformed(FormatKind::Spreadsheet, e))?;

    let range = match sheet {
        Some(name) => workbook
            .worksheet_range(name)
            .map_err(|e| DecodeError::malformed(FormatKind::Spreadsheet, e))?,
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| {
                DecodeError::malformed(FormatKind::Spreadsheet, "workbook contains no sheets")
            })?
            .map_err(|e| DecodeError::malformed(FormatKind::Spreadsheet, e))?,
    };

    trace!(rows = range.height(), cols = range.width(), "read worksheet range");

    let rows = range
        .rows()
        .map(|row| row.iter().map(render_cell).collect())
        .collect();
    Ok(TableDocument::new(rows))
}

/// Render a cell to its string form. Empty cells become `""` so the table
/// keeps its rectangular shape.
fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_malformed() {
        let err = decode_sheet(b"definitely not a zip container", None).unwrap_err();
        assert!(
            matches!(err, DecodeError::MalformedInput { format: FormatKind::Spreadsheet, .. }),
            "got: {err}"
        );
    }

    #[test]
    fn test_render_cell_empty() {
        assert_eq!(render_cell(&Data::Empty), "");
    }

    #[test]
    fn test_render_cell_scalars() {
        assert_eq!(render_cell(&Data::String("Country".to_owned())), "Country");
        assert_eq!(render_cell(&Data::Int(1)), "1");
        assert_eq!(render_cell(&Data::Bool(true)), "true");
    }
}
