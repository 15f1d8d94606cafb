//! PDF decoder.
//!
//! Extracts concatenated plain text from all pages, preserving page order.
//! Layout and positional metadata are discarded.

use crate::asset::FormatKind;
use crate::document::TextDocument;
use crate::error::DecodeError;

/// Decode PDF bytes into a [`TextDocument`].
///
/// # Errors
///
/// Returns [`DecodeError::MalformedInput`] if the bytes are not a parseable
/// PDF document.
pub fn decode_pdf(bytes: &[u8]) -> Result<TextDocument, DecodeError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| DecodeError::malformed(FormatKind::Pdf, e))?;
    Ok(TextDocument::new(text))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_malformed() {
        let err = decode_pdf(b"not a pdf at all").unwrap_err();
        assert!(
            matches!(err, DecodeError::MalformedInput { format: FormatKind::Pdf, .. }),
            "got: {err}"
        );
    }

    #[test]
    fn test_empty_bytes_are_malformed() {
        let err = decode_pdf(b"").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedInput { .. }), "got: {err}");
    }
}
