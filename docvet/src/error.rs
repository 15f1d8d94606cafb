//! Error types for asset decoding and document queries.

use std::fmt::Display;

use thiserror::Error;

use crate::asset::FormatKind;

/// Errors raised by `decode` and by field accessors on decoded documents.
///
/// Every variant is terminal for the call that raised it. Retrying (for
/// example re-attempting a flaky download) is a caller-level policy and does
/// not belong in this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The format tag is not one of the recognized kinds.
    #[error("Unsupported format tag '{tag}'")]
    UnsupportedFormat {
        /// The raw tag string that failed to parse.
        tag: String,
    },

    /// The byte stream could not be parsed as the declared format.
    #[error("Malformed {format} input: {cause}")]
    MalformedInput {
        /// The format the bytes were declared as.
        format: FormatKind,
        /// The underlying parser's description of the problem.
        cause: String,
    },

    /// The document is valid but the requested row/column/path does not exist.
    ///
    /// Accessors never substitute an empty or default value for a missing
    /// field — callers must be able to distinguish "absent" from "empty".
    #[error("Field not found at '{path}': {cause}")]
    FieldNotFound {
        /// The offending path, row/column pair, or index.
        path: String,
        /// What went wrong, including the fields available at the failure point.
        cause: String,
    },

    /// The underlying stream could not be opened or read.
    ///
    /// Covers missing or oversized files and archive entries whose bytes are
    /// no longer reachable because the forward-only cursor has advanced.
    #[error("Resource unavailable: {context}")]
    ResourceUnavailable {
        /// Human-readable description of the unavailable resource.
        context: String,
    },
}

impl DecodeError {
    /// Shorthand for [`DecodeError::MalformedInput`] from any displayable parser error.
    #[must_use]
    pub fn malformed(format: FormatKind, cause: impl Display) -> Self {
        DecodeError::MalformedInput {
            format,
            cause: cause.to_string(),
        }
    }

    /// Shorthand for [`DecodeError::FieldNotFound`].
    #[must_use]
    pub fn field_not_found(path: impl Into<String>, cause: impl Display) -> Self {
        DecodeError::FieldNotFound {
            path: path.into(),
            cause: cause.to_string(),
        }
    }

    /// Shorthand for [`DecodeError::ResourceUnavailable`].
    #[must_use]
    pub fn unavailable(context: impl Display) -> Self {
        DecodeError::ResourceUnavailable {
            context: context.to_string(),
        }
    }
}
