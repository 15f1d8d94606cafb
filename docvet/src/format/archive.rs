//! ZIP decoder: a forward-only cursor over archive entries.
//!
//! Entries are streamed in archive order and are never format-decoded
//! eagerly, so archives mixing supported and unsupported entry types never
//! fail as a whole. The bytes of at most one entry — the one the cursor is
//! on — are staged at a time; the archive is never buffered entry-by-entry
//! ahead of the cursor.
//!
//! **Hard constraint: sequential access only.** The underlying stream is
//! treated as forward-only and single-pass. Once the cursor has advanced
//! past an entry, that entry's bytes are gone — there is no random entry
//! lookup, and [`ArchiveDocument::entry_asset`] fails with
//! `ResourceUnavailable` for anything but the current entry.

use std::io::{Cursor, Read};

use tracing::trace;
use zip::read::read_zipfile_from_stream;

use crate::asset::{FormatKind, RawAsset};
use crate::error::DecodeError;

/// Signature of a ZIP local file header (first entry of a non-empty archive).
const LOCAL_FILE_HEADER: [u8; 4] = [0x50, 0x4b, 0x03, 0x04];
/// Signature of the end-of-central-directory record (an empty archive).
const END_OF_CENTRAL_DIR: [u8; 4] = [0x50, 0x4b, 0x05, 0x06];

/// Validate the ZIP signature and wrap the bytes in a streaming cursor.
///
/// Entry headers past the first are validated lazily as the cursor
/// advances, so a corrupt later entry surfaces from `next_entry`, not here.
/// The central directory is never parsed: forward-only iteration walks the
/// local entries directly and only uses the first central-directory
/// signature as the end-of-entries marker, so corrupt central-directory
/// records go unnoticed as long as the local entries are intact.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedInput`] if the bytes do not start with a
/// ZIP signature.
pub fn decode_zip(bytes: Vec<u8>) -> Result<ArchiveDocument, DecodeError> {
    if bytes.len() < 4 || (bytes[..4] != LOCAL_FILE_HEADER && bytes[..4] != END_OF_CENTRAL_DIR) {
        return Err(DecodeError::malformed(
            FormatKind::Zip,
            "missing ZIP signature",
        ));
    }
    Ok(ArchiveDocument::new(bytes))
}

/// A decoded ZIP archive: a forward-only cursor over its entries.
///
/// See the module docs for the sequential-access constraint.
#[derive(Debug)]
pub struct ArchiveDocument {
    reader: Cursor<Vec<u8>>,
    next_ordinal: usize,
    staged: Option<StagedEntry>,
    exhausted: bool,
}

/// Bytes of the entry the cursor is currently on.
#[derive(Debug)]
struct StagedEntry {
    ordinal: usize,
    bytes: Vec<u8>,
}

/// A handle to one archive entry: its name and position.
///
/// Does not hold the entry's bytes — pass the handle back to
/// [`ArchiveDocument::entry_asset`] before advancing the cursor to
/// materialize them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ArchiveEntry {
    /// The entry's name within the archive, as stored.
    pub name: String,
    /// Zero-based position in archive order.
    pub ordinal: usize,
}

impl ArchiveDocument {
    fn new(bytes: Vec<u8>) -> Self {
        // An empty archive is just the end-of-central-directory record; the
        // streaming reader expects a local file header, so never hand it one.
        let exhausted = bytes.starts_with(&END_OF_CENTRAL_DIR);
        ArchiveDocument {
            reader: Cursor::new(bytes),
            next_ordinal: 0,
            staged: None,
            exhausted,
        }
    }

    /// Advance the cursor to the next entry, in archive order.
    ///
    /// Staging replaces the previous entry's bytes — after this call, the
    /// previous entry can no longer be materialized.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MalformedInput`] on a corrupt entry header or
    /// a truncated entry body.
    pub fn next_entry(&mut self) -> Result<Option<ArchiveEntry>, DecodeError> {
        self.staged = None;
        if self.exhausted {
            return Ok(None);
        }
        match read_zipfile_from_stream(&mut self.reader) {
            Ok(Some(mut entry)) => {
                let name = entry.name().to_owned();
                let mut bytes = Vec::new();
                entry
                    .read_to_end(&mut bytes)
                    .map_err(|e| DecodeError::malformed(FormatKind::Zip, e))?;

                let ordinal = self.next_ordinal;
                self.next_ordinal += 1;
                trace!(name = %name, ordinal, len = bytes.len(), "staged archive entry");
                self.staged = Some(StagedEntry { ordinal, bytes });
                Ok(Some(ArchiveEntry { name, ordinal }))
            }
            Ok(None) => {
                self.exhausted = true;
                Ok(None)
            }
            Err(e) => Err(DecodeError::malformed(FormatKind::Zip, e)),
        }
    }

    /// Materialize an entry's bytes as a [`RawAsset`] with a caller-declared
    /// format, consuming the staged bytes.
    ///
    /// The resulting asset is independent of this archive: decoding it does
    /// not move the cursor, and the cursor moving does not invalidate it.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::ResourceUnavailable`] if the cursor has
    /// advanced past the entry, or if the entry's bytes were already taken.
    pub fn entry_asset(
        &mut self,
        entry: &ArchiveEntry,
        format: FormatKind,
    ) -> Result<RawAsset, DecodeError> {
        if let Some(staged) = self.staged.take_if(|s| s.ordinal == entry.ordinal) {
            return Ok(RawAsset::new(staged.bytes, format));
        }
        Err(DecodeError::unavailable(format!(
            "entry '{}' (#{}): the cursor has advanced past it; archive entries are single-pass",
            entry.name, entry.ordinal
        )))
    }
}
