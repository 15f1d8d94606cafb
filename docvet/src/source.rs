//! Filesystem sourcing of raw assets.
//!
//! Sourcing is otherwise the caller's responsibility (a download, an
//! archive entry, an in-memory buffer); this module covers the one source
//! every test suite needs — a local file — with a bounded read.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::asset::{FormatKind, RawAsset};
use crate::error::DecodeError;

/// Default per-asset size limit for [`load_asset`]: 10 MB.
pub const DEFAULT_MAX_ASSET_SIZE: u64 = 10_485_760;

/// Load a file as a [`RawAsset`] with the declared format, enforcing
/// [`DEFAULT_MAX_ASSET_SIZE`].
///
/// # Errors
///
/// Returns [`DecodeError::ResourceUnavailable`] if the file cannot be
/// opened or read, or exceeds the size limit.
pub fn load_asset(path: &Path, format: FormatKind) -> Result<RawAsset, DecodeError> {
    load_asset_bounded(path, format, DEFAULT_MAX_ASSET_SIZE)
}

/// Load a file as a [`RawAsset`] with an explicit size limit.
///
/// Uses a bounded streaming read (`Read::take`) so the size check and the
/// read are the same operation — the file is never read unbounded and then
/// measured.
///
/// # Errors
///
/// Returns [`DecodeError::ResourceUnavailable`] if the file cannot be
/// opened or read, or exceeds `max_bytes`.
pub fn load_asset_bounded(
    path: &Path,
    format: FormatKind,
    max_bytes: u64,
) -> Result<RawAsset, DecodeError> {
    let file = std::fs::File::open(path).map_err(|e| {
        DecodeError::unavailable(format!("failed to open {}: {e}", path.display()))
    })?;

    // Read at most max_bytes + 1 so oversize is detectable without a
    // separate (racy) metadata check.
    let mut bytes = Vec::new();
    file.take(max_bytes.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|e| {
            DecodeError::unavailable(format!("failed to read {}: {e}", path.display()))
        })?;

    if bytes.len() as u64 > max_bytes {
        return Err(DecodeError::unavailable(format!(
            "{} exceeds the maximum asset size of {max_bytes} bytes",
            path.display()
        )));
    }

    debug!(path = %path.display(), len = bytes.len(), format = %format, "loaded asset");
    Ok(RawAsset::new(bytes, format))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_existing_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"id,lesson\n1,intro\n").unwrap();

        let asset = load_asset(file.path(), FormatKind::Csv).unwrap();
        assert_eq!(asset.format(), FormatKind::Csv);
        assert_eq!(asset.len(), 18);
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let err = load_asset(Path::new("/definitely/not/here.csv"), FormatKind::Csv).unwrap_err();
        assert!(
            matches!(err, DecodeError::ResourceUnavailable { .. }),
            "got: {err}"
        );
        assert!(err.to_string().contains("not/here.csv"), "got: {err}");
    }

    #[test]
    fn test_oversize_file_is_unavailable() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 64]).unwrap();

        let err = load_asset_bounded(file.path(), FormatKind::Json, 16).unwrap_err();
        assert!(
            matches!(err, DecodeError::ResourceUnavailable { .. }),
            "got: {err}"
        );
        assert!(err.to_string().contains("maximum asset size"), "got: {err}");
    }

    #[test]
    fn test_limit_is_inclusive() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 16]).unwrap();

        let asset = load_asset_bounded(file.path(), FormatKind::Json, 16).unwrap();
        assert_eq!(asset.len(), 16);
    }
}
