//! # docvet
//!
//! Format-dispatching content verifier: decode a byte stream with a
//! declared format tag into a normalized in-memory document, then assert
//! on its fields.
//!
//! Five formats are recognized: `pdf`, `spreadsheet` (XLSX), `csv`, `zip`,
//! and `json`. Dispatch is purely on the declared tag — bytes are never
//! sniffed. Sourcing the bytes (a download, an upload fixture, a file) is
//! the caller's concern; [`load_asset`] covers the local-file case.
//!
//! ## Quick Start
//!
//! ```rust
//! use docvet::{decode, FormatKind, NormalizedDocument, RawAsset};
//!
//! let bytes = br#"{"GlossDiv": {"title": "S"}, "entries": [{"name": "first"}]}"#.to_vec();
//! let asset = RawAsset::new(bytes, FormatKind::Json);
//!
//! let NormalizedDocument::Structured(doc) = decode(asset)? else {
//!     unreachable!("json decodes to the structured variant");
//! };
//! assert_eq!(doc.string_at("GlossDiv.title")?, "S");
//! assert_eq!(doc.string_at("entries[0].name")?, "first");
//! assert!(doc.path("GlossDiv.missing").is_err());
//! # Ok::<(), docvet::DecodeError>(())
//! ```
//!
//! Each `decode` call is stateless and independent; a [`RawAsset`] is
//! consumed exactly once and the resulting document is queried and
//! discarded. The only stateful document is the ZIP archive cursor, which
//! is **sequential-access only** — see [`ArchiveDocument`].

mod asset;
mod config;
mod document;
mod error;
mod format;
mod path;
mod source;

pub use asset::{FormatKind, RawAsset};
pub use config::DecodeOptions;
pub use document::{NormalizedDocument, StructuredDocument, TableDocument, TextDocument};
pub use error::DecodeError;
pub use format::archive::{ArchiveDocument, ArchiveEntry};
pub use format::{decode, decode_with};
pub use source::{DEFAULT_MAX_ASSET_SIZE, load_asset, load_asset_bounded};
