#![forbid(unsafe_code)]
//! XLIFF toolkit for Rust.
//!
//! Reads XLIFF 1.2 and XLIFF 2.0 documents into one version-agnostic list of
//! [`TranslationUnit`]s and writes such a list back out in either version.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xliffcodec::{DecodeOutcome, XliffVersion, decode, encode_with_metadata, write_document};
//!
//! let DecodeOutcome::Decoded { mut catalog, .. } = decode("messages.xlf")? else {
//!     panic!("not an XLIFF 1.2 / 2.0 file");
//! };
//! if let Some(unit) = catalog.find_unit_mut("greeting") {
//!     unit.target = "Bonjour".to_string();
//! }
//! let document = encode_with_metadata(XliffVersion::V2_0, &catalog.units, &catalog.metadata);
//! write_document("messages.fr.xlf", &document)?;
//! # Ok::<(), xliffcodec::Error>(())
//! ```
//!
//! # Outcomes
//!
//! - Not XML, or unreadable → [`Error`]
//! - Well-formed XML of another schema → [`DecodeOutcome::Unrecognized`]
//! - XLIFF 1.2 / 2.0, even with zero units → [`DecodeOutcome::Decoded`]
//!
//! Translation units without an identifier are skipped while decoding; one bad
//! entry never fails the whole document.

pub mod codec;
pub mod document;
pub mod error;
pub mod formats;
pub mod merge;
pub mod traits;
pub mod types;
pub mod version;

// Re-export most used types for easy consumption
pub use crate::{
    codec::{
        check_target_language, convert, decode, decode_bytes, decode_document, decode_reader, decode_str, encode,
        encode_to_string, encode_with_metadata, write_document,
    },
    document::TranslationDocument,
    error::Error,
    merge::{ConflictStrategy, MergeReport, merge_units},
    types::{Catalog, DecodeOutcome, Metadata, TranslationUnit},
    version::{XliffVersion, detect_version},
};
