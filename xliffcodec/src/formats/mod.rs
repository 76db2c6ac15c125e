//! Schema adapters for every supported XLIFF version.
//!
//! Each submodule owns the element/attribute layout of exactly one version and
//! exposes a `Format` implementing [`SchemaAdapter`]. [`adapter_for`] picks one
//! by [`XliffVersion`].

pub mod xliff12;
pub mod xliff20;

// Reexporting the formats for easier access
pub use xliff12::Format as Xliff12Format;
pub use xliff20::Format as Xliff20Format;

use crate::{traits::SchemaAdapter, version::XliffVersion};

/// Returns the adapter responsible for `version`.
///
/// # Example
/// ```rust
/// use xliffcodec::{XliffVersion, formats::adapter_for};
/// assert_eq!(adapter_for(XliffVersion::V2_0).version(), XliffVersion::V2_0);
/// ```
pub fn adapter_for(version: XliffVersion) -> &'static dyn SchemaAdapter {
    match version {
        XliffVersion::V1_2 => &Xliff12Format,
        XliffVersion::V2_0 => &Xliff20Format,
    }
}
