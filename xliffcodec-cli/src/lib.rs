//! Command implementations behind the `xliffcodec` binary, exposed as a
//! library so they can be tested directly.

pub mod convert;
pub mod detect;
pub mod merge;
pub mod view;

use xliffcodec::{Catalog, DecodeOutcome, XliffVersion, decode};

/// Parses a `--to` argument (`1.2`, `2.0`, `v2`, ...).
pub fn parse_version(value: &str) -> Result<XliffVersion, String> {
    value.parse::<XliffVersion>().map_err(|e| {
        format!(
            "{} (supported versions: {})",
            e,
            XliffVersion::supported_list()
        )
    })
}

/// Reads `input` and returns its version and catalog.
///
/// Fails with a readable message when the file cannot be read, is not XML, or
/// is not an XLIFF 1.2 / 2.0 document.
pub fn read_catalog(input: &str) -> Result<(XliffVersion, Catalog), String> {
    match decode(input).map_err(|e| format!("Error reading {}: {}", input, e))? {
        DecodeOutcome::Decoded { version, catalog } => {
            log::debug!("{}: XLIFF {}, {} unit(s)", input, version, catalog.len());
            Ok((version, catalog))
        }
        DecodeOutcome::Unrecognized { .. } => Err(detect::unrecognized_message(input)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("1.2"), Ok(XliffVersion::V1_2));
        assert_eq!(parse_version("2.0"), Ok(XliffVersion::V2_0));
        let err = parse_version("3.0").unwrap_err();
        assert!(err.contains("1.2, 2.0"));
    }

    #[test]
    fn test_read_catalog_missing_file() {
        let err = read_catalog("/no/such/file.xlf").unwrap_err();
        assert!(err.starts_with("Error reading /no/such/file.xlf"));
    }
}
