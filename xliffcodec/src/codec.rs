//! Decoding and encoding entry points.
//!
//! `decode*` functions parse XML, detect the schema version and delegate to the
//! matching adapter; they return [`DecodeOutcome::Unrecognized`] for well-formed
//! XML of an unknown schema and an [`Error`] only when the input cannot be read
//! or is not XML. `encode*` functions build a fresh document for a
//! caller-chosen version and cannot fail.

use std::{
    io::BufRead,
    path::{Path, PathBuf},
};

use crate::{
    document::TranslationDocument,
    error::Error,
    formats::{adapter_for, xliff20},
    traits::Parser,
    types::{DecodeOutcome, Metadata, TranslationUnit},
    version::{XliffVersion, detect_version},
};

/// Extension used when the caller gives an output path without one.
pub const DEFAULT_EXTENSION: &str = "xlf";

/// File extensions conventionally used for XLIFF files.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["xlf", "xliff"];

/// Reads the file at `path` and decodes its translation units.
///
/// # Errors
///
/// [`Error::Io`] when the file cannot be read, [`Error::XmlParse`] or
/// [`Error::MalformedXml`] when it is not well-formed XML.
///
/// # Example
///
/// ```rust,no_run
/// use xliffcodec::{DecodeOutcome, decode};
///
/// match decode("messages.xlf")? {
///     DecodeOutcome::Decoded { version, catalog } => {
///         println!("XLIFF {version}: {} unit(s)", catalog.units.len());
///     }
///     DecodeOutcome::Unrecognized { .. } => println!("not XLIFF 1.2 or 2.0"),
/// }
/// # Ok::<(), xliffcodec::Error>(())
/// ```
pub fn decode<P: AsRef<Path>>(path: P) -> Result<DecodeOutcome, Error> {
    let path = path.as_ref();
    log::debug!("decoding {}", path.display());
    let document = TranslationDocument::read_from(path)?;
    Ok(decode_document(&document))
}

/// Decodes from any buffered reader.
pub fn decode_reader<R: BufRead>(reader: R) -> Result<DecodeOutcome, Error> {
    let document = TranslationDocument::from_reader(reader)?;
    Ok(decode_document(&document))
}

/// Decodes from an in-memory string.
pub fn decode_str(content: &str) -> Result<DecodeOutcome, Error> {
    let document = TranslationDocument::from_str(content)?;
    Ok(decode_document(&document))
}

/// Decodes from raw bytes (any BOM-marked or declared encoding).
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodeOutcome, Error> {
    let document = TranslationDocument::from_bytes(bytes)?;
    Ok(decode_document(&document))
}

/// Detects the version of an already parsed document and decodes it.
pub fn decode_document(document: &TranslationDocument) -> DecodeOutcome {
    match detect_version(document) {
        Some(version) => DecodeOutcome::Decoded {
            version,
            catalog: adapter_for(version).decode(document),
        },
        None => DecodeOutcome::Unrecognized {
            version: document.root().attribute("version").map(str::to_string),
        },
    }
}

/// Builds a `version` document holding `units`, with default header metadata.
///
/// # Example
///
/// ```rust
/// use xliffcodec::{TranslationUnit, XliffVersion, encode};
///
/// let units = vec![TranslationUnit::new("1", "Hello").with_target("Bonjour")];
/// let xml = encode(XliffVersion::V2_0, &units).to_xml_string()?;
/// assert!(xml.contains(r#"<unit id="1">"#));
/// # Ok::<(), xliffcodec::Error>(())
/// ```
pub fn encode(version: XliffVersion, units: &[TranslationUnit]) -> TranslationDocument {
    encode_with_metadata(version, units, &Metadata::default())
}

/// Builds a `version` document holding `units` and the given header metadata.
pub fn encode_with_metadata(
    version: XliffVersion,
    units: &[TranslationUnit],
    metadata: &Metadata,
) -> TranslationDocument {
    log::debug!("encoding {} unit(s) as XLIFF {}", units.len(), version);
    adapter_for(version).encode(units, metadata)
}

/// Encodes straight to an XML string.
pub fn encode_to_string(
    version: XliffVersion,
    units: &[TranslationUnit],
    metadata: &Metadata,
) -> Result<String, Error> {
    encode_with_metadata(version, units, metadata).to_xml_string()
}

/// Writes `document` to `path`, creating parent directories as needed.
pub fn write_document<P: AsRef<Path>>(path: P, document: &TranslationDocument) -> Result<(), Error> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    document.write_to(path)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Checks that `units` can be written as a valid `version` document.
///
/// XLIFF 2.0 needs `trgLang` as soon as any `<target>` is written, so
/// translated units without a target language in `metadata` are rejected.
/// XLIFF 1.2 has no such requirement.
///
/// # Example
/// ```rust
/// use xliffcodec::{Metadata, TranslationUnit, XliffVersion, codec::check_target_language};
///
/// let units = vec![TranslationUnit::new("1", "Hello").with_target("Bonjour")];
/// assert!(check_target_language(XliffVersion::V1_2, &units, &Metadata::default()).is_ok());
/// assert!(check_target_language(XliffVersion::V2_0, &units, &Metadata::default()).is_err());
/// ```
pub fn check_target_language(
    version: XliffVersion,
    units: &[TranslationUnit],
    metadata: &Metadata,
) -> Result<(), Error> {
    match version {
        XliffVersion::V2_0 if xliff20::requires_target_language(units, metadata) => {
            Err(Error::MissingTargetLanguage)
        }
        _ => Ok(()),
    }
}

/// Converts an XLIFF file to `version`, keeping its header metadata.
///
/// Returns the number of units written.
///
/// # Errors
///
/// Besides read/parse errors, returns [`Error::UnrecognizedVersion`] when the
/// input is well-formed XML of an unknown schema, and
/// [`Error::MissingTargetLanguage`] when the output would be XLIFF 2.0 with
/// targets but the input names no target language.
///
/// # Example
///
/// ```rust,no_run
/// use xliffcodec::{XliffVersion, convert};
/// let written = convert("messages.xlf", "messages.v2.xlf", XliffVersion::V2_0)?;
/// println!("{written} unit(s) converted");
/// # Ok::<(), xliffcodec::Error>(())
/// ```
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    version: XliffVersion,
) -> Result<usize, Error> {
    let input = input.as_ref();
    let catalog = decode(input)?.into_catalog().ok_or_else(|| {
        Error::UnrecognizedVersion(format!(
            "{} (supported versions: {})",
            input.display(),
            XliffVersion::supported_list()
        ))
    })?;

    check_target_language(version, &catalog.units, &catalog.metadata)?;
    let document = encode_with_metadata(version, &catalog.units, &catalog.metadata);
    write_document(output, &document)?;
    Ok(catalog.units.len())
}

/// True when the path carries one of the [`SUPPORTED_EXTENSIONS`] (case-insensitive).
///
/// # Example
/// ```rust
/// use xliffcodec::codec::is_xliff_path;
/// assert!(is_xliff_path("messages.xlf"));
/// assert!(is_xliff_path("messages.fr.XLIFF"));
/// assert!(!is_xliff_path("strings.xml"));
/// ```
pub fn is_xliff_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Appends [`DEFAULT_EXTENSION`] when the path has no extension.
///
/// # Example
/// ```rust
/// use std::path::PathBuf;
/// use xliffcodec::codec::with_default_extension;
/// assert_eq!(with_default_extension("out/messages"), PathBuf::from("out/messages.xlf"));
/// assert_eq!(with_default_extension("messages.xliff"), PathBuf::from("messages.xliff"));
/// ```
pub fn with_default_extension<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const V12: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xliff version="1.2" xmlns="urn:oasis:names:tc:xliff:document:1.2">
  <file source-language="en" target-language="fr" datatype="plaintext" original="app">
    <body>
      <trans-unit id="1"><source>Hello</source><target/></trans-unit>
      <trans-unit id="2"><source>Bye</source><target>Au revoir</target></trans-unit>
    </body>
  </file>
</xliff>"#;

    #[test]
    fn test_decode_str_recognized() {
        let outcome = decode_str(V12).unwrap();
        assert_eq!(outcome.version(), Some(XliffVersion::V1_2));
        let units = outcome.units().unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[1].target, "Au revoir");
    }

    #[test]
    fn test_decode_str_unrecognized_keeps_version_attribute() {
        let outcome = decode_str(r#"<xliff version="1.1"><file/></xliff>"#).unwrap();
        assert_eq!(
            outcome,
            DecodeOutcome::Unrecognized {
                version: Some("1.1".to_string())
            }
        );
    }

    #[test]
    fn test_decode_str_parse_failure_is_error() {
        let err = decode_str("<xliff version=\"1.2\"><file></xliff>").unwrap_err();
        assert!(err.is_parse_failure());
    }

    #[test]
    fn test_decode_bytes_with_utf8_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(V12.as_bytes());
        let outcome = decode_bytes(&bytes).unwrap();
        assert_eq!(outcome.units().map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_encode_keeps_metadata() {
        let outcome = decode_str(V12).unwrap();
        let catalog = outcome.into_catalog().unwrap();
        let xml = encode_to_string(XliffVersion::V2_0, &catalog.units, &catalog.metadata).unwrap();
        assert!(xml.contains(r#"srcLang="en" trgLang="fr""#));
        assert!(xml.contains(r#"<file id="f1" original="app">"#));
    }

    #[test]
    fn test_decode_missing_file_is_io_error() {
        let err = decode("/definitely/not/here.xlf").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_check_target_language_per_version() {
        let translated = vec![TranslationUnit::new("1", "Hello").with_target("Bonjour")];
        let untranslated = vec![TranslationUnit::new("1", "Hello")];
        let fr = Metadata::default().with_target_language(Some("fr".to_string()));

        assert!(check_target_language(XliffVersion::V1_2, &translated, &Metadata::default()).is_ok());
        assert!(check_target_language(XliffVersion::V2_0, &untranslated, &Metadata::default()).is_ok());
        assert!(check_target_language(XliffVersion::V2_0, &translated, &fr).is_ok());
        assert!(matches!(
            check_target_language(XliffVersion::V2_0, &translated, &Metadata::default()),
            Err(Error::MissingTargetLanguage)
        ));
    }

    #[test]
    fn test_extension_helpers() {
        assert!(is_xliff_path("a/b/c.xlf"));
        assert!(!is_xliff_path("a/b/c"));
        assert_eq!(with_default_extension("x"), PathBuf::from("x.xlf"));
    }
}
