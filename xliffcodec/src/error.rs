//! All error types for the xliffcodec crate.
//!
//! Only parse-level and I/O failures are errors. A well-formed document that is
//! not XLIFF 1.2 or 2.0 is reported through [`crate::DecodeOutcome::Unrecognized`],
//! never through this type (except by the one-shot [`crate::codec::convert`] helper).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("malformed XML: {0}")]
    MalformedXml(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown XLIFF version `{0}`")]
    UnknownVersion(String),

    #[error("unrecognized XLIFF version: {0}")]
    UnrecognizedVersion(String),

    #[error("invalid language tag `{0}`")]
    InvalidLanguage(String),

    #[error("XLIFF 2.0 output with translated units requires a target language")]
    MissingTargetLanguage,
}

impl Error {
    /// Creates a new malformed-XML error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedXml(message.into())
    }

    /// True when the input could not be read as XML at all.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Error::XmlParse(_) | Error::MalformedXml(_))
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(value: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlParse(quick_xml::Error::InvalidAttr(value))
    }
}
