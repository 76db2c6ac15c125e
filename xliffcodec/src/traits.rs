//! Document I/O and the per-version schema adapter seam.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use crate::{
    document::TranslationDocument,
    error::Error,
    types::{Catalog, Metadata, TranslationUnit},
    version::XliffVersion,
};

/// Whole-document XML I/O.
///
/// Implementors only supply [`Parser::from_reader`] and [`Parser::to_writer`];
/// the path, string and byte variants are derived from those two.
///
/// # Example
///
/// ```rust,no_run
/// use xliffcodec::{TranslationDocument, traits::Parser};
/// let document = TranslationDocument::read_from("messages.xlf")?;
/// document.write_to("messages_copy.xlf")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Reads and parses a complete XML document, transcoding it to UTF-8 first.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Opens `path` and parses the document it holds.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Serializes the document, XML declaration included.
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Creates or truncates `path` and writes the document to it.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Parses markup already held in memory.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Parses raw bytes; a BOM or encoding declaration picks the charset.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(bytes))
    }
}

/// Structural knowledge of exactly one XLIFF schema version.
///
/// Implementations convert that schema's element tree into the unified
/// [`TranslationUnit`] model and build a fresh document from it.
pub trait SchemaAdapter {
    /// The schema version this adapter reads and writes.
    fn version(&self) -> XliffVersion;

    /// Extracts all translation units of `document`, in document order.
    ///
    /// Containers without an identifier are skipped; a repeated identifier keeps
    /// its first occurrence.
    fn decode(&self, document: &TranslationDocument) -> Catalog;

    /// Builds a complete document holding `units` in the given order.
    fn encode(&self, units: &[TranslationUnit], metadata: &Metadata) -> TranslationDocument;
}
