//! Core, version-agnostic types for xliffcodec.
//! Adapters decode into these; encoders serialize these.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::{error::Error, version::XliffVersion};

pub const DEFAULT_SOURCE_LANGUAGE: &str = "en";

/// One translatable segment: a stable identifier, the source text and its translation.
///
/// Equality is full value equality, so two units decoded from different
/// documents compare equal only when id, source, target and state all match.
/// Use [`TranslationUnit::same_id`] for identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct TranslationUnit {
    /// Unique identifier within one document (`trans-unit@id` / `unit@id`).
    pub id: String,

    /// Original-language text.
    pub source: String,

    /// Translated text, empty when untranslated.
    #[serde(default)]
    pub target: String,

    /// Status marker carried as found in the source document
    /// (`target@state` in 1.2, `segment@state` in 2.0). Never interpreted.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub state: Option<String>,
}

impl TranslationUnit {
    pub fn new(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: String::new(),
            state: None,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// True when both units carry the same identifier.
    pub fn same_id(&self, other: &TranslationUnit) -> bool {
        self.id == other.id
    }

    pub fn is_translated(&self) -> bool {
        !self.target.is_empty()
    }
}

impl Display for TranslationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TranslationUnit {{ id: {}, source: {}, target: {} }}",
            self.id, self.source, self.target
        )
    }
}

/// Document-level header data shared by both schema versions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Metadata {
    /// Source language (`file@source-language` in 1.2, `xliff@srcLang` in 2.0).
    pub source_language: String,

    /// Target language (`file@target-language` in 1.2, `xliff@trgLang` in 2.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub target_language: Option<String>,

    /// Name of the original resource the file was extracted from.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub original: Option<String>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            source_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
            target_language: None,
            original: None,
        }
    }
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source language.
    pub fn with_source_language(mut self, language: impl Into<String>) -> Self {
        self.source_language = language.into();
        self
    }

    /// Sets or clears the target language.
    pub fn with_target_language(mut self, language: Option<String>) -> Self {
        self.target_language = language;
        self
    }

    /// Sets or clears the original resource name.
    pub fn with_original(mut self, original: Option<String>) -> Self {
        self.original = original;
        self
    }

    /// Validates a BCP-47 language tag and returns its canonical form.
    ///
    /// # Example
    /// ```rust
    /// use xliffcodec::Metadata;
    /// assert_eq!(Metadata::normalize_language("en_us").unwrap(), "en-US");
    /// assert!(Metadata::normalize_language("not a language").is_err());
    /// ```
    pub fn normalize_language(language: &str) -> Result<String, Error> {
        language
            .trim()
            .parse::<LanguageIdentifier>()
            .map(|id| id.to_string())
            .map_err(|_| Error::InvalidLanguage(language.to_string()))
    }
}

/// Everything an adapter extracts from one document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Catalog {
    pub metadata: Metadata,

    /// Units in document order.
    #[serde(default)]
    pub units: Vec<TranslationUnit>,
}

impl Catalog {
    pub fn new(metadata: Metadata, units: Vec<TranslationUnit>) -> Self {
        Self { metadata, units }
    }

    pub fn find_unit(&self, id: &str) -> Option<&TranslationUnit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn find_unit_mut(&mut self, id: &str) -> Option<&mut TranslationUnit> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Result of decoding a well-formed XML document.
///
/// A recognised document with zero units is `Decoded` with an empty catalog,
/// never `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    Decoded {
        version: XliffVersion,
        catalog: Catalog,
    },
    /// Well-formed XML that is neither XLIFF 1.2 nor 2.0.
    Unrecognized {
        /// The root `version` attribute, if there was one.
        version: Option<String>,
    },
}

impl DecodeOutcome {
    pub fn is_recognized(&self) -> bool {
        matches!(self, DecodeOutcome::Decoded { .. })
    }

    pub fn version(&self) -> Option<XliffVersion> {
        match self {
            DecodeOutcome::Decoded { version, .. } => Some(*version),
            DecodeOutcome::Unrecognized { .. } => None,
        }
    }

    /// Units of a recognised document.
    pub fn units(&self) -> Option<&[TranslationUnit]> {
        match self {
            DecodeOutcome::Decoded { catalog, .. } => Some(&catalog.units),
            DecodeOutcome::Unrecognized { .. } => None,
        }
    }

    pub fn into_catalog(self) -> Option<Catalog> {
        match self {
            DecodeOutcome::Decoded { catalog, .. } => Some(catalog),
            DecodeOutcome::Unrecognized { .. } => None,
        }
    }

    pub fn into_units(self) -> Option<Vec<TranslationUnit>> {
        self.into_catalog().map(|catalog| catalog.units)
    }
}
