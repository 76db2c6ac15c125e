//! XLIFF schema versions and the detector that tells them apart.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{document::TranslationDocument, error::Error};

pub const XLIFF_ROOT: &str = "xliff";
pub const XLIFF_12_NAMESPACE: &str = "urn:oasis:names:tc:xliff:document:1.2";
pub const XLIFF_20_NAMESPACE: &str = "urn:oasis:names:tc:xliff:document:2.0";

/// The XLIFF schema versions this crate reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XliffVersion {
    #[serde(rename = "1.2")]
    V1_2,
    #[serde(rename = "2.0")]
    V2_0,
}

impl XliffVersion {
    /// Every supported version, oldest first.
    pub const ALL: [XliffVersion; 2] = [XliffVersion::V1_2, XliffVersion::V2_0];

    /// The value of the root `version` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            XliffVersion::V1_2 => "1.2",
            XliffVersion::V2_0 => "2.0",
        }
    }

    /// The namespace URI of the version's root element.
    pub fn namespace(&self) -> &'static str {
        match self {
            XliffVersion::V1_2 => XLIFF_12_NAMESPACE,
            XliffVersion::V2_0 => XLIFF_20_NAMESPACE,
        }
    }

    /// Human readable list such as `"1.2, 2.0"`.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(XliffVersion::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn from_namespace(namespace: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.namespace() == namespace.trim())
    }

    fn from_attribute(version: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == version.trim())
    }
}

/// Implements [`std::fmt::Display`] for [`XliffVersion`] as `"1.2"` / `"2.0"`.
impl Display for XliffVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `1.2`, `12`, `v1.2`, `2.0`, `2`, `20`, `v2.0` (case-insensitive).
///
/// # Example
/// ```rust
/// use xliffcodec::XliffVersion;
/// assert_eq!("1.2".parse::<XliffVersion>().unwrap(), XliffVersion::V1_2);
/// assert_eq!("V2".parse::<XliffVersion>().unwrap(), XliffVersion::V2_0);
/// assert!("3.0".parse::<XliffVersion>().is_err());
/// ```
impl FromStr for XliffVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let normalized = normalized.strip_prefix('v').unwrap_or(&normalized);
        match normalized {
            "1.2" | "12" => Ok(XliffVersion::V1_2),
            "2.0" | "2" | "20" => Ok(XliffVersion::V2_0),
            _ => Err(Error::UnknownVersion(s.to_string())),
        }
    }
}

/// Classifies `document` as XLIFF 1.2, XLIFF 2.0, or neither (`None`).
///
/// The root element must be `xliff`. Its namespace and its `version`
/// attribute are both checked; at least one has to name a supported version
/// and, when both are present, they must agree.
pub fn detect_version(document: &TranslationDocument) -> Option<XliffVersion> {
    let root = document.root();
    if root.local_name() != XLIFF_ROOT {
        log::debug!("root element <{}> is not <{}>", root.name(), XLIFF_ROOT);
        return None;
    }

    let by_namespace = root.declared_namespace().map(XliffVersion::from_namespace);
    let by_attribute = root.attribute("version").map(XliffVersion::from_attribute);

    let detected = match (by_namespace, by_attribute) {
        (Some(Some(ns)), Some(Some(attr))) if ns == attr => Some(ns),
        (Some(Some(_)), Some(Some(_))) => None,
        // An unknown namespace or version value disqualifies the document.
        (Some(None), _) | (_, Some(None)) => None,
        (Some(Some(version)), None) | (None, Some(Some(version))) => Some(version),
        (None, None) => None,
    };

    log::debug!(
        "detected XLIFF version {:?} (xmlns={:?}, version={:?})",
        detected,
        root.declared_namespace(),
        root.attribute("version")
    );
    detected
}
