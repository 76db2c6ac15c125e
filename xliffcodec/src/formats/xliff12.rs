//! Support for the XLIFF 1.2 schema.
//!
//! Units live as flat `<trans-unit>` elements under `xliff/file/body`, optionally
//! wrapped in `<group>`s. Each carries an `id` attribute, a `<source>` and an
//! optional `<target>` whose `state` attribute is kept verbatim.
//!
//! See <https://docs.oasis-open.org/xliff/v1.2/os/xliff-core.html>.

use std::collections::HashSet;

use crate::{
    document::{TranslationDocument, XmlElement},
    traits::SchemaAdapter,
    types::{Catalog, DEFAULT_SOURCE_LANGUAGE, Metadata, TranslationUnit},
    version::{XLIFF_ROOT, XliffVersion},
};

const FILE_TAG: &str = "file";
const BODY_TAG: &str = "body";
const UNIT_TAG: &str = "trans-unit";
const SOURCE_TAG: &str = "source";
const TARGET_TAG: &str = "target";
const DEFAULT_ORIGINAL: &str = "messages";
const DEFAULT_DATATYPE: &str = "plaintext";

/// XLIFF 1.2 schema adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Format;

impl SchemaAdapter for Format {
    fn version(&self) -> XliffVersion {
        XliffVersion::V1_2
    }

    fn decode(&self, document: &TranslationDocument) -> Catalog {
        let files: Vec<&XmlElement> = document.root().elements_named(FILE_TAG).collect();
        let metadata = files
            .first()
            .map(|file| metadata_from_file(file))
            .unwrap_or_default();

        let mut seen = HashSet::new();
        let mut units = Vec::new();
        let containers = files
            .iter()
            .flat_map(|file| file.elements_named(BODY_TAG))
            .flat_map(|body| body.descendants_named(UNIT_TAG));

        for (index, element) in containers.enumerate() {
            let Some(unit) = parse_trans_unit(element) else {
                log::warn!("skipping <{UNIT_TAG}> #{} without an id", index + 1);
                continue;
            };
            if !seen.insert(unit.id.clone()) {
                log::warn!("skipping <{UNIT_TAG}> with duplicate id `{}`", unit.id);
                continue;
            }
            units.push(unit);
        }

        log::debug!("decoded {} XLIFF 1.2 unit(s)", units.len());
        Catalog::new(metadata, units)
    }

    fn encode(&self, units: &[TranslationUnit], metadata: &Metadata) -> TranslationDocument {
        let mut file = XmlElement::new(FILE_TAG)
            .with_attribute("source-language", metadata.source_language.as_str());
        if let Some(target_language) = &metadata.target_language {
            file.set_attribute("target-language", target_language.as_str());
        }
        file.set_attribute("datatype", DEFAULT_DATATYPE);
        file.set_attribute(
            "original",
            metadata.original.as_deref().unwrap_or(DEFAULT_ORIGINAL),
        );

        let mut body = XmlElement::new(BODY_TAG);
        for unit in units {
            body.push_child(trans_unit_element(unit));
        }
        file.push_child(body);

        let root = XmlElement::new(XLIFF_ROOT)
            .with_attribute("version", XliffVersion::V1_2.as_str())
            .with_attribute("xmlns", XliffVersion::V1_2.namespace())
            .with_child(file);
        TranslationDocument::new(root)
    }
}

fn metadata_from_file(file: &XmlElement) -> Metadata {
    Metadata {
        source_language: file
            .attribute("source-language")
            .unwrap_or(DEFAULT_SOURCE_LANGUAGE)
            .to_string(),
        target_language: file.attribute("target-language").map(str::to_string),
        original: file.attribute("original").map(str::to_string),
    }
}

// `None` when the container has no usable id.
fn parse_trans_unit(element: &XmlElement) -> Option<TranslationUnit> {
    let id = element.attribute("id").filter(|id| !id.trim().is_empty())?;
    let source = element
        .child(SOURCE_TAG)
        .map(XmlElement::text)
        .unwrap_or_default();
    let target = element.child(TARGET_TAG);

    Some(TranslationUnit {
        id: id.to_string(),
        source,
        target: target.map(XmlElement::text).unwrap_or_default(),
        state: target
            .and_then(|t| t.attribute("state"))
            .map(str::to_string),
    })
}

fn trans_unit_element(unit: &TranslationUnit) -> XmlElement {
    let mut target = XmlElement::new(TARGET_TAG);
    if let Some(state) = &unit.state {
        target.set_attribute("state", state.as_str());
    }
    XmlElement::new(UNIT_TAG)
        .with_attribute("id", unit.id.as_str())
        .with_child(XmlElement::new(SOURCE_TAG).with_text(unit.source.as_str()))
        .with_child(target.with_text(unit.target.as_str()))
}
