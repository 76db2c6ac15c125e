//! Support for the XLIFF 2.0 schema.
//!
//! Units are `<unit>` elements under `xliff/file` (optionally inside `<group>`s).
//! Their text is split into `<segment>`s and `<ignorable>`s, each holding a
//! `<source>` and an optional `<target>`. Languages live on the root element
//! (`srcLang`, `trgLang`) rather than on `<file>`.
//!
//! Reading joins all parts of a unit into one source and one target string;
//! writing emits a single segment per unit.
//!
//! `<target>` elements require `trgLang` on the root. Writing translated units
//! without a known target language still produces a document but logs a
//! warning; [`requires_target_language`] lets callers reject that case first.
//!
//! `state` is copied verbatim in both directions and is not mapped between
//! versions. A 1.2 value such as `needs-translation` is not one of the 2.0
//! values (`initial`, `translated`, `reviewed`, `final`), so such a unit
//! written here is not schema-valid.
//!
//! See <https://docs.oasis-open.org/xliff/xliff-core/v2.0/os/xliff-core-v2.0-os.html>.

use std::collections::HashSet;

use crate::{
    document::{TranslationDocument, XmlElement},
    traits::SchemaAdapter,
    types::{Catalog, DEFAULT_SOURCE_LANGUAGE, Metadata, TranslationUnit},
    version::{XLIFF_ROOT, XliffVersion},
};

const FILE_TAG: &str = "file";
const UNIT_TAG: &str = "unit";
const SEGMENT_TAG: &str = "segment";
const IGNORABLE_TAG: &str = "ignorable";
const SOURCE_TAG: &str = "source";
const TARGET_TAG: &str = "target";
const DEFAULT_FILE_ID: &str = "f1";

/// XLIFF 2.0 schema adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Format;

impl SchemaAdapter for Format {
    fn version(&self) -> XliffVersion {
        XliffVersion::V2_0
    }

    fn decode(&self, document: &TranslationDocument) -> Catalog {
        let root = document.root();
        let files: Vec<&XmlElement> = root.elements_named(FILE_TAG).collect();
        let metadata = Metadata {
            source_language: root
                .attribute("srcLang")
                .unwrap_or(DEFAULT_SOURCE_LANGUAGE)
                .to_string(),
            target_language: root.attribute("trgLang").map(str::to_string),
            original: files
                .first()
                .and_then(|file| file.attribute("original"))
                .map(str::to_string),
        };

        let mut seen = HashSet::new();
        let mut units = Vec::new();
        let containers = files.iter().flat_map(|file| file.descendants_named(UNIT_TAG));

        for (index, element) in containers.enumerate() {
            let Some(unit) = parse_unit(element) else {
                log::warn!("skipping <{UNIT_TAG}> #{} without an id", index + 1);
                continue;
            };
            if !seen.insert(unit.id.clone()) {
                log::warn!("skipping <{UNIT_TAG}> with duplicate id `{}`", unit.id);
                continue;
            }
            units.push(unit);
        }

        log::debug!("decoded {} XLIFF 2.0 unit(s)", units.len());
        Catalog::new(metadata, units)
    }

    fn encode(&self, units: &[TranslationUnit], metadata: &Metadata) -> TranslationDocument {
        let mut root = XmlElement::new(XLIFF_ROOT)
            .with_attribute("version", XliffVersion::V2_0.as_str())
            .with_attribute("xmlns", XliffVersion::V2_0.namespace())
            .with_attribute("srcLang", metadata.source_language.as_str());
        if let Some(target_language) = &metadata.target_language {
            root.set_attribute("trgLang", target_language.as_str());
        } else if requires_target_language(units, metadata) {
            log::warn!("writing XLIFF 2.0 targets without `trgLang`; the document is not valid");
        }

        let mut file = XmlElement::new(FILE_TAG).with_attribute("id", DEFAULT_FILE_ID);
        if let Some(original) = &metadata.original {
            file.set_attribute("original", original.as_str());
        }
        for unit in units {
            file.push_child(unit_element(unit));
        }

        TranslationDocument::new(root.with_child(file))
    }
}

/// True when `units` would be written with `<target>` elements but `metadata`
/// names no target language for the root's `trgLang`.
pub fn requires_target_language(units: &[TranslationUnit], metadata: &Metadata) -> bool {
    metadata.target_language.is_none() && units.iter().any(TranslationUnit::is_translated)
}

// `None` when the unit has no usable id.
fn parse_unit(element: &XmlElement) -> Option<TranslationUnit> {
    let id = element.attribute("id").filter(|id| !id.trim().is_empty())?;

    let mut source = String::new();
    let mut target = String::new();
    let mut has_target = false;
    let mut state = None;

    for part in element.elements() {
        let part_source = part
            .child(SOURCE_TAG)
            .map(XmlElement::text)
            .unwrap_or_default();
        match part.local_name() {
            SEGMENT_TAG => {
                if let Some(segment_target) = part.child(TARGET_TAG) {
                    has_target = true;
                    target.push_str(&segment_target.text());
                }
                if state.is_none() {
                    state = part.attribute("state").map(str::to_string);
                }
                source.push_str(&part_source);
            }
            IGNORABLE_TAG => {
                // An ignorable without a target reads the same in both languages.
                match part.child(TARGET_TAG) {
                    Some(ignorable_target) => target.push_str(&ignorable_target.text()),
                    None => target.push_str(&part_source),
                }
                source.push_str(&part_source);
            }
            _ => {}
        }
    }

    if !has_target {
        target.clear();
    }

    Some(TranslationUnit {
        id: id.to_string(),
        source,
        target,
        state,
    })
}

fn unit_element(unit: &TranslationUnit) -> XmlElement {
    let mut segment = XmlElement::new(SEGMENT_TAG);
    if let Some(state) = &unit.state {
        segment.set_attribute("state", state.as_str());
    }
    segment.push_child(XmlElement::new(SOURCE_TAG).with_text(unit.source.as_str()));
    if unit.is_translated() {
        segment.push_child(XmlElement::new(TARGET_TAG).with_text(unit.target.as_str()));
    }

    XmlElement::new(UNIT_TAG)
        .with_attribute("id", unit.id.as_str())
        .with_child(segment)
}
