use proptest::prelude::*;
use std::collections::HashSet;
use xliffcodec::{
    DecodeOutcome, Metadata, TranslationUnit, XliffVersion, decode, decode_str, encode,
    encode_to_string, encode_with_metadata, write_document,
};

fn key_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_.-]{0,15}").expect("valid key regex")
}

fn text_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _<>&\"'.,!?éü]{0,30}").expect("valid text regex")
}

fn state_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec![
        "new".to_string(),
        "translated".to_string(),
        "final".to_string(),
    ]))
}

fn units_strategy() -> impl Strategy<Value = Vec<TranslationUnit>> {
    prop::collection::vec(
        (key_strategy(), text_strategy(), text_strategy(), state_strategy()),
        0..8,
    )
    .prop_map(|rows| {
        let mut seen = HashSet::new();
        rows.into_iter()
            .filter(|(id, _, _, _)| seen.insert(id.clone()))
            .map(|(id, source, target, state)| TranslationUnit {
                id,
                source,
                target,
                state,
            })
            .collect()
    })
}

fn decode_units(xml: &str) -> Result<(XliffVersion, Vec<TranslationUnit>), TestCaseError> {
    match decode_str(xml).map_err(|e| TestCaseError::fail(e.to_string()))? {
        DecodeOutcome::Decoded { version, catalog } => Ok((version, catalog.units)),
        DecodeOutcome::Unrecognized { .. } => Err(TestCaseError::fail("unrecognized output")),
    }
}

fn encode_string(version: XliffVersion, units: &[TranslationUnit]) -> Result<String, TestCaseError> {
    encode(version, units)
        .to_xml_string()
        .map_err(|e| TestCaseError::fail(e.to_string()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn xliff12_roundtrip_preserves_units(units in units_strategy()) {
        let xml = encode_string(XliffVersion::V1_2, &units)?;
        let (version, decoded) = decode_units(&xml)?;
        prop_assert_eq!(version, XliffVersion::V1_2);
        prop_assert_eq!(decoded, units);
    }

    #[test]
    fn xliff20_roundtrip_preserves_units(units in units_strategy()) {
        let xml = encode_string(XliffVersion::V2_0, &units)?;
        let (version, decoded) = decode_units(&xml)?;
        prop_assert_eq!(version, XliffVersion::V2_0);
        prop_assert_eq!(decoded, units);
    }

    #[test]
    fn cross_version_reencode_roundtrips(units in units_strategy()) {
        let v12 = encode_string(XliffVersion::V1_2, &units)?;
        let (_, from_v12) = decode_units(&v12)?;

        let v20 = encode_string(XliffVersion::V2_0, &from_v12)?;
        let (version, from_v20) = decode_units(&v20)?;
        prop_assert_eq!(version, XliffVersion::V2_0);
        prop_assert_eq!(&from_v20, &units);

        let back = encode_string(XliffVersion::V1_2, &from_v20)?;
        let (version, from_back) = decode_units(&back)?;
        prop_assert_eq!(version, XliffVersion::V1_2);
        prop_assert_eq!(from_back, units);
    }

    #[test]
    fn file_roundtrip_preserves_units_and_metadata(units in units_strategy()) {
        let tmp = tempfile::tempdir().map_err(|e| TestCaseError::fail(e.to_string()))?;
        let path = tmp.path().join("nested").join("messages.xlf");
        let metadata = Metadata::default()
            .with_source_language("en-US")
            .with_target_language(Some("fr".to_string()));

        for version in XliffVersion::ALL {
            let xml = encode_to_string(version, &units, &metadata)
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            let (detected, _) = decode_units(&xml)?;
            prop_assert_eq!(detected, version);

            write_document(&path, &encode_with_metadata(version, &units, &metadata))
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            let outcome = decode(&path).map_err(|e| TestCaseError::fail(e.to_string()))?;
            let catalog = outcome
                .into_catalog()
                .ok_or_else(|| TestCaseError::fail("unrecognized file"))?;
            prop_assert_eq!(&catalog.metadata.source_language, "en-US");
            prop_assert_eq!(catalog.metadata.target_language.as_deref(), Some("fr"));
            prop_assert_eq!(&catalog.units, &units);
        }
    }
}
