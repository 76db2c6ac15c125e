use indoc::indoc;
use std::fs;
use tempfile::TempDir;
use xliffcodec::{DecodeOutcome, Error, TranslationUnit, XliffVersion, convert, decode};

const SOURCE_V20: &str = indoc! {r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <xliff version="2.0" xmlns="urn:oasis:names:tc:xliff:document:2.0" srcLang="en" trgLang="es">
      <file id="f1" original="app.json">
        <unit id="title">
          <segment state="translated">
            <source>Welcome</source>
            <target>Bienvenido</target>
          </segment>
        </unit>
        <unit id="body">
          <segment>
            <source>Use &lt;tag&gt; &amp; value</source>
          </segment>
        </unit>
      </file>
    </xliff>
"#};

#[test]
fn convert_v20_file_to_v12_and_back() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("messages.xlf");
    let middle = temp_dir.path().join("out").join("messages.v12.xlf");
    let output = temp_dir.path().join("messages.v20.xlf");
    fs::write(&input, SOURCE_V20).unwrap();

    assert_eq!(convert(&input, &middle, XliffVersion::V1_2).unwrap(), 2);
    let written = fs::read_to_string(&middle).unwrap();
    assert!(written.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(written.contains(r#"source-language="en" target-language="es""#));
    assert!(written.contains(r#"original="app.json""#));
    assert!(written.contains(r#"<target state="translated">Bienvenido</target>"#));

    assert_eq!(convert(&middle, &output, XliffVersion::V2_0).unwrap(), 2);
    let DecodeOutcome::Decoded { version, catalog } = decode(&output).unwrap() else {
        panic!("converted file should be recognized");
    };
    assert_eq!(version, XliffVersion::V2_0);
    assert_eq!(catalog.metadata.target_language.as_deref(), Some("es"));
    assert_eq!(
        catalog.units,
        vec![
            TranslationUnit::new("title", "Welcome")
                .with_target("Bienvenido")
                .with_state("translated"),
            TranslationUnit::new("body", "Use <tag> & value"),
        ]
    );
}

#[test]
fn convert_rejects_unrecognized_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("strings.xml");
    let output = temp_dir.path().join("out.xlf");
    fs::write(&input, r#"<resources><string name="a">A</string></resources>"#).unwrap();

    let err = convert(&input, &output, XliffVersion::V1_2).unwrap_err();
    assert!(matches!(err, Error::UnrecognizedVersion(_)));
    assert!(err.to_string().contains("1.2, 2.0"));
    assert!(!output.exists());
}

#[test]
fn convert_to_v20_requires_target_language_for_targets() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("no-target-lang.xlf");
    let output = temp_dir.path().join("out.xlf");
    fs::write(
        &input,
        indoc! {r#"
            <xliff version="1.2" xmlns="urn:oasis:names:tc:xliff:document:1.2">
              <file source-language="en" datatype="plaintext" original="x">
                <body>
                  <trans-unit id="1"><source>Hello</source><target>Bonjour</target></trans-unit>
                </body>
              </file>
            </xliff>
        "#},
    )
    .unwrap();

    let err = convert(&input, &output, XliffVersion::V2_0).unwrap_err();
    assert!(matches!(err, Error::MissingTargetLanguage));
    assert!(!output.exists());

    // 1.2 output carries no such requirement.
    assert_eq!(convert(&input, &output, XliffVersion::V1_2).unwrap(), 1);
}

#[test]
fn convert_reports_parse_failure() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("broken.xlf");
    fs::write(&input, "<xliff version=\"1.2\"><file>").unwrap();

    let err = convert(&input, temp_dir.path().join("out.xlf"), XliffVersion::V2_0).unwrap_err();
    assert!(err.is_parse_failure());
}

#[test]
fn decode_utf16_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("utf16.xlf");
    let mut bytes = vec![0xFF, 0xFE];
    for unit in SOURCE_V20.replace("UTF-8", "UTF-16").encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(&input, bytes).unwrap();

    let units = decode(&input).unwrap().into_units().unwrap();
    assert_eq!(units.len(), 2);
    assert_eq!(units[0].target, "Bienvenido");
}
