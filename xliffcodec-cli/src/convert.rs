use xliffcodec::{
    Metadata, XliffVersion,
    codec::{check_target_language, encode_with_metadata, with_default_extension, write_document},
};

use crate::read_catalog;

/// Options for the convert command.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: String,
    pub output: String,
    pub to: XliffVersion,
    /// Overrides the source language read from the input.
    pub source_lang: Option<String>,
    /// Overrides the target language read from the input.
    pub target_lang: Option<String>,
}

/// Run the convert command: re-encode one XLIFF file as another version.
pub fn run_convert_command(options: ConvertOptions) -> Result<(), String> {
    let (from, mut catalog) = read_catalog(&options.input)?;

    if let Some(lang) = &options.source_lang {
        catalog.metadata.source_language = normalize(lang)?;
    }
    if let Some(lang) = &options.target_lang {
        catalog.metadata.target_language = Some(normalize(lang)?);
    }

    check_target_language(options.to, &catalog.units, &catalog.metadata)
        .map_err(|e| missing_target_language_message(&options.input, e))?;

    let output = with_default_extension(&options.output);
    let document = encode_with_metadata(options.to, &catalog.units, &catalog.metadata);
    write_document(&output, &document)
        .map_err(|e| format!("Error writing to {}: {}", output.display(), e))?;

    println!(
        "✅ Converted {} unit(s) from XLIFF {} to XLIFF {}: {}",
        catalog.len(),
        from,
        options.to,
        output.display()
    );
    Ok(())
}

/// Turns a failed target-language check into a hint about `--target-lang`.
pub(crate) fn missing_target_language_message(input: &str, error: xliffcodec::Error) -> String {
    format!(
        "{}: {} names no target language; pass --target-lang",
        error, input
    )
}

pub(crate) fn normalize(lang: &str) -> Result<String, String> {
    Metadata::normalize_language(lang).map_err(|e| e.to_string())
}
