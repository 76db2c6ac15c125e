use xliffcodec::{
    ConflictStrategy, MergeReport, XliffVersion,
    codec::{check_target_language, encode_with_metadata, with_default_extension, write_document},
    merge_units,
};

use crate::{
    convert::{missing_target_language_message, normalize},
    read_catalog,
};

/// Strategy for units whose id already exists with different content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MergeStrategy {
    /// Keep the unit from the earlier file (default)
    #[default]
    KeepExisting,
    /// Overwrite with the unit from the later file
    Replace,
    /// Keep both units
    Append,
}

impl From<MergeStrategy> for ConflictStrategy {
    fn from(strategy: MergeStrategy) -> Self {
        match strategy {
            MergeStrategy::KeepExisting => ConflictStrategy::KeepExisting,
            MergeStrategy::Replace => ConflictStrategy::Replace,
            MergeStrategy::Append => ConflictStrategy::Append,
        }
    }
}

/// Options for the merge command.
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// Input files; the first one is opened and the others imported into it.
    pub inputs: Vec<String>,
    pub output: String,
    /// Output version, defaulting to the first input's.
    pub to: Option<XliffVersion>,
    pub strategy: MergeStrategy,
    /// Overrides the target language of the first input.
    pub target_lang: Option<String>,
}

/// Run the merge command: open the first file, import the others into it and
/// write the result.
///
/// The output keeps the first file's header and, unless `to` is given, its
/// version.
pub fn run_merge_command(options: MergeOptions) -> Result<MergeReport, String> {
    let Some((first, rest)) = options.inputs.split_first() else {
        return Err("At least one input file is required.".to_string());
    };

    let (first_version, mut catalog) = read_catalog(first)?;
    if let Some(lang) = &options.target_lang {
        catalog.metadata.target_language = Some(normalize(lang)?);
    }
    let mut total = MergeReport::default();

    for input in rest {
        let (_, imported) = read_catalog(input)?;
        let report = merge_units(&mut catalog.units, imported.units, options.strategy.into());
        for id in &report.conflicts {
            log::warn!("{}: unit `{}` conflicts with an existing unit", input, id);
        }
        total.added += report.added;
        total.duplicates += report.duplicates;
        total.replaced += report.replaced;
        total.conflicts.extend(report.conflicts);
    }

    let version = options.to.unwrap_or(first_version);
    check_target_language(version, &catalog.units, &catalog.metadata)
        .map_err(|e| missing_target_language_message(first, e))?;

    let output = with_default_extension(&options.output);
    let document = encode_with_metadata(version, &catalog.units, &catalog.metadata);
    write_document(&output, &document)
        .map_err(|e| format!("Error writing to {}: {}", output.display(), e))?;

    println!(
        "✅ Merged {} file(s) into {} (XLIFF {}): {} unit(s), {} added, {} duplicate(s), {} conflict(s)",
        options.inputs.len(),
        output.display(),
        version,
        catalog.len(),
        total.added,
        total.duplicates,
        total.conflicts.len()
    );
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_maps_to_library() {
        assert_eq!(
            ConflictStrategy::from(MergeStrategy::default()),
            ConflictStrategy::KeepExisting
        );
        assert_eq!(
            ConflictStrategy::from(MergeStrategy::Append),
            ConflictStrategy::Append
        );
    }

    #[test]
    fn test_merge_requires_input() {
        let err = run_merge_command(MergeOptions {
            output: "out.xlf".to_string(),
            strategy: MergeStrategy::Replace,
            ..MergeOptions::default()
        })
        .unwrap_err();
        assert!(err.contains("At least one input"));
    }
}
