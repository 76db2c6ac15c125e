use xliffcodec::{Catalog, XliffVersion};

use crate::read_catalog;

const PREVIEW_CHARS: usize = 50;

/// Run the view command: print every unit of an XLIFF file.
pub fn run_view_command(input: &str, full: bool, json: bool) -> Result<(), String> {
    let (version, catalog) = read_catalog(input)?;

    if json {
        let rendered = serde_json::to_string_pretty(&catalog)
            .map_err(|e| format!("Error serializing {}: {}", input, e))?;
        println!("{}", rendered);
        return Ok(());
    }

    print_view(version, &catalog, full);
    Ok(())
}

/// Print a view of the units in a catalog.
pub fn print_view(version: XliffVersion, catalog: &Catalog, full: bool) {
    let metadata = &catalog.metadata;
    println!("XLIFF version: {}", version);
    println!("Source language: {}", metadata.source_language);
    if let Some(target) = &metadata.target_language {
        println!("Target language: {}", target);
    }
    if let Some(original) = &metadata.original {
        println!("Original: {}", original);
    }
    println!("{}", count_line(catalog.len()));

    for (i, unit) in catalog.units.iter().enumerate() {
        println!("\n  Unit {}: {}", i + 1, unit.id);
        if let Some(state) = &unit.state {
            println!("    State: {}", state);
        }
        println!("    Source: {}", preview(&unit.source, full));
        println!("    Target: {}", preview(&unit.target, full));
    }
}

fn count_line(count: usize) -> String {
    if count == 1 {
        "1 translation found".to_string()
    } else {
        format!("{} translations found", count)
    }
}

fn preview(value: &str, full: bool) -> String {
    if full || value.chars().count() <= PREVIEW_CHARS {
        value.to_string()
    } else {
        let head: String = value.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    }
}
