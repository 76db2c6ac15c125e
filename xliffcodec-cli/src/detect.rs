use xliffcodec::{XliffVersion, decode};

/// Detects the XLIFF version of `input`.
///
/// `Ok(None)` means the file is well-formed XML but not XLIFF 1.2 or 2.0.
pub fn run_detect_command(input: &str) -> Result<Option<XliffVersion>, String> {
    let outcome = decode(input).map_err(|e| format!("Error reading {}: {}", input, e))?;
    Ok(outcome.version())
}

pub fn unrecognized_message(input: &str) -> String {
    format!(
        "{} is not a recognized XLIFF document (supported versions: {})",
        input,
        XliffVersion::supported_list()
    )
}
