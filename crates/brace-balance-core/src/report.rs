use crate::scanner::ScanOutcome;

/// Format styles supported when printing an outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The single `Final balance: ...` / `Negative balance at line ...` line.
    #[default]
    Human,
    Json,
}

/// Produce the printable report for a `ScanOutcome` in the desired format.
///
/// The result carries no trailing newline.
pub fn render_report(outcome: &ScanOutcome, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Human => Ok(outcome.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
    }
}
