//! Diagnostic output formatting.

use anyhow::Result;
use defstyle_core::Diagnostic;
use serde::Serialize;

use crate::OutputFormat;

/// A diagnostic tagged with the file it came from.
#[derive(Debug, Serialize)]
pub struct FileDiagnostic {
    /// File path as given on the command line (or `stdin`).
    pub path: String,
    /// The violation.
    #[serde(flatten)]
    pub diagnostic: Diagnostic,
}

/// Prints all findings in the selected format.
pub fn print(findings: &[FileDiagnostic], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for finding in findings {
                println!(
                    "{}:{}:{}: {}",
                    finding.path,
                    finding.diagnostic.line,
                    finding.diagnostic.column,
                    finding.diagnostic,
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(findings)?);
        }
    }
    Ok(())
}
