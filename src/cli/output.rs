//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::emitter::EmitReport;
use crate::error::Error;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats the summary of a run.
#[must_use]
pub fn format_report(report: &EmitReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(
                output,
                "Wrote {} ({} bytes, {} rows) from {}",
                report.txt.display(),
                report.compressed_size,
                report.rows,
                report.gz.display()
            );
            output
        }
        OutputFormat::Json => format_json(report),
    }
}

/// Formats an error for display.
///
/// Text errors are the bare message (`gzip failed`, `Missing file name`).
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorBody<'a> {
                error: String,
                kind: &'a str,
            }
            format_json(&ErrorBody {
                error: error.to_string(),
                kind: error.kind(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;
    use std::path::PathBuf;

    fn sample_report() -> EmitReport {
        EmitReport {
            input: PathBuf::from("fw.bin"),
            gz: PathBuf::from("fw.bin.gz"),
            txt: PathBuf::from("fw.bin.txt"),
            identifier: "fw_bin_gz".to_string(),
            compressed_size: 42,
            rows: 3,
            backend: "builtin",
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("unknown"), OutputFormat::Text);
    }

    #[test]
    fn test_format_report_text() {
        let text = format_report(&sample_report(), OutputFormat::Text);
        assert_eq!(text, "Wrote fw.bin.txt (42 bytes, 3 rows) from fw.bin.gz\n");
    }

    #[test]
    fn test_format_report_json() {
        let json = format_report(&sample_report(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["compressed_size"], 42);
        assert_eq!(value["identifier"], "fw_bin_gz");
        assert_eq!(value["backend"], "builtin");
    }

    #[test]
    fn test_format_error() {
        let err: Error = CommandError::MissingFileName.into();
        assert_eq!(format_error(&err, OutputFormat::Text), "Missing file name");

        let json = format_error(&err, OutputFormat::Json);
        assert!(json.contains("\"error\": \"Missing file name\""));
        assert!(json.contains("\"kind\": \"command\""));
    }
}
