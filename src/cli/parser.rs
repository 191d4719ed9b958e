//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::compress::{DEFAULT_BACKEND, DEFAULT_GZIP_PROGRAM, available_backends};
use clap::Parser;
use clap::builder::PossibleValuesParser;
use std::path::PathBuf;

/// gzarray: gzip a file and emit it as a C byte array.
///
/// Writes `<FILE>.gz` and `<FILE>.txt` next to the input. The text file
/// holds a `#define <name>_len` constant and a `const uint8_t <name>[]`
/// literal, 16 bytes per row.
#[derive(Parser, Debug)]
#[command(name = "gzarray")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File to compress and embed.
    pub file: Option<PathBuf>,

    /// Compressor backend.
    #[arg(
        short,
        long,
        env = "GZARRAY_BACKEND",
        default_value = DEFAULT_BACKEND,
        value_parser = PossibleValuesParser::new(available_backends())
    )]
    pub backend: String,

    /// gzip-compatible program used by the external backend.
    #[arg(long = "gzip", env = "GZARRAY_GZIP", default_value = DEFAULT_GZIP_PROGRAM)]
    pub gzip_program: String,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_only() {
        let cli = Cli::try_parse_from(["gzarray", "logo.png"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("logo.png")));
        assert!(!cli.verbose);
        assert_eq!(cli.format, "text");
    }

    #[test]
    fn test_file_is_optional() {
        let cli = Cli::try_parse_from(["gzarray"]).unwrap();
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_backend_flags() {
        let cli = Cli::try_parse_from([
            "gzarray",
            "-b",
            "builtin",
            "--gzip",
            "pigz",
            "--format",
            "json",
            "-v",
            "fw.bin",
        ])
        .unwrap();
        assert_eq!(cli.backend, "builtin");
        assert_eq!(cli.gzip_program, "pigz");
        assert_eq!(cli.format, "json");
        assert!(cli.verbose);
    }

    #[test]
    fn test_backend_restricted_to_available() {
        let err = Cli::try_parse_from(["gzarray", "--backend", "zstd", "fw.bin"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
        for backend in available_backends() {
            assert!(err.to_string().contains(backend));
        }
    }

    #[test]
    fn test_default_backend_is_available() {
        let cli = Cli::try_parse_from(["gzarray", "fw.bin"]).unwrap();
        assert!(available_backends().contains(&cli.backend.as_str()));
    }

    #[test]
    fn test_extra_positional_rejected() {
        assert!(Cli::try_parse_from(["gzarray", "a", "b"]).is_err());
    }
}
