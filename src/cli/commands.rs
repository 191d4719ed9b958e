//! CLI command implementation.

use crate::cli::output::{OutputFormat, format_report};
use crate::cli::parser::Cli;
use crate::compress::create_compressor;
use crate::core::EmitPaths;
use crate::emitter::emit;
use crate::error::{CommandError, Result};
use tracing::debug;

/// Executes the CLI command.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns [`CommandError::MissingFileName`] when no input was given, or
/// whatever [`emit`] reports.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let file = cli.file.as_ref().ok_or(CommandError::MissingFileName)?;

    let compressor = create_compressor(&cli.backend, &cli.gzip_program)?;
    let paths = EmitPaths::new(file);
    debug!(input = %paths.input.display(), backend = compressor.name(), "starting");

    let report = emit(&paths, compressor.as_ref())?;
    Ok(format_report(&report, format))
}
