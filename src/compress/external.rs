//! External gzip program backend.

use super::Compressor;
use crate::error::{CompressError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs a gzip-compatible program in keep-original mode.
///
/// The program is invoked directly (no shell) as `<program> -k -- <input>`
/// and writes `<input>.gz` next to the input.
#[derive(Debug, Clone)]
pub struct ExternalGzip {
    program: String,
}

impl ExternalGzip {
    /// Creates a backend that runs `program`.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ExternalGzip {
    fn default() -> Self {
        Self::new(super::DEFAULT_GZIP_PROGRAM)
    }
}

impl Compressor for ExternalGzip {
    fn name(&self) -> &'static str {
        "external"
    }

    fn compress(&self, input: &Path, output: &Path) -> Result<()> {
        debug!(program = %self.program, input = %input.display(), output = %output.display(), "running gzip");

        let status = Command::new(&self.program)
            .arg("-k")
            .arg("--")
            .arg(input)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| CompressError::Spawn {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            debug!(program = %self.program, code = ?status.code(), "gzip exited unsuccessfully");
            Err(CompressError::ToolFailed {
                program: self.program.clone(),
                status: status.code(),
            }
            .into())
        }
    }
}
