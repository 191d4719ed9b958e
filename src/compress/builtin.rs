//! In-process gzip backend using `flate2`.

use super::Compressor;
use crate::error::{CompressError, Result};
use flate2::{Compression, GzBuilder};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

/// Compresses with `flate2` at gzip's default level (6).
///
/// The header records the input's file name, like `gzip` does, but the
/// modification time is always zero so output is reproducible.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinGzip {
    level: Compression,
}

impl BuiltinGzip {
    /// Creates a backend using the default compression level.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Compression::default(),
        }
    }

    fn compress_inner(&self, input: &Path, output: &Path) -> io::Result<u64> {
        let mut reader = BufReader::new(File::open(input)?);
        let writer = BufWriter::new(File::create(output)?);

        let mut builder = GzBuilder::new().mtime(0);
        if let Some(name) = input.file_name() {
            builder = builder.filename(name.to_string_lossy().into_owned());
        }

        let mut encoder = builder.write(writer, self.level);
        let copied = io::copy(&mut reader, &mut encoder)?;
        let mut writer = encoder.finish()?;
        io::Write::flush(&mut writer)?;
        Ok(copied)
    }
}

impl Default for BuiltinGzip {
    fn default() -> Self {
        Self::new()
    }
}

impl Compressor for BuiltinGzip {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn compress(&self, input: &Path, output: &Path) -> Result<()> {
        let copied = self
            .compress_inner(input, output)
            .map_err(|e| CompressError::Library {
                path: input.to_string_lossy().to_string(),
                reason: e.to_string(),
            })?;
        debug!(input = %input.display(), output = %output.display(), bytes = copied, "compressed in-process");
        Ok(())
    }
}
