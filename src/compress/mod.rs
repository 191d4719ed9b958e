//! Gzip compressor backends.
//!
//! Both backends turn `<path>` into a `<path>.gz` sibling and leave the
//! original file in place:
//!
//! - **External**: runs a gzip-compatible program as `<program> -k <path>`
//! - **Builtin**: compresses in-process with `flate2`

mod builtin;
mod external;

pub use builtin::BuiltinGzip;
pub use external::ExternalGzip;

use crate::error::{CompressError, Result};
use std::path::Path;

/// Default external program.
pub const DEFAULT_GZIP_PROGRAM: &str = "gzip";

/// Default backend name.
pub const DEFAULT_BACKEND: &str = "external";

/// Trait for gzip compressors.
///
/// # Examples
///
/// ```no_run
/// use gzarray::compress::{BuiltinGzip, Compressor};
/// use std::path::Path;
///
/// let compressor = BuiltinGzip::new();
/// compressor.compress(Path::new("logo.png"), Path::new("logo.png.gz")).unwrap();
/// ```
pub trait Compressor {
    /// Backend name, as accepted by [`create_compressor`].
    fn name(&self) -> &'static str;

    /// Compresses `input` into `output`, keeping `input`.
    ///
    /// `output` is always `<input>.gz`; backends that cannot choose their
    /// output location (the external tool) rely on that.
    ///
    /// # Errors
    ///
    /// Returns a [`CompressError`] if compression fails.
    fn compress(&self, input: &Path, output: &Path) -> Result<()>;
}

/// Creates a compressor by backend name.
///
/// `gzip_program` is only used by the external backend.
///
/// # Errors
///
/// Returns [`CompressError::UnknownBackend`] if the name is not recognized.
pub fn create_compressor(name: &str, gzip_program: &str) -> Result<Box<dyn Compressor>> {
    match name.to_lowercase().as_str() {
        "external" => Ok(Box::new(ExternalGzip::new(gzip_program))),
        "builtin" => Ok(Box::new(BuiltinGzip::new())),
        _ => Err(CompressError::UnknownBackend {
            name: name.to_string(),
        }
        .into()),
    }
}

/// Lists available backend names.
#[must_use]
pub fn available_backends() -> Vec<&'static str> {
    vec!["external", "builtin"]
}
