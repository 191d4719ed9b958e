//! The compress-read-render pipeline.
//!
//! [`emit`] is the whole program minus argument parsing: it refreshes the
//! `.gz` sibling, reads it back, and writes the `.txt` array fragment.

use crate::compress::Compressor;
use crate::core::{ByteArray, EmitPaths};
use crate::error::Result;
use crate::io::{read_bytes, remove_if_exists, write_file};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Summary of one successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmitReport {
    /// Input file.
    pub input: PathBuf,
    /// Compressed sibling that was produced.
    pub gz: PathBuf,
    /// Array text that was written.
    pub txt: PathBuf,
    /// Identifier used for the array.
    pub identifier: String,
    /// Size of the compressed file in bytes.
    pub compressed_size: usize,
    /// Number of data rows in the array.
    pub rows: usize,
    /// Backend that produced the compressed file.
    pub backend: &'static str,
}

/// Compresses `paths.input` and writes its byte array to `paths.txt`.
///
/// Any existing `paths.gz` is removed first; failure to remove it is
/// ignored. If compression fails nothing else is touched, so an existing
/// `paths.txt` is left as it was.
///
/// # Errors
///
/// Returns the compressor's error if compression fails, or an I/O error if
/// the compressed file cannot be read or the text cannot be written.
pub fn emit(paths: &EmitPaths, compressor: &dyn Compressor) -> Result<EmitReport> {
    let _ = remove_if_exists(&paths.gz);

    compressor.compress(&paths.input, &paths.gz)?;

    let bytes = read_bytes(&paths.gz)?;
    let array = ByteArray::new(paths.gz_display(), paths.identifier(), &bytes);

    write_file(&paths.txt, &array.render())?;
    info!(
        output = %paths.txt.display(),
        size = array.len(),
        rows = array.row_count(),
        "wrote byte array"
    );

    Ok(EmitReport {
        input: paths.input.clone(),
        gz: paths.gz.clone(),
        txt: paths.txt.clone(),
        compressed_size: array.len(),
        rows: array.row_count(),
        identifier: array.identifier,
        backend: compressor.name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::compress::BuiltinGzip;
    use crate::error::CompressError;
    use std::path::Path;
    use tempfile::TempDir;

    /// Compressor that writes fixed bytes, or fails.
    struct Canned(Option<Vec<u8>>);

    impl Compressor for Canned {
        fn name(&self) -> &'static str {
            "canned"
        }

        fn compress(&self, _input: &Path, output: &Path) -> Result<()> {
            match &self.0 {
                Some(bytes) => {
                    std::fs::write(output, bytes)?;
                    Ok(())
                }
                None => Err(CompressError::ToolFailed {
                    program: "canned".to_string(),
                    status: Some(1),
                }
                .into()),
            }
        }
    }

    fn setup(content: &[u8]) -> (EmitPaths, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("blob.bin");
        std::fs::write(&input, content).unwrap();
        (EmitPaths::new(input), temp_dir)
    }

    #[test]
    fn test_emit_writes_array() {
        let (paths, _temp) = setup(b"ignored");
        let report = emit(&paths, &Canned(Some((0u8..20).collect()))).unwrap();

        assert_eq!(report.compressed_size, 20);
        assert_eq!(report.rows, 2);
        assert_eq!(report.identifier, "blob_bin_gz");
        assert_eq!(report.backend, "canned");

        let text = std::fs::read_to_string(&paths.txt).unwrap();
        assert!(text.contains("#define blob_bin_gz_len 20\n"));
        assert!(text.contains("const uint8_t blob_bin_gz[] = {\n"));
        assert!(text.contains("  0x10, 0x11, 0x12, 0x13, \n};\n\n"));
    }

    #[test]
    fn test_emit_removes_stale_gz() {
        let (paths, _temp) = setup(b"ignored");
        std::fs::write(&paths.gz, vec![0xee; 100]).unwrap();

        // The canned compressor fails, so only the removal is observable.
        let result = emit(&paths, &Canned(None));
        assert!(result.is_err());
        assert!(!paths.gz.exists());
    }

    #[test]
    fn test_unremovable_gz_still_reaches_compressor() {
        let (paths, _temp) = setup(b"ignored");
        std::fs::create_dir(&paths.gz).unwrap();

        let err = emit(&paths, &Canned(None)).unwrap_err();
        assert!(matches!(
            err,
            Error::Compress(CompressError::ToolFailed { .. })
        ));
        assert_eq!(err.to_string(), "gzip failed");
        assert!(paths.gz.is_dir());
        assert!(!paths.txt.exists());
    }

    #[test]
    fn test_failed_compression_leaves_txt_untouched() {
        let (paths, _temp) = setup(b"ignored");
        std::fs::write(&paths.txt, "previous output").unwrap();

        let result = emit(&paths, &Canned(None));
        assert!(matches!(
            result,
            Err(Error::Compress(CompressError::ToolFailed { .. }))
        ));
        assert_eq!(
            std::fs::read_to_string(&paths.txt).unwrap(),
            "previous output"
        );
    }

    #[test]
    fn test_failed_compression_creates_no_txt() {
        let (paths, _temp) = setup(b"ignored");
        assert!(emit(&paths, &Canned(None)).is_err());
        assert!(!paths.txt.exists());
    }

    #[test]
    fn test_builtin_is_idempotent() {
        let (paths, _temp) = setup(b"firmware image contents");

        emit(&paths, &BuiltinGzip::new()).unwrap();
        let first = std::fs::read_to_string(&paths.txt).unwrap();
        emit(&paths, &BuiltinGzip::new()).unwrap();
        let second = std::fs::read_to_string(&paths.txt).unwrap();

        assert_eq!(first, second);
        assert!(paths.input.exists());
    }

    #[test]
    fn test_missing_input_with_builtin() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EmitPaths::new(temp_dir.path().join("absent.bin"));

        let err = emit(&paths, &BuiltinGzip::new()).unwrap_err();
        assert_eq!(err.to_string(), "gzip failed");
        assert!(!paths.txt.exists());
    }
}
