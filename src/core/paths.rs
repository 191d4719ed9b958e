//! Sibling path derivation.
//!
//! Every run touches three files that share one stem: the input, its
//! compressed sibling, and the emitted text. The suffixes are appended to the
//! full file name, so `logo.png` becomes `logo.png.gz` and `logo.png.txt`.

use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended for the compressed sibling.
pub const GZ_SUFFIX: &str = ".gz";

/// Suffix appended for the emitted array text.
pub const TXT_SUFFIX: &str = ".txt";

/// The three paths involved in one emit run.
///
/// # Examples
///
/// ```
/// use gzarray::core::EmitPaths;
/// use std::path::Path;
///
/// let paths = EmitPaths::new("data/logo.png");
/// assert_eq!(paths.gz, Path::new("data/logo.png.gz"));
/// assert_eq!(paths.txt, Path::new("data/logo.png.txt"));
/// assert_eq!(paths.identifier(), "logo_png_gz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmitPaths {
    /// Input file as given on the command line.
    pub input: PathBuf,
    /// Compressed sibling, `<input>.gz`.
    pub gz: PathBuf,
    /// Emitted array text, `<input>.txt`.
    pub txt: PathBuf,
}

impl EmitPaths {
    /// Derives the sibling paths for `input`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(input: P) -> Self {
        let input = input.into();
        let gz = with_suffix(&input, GZ_SUFFIX);
        let txt = with_suffix(&input, TXT_SUFFIX);
        Self { input, gz, txt }
    }

    /// C identifier derived from the compressed file's name.
    ///
    /// Only the final path component is used; each `.` becomes `_`.
    #[must_use]
    pub fn identifier(&self) -> String {
        let name = self
            .gz
            .file_name()
            .map_or_else(|| self.gz.to_string_lossy(), |n| n.to_string_lossy());
        name.replace('.', "_")
    }

    /// Compressed path rendered for the header comment.
    #[must_use]
    pub fn gz_display(&self) -> String {
        self.gz.to_string_lossy().to_string()
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(suffix);
    PathBuf::from(raw)
}
