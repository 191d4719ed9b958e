//! Byte loading with memory mapping for large files.
//!
//! [`read_bytes`] hands back a [`FileBytes`] that derefs to `&[u8]`. Large
//! files stay mapped for as long as the caller holds it, so rendering reads
//! straight from the page cache instead of a heap copy.

// Memory mapping requires unsafe but is well-documented and safe for read-only access
#![allow(unsafe_code)]

use crate::error::{IoError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::ops::Deref;
use std::path::Path;
use tracing::debug;

/// Files at or above this size are mapped rather than read (1MB).
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Contents of a file, either mapped or read into memory.
#[derive(Debug)]
pub enum FileBytes {
    /// Read-only memory map.
    Mapped(Mmap),
    /// Heap buffer, used for small files.
    Owned(Vec<u8>),
}

impl FileBytes {
    /// Returns true if the contents are memory mapped.
    #[must_use]
    pub const fn is_mapped(&self) -> bool {
        matches!(self, Self::Mapped(_))
    }
}

impl Deref for FileBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Mapped(mmap) => &mmap[..],
            Self::Owned(bytes) => bytes.as_slice(),
        }
    }
}

/// Loads a whole file, mapping it if it is large.
///
/// # Examples
///
/// ```no_run
/// use gzarray::io::read_bytes;
///
/// let bytes = read_bytes("firmware.bin.gz").unwrap();
/// assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
/// ```
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file is missing, or another
/// [`IoError`] if it cannot be opened, mapped, or read.
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<FileBytes> {
    let path_ref = path.as_ref();
    let read_failed = |e: std::io::Error| IoError::ReadFailed {
        path: path_ref.to_string_lossy().to_string(),
        reason: e.to_string(),
    };

    let mut file = File::open(path_ref).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path_ref.to_string_lossy().to_string(),
            }
        } else {
            read_failed(e)
        }
    })?;
    let size = file.metadata().map_err(read_failed)?.len();

    if size >= MMAP_THRESHOLD {
        debug!(path = %path_ref.display(), size, "mapping file");
        // Safety: read-only mapping; the file is not modified while mapped
        let mmap = unsafe {
            Mmap::map(&file).map_err(|e| IoError::MmapFailed {
                path: path_ref.to_string_lossy().to_string(),
                reason: e.to_string(),
            })?
        };
        return Ok(FileBytes::Mapped(mmap));
    }

    let mut buffer = Vec::with_capacity(usize::try_from(size).unwrap_or_default());
    file.read_to_end(&mut buffer).map_err(read_failed)?;
    Ok(FileBytes::Owned(buffer))
}

/// Writes text content to a file, replacing any existing file.
///
/// The parent directory is not created; a missing directory is an error.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path_ref = path.as_ref();

    std::fs::write(path_ref, content).map_err(|e| IoError::WriteFailed {
        path: path_ref.to_string_lossy().to_string(),
        reason: e.to_string(),
    })?;

    Ok(())
}

/// Removes a file, ignoring every error.
///
/// Returns `true` if a file was actually removed.
pub fn remove_if_exists<P: AsRef<Path>>(path: P) -> bool {
    let path_ref = path.as_ref();
    match std::fs::remove_file(path_ref) {
        Ok(()) => {
            debug!(path = %path_ref.display(), "removed stale file");
            true
        }
        Err(e) => {
            debug!(path = %path_ref.display(), error = %e, "nothing removed");
            false
        }
    }
}
