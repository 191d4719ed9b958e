//! # gzarray
//!
//! Gzip-compress a file and emit the compressed bytes as a C array literal.
//!
//! Given `logo.png`, a run produces `logo.png.gz` and `logo.png.txt`; the
//! latter contains
//!
//! ```text
//! // File: logo.png.gz, Size: 1234
//! #define logo_png_gz_len 1234
//! const uint8_t logo_png_gz[] = {
//!   0x1f, 0x8b, 0x08, ...
//! };
//! ```
//!
//! ready to be pasted or `#include`d into firmware sources.
//!
//! ## Features
//!
//! - **Backends**: an external `gzip -k` or in-process `flate2`
//! - **Memory Mapping**: large compressed files are read via `memmap2`

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod compress;
pub mod core;
pub mod emitter;
pub mod error;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

pub use crate::core::{ByteArray, EmitPaths, ROW_WIDTH};

pub use compress::{BuiltinGzip, Compressor, ExternalGzip, available_backends, create_compressor};

pub use emitter::{EmitReport, emit};

pub use cli::{Cli, OutputFormat};
