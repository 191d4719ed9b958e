//! I/O utilities for gzarray.
//!
//! Byte loading (memory mapped for large compressed files) plus the write
//! and cleanup helpers used by the emitter.

pub mod reader;

pub use reader::{FileBytes, read_bytes, remove_if_exists, write_file};
