//! Core domain models for gzarray.
//!
//! Path derivation and byte-array rendering. These are pure functions with
//! no I/O dependencies.

pub mod array;
pub mod paths;

pub use array::{ByteArray, ROW_WIDTH};
pub use paths::{EmitPaths, GZ_SUFFIX, TXT_SUFFIX};
