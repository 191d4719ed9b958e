//! CLI layer for gzarray.
//!
//! Provides the command-line interface using clap.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::Cli;
