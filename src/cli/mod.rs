//! Command implementations behind the `adjview` binary.

pub mod commands;

pub use commands::OutputFormat;
