//! Error types for the adjlist-view library.

use std::num::ParseIntError;

use thiserror::Error;

/// All errors that can occur while reading, building or displaying a graph.
#[derive(Error, Debug)]
pub enum AdjError {
    /// Indexed write past the end of the adjacency list.
    #[error("Index {index} out of range for adjacency list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Input ended before the requested number of lines was read.
    #[error("Unexpected end of input: expected {expected} lines, read {read}")]
    UnexpectedEof { expected: usize, read: usize },

    /// A neighbor token is not an integer.
    #[error("Line {line}: invalid neighbor {token:?}: {source}")]
    InvalidNeighbor {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// Line has no `:` separator (strict mode only).
    #[error("Line {line}: missing ':' separator")]
    MissingSeparator { line: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Display config could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// Viewer could not be launched or failed.
    #[error("Viewer error: {0}")]
    Viewer(String),
}

/// Convenience result type for adjlist-view operations.
pub type AdjResult<T> = Result<T, AdjError>;
