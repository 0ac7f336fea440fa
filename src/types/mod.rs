//! Core data types: node ids, the adjacency list container and errors.

pub mod adjacency;
pub mod error;

pub use adjacency::AdjacencyList;
pub use error::{AdjError, AdjResult};

/// A node reference as written in the input. Signed so that any integer the
/// parser accepts survives unchanged; range is never validated.
pub type NodeId = i64;
