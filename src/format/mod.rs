//! Text formats: the adjacency-list input and DOT output.

pub mod dot;
pub mod reader;

pub use dot::{to_dot, write_dot, write_dot_file};
pub use reader::{parse_line, read_input_adjlist, AdjListReader, ReaderOptions};
