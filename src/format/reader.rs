//! Reads line-oriented adjacency lists into an [`AdjacencyList`].
//!
//! Each line has the form `<label>: <int>, <int>, ...`. The label is an
//! annotation only and never affects the result; line `i` fills slot `i`.

use std::io::BufRead;

use crate::types::{AdjError, AdjResult, AdjacencyList, NodeId};

/// Parser behaviour switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReaderOptions {
    /// Reject lines without a `:` instead of treating them as empty.
    pub strict: bool,
}

/// Reader for adjacency-list text.
pub struct AdjListReader {
    options: ReaderOptions,
}

impl AdjListReader {
    /// Create a reader with default (lenient) options.
    pub fn new() -> Self {
        Self {
            options: ReaderOptions::default(),
        }
    }

    /// Create a reader with explicit options.
    pub fn with_options(options: ReaderOptions) -> Self {
        Self { options }
    }

    /// Read exactly `n` lines from `reader`. Anything after them is left unread.
    pub fn read(&self, reader: &mut impl BufRead, n: usize) -> AdjResult<AdjacencyList> {
        let mut adj = AdjacencyList::new(n);
        let mut line = String::new();

        for i in 0..n {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Err(AdjError::UnexpectedEof {
                    expected: n,
                    read: i,
                });
            }
            let neighbors = parse_line(&line, i + 1, self.options)?;
            adj.set(i, neighbors)?;
        }

        log::debug!(
            "Read {} nodes with {} neighbor entries",
            adj.len(),
            adj.edge_count()
        );
        Ok(adj)
    }
}

impl Default for AdjListReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Read exactly `n` lines with default options.
pub fn read_input_adjlist(reader: &mut impl BufRead, n: usize) -> AdjResult<AdjacencyList> {
    AdjListReader::new().read(reader, n)
}

/// Parse one line into its neighbor list. `line_no` is 1-based and only used
/// for diagnostics.
pub fn parse_line(line: &str, line_no: usize, options: ReaderOptions) -> AdjResult<Vec<NodeId>> {
    let line = line.trim_end_matches(['\n', '\r']);

    let Some((_label, tail)) = line.split_once(':') else {
        if options.strict {
            return Err(AdjError::MissingSeparator { line: line_no });
        }
        log::warn!("Line {line_no}: no ':' separator, treating as a node without edges");
        return Ok(Vec::new());
    };

    tail.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<NodeId>()
                .map_err(|source| AdjError::InvalidNeighbor {
                    line: line_no,
                    token: token.to_string(),
                    source,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LENIENT: ReaderOptions = ReaderOptions { strict: false };

    #[test]
    fn label_is_ignored() {
        assert_eq!(parse_line("-1: 1, 2\n", 1, LENIENT).unwrap(), vec![1, 2]);
        assert_eq!(parse_line("anything: 1, 2", 1, LENIENT).unwrap(), vec![1, 2]);
    }

    #[test]
    fn only_first_colon_splits() {
        let err = parse_line("a: 1: 2", 3, LENIENT).unwrap_err();
        match err {
            AdjError::InvalidNeighbor { line, token, .. } => {
                assert_eq!(line, 3);
                assert_eq!(token, "1: 2");
            }
            e => panic!("Expected InvalidNeighbor, got {:?}", e),
        }
    }

    #[test]
    fn empty_tokens_skipped() {
        assert_eq!(parse_line("0: ,1,, 2 ,\r\n", 1, LENIENT).unwrap(), vec![1, 2]);
        assert!(parse_line("0: ", 1, LENIENT).unwrap().is_empty());
        assert!(parse_line("0:", 1, LENIENT).unwrap().is_empty());
    }

    #[test]
    fn signed_tokens() {
        assert_eq!(parse_line("x: -3, +4", 1, LENIENT).unwrap(), vec![-3, 4]);
    }

    #[test]
    fn strict_rejects_missing_colon() {
        let strict = ReaderOptions { strict: true };
        assert!(matches!(
            parse_line("1 2 3", 7, strict),
            Err(AdjError::MissingSeparator { line: 7 })
        ));
        assert!(parse_line("1 2 3", 7, LENIENT).unwrap().is_empty());
    }
}
