//! Fixed-length container of per-node neighbor lists.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::error::{AdjError, AdjResult};
use super::NodeId;

/// An ordered, fixed-length sequence of neighbor lists, one per node index.
///
/// Element `i` holds the targets of node `i`'s outgoing edges in input order.
/// Targets are not checked against the length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyList {
    lists: Vec<Vec<NodeId>>,
}

impl AdjacencyList {
    /// Create a list of `n` empty neighbor lists.
    pub fn new(n: usize) -> Self {
        Self {
            lists: vec![Vec::new(); n],
        }
    }

    /// Number of nodes. Fixed at construction.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// True when the list holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Borrow the neighbor list of node `index`.
    pub fn get(&self, index: usize) -> Option<&[NodeId]> {
        self.lists.get(index).map(Vec::as_slice)
    }

    /// Replace the neighbor list of node `index`.
    pub fn set(&mut self, index: usize, neighbors: Vec<NodeId>) -> AdjResult<()> {
        let len = self.lists.len();
        match self.lists.get_mut(index) {
            Some(slot) => {
                *slot = neighbors;
                Ok(())
            }
            None => Err(AdjError::IndexOutOfRange { index, len }),
        }
    }

    /// Iterate over neighbor lists in node order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<NodeId>> {
        self.lists.iter()
    }

    /// Iterate over `(source, target)` pairs, sources ascending, targets in list order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, NodeId)> + '_ {
        self.lists
            .iter()
            .enumerate()
            .flat_map(|(src, targets)| targets.iter().map(move |&dst| (src, dst)))
    }

    /// Total number of neighbor entries, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }
}

impl Index<usize> for AdjacencyList {
    type Output = Vec<NodeId>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lists[index]
    }
}

impl IndexMut<usize> for AdjacencyList {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.lists[index]
    }
}

impl<'a> IntoIterator for &'a AdjacencyList {
    type Item = &'a Vec<NodeId>;
    type IntoIter = std::slice::Iter<'a, Vec<NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lists.iter()
    }
}

impl From<Vec<Vec<NodeId>>> for AdjacencyList {
    fn from(lists: Vec<Vec<NodeId>>) -> Self {
        Self { lists }
    }
}

impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, list) in self.lists.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, v) in list.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
