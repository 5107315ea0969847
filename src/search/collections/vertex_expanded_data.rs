use ahash::{HashSet, HashSetExt};

use crate::graphs::Vertex;

/// The settled set of a Dijkstra search.
pub trait VertexExpandedData<'g> {
    /// Marks `vertex` as settled and returns whether it already was.
    fn expand(&mut self, vertex: &'g Vertex) -> bool;

    fn is_expanded(&self, vertex: &str) -> bool;

    fn clear(&mut self);
}

pub struct VertexExpandedDataHashSet<'g> {
    expanded: HashSet<&'g str>,
}

impl<'g> Default for VertexExpandedDataHashSet<'g> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'g> VertexExpandedDataHashSet<'g> {
    pub fn new() -> Self {
        VertexExpandedDataHashSet {
            expanded: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

impl<'g> VertexExpandedData<'g> for VertexExpandedDataHashSet<'g> {
    fn expand(&mut self, vertex: &'g Vertex) -> bool {
        !self.expanded.insert(vertex.label())
    }

    fn is_expanded(&self, vertex: &str) -> bool {
        self.expanded.contains(vertex)
    }

    fn clear(&mut self) {
        self.expanded.clear()
    }
}
