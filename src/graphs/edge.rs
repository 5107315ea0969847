use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Vertex, Weight};

/// A directed edge `tail -> head` as supplied by the caller. The weight is not
/// validated until the edge is handed to graph construction.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord, Debug)]
pub struct WeightedEdge {
    tail: Vertex,
    head: Vertex,
    weight: Weight,
}

impl WeightedEdge {
    /// Returns `None` if either label is empty. Self-loops are allowed.
    pub fn new(tail: &str, head: &str, weight: Weight) -> Option<WeightedEdge> {
        Some(WeightedEdge {
            tail: Vertex::new(tail)?,
            head: Vertex::new(head)?,
            weight,
        })
    }

    pub fn from_vertices(tail: Vertex, head: Vertex, weight: Weight) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    pub fn tail(&self) -> &Vertex {
        &self.tail
    }

    pub fn head(&self) -> &Vertex {
        &self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn tailless(&self) -> TaillessEdge {
        TaillessEdge {
            head: self.head.clone(),
            weight: self.weight,
        }
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.tail, self.head, self.weight)
    }
}

/// An entry of a vertex's adjacency: the neighbor and the weight to reach it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaillessEdge {
    head: Vertex,
    weight: Weight,
}

impl TaillessEdge {
    pub fn head(&self) -> &Vertex {
        &self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}
