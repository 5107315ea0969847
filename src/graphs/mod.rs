use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

use self::edge::TaillessEdge;
use crate::error::EmptyLabel;

pub mod edge;
pub mod files;
pub mod label_graph;

/// Edge weights as supplied by callers. Negative values are representable so
/// that construction can reject them.
pub type Weight = i64;
/// Sum of edge weights along a path. Wide enough that a simple path over
/// `Weight::MAX` edges cannot overflow.
pub type Distance = i128;

/// A vertex, identified solely by its label.
///
/// Equality, ordering and hashing only look at the label. The label is
/// compared code point by code point, no normalization is applied.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Debug)]
#[serde(try_from = "String", into = "String")]
pub struct Vertex {
    label: String,
}

impl Vertex {
    /// Returns `None` for the empty label.
    pub fn new(label: impl Into<String>) -> Option<Vertex> {
        let label = label.into();
        if label.is_empty() {
            return None;
        }

        Some(Vertex { label })
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

// `Hash` is derived over the single `String` field, so it agrees with the
// hash of the borrowed `str`.
impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.label
    }
}

impl TryFrom<String> for Vertex {
    type Error = EmptyLabel;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Vertex::new(label).ok_or(EmptyLabel)
    }
}

impl From<Vertex> for String {
    fn from(vertex: Vertex) -> Self {
        vertex.label
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Read access to a directed, non-negatively weighted graph whose vertices are
/// addressed by label.
pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32;

    /// Returns the graph's own copy of the vertex with this label.
    fn get_vertex(&self, label: &str) -> Option<&Vertex>;

    fn contains(&self, label: &str) -> bool {
        self.get_vertex(label).is_some()
    }

    /// Outgoing edges of `tail` in insertion order. Empty if `tail` is not a
    /// vertex of the graph.
    fn out_edges<'a>(
        &'a self,
        tail: &str,
    ) -> Box<dyn ExactSizeIterator<Item = &'a TaillessEdge> + Send + 'a>;

    fn get_weight(&self, tail: &str, head: &str) -> Option<Weight> {
        self.out_edges(tail)
            .find(|edge| edge.head().label() == head)
            .map(|edge| edge.weight())
    }
}
