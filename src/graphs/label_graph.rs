use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use itertools::Itertools;

use super::{
    edge::{TaillessEdge, WeightedEdge},
    Graph, Vertex, Weight,
};
use crate::{
    error::{ConstructionError, UnknownVertex},
    search::{dijkstra, path::Path},
};

/// Returned by [`LabelGraph::edge_cost`] when there is no edge between two
/// vertices.
pub const NO_EDGE: Weight = -1;

/// An immutable directed graph over labelled vertices with non-negative edge
/// weights.
///
/// Construction validates the input and builds the adjacency index once.
/// Afterwards no operation changes the vertices, the edges or the adjacency,
/// so any number of queries can share one instance.
#[derive(Clone, Debug)]
pub struct LabelGraph {
    vertices: Vec<Vertex>,
    edges: Vec<WeightedEdge>,
    adjacency: HashMap<Vertex, Vec<TaillessEdge>>,
}

impl LabelGraph {
    /// Validates `vertices` and `edges` and builds the graph.
    ///
    /// Repeated vertices denote the same vertex. Edges are checked in input
    /// order and the first violation of an edge wins: a negative weight, then
    /// an endpoint missing from `vertices`, then another edge with the same
    /// endpoints but a different weight. Identical parallel edges are
    /// collapsed into one.
    pub fn new(
        vertices: &[Vertex],
        edges: &[WeightedEdge],
    ) -> Result<LabelGraph, ConstructionError> {
        if let Err(error) = validate(vertices, edges) {
            tracing::debug!(%error, "rejected graph");
            return Err(error);
        }

        let vertices: Vec<Vertex> = vertices.iter().unique().cloned().collect();
        let edges: Vec<WeightedEdge> = edges.iter().unique().cloned().collect();

        let mut adjacency: HashMap<Vertex, Vec<TaillessEdge>> =
            HashMap::with_capacity(vertices.len());
        for vertex in vertices.iter() {
            adjacency.insert(vertex.clone(), Vec::new());
        }
        for edge in edges.iter() {
            if let Some(out_edges) = adjacency.get_mut(edge.tail().label()) {
                out_edges.push(edge.tailless());
            }
        }

        tracing::debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            "built graph"
        );

        Ok(LabelGraph {
            vertices,
            edges,
            adjacency,
        })
    }

    /// A copy of the vertices, in first-seen order.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.vertices.clone()
    }

    /// A copy of the canonical edges, in first-seen order.
    pub fn edges(&self) -> Vec<WeightedEdge> {
        self.edges.clone()
    }

    /// The heads of all edges leaving `vertex`, in insertion order.
    pub fn adjacent_vertices(&self, vertex: &str) -> Result<Vec<Vertex>, UnknownVertex> {
        let out_edges = self
            .adjacency
            .get(vertex)
            .ok_or_else(|| UnknownVertex::new(vertex))?;

        Ok(out_edges.iter().map(|edge| edge.head().clone()).collect())
    }

    /// The weight of the edge `tail -> head`, or [`NO_EDGE`] if there is none.
    pub fn edge_cost(&self, tail: &str, head: &str) -> Result<Weight, UnknownVertex> {
        self.check_vertex(tail)?;
        self.check_vertex(head)?;

        Ok(self.get_weight(tail, head).unwrap_or(NO_EDGE))
    }

    /// Shortest path from `source` to `target`. `Ok(None)` means `target` is
    /// not reachable from `source`.
    pub fn shortest_path(
        &self,
        source: &str,
        target: &str,
    ) -> Result<Option<Path>, UnknownVertex> {
        dijkstra::shortest_path(self, source, target)
    }

    fn check_vertex(&self, label: &str) -> Result<(), UnknownVertex> {
        if !self.adjacency.contains_key(label) {
            return Err(UnknownVertex::new(label));
        }
        Ok(())
    }
}

impl Graph for LabelGraph {
    fn number_of_vertices(&self) -> u32 {
        self.vertices.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        self.edges.len() as u32
    }

    fn get_vertex(&self, label: &str) -> Option<&Vertex> {
        self.adjacency.get_key_value(label).map(|(vertex, _)| vertex)
    }

    fn out_edges<'a>(
        &'a self,
        tail: &str,
    ) -> Box<dyn ExactSizeIterator<Item = &'a TaillessEdge> + Send + 'a> {
        match self.adjacency.get(tail) {
            Some(out_edges) => Box::new(out_edges.iter()),
            None => Box::new(std::iter::empty()),
        }
    }
}

fn validate(vertices: &[Vertex], edges: &[WeightedEdge]) -> Result<(), ConstructionError> {
    let known: HashSet<&str> = vertices.iter().map(Vertex::label).collect();

    // Smallest and largest weight seen for every pair of endpoints. A pair
    // conflicts exactly when the two differ.
    let mut weight_range: HashMap<(&str, &str), (Weight, Weight)> = HashMap::new();
    for edge in edges {
        let weight = edge.weight();
        weight_range
            .entry((edge.tail().label(), edge.head().label()))
            .and_modify(|(min, max)| {
                *min = (*min).min(weight);
                *max = (*max).max(weight);
            })
            .or_insert((weight, weight));
    }

    let mut checked: HashSet<&WeightedEdge> = HashSet::new();
    for edge in edges {
        if !checked.insert(edge) {
            continue;
        }

        let (tail, head) = (edge.tail().label(), edge.head().label());

        if edge.weight() < 0 {
            return Err(ConstructionError::NegativeWeight {
                tail: tail.to_string(),
                head: head.to_string(),
                weight: edge.weight(),
            });
        }

        if let Some(vertex) = [tail, head].into_iter().find(|label| !known.contains(label)) {
            return Err(ConstructionError::UnknownEndpoint {
                tail: tail.to_string(),
                head: head.to_string(),
                vertex: vertex.to_string(),
            });
        }

        if let Some(&(min, max)) = weight_range.get(&(tail, head)) {
            if min != max {
                let other_weight = if edge.weight() == min { max } else { min };
                return Err(ConstructionError::ConflictingEdge {
                    tail: tail.to_string(),
                    head: head.to_string(),
                    weight: edge.weight(),
                    other_weight,
                });
            }
        }
    }

    Ok(())
}
