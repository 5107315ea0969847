use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Graph, Vertex};

/// Represents a path in a graph.
///
/// This struct encapsulates the vertices that form a path in the graph, from
/// source to target, and the total weight of traversing this path. A path is
/// never changed after it was produced.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Path {
    vertices: Vec<Vertex>,
    distance: Distance,
}

impl Path {
    pub fn new(vertices: Vec<Vertex>, distance: Distance) -> Path {
        Path { vertices, distance }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn labels(&self) -> Vec<&str> {
        self.vertices.iter().map(Vertex::label).collect()
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vertices.iter().join(" "))
    }
}

/// Represents a request for finding a shortest path in a graph.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ShortestPathRequest {
    pub source: String,
    pub target: String,
}

impl ShortestPathRequest {
    pub fn new(source: &str, target: &str) -> ShortestPathRequest {
        ShortestPathRequest {
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

/// Checks that `path` answers `request` with a walk that exists in `graph`
/// and whose edge weights sum up to the path's distance.
pub fn validate_path(
    graph: &dyn Graph,
    request: &ShortestPathRequest,
    path: &Path,
) -> Result<(), String> {
    // Ensure fist and last vertex of path are source and target of request.
    match (path.vertices.first(), path.vertices.last()) {
        (Some(first), Some(last)) => {
            if first.label() != request.source {
                return Err("first vertex of path is not source of request".to_string());
            }
            if last.label() != request.target {
                return Err("last vertex of path is not target of request".to_string());
            }
        }
        _ => return Err("path is empty".to_string()),
    }

    // Check if there is an edge between consecutive path vertices.
    let mut true_distance: Distance = 0;
    for (tail, head) in path.vertices.iter().tuple_windows() {
        let weight = graph
            .get_weight(tail.label(), head.label())
            .ok_or_else(|| format!("no edge between {} and {} found", tail, head))?;
        true_distance = true_distance
            .checked_add(Distance::from(weight))
            .ok_or_else(|| "sum of edge weights overflows".to_string())?;
    }

    if path.distance != true_distance {
        return Err(format!(
            "wrong path distance: {} but edges sum up to {}",
            path.distance, true_distance
        ));
    }

    Ok(())
}
