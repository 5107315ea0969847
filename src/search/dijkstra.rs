use std::time::Instant;

use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataHashMap},
        vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
        vertex_expanded_data::{VertexExpandedData, VertexExpandedDataHashSet},
    },
    path::Path,
    PathFinding,
};
use crate::{
    error::UnknownVertex,
    graphs::{Distance, Graph, Vertex},
};

/// Runs Dijkstra from `source` until every reachable vertex is settled.
pub fn dijkstra_one_to_all<'g>(
    graph: &'g dyn Graph,
    data: &mut dyn DijkstraData<'g>,
    expanded: &mut dyn VertexExpandedData<'g>,
    queue: &mut dyn VertexDistanceQueue<'g>,
    source: &'g Vertex,
) {
    data.set_distance(source, 0);
    queue.insert(source, 0);

    while let Some(tail) = queue.pop() {
        if expanded.expand(tail) {
            continue;
        }

        relax_out_edges(graph, data, expanded, queue, tail);
    }
}

/// Runs Dijkstra from `source` and stops as soon as `target` is settled.
pub fn dijkstra_one_to_one<'g>(
    graph: &'g dyn Graph,
    data: &mut dyn DijkstraData<'g>,
    expanded: &mut dyn VertexExpandedData<'g>,
    queue: &mut dyn VertexDistanceQueue<'g>,
    source: &'g Vertex,
    target: &'g Vertex,
) {
    data.set_distance(source, 0);
    queue.insert(source, 0);

    while let Some(tail) = queue.pop() {
        if expanded.expand(tail) {
            continue;
        }
        if tail == target {
            break;
        }

        relax_out_edges(graph, data, expanded, queue, tail);
    }
}

fn relax_out_edges<'g>(
    graph: &'g dyn Graph,
    data: &mut dyn DijkstraData<'g>,
    expanded: &dyn VertexExpandedData<'g>,
    queue: &mut dyn VertexDistanceQueue<'g>,
    tail: &'g Vertex,
) {
    // Only vertices with a finite distance are ever queued. Distances are wider
    // than weights, so the sum below is exact.
    let Some(distance_tail) = data.get_distance(tail.label()) else {
        return;
    };

    for edge in graph.out_edges(tail.label()) {
        let head = edge.head();
        if expanded.is_expanded(head.label()) {
            continue;
        }

        let alternative_distance_head = distance_tail + Distance::from(edge.weight());
        let improves = data
            .get_distance(head.label())
            .map_or(true, |current_distance_head| {
                alternative_distance_head < current_distance_head
            });
        if improves {
            data.set_distance(head, alternative_distance_head);
            data.set_predecessor(head, tail);
            queue.insert(head, alternative_distance_head);
        }
    }
}

/// Shortest path from `source` to `target` in `graph`.
///
/// Returns `Ok(None)` if `target` is not reachable. A query from a vertex to
/// itself is the single vertex path of distance 0, regardless of any
/// self-loop. All search state is local to the call.
#[tracing::instrument(level = "debug", skip(graph))]
pub fn shortest_path(
    graph: &dyn Graph,
    source: &str,
    target: &str,
) -> Result<Option<Path>, UnknownVertex> {
    let source = graph
        .get_vertex(source)
        .ok_or_else(|| UnknownVertex::new(source))?;
    let target = graph
        .get_vertex(target)
        .ok_or_else(|| UnknownVertex::new(target))?;

    if source == target {
        return Ok(Some(Path::new(vec![source.clone()], 0)));
    }

    let start = Instant::now();
    let mut data = DijkstraDataHashMap::new();
    let mut expanded = VertexExpandedDataHashSet::new();
    let mut queue = VertexDistanceQueueBinaryHeap::new();
    dijkstra_one_to_one(graph, &mut data, &mut expanded, &mut queue, source, target);

    let path = data.get_path(target);
    tracing::trace!(
        elapsed = ?start.elapsed(),
        settled = expanded.len(),
        distance = ?path.as_ref().map(Path::distance),
        "dijkstra finished"
    );

    Ok(path)
}

/// Distances from `source` to every vertex reachable from it.
pub fn single_source<'g>(
    graph: &'g dyn Graph,
    source: &str,
) -> Result<DijkstraDataHashMap<'g>, UnknownVertex> {
    let source = graph
        .get_vertex(source)
        .ok_or_else(|| UnknownVertex::new(source))?;

    let mut data = DijkstraDataHashMap::new();
    let mut expanded = VertexExpandedDataHashSet::new();
    let mut queue = VertexDistanceQueueBinaryHeap::new();
    dijkstra_one_to_all(graph, &mut data, &mut expanded, &mut queue, source);

    Ok(data)
}

/// [`PathFinding`] over a borrowed graph.
#[derive(Clone)]
pub struct Dijkstra<'a> {
    graph: &'a dyn Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> Dijkstra<'a> {
        Dijkstra { graph }
    }
}

impl<'a> PathFinding for Dijkstra<'a> {
    fn shortest_path(&self, source: &str, target: &str) -> Result<Option<Path>, UnknownVertex> {
        shortest_path(self.graph, source, target)
    }
}
