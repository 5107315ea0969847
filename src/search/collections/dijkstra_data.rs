use ahash::{HashMap, HashMapExt};

use crate::{
    graphs::{Distance, Vertex},
    search::path::Path,
};

/// Trait for handling data access in Dijkstra's algorithm.
///
/// The data lives for one query only and borrows its vertices from the graph
/// being searched. A vertex without a stored distance is at infinite distance.
pub trait DijkstraData<'g> {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Retrieves the predecessor of a given vertex, if any.
    fn get_predecessor(&self, vertex: &str) -> Option<&'g Vertex>;

    /// Sets the predecessor for a given vertex.
    fn set_predecessor(&mut self, vertex: &'g Vertex, predecessor: &'g Vertex);

    /// Retrieves the distance to a given vertex, `None` if it is unreached.
    fn get_distance(&self, vertex: &str) -> Option<Distance>;

    /// Sets the distance to a given vertex.
    fn set_distance(&mut self, vertex: &'g Vertex, distance: Distance);

    /// Constructs the path to a target vertex, if reachable.
    ///
    /// This function traces back from the target vertex using
    /// predecessor data to build the full path. Returns `None`
    /// if the target vertex is unreachable.
    fn get_path(&self, target: &'g Vertex) -> Option<Path> {
        let distance = self.get_distance(target.label())?;

        let mut vertices = vec![target.clone()];
        let mut predecessor = target;
        while let Some(new_predecessor) = self.get_predecessor(predecessor.label()) {
            predecessor = new_predecessor;
            vertices.push(predecessor.clone());
        }

        // Reverse the path to start from the source vertex.
        vertices.reverse();

        Some(Path::new(vertices, distance))
    }
}

pub struct DijkstraDataHashMap<'g> {
    predecessors: HashMap<&'g str, &'g Vertex>,
    distances: HashMap<&'g str, Distance>,
}

impl<'g> Default for DijkstraDataHashMap<'g> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'g> DijkstraDataHashMap<'g> {
    pub fn new() -> Self {
        DijkstraDataHashMap {
            predecessors: HashMap::new(),
            distances: HashMap::new(),
        }
    }

    /// All reached vertices with their distance, in no particular order.
    pub fn distances(&self) -> impl Iterator<Item = (&'g str, Distance)> + '_ {
        self.distances
            .iter()
            .map(|(&vertex, &distance)| (vertex, distance))
    }
}

impl<'g> DijkstraData<'g> for DijkstraDataHashMap<'g> {
    fn clear(&mut self) {
        self.predecessors.clear();
        self.distances.clear();
    }

    fn get_predecessor(&self, vertex: &str) -> Option<&'g Vertex> {
        self.predecessors.get(vertex).copied()
    }

    fn set_predecessor(&mut self, vertex: &'g Vertex, predecessor: &'g Vertex) {
        self.predecessors.insert(vertex.label(), predecessor);
    }

    fn get_distance(&self, vertex: &str) -> Option<Distance> {
        self.distances.get(vertex).copied()
    }

    fn set_distance(&mut self, vertex: &'g Vertex, distance: Distance) {
        self.distances.insert(vertex.label(), distance);
    }
}

#[cfg(test)]
mod tests {
    use super::{DijkstraData, DijkstraDataHashMap};
    use crate::graphs::Vertex;

    #[test]
    fn path_follows_predecessors() {
        let a = Vertex::new("a").unwrap();
        let b = Vertex::new("b").unwrap();
        let c = Vertex::new("c").unwrap();

        let mut data = DijkstraDataHashMap::new();
        data.set_distance(&a, 0);
        data.set_distance(&b, 2);
        data.set_predecessor(&b, &a);
        data.set_distance(&c, 3);
        data.set_predecessor(&c, &b);

        let path = data.get_path(&c).unwrap();
        assert_eq!(path.labels(), vec!["a", "b", "c"]);
        assert_eq!(path.distance(), 3);

        data.clear();
        assert!(data.get_path(&c).is_none());
    }
}
