use std::{cmp::Reverse, collections::BinaryHeap};

use radix_heap::RadixHeapMap;

use crate::graphs::{Distance, Vertex};

/// The frontier of a Dijkstra search: repeatedly hands out the vertex with the
/// smallest tentative distance.
///
/// Implementations do not support decrease key. A vertex may be inserted
/// several times and stale entries are skipped by the caller.
pub trait VertexDistanceQueue<'g> {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    fn insert(&mut self, vertex: &'g Vertex, distance: Distance);

    /// Removes and returns the vertex with the smallest distance or none if the
    /// queue is empty.
    fn pop(&mut self) -> Option<&'g Vertex>;
}

/// Radix heap frontier. Only valid while popped distances never decrease, which
/// holds for non-negative edge weights.
pub struct VertexDistanceQueueRadixHeap<'g> {
    heap: RadixHeapMap<i128, &'g Vertex>,
}

impl<'g> Default for VertexDistanceQueueRadixHeap<'g> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'g> VertexDistanceQueueRadixHeap<'g> {
    pub fn new() -> Self {
        VertexDistanceQueueRadixHeap {
            heap: RadixHeapMap::new(),
        }
    }
}

impl<'g> VertexDistanceQueue<'g> for VertexDistanceQueueRadixHeap<'g> {
    fn clear(&mut self) {
        self.heap.clear();
    }

    fn insert(&mut self, vertex: &'g Vertex, distance: Distance) {
        self.heap.push(-distance, vertex);
    }

    fn pop(&mut self) -> Option<&'g Vertex> {
        self.heap.pop().map(|(_negative_distance, vertex)| vertex)
    }
}

/// A priority queue implementation using a Binary Heap. Ties are broken by
/// label.
pub struct VertexDistanceQueueBinaryHeap<'g> {
    heap: BinaryHeap<Reverse<(Distance, &'g Vertex)>>,
}

impl<'g> Default for VertexDistanceQueueBinaryHeap<'g> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'g> VertexDistanceQueueBinaryHeap<'g> {
    pub fn new() -> Self {
        VertexDistanceQueueBinaryHeap {
            heap: BinaryHeap::new(),
        }
    }
}

impl<'g> VertexDistanceQueue<'g> for VertexDistanceQueueBinaryHeap<'g> {
    fn clear(&mut self) {
        self.heap.clear();
    }

    fn insert(&mut self, vertex: &'g Vertex, distance: Distance) {
        self.heap.push(Reverse((distance, vertex)));
    }

    fn pop(&mut self) -> Option<&'g Vertex> {
        let Reverse((_distance, vertex)) = self.heap.pop()?;

        Some(vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap, VertexDistanceQueueRadixHeap};
    use crate::graphs::Vertex;

    fn drain<'g>(queue: &mut dyn VertexDistanceQueue<'g>) -> Vec<&'g str> {
        std::iter::from_fn(|| queue.pop())
            .map(Vertex::label)
            .collect()
    }

    #[test]
    fn pops_smallest_distance_first() {
        let a = Vertex::new("a").unwrap();
        let b = Vertex::new("b").unwrap();
        let c = Vertex::new("c").unwrap();

        let mut binary = VertexDistanceQueueBinaryHeap::new();
        let mut radix = VertexDistanceQueueRadixHeap::new();
        let queues: [&mut dyn VertexDistanceQueue<'_>; 2] = [&mut binary, &mut radix];
        for queue in queues {
            queue.insert(&b, 5);
            queue.insert(&c, 0);
            queue.insert(&a, 7);
            queue.insert(&a, 3);

            assert_eq!(drain(queue), vec!["c", "a", "b", "a"]);
        }
    }
    #[test]
    fn binary_heap_breaks_ties_by_label() {
        let a = Vertex::new("a").unwrap();
        let b = Vertex::new("b").unwrap();
        let c = Vertex::new("c").unwrap();

        let mut queue = VertexDistanceQueueBinaryHeap::new();
        queue.insert(&c, 2);
        queue.insert(&b, 2);
        queue.insert(&a, 2);

        assert_eq!(drain(&mut queue), vec!["a", "b", "c"]);
    }
}
