//! Shortest paths between labelled vertices of a directed graph with
//! non-negative edge weights.
//!
//! A [`LabelGraph`](graphs::label_graph::LabelGraph) is validated and indexed
//! once at construction and is read only afterwards. Queries run Dijkstra with
//! search state that is local to the call, so a graph can be shared between
//! any number of readers.

pub mod error;
pub mod graphs;
pub mod logging;
pub mod search;
pub mod utility;

pub use error::{ConstructionError, ReadError, UnknownVertex};
pub use graphs::{edge::WeightedEdge, label_graph::LabelGraph, Vertex, Weight};
pub use search::path::Path;
