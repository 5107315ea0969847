use std::path::PathBuf;

use thiserror::Error;

use crate::graphs::Weight;

/// Reasons a [`LabelGraph`](crate::graphs::label_graph::LabelGraph) could not
/// be built. No partial graph exists when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("edge {tail} -> {head} has negative weight {weight}")]
    NegativeWeight {
        tail: String,
        head: String,
        weight: Weight,
    },

    #[error("edge {tail} -> {head} references unknown vertex {vertex}")]
    UnknownEndpoint {
        tail: String,
        head: String,
        vertex: String,
    },

    #[error("edges {tail} -> {head} have conflicting weights {weight} and {other_weight}")]
    ConflictingEdge {
        tail: String,
        head: String,
        weight: Weight,
        other_weight: Weight,
    },
}

/// A vertex label was empty.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("vertex label must not be empty")]
pub struct EmptyLabel;

/// A query named a label that is not a vertex of the graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no such vertex: {label}")]
pub struct UnknownVertex {
    pub label: String,
}

impl UnknownVertex {
    pub fn new(label: &str) -> UnknownVertex {
        UnknownVertex {
            label: label.to_string(),
        }
    }
}

/// Errors raised while reading a graph from its vertex and edge files.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("file not found: {path:?}")]
    NotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("incomplete edge triple in {path:?}: expected {expected} after {read} tokens")]
    MissingToken {
        path: PathBuf,
        expected: &'static str,
        read: usize,
    },

    #[error("invalid weight {token:?} in {path:?}")]
    InvalidWeight { path: PathBuf, token: String },

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}
