use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use super::{edge::WeightedEdge, label_graph::LabelGraph, Vertex, Weight};
use crate::{error::ReadError, utility::get_progressspinner};

/// Reads a vertex file: whitespace separated labels.
pub fn read_vertices_from_file(file: &Path) -> Result<Vec<Vertex>, ReadError> {
    let content = read_to_string(file)?;

    // Whitespace separated tokens are never empty.
    Ok(content.split_whitespace().filter_map(Vertex::new).collect())
}

/// Reads an edge file: whitespace separated `tail head weight` triples until
/// the end of the file.
pub fn read_edges_from_file(file: &Path) -> Result<Vec<WeightedEdge>, ReadError> {
    let content = read_to_string(file)?;
    parse_edges(&content, file)
}

/// Reads both files and builds the graph.
pub fn read_graph(vertex_file: &Path, edge_file: &Path) -> Result<LabelGraph, ReadError> {
    let spinner = get_progressspinner("Reading graph");
    let vertices = read_vertices_from_file(vertex_file);
    let edges = read_edges_from_file(edge_file);
    spinner.finish_and_clear();

    let (vertices, edges) = (vertices?, edges?);
    tracing::debug!(
        vertices = vertices.len(),
        edges = edges.len(),
        "read graph files"
    );

    Ok(LabelGraph::new(&vertices, &edges)?)
}

fn read_to_string(file: &Path) -> Result<String, ReadError> {
    fs::read_to_string(file).map_err(|error| match error.kind() {
        ErrorKind::NotFound => ReadError::NotFound {
            path: file.to_path_buf(),
        },
        _ => ReadError::Io(error),
    })
}

fn parse_edges(content: &str, file: &Path) -> Result<Vec<WeightedEdge>, ReadError> {
    let path = || PathBuf::from(file);
    let mut tokens = content.split_whitespace();
    let mut read = 0;
    let mut edges = Vec::new();

    while let Some(tail) = tokens.next() {
        let head = tokens.next().ok_or_else(|| ReadError::MissingToken {
            path: path(),
            expected: "head",
            read: read + 1,
        })?;
        let weight = tokens.next().ok_or_else(|| ReadError::MissingToken {
            path: path(),
            expected: "weight",
            read: read + 2,
        })?;
        let weight: Weight = weight.parse().map_err(|_| ReadError::InvalidWeight {
            path: path(),
            token: weight.to_string(),
        })?;
        read += 3;

        // Tokens are non-empty, so both labels are valid.
        if let Some(edge) = WeightedEdge::new(tail, head, weight) {
            edges.push(edge);
        }
    }

    Ok(edges)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::parse_edges;
    use crate::error::ReadError;

    #[test]
    fn edges_span_lines_freely() {
        let edges = parse_edges("A B 1\nB\nC -2   C A\n 0", Path::new("edges")).unwrap();

        let triples: Vec<(&str, &str, i64)> = edges
            .iter()
            .map(|edge| (edge.tail().label(), edge.head().label(), edge.weight()))
            .collect();
        assert_eq!(triples, vec![("A", "B", 1), ("B", "C", -2), ("C", "A", 0)]);
    }

    #[test]
    fn incomplete_triple_is_reported() {
        let error = parse_edges("A B 1 C D", Path::new("edges")).unwrap_err();

        assert!(matches!(
            error,
            ReadError::MissingToken {
                expected: "weight",
                read: 5,
                ..
            }
        ));
    }

    #[test]
    fn invalid_weight_is_reported() {
        let error = parse_edges("A B x", Path::new("edges")).unwrap_err();

        assert!(matches!(error, ReadError::InvalidWeight { token, .. } if token == "x"));
    }
}
