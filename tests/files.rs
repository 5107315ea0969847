use std::{
    fs,
    path::{Path, PathBuf},
};

use label_paths::{graphs::files::read_graph, ConstructionError, ReadError};
use tempfile::TempDir;

fn write_files(dir: &TempDir, vertices: &str, edges: &str) -> (PathBuf, PathBuf) {
    let vertex_file = dir.path().join("vertices.txt");
    let edge_file = dir.path().join("edges.txt");
    fs::write(&vertex_file, vertices).unwrap();
    fs::write(&edge_file, edges).unwrap();
    (vertex_file, edge_file)
}

#[test]
fn reads_graph_and_answers_queries() {
    let dir = TempDir::new().unwrap();
    let (vertex_file, edge_file) = write_files(&dir, "A B\nC\nD A\n", "A B 1\nB C 2\nC D 3\n");

    let graph = read_graph(&vertex_file, &edge_file).unwrap();
    let path = graph.shortest_path("A", "D").unwrap().unwrap();

    assert_eq!(graph.vertices().len(), 4);
    assert_eq!(path.labels(), vec!["A", "B", "C", "D"]);
    assert_eq!(path.distance(), 6);
}

#[test]
fn construction_errors_are_passed_through() {
    let dir = TempDir::new().unwrap();
    let (vertex_file, edge_file) = write_files(&dir, "A B", "A B 5 A B 6");

    let error = read_graph(&vertex_file, &edge_file).unwrap_err();

    assert!(matches!(
        error,
        ReadError::Construction(ConstructionError::ConflictingEdge { .. })
    ));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let (vertex_file, _) = write_files(&dir, "A", "");

    let error = read_graph(&vertex_file, Path::new("/nonexistent/edges.txt")).unwrap_err();

    assert!(matches!(error, ReadError::NotFound { .. }));
}
