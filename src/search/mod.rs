use path::Path;

use crate::{error::UnknownVertex, graphs::Distance};

pub mod batch;
pub mod collections;
pub mod dijkstra;
pub mod path;

/// Answers shortest path queries between labelled vertices.
///
/// `Ok(None)` means the target is not reachable from the source. This is a
/// regular answer, unlike an unknown label which is an error.
pub trait PathFinding: Send + Sync {
    fn shortest_path(&self, source: &str, target: &str) -> Result<Option<Path>, UnknownVertex>;

    fn shortest_path_distance(
        &self,
        source: &str,
        target: &str,
    ) -> Result<Option<Distance>, UnknownVertex> {
        Ok(self
            .shortest_path(source, target)?
            .map(|path| path.distance()))
    }
}
