use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

use super::{
    path::{Path, ShortestPathRequest},
    PathFinding,
};
use crate::{error::UnknownVertex, utility::get_progressbar};

/// Answers all `requests` in parallel. The result at index `i` answers
/// `requests[i]` and equals what a single sequential query would return.
pub fn shortest_paths(
    pathfinder: &dyn PathFinding,
    requests: &[ShortestPathRequest],
) -> Vec<Result<Option<Path>, UnknownVertex>> {
    requests
        .par_iter()
        .map(|request| pathfinder.shortest_path(&request.source, &request.target))
        .collect()
}

/// Like [`shortest_paths`], reporting progress on a progress bar.
pub fn shortest_paths_with_progress(
    pathfinder: &dyn PathFinding,
    requests: &[ShortestPathRequest],
) -> Vec<Result<Option<Path>, UnknownVertex>> {
    let bar = get_progressbar("Answering queries", requests.len() as u64);
    let results = requests
        .par_iter()
        .progress_with(bar.clone())
        .map(|request| pathfinder.shortest_path(&request.source, &request.target))
        .collect();
    bar.finish_and_clear();
    results
}
