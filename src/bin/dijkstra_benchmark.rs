use std::{
    path::PathBuf,
    process::ExitCode,
    time::{Duration, Instant},
};

use clap::Parser;
use label_paths::{
    graphs::files::read_graph,
    logging::init_tracing,
    search::{
        batch::shortest_paths_with_progress, dijkstra::Dijkstra, path::ShortestPathRequest,
        PathFinding,
    },
};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Times random shortest path queries, first one by one and then in parallel.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Whitespace separated vertex labels
    #[arg(short, long)]
    vertices: PathBuf,
    /// Whitespace separated `tail head weight` triples
    #[arg(short, long)]
    edges: PathBuf,
    /// Number of random queries to be run.
    #[arg(short, long, default_value_t = 1_000)]
    number_of_queries: u32,
    /// Seed for choosing the query pairs
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(error) = init_tracing(false, None) {
        eprintln!("unable to initialize logging: {}", error);
    }

    let graph = match read_graph(&args.vertices, &args.edges) {
        Ok(graph) => graph,
        Err(error) => {
            eprintln!("unable to build graph: {}", error);
            return ExitCode::from(1);
        }
    };

    let vertices = graph.vertices();
    let mut rng = StdRng::seed_from_u64(args.seed);
    let requests: Vec<ShortestPathRequest> = (0..args.number_of_queries)
        .filter_map(|_| {
            let source = vertices.choose(&mut rng)?;
            let target = vertices.choose(&mut rng)?;
            Some(ShortestPathRequest::new(source.label(), target.label()))
        })
        .collect();
    if requests.is_empty() {
        eprintln!("graph has no vertices");
        return ExitCode::from(1);
    }

    let dijkstra = Dijkstra::new(&graph);

    let mut durations = Vec::new();
    let mut reachable = 0;
    for request in requests.iter() {
        let start = Instant::now();
        let distance = dijkstra.shortest_path_distance(&request.source, &request.target);
        durations.push(start.elapsed());
        if matches!(distance, Ok(Some(_))) {
            reachable += 1;
        }
    }
    println!(
        "sequential: average duration {:?}, {} of {} reachable",
        durations.iter().sum::<Duration>() / durations.len() as u32,
        reachable,
        requests.len()
    );

    let start = Instant::now();
    let results = shortest_paths_with_progress(&dijkstra, &requests);
    println!(
        "parallel: {} queries in {:?}",
        results.len(),
        start.elapsed()
    );

    ExitCode::SUCCESS
}
