use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use label_paths::{
    graphs::{files::read_graph, Distance},
    logging::init_tracing,
    LabelGraph, ReadError, UnknownVertex,
};
use serde::Serialize;

/// Loads a graph from a vertex file and an edge file and answers shortest path
/// queries read from standard input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Whitespace separated vertex labels
    #[arg(short, long)]
    vertices: PathBuf,
    /// Whitespace separated `tail head weight` triples
    #[arg(short, long)]
    edges: PathBuf,
    /// Print paths as JSON objects
    #[arg(long)]
    json: bool,
    /// Log at debug level
    #[arg(long)]
    verbose: bool,
    /// Log filter, e.g. `trace` or `label_paths=debug`
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = init_tracing(args.verbose, args.log_level.as_deref()) {
        eprintln!("unable to initialize logging: {}", error);
    }

    let graph = match read_graph(&args.vertices, &args.edges) {
        Ok(graph) => graph,
        Err(error) => {
            eprintln!("unable to build graph: {}", error);
            return ExitCode::from(exit_code(&error));
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_queries(&graph, stdin.lock(), stdout.lock(), args.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::from(1)
        }
    }
}

/// Missing files exit with 2, malformed edge files with 3 and invalid graphs
/// with 1.
fn exit_code(error: &ReadError) -> u8 {
    match error {
        ReadError::NotFound { .. } => 2,
        ReadError::MissingToken { .. } | ReadError::InvalidWeight { .. } => 3,
        ReadError::Io(_) | ReadError::Construction(_) => 1,
    }
}

#[derive(Serialize)]
struct Answer<'a> {
    source: &'a str,
    target: &'a str,
    path: Vec<&'a str>,
    distance: Distance,
}

fn run_queries(
    graph: &LabelGraph,
    mut input: impl BufRead,
    mut output: impl Write,
    json: bool,
) -> io::Result<()> {
    let vertices: Vec<String> = graph.vertices().iter().map(ToString::to_string).collect();
    let edges: Vec<String> = graph.edges().iter().map(ToString::to_string).collect();
    writeln!(output, "Vertices are [{}]", vertices.join(", "))?;
    writeln!(output, "Edges are [{}]", edges.join(", "))?;

    loop {
        write!(output, "Start vertex? (exit to quit) ")?;
        output.flush()?;
        let Some(source) = read_line(&mut input)? else {
            break;
        };
        if source == "exit" {
            break;
        }

        write!(output, "Destination vertex? ")?;
        output.flush()?;
        let Some(target) = read_line(&mut input)? else {
            break;
        };

        match graph.shortest_path(&source, &target) {
            Err(UnknownVertex { label }) => {
                tracing::debug!(%label, "query with unknown vertex");
                writeln!(output, "no such vertex")?;
            }
            Ok(None) => writeln!(output, "does not exist")?,
            Ok(Some(path)) if json => {
                let answer = Answer {
                    source: &source,
                    target: &target,
                    path: path.labels(),
                    distance: path.distance(),
                };
                serde_json::to_writer(&mut output, &answer)?;
                writeln!(output)?;
            }
            Ok(Some(path)) => {
                writeln!(output, "Shortest path from {} to {}:", source, target)?;
                writeln!(output, "{}", path)?;
                writeln!(output, "{}", path.distance())?;
            }
        }
    }

    Ok(())
}

/// Next line without its line ending, `None` at the end of the input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
