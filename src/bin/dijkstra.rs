use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dijkstra_trail::graph::loader::{read_cost_matrix, read_graph_json};
use dijkstra_trail::graph::{CostMatrix, DirectedGraph, Graph};
use dijkstra_trail::report::{format_path, LedgerTable};
use dijkstra_trail::{Dijkstra, Error, Ledger, ShortestPathAlgorithm, DEFAULT_MAX_VERTICES};
use log::info;

/// Computes single-source shortest paths over a graph description.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph description file
    file: PathBuf,
    /// Format of the graph description
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,
    /// Source vertex; prompted for on stdin when omitted
    #[arg(short, long)]
    source: Option<usize>,
    /// Also print the shortest path to this vertex
    #[arg(short, long)]
    to: Option<usize>,
    /// Exclusive upper bound on the number of vertices
    #[arg(long, env = "DIJKSTRA_MAX_NODES", default_value_t = DEFAULT_MAX_VERTICES)]
    max_nodes: usize,
}

#[derive(Debug, ValueEnum, Clone, Copy)]
enum Format {
    /// Vertex count followed by the row-major cost matrix, -1 for no edge
    Text,
    /// `{"vertex_count": n, "edges": [{"from", "to", "cost"}]}`
    Json,
}

enum LoadedGraph {
    Dense(CostMatrix<i64>),
    Sparse(DirectedGraph<i64>),
}

fn prompt_source(vertex_count: usize) -> Result<usize, Box<dyn std::error::Error>> {
    print!("Enter source node number [0 to {}]: ", vertex_count - 1);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let token = line.trim();
    token.parse().map_err(|_| {
        Error::Parse {
            position: 0,
            token: token.to_string(),
        }
        .into()
    })
}

fn run<G: Graph<i64>>(
    engine: &Dijkstra,
    graph: &G,
    args: &Args,
) -> Result<Ledger<i64>, Box<dyn std::error::Error>> {
    let source = match args.source {
        Some(source) => source,
        None => prompt_source(graph.vertex_count())?,
    };
    Ok(engine.compute_shortest_paths(graph, source)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let engine = Dijkstra::new().with_max_vertices(args.max_nodes);

    let graph = match args.format {
        Format::Text => LoadedGraph::Dense(read_cost_matrix(&args.file, args.max_nodes)?),
        Format::Json => LoadedGraph::Sparse(read_graph_json(&args.file, args.max_nodes)?),
    };

    let ledger = match &graph {
        LoadedGraph::Dense(graph) => {
            info!("Loaded {} vertices, {} edges", graph.vertex_count(), graph.edge_count());
            run(&engine, graph, &args)?
        }
        LoadedGraph::Sparse(graph) => {
            info!("Loaded {} vertices, {} edges", graph.vertex_count(), graph.edge_count());
            run(&engine, graph, &args)?
        }
    };

    print!("{}", LedgerTable::new(&ledger));

    if let Some(target) = args.to {
        match ledger.path_to(target)? {
            Some(path) => println!(
                "Path to {} (cost {}): {}",
                target,
                ledger.distance(target).unwrap_or_default(),
                format_path(&path)
            ),
            None => println!("Vertex {} is unreachable from {}", target, ledger.source()),
        }
    }

    Ok(())
}
