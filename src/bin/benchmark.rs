use std::time::{Duration, Instant};

use dijkstra_trail::graph::generators::{random_cost_matrix, random_directed_graph};
use dijkstra_trail::graph::{Graph, MutableGraph};
use dijkstra_trail::{CostMatrix, Dijkstra, DirectedGraph, ShortestPathAlgorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Function to benchmark the engine on one graph store
fn benchmark_store<G>(name: &str, engine: &Dijkstra, graph: &G, source: usize) -> Result<Duration, dijkstra_trail::Error>
where
    G: Graph<i64>,
{
    println!("Running Dijkstra on {} with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let ledger = engine.compute_shortest_paths(graph, source)?;
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", ledger.reachable_count(), duration);

    Ok(duration)
}

// Copies a sparse graph into a dense matrix so both stores see the same edges
fn to_matrix(graph: &DirectedGraph<i64>) -> Result<CostMatrix<i64>, dijkstra_trail::Error> {
    let mut matrix = CostMatrix::new(graph.vertex_count());
    for u in 0..graph.vertex_count() {
        for (v, cost) in graph.outgoing_edges(u) {
            matrix.add_edge(u, v, cost)?;
        }
    }
    Ok(matrix)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let graph_sizes = vec![100, 500, 1_000, 2_000, 4_000];
    let edges_per_vertex = 4;
    let max_cost = 100;

    println!("=====================================================");
    println!("Benchmark: dense cost matrix vs adjacency lists");
    println!("Edge factor: {} edges per vertex (on average)", edges_per_vertex);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        let engine = Dijkstra::new().with_max_vertices(size + 1);

        println!("\nGenerating random graph with {} vertices...", size);
        let sparse = random_directed_graph(size, edges_per_vertex, max_cost, &mut rng)?;
        let dense = to_matrix(&sparse)?;
        println!("Graph has {} vertices and {} edges", sparse.vertex_count(), sparse.edge_count());

        let dense_time = benchmark_store("cost matrix", &engine, &dense, 0)?;
        let sparse_time = benchmark_store("adjacency lists", &engine, &sparse, 0)?;

        results.push((size, dense_time, sparse_time));
    }

    // A small fully random matrix as a sanity row
    let matrix = random_cost_matrix(64, 0.25, max_cost, &mut rng)?;
    benchmark_store("random 64-vertex matrix", &Dijkstra::new(), &matrix, 0)?;

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Matrix (us)", "Lists (us)", "Ratio");
    println!("-----------------------------------------------------");

    for (size, dense_time, sparse_time) in &results {
        let ratio = dense_time.as_secs_f64() / sparse_time.as_secs_f64();
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            dense_time.as_micros(),
            sparse_time.as_micros(),
            ratio
        );
    }

    Ok(())
}
