use crate::graph::{CostMatrix, DirectedGraph, MutableGraph};
use crate::Result;
use rand::prelude::*;

/// Generates a dense random graph over `n` vertices
///
/// Every ordered pair `(u, v)` with `u != v` gets an edge with probability
/// `edge_probability`, costed uniformly in `0..=max_cost`.
///
/// # Panics
///
/// Panics if `edge_probability` is outside `[0, 1]` or `max_cost` is negative.
pub fn random_cost_matrix<R: Rng + ?Sized>(
    n: usize,
    edge_probability: f64,
    max_cost: i64,
    rng: &mut R,
) -> Result<CostMatrix<i64>> {
    assert!(
        (0.0..=1.0).contains(&edge_probability),
        "edge_probability must lie in [0, 1]"
    );
    assert!(max_cost >= 0, "max_cost must be non-negative");

    let mut graph = CostMatrix::new(n);

    for u in 0..n {
        for v in 0..n {
            if u != v && rng.gen_bool(edge_probability) {
                graph.set(u, v, Some(rng.gen_range(0..=max_cost)))?;
            }
        }
    }

    Ok(graph)
}

/// Generates a sparse random graph with about `edges_per_vertex * n` edges
///
/// Self-loops are skipped; a repeated pair keeps the last drawn cost.
///
/// # Panics
///
/// Panics if `max_cost` is negative.
pub fn random_directed_graph<R: Rng + ?Sized>(
    n: usize,
    edges_per_vertex: usize,
    max_cost: i64,
    rng: &mut R,
) -> Result<DirectedGraph<i64>> {
    assert!(max_cost >= 0, "max_cost must be non-negative");

    let mut graph = DirectedGraph::with_capacity(n);
    if n < 2 {
        return Ok(graph);
    }

    for _ in 0..edges_per_vertex * n {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(0..=max_cost))?;
        }
    }

    Ok(graph)
}

/// Generates a `width x height` grid with unit-cost edges in the four cardinal directions
pub fn generate_grid(width: usize, height: usize) -> Result<DirectedGraph<i64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x > 0 {
                graph.add_edge(current, index(x - 1, y), 1)?;
            }
            if x + 1 < width {
                graph.add_edge(current, index(x + 1, y), 1)?;
            }
            if y > 0 {
                graph.add_edge(current, index(x, y - 1), 1)?;
            }
            if y + 1 < height {
                graph.add_edge(current, index(x, y + 1), 1)?;
            }
        }
    }

    Ok(graph)
}
