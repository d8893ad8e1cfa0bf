//! Readers for graph descriptions.
//!
//! Two formats are understood:
//!
//! - the legacy text format: a vertex count `n` followed by `n * n`
//!   whitespace-separated integer costs in row-major order, where `-1`
//!   marks a missing edge;
//! - a JSON document listing the vertex count and the edges.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::graph::traits::check_vertex_count;
use crate::graph::{CostMatrix, DirectedGraph, Graph, MutableGraph};
use crate::{Error, Result};

/// Cost used by the legacy text format to mark a missing edge
pub const NO_EDGE: i64 = -1;

/// A single edge of a [`GraphDocument`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: usize,
    pub to: usize,
    pub cost: i64,
}

/// JSON description of a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub vertex_count: usize,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    /// Builds a sparse graph, enforcing `0 < vertex_count < max_vertices`
    pub fn into_graph(self, max_vertices: usize) -> Result<DirectedGraph<i64>> {
        check_vertex_count(self.vertex_count, max_vertices)?;

        let mut graph = DirectedGraph::with_capacity(self.vertex_count);
        for edge in self.edges {
            graph.add_edge(edge.from, edge.to, edge.cost)?;
        }
        Ok(graph)
    }

    /// Describes an existing graph
    pub fn from_graph<G: Graph<i64>>(graph: &G) -> Self {
        let edges = (0..graph.vertex_count())
            .flat_map(move |from| {
                graph
                    .outgoing_edges(from)
                    .map(move |(to, cost)| EdgeRecord { from, to, cost })
            })
            .collect();

        GraphDocument {
            vertex_count: graph.vertex_count(),
            edges,
        }
    }
}

/// Parses the legacy text format into a dense matrix
pub fn parse_cost_matrix(input: &str, max_vertices: usize) -> Result<CostMatrix<i64>> {
    let mut tokens = input.split_whitespace().enumerate();

    let n = match tokens.next() {
        Some((position, token)) => token.parse::<usize>().map_err(|_| Error::Parse {
            position,
            token: token.to_string(),
        })?,
        None => return Err(Error::VertexCountOutOfRange { count: 0, max: max_vertices }),
    };
    check_vertex_count(n, max_vertices)?;
    debug!("Reading a {}x{} cost matrix", n, n);

    let mut graph = CostMatrix::try_new(n)?;
    let expected = n * n;
    let mut found = 0;

    for (position, token) in tokens.by_ref().take(expected) {
        let cost = token.parse::<i64>().map_err(|_| Error::Parse {
            position,
            token: token.to_string(),
        })?;
        let (u, v) = (found / n, found % n);
        match cost {
            NO_EDGE => {}
            cost if cost < 0 => return Err(Error::NegativeWeight { from: u, to: v }),
            cost => graph.set(u, v, Some(cost))?,
        }
        found += 1;
    }

    if found < expected {
        return Err(Error::TruncatedInput { expected, found });
    }

    let trailing = tokens.count();
    if trailing > 0 {
        warn!("Ignoring {} trailing tokens after the cost matrix", trailing);
    }

    Ok(graph)
}

/// Reads the legacy text format from a file
pub fn read_cost_matrix<P: AsRef<Path>>(path: P, max_vertices: usize) -> Result<CostMatrix<i64>> {
    let input = fs::read_to_string(path.as_ref())?;
    debug!("Opened {} for reading", path.as_ref().display());
    parse_cost_matrix(&input, max_vertices)
}

/// Parses a JSON [`GraphDocument`] into a sparse graph
pub fn parse_graph_json(input: &str, max_vertices: usize) -> Result<DirectedGraph<i64>> {
    let document: GraphDocument = serde_json::from_str(input)?;
    document.into_graph(max_vertices)
}

/// Reads a JSON [`GraphDocument`] from a file
pub fn read_graph_json<P: AsRef<Path>>(path: P, max_vertices: usize) -> Result<DirectedGraph<i64>> {
    let input = fs::read_to_string(path.as_ref())?;
    debug!("Opened {} for reading", path.as_ref().display());
    parse_graph_json(&input, max_vertices)
}
