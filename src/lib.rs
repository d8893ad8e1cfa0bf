//! Dijkstra Trail - single-source shortest paths with path reconstruction
//!
//! The engine runs Dijkstra's algorithm over a weighted directed graph with
//! non-negative edge costs and records, for every vertex, the best known
//! distance and the predecessor used to reach it. The resulting [`Ledger`]
//! can rebuild the shortest path from the source to any reachable vertex.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod report;

pub use algorithm::{
    dijkstra::{Dijkstra, DEFAULT_MAX_VERTICES},
    Ledger, ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::{CostMatrix, DirectedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("Vertex count {count} must lie in (0, {max})")]
    VertexCountOutOfRange { count: usize, max: usize },

    #[error("Negative edge weight on edge from {from} to {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("Graph description is truncated: expected {expected} costs, found {found}")]
    TruncatedInput { expected: usize, found: usize },

    #[error("Invalid token {token:?} at position {position}")]
    Parse { position: usize, token: String },

    #[error("Cost matrix row {row} has {len} entries, expected {expected}")]
    DimensionMismatch { row: usize, len: usize, expected: usize },

    #[error("Distance overflows the weight type when relaxing edge from {from} to {to}")]
    DistanceOverflow { from: usize, to: usize },

    #[error("Predecessor trail from vertex {0} does not lead back to the source")]
    BrokenTrail(usize),

    #[error("Computation cancelled")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
