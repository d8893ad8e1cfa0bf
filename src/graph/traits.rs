use std::fmt::Debug;
use num_traits::{CheckedAdd, Zero};

use crate::Result;

/// Edge cost usable by the engine.
///
/// Costs must be totally ordered and have an additive identity. Relaxation
/// sums costs with `CheckedAdd` so an overflowing distance is reported
/// instead of wrapping.
pub trait Weight: Copy + Ord + Zero + CheckedAdd + Debug {}

impl<W> Weight for W where W: Copy + Ord + Zero + CheckedAdd + Debug {}

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in increasing target order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge, replacing the cost of an existing one
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;

    /// Removes an edge from the graph, returning whether it existed
    fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool>;
}

/// Fails with `VertexOutOfRange` unless `vertex < vertex_count`.
pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(crate::Error::VertexOutOfRange {
            vertex,
            vertex_count,
        })
    }
}

/// Fails with `NegativeWeight` if `weight` is below zero.
pub(crate) fn check_weight<W: Weight>(from: usize, to: usize, weight: W) -> Result<()> {
    if weight < W::zero() {
        Err(crate::Error::NegativeWeight { from, to })
    } else {
        Ok(())
    }
}

/// Fails unless `0 < count < max_vertices`
pub fn check_vertex_count(count: usize, max_vertices: usize) -> Result<()> {
    if count == 0 || count >= max_vertices {
        Err(crate::Error::VertexCountOutOfRange {
            count,
            max: max_vertices,
        })
    } else {
        Ok(())
    }
}
