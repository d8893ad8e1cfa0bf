use crate::algorithm::Ledger;
use crate::graph::{Graph, Weight};
use crate::Result;

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<Ledger<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    ///
    /// Returns `Ok(None)` when `target` is unreachable from `source`.
    fn get_path(&self, graph: &G, source: usize, target: usize) -> Result<Option<Vec<usize>>> {
        self.compute_shortest_paths(graph, source)?.path_to(target)
    }
}
