use crate::graph::traits::check_vertex;
use crate::graph::Weight;
use crate::{Error, Result};

/// Result of a single-source shortest path computation
///
/// For each vertex the ledger records the best known distance from the
/// source (`None` meaning unreachable) and the predecessor used to achieve
/// it. After a completed run the predecessors form a tree rooted at the
/// source, whose own predecessor is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger<W>
where
    W: Weight,
{
    /// Distances from source to each vertex
    distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    source: usize,

    /// Vertices in the order they were settled
    settle_order: Vec<usize>,
}

impl<W> Ledger<W>
where
    W: Weight,
{
    /// Creates a ledger with every vertex unreached except `source`, at distance zero
    pub(crate) fn new(vertex_count: usize, source: usize) -> Self {
        let mut distances = vec![None; vertex_count];
        distances[source] = Some(W::zero());

        Ledger {
            distances,
            predecessors: vec![None; vertex_count],
            source,
            settle_order: Vec::with_capacity(vertex_count),
        }
    }

    pub(crate) fn record(&mut self, vertex: usize, distance: W, predecessor: usize) {
        self.distances[vertex] = Some(distance);
        self.predecessors[vertex] = Some(predecessor);
    }

    pub(crate) fn settle(&mut self, vertex: usize) {
        self.settle_order.push(vertex);
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Best distance to `vertex`, `None` if unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Predecessor of `vertex` on its shortest path
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    pub fn distances(&self) -> &[Option<W>] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    /// Vertices in the order they were extracted from the frontier
    pub fn settle_order(&self) -> &[usize] {
        &self.settle_order
    }

    /// Reconstructs the path from the source to `destination`
    ///
    /// Walks the predecessor trail backwards and reverses it. Returns
    /// `Ok(None)` if `destination` is unreachable.
    pub fn path_to(&self, destination: usize) -> Result<Option<Vec<usize>>> {
        check_vertex(destination, self.vertex_count())?;
        if !self.is_reachable(destination) {
            return Ok(None);
        }

        let mut path = vec![destination];
        let mut current = destination;
        while let Some(previous) = self.predecessors[current] {
            // A trail longer than the vertex count must contain a cycle
            if path.len() >= self.vertex_count() {
                return Err(Error::BrokenTrail(destination));
            }
            path.push(previous);
            current = previous;
        }

        if current != self.source {
            return Err(Error::BrokenTrail(destination));
        }

        path.reverse();
        Ok(Some(path))
    }
}
