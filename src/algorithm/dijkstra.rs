use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, trace};

use crate::algorithm::{Ledger, ShortestPathAlgorithm};
use crate::data_structures::Frontier;
use crate::graph::traits::{check_vertex, check_vertex_count, check_weight};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Exclusive upper bound on the vertex count unless configured otherwise
pub const DEFAULT_MAX_VERTICES: usize = 128;

/// Classic Dijkstra's algorithm implementation
///
/// The engine holds only configuration; every run gets its own ledger and
/// frontier, so one instance can serve concurrent runs over a shared graph.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Graphs must have fewer vertices than this
    max_vertices: usize,

    /// Raised externally to abort a run in progress
    cancel: Option<Arc<AtomicBool>>,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            max_vertices: DEFAULT_MAX_VERTICES,
            cancel: None,
        }
    }

    /// Set the exclusive upper bound on the number of vertices
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Abort runs with [`Error::Cancelled`] once `flag` is raised
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }

    /// Checks the preconditions the greedy invariant relies on
    fn validate<W, G>(&self, graph: &G, source: usize) -> Result<()>
    where
        W: Weight,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        check_vertex_count(n, self.max_vertices)?;
        check_vertex(source, n)?;

        for u in 0..n {
            for (v, weight) in graph.outgoing_edges(u) {
                check_vertex(v, n)?;
                check_weight(u, v, weight)?;
            }
        }
        Ok(())
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<Ledger<W>> {
        self.validate::<W, G>(graph, source)?;

        let n = graph.vertex_count();
        debug!("Running Dijkstra from vertex {} over {} vertices", source, n);

        let mut ledger = Ledger::new(n, source);
        let mut frontier = Frontier::new(n);
        frontier.insert(source, W::zero());
        let mut overflowed = Vec::new();

        loop {
            if self.is_cancelled() {
                debug!("Run from vertex {} cancelled", source);
                return Err(Error::Cancelled);
            }
            let Some((u, dist_u)) = frontier.extract_min() else {
                break;
            };
            ledger.settle(u);
            trace!("Settled vertex {} at distance {:?}", u, dist_u);

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(u) {
                let Some(candidate) = dist_u.checked_add(&weight) else {
                    // Cannot beat a distance v already has; otherwise v may still
                    // be reached by a representable path later on
                    if !ledger.is_reachable(v) {
                        overflowed.push((u, v));
                    }
                    continue;
                };

                let improves = match ledger.distance(v) {
                    None => true,
                    Some(current) => candidate < current,
                };

                if improves {
                    trace!("Relaxed {} -> {} to {:?}", u, v, candidate);
                    // The key is about to change, so take v out before updating it
                    frontier.remove(v);
                    ledger.record(v, candidate, u);
                    frontier.insert(v, candidate);
                }
            }
        }

        // A vertex only reachable through an overflowing sum has no valid distance
        if let Some(&(from, to)) = overflowed.iter().find(|&&(_, to)| !ledger.is_reachable(to)) {
            debug!("Distance to vertex {} overflows", to);
            return Err(Error::DistanceOverflow { from, to });
        }

        debug!(
            "Dijkstra from vertex {} reached {} of {} vertices",
            source,
            ledger.reachable_count(),
            n
        );
        Ok(ledger)
    }
}
