use crate::graph::traits::{check_vertex, check_weight, Graph, MutableGraph, Weight};
use crate::Result;

/// A directed graph implementation using adjacency lists
///
/// Each list is kept sorted by target vertex, so edges are visited in the
/// same order as a dense [`CostMatrix`](crate::graph::CostMatrix) row scan and
/// both stores yield identical ledgers.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: Vec::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: vec![Vec::new(); vertices],
        }
    }

    fn check_edge(&self, from: usize, to: usize) -> Result<()> {
        check_vertex(from, self.vertex_count())?;
        check_vertex(to, self.vertex_count())
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        let edges = self.outgoing_edges.get(from)?;
        edges
            .binary_search_by_key(&to, |&(target, _)| target)
            .ok()
            .map(|position| edges[position].1)
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self) -> usize {
        self.outgoing_edges.push(Vec::new());
        self.outgoing_edges.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_edge(from, to)?;
        check_weight(from, to, weight)?;

        let edges = &mut self.outgoing_edges[from];
        match edges.binary_search_by_key(&to, |&(target, _)| target) {
            Ok(position) => edges[position].1 = weight,
            Err(position) => edges.insert(position, (to, weight)),
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool> {
        self.check_edge(from, to)?;

        let edges = &mut self.outgoing_edges[from];
        match edges.binary_search_by_key(&to, |&(target, _)| target) {
            Ok(position) => {
                edges.remove(position);
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }
}
