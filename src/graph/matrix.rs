use crate::graph::traits::{check_vertex, check_weight, Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// Vertex counts at or above this cannot be squared without overflowing `usize`
pub const MAX_DENSE_VERTICES: usize = 1 << (usize::BITS / 2);

/// A dense directed graph storing one optional cost per ordered vertex pair
///
/// Cell `(u, v)` holds the cost of the edge `u -> v`, or `None` when there is
/// no such edge. Storage is a single row-major vector of `n * n` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix<W>
where
    W: Weight,
{
    /// Number of vertices (rows and columns)
    vertex_count: usize,

    /// Row-major cells, `vertex_count * vertex_count` long
    cells: Vec<Option<W>>,
}

impl<W> CostMatrix<W>
where
    W: Weight,
{
    /// Creates an `n x n` matrix with no edges
    ///
    /// # Panics
    ///
    /// Panics if `n * n` cells cannot be allocated; see [`CostMatrix::try_new`].
    pub fn new(vertex_count: usize) -> Self {
        CostMatrix {
            vertex_count,
            cells: vec![None; vertex_count * vertex_count],
        }
    }

    /// Creates an `n x n` matrix with no edges, failing if it cannot be sized or allocated
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        let too_large = || Error::VertexCountOutOfRange {
            count: vertex_count,
            max: MAX_DENSE_VERTICES,
        };
        let len = vertex_count.checked_mul(vertex_count).ok_or_else(too_large)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large())?;
        cells.resize(len, None);

        Ok(CostMatrix {
            vertex_count,
            cells,
        })
    }

    /// Builds a matrix from square rows of optional costs
    pub fn from_rows(rows: Vec<Vec<Option<W>>>) -> Result<Self> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(Error::DimensionMismatch {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            for (column, cost) in values.iter().enumerate() {
                if let Some(cost) = cost {
                    check_weight(row, column, *cost)?;
                }
            }
            cells.extend(values);
        }

        Ok(CostMatrix {
            vertex_count: n,
            cells,
        })
    }

    /// Returns the cost of the edge `u -> v`, `None` if absent
    pub fn get(&self, u: usize, v: usize) -> Result<Option<W>> {
        Ok(self.cells[self.index(u, v)?])
    }

    /// Stores the cost of the edge `u -> v`; `None` removes the edge
    pub fn set(&mut self, u: usize, v: usize, cost: Option<W>) -> Result<()> {
        let index = self.index(u, v)?;
        if let Some(cost) = cost {
            check_weight(u, v, cost)?;
        }
        self.cells[index] = cost;
        Ok(())
    }

    fn index(&self, u: usize, v: usize) -> Result<usize> {
        check_vertex(u, self.vertex_count)?;
        check_vertex(v, self.vertex_count)?;
        Ok(u * self.vertex_count + v)
    }

    fn row(&self, u: usize) -> &[Option<W>] {
        let start = u * self.vertex_count;
        &self.cells[start..start + self.vertex_count]
    }
}

impl<W> Graph<W> for CostMatrix<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if !self.has_vertex(vertex) {
            return Box::new(std::iter::empty());
        }
        Box::new(
            self.row(vertex)
                .iter()
                .enumerate()
                .filter_map(|(target, cost)| cost.map(|cost| (target, cost))),
        )
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.get(from, to).ok().flatten()
    }
}

impl<W> MutableGraph<W> for CostMatrix<W>
where
    W: Weight,
{
    /// Grows the matrix by one row and one column
    fn add_vertex(&mut self) -> usize {
        let old = self.vertex_count;
        let new_count = old + 1;
        let mut cells = vec![None; new_count * new_count];
        for u in 0..old {
            let start = u * new_count;
            cells[start..start + old].copy_from_slice(self.row(u));
        }
        self.cells = cells;
        self.vertex_count = new_count;
        old
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.set(from, to, Some(weight))
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool> {
        let existed = self.get(from, to)?.is_some();
        self.set(from, to, None)?;
        Ok(existed)
    }
}
