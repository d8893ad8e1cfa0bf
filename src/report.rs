//! Tabular rendering of a [`Ledger`].

use std::fmt::{self, Display};

use crate::algorithm::Ledger;
use crate::graph::Weight;

const COLUMN_WIDTH: usize = 8;

/// Marks rows without a predecessor: the source and unreachable vertices
const ROOT_MARKER: &str = " >>-->";

/// One row per vertex: source, destination, cumulative cost and previous node
///
/// ```text
///                     Cum.    Prev
///    From:     To:   Cost:   Node:
///        0       0       0      -1 >>-->
///        0       1       1       0
/// ```
pub struct LedgerTable<'a, W>
where
    W: Weight,
{
    ledger: &'a Ledger<W>,
}

impl<'a, W> LedgerTable<'a, W>
where
    W: Weight,
{
    pub fn new(ledger: &'a Ledger<W>) -> Self {
        LedgerTable { ledger }
    }
}

impl<W> Display for LedgerTable<'_, W>
where
    W: Weight + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = COLUMN_WIDTH;
        writeln!(f, "{:>width$}{:>w$}", "Cum.", "Prev", width = 3 * w)?;
        writeln!(f, "{:>w$}{:>w$}{:>w$}{:>w$}", "From:", "To:", "Cost:", "Node:")?;

        let source = self.ledger.source();
        for vertex in 0..self.ledger.vertex_count() {
            let cost = match self.ledger.distance(vertex) {
                Some(distance) => distance.to_string(),
                None => "inf".to_string(),
            };
            let (previous, marker) = match self.ledger.predecessor(vertex) {
                Some(previous) => (previous.to_string(), ""),
                None => ("-1".to_string(), ROOT_MARKER),
            };
            writeln!(
                f,
                "{:>w$}{:>w$}{:>w$}{:>w$}{}",
                source, vertex, cost, previous, marker
            )?;
        }
        Ok(())
    }
}

/// Renders `path` as `a -> b -> c`
pub fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(|vertex| vertex.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
