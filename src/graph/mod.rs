pub mod traits;
pub mod matrix;
pub mod directed;
pub mod generators;
pub mod loader;

pub use traits::{Graph, MutableGraph, Weight};
pub use matrix::{CostMatrix, MAX_DENSE_VERTICES};
pub use directed::DirectedGraph;
