pub mod traits;
pub mod ledger;
pub mod dijkstra;

pub use ledger::Ledger;
pub use traits::ShortestPathAlgorithm;
