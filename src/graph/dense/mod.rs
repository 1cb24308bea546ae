//! Dense matrix-backed graphs.
//!
//! Both graphs address vertices by index, store one matrix cell per unordered vertex
//! pair, and grow their storage monotonically as higher indices are inserted.

pub mod unweighted;
pub mod weighted;

pub use unweighted::UnweightedDenseGraph;
pub use weighted::WeightedDenseGraph;
