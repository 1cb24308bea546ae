//! Dense graph representations and the algorithms that run on them.
//!
//! - `dense`: the bit-packed unweighted graph and the `f64` weighted graph
//! - `algorithms`: connected components and frontier Dijkstra (reference and inlined)
//! - `path`: the shortest-path result type

pub mod algorithms;
pub mod dense;
pub mod path;
pub(crate) mod access;
mod simple_graph;

pub use algorithms::{FrontierDijkstra, InlinedDijkstra, ShortestPathSolver};
pub use dense::{UnweightedDenseGraph, WeightedDenseGraph};
pub use path::ShortestPathResult;
pub use simple_graph::SimpleGraph;
