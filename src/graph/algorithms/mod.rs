//! Graph algorithms over the dense representations.
//!
//! Algorithms are free functions or stateless solver objects that borrow a graph
//! read-only; none of them mutate the graph they run on.

pub mod components;
pub mod inlined;
pub mod shortest_path;

pub use components::connected_components;
pub use inlined::InlinedDijkstra;
pub use shortest_path::{FrontierDijkstra, ShortestPathSolver};
