//! # `densegraph` - Bit-Packed Dense Graph Engine
//!
//! Dense undirected graphs over integer vertex indices, stored as a vertex bit set plus a
//! triangular edge matrix, with the two classic algorithms that read those matrices
//! directly: iterative depth-first connected components and single-pair frontier
//! Dijkstra.
//!
//! ## Representation
//!
//! - **Vertices** (`BitSet`): bit `v` is set iff vertex `v` exists. The highest index ever
//!   inserted defines the addressable range; anything beyond it simply does not exist.
//! - **Unweighted edges** (`TriangularBitMatrix`): one bit per unordered pair, addressed by
//!   the canonical `(max, min)` cell, so symmetry holds by construction.
//! - **Weighted edges** (`TriangularMatrix<f64>`): one weight per unordered pair, `+∞` for
//!   an absent edge; the diagonal is fixed at `0` and never stored.
//!
//! Storage grows monotonically. Growth copies or appends, and never moves or clears a cell
//! that already holds data.
//!
//! ## Semantics
//!
//! Queries encode absence in their return value (`false`, `NaN`, an unreachable
//! [`ShortestPathResult`]); mutators silently ignore requests on missing endpoints,
//! weighted self-edges, and negative or `NaN` weights. Removing a vertex only hides it:
//! its incident edges remain stored and reappear if the vertex is added back.
//!
//! ## Algorithms
//!
//! 1. **Connected components** ([`UnweightedDenseGraph::connected_components`]): explicit
//!    stack DFS, one independent subgraph per component.
//! 2. **Shortest path** ([`ShortestPathSolver`]): frontier Dijkstra with linear-scan
//!    selection, in a reference form ([`FrontierDijkstra`]) and a hand-inlined form
//!    ([`InlinedDijkstra`]) that must agree bit for bit.
//!
//! ## Example
//!
//! ```rust
//! use densegraph::{UnweightedDenseGraph, WeightedDenseGraph};
//!
//! let mut graph = UnweightedDenseGraph::with_vertices(4);
//! graph.add_edge(0, 1);
//! graph.add_edge(3, 2);
//! assert!(graph.edge_exists(1, 0));
//! assert_eq!(graph.connected_components().len(), 2);
//!
//! let mut weighted = WeightedDenseGraph::with_vertices(3);
//! weighted.set_edge(0, 1, 1.0);
//! weighted.set_edge(1, 2, 2.0);
//! let result = weighted.shortest_path(0, 2);
//! assert_eq!(result.distance, 3.0);
//! assert_eq!(result.path, vec![2, 1, 0]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for storage growth and algorithm summaries.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod generate;
pub mod graph;

pub use collections::{BitSet, TriangularBitMatrix, TriangularMatrix};
pub use generate::RandomGraphConfig;
pub use graph::{
    FrontierDijkstra,
    InlinedDijkstra,
    ShortestPathResult,
    ShortestPathSolver,
    SimpleGraph,
    UnweightedDenseGraph,
    WeightedDenseGraph,
};

// Compile-time assertions for storage layout.
const _: () = {
    use core::mem;

    // A bit set is exactly one boxed slice.
    assert!(mem::size_of::<BitSet>() == mem::size_of::<Box<[u64]>>());

    // The solvers are stateless.
    assert!(mem::size_of::<FrontierDijkstra>() == 0);
    assert!(mem::size_of::<InlinedDijkstra>() == 0);

    // Matrix offsets for the first rows.
    assert!(collections::dense::triangular::bit_row_offset(65) == 64);
    assert!(collections::dense::triangular::row_offset(4) == 6);
};
