//! Storage primitives for the dense graphs.
//!
//! - `dense`: the growable word-packed bit set and the triangular edge matrices

pub mod dense;

// Re-export commonly used types from submodules
pub use dense::{BitSet, TriangularBitMatrix, TriangularMatrix};
