//! Dense, word-packed storage primitives backing the dense graphs.

pub mod bit_set;
pub mod triangular;

pub use bit_set::BitSet;
pub use triangular::{TriangularBitMatrix, TriangularMatrix};
