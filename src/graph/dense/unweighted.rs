//! A dense, bit-packed, unweighted undirected graph.
//!
//! Vertices are indices into a [`BitSet`]; edges are bits of a [`TriangularBitMatrix`]
//! addressed by the canonical `(max, min)` pair, so every undirected edge occupies exactly
//! one bit and symmetry holds by construction.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) amortized | Grows storage when `v` extends the range |
//! | `remove_vertex` | \(O(1)\) | Incident edges are kept (see below) |
//! | `add_edge` / `remove_edge` / `edge_exists` | \(O(1)\) | One word access |
//! | `connected_components` | \(O(V^2)\) | Dense scan per visited vertex |
//!
//! ### Removed vertices keep their edges
//! `remove_vertex` only clears the vertex bit. Edge bits incident to the vertex stay in the
//! matrix and become invisible, because every edge query first checks that both endpoints
//! exist. Re-adding the vertex makes those edges visible again.

use std::collections::BTreeSet;
use std::fmt;

use crate::collections::dense::bit_set::Iter as BitIter;
use crate::collections::{BitSet, TriangularBitMatrix};
use crate::graph::algorithms::components;
use crate::graph::SimpleGraph;

/// Orders an unordered vertex pair as `(row, col)` with `row >= col`.
#[inline(always)]
pub(crate) fn canonical(v1: usize, v2: usize) -> (usize, usize) {
    if v1 > v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// A bit-packed dense undirected graph.
#[derive(Clone, Default)]
pub struct UnweightedDenseGraph {
    vertices: BitSet,
    edges: TriangularBitMatrix,
}

impl UnweightedDenseGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph whose vertices `[0, vertex_count)` all exist, with no edges.
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            vertices: BitSet::filled(vertex_count),
            edges: TriangularBitMatrix::with_rows(vertex_count),
        }
    }

    /// One past the highest vertex index ever inserted.
    #[inline]
    pub fn vertex_bound(&self) -> usize {
        self.edges.rows()
    }

    /// Adds a vertex, growing storage if it extends the addressable range.
    pub fn add_vertex(&mut self, vertex: usize) {
        if vertex >= self.vertex_bound() {
            self.vertices.ensure_capacity(vertex);
            self.edges.grow_rows(vertex + 1);
        }
        self.vertices.set(vertex);
    }

    /// Removes a vertex. Its incident edges are kept but hidden.
    pub fn remove_vertex(&mut self, vertex: usize) {
        self.vertices.clear(vertex);
    }

    /// Returns `true` if the vertex exists.
    #[inline]
    pub fn vertex_exists(&self, vertex: usize) -> bool {
        self.vertices.contains(vertex)
    }

    /// Adds an edge between two existing vertices.
    pub fn add_edge(&mut self, v1: usize, v2: usize) {
        if v1 == v2 || !self.vertex_exists(v1) || !self.vertex_exists(v2) {
            return;
        }
        let (row, col) = canonical(v1, v2);
        self.edges.set(row, col);
    }

    /// Removes the edge between two existing vertices.
    pub fn remove_edge(&mut self, v1: usize, v2: usize) {
        if v1 == v2 || !self.vertex_exists(v1) || !self.vertex_exists(v2) {
            return;
        }
        let (row, col) = canonical(v1, v2);
        self.edges.clear(row, col);
    }

    /// Returns `true` if `v1` and `v2` are connected by an edge.
    ///
    /// Always `true` for `v1 == v2`, whether or not the vertex exists.
    #[inline]
    pub fn edge_exists(&self, v1: usize, v2: usize) -> bool {
        if v1 == v2 {
            return true;
        }
        if !self.vertex_exists(v1) || !self.vertex_exists(v2) {
            return false;
        }
        let (row, col) = canonical(v1, v2);
        self.edges.get(row, col)
    }

    /// Splits the graph into its connected components.
    ///
    /// See [`components::connected_components`].
    pub fn connected_components(&self) -> Vec<UnweightedDenseGraph> {
        components::connected_components(self)
    }

    /// Iterates existing vertices in ascending order.
    pub fn vertices(&self) -> BitIter<'_> {
        self.vertices.iter()
    }

    /// The set of existing vertices.
    pub fn vertex_set(&self) -> BTreeSet<usize> {
        self.vertices().collect()
    }

    /// Number of existing vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.count_ones()
    }

    /// Iterates visible edges as `(smaller, larger)` pairs, ordered by the larger endpoint.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices().flat_map(move |row| {
            BitIter::over(self.edges.row_words(row))
                .filter(move |&col| self.vertex_exists(col))
                .map(move |col| (col, row))
        })
    }

    /// Number of visible edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

impl SimpleGraph for UnweightedDenseGraph {
    fn add_vertex(&mut self, vertex: usize) {
        UnweightedDenseGraph::add_vertex(self, vertex);
    }

    fn remove_vertex(&mut self, vertex: usize) {
        UnweightedDenseGraph::remove_vertex(self, vertex);
    }

    fn vertex_exists(&self, vertex: usize) -> bool {
        UnweightedDenseGraph::vertex_exists(self, vertex)
    }

    fn add_edge(&mut self, v1: usize, v2: usize) {
        UnweightedDenseGraph::add_edge(self, v1, v2);
    }

    fn remove_edge(&mut self, v1: usize, v2: usize) {
        UnweightedDenseGraph::remove_edge(self, v1, v2);
    }

    fn edge_exists(&self, v1: usize, v2: usize) -> bool {
        UnweightedDenseGraph::edge_exists(self, v1, v2)
    }

    fn connected_components(&self) -> Vec<Self> {
        UnweightedDenseGraph::connected_components(self)
    }

    fn vertex_set(&self) -> BTreeSet<usize> {
        UnweightedDenseGraph::vertex_set(self)
    }
}

impl PartialEq for UnweightedDenseGraph {
    /// Structural equality: same vertices and same visible edges.
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.edges().eq(other.edges())
    }
}

impl Eq for UnweightedDenseGraph {}

impl fmt::Debug for UnweightedDenseGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnweightedDenseGraph")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges().collect::<Vec<_>>())
            .finish()
    }
}
