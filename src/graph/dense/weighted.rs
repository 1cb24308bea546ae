//! A dense, weighted undirected graph.
//!
//! Vertices live in a [`BitSet`]; edge weights live in a [`TriangularMatrix<f64>`] at the
//! canonical `(max, min)` cell. An absent edge is `+∞`, and the distance from a vertex to
//! itself is fixed at `0` and never stored.
//!
//! Mutators follow a permissive policy: requests that would break the model (unknown
//! endpoints, self-edges, negative or `NaN` weights) are ignored without signalling.

use std::collections::BTreeSet;

use crate::collections::dense::bit_set::Iter as BitIter;
use crate::collections::{BitSet, TriangularMatrix};
use crate::graph::algorithms::{FrontierDijkstra, ShortestPathSolver};
use crate::graph::dense::unweighted::canonical;
use crate::graph::ShortestPathResult;

/// A dense undirected graph with non-negative `f64` edge weights.
#[derive(Clone, Debug, Default)]
pub struct WeightedDenseGraph {
    vertices: BitSet,
    weights: TriangularMatrix<f64>,
}

impl WeightedDenseGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph whose vertices `[0, vertex_count)` all exist, with no edges.
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            vertices: BitSet::filled(vertex_count),
            weights: TriangularMatrix::with_rows(vertex_count, f64::INFINITY),
        }
    }

    /// One past the highest vertex index ever inserted.
    #[inline]
    pub fn vertex_bound(&self) -> usize {
        self.weights.rows()
    }

    /// Adds a vertex, growing storage if it extends the addressable range.
    ///
    /// Edges to newly addressable vertices start absent.
    pub fn add_vertex(&mut self, vertex: usize) {
        if vertex >= self.vertex_bound() {
            self.vertices.ensure_capacity(vertex);
            self.weights.grow_rows(vertex + 1, f64::INFINITY);
        }
        self.vertices.set(vertex);
    }

    /// Removes a vertex. Its stored weights are kept but hidden.
    pub fn remove_vertex(&mut self, vertex: usize) {
        self.vertices.clear(vertex);
    }

    /// Returns `true` if the vertex exists.
    #[inline]
    pub fn vertex_exists(&self, vertex: usize) -> bool {
        self.vertices.contains(vertex)
    }

    /// Sets the weight of the edge between `v1` and `v2`.
    ///
    /// Ignored unless both vertices exist, `v1 != v2`, and `weight >= 0`. Setting
    /// `f64::INFINITY` deletes the edge.
    pub fn set_edge(&mut self, v1: usize, v2: usize, weight: f64) {
        if !self.vertex_exists(v1) || !self.vertex_exists(v2) || v1 == v2 {
            return;
        }
        if weight.is_nan() || weight < 0.0 {
            return;
        }
        let (row, col) = canonical(v1, v2);
        self.weights.set(row, col, weight);
    }

    /// Returns `true` if both vertices exist and a finite edge joins them.
    ///
    /// The diagonal is never stored, so `contains_edge(v, v)` is `false`.
    #[inline]
    pub fn contains_edge(&self, v1: usize, v2: usize) -> bool {
        if v1 == v2 || !self.vertex_exists(v1) || !self.vertex_exists(v2) {
            return false;
        }
        let (row, col) = canonical(v1, v2);
        self.weights.get(row, col) < f64::INFINITY
    }

    /// Returns the weight of the edge between `v1` and `v2`.
    ///
    /// `NaN` if either vertex is missing, `0` for `v1 == v2`, `+∞` if no edge is stored.
    #[inline]
    pub fn edge_weight(&self, v1: usize, v2: usize) -> f64 {
        if !self.vertex_exists(v1) || !self.vertex_exists(v2) {
            return f64::NAN;
        }
        if v1 == v2 {
            return 0.0;
        }
        let (row, col) = canonical(v1, v2);
        self.weights.get(row, col)
    }

    /// Finds the shortest path from `source` to `dest` with [`FrontierDijkstra`].
    pub fn shortest_path(&self, source: usize, dest: usize) -> ShortestPathResult {
        FrontierDijkstra.shortest_path(self, source, dest)
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

    /// Iterates visible finite edges as `(smaller, larger, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.vertices().flat_map(move |row| {
            self.weights
                .row(row)
                .iter()
                .enumerate()
                .filter(move |&(col, &w)| w < f64::INFINITY && self.vertex_exists(col))
                .map(move |(col, &w)| (col, row, w))
        })
    }

    /// Number of visible finite edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Raw vertex words.
    #[inline(always)]
    pub(crate) fn vertex_words(&self) -> &[u64] {
        self.vertices.words()
    }

    /// Raw triangular weight cells, row after row.
    #[inline(always)]
    pub(crate) fn weight_cells(&self) -> &[f64] {
        self.weights.as_slice()
    }
}

impl PartialEq for WeightedDenseGraph {
    /// Structural equality: same vertices and same visible edge weights.
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.edges().eq(other.edges())
    }
}
