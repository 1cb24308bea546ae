//! The unweighted, undirected graph contract.
//!
//! Vertices are plain `usize` indices. Implementations agree on the permissive semantics
//! shared by every graph in this crate: mutating an edge whose endpoints do not both exist
//! is a silent no-op, and a vertex is always connected to itself.

use std::collections::BTreeSet;

/// Simple unweighted and undirected graph.
///
/// Allows adding and removing vertices and edges, checking connectivity between two
/// vertices, and splitting the graph into its connected components.
pub trait SimpleGraph: Sized {
    /// Adds a vertex. Does nothing if the vertex exists.
    fn add_vertex(&mut self, vertex: usize);

    /// Removes a vertex. Does nothing if the vertex doesn't exist.
    fn remove_vertex(&mut self, vertex: usize);

    /// Returns `true` if the vertex exists.
    fn vertex_exists(&self, vertex: usize) -> bool;

    /// Adds an edge between two existing vertices. Does nothing if the edge exists.
    fn add_edge(&mut self, v1: usize, v2: usize);

    /// Removes the edge between two vertices. Does nothing if the edge doesn't exist.
    fn remove_edge(&mut self, v1: usize, v2: usize);

    /// Returns `true` if the vertices are connected by an edge, or are the same vertex.
    fn edge_exists(&self, v1: usize, v2: usize) -> bool;

    /// Splits the graph into its connected components, in no particular order.
    fn connected_components(&self) -> Vec<Self>;

    /// The set of existing vertices.
    fn vertex_set(&self) -> BTreeSet<usize>;
}
