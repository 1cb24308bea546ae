//! Shared test helpers: a `petgraph`-backed oracle graph and textbook Dijkstra.
#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use densegraph::{SimpleGraph, WeightedDenseGraph};
use petgraph::graphmap::UnGraphMap;
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;

/// Oracle graph delegating to `petgraph`'s `UnGraphMap`.
///
/// Unlike the dense graphs, removing a vertex here also drops its edges; the oracle is
/// only compared against graphs that never remove vertices.
#[derive(Debug, Default)]
pub struct OracleGraph {
    graph: UnGraphMap<usize, ()>,
}

impl SimpleGraph for OracleGraph {
    fn add_vertex(&mut self, vertex: usize) {
        self.graph.add_node(vertex);
    }

    fn remove_vertex(&mut self, vertex: usize) {
        self.graph.remove_node(vertex);
    }

    fn vertex_exists(&self, vertex: usize) -> bool {
        self.graph.contains_node(vertex)
    }

    fn add_edge(&mut self, v1: usize, v2: usize) {
        if v1 != v2 && self.vertex_exists(v1) && self.vertex_exists(v2) {
            self.graph.add_edge(v1, v2, ());
        }
    }

    fn remove_edge(&mut self, v1: usize, v2: usize) {
        self.graph.remove_edge(v1, v2);
    }

    fn edge_exists(&self, v1: usize, v2: usize) -> bool {
        v1 == v2 || self.graph.contains_edge(v1, v2)
    }

    fn connected_components(&self) -> Vec<Self> {
        let bound = self.graph.nodes().max().map_or(0, |max| max + 1);
        let mut sets = UnionFind::<usize>::new(bound);
        for (a, b, _) in self.graph.all_edges() {
            sets.union(a, b);
        }

        let mut groups: BTreeMap<usize, OracleGraph> = BTreeMap::new();
        for vertex in self.graph.nodes() {
            groups
                .entry(sets.find(vertex))
                .or_default()
                .add_vertex(vertex);
        }
        for (a, b, _) in self.graph.all_edges() {
            if let Some(component) = groups.get_mut(&sets.find(a)) {
                component.add_edge(a, b);
            }
        }
        groups.into_values().collect()
    }

    fn vertex_set(&self) -> BTreeSet<usize> {
        self.graph.nodes().collect()
    }
}

/// Components as a set of vertex sets, for order-insensitive comparison.
pub fn component_sets<G: SimpleGraph>(components: &[G]) -> BTreeSet<BTreeSet<usize>> {
    components.iter().map(SimpleGraph::vertex_set).collect()
}

/// Textbook Dijkstra distances from `source`, computed by `petgraph`.
///
/// Unreachable vertices are absent from the map.
pub fn textbook_distances(graph: &WeightedDenseGraph, source: usize) -> BTreeMap<usize, f64> {
    let mut oracle = UnGraphMap::<usize, f64>::new();
    for vertex in graph.vertices() {
        oracle.add_node(vertex);
    }
    for (a, b, weight) in graph.edges() {
        oracle.add_edge(a, b, weight);
    }
    petgraph::algo::dijkstra(&oracle, source, None, |edge| *edge.weight())
        .into_iter()
        .collect()
}

/// Re-accumulates the length of `path` (destination first) from the source outwards.
pub fn path_length(graph: &WeightedDenseGraph, path: &[usize]) -> f64 {
    path.windows(2)
        .rev()
        .fold(0.0, |total, pair| total + graph.edge_weight(pair[0], pair[1]))
}
