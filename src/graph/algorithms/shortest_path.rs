//! Single-pair shortest paths on a dense weighted graph.
//!
//! Dijkstra with linear-scan selection: with an \(O(V^2)\) matrix every scan is a dense row
//! pass anyway, so a priority queue buys nothing.
//!
//! # Frontier rule
//!
//! The scan does not pick the globally nearest unsettled vertex. It keeps a *frontier*
//! vertex and advances to the unsettled vertex joined to the frontier by the lightest
//! direct edge (lowest index on ties). Each step:
//!
//! 1. find that nearest neighbour of the frontier; stop if there is none,
//! 2. relax every unsettled neighbour of the frontier,
//! 3. settle the frontier,
//! 4. stop if the nearest neighbour is the destination, otherwise make it the frontier.
//!
//! This agrees with textbook Dijkstra on many graphs, but it can report a longer path, or
//! none, when the walk dead-ends before reaching the destination.

use crate::graph::access::visited::VisitedSet;
use crate::graph::{ShortestPathResult, WeightedDenseGraph};

/// Marker for a vertex whose predecessor is not yet known.
pub(crate) const UNDEFINED: usize = usize::MAX;

/// A single-pair shortest-path algorithm over a [`WeightedDenseGraph`].
pub trait ShortestPathSolver {
    /// Finds a shortest path from `source` to `dest`.
    ///
    /// If either endpoint does not exist the destination is unreachable.
    fn shortest_path(
        &self,
        graph: &WeightedDenseGraph,
        source: usize,
        dest: usize,
    ) -> ShortestPathResult;
}

/// The reference frontier Dijkstra, written against the graph's public query API.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrontierDijkstra;

impl ShortestPathSolver for FrontierDijkstra {
    fn shortest_path(
        &self,
        graph: &WeightedDenseGraph,
        source: usize,
        dest: usize,
    ) -> ShortestPathResult {
        if !graph.vertex_exists(source) || !graph.vertex_exists(dest) {
            return ShortestPathResult::unreachable();
        }

        let bound = graph.vertex_bound();
        let mut distances = vec![f64::INFINITY; bound];
        let mut previous = vec![UNDEFINED; bound];
        let mut settled = VisitedSet::new(bound);
        settled.mark(source);
        distances[source] = 0.0;
        previous[source] = source;

        let mut frontier = source;
        #[cfg(feature = "tracing")]
        let mut steps = 0usize;

        while let Some(nearest) = nearest_unsettled(graph, &settled, frontier) {
            relax_neighbors(graph, &settled, frontier, &mut distances, &mut previous);
            settled.mark(frontier);
            #[cfg(feature = "tracing")]
            {
                steps += 1;
            }
            if nearest == dest {
                break;
            }
            frontier = nearest;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(source, dest, steps, distance = distances[dest], "shortest path scan finished");

        build_result(source, dest, &distances, &previous)
    }
}

/// The unsettled vertex joined to `frontier` by the lightest finite edge.
fn nearest_unsettled(
    graph: &WeightedDenseGraph,
    settled: &VisitedSet,
    frontier: usize,
) -> Option<usize> {
    let mut nearest = None;
    let mut min_weight = f64::INFINITY;
    for neighbor in 0..graph.vertex_bound() {
        if neighbor != frontier && graph.vertex_exists(neighbor) && !settled.is_visited(neighbor) {
            let weight = graph.edge_weight(frontier, neighbor);
            if weight < min_weight {
                min_weight = weight;
                nearest = Some(neighbor);
            }
        }
    }
    nearest
}

/// Relaxes every unsettled neighbour of `frontier` through `frontier`.
fn relax_neighbors(
    graph: &WeightedDenseGraph,
    settled: &VisitedSet,
    frontier: usize,
    distances: &mut [f64],
    previous: &mut [usize],
) {
    for neighbor in 0..graph.vertex_bound() {
        if graph.vertex_exists(neighbor)
            && graph.contains_edge(frontier, neighbor)
            && !settled.is_visited(neighbor)
        {
            let alternative = distances[frontier] + graph.edge_weight(neighbor, frontier);
            if alternative < distances[neighbor] {
                distances[neighbor] = alternative;
                previous[neighbor] = frontier;
            }
        }
    }
}

/// Walks `previous` back from `dest` to `source`.
pub(crate) fn build_result(
    source: usize,
    dest: usize,
    distances: &[f64],
    previous: &[usize],
) -> ShortestPathResult {
    let distance = distances[dest];
    if distance >= f64::INFINITY {
        return ShortestPathResult::unreachable();
    }

    let mut path = Vec::new();
    let mut vertex = dest;
    while vertex != source {
        path.push(vertex);
        vertex = previous[vertex];
        debug_assert_ne!(vertex, UNDEFINED, "finite distance without a predecessor");
    }
    path.push(source);

    ShortestPathResult { distance, path }
}
