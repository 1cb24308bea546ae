//! The frontier Dijkstra flattened into a single function body.
//!
//! [`InlinedDijkstra`] performs exactly the same floating-point operations, in the same
//! order, as [`FrontierDijkstra`](super::FrontierDijkstra), but reads the raw vertex words
//! and the raw triangular weight cells directly instead of going through the graph's query
//! methods. Every helper call, existence check and canonicalization is expanded by hand.
//! The two must return bit-identical results.

use super::shortest_path::{build_result, ShortestPathSolver, UNDEFINED};
use crate::graph::{ShortestPathResult, WeightedDenseGraph};

/// Frontier Dijkstra with all helpers manually inlined.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlinedDijkstra;

impl ShortestPathSolver for InlinedDijkstra {
    #[allow(clippy::too_many_lines)]
    fn shortest_path(
        &self,
        graph: &WeightedDenseGraph,
        source: usize,
        dest: usize,
    ) -> ShortestPathResult {
        let vertices = graph.vertex_words();
        let cells = graph.weight_cells();

        let source_present = vertices
            .get(source >> 6)
            .is_some_and(|word| word >> (source & 63) & 1 != 0);
        let dest_present = vertices
            .get(dest >> 6)
            .is_some_and(|word| word >> (dest & 63) & 1 != 0);
        if !source_present || !dest_present {
            return ShortestPathResult::unreachable();
        }

        let bound = graph.vertex_bound();
        let mut distances = vec![f64::INFINITY; bound];
        let mut previous = vec![UNDEFINED; bound];
        let mut settled = vec![0u64; bound.div_ceil(64)];
        settled[source >> 6] |= 1 << (source & 63);
        distances[source] = 0.0;
        previous[source] = source;

        let mut frontier = source;
        loop {
            // Nearest unsettled vertex by direct edge weight from the frontier.
            let mut nearest = UNDEFINED;
            let mut min_weight = f64::INFINITY;
            for neighbor in 0..bound {
                if neighbor == frontier
                    || vertices[neighbor >> 6] >> (neighbor & 63) & 1 == 0
                    || settled[neighbor >> 6] >> (neighbor & 63) & 1 != 0
                {
                    continue;
                }
                let (row, col) = if frontier > neighbor {
                    (frontier, neighbor)
                } else {
                    (neighbor, frontier)
                };
                let weight = cells[row * (row - 1) / 2 + col];
                if weight < min_weight {
                    min_weight = weight;
                    nearest = neighbor;
                }
            }
            if nearest == UNDEFINED {
                break;
            }

            // Relax the frontier's unsettled neighbours.
            let base = distances[frontier];
            for neighbor in 0..bound {
                if neighbor == frontier
                    || vertices[neighbor >> 6] >> (neighbor & 63) & 1 == 0
                    || settled[neighbor >> 6] >> (neighbor & 63) & 1 != 0
                {
                    continue;
                }
                let (row, col) = if frontier > neighbor {
                    (frontier, neighbor)
                } else {
                    (neighbor, frontier)
                };
                let weight = cells[row * (row - 1) / 2 + col];
                if weight < f64::INFINITY {
                    let alternative = base + weight;
                    if alternative < distances[neighbor] {
                        distances[neighbor] = alternative;
                        previous[neighbor] = frontier;
                    }
                }
            }

            settled[frontier >> 6] |= 1 << (frontier & 63);
            if nearest == dest {
                break;
            }
            frontier = nearest;
        }

        build_result(source, dest, &distances, &previous)
    }
}
