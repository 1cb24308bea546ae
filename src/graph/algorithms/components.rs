//! Connected components of a dense unweighted graph.
//!
//! Iterative depth-first search over the bit matrix: no recursion, an explicit `Vec`
//! stack, and a word-packed visited set sized to the graph's vertex bound.

use crate::graph::access::visited::VisitedSet;
use crate::graph::UnweightedDenseGraph;

/// Splits `graph` into its maximal connected subgraphs.
///
/// Every existing vertex lands in exactly one component, and each component carries the
/// edges of `graph` between its own vertices. Start vertices are tried in ascending
/// order, so components come out ordered by their smallest vertex, but callers should
/// treat the result as a set.
pub fn connected_components(graph: &UnweightedDenseGraph) -> Vec<UnweightedDenseGraph> {
    let mut visited = VisitedSet::new(graph.vertex_bound());
    let mut stack = Vec::new();
    let mut components = Vec::new();

    for start in graph.vertices() {
        if visited.is_visited(start) {
            continue;
        }
        components.push(collect_component(graph, start, &mut visited, &mut stack));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        vertices = graph.vertex_count(),
        components = components.len(),
        "connected components computed"
    );

    components
}

/// Runs one depth-first traversal from `start`, building the component it spans.
///
/// A vertex is pushed once per discovering neighbour and skipped on pop if it has been
/// visited since. Neighbours are scanned in ascending index order.
fn collect_component(
    graph: &UnweightedDenseGraph,
    start: usize,
    visited: &mut VisitedSet,
    stack: &mut Vec<usize>,
) -> UnweightedDenseGraph {
    let bound = graph.vertex_bound();
    let mut component = UnweightedDenseGraph::new();
    component.add_vertex(start);
    stack.push(start);

    while let Some(vertex) = stack.pop() {
        if !visited.try_visit(vertex) {
            continue;
        }
        for neighbor in 0..bound {
            if neighbor != vertex
                && !visited.is_visited(neighbor)
                && graph.edge_exists(vertex, neighbor)
            {
                stack.push(neighbor);
                component.add_vertex(neighbor);
                component.add_edge(vertex, neighbor);
            }
        }
    }

    debug_assert!(stack.is_empty());
    component
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_vertices_are_singletons() {
        let graph = UnweightedDenseGraph::with_vertices(3);
        let components = connected_components(&graph);
        assert_eq!(components.len(), 3);
        for (v, component) in components.iter().enumerate() {
            assert_eq!(component.vertex_set().into_iter().collect::<Vec<_>>(), vec![v]);
            assert_eq!(component.edge_count(), 0);
        }
    }

    #[test]
    fn triangle_keeps_every_edge() {
        let mut graph = UnweightedDenseGraph::with_vertices(3);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 0);

        let components = connected_components(&graph);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0], graph);
    }

    #[test]
    fn removed_vertices_split_components() {
        // 0 - 1 - 2 - 3, then 2 disappears.
        let mut graph = UnweightedDenseGraph::with_vertices(4);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.remove_vertex(2);

        let components = connected_components(&graph);
        let sets: Vec<Vec<usize>> = components
            .iter()
            .map(|c| c.vertex_set().into_iter().collect())
            .collect();
        assert_eq!(sets, vec![vec![0, 1], vec![3]]);
        assert!(components[0].edge_exists(0, 1));
    }

    #[test]
    fn components_span_word_boundaries() {
        let mut graph = UnweightedDenseGraph::new();
        for v in [0, 63, 64, 200] {
            graph.add_vertex(v);
        }
        graph.add_edge(0, 200);
        graph.add_edge(63, 64);

        let components = connected_components(&graph);
        assert_eq!(components.len(), 2);
        assert!(components[0].edge_exists(200, 0));
        assert!(components[1].edge_exists(64, 63));
        assert!(!components[1].vertex_exists(0));
    }
}
