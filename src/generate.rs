//! Seeded random graph generation.
//!
//! Generators walk every unordered vertex pair `v < u` in row-major order and draw one
//! uniform `f64` per pair, so two graphs built from equally seeded generators receive the
//! identical sequence of mutator calls. Tests rely on this to build a dense graph and an
//! oracle graph side by side.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::graph::{SimpleGraph, UnweightedDenseGraph, WeightedDenseGraph};

fn check_load_factor(load_factor: f64) {
    assert!(
        (0.0..=1.0).contains(&load_factor),
        "load factor {load_factor} outside [0, 1]"
    );
}

/// Adds random edges among `[0, vertex_count)` to any [`SimpleGraph`].
///
/// Each pair is connected with probability `load_factor`. Endpoints are added lazily, so
/// vertices that receive no edge are not added at all.
///
/// # Panics
/// Panics if `load_factor` is outside `[0, 1]`.
pub fn populate_unweighted<G, R>(graph: &mut G, rng: &mut R, vertex_count: usize, load_factor: f64)
where
    G: SimpleGraph,
    R: Rng,
{
    check_load_factor(load_factor);
    for vertex in 0..vertex_count {
        for neighbor in vertex + 1..vertex_count {
            if rng.random::<f64>() < load_factor {
                graph.add_vertex(vertex);
                graph.add_vertex(neighbor);
                graph.add_edge(vertex, neighbor);
            }
        }
    }
}

/// Creates a random [`UnweightedDenseGraph`]; see [`populate_unweighted`].
///
/// # Panics
/// Panics if `load_factor` is outside `[0, 1]`.
pub fn random_unweighted<R: Rng>(
    rng: &mut R,
    vertex_count: usize,
    load_factor: f64,
) -> UnweightedDenseGraph {
    let mut graph = UnweightedDenseGraph::new();
    populate_unweighted(&mut graph, rng, vertex_count, load_factor);
    graph
}

/// Creates a random [`WeightedDenseGraph`] over `[0, vertex_count)`.
///
/// Every vertex exists. Each pair is connected with probability `load_factor`, with a
/// weight drawn uniformly from `[0, 1)`.
///
/// # Panics
/// Panics if `load_factor` is outside `[0, 1]`.
pub fn random_weighted<R: Rng>(
    rng: &mut R,
    vertex_count: usize,
    load_factor: f64,
) -> WeightedDenseGraph {
    check_load_factor(load_factor);
    let mut graph = WeightedDenseGraph::with_vertices(vertex_count);
    for vertex in 0..vertex_count {
        for neighbor in vertex + 1..vertex_count {
            if rng.random::<f64>() < load_factor {
                let weight = rng.random::<f64>();
                graph.set_edge(vertex, neighbor, weight);
            }
        }
    }
    graph
}

/// Parameters of a generated workload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomGraphConfig {
    /// Number of candidate vertices.
    pub vertices: usize,
    /// Probability that any given pair is connected.
    pub load_factor: f64,
    /// Seed of the generator.
    pub seed: u64,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            vertices: 1000,
            load_factor: 0.3,
            seed: 0,
        }
    }
}

impl RandomGraphConfig {
    /// A fresh generator for this configuration's seed.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    /// Generates the unweighted graph described by this configuration.
    pub fn unweighted(&self) -> UnweightedDenseGraph {
        random_unweighted(&mut self.rng(), self.vertices, self.load_factor)
    }

    /// Generates the weighted graph described by this configuration.
    pub fn weighted(&self) -> WeightedDenseGraph {
        random_weighted(&mut self.rng(), self.vertices, self.load_factor)
    }
}
