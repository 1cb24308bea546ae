//! The result of a single-pair shortest-path query.

use serde::{Deserialize, Serialize};

/// A shortest path and its total length.
///
/// `path` runs **backwards**: it starts at the destination and ends at the source. An
/// unreachable destination is reported as an infinite distance with an empty path.
///
/// Equality is bit-exact on the distance, so two results compare equal only if they were
/// produced by the same sequence of floating-point operations.
///
/// Non-finite distances need a serialization format that can carry them; JSON cannot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShortestPathResult {
    /// Total weight of the path, `+∞` if the destination is unreachable.
    pub distance: f64,
    /// Vertices from destination back to source, inclusive.
    pub path: Vec<usize>,
}

impl ShortestPathResult {
    /// The result for an unreachable destination.
    pub fn unreachable() -> Self {
        Self {
            distance: f64::INFINITY,
            path: Vec::new(),
        }
    }

    /// Returns `true` if a path was found.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.distance < f64::INFINITY
    }

    /// The source vertex, if a path was found.
    pub fn source(&self) -> Option<usize> {
        self.path.last().copied()
    }

    /// The destination vertex, if a path was found.
    pub fn destination(&self) -> Option<usize> {
        self.path.first().copied()
    }

    /// Number of edges along the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The path from source to destination.
    pub fn forward_path(&self) -> impl Iterator<Item = usize> + '_ {
        self.path.iter().rev().copied()
    }
}

impl Default for ShortestPathResult {
    fn default() -> Self {
        Self::unreachable()
    }
}

impl PartialEq for ShortestPathResult {
    fn eq(&self, other: &Self) -> bool {
        self.distance.to_bits() == other.distance.to_bits() && self.path == other.path
    }
}

impl Eq for ShortestPathResult {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_has_empty_path() {
        let result = ShortestPathResult::unreachable();
        assert!(!result.is_reachable());
        assert!(result.path.is_empty());
        assert_eq!(result.source(), None);
        assert_eq!(result.hops(), 0);
        assert_eq!(result, ShortestPathResult::default());
    }

    #[test]
    fn path_accessors_follow_reverse_order() {
        let result = ShortestPathResult {
            distance: 21.0,
            path: vec![4, 5, 6, 7, 0],
        };
        assert!(result.is_reachable());
        assert_eq!(result.source(), Some(0));
        assert_eq!(result.destination(), Some(4));
        assert_eq!(result.hops(), 4);
        assert_eq!(result.forward_path().collect::<Vec<_>>(), vec![0, 7, 6, 5, 4]);
    }

    #[test]
    fn equality_is_bit_exact() {
        let a = ShortestPathResult {
            distance: 0.0,
            path: vec![0],
        };
        let b = ShortestPathResult {
            distance: -0.0,
            path: vec![0],
        };
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
