//! Visited / settled marker sets for graph traversals.
//!
//! Traversals over the dense graphs keep their marker state in a `BitSet` sized to the
//! graph's vertex bound, so marking and probing are single word operations.

use crate::collections::BitSet;

/// A dense, word-packed visited set sized for a fixed vertex bound.
pub(crate) struct VisitedSet {
    bits: BitSet,
}

impl VisitedSet {
    #[inline(always)]
    pub(crate) fn new(bound: usize) -> Self {
        Self {
            bits: BitSet::with_bits(bound),
        }
    }

    /// Returns `true` iff `node` was not yet visited, and marks it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        if self.bits.contains(node) {
            false
        } else {
            self.bits.set(node);
            true
        }
    }

    #[inline(always)]
    pub(crate) fn mark(&mut self, node: usize) {
        self.bits.set(node);
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, node: usize) -> bool {
        self.bits.contains(node)
    }
}
