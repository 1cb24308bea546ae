//! Internal graph accessors and low-level building blocks.
//!
//! This module is `pub(crate)` so the traversal algorithms can share marker sets and
//! scratch state without exposing them as part of the public API surface.

pub(crate) mod visited;
