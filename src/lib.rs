#![deny(missing_docs)]
//! This crate provides a search engine for the 3x3 sliding puzzle (8-puzzle):
//! uninformed breadth-first search and informed A* search with pluggable
//! admissible heuristics.

/// The `search` module implements the puzzle board model, the search
/// strategies, and the heuristics that guide the informed one.
pub mod search;
