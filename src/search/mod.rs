#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The sliding-puzzle search engine: board model, node storage,
//! heuristics, and the two search strategies.

/// A* search.
pub mod astar;
/// Breadth-first search.
pub mod bfs;
/// Board, move, and validation types.
pub mod board;
/// Admissible heuristics.
pub mod heuristic;
/// Node arena and path reconstruction.
pub mod node;
/// The strategy trait and shared result/error types.
pub mod solver;
