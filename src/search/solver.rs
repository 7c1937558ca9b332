#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The strategy seam shared by the search engines.

use crate::search::board::Move;
use crate::search::node::PathStep;
use std::fmt;

/// A search strategy over the puzzle's move graph.
///
/// Implementors own their frontier, visited set, and node storage for the
/// duration of one `search` call; nothing is shared across calls.
pub trait Search {
    /// Runs the search to completion.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] when no path to the goal exists (or, for
    /// a budgeted breadth-first search, when the budget runs out first).
    fn search(&mut self) -> Result<Solution, SearchError>;
}

/// A successful search result: the path from start to goal plus the
/// number of nodes expanded along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The path, starting at the root sentinel step (depth 0).
    pub steps: Vec<PathStep>,
    /// Nodes popped from the frontier before the goal was reached.
    pub expanded: usize,
}

impl Solution {
    /// Number of moves in the path (one less than the step count).
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// The moves of the path in order, skipping the root sentinel.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.steps.iter().filter_map(|step| step.mv)
    }
}

/// A search that terminated without reaching the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier drained: no path to the goal exists.
    Unsolvable {
        /// Nodes expanded before the frontier emptied.
        expanded: usize,
    },
    /// An opt-in node budget ran out before the search concluded either
    /// way.
    BudgetExhausted {
        /// Nodes expanded when the budget was hit.
        expanded: usize,
    },
}

impl SearchError {
    /// Nodes expanded before the search gave up.
    #[must_use]
    pub const fn expanded(&self) -> usize {
        match *self {
            Self::Unsolvable { expanded } | Self::BudgetExhausted { expanded } => expanded,
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsolvable { expanded } => {
                write!(f, "no solution exists ({expanded} nodes expanded)")
            }
            Self::BudgetExhausted { expanded } => {
                write!(f, "node budget exhausted after {expanded} expansions")
            }
        }
    }
}

impl std::error::Error for SearchError {}
