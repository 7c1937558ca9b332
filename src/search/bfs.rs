#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Uninformed breadth-first search.
//!
//! Classic BFS over the move graph: a FIFO frontier seeded with the
//! start board, goal-equality tested on every dequeue, a visited set to
//! stop re-expansion. Because edges all cost one move, the first time
//! the goal is dequeued its path is shortest in move count.
//!
//! Two behaviors are deliberate and worth knowing about:
//!
//! - The goal test happens *before* the visited check, so a board that
//!   was enqueued several times before its first dequeue still gets the
//!   equality test on each copy. This mirrors the classic formulation
//!   rather than optimizing it away.
//! - The search does not test solvability. On an unsolvable instance it
//!   grinds through the start board's entire 181 440-state component
//!   before the frontier drains and it reports failure. Callers wanting
//!   an early answer should consult [`Board::is_solvable_to`] first or
//!   attach a node budget via [`Bfs::with_node_budget`].

use crate::search::board::Board;
use crate::search::node::{NodeArena, SearchNode};
use crate::search::solver::{Search, SearchError, Solution};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Breadth-first search from a start board to a goal board.
#[derive(Debug, Clone)]
pub struct Bfs {
    start: Board,
    goal: Board,
    budget: Option<usize>,
}

impl Bfs {
    /// Creates a search from `start` to `goal`, unbounded.
    #[must_use]
    pub const fn new(start: Board, goal: Board) -> Self {
        Self {
            start,
            goal,
            budget: None,
        }
    }

    /// Caps the search at `nodes` dequeues.
    ///
    /// This is an opt-in deviation from the classic formulation: with a
    /// budget in place an inconclusive search ends in
    /// [`SearchError::BudgetExhausted`] instead of exhausting the state
    /// component.
    #[must_use]
    pub const fn with_node_budget(mut self, nodes: usize) -> Self {
        self.budget = Some(nodes);
        self
    }
}

impl Search for Bfs {
    /// Runs BFS to completion.
    ///
    /// # Errors
    ///
    /// [`SearchError::Unsolvable`] once the frontier drains without
    /// reaching the goal, or [`SearchError::BudgetExhausted`] if a node
    /// budget was set and ran out first.
    fn search(&mut self) -> Result<Solution, SearchError> {
        let (mut arena, root) = NodeArena::with_root(self.start);
        let mut frontier = VecDeque::from([root]);
        let mut visited: FxHashSet<Board> = FxHashSet::default();
        let mut expanded = 0usize;

        while let Some(id) = frontier.pop_front() {
            expanded += 1;
            let (board, depth) = {
                let node = &arena[id];
                (node.board, node.depth)
            };

            // Goal test first, visited check second: the order matters
            // for which duplicate of a re-enqueued board answers.
            if board == self.goal {
                return Ok(Solution {
                    steps: arena.path_to(id),
                    expanded,
                });
            }

            if !visited.insert(board) {
                continue;
            }

            for (mv, neighbor) in board.neighbors() {
                let child = arena.push(SearchNode {
                    board: neighbor,
                    parent: Some(id),
                    mv: Some(mv),
                    depth: depth + 1,
                });
                frontier.push_back(child);
            }

            if let Some(budget) = self.budget {
                if expanded >= budget {
                    return Err(SearchError::BudgetExhausted { expanded });
                }
            }
        }

        Err(SearchError::Unsolvable { expanded })
    }
}
