#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Informed best-first search (A*).
//!
//! A* orders its frontier by `f = g + h`, where `g` is the depth of a
//! node (moves taken so far) and `h` is an admissible [`Heuristic`]
//! estimate of the moves remaining. Popping the lowest `f` first means
//! the first time the goal is popped, its path is optimal.
//!
//! Every pop counts as one expansion; the expansion total is reported on
//! success and on failure, which is what makes heuristic comparisons
//! (and the dominance property between the two shipped heuristics)
//! observable.
//!
//! `std::collections::BinaryHeap` makes no ordering promise between
//! equal keys, so each frontier entry carries a push sequence number:
//! among equal `f` values, the earliest-pushed entry pops first. The
//! tie-break is deterministic, which keeps expansion counts reproducible
//! run to run.

use crate::search::board::Board;
use crate::search::heuristic::Heuristic;
use crate::search::node::{NodeArena, NodeId, SearchNode};
use crate::search::solver::{Search, SearchError, Solution};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One frontier entry: priority key plus the node it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    f: u32,
    seq: u64,
    id: NodeId,
}

impl Ord for Entry {
    /// Inverted so the max-heap pops the smallest `f`; among equal `f`,
    /// the smallest `seq` (earliest push) wins.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search from a start board to a goal board under a heuristic.
#[derive(Debug, Clone)]
pub struct AStar<H: Heuristic> {
    start: Board,
    goal: Board,
    heuristic: H,
}

impl<H: Heuristic> AStar<H> {
    /// Creates a search from `start` to `goal` guided by `heuristic`.
    #[must_use]
    pub const fn new(start: Board, goal: Board, heuristic: H) -> Self {
        Self {
            start,
            goal,
            heuristic,
        }
    }

    /// The heuristic guiding this search.
    pub const fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

impl<H: Heuristic> Search for AStar<H> {
    /// Runs A* to completion.
    ///
    /// A popped board equal to the goal ends the search with the path
    /// reconstructed through the node arena. Otherwise the board joins
    /// the closed set and its neighbors not already closed are pushed
    /// with `f = depth + 1 + h`. Already-closed boards popped again are
    /// still counted as expansions; their neighbors are simply all
    /// closed or soon will be, so the re-expansion peters out.
    ///
    /// # Errors
    ///
    /// [`SearchError::Unsolvable`] when the frontier empties, carrying
    /// the number of nodes expanded on the way to that answer.
    fn search(&mut self) -> Result<Solution, SearchError> {
        let (mut arena, root) = NodeArena::with_root(self.start);
        let mut frontier = BinaryHeap::new();
        let mut closed: FxHashSet<Board> = FxHashSet::default();
        let mut seq = 0u64;
        let mut expanded = 0usize;

        frontier.push(Entry {
            f: self.heuristic.estimate(&self.start, &self.goal),
            seq,
            id: root,
        });

        while let Some(entry) = frontier.pop() {
            expanded += 1;
            let (board, depth) = {
                let node = &arena[entry.id];
                (node.board, node.depth)
            };

            if board == self.goal {
                return Ok(Solution {
                    steps: arena.path_to(entry.id),
                    expanded,
                });
            }

            closed.insert(board);

            for (mv, neighbor) in board.neighbors() {
                if closed.contains(&neighbor) {
                    continue;
                }

                let child_depth = depth + 1;
                let f = child_depth + self.heuristic.estimate(&neighbor, &self.goal);
                let id = arena.push(SearchNode {
                    board: neighbor,
                    parent: Some(entry.id),
                    mv: Some(mv),
                    depth: child_depth,
                });

                seq += 1;
                frontier.push(Entry { f, seq, id });
            }
        }

        Err(SearchError::Unsolvable { expanded })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::bfs::Bfs;
    use crate::search::heuristic::{ManhattanDistance, MisplacedTiles};

    fn board(cells: [u8; 9]) -> Board {
        Board::new(cells).unwrap()
    }

    #[test]
    fn test_start_equals_goal_expands_once() {
        let goal = Board::goal();
        let solution = AStar::new(goal, goal, ManhattanDistance).search().unwrap();
        assert_eq!(solution.move_count(), 0);
        assert_eq!(solution.expanded, 1);
    }

    #[test]
    fn test_two_move_instance_both_heuristics() {
        let start = board([1, 2, 3, 4, 0, 6, 7, 5, 8]);
        let goal = Board::goal();

        let with_misplaced = AStar::new(start, goal, MisplacedTiles).search().unwrap();
        let with_manhattan = AStar::new(start, goal, ManhattanDistance).search().unwrap();

        assert_eq!(with_misplaced.move_count(), 2);
        assert_eq!(with_manhattan.move_count(), 2);
    }

    #[test]
    fn test_agrees_with_bfs_on_length() {
        fastrand::seed(7);
        for moves in [4, 9, 14] {
            let start = Board::scrambled(moves);
            let goal = Board::goal();

            let bfs = Bfs::new(start, goal).search().unwrap();
            let astar = AStar::new(start, goal, ManhattanDistance).search().unwrap();

            assert_eq!(
                bfs.move_count(),
                astar.move_count(),
                "optimal lengths disagree on {start:?}"
            );
        }
    }

    #[test]
    fn test_manhattan_expands_no_more_than_misplaced() {
        fastrand::seed(11);
        for moves in [6, 10, 16, 22] {
            let start = Board::scrambled(moves);
            let goal = Board::goal();

            let misplaced = AStar::new(start, goal, MisplacedTiles).search().unwrap();
            let manhattan = AStar::new(start, goal, ManhattanDistance).search().unwrap();

            assert!(
                manhattan.expanded <= misplaced.expanded,
                "dominance violated on {start:?}: manhattan {} > misplaced {}",
                manhattan.expanded,
                misplaced.expanded
            );
        }
    }

    #[test]
    fn test_unsolvable_reports_expansions() {
        let mut cells = *Board::goal().cells();
        cells.swap(0, 1);
        let start = board(cells);

        let result = AStar::new(start, Board::goal(), ManhattanDistance).search();
        match result {
            Err(SearchError::Unsolvable { expanded }) => assert!(expanded > 0),
            other => panic!("expected Unsolvable, got {other:?}"),
        }
    }

    #[test]
    fn test_path_is_replayable() {
        fastrand::seed(3);
        let start = Board::scrambled(15);
        let solution = AStar::new(start, Board::goal(), MisplacedTiles)
            .search()
            .unwrap();

        let mut at = start;
        for mv in solution.moves() {
            at = at.apply(mv).unwrap();
        }
        assert_eq!(at, Board::goal());
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        fastrand::seed(5);
        let start = Board::scrambled(10);
        let goal = Board::goal();

        let first = AStar::new(start, goal, ManhattanDistance).search().unwrap();
        let second = AStar::new(start, goal, ManhattanDistance).search().unwrap();

        assert_eq!(first.expanded, second.expanded);
        assert_eq!(first.steps, second.steps);
    }
}
