#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Admissible heuristics for informed search.
//!
//! A [`Heuristic`] estimates the number of moves still needed to reach
//! the goal without ever overestimating it, which is what lets A* keep
//! its optimality guarantee. Two classic estimates are provided:
//!
//! - [`MisplacedTiles`] counts tiles sitting on the wrong cell. Each
//!   move repositions exactly one tile, so at most one misplacement is
//!   fixed per move.
//! - [`ManhattanDistance`] sums the grid distance of every tile to its
//!   goal cell. Each move changes one tile's distance by exactly one.
//!
//! Manhattan distance dominates misplaced tiles: its estimate is always
//! at least as large while staying admissible, so A* under it expands no
//! more nodes on the same instance.

use crate::search::board::{Board, CELLS, SIDE};

/// An admissible estimate of the remaining moves to `goal`.
pub trait Heuristic {
    /// Estimated number of moves from `board` to `goal`. Must never
    /// exceed the true remaining move count.
    fn estimate(&self, board: &Board, goal: &Board) -> u32;

    /// Short label for reporting.
    fn name(&self) -> &'static str;
}

/// Counts non-blank tiles that differ from the goal cell they sit on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MisplacedTiles;

impl Heuristic for MisplacedTiles {
    fn estimate(&self, board: &Board, goal: &Board) -> u32 {
        board
            .cells()
            .iter()
            .zip(goal.cells())
            .filter(|&(&v, &g)| v != 0 && v != g)
            .count() as u32
    }

    fn name(&self) -> &'static str {
        "misplaced tiles"
    }
}

/// Sums the row and column distance of every non-blank tile to its goal
/// cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManhattanDistance;

impl Heuristic for ManhattanDistance {
    fn estimate(&self, board: &Board, goal: &Board) -> u32 {
        // Where each value sits in the goal, indexed by value.
        let mut target = [0usize; CELLS];
        for (i, &v) in goal.cells().iter().enumerate() {
            target[v as usize] = i;
        }

        board
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(|(i, &v)| {
                let t = target[v as usize];
                let dr = (i / SIDE).abs_diff(t / SIDE);
                let dc = (i % SIDE).abs_diff(t % SIDE);
                (dr + dc) as u32
            })
            .sum()
    }

    fn name(&self) -> &'static str {
        "manhattan distance"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: [u8; CELLS]) -> Board {
        Board::new(cells).unwrap()
    }

    #[test]
    fn test_zero_at_goal() {
        let goal = Board::goal();
        assert_eq!(MisplacedTiles.estimate(&goal, &goal), 0);
        assert_eq!(ManhattanDistance.estimate(&goal, &goal), 0);
    }

    #[test]
    fn test_single_swap_with_blank() {
        // One move away: tile 8 slid right into the blank's corner.
        let one_off = board([1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let goal = Board::goal();
        assert_eq!(MisplacedTiles.estimate(&one_off, &goal), 1);
        assert_eq!(ManhattanDistance.estimate(&one_off, &goal), 1);
    }

    #[test]
    fn test_two_moves_away() {
        let start = board([1, 2, 3, 4, 0, 6, 7, 5, 8]);
        let goal = Board::goal();
        // Tiles 5 and 8 are each one cell from home.
        assert_eq!(MisplacedTiles.estimate(&start, &goal), 2);
        assert_eq!(ManhattanDistance.estimate(&start, &goal), 2);
    }

    #[test]
    fn test_blank_never_counted() {
        // Only the blank differs from where the goal has it.
        let goal = Board::goal();
        let moved = goal.apply(crate::search::board::Move::Up).unwrap();
        // Tile that swapped with the blank is the single misplacement.
        assert_eq!(MisplacedTiles.estimate(&moved, &goal), 1);
        assert_eq!(ManhattanDistance.estimate(&moved, &goal), 1);
    }

    #[test]
    fn test_manhattan_dominates_misplaced() {
        // A tile on the wrong cell is at distance >= 1, so Manhattan is
        // a pointwise upper bound on misplaced tiles.
        let goal = Board::goal();
        for moves in [2, 6, 12, 25] {
            let b = Board::scrambled(moves);
            assert!(
                ManhattanDistance.estimate(&b, &goal) >= MisplacedTiles.estimate(&b, &goal),
                "dominance violated on {b:?}"
            );
        }
    }

    #[test]
    fn test_manhattan_worst_corner() {
        // Tiles 1 and 8 swapped across the grid: each sits 2 rows and
        // 1 column from home, so Manhattan sees 3 + 3 while misplaced
        // tiles sees only 2.
        let b = board([8, 2, 3, 4, 5, 6, 7, 1, 0]);
        assert_eq!(ManhattanDistance.estimate(&b, &Board::goal()), 6);
        assert_eq!(MisplacedTiles.estimate(&b, &Board::goal()), 2);
    }
}
