#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Search-node storage and path reconstruction.
//!
//! Nodes live in a [`NodeArena`], a plain `Vec` indexed by [`NodeId`].
//! Each node refers to its parent by index rather than by reference, so a
//! whole search tree is owned by one arena and dropped wholesale when the
//! search call returns. Path reconstruction walks the parent indices from
//! a terminal node back to the root and reverses the result.

use crate::search::board::{Board, Move};
use std::ops::Index;

/// Stable index of a node within its [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// One explored configuration in a search tree.
#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    /// The configuration this node represents.
    pub board: Board,
    /// Index of the parent node; `None` for the root.
    pub parent: Option<NodeId>,
    /// The move that produced this board from the parent; `None` for the
    /// root.
    pub mv: Option<Move>,
    /// Path length from the root.
    pub depth: u32,
}

/// One step of a reconstructed solution path.
///
/// The first step always carries `mv = None` (the start sentinel) at
/// depth 0; each following step records the move taken and the board it
/// produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    /// The move taken to reach this board; `None` on the start step.
    pub mv: Option<Move>,
    /// The board after the move.
    pub board: Board,
    /// Path length from the start.
    pub depth: u32,
}

/// Owning storage for every node a single search creates.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    /// Creates an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates an arena seeded with a root node for `board`.
    #[must_use]
    pub fn with_root(board: Board) -> (Self, NodeId) {
        let mut arena = Self::new();
        let root = arena.push(SearchNode {
            board,
            parent: None,
            mv: None,
            depth: 0,
        });
        (arena, root)
    }

    /// Appends a node and returns its index.
    ///
    /// # Panics
    ///
    /// Panics if the arena outgrows `u32` indices, which a 9-cell puzzle
    /// cannot reach before exhausting its 181 440-state component.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        let id = u32::try_from(self.nodes.len()).expect("node arena exceeded u32 indices");
        self.nodes.push(node);
        NodeId(id)
    }

    /// Number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reconstructs the path from the root to `id`.
    ///
    /// Walks the parent links backwards collecting a step per node, then
    /// reverses, so the result starts at the root sentinel (depth 0) and
    /// ends at the board `id` refers to.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<PathStep> {
        let mut steps = Vec::new();
        let mut cursor = Some(id);

        while let Some(at) = cursor {
            let node = &self[at];
            steps.push(PathStep {
                mv: node.mv,
                board: node.board,
                depth: node.depth,
            });
            cursor = node.parent;
        }

        steps.reverse();
        steps
    }
}

impl Index<NodeId> for NodeArena {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_root() {
        let (arena, root) = NodeArena::with_root(Board::goal());
        assert_eq!(arena.len(), 1);
        assert_eq!(arena[root].depth, 0);
        assert_eq!(arena[root].parent, None);
        assert_eq!(arena[root].mv, None);
    }

    #[test]
    fn test_path_to_root_only() {
        let (arena, root) = NodeArena::with_root(Board::goal());
        let path = arena.path_to(root);
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].mv, None);
        assert_eq!(path[0].depth, 0);
        assert_eq!(path[0].board, Board::goal());
    }

    #[test]
    fn test_path_reconstruction_order() {
        let start = Board::new([1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
        let (mut arena, root) = NodeArena::with_root(start);

        let down = start.apply(Move::Down).unwrap();
        let child = arena.push(SearchNode {
            board: down,
            parent: Some(root),
            mv: Some(Move::Down),
            depth: 1,
        });
        let right = down.apply(Move::Right).unwrap();
        let grandchild = arena.push(SearchNode {
            board: right,
            parent: Some(child),
            mv: Some(Move::Right),
            depth: 2,
        });

        let path = arena.path_to(grandchild);
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], PathStep { mv: None, board: start, depth: 0 });
        assert_eq!(path[1], PathStep { mv: Some(Move::Down), board: down, depth: 1 });
        assert_eq!(path[2], PathStep { mv: Some(Move::Right), board: right, depth: 2 });
    }
}
