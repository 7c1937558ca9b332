#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Board representation for the 3x3 sliding puzzle.
//!
//! A board is a permutation of the values 0..=8 laid out in row-major
//! order, with 0 standing for the blank. The blank swaps places with an
//! adjacent tile when a [`Move`] is applied. All boards handed to the
//! search strategies are validated up front via [`Board::new`], so the
//! permutation invariant holds everywhere past construction.

use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Side length of the grid.
pub const SIDE: usize = 3;

/// Total number of cells (tiles plus the blank).
pub const CELLS: usize = SIDE * SIDE;

/// A single blank move.
///
/// The direction names describe where the blank travels; applying a move
/// swaps the blank with the tile in that direction. The enumeration order
/// (`Up`, `Down`, `Left`, `Right`) is fixed and determines the order in
/// which neighbors are generated, which in turn decides which of several
/// equal-length solutions a search finds first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Blank moves one row up.
    Up,
    /// Blank moves one row down.
    Down,
    /// Blank moves one column left.
    Left,
    /// Blank moves one column right.
    Right,
}

impl Move {
    /// All moves in their canonical enumeration order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The `(row, column)` offset the blank travels by.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
        };
        write!(f, "{s}")
    }
}

/// A malformed board description.
///
/// Every variant is a pre-search validation failure: a board that parses
/// and validates cleanly can never produce one of these during a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The input did not contain exactly [`CELLS`] values.
    WrongLength(usize),
    /// No cell holds 0.
    MissingBlank,
    /// A value outside 0..=8.
    OutOfRange(u8),
    /// A value appearing more than once.
    Duplicate(u8),
    /// A token that did not parse as an integer.
    NotANumber(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(n) => write!(f, "expected {CELLS} values, got {n}"),
            Self::MissingBlank => write!(f, "no blank (0) present"),
            Self::OutOfRange(v) => write!(f, "value {v} out of range 0..={}", CELLS - 1),
            Self::Duplicate(v) => write!(f, "value {v} appears more than once"),
            Self::NotANumber(s) => write!(f, "'{s}' is not an integer"),
        }
    }
}

impl std::error::Error for BoardError {}

/// A validated 3x3 board.
///
/// Cells are stored in row-major order; the blank index is cached at
/// construction so the search strategies never have to re-scan for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; CELLS],
    blank: u8,
}

impl Board {
    /// Builds a board from raw cells, checking the permutation invariant.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if any value falls outside 0..=8, any
    /// value repeats, or no blank is present.
    pub fn new(cells: [u8; CELLS]) -> Result<Self, BoardError> {
        let mut seen = [false; CELLS];
        for &v in &cells {
            if v as usize >= CELLS {
                return Err(BoardError::OutOfRange(v));
            }
            if seen[v as usize] {
                return Err(BoardError::Duplicate(v));
            }
            seen[v as usize] = true;
        }

        let blank = Self::locate_blank(&cells)?;

        Ok(Self {
            cells,
            blank: blank as u8,
        })
    }

    /// The canonical goal configuration: tiles 1..=8 in order, blank last.
    #[must_use]
    pub const fn goal() -> Self {
        Self {
            cells: [1, 2, 3, 4, 5, 6, 7, 8, 0],
            blank: 8,
        }
    }

    /// Finds the blank in a raw cell slice.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MissingBlank`] if no cell holds 0. This never
    /// fires on a constructed [`Board`], only on raw input.
    pub fn locate_blank(cells: &[u8]) -> Result<usize, BoardError> {
        cells
            .iter()
            .position(|&v| v == 0)
            .ok_or(BoardError::MissingBlank)
    }

    /// The raw cells in row-major order.
    #[must_use]
    pub const fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    /// Index of the blank cell.
    #[must_use]
    pub const fn blank_index(&self) -> usize {
        self.blank as usize
    }

    /// Applies a single move, returning the resulting board, or `None`
    /// when the move would push the blank off the grid.
    #[must_use]
    pub fn apply(&self, mv: Move) -> Option<Self> {
        let row = self.blank_index() / SIDE;
        let col = self.blank_index() % SIDE;
        let (dr, dc) = mv.offset();

        let new_row = row as isize + dr;
        let new_col = col as isize + dc;

        if new_row < 0 || new_row >= SIDE as isize || new_col < 0 || new_col >= SIDE as isize {
            return None;
        }

        let target = (new_row as usize) * SIDE + new_col as usize;
        let mut cells = self.cells;
        cells.swap(self.blank_index(), target);

        Some(Self {
            cells,
            blank: target as u8,
        })
    }

    /// Generates all legal successor boards, paired with the move that
    /// produces each, in the fixed `Up`, `Down`, `Left`, `Right` order.
    ///
    /// Every board yields between 2 (blank in a corner) and 4 (blank in
    /// the center) neighbors.
    #[must_use]
    pub fn neighbors(&self) -> SmallVec<[(Move, Self); 4]> {
        Move::ALL
            .iter()
            .filter_map(|&mv| self.apply(mv).map(|board| (mv, board)))
            .collect()
    }

    /// Number of tile pairs out of order, ignoring the blank.
    fn inversions(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(|(i, &v)| {
                self.cells[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < v)
                    .count()
            })
            .sum()
    }

    /// Whether `goal` is reachable from this board.
    ///
    /// On an odd-sided grid the blank's position does not matter: two
    /// configurations are mutually reachable exactly when their inversion
    /// counts share parity. The search strategies do not consult this;
    /// it exists so callers can refuse to start a hopeless breadth-first
    /// search.
    #[must_use]
    pub fn is_solvable_to(&self, goal: &Self) -> bool {
        self.inversions() % 2 == goal.inversions() % 2
    }

    /// Scrambles the canonical goal with a random walk of `moves` legal
    /// moves, never immediately undoing the previous move.
    ///
    /// The result is always reachable from [`Board::goal`], which makes
    /// this the safe way to produce solvable benchmark instances.
    #[must_use]
    pub fn scrambled(moves: usize) -> Self {
        let mut board = Self::goal();
        let mut last: Option<Move> = None;

        for _ in 0..moves {
            let options: SmallVec<[(Move, Self); 4]> = board
                .neighbors()
                .into_iter()
                .filter(|&(mv, _)| last != Some(mv.opposite()))
                .collect();

            let (mv, next) = options[fastrand::usize(..options.len())];
            board = next;
            last = Some(mv);
        }

        board
    }
}

impl fmt::Display for Board {
    /// Renders the grid over three lines, the blank as a space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            for col in 0..SIDE {
                if col > 0 {
                    write!(f, " ")?;
                }
                let v = self.cells[row * SIDE + col];
                if v == 0 {
                    write!(f, " ")?;
                } else {
                    write!(f, "{v}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses 9 whitespace- or comma-separated integers in row-major
    /// order, e.g. `"1 2 3 4 0 6 7 5 8"` or `"1,2,3,4,0,6,7,5,8"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [0u8; CELLS];
        let mut count = 0usize;

        for token in s.split(|c: char| c.is_whitespace() || c == ',') {
            if token.is_empty() {
                continue;
            }
            let v = token
                .parse::<u8>()
                .map_err(|_| BoardError::NotANumber(token.to_string()))?;
            if count < CELLS {
                cells[count] = v;
            }
            count += 1;
        }

        if count != CELLS {
            return Err(BoardError::WrongLength(count));
        }

        Self::new(cells)
    }
}
