//! The 8-puzzle board.
//!
//! This module defines:
//! - `EightPuzzleState`: a validated 3x3 board stored as a linear array of 9
//!   tiles, with both heuristics cached at construction.
//! - `Slide`: the four ways a neighbouring tile can slide into the hole, in the
//!   order successors are generated.
//!
//! `0` is the hole. It is not treated as a tile when generating successors or
//! computing the Manhattan distance.
use crate::error::SolverError;
use crate::heuristics::{self, Heuristic, Informed};
use crate::state::{Cost, State};
use crate::utils::board_from_str;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
pub const PUZZLE_SIZE: usize = 9;

/// Width and height of the board.
pub const SIDE: usize = 3;

/// The value that marks the hole.
pub const HOLE: u8 = 0;

/// The goal arrangement, read row by row.
pub const GOAL: [u8; PUZZLE_SIZE] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// A move of one tile into the hole, named after the direction the tile
/// travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slide {
    /// The tile at `hole - 1` moves right into the hole.
    Left,
    /// The tile at `hole + 3` moves into the hole.
    Down,
    /// The tile at `hole - 3` moves into the hole.
    Up,
    /// The tile at `hole + 1` moves left into the hole.
    Right,
}

impl Slide {
    /// Successor generation order.
    pub const ORDER: [Slide; 4] = [Slide::Left, Slide::Down, Slide::Up, Slide::Right];

    /// Index of the tile that would slide into `hole`, or `None` if the hole
    /// sits on the edge that forbids this slide.
    pub fn source(self, hole: usize) -> Option<usize> {
        match self {
            Slide::Left => (hole % SIDE != 0).then(|| hole - 1),
            Slide::Down => (hole < PUZZLE_SIZE - SIDE).then(|| hole + SIDE),
            Slide::Up => (hole >= SIDE).then(|| hole - SIDE),
            Slide::Right => (hole % SIDE != SIDE - 1).then(|| hole + 1),
        }
    }
}

/// An immutable 8-puzzle board.
///
/// Boards can only be built from a valid permutation of `0..=8`, so every
/// `EightPuzzleState` has exactly one hole.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::puzzle::EightPuzzleState;
/// use eight_puzzle_solver::state::State;
///
/// let board = EightPuzzleState::new([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
/// assert!(!board.is_goal());
/// assert_eq!(board.hole(), 7);
/// assert!(board.successors().iter().any(|s| s.is_goal()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EightPuzzleState {
    tiles: [u8; PUZZLE_SIZE],
    hole: usize,
    out_of_place: Cost,
    manhattan: Cost,
}

impl EightPuzzleState {
    /// Builds a board after checking that `tiles` is a permutation of `0..=8`.
    ///
    /// # Errors
    /// * `TileOutOfRange` if a value is above 8.
    /// * `MissingHole` if no tile is `0`.
    /// * `DuplicateTile` if a value appears twice.
    pub fn new(tiles: [u8; PUZZLE_SIZE]) -> Result<Self, SolverError> {
        if let Some(&value) = tiles.iter().find(|&&t| usize::from(t) >= PUZZLE_SIZE) {
            return Err(SolverError::TileOutOfRange { value });
        }
        let hole = tiles
            .iter()
            .position(|&t| t == HOLE)
            .ok_or(SolverError::MissingHole)?;

        let mut seen = [false; PUZZLE_SIZE];
        for &tile in &tiles {
            let slot = &mut seen[usize::from(tile)];
            if *slot {
                return Err(SolverError::DuplicateTile { value: tile });
            }
            *slot = true;
        }

        Ok(Self::with_hole(tiles, hole))
    }

    /// The goal board.
    pub fn goal() -> Self {
        Self::with_hole(GOAL, PUZZLE_SIZE - 1)
    }

    /// Builds a solvable board by walking `moves` random slides away from the
    /// goal.
    ///
    /// The walk is driven by a `SmallRng` seeded with `seed`, so the same
    /// arguments always produce the same board. A slide never undoes the one
    /// before it. The result can still be closer to the goal than `moves`
    /// slides, since longer walks may loop back around.
    pub fn scrambled(seed: u64, moves: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut previous: Option<Self> = None;
        let mut board = Self::goal();
        for _ in 0..moves {
            let mut successors = board.successors();
            successors.retain(|s| previous.as_ref() != Some(s));
            let pick = rng.gen_range(0..successors.len());
            previous = Some(std::mem::replace(&mut board, successors.swap_remove(pick)));
        }
        board
    }

    // Callers guarantee `tiles[hole] == HOLE` and that `tiles` is a permutation.
    fn with_hole(tiles: [u8; PUZZLE_SIZE], hole: usize) -> Self {
        EightPuzzleState {
            tiles,
            hole,
            out_of_place: heuristics::out_of_place(&tiles),
            manhattan: heuristics::manhattan_distance(&tiles),
        }
    }

    pub fn tiles(&self) -> &[u8; PUZZLE_SIZE] {
        &self.tiles
    }

    /// Index of the hole in the linear tile array.
    pub fn hole(&self) -> usize {
        self.hole
    }

    pub fn out_of_place(&self) -> Cost {
        self.out_of_place
    }

    pub fn manhattan_distance(&self) -> Cost {
        self.manhattan
    }

    /// Applies `slide` if the hole's position allows it.
    pub fn slide(&self, slide: Slide) -> Option<Self> {
        let source = slide.source(self.hole)?;
        let mut tiles = self.tiles;
        tiles.swap(source, self.hole);
        Some(Self::with_hole(tiles, source))
    }
}

impl State for EightPuzzleState {
    fn is_goal(&self) -> bool {
        self.tiles == GOAL
    }

    /// Between two and four boards, in [`Slide::ORDER`].
    fn successors(&self) -> Vec<Self> {
        Slide::ORDER
            .iter()
            .filter_map(|&slide| self.slide(slide))
            .collect()
    }

    fn cost(&self) -> Cost {
        heuristics::tile_cost(&self.tiles)
    }
}

impl Informed for EightPuzzleState {
    fn estimate(&self, heuristic: Heuristic) -> Cost {
        match heuristic {
            Heuristic::OutOfPlace => self.out_of_place,
            Heuristic::Manhattan => self.manhattan,
        }
    }
}

impl FromStr for EightPuzzleState {
    type Err = SolverError;

    /// Parses nine whitespace-separated tile numbers, e.g. `"1 2 3 4 5 6 7 0 8"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(board_from_str(s)?)
    }
}

impl fmt::Display for EightPuzzleState {
    /// Prints the last row of the linear array first, with a divider line
    /// between rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..SIDE).rev() {
            let cells = &self.tiles[row * SIDE..(row + 1) * SIDE];
            writeln!(f, "{} | {} | {}", cells[0], cells[1], cells[2])?;
            if row > 0 {
                writeln!(f, "---------")?;
            }
        }
        Ok(())
    }
}
