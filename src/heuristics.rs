//! Heuristic estimates and the tile cost of 8-puzzle boards.
//!
//! The functions here work directly on a tile array so they can be computed
//! once when an [`crate::puzzle::EightPuzzleState`] is built and cached.

use crate::puzzle::{GOAL, HOLE, PUZZLE_SIZE, SIDE};
use crate::state::{Cost, State};
use std::fmt;

/// Selects the h(n) estimate used by informed strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Number of positions whose tile differs from the goal, hole included.
    OutOfPlace,
    /// Sum of grid distances of every non-hole tile to its goal cell.
    Manhattan,
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::OutOfPlace => write!(f, "out-of-place"),
            Heuristic::Manhattan => write!(f, "manhattan"),
        }
    }
}

/// A state that can estimate its remaining distance to the goal.
pub trait Informed: State {
    fn estimate(&self, heuristic: Heuristic) -> Cost;
}

/// Counts the positions whose tile differs from the goal arrangement.
///
/// The hole is compared like any other tile, so a board one slide away from
/// the goal scores 2.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::heuristics::out_of_place;
/// assert_eq!(out_of_place(&[1, 2, 3, 4, 5, 6, 7, 8, 0]), 0);
/// assert_eq!(out_of_place(&[1, 2, 3, 4, 5, 6, 7, 0, 8]), 2);
/// ```
pub fn out_of_place(tiles: &[u8; PUZZLE_SIZE]) -> Cost {
    tiles
        .iter()
        .zip(GOAL.iter())
        .filter(|(tile, goal)| tile != goal)
        .count() as Cost
}

/// Sums the Manhattan distance of every non-hole tile to its goal cell.
///
/// The linear board is read as a `SIDE` x `SIDE` grid, row by row. Tile `v`
/// belongs at index `v - 1`.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::heuristics::manhattan_distance;
/// assert_eq!(manhattan_distance(&[1, 2, 3, 4, 5, 6, 7, 8, 0]), 0);
/// // 5 is one row below home, 8 one column right of it.
/// assert_eq!(manhattan_distance(&[1, 2, 3, 4, 0, 6, 7, 5, 8]), 2);
/// ```
pub fn manhattan_distance(tiles: &[u8; PUZZLE_SIZE]) -> Cost {
    let mut distance = 0;
    for row in 0..SIDE {
        for col in 0..SIDE {
            let tile = tiles[row * SIDE + col];
            if tile == HOLE {
                continue;
            }
            let home = usize::from(tile - 1);
            distance += (home / SIDE).abs_diff(row) + (home % SIDE).abs_diff(col);
        }
    }
    distance as Cost
}

/// The state-intrinsic cost of a board.
///
/// Sums `|tile - goal_tile|` over all positions, with the goal's hole counted
/// as 9. The board's own hole keeps its value 0, so the goal board itself
/// costs 9.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::heuristics::tile_cost;
/// assert_eq!(tile_cost(&[1, 2, 3, 4, 5, 6, 7, 8, 0]), 9);
/// assert_eq!(tile_cost(&[1, 2, 3, 4, 5, 6, 7, 0, 8]), 9);
/// ```
pub fn tile_cost(tiles: &[u8; PUZZLE_SIZE]) -> Cost {
    tiles
        .iter()
        .zip(GOAL.iter())
        .map(|(&tile, &goal)| {
            let goal = if goal == HOLE { PUZZLE_SIZE as u8 } else { goal };
            Cost::from(tile.abs_diff(goal))
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_place_counts_hole() {
        // Only 7 and the hole are swapped.
        assert_eq!(out_of_place(&[1, 2, 3, 4, 5, 6, 0, 8, 7]), 2);
        // Everything shifted by one.
        assert_eq!(out_of_place(&[0, 1, 2, 3, 4, 5, 6, 7, 8]), 9);
    }

    #[test]
    fn test_manhattan_distance_ignores_hole() {
        assert_eq!(manhattan_distance(&[1, 2, 3, 4, 5, 6, 7, 0, 8]), 1);
        // 1 at bottom-right is 2 rows and 2 columns away, 8 at top-left is
        // 2 rows and 1 column away. Others stay home.
        assert_eq!(manhattan_distance(&[8, 2, 3, 4, 5, 6, 7, 0, 1]), 4 + 3);
    }

    #[test]
    fn test_tile_cost_of_shifted_board() {
        // |0-1| + |1-2| + ... + |7-8| + |8-9| = 9
        assert_eq!(tile_cost(&[0, 1, 2, 3, 4, 5, 6, 7, 8]), 9);
        // hole at index 4: |0-5| + |5-8| + |8-9|
        assert_eq!(tile_cost(&[1, 2, 3, 4, 0, 6, 7, 5, 8]), 5 + 3 + 1);
    }

    #[test]
    fn test_heuristic_display() {
        assert_eq!(Heuristic::OutOfPlace.to_string(), "out-of-place");
        assert_eq!(Heuristic::Manhattan.to_string(), "manhattan");
    }
}
