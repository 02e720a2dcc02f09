//! # Eight-Puzzle Solver Library
//!
//! This library provides a generic state-space search engine and the 8-puzzle
//! board it was built to solve.
//!
//! It is used by two binaries:
//! - `puzzle_solver`: Takes a board and a strategy, then prints the path from
//!   the board to the goal and its total cost.
//! - `heuristic_evaluator`: Runs the informed strategies over seeded random
//!   boards and compares their expansions and costs.
//!
//! ## Modules
//! - `state`: The `State` capability set every searchable state implements.
//! - `puzzle`: The 8-puzzle board (`EightPuzzleState`), successor generation
//!   and the reversed-row board display.
//! - `heuristics`: Out-of-place and Manhattan estimates, and the tile cost.
//! - `node`: Search-tree arena, parent back-references and the ancestor-chain
//!   duplicate filter.
//! - `strategies`: Depth-first, breadth-first, bidirectional, best-first and
//!   recursive best-first search.
//! - `solver`: Strategy selection by name or menu number, and dispatch.
//! - `utils`: Parsing boards from whitespace-separated text.
//! - `error`: The `SolverError` type.

pub mod error;
pub mod heuristics;
pub mod node;
pub mod puzzle;
pub mod solver;
pub mod state;
pub mod strategies;
pub mod utils;

// Items from sub-modules should be accessed via their full path, e.g.
// `eight_puzzle_solver::strategies::BreadthFirst`.
