//! Strategy selection and dispatch for the 8-puzzle.
//!
//! The binaries hand user input to [`StrategyKind::from_str`] and then to
//! [`solve`]; everything else in the crate is independent of how a strategy
//! was chosen.

use crate::error::SolverError;
use crate::heuristics::Heuristic;
use crate::puzzle::EightPuzzleState;
use crate::strategies::{
    BestFirst, Bidirectional, BreadthFirst, DepthFirst, Outcome, RecursiveBestFirst, Strategy,
};
use log::info;
use std::fmt;
use std::str::FromStr;

/// The strategies a user can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    DepthFirst,
    BreadthFirst,
    Bidirectional,
    /// Listed in the menu but has no implementation; [`solve`] rejects it.
    UniformCost,
    BestFirst(Heuristic),
    RecursiveBestFirst,
}

impl StrategyKind {
    /// Every selectable strategy, in menu order, followed by the
    /// Manhattan-distance variant of best-first that is only reachable by name.
    pub const ALL: [StrategyKind; 7] = [
        StrategyKind::DepthFirst,
        StrategyKind::BreadthFirst,
        StrategyKind::Bidirectional,
        StrategyKind::UniformCost,
        StrategyKind::BestFirst(Heuristic::OutOfPlace),
        StrategyKind::RecursiveBestFirst,
        StrategyKind::BestFirst(Heuristic::Manhattan),
    ];

    /// Short code accepted by [`StrategyKind::from_str`].
    pub fn code(&self) -> &'static str {
        match self {
            StrategyKind::DepthFirst => "dfs",
            StrategyKind::BreadthFirst => "bfs",
            StrategyKind::Bidirectional => "bds",
            StrategyKind::UniformCost => "ucs",
            StrategyKind::BestFirst(Heuristic::OutOfPlace) => "aso",
            StrategyKind::BestFirst(Heuristic::Manhattan) => "asm",
            StrategyKind::RecursiveBestFirst => "rbfs",
        }
    }

    /// Builds the strategy, or reports that it has no implementation.
    pub fn build(&self) -> Result<Box<dyn Strategy<EightPuzzleState>>, SolverError> {
        Ok(match self {
            StrategyKind::DepthFirst => Box::new(DepthFirst),
            StrategyKind::BreadthFirst => Box::new(BreadthFirst),
            StrategyKind::Bidirectional => Box::new(Bidirectional::new(EightPuzzleState::goal())),
            StrategyKind::UniformCost => return Err(SolverError::NotImplemented(self.code())),
            StrategyKind::BestFirst(heuristic) => Box::new(BestFirst::new(*heuristic)),
            StrategyKind::RecursiveBestFirst => Box::new(RecursiveBestFirst::new()),
        })
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for StrategyKind {
    type Err = SolverError;

    /// Accepts a strategy code (case-insensitive) or its number in the
    /// interactive menu.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::solver::StrategyKind;
    /// use eight_puzzle_solver::heuristics::Heuristic;
    ///
    /// assert_eq!("bfs".parse(), Ok(StrategyKind::BreadthFirst));
    /// assert_eq!("5".parse(), Ok(StrategyKind::BestFirst(Heuristic::OutOfPlace)));
    /// assert!("7".parse::<StrategyKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "1" | "dfs" => StrategyKind::DepthFirst,
            "2" | "bfs" => StrategyKind::BreadthFirst,
            "3" | "bds" => StrategyKind::Bidirectional,
            "4" | "ucs" => StrategyKind::UniformCost,
            "5" | "aso" => StrategyKind::BestFirst(Heuristic::OutOfPlace),
            "asm" => StrategyKind::BestFirst(Heuristic::Manhattan),
            "6" | "rbfs" => StrategyKind::RecursiveBestFirst,
            _ => return Err(SolverError::UnknownStrategy(s.trim().to_string())),
        };
        Ok(kind)
    }
}

/// Runs the selected strategy from `start`.
///
/// # Errors
/// `NotImplemented` for [`StrategyKind::UniformCost`]. Failing to find a
/// path is not an error; it is reported as [`Outcome::Exhausted`].
pub fn solve(
    start: &EightPuzzleState,
    kind: StrategyKind,
) -> Result<Outcome<EightPuzzleState>, SolverError> {
    let strategy = kind.build()?;
    info!("solving with {} ({})", strategy.name(), kind);
    let outcome = strategy.search(start);
    info!(
        "{} finished: solved = {}, expanded = {}",
        strategy.name(),
        outcome.is_solved(),
        outcome.expanded()
    );
    Ok(outcome)
}
