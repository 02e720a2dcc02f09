//! The five search strategies and the result type they share.
//!
//! Every strategy is generic over [`State`] and reports either a
//! [`Solution`] or [`Outcome::Exhausted`]. Nothing here prints or exits; the
//! binaries decide how to present an outcome.
//!
//! All strategies use the same duplicate policy: a successor is dropped only
//! when it repeats a state on its own path to the root (see
//! [`crate::node::is_ancestor_repeat`]).

mod best_first;
mod bidirectional;
mod recursive_best_first;
mod uninformed;

pub use best_first::BestFirst;
pub use bidirectional::Bidirectional;
pub use recursive_best_first::{RbfsNode, RecursiveBestFirst};
pub use uninformed::{BreadthFirst, DepthFirst};

use crate::node::{NodeId, SearchTree};
use crate::state::{Cost, State};
use std::fmt;

/// A search algorithm over states of type `S`.
pub trait Strategy<S: State> {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Runs the search from `start` to completion.
    fn search(&self, start: &S) -> Outcome<S>;
}

/// A path from the start state to a goal state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<S> {
    /// States from start to goal, both included.
    pub path: Vec<S>,
    /// Accumulated path cost g of the goal end of the path.
    pub cost: Cost,
    /// Number of nodes whose successors were generated.
    pub expanded: u64,
    /// For bidirectional search, the index in `path` where the forward and
    /// backward halves meet.
    pub meeting: Option<usize>,
}

impl<S: State> Solution<S> {
    /// Rebuilds the path from `tree`'s root to `goal`.
    pub(crate) fn from_tree(tree: &SearchTree<S>, goal: NodeId, expanded: u64) -> Self {
        Solution {
            path: tree.path_to(goal),
            cost: tree.node(goal).path_cost(),
            expanded,
            meeting: None,
        }
    }

    /// Number of moves, one less than the number of states.
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl<S: State> fmt::Display for Solution<S> {
    /// Every state followed by a blank line, then the total cost.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in &self.path {
            writeln!(f, "{}", state)?;
        }
        write!(f, "The cost was: {}", self.cost)
    }
}

/// How a search ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<S> {
    Solved(Solution<S>),
    /// The frontier emptied without reaching a goal.
    Exhausted { expanded: u64 },
}

impl<S> Outcome<S> {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }

    pub fn solution(&self) -> Option<&Solution<S>> {
        match self {
            Outcome::Solved(solution) => Some(solution),
            Outcome::Exhausted { .. } => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution<S>> {
        match self {
            Outcome::Solved(solution) => Some(solution),
            Outcome::Exhausted { .. } => None,
        }
    }

    pub fn expanded(&self) -> u64 {
        match self {
            Outcome::Solved(solution) => solution.expanded,
            Outcome::Exhausted { expanded } => *expanded,
        }
    }
}

impl<S: State> fmt::Display for Outcome<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Solved(solution) => write!(f, "{}", solution),
            Outcome::Exhausted { .. } => write!(f, "Error! No solution found!"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::EightPuzzleState;

    #[test]
    fn test_solution_display() {
        let start = EightPuzzleState::new([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        let solution = Solution {
            path: vec![start, EightPuzzleState::goal()],
            cost: 9,
            expanded: 1,
            meeting: None,
        };
        let expected = "7 | 0 | 8\n---------\n4 | 5 | 6\n---------\n1 | 2 | 3\n\n\
                        7 | 8 | 0\n---------\n4 | 5 | 6\n---------\n1 | 2 | 3\n\n\
                        The cost was: 9";
        assert_eq!(solution.to_string(), expected);
        assert_eq!(solution.moves(), 1);
    }

    #[test]
    fn test_exhausted_display() {
        let outcome: Outcome<EightPuzzleState> = Outcome::Exhausted { expanded: 3 };
        assert_eq!(outcome.to_string(), "Error! No solution found!");
        assert_eq!(outcome.expanded(), 3);
        assert!(outcome.solution().is_none());
    }
}
