//! The capability set every searchable problem state provides.
//!
//! Strategies in [`crate::strategies`] are generic over [`State`] and never
//! look inside a concrete state. The 8-puzzle board in [`crate::puzzle`] is
//! the only production implementation.

use std::fmt;

/// Accumulated and estimated costs are whole numbers.
pub type Cost = u32;

/// Cost used by recursive best-first search for "no bound" and for
/// "this subtree has no solution".
pub const UNBOUNDED: Cost = Cost::MAX;

/// A node in a problem's state space.
///
/// Equality is structural: two states are equal when their full contents are
/// equal, independent of how they were reached.
pub trait State: Clone + PartialEq + fmt::Display {
    /// Returns `true` if this state is the problem's goal.
    fn is_goal(&self) -> bool;

    /// Every state reachable by one legal transition.
    ///
    /// The order is fixed for a given state. Strategies rely on it for
    /// tie-breaking, so implementations must not randomize it.
    fn successors(&self) -> Vec<Self>;

    /// State-intrinsic cost contribution, added to a node's path cost when
    /// the node is created. This is not a per-step unit cost.
    fn cost(&self) -> Cost;
}

/// Tiny domains used to exercise the strategies independently of the puzzle.
#[cfg(test)]
pub(crate) mod testing {
    use super::{Cost, State};
    use crate::heuristics::{Heuristic, Informed};
    use std::fmt;

    /// A position on the integer segment `0..=max`, moving one step left or
    /// right, with the goal at `target`. A `target` outside the segment makes
    /// the goal unreachable.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Line {
        pub pos: i32,
        pub max: i32,
        pub target: i32,
    }

    impl Line {
        pub fn new(pos: i32, max: i32, target: i32) -> Self {
            Line { pos, max, target }
        }
    }

    impl fmt::Display for Line {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "@{}", self.pos)
        }
    }

    impl State for Line {
        fn is_goal(&self) -> bool {
            self.pos == self.target
        }

        fn successors(&self) -> Vec<Self> {
            [self.pos - 1, self.pos + 1]
                .into_iter()
                .filter(|p| (0..=self.max).contains(p))
                .map(|pos| Line { pos, ..self.clone() })
                .collect()
        }

        fn cost(&self) -> Cost {
            1
        }
    }

    /// No guidance: informed strategies degrade to ordering by g.
    impl Informed for Line {
        fn estimate(&self, _heuristic: Heuristic) -> Cost {
            0
        }
    }
}
