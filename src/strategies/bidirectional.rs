//! Bidirectional breadth-first search.

use super::{Outcome, Solution, Strategy};
use crate::node::{NodeId, SearchTree};
use crate::state::State;
use log::{debug, trace};
use std::collections::VecDeque;

/// Breadth-first search grown from both ends at once.
///
/// A forward queue starts at the start state and a backward queue at the goal
/// state handed to [`Bidirectional::new`]. Each round pops one node from each
/// non-empty queue, forward first. The search stops as soon as a popped node
/// reaches the far end, or its state is waiting in the opposite queue.
///
/// Backward expansion uses the same successor function as forward expansion,
/// so the problem's moves must be reversible for the joined path to be valid.
#[derive(Clone, Debug)]
pub struct Bidirectional<S> {
    goal: S,
}

impl<S: State> Bidirectional<S> {
    const NAME: &'static str = "bidirectional";

    pub fn new(goal: S) -> Self {
        Bidirectional { goal }
    }

    /// Runs the search, building both halves in the caller's `tree`.
    pub fn explore(&self, tree: &mut SearchTree<S>, start: &S) -> Outcome<S> {
        let forward_root = tree.add_root(start.clone());
        let backward_root = tree.add_root(self.goal.clone());
        let mut forward = VecDeque::from([forward_root]);
        let mut backward = VecDeque::from([backward_root]);
        let mut expanded = 0;

        while !(forward.is_empty() && backward.is_empty()) {
            if let Some(id) = forward.pop_front() {
                let state = tree.node(id).state();
                if state.is_goal() {
                    return self.joined(tree, id, backward_root, expanded);
                }
                if let Some(meet) = find_state(tree, &backward, state) {
                    return self.joined(tree, id, meet, expanded);
                }
                trace!("{}: forward expansion of node {}", Self::NAME, id);
                forward.extend(tree.expand(id, |_| 0));
                expanded += 1;
            }

            if let Some(id) = backward.pop_front() {
                let state = tree.node(id).state();
                if state == start {
                    return self.joined(tree, forward_root, id, expanded);
                }
                if let Some(meet) = find_state(tree, &forward, state) {
                    return self.joined(tree, meet, id, expanded);
                }
                trace!("{}: backward expansion of node {}", Self::NAME, id);
                backward.extend(tree.expand(id, |_| 0));
                expanded += 1;
            }
        }

        debug!("{}: both frontiers exhausted after {} expansions", Self::NAME, expanded);
        Outcome::Exhausted { expanded }
    }

    /// Joins the forward path to `forward` with the reversed backward path to
    /// `backward`. Both nodes hold the same state unless one of them is a root
    /// that already sits at its far end.
    ///
    /// The reported cost is the sum of `cost()` over every state after the
    /// start. The backward g counts the meeting state instead of the goal, so
    /// the goal's cost takes its place.
    fn joined(&self, tree: &SearchTree<S>, forward: NodeId, backward: NodeId, expanded: u64) -> Outcome<S> {
        let mut path = tree.path_to(forward);
        let meeting = path.len() - 1;
        path.extend(tree.path_to(backward).into_iter().rev().skip(1));

        let backward_node = tree.node(backward);
        let cost = tree.node(forward).path_cost() + backward_node.path_cost() + self.goal.cost()
            - backward_node.state().cost();
        debug!(
            "{}: halves met at step {} after {} expansions, cost {}",
            Self::NAME,
            meeting,
            expanded,
            cost
        );
        Outcome::Solved(Solution {
            path,
            cost,
            expanded,
            meeting: Some(meeting),
        })
    }
}

impl<S: State> Strategy<S> for Bidirectional<S> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn search(&self, start: &S) -> Outcome<S> {
        self.explore(&mut SearchTree::new(), start)
    }
}

/// First node in `queue` whose state equals `state`.
fn find_state<S: State>(tree: &SearchTree<S>, queue: &VecDeque<NodeId>, state: &S) -> Option<NodeId> {
    queue
        .iter()
        .copied()
        .find(|&id| tree.node(id).state() == state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::assert_no_ancestor_repeats;
    use crate::puzzle::EightPuzzleState;
    use crate::state::testing::Line;
    use crate::strategies::test_support::assert_valid_path;

    fn puzzle_search() -> Bidirectional<EightPuzzleState> {
        Bidirectional::new(EightPuzzleState::goal())
    }

    #[test]
    fn test_goal_start() {
        let goal = EightPuzzleState::goal();
        let solution = puzzle_search().search(&goal).into_solution().unwrap();
        assert_eq!(solution.path, vec![goal]);
        assert_eq!(solution.cost, 0);
        assert_eq!(solution.meeting, Some(0));
    }

    #[test]
    fn test_backward_pop_meets_forward_queue() {
        // Round one expands the start, then the backward root finds the goal
        // waiting in the forward queue.
        let start = EightPuzzleState::new([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        let solution = puzzle_search().search(&start).into_solution().unwrap();
        assert_valid_path(&solution, &start);
        assert_eq!(solution.path.len(), 2);
        assert_eq!(solution.meeting, Some(1));
        assert_eq!(solution.cost, EightPuzzleState::goal().cost());
        assert_eq!(solution.expanded, 1);
    }

    #[test]
    fn test_paths_are_valid_for_deeper_boards() {
        let boards = [
            [1, 2, 3, 4, 0, 6, 7, 5, 8],
            [1, 2, 3, 0, 4, 6, 7, 5, 8],
            [0, 2, 3, 1, 4, 6, 7, 5, 8],
            [1, 2, 0, 4, 5, 3, 7, 8, 6],
        ];
        for tiles in boards {
            let start = EightPuzzleState::new(tiles).unwrap();
            let mut tree = SearchTree::new();
            let solution = puzzle_search()
                .explore(&mut tree, &start)
                .into_solution()
                .unwrap();
            assert_valid_path(&solution, &start);
            assert_no_ancestor_repeats(&tree);
            let meeting = solution.meeting.unwrap();
            assert!(meeting < solution.path.len());
        }
    }

    #[test]
    fn test_cost_matches_joined_path_when_meeting_mid_way() {
        // (board, moves, meeting index, cost)
        let cases = [
            ([1, 3, 6, 5, 2, 8, 4, 7, 0], 8, 4, 90),
            ([1, 2, 3, 4, 0, 8, 7, 6, 5], 6, 3, 68),
        ];
        for (tiles, moves, meeting, cost) in cases {
            let start = EightPuzzleState::new(tiles).unwrap();
            let solution = puzzle_search().search(&start).into_solution().unwrap();
            assert_valid_path(&solution, &start);
            assert_eq!(solution.moves(), moves, "{:?}", tiles);
            assert_eq!(solution.meeting, Some(meeting), "{:?}", tiles);
            let path_cost: u32 = solution.path.iter().skip(1).map(State::cost).sum();
            assert_eq!(solution.cost, path_cost, "{:?}", tiles);
            assert_eq!(solution.cost, cost, "{:?}", tiles);
        }
    }

    #[test]
    fn test_cost_matches_path_on_scrambled_boards() {
        for seed in 0..40 {
            let start = EightPuzzleState::scrambled(seed, 8);
            let solution = puzzle_search().search(&start).into_solution().unwrap();
            let path_cost: u32 = solution.path.iter().skip(1).map(State::cost).sum();
            assert_eq!(solution.cost, path_cost, "seed {}", seed);
        }
    }

    #[test]
    fn test_line_meets_in_the_middle() {
        let start = Line::new(0, 8, 6);
        let search = Bidirectional::new(Line::new(6, 8, 6));
        let solution = search.search(&start).into_solution().unwrap();
        assert_valid_path(&solution, &start);
        assert_eq!(solution.moves(), 6);
        assert_eq!(
            solution.cost, 6,
            "each half contributes one unit per move it made"
        );
    }

    #[test]
    fn test_disconnected_goal_exhausts_both_frontiers() {
        let start = Line::new(0, 2, 10);
        let search = Bidirectional::new(Line::new(10, 2, 10));
        let outcome = search.search(&start);
        assert_eq!(outcome, Outcome::Exhausted { expanded: 4 });
    }
}
