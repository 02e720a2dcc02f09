//! Heuristic-guided search ("A*" in the solver's menu).

use super::{Outcome, Solution, Strategy};
use crate::heuristics::{Heuristic, Informed};
use crate::node::SearchTree;
use log::{debug, trace};
use std::collections::VecDeque;

/// Best-first search over a FIFO queue.
///
/// Each popped node is expanded, every admitted successor gets
/// f = g + h with the selected [`Heuristic`], and only the successors sharing
/// the lowest f among their siblings are queued, all of them, in generation
/// order. The queue itself is not ordered by f, so this is not textbook A*
/// and the returned path is not guaranteed to be the cheapest.
#[derive(Clone, Copy, Debug)]
pub struct BestFirst {
    heuristic: Heuristic,
}

impl BestFirst {
    const NAME: &'static str = "best-first";

    pub fn new(heuristic: Heuristic) -> Self {
        BestFirst { heuristic }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Runs the search, building nodes in the caller's `tree`.
    pub fn explore<S: Informed>(&self, tree: &mut SearchTree<S>, start: &S) -> Outcome<S> {
        let mut queue = VecDeque::from([tree.add_root(start.clone())]);
        let mut expanded = 0;

        while let Some(id) = queue.pop_front() {
            if tree.node(id).state().is_goal() {
                let solution = Solution::from_tree(tree, id, expanded);
                debug!(
                    "{} ({}): goal after {} expansions, cost {}",
                    Self::NAME,
                    self.heuristic,
                    expanded,
                    solution.cost
                );
                return Outcome::Solved(solution);
            }

            let children = tree.expand(id, |state| state.estimate(self.heuristic));
            expanded += 1;

            let Some(lowest) = children
                .iter()
                .map(|&child| tree.node(child).combined_cost())
                .min()
            else {
                continue;
            };
            trace!(
                "{}: node {} has {} admitted successors, lowest f = {}",
                Self::NAME,
                id,
                children.len(),
                lowest
            );
            queue.extend(
                children
                    .into_iter()
                    .filter(|&child| tree.node(child).combined_cost() == lowest),
            );
        }

        debug!("{}: queue exhausted after {} expansions", Self::NAME, expanded);
        Outcome::Exhausted { expanded }
    }
}

impl<S: Informed> Strategy<S> for BestFirst {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn search(&self, start: &S) -> Outcome<S> {
        self.explore(&mut SearchTree::new(), start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::assert_no_ancestor_repeats;
    use crate::puzzle::EightPuzzleState;
    use crate::state::State;
    use crate::strategies::test_support::assert_valid_path;

    fn board(tiles: [u8; 9]) -> EightPuzzleState {
        EightPuzzleState::new(tiles).unwrap()
    }

    #[test]
    fn test_one_slide_from_goal() {
        let start = board([1, 2, 3, 4, 5, 6, 7, 0, 8]);
        for heuristic in [Heuristic::OutOfPlace, Heuristic::Manhattan] {
            let mut tree = SearchTree::new();
            let solution = BestFirst::new(heuristic)
                .explore(&mut tree, &start)
                .into_solution()
                .unwrap();
            assert_valid_path(&solution, &start);
            assert_eq!(solution.path.len(), 2);
            assert_eq!(solution.cost, 9);
            assert_eq!(solution.expanded, 1);
        }
    }

    #[test]
    fn test_queues_only_lowest_siblings() {
        // From this board the goal (f = 9 + 0) beats both other successors
        // (f = 9 + 3), so exactly one child reaches the queue.
        let start = board([1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let mut tree = SearchTree::new();
        let root = tree.add_root(start.clone());
        let children = tree.expand(root, |s: &EightPuzzleState| s.out_of_place());
        let costs: Vec<_> = children
            .iter()
            .map(|&c| tree.node(c).combined_cost())
            .collect();
        assert_eq!(costs, vec![12, 12, 9]);

        let mut tree = SearchTree::new();
        BestFirst::new(Heuristic::OutOfPlace).explore(&mut tree, &start);
        assert_eq!(tree.len(), 4, "all successors are created, then filtered by f");
    }

    #[test]
    fn test_paths_are_valid_for_deeper_boards() {
        let boards = [
            [1, 2, 3, 4, 0, 6, 7, 5, 8],
            [1, 2, 3, 0, 4, 6, 7, 5, 8],
            [1, 2, 0, 4, 5, 3, 7, 8, 6],
            [0, 2, 3, 1, 4, 6, 7, 5, 8],
        ];
        for tiles in boards {
            let start = board(tiles);
            for heuristic in [Heuristic::OutOfPlace, Heuristic::Manhattan] {
                let mut tree = SearchTree::new();
                let solution = BestFirst::new(heuristic)
                    .explore(&mut tree, &start)
                    .into_solution()
                    .unwrap_or_else(|| panic!("{:?} unsolved with {}", tiles, heuristic));
                assert_valid_path(&solution, &start);
                assert_no_ancestor_repeats(&tree);
                let g: u32 = solution.path.iter().skip(1).map(State::cost).sum();
                assert_eq!(solution.cost, g);
            }
        }
    }

    #[test]
    fn test_paths_are_valid_for_scrambled_boards() {
        for seed in 0..20 {
            let start = EightPuzzleState::scrambled(seed, 10);
            for heuristic in [Heuristic::OutOfPlace, Heuristic::Manhattan] {
                let mut tree = SearchTree::new();
                let solution = BestFirst::new(heuristic)
                    .explore(&mut tree, &start)
                    .into_solution()
                    .unwrap_or_else(|| panic!("seed {} unsolved with {}", seed, heuristic));
                assert_valid_path(&solution, &start);
                assert_no_ancestor_repeats(&tree);
            }
        }
    }

    #[test]
    fn test_goal_start() {
        let goal = EightPuzzleState::goal();
        let solution = BestFirst::new(Heuristic::Manhattan)
            .search(&goal)
            .into_solution()
            .unwrap();
        assert_eq!(solution.path, vec![goal]);
        assert_eq!(solution.cost, 0);
    }
}
