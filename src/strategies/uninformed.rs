//! Depth-first and breadth-first search.
//!
//! Both run the same loop and differ only in which end of the frontier the
//! next node is taken from.

use super::{Outcome, Solution, Strategy};
use crate::node::{NodeId, SearchTree};
use crate::state::State;
use log::{debug, trace};
use std::collections::VecDeque;

trait Frontier {
    fn put(&mut self, id: NodeId);
    fn take(&mut self) -> Option<NodeId>;
}

// Stack: last in, first out.
impl Frontier for Vec<NodeId> {
    fn put(&mut self, id: NodeId) {
        self.push(id);
    }

    fn take(&mut self) -> Option<NodeId> {
        self.pop()
    }
}

// Queue: first in, first out.
impl Frontier for VecDeque<NodeId> {
    fn put(&mut self, id: NodeId) {
        self.push_back(id);
    }

    fn take(&mut self) -> Option<NodeId> {
        self.pop_front()
    }
}

fn drain<S, F>(name: &str, tree: &mut SearchTree<S>, start: &S, mut frontier: F) -> Outcome<S>
where
    S: State,
    F: Frontier,
{
    frontier.put(tree.add_root(start.clone()));
    let mut expanded = 0;

    while let Some(id) = frontier.take() {
        if tree.node(id).state().is_goal() {
            let solution = Solution::from_tree(tree, id, expanded);
            debug!(
                "{}: goal after {} expansions, {} moves, cost {}",
                name,
                expanded,
                solution.moves(),
                solution.cost
            );
            return Outcome::Solved(solution);
        }

        trace!("{}: expanding node {} (g = {})", name, id, tree.node(id).path_cost());
        for child in tree.expand(id, |_| 0) {
            frontier.put(child);
        }
        expanded += 1;
    }

    debug!("{}: frontier exhausted after {} expansions", name, expanded);
    Outcome::Exhausted { expanded }
}

/// Depth-first search with a LIFO stack.
///
/// Successors are pushed in generation order, so the last generated one is
/// explored first. There is no depth bound and no cost guarantee.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirst;

impl DepthFirst {
    const NAME: &'static str = "depth-first";

    /// Runs the search, building nodes in the caller's `tree`.
    pub fn explore<S: State>(&self, tree: &mut SearchTree<S>, start: &S) -> Outcome<S> {
        drain(Self::NAME, tree, start, Vec::new())
    }
}

impl<S: State> Strategy<S> for DepthFirst {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn search(&self, start: &S) -> Outcome<S> {
        self.explore(&mut SearchTree::new(), start)
    }
}

/// Breadth-first search with a FIFO queue.
///
/// Finds a path with the fewest moves among those the ancestor-chain filter
/// allows. With the puzzle's non-uniform state cost this is not necessarily
/// the cheapest path.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirst;

impl BreadthFirst {
    const NAME: &'static str = "breadth-first";

    /// Runs the search, building nodes in the caller's `tree`.
    pub fn explore<S: State>(&self, tree: &mut SearchTree<S>, start: &S) -> Outcome<S> {
        drain(Self::NAME, tree, start, VecDeque::new())
    }
}

impl<S: State> Strategy<S> for BreadthFirst {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn search(&self, start: &S) -> Outcome<S> {
        self.explore(&mut SearchTree::new(), start)
    }
}
