//! Recursive best-first search (RBFS).
//!
//! Only the current path is kept in memory: the call stack holds one list of
//! sibling candidates per level, and the trail of ancestor states serves the
//! ancestor-chain filter. When a subtree turns out worse than its static f,
//! the f of its root candidate is revised upward so the search can come back
//! to it later without re-deriving the bound.

use super::{Outcome, Solution, Strategy};
use crate::heuristics::{Heuristic, Informed};
use crate::node::is_ancestor_repeat;
use crate::state::{Cost, UNBOUNDED};
use log::{debug, trace};

/// A candidate on the active path of a recursive best-first search.
///
/// Unlike [`crate::node::SearchNode`], its combined cost can be revised, and it
/// carries the f-limit it was last explored under.
#[derive(Clone, Debug)]
pub struct RbfsNode<S> {
    state: S,
    path_cost: Cost,
    base_cost: Cost,
    combined_cost: Cost,
    f_limit: Cost,
}

impl<S: Informed> RbfsNode<S> {
    fn root(state: S) -> Self {
        RbfsNode {
            state,
            path_cost: 0,
            base_cost: 0,
            combined_cost: 0,
            f_limit: UNBOUNDED,
        }
    }

    fn child(&self, state: S, heuristic: Heuristic) -> Self {
        let path_cost = self.path_cost + state.cost();
        let f = path_cost + state.estimate(heuristic);
        RbfsNode {
            state,
            path_cost,
            base_cost: f,
            combined_cost: f,
            f_limit: UNBOUNDED,
        }
    }
}

impl<S> RbfsNode<S> {
    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn path_cost(&self) -> Cost {
        self.path_cost
    }

    /// The f computed when the candidate was generated.
    pub fn base_cost(&self) -> Cost {
        self.base_cost
    }

    /// The current, possibly revised, f.
    pub fn combined_cost(&self) -> Cost {
        self.combined_cost
    }

    pub fn f_limit(&self) -> Cost {
        self.f_limit
    }
}

enum Descent<S> {
    Found { path: Vec<S>, cost: Cost },
    /// The subtree's best f exceeded the limit; carries that f.
    Revised(Cost),
}

struct Walk<'o, S> {
    trail: Vec<S>,
    expanded: u64,
    observer: Option<&'o mut dyn FnMut(&RbfsNode<S>, Cost)>,
}

/// Memory-bounded best-first search.
///
/// Candidates get f = g + h with the configured heuristic (out-of-place unless
/// [`RecursiveBestFirst::with_heuristic`] says otherwise). The best candidate
/// is explored while its f stays within the inherited limit, with the limit
/// tightened to the second-best sibling's f.
#[derive(Clone, Copy, Debug)]
pub struct RecursiveBestFirst {
    heuristic: Heuristic,
}

impl Default for RecursiveBestFirst {
    fn default() -> Self {
        Self::new()
    }
}

impl RecursiveBestFirst {
    const NAME: &'static str = "recursive-best-first";

    pub fn new() -> Self {
        Self::with_heuristic(Heuristic::OutOfPlace)
    }

    pub fn with_heuristic(heuristic: Heuristic) -> Self {
        RecursiveBestFirst { heuristic }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Runs the search, calling `observer` with each candidate and the value
    /// its f is about to be revised to.
    pub fn search_observed<S: Informed>(
        &self,
        start: &S,
        observer: &mut dyn FnMut(&RbfsNode<S>, Cost),
    ) -> Outcome<S> {
        self.run(start, Some(observer))
    }

    fn run<S: Informed>(
        &self,
        start: &S,
        observer: Option<&mut dyn FnMut(&RbfsNode<S>, Cost)>,
    ) -> Outcome<S> {
        let mut walk = Walk {
            trail: Vec::new(),
            expanded: 0,
            observer,
        };
        let root = RbfsNode::root(start.clone());

        match self.descend(&root, &mut walk) {
            Descent::Found { path, cost } => {
                debug!(
                    "{}: goal after {} expansions, cost {}",
                    Self::NAME,
                    walk.expanded,
                    cost
                );
                Outcome::Solved(Solution {
                    path,
                    cost,
                    expanded: walk.expanded,
                    meeting: None,
                })
            }
            Descent::Revised(_) => {
                debug!("{}: no solution after {} expansions", Self::NAME, walk.expanded);
                Outcome::Exhausted {
                    expanded: walk.expanded,
                }
            }
        }
    }

    fn descend<S: Informed>(&self, node: &RbfsNode<S>, walk: &mut Walk<'_, S>) -> Descent<S> {
        if node.state.is_goal() {
            let mut path = walk.trail.clone();
            path.push(node.state.clone());
            return Descent::Found {
                path,
                cost: node.path_cost,
            };
        }

        walk.trail.push(node.state.clone());
        walk.expanded += 1;

        let mut candidates: Vec<RbfsNode<S>> = node
            .state
            .successors()
            .into_iter()
            .filter(|s| !is_ancestor_repeat(s, &walk.trail))
            .map(|s| node.child(s, self.heuristic))
            .collect();
        if candidates.is_empty() {
            walk.trail.pop();
            return Descent::Revised(UNBOUNDED);
        }
        candidates.sort_by_key(|c| c.combined_cost);

        while candidates[0].combined_cost <= node.f_limit && candidates[0].combined_cost < UNBOUNDED {
            let alternative = candidates
                .get(1)
                .map_or(node.f_limit, |c| c.combined_cost.min(node.f_limit));
            candidates[0].f_limit = alternative;

            match self.descend(&candidates[0], walk) {
                found @ Descent::Found { .. } => return found,
                Descent::Revised(f) => {
                    trace!(
                        "{}: revising f {} -> {} at depth {}",
                        Self::NAME,
                        candidates[0].combined_cost,
                        f,
                        walk.trail.len()
                    );
                    if let Some(observer) = walk.observer.as_deref_mut() {
                        observer(&candidates[0], f);
                    }
                    candidates[0].combined_cost = f;
                }
            }
            candidates.sort_by_key(|c| c.combined_cost);
        }

        walk.trail.pop();
        Descent::Revised(candidates[0].combined_cost)
    }
}

impl<S: Informed> Strategy<S> for RecursiveBestFirst {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn search(&self, start: &S) -> Outcome<S> {
        self.run(start, None)
    }
}
