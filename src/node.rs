//! Search-tree bookkeeping shared by the frontier-based strategies.
//!
//! Nodes live in an arena ([`SearchTree`]) and refer to their parent by
//! [`NodeId`]. A parent id is fixed when the node is created, so the parent
//! chain of every node is finite and acyclic, even though the same *state* may
//! appear at many nodes.

use crate::state::{Cost, State};

/// Stable index of a node inside its [`SearchTree`].
pub type NodeId = usize;

/// A state together with how the search reached it.
#[derive(Clone, Debug)]
pub struct SearchNode<S> {
    state: S,
    parent: Option<NodeId>,
    path_cost: Cost,
    heuristic_cost: Cost,
    combined_cost: Cost,
}

impl<S> SearchNode<S> {
    pub fn state(&self) -> &S {
        &self.state
    }

    /// `None` for a root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// g(n): accumulated cost from the root.
    pub fn path_cost(&self) -> Cost {
        self.path_cost
    }

    /// h(n): estimate to the goal, `0` for uninformed strategies.
    pub fn heuristic_cost(&self) -> Cost {
        self.heuristic_cost
    }

    /// f(n) = g(n) + h(n).
    pub fn combined_cost(&self) -> Cost {
        self.combined_cost
    }
}

/// Returns `true` if `candidate` equals any of the given ancestor states.
///
/// This only guards against a node repeating a state on its own path to the
/// root. It is not a closed set: the same state reached through a different
/// path is admitted and expanded again.
pub fn is_ancestor_repeat<'a, S>(candidate: &S, ancestors: impl IntoIterator<Item = &'a S>) -> bool
where
    S: State + 'a,
{
    ancestors.into_iter().any(|ancestor| ancestor == candidate)
}

/// Arena owning every node a search has created.
///
/// A tree may hold several roots; bidirectional search grows one from the
/// start and one from the goal.
#[derive(Debug)]
pub struct SearchTree<S> {
    nodes: Vec<SearchNode<S>>,
}

impl<S: State> Default for SearchTree<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> SearchTree<S> {
    pub fn new() -> Self {
        SearchTree { nodes: Vec::new() }
    }

    /// Adds a parentless node with zero costs.
    pub fn add_root(&mut self, state: S) -> NodeId {
        self.push(SearchNode {
            state,
            parent: None,
            path_cost: 0,
            heuristic_cost: 0,
            combined_cost: 0,
        })
    }

    /// # Panics
    /// Panics if `id` was not issued by this tree.
    pub fn node(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode<S>)> {
        self.nodes.iter().enumerate()
    }

    /// Walks from `id` up to its root, starting with `id` itself.
    pub fn lineage(&self, id: NodeId) -> Lineage<'_, S> {
        Lineage {
            tree: self,
            next: Some(id),
        }
    }

    /// Whether a child of `parent` holding `state` passes the ancestor-chain
    /// filter.
    pub fn admits(&self, parent: NodeId, state: &S) -> bool {
        !is_ancestor_repeat(state, self.lineage(parent).map(SearchNode::state))
    }

    /// Creates a child of `parent` if `state` passes the ancestor-chain filter.
    ///
    /// The child's path cost is the parent's plus `state.cost()`.
    pub fn add_child(&mut self, parent: NodeId, state: S, heuristic_cost: Cost) -> Option<NodeId> {
        if !self.admits(parent, &state) {
            return None;
        }
        let path_cost = self.nodes[parent].path_cost + state.cost();
        Some(self.push(SearchNode {
            state,
            parent: Some(parent),
            path_cost,
            heuristic_cost,
            combined_cost: path_cost + heuristic_cost,
        }))
    }

    /// Creates a child for every successor of `parent` that passes the
    /// ancestor-chain filter, in generation order.
    ///
    /// `heuristic` supplies h(n) for each successor state.
    pub fn expand<H>(&mut self, parent: NodeId, heuristic: H) -> Vec<NodeId>
    where
        H: Fn(&S) -> Cost,
    {
        let successors = self.nodes[parent].state.successors();
        successors
            .into_iter()
            .filter_map(|state| {
                let h = heuristic(&state);
                self.add_child(parent, state, h)
            })
            .collect()
    }

    /// States from the root of `id`'s tree down to `id`.
    pub fn path_to(&self, id: NodeId) -> Vec<S> {
        let mut path: Vec<S> = self.lineage(id).map(|node| node.state.clone()).collect();
        path.reverse();
        path
    }

    fn push(&mut self, node: SearchNode<S>) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}

/// Iterator over a node and its ancestors, see [`SearchTree::lineage`].
pub struct Lineage<'a, S> {
    tree: &'a SearchTree<S>,
    next: Option<NodeId>,
}

impl<'a, S> Iterator for Lineage<'a, S> {
    type Item = &'a SearchNode<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.tree.nodes[self.next?];
        self.next = node.parent;
        Some(node)
    }
}

/// Asserts that no node in `tree` repeats a state held by one of its ancestors.
#[cfg(test)]
pub(crate) fn assert_no_ancestor_repeats<S: State + std::fmt::Debug>(tree: &SearchTree<S>) {
    for (id, node) in tree.iter() {
        if let Some(parent) = node.parent() {
            assert!(
                tree.lineage(parent).all(|ancestor| ancestor.state() != node.state()),
                "node {} repeats an ancestor state {:?}",
                id,
                node.state()
            );
        }
    }
}
