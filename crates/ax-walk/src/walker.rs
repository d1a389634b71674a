#![forbid(unsafe_code)]

//! Bidirectional, restriction-aware tree walking.
//!
//! [`TreeWalker`] is a stateful cursor over an [`AxNode`] tree. Each call to
//! `next` takes one step in document order (forward) or its mirror
//! (backward) and updates the [`Phase`] classifying the new node relative to
//! the starting node. [`Restrictions`] prune subtrees (`leaf`), bound the
//! walk (`root`), and filter the yielded stream (`visit`).

use crate::node::AxNode;

/// Direction of travel through the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Document order: a node precedes its subtree.
    Forward,
    /// Mirror of document order.
    Backward,
}

/// Relationship between the walker's current node and its starting node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No step has been taken yet.
    #[default]
    Initial,
    /// The current node is inside the starting node's subtree.
    Descendant,
    /// The current node is a structural ancestor of the starting node.
    Ancestor,
    /// The current node is neither ancestor nor descendant of the start.
    Other,
}

type NodePredicate<'a, N> = Box<dyn Fn(&N) -> bool + 'a>;
type VisitFilter<'a, N> = Box<dyn FnMut(&N) -> bool + 'a>;

/// Optional predicates and flags restricting a walk.
///
/// Built in the builder style; the default restricts nothing: no leaf or
/// root nodes, every candidate passes the visit filter.
pub struct Restrictions<'a, N> {
    leaf: Option<NodePredicate<'a, N>>,
    root: Option<NodePredicate<'a, N>>,
    visit: Option<VisitFilter<'a, N>>,
    skip_initial_ancestry: bool,
    skip_initial_subtree: bool,
}

impl<N> Default for Restrictions<'_, N> {
    fn default() -> Self {
        Self {
            leaf: None,
            root: None,
            visit: None,
            skip_initial_ancestry: false,
            skip_initial_subtree: false,
        }
    }
}

impl<'a, N> Restrictions<'a, N> {
    /// Restrictions that restrict nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat matching nodes as leaves: the walker yields them but never
    /// descends into their children.
    #[must_use]
    pub fn leaf(mut self, pred: impl Fn(&N) -> bool + 'a) -> Self {
        self.leaf = Some(Box::new(pred));
        self
    }

    /// Bound the walk: stepping off a matching node ends the traversal.
    /// Walking *into* a root from below still yields it once.
    #[must_use]
    pub fn root(mut self, pred: impl Fn(&N) -> bool + 'a) -> Self {
        self.root = Some(Box::new(pred));
        self
    }

    /// Filter the yielded stream. The callback fires once per candidate
    /// node; returning `false` makes the walker keep stepping past it.
    #[must_use]
    pub fn visit(mut self, filter: impl FnMut(&N) -> bool + 'a) -> Self {
        self.visit = Some(Box::new(filter));
        self
    }

    /// Backward walks only: suppress nodes that are structural ancestors of
    /// the starting node. Suppressed nodes do not reach the visit filter.
    #[must_use]
    pub fn skip_initial_ancestry(mut self, skip: bool) -> Self {
        self.skip_initial_ancestry = skip;
        self
    }

    /// Forward walks only: do not descend into the starting node's subtree;
    /// the first step moves directly to its sibling or ancestor
    /// continuation.
    #[must_use]
    pub fn skip_initial_subtree(mut self, skip: bool) -> Self {
        self.skip_initial_subtree = skip;
        self
    }
}

/// A stateful cursor over an externally-owned tree.
///
/// Construction does not move the cursor; the first `next` call takes the
/// first step. Once the traversal is exhausted the walker stays exhausted.
pub struct TreeWalker<'a, N: AxNode> {
    node: Option<N>,
    phase: Phase,
    direction: Direction,
    initial: N,
    /// Next unvisited node on the starting node's ancestor chain. Only
    /// meaningful while moving backward.
    backward_ancestor: Option<N>,
    restrictions: Restrictions<'a, N>,
}

impl<'a, N: AxNode> TreeWalker<'a, N> {
    /// An unrestricted walker starting at `start`.
    #[must_use]
    pub fn new(start: N, direction: Direction) -> Self {
        Self::with_restrictions(start, direction, Restrictions::new())
    }

    /// A walker with the given restrictions.
    #[must_use]
    pub fn with_restrictions(
        start: N,
        direction: Direction,
        restrictions: Restrictions<'a, N>,
    ) -> Self {
        Self {
            node: Some(start.clone()),
            phase: Phase::Initial,
            direction,
            backward_ancestor: start.parent(),
            initial: start,
            restrictions,
        }
    }

    /// The walker's current node, or `None` once the traversal is
    /// exhausted.
    #[must_use]
    pub fn node(&self) -> Option<&N> {
        self.node.as_ref()
    }

    /// Classification of the current node relative to the starting node.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn is_leaf(&self, node: &N) -> bool {
        self.restrictions.leaf.as_deref().is_some_and(|p| p(node))
    }

    fn is_root(&self, node: &N) -> bool {
        self.restrictions.root.as_deref().is_some_and(|p| p(node))
    }

    fn passes_visit(&mut self, node: &N) -> bool {
        match self.restrictions.visit.as_deref_mut() {
            Some(filter) => filter(node),
            None => true,
        }
    }

    /// One pre-order step: first child unless pruned, otherwise the nearest
    /// following sibling of the node or one of its ancestors.
    fn step_forward(&mut self, node: &N) {
        if !self.is_leaf(node) {
            if let Some(first) = node.first_child() {
                if self.phase == Phase::Initial {
                    self.phase = Phase::Descendant;
                }
                if !(self.restrictions.skip_initial_subtree && self.phase == Phase::Descendant) {
                    self.node = Some(first);
                    return;
                }
            }
        }

        let mut search = node.clone();
        loop {
            // A sibling or parent move off the starting node leaves its
            // subtree.
            if search == self.initial {
                self.phase = Phase::Other;
            }
            if let Some(sibling) = search.next_sibling() {
                self.node = Some(sibling);
                return;
            }
            let Some(parent) = search.parent() else { break };
            if parent == self.initial {
                self.phase = Phase::Other;
            }
            // The walk is bounded by the nearest root-restricted ancestor.
            if self.is_root(&parent) {
                break;
            }
            search = parent;
        }
        self.node = None;
    }

    /// The mirror step: previous sibling's deepest last descendant,
    /// otherwise the parent.
    fn step_backward(&mut self, node: &N) {
        if let Some(sibling) = node.previous_sibling() {
            self.phase = Phase::Other;
            let mut target = sibling;
            while !self.is_leaf(&target) {
                match target.last_child() {
                    Some(last) => target = last,
                    None => break,
                }
            }
            self.node = Some(target);
            return;
        }

        let parent = node.parent();
        if let Some(p) = parent.as_ref() {
            if self.backward_ancestor.as_ref() == Some(p) {
                self.phase = Phase::Ancestor;
                self.backward_ancestor = p.parent();
            }
        }
        self.node = parent;
    }
}

impl<N: AxNode> Iterator for TreeWalker<'_, N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("tree_walk_step").entered();

        loop {
            let current = self.node.clone()?;
            // A root-restricted node is a traversal boundary: stepping off
            // it ends the walk. The starting node is exempt, so a walk may
            // begin at its own boundary and still cover that subtree.
            if self.phase != Phase::Initial && self.is_root(&current) {
                self.node = None;
                return None;
            }
            match self.direction {
                Direction::Forward => self.step_forward(&current),
                Direction::Backward => self.step_backward(&current),
            }
            let Some(next) = self.node.clone() else {
                return None;
            };
            // Ancestry suppression runs before the visit filter, so
            // suppressed ancestors never fire it.
            if self.restrictions.skip_initial_ancestry && self.phase == Phase::Ancestor {
                continue;
            }
            if !self.passes_visit(&next) {
                continue;
            }
            return Some(next);
        }
    }
}
