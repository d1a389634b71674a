#![forbid(unsafe_code)]

//! Walking an accessibility node tree.
//!
//! Hosts expose their tree through the read-only [`AxNode`] capability
//! trait: parent, ordered children, and sibling accessors on a cheap-to-clone
//! node handle. [`TreeWalker`] steps through such a tree one node at a time,
//! in document order or its mirror, and classifies every step relative to
//! the starting node via [`Phase`].
//!
//! Walks can be restricted without touching the tree itself:
//! [`Restrictions`] carries optional `leaf` and `root` predicates (prune a
//! subtree, bound the walk) and a `visit` filter over the yielded stream,
//! plus flags to skip the starting node's own subtree or ancestry.
//!
//! The walker never mutates the tree. Exhaustion is reported as `None`
//! rather than an error; there is no separate error channel.

pub mod node;
pub mod walker;

pub use node::{AxNode, Children};
pub use walker::{Direction, Phase, Restrictions, TreeWalker};
