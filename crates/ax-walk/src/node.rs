#![forbid(unsafe_code)]

//! The read-only node surface a host tree exposes to the walker.

/// Handle to a node in an externally-owned tree.
///
/// Implementations are cheap-to-clone handles (reference-counted pointers,
/// arena indices) whose equality is node identity, not structural equality.
/// The walker never mutates the tree through this trait; callers must not
/// mutate the tree while a walk is in progress.
pub trait AxNode: Clone + PartialEq {
    /// The node's parent, or `None` at the tree root.
    fn parent(&self) -> Option<Self>;

    /// First child in document order.
    fn first_child(&self) -> Option<Self>;

    /// Last child in document order.
    fn last_child(&self) -> Option<Self>;

    /// Next sibling under the same parent.
    fn next_sibling(&self) -> Option<Self>;

    /// Previous sibling under the same parent.
    fn previous_sibling(&self) -> Option<Self>;

    /// Iterate the node's children in document order.
    fn children(&self) -> Children<Self> {
        Children {
            next: self.first_child(),
        }
    }
}

/// Iterator over a node's direct children, driven by the sibling chain.
#[derive(Debug, Clone)]
pub struct Children<N> {
    next: Option<N>,
}

impl<N: AxNode> Iterator for Children<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let current = self.next.take()?;
        self.next = current.next_sibling();
        Some(current)
    }
}
