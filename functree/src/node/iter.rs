use super::Node;

/// An iterator that traverses a tree of nodes in pre-order: a node first, then its left subtree,
/// then its right subtree.
///
/// This iterator is created by [`Node::iter`].
#[derive(Debug, Clone)]
pub struct NodeIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> NodeIter<'a> {
    /// Creates a new iterator that traverses the tree rooted at `node` in pre-order.
    pub fn new(node: &'a Node) -> Self {
        Self { stack: vec![node] }
    }
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // push right first so the left subtree is visited first
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }

        Some(node)
    }
}
