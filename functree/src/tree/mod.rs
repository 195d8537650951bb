//! A facade over a generated [`Node`] tree, adding identifiers, parent / sibling links, levels
//! and rendering.
//!
//! Nodes own their children, so the links pointing up the tree are kept in a side table indexed
//! by [`NodeId`]. Ids are assigned in pre-order, the same order [`FunctionTree::traverse`]
//! visits the nodes in.

use crate::{fmt::Latex, node::{Node, NodeKind}, simplify::simplify_tree};
use std::{collections::BTreeMap, fmt};

/// Identifies a node within a [`FunctionTree`]. The root is always id `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root of every tree.
    pub const ROOT: NodeId = NodeId(0);

    /// The position of the node in pre-order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Links and height of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
    height: usize,
}

/// A function tree with indexed links between its nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionTree {
    root: Node,
    slots: Vec<Slot>,
}

impl FunctionTree {
    /// Wraps the given root node, indexing every node of the tree.
    pub fn new(root: Node) -> Self {
        let mut slots = Vec::with_capacity(root.len());
        index(&root, None, 1, &mut slots);
        Self { root, slots }
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Unwraps the tree into its root node.
    pub fn into_root(self) -> Node {
        self.root
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; a tree contains at least its root.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the node with the given id, if it is part of this tree.
    pub fn get(&self, id: NodeId) -> Option<TreeNode<'_>> {
        self.slots.get(id.0)?;

        // ids are pre-order, so the right subtree of a node holds exactly the ids from its right
        // child up to the end of the node's own subtree
        let (mut current, mut node) = (NodeId::ROOT, &self.root);
        while current != id {
            let slot = self.slots[current.0];
            match slot.right {
                Some(right) if id >= right => {
                    current = right;
                    node = node.right()?;
                },
                _ => {
                    current = slot.left?;
                    node = node.left()?;
                },
            }
        }

        Some(TreeNode { tree: self, id, node })
    }

    /// Returns an iterator over every node of the tree in pre-order: a node, then its left
    /// subtree, then its right subtree.
    pub fn traverse(&self) -> impl Iterator<Item = TreeNode<'_>> + '_ {
        self.root
            .iter()
            .enumerate()
            .map(move |(index, node)| TreeNode { tree: self, id: NodeId(index), node })
    }

    /// Groups the nodes of the tree by their height. Each group lists its nodes in traversal
    /// order.
    pub fn levels(&self) -> BTreeMap<usize, Vec<TreeNode<'_>>> {
        let mut levels = BTreeMap::<usize, Vec<_>>::new();
        for node in self.traverse() {
            levels.entry(node.height()).or_default().push(node);
        }
        levels
    }

    /// The height of the tree, which is the height of its deepest node.
    pub fn height(&self) -> usize {
        self.levels().keys().next_back().copied().unwrap_or(1)
    }

    /// Renders the whole tree as LaTeX.
    pub fn render(&self) -> String {
        self.root.as_display().to_string()
    }

    /// Returns a new tree in which every operator subtree that can be reduced has been reduced.
    pub fn simplified(&self) -> FunctionTree {
        FunctionTree::new(simplify_tree(&self.root))
    }
}

/// Assigns ids to `node` and its descendants in pre-order, returning the id of `node`.
fn index(node: &Node, parent: Option<NodeId>, height: usize, slots: &mut Vec<Slot>) -> NodeId {
    let id = NodeId(slots.len());
    slots.push(Slot { parent, left: None, right: None, height });

    let left = node.left().map(|left| index(left, Some(id), height + 1, slots));
    let right = node.right().map(|right| index(right, Some(id), height + 1, slots));
    slots[id.0].left = left;
    slots[id.0].right = right;

    id
}

impl From<Node> for FunctionTree {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}

/// Formats the whole tree as plain text.
impl fmt::Display for FunctionTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

impl Latex for FunctionTree {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.root.fmt_latex(f)
    }
}

/// A handle to a node within a [`FunctionTree`].
#[derive(Debug, Clone, Copy)]
pub struct TreeNode<'a> {
    tree: &'a FunctionTree,
    id: NodeId,
    node: &'a Node,
}

impl<'a> TreeNode<'a> {
    fn slot(&self) -> Slot {
        self.tree.slots[self.id.0]
    }

    fn handle(&self, id: Option<NodeId>) -> Option<TreeNode<'a>> {
        self.tree.get(id?)
    }

    fn child(&self, id: Option<NodeId>, node: Option<&'a Node>) -> Option<TreeNode<'a>> {
        Some(TreeNode { tree: self.tree, id: id?, node: node? })
    }

    /// The id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The subtree rooted at this node.
    pub fn node(&self) -> &'a Node {
        self.node
    }

    /// The variant of this node, without its children.
    pub fn kind(&self) -> NodeKind {
        self.node.kind()
    }

    /// The parent of this node, or [`None`] for the root.
    pub fn parent(&self) -> Option<TreeNode<'a>> {
        self.handle(self.slot().parent)
    }

    /// The other child of this node's parent, if there is one.
    pub fn sibling(&self) -> Option<TreeNode<'a>> {
        let parent = self.tree.slots[self.slot().parent?.0];
        if parent.left == Some(self.id) {
            self.handle(parent.right)
        } else {
            self.handle(parent.left)
        }
    }

    /// The left child: the left operand of an operator, or the input of a function.
    pub fn left(&self) -> Option<TreeNode<'a>> {
        self.child(self.slot().left, self.node.left())
    }

    /// The right child, which only operators have.
    pub fn right(&self) -> Option<TreeNode<'a>> {
        self.child(self.slot().right, self.node.right())
    }

    /// The children of this node, left to right.
    pub fn children(&self) -> impl Iterator<Item = TreeNode<'a>> {
        self.left().into_iter().chain(self.right())
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.slot().left.is_none()
    }

    /// The height of this node: `1` for the root, and one more than its parent's otherwise.
    pub fn height(&self) -> usize {
        self.slot().height
    }

    /// The plain text of this node alone, such as `3x^2`, `+` or `ln(x)`.
    pub fn value(&self) -> String {
        self.node.value()
    }

    /// The LaTeX of this node alone, over the bare variable `x`.
    pub fn latex(&self) -> String {
        self.kind().as_display().to_string()
    }
}

impl PartialEq for TreeNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for TreeNode<'_> {}
