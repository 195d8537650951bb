//! The nodes of a function tree.
//!
//! A [`Node`] is either an [`Operator`] applied to exactly two child nodes, or a [`Function`]
//! applied to at most one child node, its *input*. A function without an input is a leaf, and is
//! evaluated over the bare variable `x`. When a tree is rendered, the rendering of a function's
//! input takes the place of `x` in the function's own template:
//!
//! ```
//! use functree::fmt::Latex;
//! use functree::node::{Function, FunctionKind, Node, Operator};
//!
//! let tree = Node::function(
//!     Function::new(3, FunctionKind::NaturalLog),
//!     Node::operator(
//!         Operator::Division,
//!         Node::leaf(Function::int_monomial(2, 1)),
//!         Node::leaf(Function::constant(3)),
//!     ),
//! );
//! assert_eq!(tree.to_string(), "3ln(2x / 3)");
//! assert_eq!(tree.as_display().to_string(), "3\\ln\\left( {\\frac{ 2x }{ 3 }} \\right)");
//! ```
//!
//! Nodes own their children. Relations pointing up the tree (parent, sibling) are not stored in
//! the nodes; they are looked up through a [`FunctionTree`](crate::tree::FunctionTree).

mod function;
mod iter;
mod operator;

use crate::{
    error::{Error, InvalidNodeCategory, InvalidNodeType},
    fmt::Latex,
};
use std::{fmt, str::FromStr};

pub use function::{Function, FunctionKind, FunctionKindTag, Trig};
pub use iter::NodeIter;
pub use operator::Operator;

/// A node of a function tree, owning its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// An operator combining two child expressions.
    Operator {
        op: Operator,
        left: Box<Node>,
        right: Box<Node>,
    },

    /// A function applied to its input expression, or to `x` if there is no input.
    Function {
        func: Function,
        input: Option<Box<Node>>,
    },
}

impl Node {
    /// Creates a function leaf, evaluated over the bare variable `x`.
    pub fn leaf(func: Function) -> Self {
        Node::Function { func, input: None }
    }

    /// Creates a function node applied to the given input expression.
    pub fn function(func: Function, input: Node) -> Self {
        Node::Function { func, input: Some(Box::new(input)) }
    }

    /// Creates an operator node with the given children.
    pub fn operator(op: Operator, left: Node, right: Node) -> Self {
        Node::Operator { op, left: Box::new(left), right: Box::new(right) }
    }

    /// The variant of this node and its own parameters, without its children.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Operator { op, .. } => NodeKind::Operator(*op),
            Node::Function { func, .. } => NodeKind::Function(*func),
        }
    }

    /// The category of this node.
    pub fn category(&self) -> NodeCategory {
        self.kind().category()
    }

    /// The left child: the left operand of an operator, or the input of a function.
    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::Operator { left, .. } => Some(&**left),
            Node::Function { input, .. } => input.as_deref(),
        }
    }

    /// The right child, which only operators have.
    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::Operator { right, .. } => Some(&**right),
            Node::Function { .. } => None,
        }
    }

    /// The children of this node, left to right.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.left().into_iter().chain(self.right())
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left().is_none()
    }

    /// Returns the plain text of this node alone, such as `3x^2`, `+` or `ln(x)`.
    pub fn value(&self) -> String {
        self.kind().to_string()
    }

    /// Returns an iterator over this node and all of its descendants, in pre-order.
    pub fn iter(&self) -> NodeIter<'_> {
        NodeIter::new(self)
    }

    /// Returns the number of nodes in this subtree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always false; a subtree contains at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Formats the whole subtree as plain text.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Operator { op, left, right } => write!(f, "({} {} {})", left, op, right),
            Node::Function { func, input } => func.fmt_plain_with(f, input.as_deref()),
        }
    }
}

/// Formats the whole subtree as LaTeX.
impl Latex for Node {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Operator { op, left, right } => op.fmt_latex_with(f, &**left, &**right),
            Node::Function { func, input } => func.fmt_latex_with(f, input.as_deref()),
        }
    }
}

/// The variant of a node with its own parameters, but without children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Operator(Operator),
    Function(Function),
}

impl NodeKind {
    /// The category of the node.
    pub fn category(&self) -> NodeCategory {
        match self {
            NodeKind::Operator(_) => NodeCategory::Operator,
            NodeKind::Function(_) => NodeCategory::Function,
        }
    }

    /// The type of the node, without its parameters.
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeKind::Operator(op) => NodeType::Operator(*op),
            NodeKind::Function(func) => NodeType::Function(func.kind().tag()),
        }
    }
}

/// Formats the node alone as plain text.
impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NodeKind::Operator(op) => fmt::Display::fmt(op, f),
            NodeKind::Function(func) => fmt::Display::fmt(func, f),
        }
    }
}

/// Formats the node alone as LaTeX, over the bare variable `x`.
impl Latex for NodeKind {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NodeKind::Operator(op) => op.fmt_latex(f),
            NodeKind::Function(func) => func.fmt_latex(f),
        }
    }
}

/// Whether a node is an operator or a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    Operator,
    Function,
}

impl FromStr for NodeCategory {
    type Err = Error;

    fn from_str(category: &str) -> Result<Self, Self::Err> {
        match category {
            "operator" => Ok(NodeCategory::Operator),
            "function" => Ok(NodeCategory::Function),
            _ => Err(Error::new(vec![], InvalidNodeCategory { category: category.to_string() })),
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NodeCategory::Operator => write!(f, "operator"),
            NodeCategory::Function => write!(f, "function"),
        }
    }
}

/// The type of a node: an operator, or the tag of a function variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Operator(Operator),
    Function(FunctionKindTag),
}

impl NodeType {
    /// The category of the node type.
    pub fn category(self) -> NodeCategory {
        match self {
            NodeType::Operator(_) => NodeCategory::Operator,
            NodeType::Function(_) => NodeCategory::Function,
        }
    }
}

impl FromStr for NodeType {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        if let Ok(op) = tag.parse() {
            Ok(NodeType::Operator(op))
        } else if let Ok(kind) = tag.parse() {
            Ok(NodeType::Function(kind))
        } else {
            Err(Error::new(vec![], InvalidNodeType { tag: tag.to_string() }))
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NodeType::Operator(op) => write!(f, "{}", op.tag()),
            NodeType::Function(kind) => write!(f, "{}", kind.tag()),
        }
    }
}

/// Resolves a tag such as `ADDITION` or `NATURAL LOG` to a node type.
pub fn node_type(tag: &str) -> Result<NodeType, Error> {
    tag.parse()
}
