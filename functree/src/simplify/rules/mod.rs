//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the node to simplify as an argument, and
//! returns `Some(node)` with the simplified node if the rule applies, or `None` if the rule does
//! not apply. Rules only look at the node itself and its direct children.

pub mod add;

use crate::{
    node::{Node, Operator},
    step::StepCollector,
};
use super::step::Step;

/// If the node is an addition, calls the given transformation function with the two operands.
///
/// Returns `Some(node)` with the transformed node if a transformation was applied.
pub(crate) fn do_add(node: &Node, f: impl Fn(&Node, &Node) -> Option<Node>) -> Option<Node> {
    if let Node::Operator { op: Operator::Addition, left, right } = node {
        f(&**left, &**right)
    } else {
        None
    }
}

/// Applies all rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    add::all(node, step_collector)
}
