//! Simplification of function trees.
//!
//! Only additions are reduced: the sum of two constants becomes a single constant, and the sum of
//! two identical monomials becomes one monomial with the summed coefficient. See [`rules`] for
//! the individual rules.
//!
//! [`simplify`] looks at a single node. A function node is already as simple as it gets, and an
//! addition no rule applies to is returned unchanged. Subtraction, multiplication and division
//! have no rules, which is reported as [`None`] rather than as an error.
//!
//! [`simplify_tree`] applies the rules to every operator of a tree, from the leaves up.

pub mod rules;
pub mod step;

use crate::{
    node::{Node, Operator},
    step::StepCollector,
};
use step::Step;
use tracing::debug;

/// Applies the rules to the given node, logging the rewrite if one happened.
fn apply_rules(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let simplified = rules::all(node, step_collector)?;
    debug!(before = %node, after = %simplified, "simplified node");
    Some(simplified)
}

/// Simplifies the given node, pushing the applied steps to `step_collector`.
///
/// See [`simplify`].
pub fn simplify_with(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    match node {
        Node::Function { .. } => Some(node.clone()),
        Node::Operator { op: Operator::Addition, .. } => {
            Some(apply_rules(node, step_collector).unwrap_or_else(|| node.clone()))
        },
        Node::Operator { op: Operator::Subtraction | Operator::Multiplication | Operator::Division, .. } => None,
    }
}

/// Simplifies the given node.
///
/// - A function node is returned unchanged.
/// - An addition is reduced if a rule applies, and returned unchanged otherwise.
/// - Subtraction, multiplication and division cannot be simplified and return [`None`].
///
/// Only the node and its direct children are considered. Applying [`simplify`] to its own result
/// returns the same result.
pub fn simplify(node: &Node) -> Option<Node> {
    simplify_with(node, &mut ())
}

/// Simplifies the given node, returning the steps that were applied.
pub fn simplify_with_steps(node: &Node) -> (Option<Node>, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = simplify_with(node, &mut steps);
    (simplified, steps)
}

/// Simplifies every operator of the given tree, from the leaves up, pushing the applied steps to
/// `step_collector`.
pub fn simplify_tree_with(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    let node = match node {
        Node::Operator { op, left, right } => Node::operator(
            *op,
            simplify_tree_with(left, step_collector),
            simplify_tree_with(right, step_collector),
        ),
        Node::Function { func, input } => Node::Function {
            func: *func,
            input: input.as_ref().map(|input| Box::new(simplify_tree_with(input, step_collector))),
        },
    };

    apply_rules(&node, step_collector).unwrap_or(node)
}

/// Simplifies every operator of the given tree, from the leaves up.
pub fn simplify_tree(node: &Node) -> Node {
    simplify_tree_with(node, &mut ())
}

/// Simplifies every operator of the given tree, from the leaves up, returning the steps that were
/// applied.
pub fn simplify_tree_with_steps(node: &Node) -> (Node, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = simplify_tree_with(node, &mut steps);
    (simplified, steps)
}
